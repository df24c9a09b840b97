//! Trailing-edge debounce.
//!
//! DESIGN
//! ======
//! Every call arms a new generation ticket and sleeps; only the sleeper
//! whose ticket is still current when it wakes runs the wrapped function.
//! Earlier timers are not cancelled, they simply find themselves stale.
//! Off-WASM there is no timer, so the wrapped function runs immediately.

#[cfg(test)]
#[path = "debounce_test.rs"]
mod debounce_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Generation counter shared by all pending calls of one debounced function.
#[derive(Clone, Debug, Default)]
pub struct DebounceGate {
    generation: Arc<AtomicU64>,
}

impl DebounceGate {
    /// Supersede every earlier ticket and return a fresh one.
    pub fn arm(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::Relaxed) + 1
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.generation.load(Ordering::Relaxed) == ticket
    }

    /// Make every outstanding ticket stale.
    pub fn cancel(&self) {
        self.generation.fetch_add(1, Ordering::Relaxed);
    }
}

/// Wrap `f` so a burst of calls runs it once, `delay` after the last call,
/// with that last call's argument.
pub fn debounce<T, F>(delay: Duration, f: F) -> impl Fn(T) + Clone + Send + Sync + 'static
where
    T: 'static,
    F: Fn(T) + Clone + Send + Sync + 'static,
{
    let gate = DebounceGate::default();
    move |arg: T| {
        let ticket = gate.arm();
        #[cfg(feature = "hydrate")]
        {
            let gate = gate.clone();
            let f = f.clone();
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(delay).await;
                if gate.is_current(ticket) {
                    f(arg);
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = delay;
            if gate.is_current(ticket) {
                f(arg);
            }
        }
    }
}
