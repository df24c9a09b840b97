//! Auth-state-change subscription registry.
//!
//! The auth client emits events as sessions appear, refresh, or go away;
//! page-level code subscribes once and reacts (navbar identity, private-route
//! eviction). Subscriptions live for the lifetime of the page.

#[cfg(test)]
#[path = "auth_events_test.rs"]
mod auth_events_test;

use std::cell::RefCell;
use std::rc::Rc;

use crate::net::types::Session;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthEvent {
    SignedIn,
    SignedOut,
    TokenRefreshed,
    PasswordRecovery,
    UserUpdated,
}

type Listener = Rc<dyn Fn(AuthEvent, Option<&Session>)>;

thread_local! {
    static LISTENERS: RefCell<Vec<Listener>> = const { RefCell::new(Vec::new()) };
}

/// Register `callback` for every subsequent auth event.
pub fn on_auth_state_change<F>(callback: F)
where
    F: Fn(AuthEvent, Option<&Session>) + 'static,
{
    LISTENERS.with(|listeners| listeners.borrow_mut().push(Rc::new(callback)));
}

/// Deliver `event` to all listeners in registration order.
pub fn emit_auth_event(event: AuthEvent, session: Option<&Session>) {
    // Snapshot first so listeners may subscribe while being notified.
    let snapshot = LISTENERS.with(|listeners| listeners.borrow().clone());
    for listener in snapshot {
        listener(event, session);
    }
}
