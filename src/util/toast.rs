//! Toast display helpers over the shared `ToastState` signal.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use leptos::prelude::*;

use crate::state::toast::{ToastSeverity, ToastState};

/// Milliseconds since the epoch; zero outside the browser.
pub fn now_ms() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}

/// Stack a toast and schedule its removal after the toast lifetime.
pub fn show_toast(toasts: RwSignal<ToastState>, message: impl Into<String>, severity: ToastSeverity) -> u64 {
    let message = message.into();
    match severity {
        ToastSeverity::Error => leptos::logging::error!("{message}"),
        ToastSeverity::Warning => leptos::logging::warn!("{message}"),
        ToastSeverity::Info | ToastSeverity::Success => {}
    }
    let mut id = 0;
    toasts.update(|state| id = state.push(message, severity, now_ms()));

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let lifetime = std::time::Duration::from_millis(crate::config::TOAST_DURATION_MS as u64);
        gloo_timers::future::sleep(lifetime).await;
        expire_toast(toasts, id);
    });

    id
}

/// Timer callback: the toast goes by id, whatever the clock reads by then.
pub fn expire_toast(toasts: RwSignal<ToastState>, id: u64) {
    toasts.try_update(|state| state.dismiss(id));
}

/// Context-provided toast signal.
pub fn use_toasts() -> RwSignal<ToastState> {
    expect_context::<RwSignal<ToastState>>()
}
