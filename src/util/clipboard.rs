//! Best-effort clipboard copy with toast feedback.

#[cfg(test)]
#[path = "clipboard_test.rs"]
mod clipboard_test;

use leptos::prelude::*;

use crate::state::toast::{ToastSeverity, ToastState};
use crate::util::toast::show_toast;

pub const COPIED_MESSAGE: &str = "Copied to clipboard!";
pub const COPY_FAILED_MESSAGE: &str = "Could not copy to clipboard.";

/// Copy `text` and report the outcome as a toast.
pub fn copy_to_clipboard(text: String, toasts: RwSignal<ToastState>) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match write_text(&text).await {
            Ok(()) => {
                show_toast(toasts, COPIED_MESSAGE, ToastSeverity::Success);
            }
            Err(e) => {
                leptos::logging::error!("clipboard write failed: {e}");
                show_toast(toasts, COPY_FAILED_MESSAGE, ToastSeverity::Error);
            }
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = text;
        show_toast(toasts, COPY_FAILED_MESSAGE, ToastSeverity::Error);
    }
}

#[cfg(feature = "hydrate")]
async fn write_text(text: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("no window")?;
    let promise = window.navigator().clipboard().write_text(text);
    wasm_bindgen_futures::JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|e| format!("{e:?}"))
}
