//! Fixed-position toast stack.
//!
//! The container only exists while at least one toast is showing.

use leptos::prelude::*;

use crate::util::toast::use_toasts;

#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = use_toasts();

    view! {
        <Show when=move || !toasts.get().is_empty()>
            <div id="toast-container" class="toast-container" role="status" aria-live="polite">
                {move || {
                    toasts
                        .get()
                        .toasts
                        .into_iter()
                        .map(|toast| {
                            let id = toast.id;
                            view! {
                                <div class=toast.severity.css_class()>
                                    <span class="toast__icon" aria-hidden="true">{toast.severity.icon()}</span>
                                    <span class="toast__message">{toast.message}</span>
                                    <button
                                        class="toast__close"
                                        aria-label="Dismiss"
                                        on:click=move |_| toasts.update(|s| s.dismiss(id))
                                    >
                                        "✕"
                                    </button>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </Show>
    }
}
