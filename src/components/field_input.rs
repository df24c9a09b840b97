//! Labelled text input with an inline validation annotation.
//!
//! DESIGN
//! ======
//! The component is display-only: the owner supplies the value, the current
//! annotation, and an edit callback. `annotated_edit` builds the usual
//! callback: store the value, drop the annotation at once, re-check after the
//! debounce window.

use std::time::Duration;

use leptos::prelude::*;

use crate::config::REVALIDATE_DEBOUNCE_MS;
use crate::util::debounce::debounce;
use crate::util::validation::{FieldErrors, FieldKind, FieldSpec};

pub fn input_type(kind: FieldKind) -> &'static str {
    match kind {
        FieldKind::Text => "text",
        FieldKind::Email => "email",
        FieldKind::Password => "password",
    }
}

/// Edit callback for a field whose value and annotations live in their own
/// signals.
pub fn annotated_edit(spec: FieldSpec, value: RwSignal<String>, errors: RwSignal<FieldErrors>) -> Callback<String> {
    let revalidate = debounce(Duration::from_millis(REVALIDATE_DEBOUNCE_MS), move |()| {
        let current = value.get_untracked();
        errors.update(|e| {
            e.check(&spec, &current);
        });
    });
    Callback::new(move |next: String| {
        value.set(next);
        errors.update(|e| e.clear(spec.name));
        revalidate(());
    })
}

#[component]
pub fn FieldInput(
    spec: FieldSpec,
    label: &'static str,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] error: Signal<Option<String>>,
    on_input: Callback<String>,
    #[prop(optional)] placeholder: &'static str,
    #[prop(optional)] multiline: bool,
) -> impl IntoView {
    let id = format!("field-{}", spec.name);
    let control = if multiline {
        view! {
            <textarea
                id=id.clone()
                name=spec.name
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            ></textarea>
        }
        .into_any()
    } else {
        view! {
            <input
                id=id.clone()
                name=spec.name
                type=input_type(spec.kind)
                placeholder=placeholder
                required=spec.required
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        }
        .into_any()
    };

    view! {
        <div class="form-group" class:has-error=move || error.get().is_some()>
            <label for=id>{label}</label>
            {control}
            <Show when=move || error.get().is_some()>
                <span class="error-message">{move || error.get().unwrap_or_default()}</span>
            </Show>
        </div>
    }
}
