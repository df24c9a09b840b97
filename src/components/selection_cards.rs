//! Card grids and swatches bound to the wizard config.

use leptos::prelude::*;

use crate::state::wizard::WizardState;
use crate::util::selection::{CardCategory, PALETTES, SelectOption, is_selected, select_card, select_palette};

/// Exclusive card group writing into one config field.
#[component]
pub fn SelectionCards(
    wizard: RwSignal<WizardState>,
    category: CardCategory,
    options: &'static [SelectOption],
) -> impl IntoView {
    view! {
        <div class="selection-grid" data-category=category.as_str()>
            {options
                .iter()
                .map(|option| {
                    let value = option.value;
                    view! {
                        <button
                            type="button"
                            class="selection-card"
                            class:selected=move || wizard.with(|w| is_selected(w, category, value))
                            data-value=value
                            on:click=move |_| wizard.update(|w| select_card(w, category, value))
                        >
                            <span class="selection-card__label">{option.label}</span>
                            <span class="selection-card__hint">{option.hint}</span>
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn PalettePicker(wizard: RwSignal<WizardState>) -> impl IntoView {
    view! {
        <div class="palette-grid">
            {PALETTES
                .iter()
                .map(|(name, colors)| {
                    let name = *name;
                    view! {
                        <button
                            type="button"
                            class="palette-option"
                            class:selected=move || wizard.with(|w| w.config.palette == name)
                            data-value=name
                            on:click=move |_| wizard.update(|w| select_palette(w, name))
                        >
                            {colors
                                .iter()
                                .map(|color| {
                                    view! { <span class="palette-swatch" style=format!("background:{color}")></span> }
                                })
                                .collect_view()}
                            <span class="palette-option__name">{name}</span>
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
