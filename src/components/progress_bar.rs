//! Wizard progress markers.

use leptos::prelude::*;

use crate::state::wizard::WizardState;

pub const STEP_TITLES: [&str; 5] = ["Details", "Type", "Style", "Features", "Pages"];

#[component]
pub fn ProgressBar(wizard: RwSignal<WizardState>) -> impl IntoView {
    let total = wizard.with_untracked(WizardState::total_steps);

    view! {
        <ol class="wizard-progress">
            {(1..=total)
                .map(|index| {
                    let title = STEP_TITLES.get(index - 1).copied().unwrap_or_default();
                    view! {
                        <li class=move || wizard.with(|w| w.step_status(index).css_class())>
                            <span class="progress-step__index">{index}</span>
                            <span class="progress-step__title">{title}</span>
                        </li>
                    }
                })
                .collect_view()}
        </ol>
    }
}
