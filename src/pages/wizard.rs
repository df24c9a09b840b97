//! Five-step project-creation wizard.
//!
//! SYSTEM CONTEXT
//! ==============
//! All state lives in one `RwSignal<WizardState>`; this module maps it to
//! markup and wires buttons to its transitions. The finish button runs the
//! submission pipeline from `util::submit` with the live data client and
//! webhook.
//!
//! ERROR HANDLING
//! ==============
//! Rule failures surface as warning toasts. A failed insert hides the
//! overlay and raises a blocking alert; webhook failures are only logged.

#[cfg(test)]
#[path = "wizard_test.rs"]
mod wizard_test;

use std::time::Duration;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::field_input::FieldInput;
use crate::components::nav_bar::NavBar;
use crate::components::progress_bar::ProgressBar;
use crate::components::selection_cards::{PalettePicker, SelectionCards};
use crate::config::{AppConfig, REVALIDATE_DEBOUNCE_MS};
use crate::state::auth::AuthState;
use crate::state::toast::{ToastSeverity, ToastState};
use crate::state::wizard::{DETAILS_STEP, FEATURES_STEP, PAGES_STEP, STYLE_STEP, StepRejection, TYPE_STEP, WizardState};
use crate::util::auth::install_unauth_redirect;
use crate::util::debounce::debounce;
use crate::util::selection::{CardCategory, FEATURES, HOME_PAGE, SITE_TYPES, STYLES, page_label};
use crate::util::submit::prepare_submission;
use crate::util::toast::{show_toast, use_toasts};
use crate::util::validation::{FieldSpec, PROJECT_DESCRIPTION_FIELD, PROJECT_NAME_FIELD};

/// Edit callback for a wizard text field: eager clear, debounced re-check.
fn wizard_edit(spec: FieldSpec, wizard: RwSignal<WizardState>) -> Callback<String> {
    let revalidate = debounce(Duration::from_millis(REVALIDATE_DEBOUNCE_MS), move |()| {
        wizard.update(|w| {
            let value = w.form.text_value(spec.name).to_owned();
            w.errors.check(&spec, &value);
        });
    });
    Callback::new(move |value: String| {
        wizard.update(|w| w.set_text(spec.name, value));
        revalidate(());
    })
}

/// One warning toast per broken rule.
fn report_rejection(toasts: RwSignal<ToastState>, rejection: StepRejection) {
    for warning in rejection.warnings {
        show_toast(toasts, warning, ToastSeverity::Warning);
    }
}

/// Move forward, or explain why not.
pub fn advance(wizard: RwSignal<WizardState>, toasts: RwSignal<ToastState>) {
    let mut outcome = Ok(());
    wizard.update(|w| outcome = w.next());
    if let Err(rejection) = outcome {
        report_rejection(toasts, rejection);
    }
}

#[component]
pub fn WizardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let config = expect_context::<AppConfig>();
    let toasts = use_toasts();
    let wizard = RwSignal::new(WizardState::default());

    install_unauth_redirect(auth, use_navigate());

    let on_finish = move |_| {
        if wizard.with_untracked(|w| w.submitting) {
            return;
        }
        let mut prepared = None;
        wizard.update(|w| prepared = Some(prepare_submission(w)));
        match prepared {
            Some(Ok(project)) => {
                wizard.update(|w| w.submitting = true);
                submit(config.clone(), project, wizard);
            }
            Some(Err(rejection)) => report_rejection(toasts, rejection),
            None => {}
        }
    };

    let step_is = move |step: usize| wizard.with(|w| w.step() == step);

    view! {
        <NavBar/>
        <main class="wizard-page">
            <ProgressBar wizard=wizard/>

            <section class="wizard-step" class:active=move || step_is(DETAILS_STEP)>
                <h2>"Tell us about your project"</h2>
                <FieldInput
                    spec=PROJECT_NAME_FIELD
                    label="Project name"
                    placeholder="My new site"
                    value=Signal::derive(move || wizard.with(|w| w.form.name.clone()))
                    error=Signal::derive(move || wizard.with(|w| w.errors.message("name")))
                    on_input=wizard_edit(PROJECT_NAME_FIELD, wizard)
                />
                <FieldInput
                    spec=PROJECT_DESCRIPTION_FIELD
                    label="Description"
                    multiline=true
                    value=Signal::derive(move || wizard.with(|w| w.form.description.clone()))
                    error=Signal::derive(move || wizard.with(|w| w.errors.message("description")))
                    on_input=wizard_edit(PROJECT_DESCRIPTION_FIELD, wizard)
                />
            </section>

            <section class="wizard-step" class:active=move || step_is(TYPE_STEP)>
                <h2>"What kind of site?"</h2>
                <SelectionCards wizard=wizard category=CardCategory::Type options=&SITE_TYPES/>
            </section>

            <section class="wizard-step" class:active=move || step_is(STYLE_STEP)>
                <h2>"Pick a style"</h2>
                <SelectionCards wizard=wizard category=CardCategory::Style options=&STYLES/>
                <h3>"Color palette"</h3>
                <PalettePicker wizard=wizard/>
            </section>

            <section class="wizard-step" class:active=move || step_is(FEATURES_STEP)>
                <h2>"Features"</h2>
                <div class="checkbox-grid">
                    {FEATURES
                        .iter()
                        .map(|feature| {
                            let value = feature.value;
                            view! {
                                <label class="checkbox-option">
                                    <input
                                        type="checkbox"
                                        name="features"
                                        value=value
                                        prop:checked=move || wizard.with(|w| w.form.features.contains(value))
                                        on:change=move |ev| {
                                            let checked = event_target_checked(&ev);
                                            wizard.update(|w| w.set_feature(value, checked));
                                        }
                                    />
                                    <span>{feature.label}</span>
                                </label>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="wizard-step" class:active=move || step_is(PAGES_STEP)>
                <h2>"Pages"</h2>
                <div class="checkbox-grid">
                    {move || {
                        wizard
                            .with(|w| w.suggested_pages.clone())
                            .into_iter()
                            .map(|page| {
                                let is_home = page == HOME_PAGE;
                                let label = page_label(&page);
                                let key = page.clone();
                                let value = page.clone();
                                view! {
                                    <label class="checkbox-option" class:locked=is_home>
                                        <input
                                            type="checkbox"
                                            name="pages"
                                            value=value
                                            disabled=is_home
                                            prop:checked=move || wizard.with(|w| w.form.pages.contains(&page))
                                            on:change=move |ev| {
                                                let checked = event_target_checked(&ev);
                                                wizard.update(|w| w.set_page(&key, checked));
                                            }
                                        />
                                        <span>{label}</span>
                                    </label>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </section>

            <nav class="wizard-controls">
                <Show when=move || wizard.with(|w| w.controls().show_prev)>
                    <button class="btn btn-secondary" type="button" on:click=move |_| wizard.update(WizardState::prev)>
                        "Back"
                    </button>
                </Show>
                <Show when=move || wizard.with(|w| w.controls().show_next)>
                    <button class="btn btn-primary" type="button" on:click=move |_| advance(wizard, toasts)>
                        "Next"
                    </button>
                </Show>
                <Show when=move || wizard.with(|w| w.controls().show_finish)>
                    <button
                        class="btn btn-primary"
                        type="button"
                        disabled=move || wizard.with(|w| w.submitting)
                        on:click=on_finish.clone()
                    >
                        "Generate my site"
                    </button>
                </Show>
            </nav>
        </main>

        <Show when=move || wizard.with(|w| w.submitting)>
            <div class="loading-overlay" role="alert" aria-busy="true">
                <div class="spinner"></div>
                <p>"Creating your project..."</p>
            </div>
        </Show>
    }
}

/// Persist, notify, then leave for the dashboard; on failure drop the
/// overlay and alert.
fn submit(config: AppConfig, project: crate::net::types::ProjectConfig, wizard: RwSignal<WizardState>) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        use crate::net::data::DataClient;
        use crate::net::webhook::HttpWebhook;
        use crate::util::submit::{PERSISTENCE_ALERT, persist_and_notify};

        let auth_client = crate::net::auth::AuthClient::new(config.clone());
        let Some(session) = auth_client.get_session().await else {
            wizard.update(|w| w.submitting = false);
            crate::util::auth::redirect_to(crate::config::paths::LOGIN);
            return;
        };
        let sink = DataClient::new(config.clone(), session.access_token.clone());
        let notifier = HttpWebhook::new(config.webhook_url.clone());
        match persist_and_notify(&sink, &notifier, &session.user.id, &project, chrono::Utc::now()).await {
            Ok(outcome) => {
                gloo_timers::future::sleep(outcome.redirect.after).await;
                crate::util::auth::redirect_to(outcome.redirect.path);
            }
            Err(_) => {
                wizard.update(|w| w.submitting = false);
                if let Some(window) = web_sys::window() {
                    let _ = window.alert_with_message(PERSISTENCE_ALERT);
                }
            }
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, project);
        wizard.update(|w| w.submitting = false);
    }
}
