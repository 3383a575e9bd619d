//! Lead capture forms
//!
//! Both variants run through [`ContactFormState`] and submit to `POST /api/leads`.

use leptos::prelude::*;
use leptos::task::spawn_local;
use std::time::Duration;

use crate::core::contact_form::{ContactFormState, FAILURE_DISPLAY, FormPhase, FormVariant};
use crate::core::lead::{LeadField, LeadReceipt, LeadSubmission};
use crate::ui::common::{BaseModal, ErrorMessage, FormField, SuccessMessage, TextAreaField};
use crate::ui::icon::{Icon, icons};

#[cfg(not(feature = "ssr"))]
const LEADS_ENDPOINT: &str = "/api/leads";

/// Why a lead could not be delivered
#[derive(Debug, Clone, thiserror::Error)]
pub enum SubmitError {
    #[error("{0}")]
    Rejected(String),
    #[error("Network error. Please try again.")]
    Network,
}

#[cfg(not(feature = "ssr"))]
#[derive(serde::Deserialize)]
struct ErrorBody {
    error: String,
}

/// Send a validated lead to the server
#[cfg(not(feature = "ssr"))]
pub async fn post_lead(lead: &LeadSubmission) -> Result<LeadReceipt, SubmitError> {
    use gloo_net::http::Request;

    let request = Request::post(LEADS_ENDPOINT)
        .header("Content-Type", "application/json")
        .json(lead)
        .map_err(|_| SubmitError::Network)?;

    let response = request.send().await.map_err(|_| SubmitError::Network)?;

    if response.ok() {
        response
            .json::<LeadReceipt>()
            .await
            .map_err(|_| SubmitError::Rejected("Unexpected response from server".to_string()))
    } else {
        let message = response
            .json::<ErrorBody>()
            .await
            .map(|body| body.error)
            .unwrap_or_else(|_| format!("Request failed with status {}", response.status()));
        Err(SubmitError::Rejected(message))
    }
}

#[cfg(feature = "ssr")]
pub async fn post_lead(_lead: &LeadSubmission) -> Result<LeadReceipt, SubmitError> {
    Err(SubmitError::Network)
}

fn field_label(field: LeadField) -> &'static str {
    match field {
        LeadField::Name => "Your Name",
        LeadField::Email => "Email",
        LeadField::Company => "Company",
        LeadField::Phone => "Phone",
        LeadField::Country => "Country",
        LeadField::Message => "Message",
        LeadField::Product => "Product",
    }
}

fn field_input_type(field: LeadField) -> &'static str {
    match field {
        LeadField::Email => "email",
        LeadField::Phone => "tel",
        _ => "text",
    }
}

fn is_required(field: LeadField) -> bool {
    matches!(field, LeadField::Name | LeadField::Email | LeadField::Message)
}

fn field_name(field: LeadField) -> &'static str {
    match field {
        LeadField::Name => "name",
        LeadField::Email => "email",
        LeadField::Company => "company",
        LeadField::Phone => "phone",
        LeadField::Country => "country",
        LeadField::Message => "message",
        LeadField::Product => "product",
    }
}

/// Hide the success or failure banner, then notify the owner if it is still mounted.
/// Returns false when the form was already disposed.
fn dismiss_banner(
    form: RwSignal<ContactFormState>,
    dismiss: fn(&mut ContactFormState),
    on_done: Option<Callback<()>>,
) -> bool {
    if form.try_update(dismiss).is_none() {
        return false;
    }
    if let Some(on_done) = on_done {
        on_done.try_run(());
    }
    true
}

/// Contact form in either variant
#[component]
pub fn ContactForm(
    variant: FormVariant,
    /// Product the inquiry refers to, if any
    #[prop(optional, into)]
    product: Option<Signal<Option<String>>>,
    /// Called after the success indicator has been hidden
    #[prop(optional, into)]
    on_done: Option<Callback<()>>,
) -> impl IntoView {
    let form = RwSignal::new(ContactFormState::new(variant));

    let submitting = Signal::derive(move || form.with(|f| f.is_submitting()));
    let success = Signal::derive(move || {
        form.with(|f| {
            (f.phase() == &FormPhase::Succeeded)
                .then(|| "Thank you! We'll get back to you soon.".to_string())
        })
    });
    let failure = Signal::derive(move || {
        form.with(|f| match f.phase() {
            FormPhase::Failed(message) => Some(message.clone()),
            _ => None,
        })
    });

    // Pending banner dismissal; cleared with the view so it never outlives `on_done`
    let banner_timer: StoredValue<Option<TimeoutHandle>> = StoredValue::new(None);
    let schedule_dismissal = move |after: Duration, dismiss: fn(&mut ContactFormState), notify: bool| {
        let armed = set_timeout_with_handle(
            move || {
                dismiss_banner(form, dismiss, notify.then_some(on_done).flatten());
            },
            after,
        );
        match armed {
            Ok(handle) => {
                let previous = banner_timer.try_update_value(|slot| slot.replace(handle));
                match previous {
                    Some(Some(previous)) => previous.clear(),
                    Some(None) => {}
                    // View already gone
                    None => handle.clear(),
                }
            }
            Err(e) => leptos::logging::error!("failed to schedule form reset: {:?}", e),
        }
    };
    on_cleanup(move || {
        if let Some(Some(handle)) = banner_timer.try_update_value(Option::take) {
            handle.clear();
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        if let Some(product) = product.and_then(|p| p.get_untracked()) {
            form.update(|f| f.set(LeadField::Product, product));
        }

        // Invalid or duplicate submits never reach the network
        let Some(Ok(lead)) = form.try_update(|f| f.begin_submit()) else {
            return;
        };

        spawn_local(async move {
            let result = post_lead(&lead).await;
            if let Err(e) = &result {
                leptos::logging::error!("lead submission failed: {}", e);
            }
            let succeeded = result.is_ok();
            let outcome = result.map(|_| ()).map_err(|e| e.to_string());

            // The form may have been unmounted while the request was in flight
            if form.try_update(|f| f.finish_submit(outcome)).is_none() {
                return;
            }

            if succeeded {
                schedule_dismissal(variant.success_display(), ContactFormState::clear_after_success, true);
            } else {
                schedule_dismissal(FAILURE_DISPLAY, ContactFormState::clear_failure, false);
            }
        });
    };

    let fields = variant
        .fields()
        .iter()
        .copied()
        .map(|field| {
            let value = Signal::derive(move || form.with(|f| f.value(field).to_string()));
            let on_input = Callback::new(move |v: String| form.update(|f| f.set(field, v)));
            let error = Signal::derive(move || form.with(|f| f.error(field).map(str::to_string)));

            if field == LeadField::Message {
                view! {
                    <TextAreaField
                        label=field_label(field).to_string()
                        name=field_name(field)
                        required=true
                        placeholder="Tell us about your requirements".to_string()
                        value=value
                        on_input=on_input
                        disabled=submitting
                        error=error
                    />
                }
                .into_any()
            } else {
                view! {
                    <FormField
                        label=field_label(field).to_string()
                        name=field_name(field)
                        required=is_required(field)
                        input_type=field_input_type(field)
                        value=value
                        on_input=on_input
                        disabled=submitting
                        error=error
                    />
                }
                .into_any()
            }
        })
        .collect_view();

    let form_class = match variant {
        FormVariant::Inline => "contact-form contact-form-inline",
        FormVariant::Modal => "contact-form contact-form-compact",
    };

    view! {
        <form class=form_class on:submit=on_submit novalidate=true>
            {fields}

            <ErrorMessage error=failure/>
            <SuccessMessage message=success/>

            <button
                type="submit"
                class="btn-primary"
                disabled=move || submitting.get() || success.get().is_some()
            >
                {move || {
                    if submitting.get() {
                        view! {
                            <Icon name=icons::LOADER class="icon-text animate-spin"/>
                            <span>"Sending..."</span>
                        }
                        .into_any()
                    } else if success.get().is_some() {
                        view! {
                            <Icon name=icons::CHECK class="icon-text"/>
                            <span>"Sent"</span>
                        }
                        .into_any()
                    } else {
                        view! {
                            <Icon name=icons::SEND class="icon-text"/>
                            <span>"Send Message"</span>
                        }
                        .into_any()
                    }
                }}
            </button>
        </form>
    }
}

/// Button that opens the compact form in a dialog
#[component]
pub fn ContactFormModal(
    /// Button label
    #[prop(default = "Get in Touch")]
    label: &'static str,
    /// Product the inquiry refers to, if any
    #[prop(optional, into)]
    product: Option<Signal<Option<String>>>,
) -> impl IntoView {
    let is_open = RwSignal::new(false);
    let close = Callback::new(move |_: ()| is_open.set(false));

    view! {
        <button type="button" class="btn-primary" on:click=move |_| is_open.set(true)>
            {label}
            <Icon name=icons::ARROW_UP_RIGHT class="icon-text"/>
        </button>
        <BaseModal
            title="Send an inquiry".to_string()
            subtitle="We usually reply within one business day.".to_string()
            is_open=is_open.into()
            on_close=close
        >
            {match product {
                Some(product) => view! {
                    <ContactForm variant=FormVariant::Modal product=product on_done=close/>
                }
                .into_any(),
                None => view! {
                    <ContactForm variant=FormVariant::Modal on_done=close/>
                }
                .into_any(),
            }}
        </BaseModal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn failed_form() -> RwSignal<ContactFormState> {
        let mut state = ContactFormState::new(FormVariant::Inline);
        state.set(LeadField::Name, "Dana".to_string());
        state.set(LeadField::Email, "dana@example.com".to_string());
        state.set(LeadField::Message, "Do you ship rugs abroad?".to_string());
        assert!(state.begin_submit().is_ok());
        state.finish_submit(Err("Network error. Please try again.".to_string()));
        RwSignal::new(state)
    }

    #[test]
    fn test_dismiss_banner_while_mounted() {
        let owner = Owner::new();
        owner.with(|| {
            let calls = Arc::new(AtomicUsize::new(0));
            let counter = Arc::clone(&calls);
            let on_done = Callback::new(move |_: ()| {
                counter.fetch_add(1, Ordering::SeqCst);
            });
            let form = failed_form();

            assert!(dismiss_banner(form, ContactFormState::clear_failure, Some(on_done)));
            assert_eq!(form.with_untracked(|f| f.phase().clone()), FormPhase::Editing);
            assert_eq!(form.with_untracked(|f| f.value(LeadField::Name).to_string()), "Dana");
            assert_eq!(calls.load(Ordering::SeqCst), 1);
        });
    }

    #[test]
    fn test_dismiss_banner_after_unmount_is_noop() {
        let owner = Owner::new();
        let calls = Arc::new(AtomicUsize::new(0));
        let (form, on_done) = owner.with(|| {
            let counter = Arc::clone(&calls);
            let on_done = Callback::new(move |_: ()| {
                counter.fetch_add(1, Ordering::SeqCst);
            });
            (failed_form(), on_done)
        });
        owner.cleanup();

        assert!(!dismiss_banner(form, ContactFormState::clear_failure, Some(on_done)));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }
}
