//! Enquiry form section.
//!
//! All submit-lifecycle rules live in [`crate::form::LeadForm`]; this
//! component only mirrors that state into the DOM. The disabled inputs during
//! a submission are reinforcement — the controller's guard is what actually
//! prevents a second in-flight request.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::api;
use crate::form::{CAR_MODELS, Field, LeadForm, MODEL_PLACEHOLDER, SubmitState};

#[component]
pub fn LeadCaptureSection() -> impl IntoView {
    let form = RwSignal::new(LeadForm::new());

    view! {
        <div class="form-section" id="enquiry">
            <div class="form-card">
                <h3 class="form-heading">"REGISTER YOUR INTEREST"</h3>
                // The form unmounts for good once the submission succeeds.
                <Show when=move || form.with(|f| f.state() != SubmitState::Succeeded)>
                    <EnquiryForm form=form />
                </Show>
                <p class="form-disclaimer">
                    "*Disclaimer: By clicking 'Submit', you have agreed to our Terms and Conditions."
                </p>
            </div>
        </div>
    }
}

#[component]
fn EnquiryForm(form: RwSignal<LeadForm>) -> impl IntoView {
    let navigate = use_navigate();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        // None: validation errors are now showing, or a request is already
        // in flight. Either way nothing goes over the wire.
        let Some(lead) = form.try_update(|f| f.begin_submit()).flatten() else {
            return;
        };
        let navigate = navigate.clone();
        spawn_local(async move {
            let outcome = api::submit_lead(&lead).await;
            let Some(message) = form.try_update(|f| f.finish_submit(outcome)) else {
                return;
            };
            match message {
                None => navigate("/thank-you", Default::default()),
                Some(message) => {
                    if let Some(window) = web_sys::window() {
                        let _ = window.alert_with_message(&message);
                    }
                    form.update(|f| f.acknowledge_failure());
                }
            }
        });
    };

    view! {
        <form class="lead-form" on:submit=on_submit>
            <div class="form-row">
                <LeadInput form=form field=Field::Name input_type="text" placeholder="Name" />
                <LeadInput
                    form=form
                    field=Field::Mobile
                    input_type="text"
                    placeholder="Mobile Number"
                />
            </div>
            <div class="form-row">
                <LeadInput
                    form=form
                    field=Field::Email
                    input_type="email"
                    placeholder="Email (optional)"
                />
                <ModelSelect form=form />
            </div>
            <button type="submit" class="form-submit">
                {move || {
                    if form.with(|f| f.is_submitting()) {
                        view! {
                            <span class="btn-spinner"></span>
                            "Submitting..."
                        }
                            .into_any()
                    } else {
                        view! { "Submit" }.into_any()
                    }
                }}
            </button>
        </form>
    }
}

#[component]
fn LeadInput(
    form: RwSignal<LeadForm>,
    field: Field,
    input_type: &'static str,
    placeholder: &'static str,
) -> impl IntoView {
    view! {
        <div class="form-field">
            <input
                type=input_type
                placeholder=placeholder
                class="form-input"
                prop:value=move || form.with(|f| f.lead().value(field).to_owned())
                prop:disabled=move || form.with(|f| f.is_submitting())
                on:input=move |ev| form.update(|f| f.set_field(field, &event_target_value(&ev)))
            />
            <FieldError form=form field=field />
        </div>
    }
}

#[component]
fn ModelSelect(form: RwSignal<LeadForm>) -> impl IntoView {
    // An untouched lead has an empty model; keep the select parked on the
    // placeholder option until the user picks something.
    let shown_value = move || {
        form.with(|f| {
            let model = f.lead().value(Field::Model);
            if model.is_empty() { MODEL_PLACEHOLDER.to_owned() } else { model.to_owned() }
        })
    };

    view! {
        <div class="form-field">
            <select
                class="form-input"
                prop:value=shown_value
                prop:disabled=move || form.with(|f| f.is_submitting())
                on:change=move |ev| {
                    form.update(|f| f.set_field(Field::Model, &event_target_value(&ev)))
                }
            >
                <option value=MODEL_PLACEHOLDER>"Select Model"</option>
                {CAR_MODELS
                    .iter()
                    .map(|model| view! { <option value=*model>{*model}</option> })
                    .collect_view()}
            </select>
            <FieldError form=form field=Field::Model />
        </div>
    }
}

#[component]
fn FieldError(form: RwSignal<LeadForm>, field: Field) -> impl IntoView {
    view! {
        {move || {
            form.with(|f| {
                f.errors().get(field).map(|message| view! { <p class="field-error">{message}</p> })
            })
        }}
    }
}
