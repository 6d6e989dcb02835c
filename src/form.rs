//! Lead capture form state machine.
//!
//! Pure Rust with no browser types; `sections::lead_form` wires this to
//! signals and the DOM. Keeping it DOM-free means the whole submit lifecycle
//! runs under plain `cargo test`.

use serde::Serialize;

/// Sentinel value carried by the model dropdown's placeholder option.
pub const MODEL_PLACEHOLDER: &str = "disable";

/// Models offered in the enquiry dropdown.
pub const CAR_MODELS: [&str; 12] = [
    "I20",
    "GRAND I10 NIOS",
    "AURA",
    "VERNA",
    "ALCAZAR",
    "TUCSON",
    "CRETA N LINE",
    "EXTER",
    "VENUE N LINE",
    "CRETA",
    "CRETA ELECTRIC",
    "IONIQ 5",
];

pub const NAME_REQUIRED: &str = "Name is required";
pub const MOBILE_INVALID: &str = "Valid 10-digit mobile number is required";
pub const MODEL_UNSELECTED: &str = "Please select a car model";
pub const EMAIL_INVALID: &str = "Please enter a valid email address";

/// Surfaced when no response was obtained at all.
pub const SERVER_ERROR_MESSAGE: &str = "❌ Server error. Please try again later.";

/// The prospective-customer record captured by the form. Serialized as the
/// POST body with exactly these keys.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Lead {
    pub name: String,
    pub mobile: String,
    pub email: String,
    pub model: String,
}

impl Lead {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Mobile => &self.mobile,
            Field::Email => &self.email,
            Field::Model => &self.model,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Mobile,
    Email,
    Model,
}

/// Per-field validation errors computed at submit time. All-`None` means the
/// lead is submittable.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: Option<&'static str>,
    pub mobile: Option<&'static str>,
    pub email: Option<&'static str>,
    pub model: Option<&'static str>,
}

impl FieldErrors {
    pub fn is_clear(&self) -> bool {
        self.name.is_none() && self.mobile.is_none() && self.email.is_none() && self.model.is_none()
    }

    pub fn get(&self, field: Field) -> Option<&'static str> {
        match field {
            Field::Name => self.name,
            Field::Mobile => self.mobile,
            Field::Email => self.email,
            Field::Model => self.model,
        }
    }
}

fn is_ten_digit_mobile(mobile: &str) -> bool {
    mobile.len() == 10 && mobile.bytes().all(|b| b.is_ascii_digit())
}

/// `local@domain.tld` with no whitespace anywhere and all three parts
/// non-empty. Deliberately loose beyond that.
fn is_plausible_email(email: &str) -> bool {
    if email.contains(char::is_whitespace) {
        return false;
    }
    let Some((local, rest)) = email.split_once('@') else {
        return false;
    };
    let Some((domain, tld)) = rest.rsplit_once('.') else {
        return false;
    };
    !local.is_empty() && !domain.is_empty() && !tld.is_empty()
}

/// Synchronous validation of a lead snapshot. Email is optional; the other
/// three fields are required.
pub fn validate(lead: &Lead) -> FieldErrors {
    FieldErrors {
        name: lead.name.trim().is_empty().then_some(NAME_REQUIRED),
        mobile: (!is_ten_digit_mobile(&lead.mobile)).then_some(MOBILE_INVALID),
        email: (!lead.email.is_empty() && !is_plausible_email(&lead.email))
            .then_some(EMAIL_INVALID),
        model: (lead.model.is_empty() || lead.model == MODEL_PLACEHOLDER)
            .then_some(MODEL_UNSELECTED),
    }
}

/// Lifecycle stage of one submit attempt.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    /// Momentary: a failure message is being surfaced. `acknowledge_failure`
    /// re-arms to `Idle`.
    Failed,
}

/// What came back from the collaborating backend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted,
    /// Non-ok status with a server-supplied reason.
    Rejected(String),
    /// No response obtained (connectivity, DNS, refusal — not distinguished).
    TransportFailed,
}

/// The form controller. At-most-one in-flight submission is enforced here by
/// the `Submitting` guard, not by the rendering layer's disabled inputs.
#[derive(Clone, Debug, Default)]
pub struct LeadForm {
    lead: Lead,
    errors: FieldErrors,
    state: SubmitState,
}

impl LeadForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lead(&self) -> &Lead {
        &self.lead
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn state(&self) -> SubmitState {
        self.state
    }

    pub fn is_submitting(&self) -> bool {
        self.state == SubmitState::Submitting
    }

    /// Overwrite one field. Ignored while a submission is in flight; never
    /// recomputes errors (those only change on submit).
    pub fn set_field(&mut self, field: Field, value: &str) {
        if self.is_submitting() {
            return;
        }
        let slot = match field {
            Field::Name => &mut self.lead.name,
            Field::Mobile => &mut self.lead.mobile,
            Field::Email => &mut self.lead.email,
            Field::Model => &mut self.lead.model,
        };
        *slot = value.to_owned();
    }

    /// Validate and, if clean, transition to `Submitting`, returning the
    /// snapshot to post. Returns `None` (and issues no network call) when
    /// validation fails or a submission is already in flight.
    pub fn begin_submit(&mut self) -> Option<Lead> {
        if self.is_submitting() {
            return None;
        }
        self.errors = validate(&self.lead);
        if !self.errors.is_clear() {
            self.state = SubmitState::Idle;
            return None;
        }
        self.state = SubmitState::Submitting;
        Some(self.lead.clone())
    }

    /// Apply the outcome of the attempt. Always leaves `Submitting`,
    /// whichever branch ran. Returns the message to surface on failure;
    /// `None` means success and the caller navigates to the thank-you route.
    pub fn finish_submit(&mut self, outcome: SubmitOutcome) -> Option<String> {
        match outcome {
            SubmitOutcome::Accepted => {
                self.lead = Lead::default();
                self.state = SubmitState::Succeeded;
                None
            }
            SubmitOutcome::Rejected(reason) => {
                self.state = SubmitState::Failed;
                Some(format!("❌ Error: {reason}"))
            }
            SubmitOutcome::TransportFailed => {
                self.state = SubmitState::Failed;
                Some(SERVER_ERROR_MESSAGE.to_owned())
            }
        }
    }

    /// Re-arm to `Idle` once the failure message has been shown, so the user
    /// can edit and resubmit.
    pub fn acknowledge_failure(&mut self) {
        if self.state == SubmitState::Failed {
            self.state = SubmitState::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_lead() -> Lead {
        Lead {
            name: "Asha Rao".into(),
            mobile: "9876543210".into(),
            email: String::new(),
            model: "CRETA".into(),
        }
    }

    fn filled_form() -> LeadForm {
        let mut form = LeadForm::new();
        form.set_field(Field::Name, "Asha Rao");
        form.set_field(Field::Mobile, "9876543210");
        form.set_field(Field::Model, "CRETA");
        form
    }

    #[test]
    fn empty_name_is_rejected() {
        let mut lead = filled_lead();
        lead.name = "   ".into();
        assert_eq!(validate(&lead).name, Some(NAME_REQUIRED));
    }

    #[test]
    fn mobile_must_be_exactly_ten_digits() {
        for bad in ["12345", "12345678901", "12a4567890", ""] {
            let mut lead = filled_lead();
            lead.mobile = bad.into();
            assert_eq!(validate(&lead).mobile, Some(MOBILE_INVALID), "{bad:?}");
        }
        assert_eq!(validate(&filled_lead()).mobile, None);
    }

    #[test]
    fn email_is_optional_but_checked_when_present() {
        let mut lead = filled_lead();
        lead.email = String::new();
        assert_eq!(validate(&lead).email, None);

        lead.email = "not-an-email".into();
        assert_eq!(validate(&lead).email, Some(EMAIL_INVALID));

        lead.email = "a@b.co".into();
        assert_eq!(validate(&lead).email, None);
    }

    #[test]
    fn placeholder_model_counts_as_unselected() {
        for unselected in ["", MODEL_PLACEHOLDER] {
            let mut lead = filled_lead();
            lead.model = unselected.into();
            assert_eq!(validate(&lead).model, Some(MODEL_UNSELECTED));
        }
    }

    #[test]
    fn all_four_errors_surface_together() {
        // Scenario: name "", mobile "abc", email "bad", model placeholder.
        let mut form = LeadForm::new();
        form.set_field(Field::Mobile, "abc");
        form.set_field(Field::Email, "bad");
        form.set_field(Field::Model, MODEL_PLACEHOLDER);

        assert_eq!(form.begin_submit(), None);
        assert_eq!(form.state(), SubmitState::Idle);
        let errors = form.errors();
        assert_eq!(errors.name, Some(NAME_REQUIRED));
        assert_eq!(errors.mobile, Some(MOBILE_INVALID));
        assert_eq!(errors.email, Some(EMAIL_INVALID));
        assert_eq!(errors.model, Some(MODEL_UNSELECTED));
    }

    #[test]
    fn set_field_is_idempotent() {
        let mut once = LeadForm::new();
        once.set_field(Field::Name, "Asha Rao");
        let mut twice = LeadForm::new();
        twice.set_field(Field::Name, "Asha Rao");
        twice.set_field(Field::Name, "Asha Rao");
        assert_eq!(once.lead(), twice.lead());
    }

    #[test]
    fn fields_are_frozen_while_submitting() {
        let mut form = filled_form();
        assert!(form.begin_submit().is_some());
        form.set_field(Field::Name, "Someone Else");
        assert_eq!(form.lead().name, "Asha Rao");
    }

    #[test]
    fn second_submit_while_in_flight_is_refused() {
        let mut form = filled_form();
        assert!(form.begin_submit().is_some());
        assert_eq!(form.begin_submit(), None);
        assert_eq!(form.state(), SubmitState::Submitting);
    }

    #[test]
    fn happy_path_resets_lead_and_succeeds() {
        let mut form = filled_form();
        let snapshot = form.begin_submit().expect("valid lead must submit");
        assert_eq!(snapshot, filled_lead());
        assert_eq!(form.state(), SubmitState::Submitting);

        assert_eq!(form.finish_submit(SubmitOutcome::Accepted), None);
        assert_eq!(form.state(), SubmitState::Succeeded);
        assert_eq!(form.lead(), &Lead::default());
    }

    #[test]
    fn server_rejection_keeps_fields_and_returns_to_idle() {
        let mut form = filled_form();
        form.begin_submit().expect("valid lead must submit");

        let message = form.finish_submit(SubmitOutcome::Rejected("Duplicate mobile number".into()));
        assert_eq!(message.as_deref(), Some("❌ Error: Duplicate mobile number"));
        assert_eq!(form.state(), SubmitState::Failed);

        form.acknowledge_failure();
        assert_eq!(form.state(), SubmitState::Idle);
        assert_eq!(form.lead(), &filled_lead());
    }

    #[test]
    fn transport_failure_surfaces_generic_message() {
        let mut form = filled_form();
        form.begin_submit().expect("valid lead must submit");

        let message = form.finish_submit(SubmitOutcome::TransportFailed);
        assert_eq!(message.as_deref(), Some(SERVER_ERROR_MESSAGE));

        form.acknowledge_failure();
        assert_eq!(form.state(), SubmitState::Idle);
    }

    #[test]
    fn lead_serializes_with_exact_keys() {
        let body = serde_json::to_value(filled_lead()).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "name": "Asha Rao",
                "mobile": "9876543210",
                "email": "",
                "model": "CRETA",
            })
        );
    }
}
