//! Contact form lifecycle shared by the inline and modal variants

use std::time::Duration;

use super::lead::{LeadField, LeadSubmission, LeadValidationErrors};

/// How long a delivery failure banner stays up
pub const FAILURE_DISPLAY: Duration = Duration::from_millis(5_000);

/// Where the form is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormVariant {
    /// Full form embedded in the contact section
    Inline,
    /// Reduced form inside a dialog
    Modal,
}

impl FormVariant {
    /// How long the success indicator stays visible before the form resets
    pub fn success_display(self) -> Duration {
        match self {
            FormVariant::Inline => Duration::from_millis(2_000),
            FormVariant::Modal => Duration::from_millis(3_000),
        }
    }

    /// Fields the variant renders, in display order
    pub fn fields(self) -> &'static [LeadField] {
        match self {
            FormVariant::Inline => &[
                LeadField::Name,
                LeadField::Email,
                LeadField::Company,
                LeadField::Phone,
                LeadField::Country,
                LeadField::Message,
            ],
            FormVariant::Modal => &[LeadField::Name, LeadField::Email, LeadField::Message],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormPhase {
    Editing,
    Submitting,
    Succeeded,
    Failed(String),
}

/// Why a submit attempt did not start a request
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitRejected {
    #[error("a submission is already in flight")]
    InFlight,
    #[error("the form was just submitted")]
    JustSucceeded,
    #[error(transparent)]
    Invalid(#[from] LeadValidationErrors),
}

/// Field values, phase and validation errors of one form instance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactFormState {
    variant: FormVariant,
    fields: LeadSubmission,
    phase: FormPhase,
    errors: Option<LeadValidationErrors>,
}

impl ContactFormState {
    pub fn new(variant: FormVariant) -> Self {
        Self {
            variant,
            fields: LeadSubmission::default(),
            phase: FormPhase::Editing,
            errors: None,
        }
    }

    /// Preset the product the inquiry refers to
    pub fn with_product(mut self, product: Option<String>) -> Self {
        self.fields.product = product;
        self
    }

    pub fn variant(&self) -> FormVariant {
        self.variant
    }

    pub fn phase(&self) -> &FormPhase {
        &self.phase
    }

    pub fn fields(&self) -> &LeadSubmission {
        &self.fields
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    /// Current value of `field`, empty when unset
    pub fn value(&self, field: LeadField) -> &str {
        let f = &self.fields;
        match field {
            LeadField::Name => &f.name,
            LeadField::Email => &f.email,
            LeadField::Company => f.company.as_deref().unwrap_or_default(),
            LeadField::Phone => f.phone.as_deref().unwrap_or_default(),
            LeadField::Country => f.country.as_deref().unwrap_or_default(),
            LeadField::Message => &f.message,
            LeadField::Product => f.product.as_deref().unwrap_or_default(),
        }
    }

    /// Update a field. Editing clears that field's error and a failure banner.
    pub fn set(&mut self, field: LeadField, value: String) {
        let f = &mut self.fields;
        match field {
            LeadField::Name => f.name = value,
            LeadField::Email => f.email = value,
            LeadField::Company => f.company = Some(value),
            LeadField::Phone => f.phone = Some(value),
            LeadField::Country => f.country = Some(value),
            LeadField::Message => f.message = value,
            LeadField::Product => f.product = Some(value),
        }

        if let Some(errors) = &mut self.errors {
            errors.0.retain(|e| e.field != field);
            if errors.0.is_empty() {
                self.errors = None;
            }
        }
        if matches!(self.phase, FormPhase::Failed(_)) {
            self.phase = FormPhase::Editing;
        }
    }

    pub fn error(&self, field: LeadField) -> Option<&str> {
        self.errors.as_ref()?.for_field(field)
    }

    pub fn has_errors(&self) -> bool {
        self.errors.is_some()
    }

    /// Start a submission.
    ///
    /// On success the form enters `Submitting` and the returned lead is what
    /// must be sent. Rejected attempts never change the phase into
    /// `Submitting`, so no request may be made for them.
    pub fn begin_submit(&mut self) -> Result<LeadSubmission, SubmitRejected> {
        match self.phase {
            FormPhase::Submitting => return Err(SubmitRejected::InFlight),
            FormPhase::Succeeded => return Err(SubmitRejected::JustSucceeded),
            FormPhase::Editing | FormPhase::Failed(_) => {}
        }

        match self.submission().validate() {
            Ok(lead) => {
                self.errors = None;
                self.phase = FormPhase::Submitting;
                Ok(lead)
            }
            Err(errors) => {
                self.errors = Some(errors.clone());
                self.phase = FormPhase::Editing;
                Err(SubmitRejected::Invalid(errors))
            }
        }
    }

    /// Record the outcome of the request started by [`begin_submit`](Self::begin_submit)
    pub fn finish_submit(&mut self, result: Result<(), String>) {
        if self.phase != FormPhase::Submitting {
            return;
        }
        self.phase = match result {
            Ok(()) => FormPhase::Succeeded,
            Err(message) => FormPhase::Failed(message),
        };
    }

    /// Hide the success indicator and clear the fields. Only acts after success.
    pub fn clear_after_success(&mut self) {
        if self.phase != FormPhase::Succeeded {
            return;
        }
        let product = self.fields.product.take();
        self.fields = LeadSubmission {
            product,
            ..Default::default()
        };
        self.errors = None;
        self.phase = FormPhase::Editing;
    }

    /// Dismiss the failure banner, keeping every value for a retry.
    /// Only acts while failed.
    pub fn clear_failure(&mut self) {
        if matches!(self.phase, FormPhase::Failed(_)) {
            self.phase = FormPhase::Editing;
        }
    }

    /// Only the fields this variant renders take part in the submission
    fn submission(&self) -> LeadSubmission {
        let mut lead = self.fields.clone();
        if self.variant == FormVariant::Modal {
            lead.company = None;
            lead.phone = None;
            lead.country = None;
        }
        lead
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(variant: FormVariant) -> ContactFormState {
        let mut form = ContactFormState::new(variant);
        form.set(LeadField::Name, "Grace Hopper".to_string());
        form.set(LeadField::Email, "grace@navy.mil".to_string());
        form.set(LeadField::Message, "Quote for 200 bath mats please".to_string());
        form
    }

    #[test]
    fn test_success_display_durations() {
        assert_eq!(FormVariant::Inline.success_display(), Duration::from_millis(2000));
        assert_eq!(FormVariant::Modal.success_display(), Duration::from_millis(3000));
    }

    #[test]
    fn test_modal_field_set_is_reduced() {
        assert_eq!(FormVariant::Modal.fields().len(), 3);
        assert!(FormVariant::Inline.fields().contains(&LeadField::Phone));
        assert!(!FormVariant::Modal.fields().contains(&LeadField::Phone));
    }

    #[test]
    fn test_invalid_submit_stays_editing() {
        let mut form = ContactFormState::new(FormVariant::Inline);
        form.set(LeadField::Email, "grace@navy.mil".to_string());

        let err = form.begin_submit().unwrap_err();
        assert!(matches!(err, SubmitRejected::Invalid(_)));
        assert_eq!(form.phase(), &FormPhase::Editing);
        assert_eq!(form.error(LeadField::Name), Some("Name is required"));
        assert!(form.error(LeadField::Email).is_none());
    }

    #[test]
    fn test_editing_clears_field_error() {
        let mut form = ContactFormState::new(FormVariant::Inline);
        let _ = form.begin_submit();
        assert!(form.error(LeadField::Name).is_some());

        form.set(LeadField::Name, "G".to_string());
        assert!(form.error(LeadField::Name).is_none());
        assert!(form.error(LeadField::Message).is_some());
    }

    #[test]
    fn test_single_request_in_flight() {
        let mut form = filled(FormVariant::Inline);
        assert!(form.begin_submit().is_ok());
        assert!(form.is_submitting());
        assert_eq!(form.begin_submit(), Err(SubmitRejected::InFlight));
    }

    #[test]
    fn test_success_then_clear() {
        let mut form = filled(FormVariant::Inline).with_product(Some("rug-7".to_string()));
        let lead = form.begin_submit().unwrap();
        assert_eq!(lead.product.as_deref(), Some("rug-7"));

        form.finish_submit(Ok(()));
        assert_eq!(form.phase(), &FormPhase::Succeeded);
        assert_eq!(form.begin_submit(), Err(SubmitRejected::JustSucceeded));

        form.clear_after_success();
        assert_eq!(form.phase(), &FormPhase::Editing);
        assert_eq!(form.value(LeadField::Name), "");
        assert_eq!(form.value(LeadField::Message), "");
        // The product context survives the reset
        assert_eq!(form.value(LeadField::Product), "rug-7");
    }

    #[test]
    fn test_failure_keeps_values() {
        let mut form = filled(FormVariant::Modal);
        form.begin_submit().unwrap();
        form.finish_submit(Err("Inbox unavailable".to_string()));

        assert_eq!(form.phase(), &FormPhase::Failed("Inbox unavailable".to_string()));
        assert_eq!(form.value(LeadField::Name), "Grace Hopper");

        // Retry is allowed after failure
        assert!(form.begin_submit().is_ok());
    }

    #[test]
    fn test_clear_ignored_unless_succeeded() {
        let mut form = filled(FormVariant::Inline);
        form.clear_after_success();
        assert_eq!(form.value(LeadField::Name), "Grace Hopper");
    }

    #[test]
    fn test_finish_without_begin_ignored() {
        let mut form = filled(FormVariant::Inline);
        form.finish_submit(Ok(()));
        assert_eq!(form.phase(), &FormPhase::Editing);
    }

    #[test]
    fn test_modal_ignores_hidden_fields() {
        let mut form = filled(FormVariant::Modal);
        form.set(LeadField::Phone, "abc".to_string());
        let lead = form.begin_submit().unwrap();
        assert_eq!(lead.phone, None);
    }

    #[test]
    fn test_inline_validates_optional_fields() {
        let mut form = filled(FormVariant::Inline);
        form.set(LeadField::Phone, "abc".to_string());
        assert!(form.begin_submit().is_err());
        assert!(form.error(LeadField::Phone).is_some());
    }

    #[test]
    fn test_edit_after_failure_returns_to_editing() {
        let mut form = filled(FormVariant::Inline);
        form.begin_submit().unwrap();
        form.finish_submit(Err("boom".to_string()));
        form.set(LeadField::Message, "Updated message text".to_string());
        assert_eq!(form.phase(), &FormPhase::Editing);
    }

    #[test]
    fn test_failure_dismissal_keeps_values() {
        let mut form = filled(FormVariant::Inline);
        form.set(LeadField::Company, "Harbor Linens".to_string());
        form.begin_submit().unwrap();
        form.finish_submit(Err("Network error. Please try again.".to_string()));

        form.clear_failure();
        assert_eq!(form.phase(), &FormPhase::Editing);
        assert_eq!(form.value(LeadField::Name), "Grace Hopper");
        assert_eq!(form.value(LeadField::Company), "Harbor Linens");
        assert!(form.begin_submit().is_ok());
    }

    #[test]
    fn test_failure_dismissal_ignored_in_other_phases() {
        let mut form = filled(FormVariant::Modal);
        form.begin_submit().unwrap();
        form.clear_failure();
        assert!(form.is_submitting());

        form.finish_submit(Ok(()));
        form.clear_failure();
        assert_eq!(form.phase(), &FormPhase::Succeeded);
    }
}
