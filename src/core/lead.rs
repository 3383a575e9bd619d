//! Lead submissions and their validation rules
//!
//! The same rules run in the browser before any request is sent and again on
//! the server before a lead is forwarded.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const NAME_MIN: usize = 2;
pub const NAME_MAX: usize = 100;
pub const EMAIL_MAX: usize = 255;
pub const OPTIONAL_TEXT_MIN: usize = 2;
pub const OPTIONAL_TEXT_MAX: usize = 100;
pub const PHONE_MIN: usize = 7;
pub const PHONE_MAX: usize = 20;
pub const MESSAGE_MIN: usize = 10;
pub const MESSAGE_MAX: usize = 1000;
pub const PRODUCT_MAX: usize = 200;

/// A prospective customer's inquiry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadSubmission {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    pub message: String,
    /// Product the inquiry is about, when sent from a product page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product: Option<String>,
}

/// Field of a [`LeadSubmission`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[serde(rename_all = "lowercase")]
pub enum LeadField {
    #[display("name")]
    Name,
    #[display("email")]
    Email,
    #[display("company")]
    Company,
    #[display("phone")]
    Phone,
    #[display("country")]
    Country,
    #[display("message")]
    Message,
    #[display("product")]
    Product,
}

/// A single validation failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: LeadField,
    pub message: String,
}

impl FieldError {
    fn new(field: LeadField, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Every validation failure of a submission, in field order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("{} field(s) failed validation", .0.len())]
pub struct LeadValidationErrors(pub Vec<FieldError>);

impl LeadValidationErrors {
    /// First error message for `field`, if any
    pub fn for_field(&self, field: LeadField) -> Option<&str> {
        self.0
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    pub fn fields(&self) -> &[FieldError] {
        &self.0
    }
}

/// Server acknowledgement of an accepted lead
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadReceipt {
    pub success: bool,
    pub reference: Uuid,
}

impl LeadSubmission {
    /// Copy with every field trimmed and blank optional fields dropped
    pub fn normalized(&self) -> Self {
        fn optional(value: &Option<String>) -> Option<String> {
            value
                .as_deref()
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
        }

        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            company: optional(&self.company),
            phone: optional(&self.phone),
            country: optional(&self.country),
            message: self.message.trim().to_string(),
            product: optional(&self.product),
        }
    }

    /// Validate and return the normalized submission
    pub fn validate(&self) -> Result<Self, LeadValidationErrors> {
        let lead = self.normalized();
        let mut errors = Vec::new();

        match char_len(&lead.name) {
            0 => errors.push(FieldError::new(LeadField::Name, "Name is required")),
            n if n < NAME_MIN => errors.push(FieldError::new(
                LeadField::Name,
                format!("Name must be at least {NAME_MIN} characters"),
            )),
            n if n > NAME_MAX => errors.push(FieldError::new(
                LeadField::Name,
                format!("Name must be at most {NAME_MAX} characters"),
            )),
            _ => {}
        }

        if lead.email.is_empty() {
            errors.push(FieldError::new(LeadField::Email, "Email is required"));
        } else if char_len(&lead.email) > EMAIL_MAX {
            errors.push(FieldError::new(
                LeadField::Email,
                format!("Email must be at most {EMAIL_MAX} characters"),
            ));
        } else if !is_valid_email(&lead.email) {
            errors.push(FieldError::new(LeadField::Email, "Invalid email format"));
        }

        if let Some(company) = &lead.company {
            check_optional_text(&mut errors, LeadField::Company, "Company", company);
        }

        if let Some(phone) = &lead.phone
            && !is_valid_phone(phone)
        {
            errors.push(FieldError::new(
                LeadField::Phone,
                format!(
                    "Phone must be {PHONE_MIN}-{PHONE_MAX} characters of digits, spaces, + - ( )"
                ),
            ));
        }

        if let Some(country) = &lead.country {
            check_optional_text(&mut errors, LeadField::Country, "Country", country);
        }

        match char_len(&lead.message) {
            0 => errors.push(FieldError::new(LeadField::Message, "Message is required")),
            n if n < MESSAGE_MIN => errors.push(FieldError::new(
                LeadField::Message,
                format!("Message must be at least {MESSAGE_MIN} characters"),
            )),
            n if n > MESSAGE_MAX => errors.push(FieldError::new(
                LeadField::Message,
                format!("Message must be at most {MESSAGE_MAX} characters"),
            )),
            _ => {}
        }

        if let Some(product) = &lead.product
            && char_len(product) > PRODUCT_MAX
        {
            errors.push(FieldError::new(
                LeadField::Product,
                format!("Product must be at most {PRODUCT_MAX} characters"),
            ));
        }

        if errors.is_empty() {
            Ok(lead)
        } else {
            Err(LeadValidationErrors(errors))
        }
    }
}

fn char_len(value: &str) -> usize {
    value.chars().count()
}

fn check_optional_text(errors: &mut Vec<FieldError>, field: LeadField, label: &str, value: &str) {
    let len = char_len(value);
    if !(OPTIONAL_TEXT_MIN..=OPTIONAL_TEXT_MAX).contains(&len) {
        errors.push(FieldError::new(
            field,
            format!("{label} must be {OPTIONAL_TEXT_MIN}-{OPTIONAL_TEXT_MAX} characters"),
        ));
    }
}

/// Basic shape check: one `@`, non-empty local part, dotted domain, no spaces
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.contains('@') {
        return false;
    }

    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };

    !host.is_empty() && !tld.is_empty() && !domain.starts_with('.') && !domain.contains("..")
}

fn is_valid_phone(phone: &str) -> bool {
    let len = char_len(phone);
    let allowed = phone
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '+' | '-' | '(' | ')'));
    let digits = phone.chars().filter(char::is_ascii_digit).count();

    (PHONE_MIN..=PHONE_MAX).contains(&len) && allowed && digits >= PHONE_MIN
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_lead() -> LeadSubmission {
        LeadSubmission {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            message: "Interested in bulk rug orders.".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_minimal_lead() {
        assert!(valid_lead().validate().is_ok());
    }

    #[test]
    fn test_validate_returns_trimmed_copy() {
        let mut lead = valid_lead();
        lead.name = "  Ada  ".to_string();
        lead.company = Some("   ".to_string());
        lead.product = Some(" rug-3 ".to_string());

        let clean = lead.validate().unwrap();
        assert_eq!(clean.name, "Ada");
        assert_eq!(clean.company, None);
        assert_eq!(clean.product.as_deref(), Some("rug-3"));
    }

    #[test]
    fn test_missing_required_fields() {
        let errors = LeadSubmission::default().validate().unwrap_err();

        assert_eq!(errors.for_field(LeadField::Name), Some("Name is required"));
        assert_eq!(errors.for_field(LeadField::Email), Some("Email is required"));
        assert_eq!(errors.for_field(LeadField::Message), Some("Message is required"));
        assert_eq!(errors.fields().len(), 3);
    }

    #[test]
    fn test_whitespace_only_name_is_missing() {
        let mut lead = valid_lead();
        lead.name = "   ".to_string();
        let errors = lead.validate().unwrap_err();
        assert_eq!(errors.for_field(LeadField::Name), Some("Name is required"));
    }

    #[test]
    fn test_name_bounds() {
        let mut lead = valid_lead();
        lead.name = "A".to_string();
        assert!(lead.validate().unwrap_err().for_field(LeadField::Name).is_some());

        lead.name = "Al".to_string();
        assert!(lead.validate().is_ok());

        lead.name = "a".repeat(101);
        assert!(lead.validate().unwrap_err().for_field(LeadField::Name).is_some());
    }

    #[test]
    fn test_message_bounds() {
        let mut lead = valid_lead();
        lead.message = "too short".to_string();
        assert!(lead.validate().unwrap_err().for_field(LeadField::Message).is_some());

        lead.message = "x".repeat(1000);
        assert!(lead.validate().is_ok());

        lead.message = "x".repeat(1001);
        assert!(lead.validate().unwrap_err().for_field(LeadField::Message).is_some());
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        let mut lead = valid_lead();
        lead.name = "Zoë".to_string();
        lead.message = "ü".repeat(1000);
        assert!(lead.validate().is_ok());
    }

    #[test]
    fn test_email_format() {
        assert!(is_valid_email("buyer@shop.co"));
        assert!(is_valid_email("first.last+tag@mail.example.org"));
        assert!(!is_valid_email("buyer"));
        assert!(!is_valid_email("@shop.co"));
        assert!(!is_valid_email("buyer@shop"));
        assert!(!is_valid_email("buyer@.co"));
        assert!(!is_valid_email("buyer@shop."));
        assert!(!is_valid_email("buy er@shop.co"));
        assert!(!is_valid_email("a@b@shop.co"));
        assert!(!is_valid_email("buyer@shop..co"));
    }

    #[test]
    fn test_invalid_email_reported() {
        let mut lead = valid_lead();
        lead.email = "not-an-email".to_string();
        let errors = lead.validate().unwrap_err();
        assert_eq!(errors.for_field(LeadField::Email), Some("Invalid email format"));
    }

    #[test]
    fn test_email_too_long() {
        let mut lead = valid_lead();
        lead.email = format!("{}@example.com", "a".repeat(250));
        let errors = lead.validate().unwrap_err();
        assert!(errors.for_field(LeadField::Email).unwrap().contains("255"));
    }

    #[test]
    fn test_phone_rules() {
        let mut lead = valid_lead();
        for ok in ["+1 (555) 123-4567", "5551234", "+44 20 7946 0958"] {
            lead.phone = Some(ok.to_string());
            assert!(lead.validate().is_ok(), "{ok}");
        }
        for bad in ["123", "555-CALL-NOW", "+() -- ()12345", "1".repeat(21).as_str()] {
            lead.phone = Some(bad.to_string());
            assert!(
                lead.validate().unwrap_err().for_field(LeadField::Phone).is_some(),
                "{bad}"
            );
        }
    }

    #[test]
    fn test_optional_text_fields() {
        let mut lead = valid_lead();
        lead.company = Some("X".to_string());
        lead.country = Some("Turkey".to_string());
        let errors = lead.validate().unwrap_err();
        assert!(errors.for_field(LeadField::Company).is_some());
        assert!(errors.for_field(LeadField::Country).is_none());
    }

    #[test]
    fn test_product_max_length() {
        let mut lead = valid_lead();
        lead.product = Some("p".repeat(201));
        assert!(lead.validate().unwrap_err().for_field(LeadField::Product).is_some());
    }

    #[test]
    fn test_serialization_skips_absent_optionals() {
        let json = serde_json::to_value(valid_lead()).unwrap();
        assert!(json.get("company").is_none());
        assert_eq!(json["name"], "Ada Lovelace");

        let parsed: LeadSubmission = serde_json::from_str(
            r#"{"name":"Bo","email":"bo@x.io","message":"hello there!"}"#,
        )
        .unwrap();
        assert_eq!(parsed.phone, None);
    }

    #[test]
    fn test_field_error_serializes_lowercase() {
        let errors = LeadSubmission::default().validate().unwrap_err();
        let json = serde_json::to_value(errors.fields()).unwrap();
        assert_eq!(json[0]["field"], "name");
        assert_eq!(LeadField::Message.to_string(), "message");
    }
}
