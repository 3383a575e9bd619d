//! Lead intake API
//!
//! - POST /api/leads - Validate a lead and forward it to the inbox

pub mod api;
pub mod inbox;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::core::lead::{FieldError, LeadValidationErrors};

pub use api::{LeadApiState, lead_api_router};
pub use inbox::{Delivery, LeadEnvelope, LeadInbox};

#[derive(Debug, thiserror::Error)]
pub enum LeadError {
    #[error("Please correct the highlighted fields")]
    Validation(#[from] LeadValidationErrors),

    #[error("The inquiry could not be delivered: {0}")]
    InboxRejected(String),

    #[error("The inquiry service is unavailable")]
    InboxUnavailable(#[source] reqwest::Error),
}

impl LeadError {
    pub fn code(&self) -> &'static str {
        match self {
            LeadError::Validation(_) => "VALIDATION_FAILED",
            LeadError::InboxRejected(_) => "INBOX_REJECTED",
            LeadError::InboxUnavailable(_) => "INBOX_UNAVAILABLE",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            LeadError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            LeadError::InboxRejected(_) | LeadError::InboxUnavailable(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

/// API error response
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<FieldError>,
}

impl ApiError {
    pub fn new(error: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code: code.into(),
            fields: Vec::new(),
        }
    }
}

impl IntoResponse for LeadError {
    fn into_response(self) -> Response {
        let status = self.status();
        let mut body = ApiError::new(self.to_string(), self.code());
        if let LeadError::Validation(errors) = self {
            body.fields = errors.0;
        }

        (status, Json(body)).into_response()
    }
}
