//! Forwarding of accepted leads to the configured inbox service

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::time::Duration;
use uuid::Uuid;

use crate::core::config::Config;
use crate::core::lead::LeadSubmission;

use super::LeadError;

/// Upper bound for one inbox request
pub const INBOX_TIMEOUT: Duration = Duration::from_secs(10);

/// Payload sent to the inbox
#[derive(Debug, Clone, Serialize)]
pub struct LeadEnvelope {
    pub reference: Uuid,
    pub submitted_at: DateTime<Utc>,
    #[serde(flatten)]
    pub lead: LeadSubmission,
}

impl LeadEnvelope {
    pub fn new(lead: LeadSubmission) -> Self {
        Self {
            reference: Uuid::new_v4(),
            submitted_at: Utc::now(),
            lead,
        }
    }
}

/// What happened to a lead after it was accepted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    /// Posted to the inbox, which accepted it
    Forwarded,
    /// No inbox configured; the lead was only logged
    Logged,
}

/// Client for the lead inbox
#[derive(Debug, Clone)]
pub struct LeadInbox {
    client: reqwest::Client,
    url: Option<String>,
    token: Option<String>,
}

impl LeadInbox {
    pub fn new(url: Option<String>, token: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url,
            token,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.lead_inbox_url.clone(), config.lead_inbox_token.clone())
    }

    /// Inbox that only logs leads
    pub fn disabled() -> Self {
        Self::new(None, None)
    }

    pub fn is_enabled(&self) -> bool {
        self.url.is_some()
    }

    /// Deliver a lead to the inbox.
    ///
    /// A non-2xx status, or a JSON body carrying a truthy `error`, counts as a
    /// rejection. Transport failures and timeouts make the inbox unavailable.
    pub async fn deliver(&self, envelope: &LeadEnvelope) -> Result<Delivery, LeadError> {
        let Some(url) = &self.url else {
            tracing::info!(
                "No lead inbox configured, logging lead {} from {} <{}>",
                envelope.reference,
                envelope.lead.name,
                envelope.lead.email
            );
            return Ok(Delivery::Logged);
        };

        let mut request = self.client.post(url).timeout(INBOX_TIMEOUT).json(envelope);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(|e| {
            tracing::error!("Lead inbox request failed: {}", e);
            LeadError::InboxUnavailable(e)
        })?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        tracing::debug!("Lead inbox responded {} for {}", status, envelope.reference);

        if !status.is_success() {
            tracing::warn!("Lead inbox rejected {}: {}", envelope.reference, status);
            return Err(LeadError::InboxRejected(format!("inbox returned {status}")));
        }

        if let Some(error) = body_error(&body) {
            tracing::warn!("Lead inbox rejected {}: {}", envelope.reference, error);
            return Err(LeadError::InboxRejected(error));
        }

        Ok(Delivery::Forwarded)
    }
}

/// The `error` member of a JSON response body, when it is truthy
fn body_error(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    let error = value.get("error")?;

    let truthy = match error {
        serde_json::Value::Null => false,
        serde_json::Value::Bool(b) => *b,
        serde_json::Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        serde_json::Value::String(s) => !s.is_empty(),
        serde_json::Value::Array(_) | serde_json::Value::Object(_) => true,
    };

    truthy.then(|| match error {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    })
}
