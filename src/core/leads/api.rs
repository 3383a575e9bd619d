use axum::{Json, Router, extract::State, routing::post};
use std::sync::Arc;

use crate::core::lead::{LeadReceipt, LeadSubmission};

use super::{LeadEnvelope, LeadError, LeadInbox};

/// Lead API state
#[derive(Clone)]
pub struct LeadApiState {
    pub inbox: LeadInbox,
}

/// Create the lead API router
pub fn lead_api_router(state: LeadApiState) -> Router {
    let state = Arc::new(state);

    Router::new()
        .route("/api/leads", post(submit_lead_handler))
        .with_state(state)
}

/// POST /api/leads
/// Validate the lead, then forward it
async fn submit_lead_handler(
    State(state): State<Arc<LeadApiState>>,
    Json(request): Json<LeadSubmission>,
) -> Result<Json<LeadReceipt>, LeadError> {
    let lead = request.validate().inspect_err(|errors| {
        tracing::info!("Rejected lead submission: {}", errors);
    })?;

    let envelope = LeadEnvelope::new(lead);
    let delivery = state.inbox.deliver(&envelope).await?;

    tracing::info!(
        "Lead {} accepted ({:?}){}",
        envelope.reference,
        delivery,
        envelope
            .lead
            .product
            .as_deref()
            .map(|p| format!(" for product {p}"))
            .unwrap_or_default()
    );

    Ok(Json(LeadReceipt {
        success: true,
        reference: envelope.reference,
    }))
}
