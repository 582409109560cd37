use crate::dtos::ContactAck;
use crate::models::{ContactMessage, ContactSubmission, CONTACT_COLLECTION};
use crate::services::{record_contact, ContactOutcome};
use crate::startup::AppState;
use axum::{extract::State, Json};
use chrono::Utc;
use serde_json::Value;
use service_core::error::AppError;
use validator::Validate;

/// Validates a contact form payload and stores it with a server timestamp.
#[tracing::instrument(skip(state, payload))]
pub async fn submit_contact(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<Json<ContactAck>, AppError> {
    let Some(store) = state.store.client() else {
        record_contact(ContactOutcome::Unconfigured);
        return Err(AppError::ConfigError(anyhow::anyhow!(
            "Database not configured"
        )));
    };

    let submission: ContactSubmission = serde_json::from_value(payload).map_err(|e| {
        record_contact(ContactOutcome::Invalid);
        AppError::from(e)
    })?;
    submission.validate().map_err(|e| {
        record_contact(ContactOutcome::Invalid);
        AppError::from(e)
    })?;

    let message = ContactMessage::new(submission, Utc::now());
    let document = mongodb::bson::to_document(&message).map_err(|e| {
        record_contact(ContactOutcome::Failed);
        AppError::InternalError(anyhow::anyhow!("Failed to encode contact message: {}", e))
    })?;

    let id = store
        .insert_document(CONTACT_COLLECTION, document)
        .await
        .map_err(|e| {
            record_contact(ContactOutcome::Failed);
            tracing::error!("Failed to store contact message: {}", e);
            e
        })?;

    record_contact(ContactOutcome::Stored);
    tracing::info!(id = %id, "Contact message stored");

    Ok(Json(ContactAck::stored(id)))
}
