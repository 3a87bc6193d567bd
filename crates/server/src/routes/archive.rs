//! Archived-return handlers.

use axum::{Json, extract::State};
use serde::Serialize;
use tracing::instrument;

use crate::error::AppError;
use crate::models::SavedReturn;
use crate::state::AppState;

/// Archived records, newest first.
#[derive(Debug, Serialize)]
pub struct ArchiveResponse {
    /// All archived saved returns.
    pub returns: Vec<SavedReturn>,
}

/// Outcome of a purge request.
#[derive(Debug, Serialize)]
pub struct PurgeArchiveResponse {
    /// Number of records permanently deleted.
    pub deleted_count: u64,
}

/// List archived return records.
///
/// # Errors
///
/// Returns an error if the query fails.
#[instrument(skip(state))]
pub async fn list_archive(
    State(state): State<AppState>,
) -> Result<Json<ArchiveResponse>, AppError> {
    let returns = state.returns().list_archived().await?;

    Ok(Json(ArchiveResponse { returns }))
}

/// Permanently delete every archived record. Irreversible.
///
/// # Errors
///
/// Returns an error if the delete fails.
#[instrument(skip(state))]
pub async fn purge_archive(
    State(state): State<AppState>,
) -> Result<Json<PurgeArchiveResponse>, AppError> {
    let deleted_count = state.returns().purge_archived().await?;
    tracing::info!(deleted_count, "purged archived return records");

    Ok(Json(PurgeArchiveResponse { deleted_count }))
}
