//! Return history handlers.

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Serialize;
use tracing::instrument;

use crate::error::AppError;
use crate::models::SavedReturn;
use crate::routes::analytics::DateRangeParams;
use crate::state::AppState;

/// Active history records, newest first.
#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    /// Saved returns within the requested range.
    pub returns: Vec<SavedReturn>,
}

/// Outcome of an archive-all request.
#[derive(Debug, Serialize)]
pub struct ArchiveHistoryResponse {
    /// Number of records moved to the archive.
    pub archived_count: u64,
}

/// List active (non-archived) return records.
///
/// Both range bounds must be present for the filter to apply; a partial
/// range returns the full history.
///
/// # Errors
///
/// Returns an error if the query fails.
#[instrument(skip(state))]
pub async fn list_history(
    State(state): State<AppState>,
    Query(params): Query<DateRangeParams>,
) -> Result<Json<HistoryResponse>, AppError> {
    let returns = state.returns().list_active(params.into()).await?;

    Ok(Json(HistoryResponse { returns }))
}

/// Move every active record to the archive.
///
/// # Errors
///
/// Returns an error if the update fails.
#[instrument(skip(state))]
pub async fn archive_history(
    State(state): State<AppState>,
) -> Result<Json<ArchiveHistoryResponse>, AppError> {
    let archived_count = state.returns().archive_all().await?;
    tracing::info!(archived_count, "archived active return records");

    Ok(Json(ArchiveHistoryResponse { archived_count }))
}
