//! At-a-glance analytics handler.

use axum::{Json, extract::State};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::AppError;
use crate::models::DateRange;
use crate::state::AppState;

/// Date-range query parameters shared by analytics and history.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct DateRangeParams {
    /// First day included (YYYY-MM-DD).
    pub start_date: Option<NaiveDate>,
    /// Last day included (YYYY-MM-DD).
    pub end_date: Option<NaiveDate>,
}

impl From<DateRangeParams> for DateRange {
    fn from(params: DateRangeParams) -> Self {
        Self {
            start: params.start_date,
            end: params.end_date,
        }
    }
}

/// Analytics response with display-rounded values.
#[derive(Debug, Serialize)]
pub struct AnalyticsResponse {
    /// Number of returns tracked in the range.
    pub total_returns: i64,
    /// Sum of net profit/loss, rounded to cents.
    pub total_net_profit_loss: Decimal,
    /// Most frequent return reason, or "N/A" when none are tracked.
    pub most_frequent_reason: String,
    /// Share of resellable returns as a percentage, one decimal place.
    pub resellable_rate: Decimal,
}

/// At-a-glance aggregates over active return records.
///
/// # Errors
///
/// Returns an error if the database queries fail.
#[instrument(skip(state))]
pub async fn get_analytics(
    State(state): State<AppState>,
    axum::extract::Query(params): axum::extract::Query<DateRangeParams>,
) -> Result<Json<AnalyticsResponse>, AppError> {
    let analytics = state.returns().analytics(params.into()).await?;

    Ok(Json(AnalyticsResponse {
        total_returns: analytics.total_returns,
        total_net_profit_loss: analytics.total_net_profit_loss.round_dp(2),
        most_frequent_reason: analytics
            .most_frequent_reason
            .unwrap_or_else(|| "N/A".to_string()),
        resellable_rate: analytics.resellable_rate.round_dp(1),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn params_convert_to_date_range() {
        let params = DateRangeParams {
            start_date: NaiveDate::from_ymd_opt(2026, 1, 1),
            end_date: NaiveDate::from_ymd_opt(2026, 1, 31),
        };
        let range = DateRange::from(params);
        assert!(range.bounds().is_some());
    }
}
