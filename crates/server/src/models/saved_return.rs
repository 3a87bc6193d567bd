//! Saved return domain models.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Condition label stored when the items can be restocked.
pub const CONDITION_RESELLABLE: &str = "Can be resold as new";

/// Condition label stored when the items cannot be resold.
pub const CONDITION_NOT_RESELLABLE: &str = "Cannot be resold";

/// A persisted return calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedReturn {
    /// Unique record ID.
    pub id: i32,
    /// Shopify order GID.
    pub shopify_order_id: String,
    /// Customer-facing order name (e.g., "#1001").
    pub shopify_order_name: String,
    /// Net financial impact of accepting the return (usually negative).
    pub net_profit_change: Decimal,
    /// Total refund issued to the customer.
    pub total_revenue_lost: Decimal,
    /// Inventory cost of the returned units.
    pub inventory_value: Decimal,
    /// Whether the items were judged resellable.
    pub is_resellable: bool,
    /// Advisory text shown at calculation time.
    pub suggestion: String,
    /// Return reason label.
    pub return_reason: String,
    /// Condition label (see [`CONDITION_RESELLABLE`]).
    pub product_condition: String,
    /// Return shipping cost entered by the merchant.
    pub return_shipping_cost: Decimal,
    /// Handling fee entered by the merchant.
    pub handling_fee: Decimal,
    /// Whether the record has been moved to the archive.
    pub is_archived: bool,
    /// When the record was saved.
    pub created_at: DateTime<Utc>,
}

/// Input for persisting a new return calculation.
#[derive(Debug, Clone, Deserialize)]
pub struct NewSavedReturn {
    /// Shopify order GID.
    pub shopify_order_id: String,
    /// Customer-facing order name.
    pub shopify_order_name: String,
    /// Net financial impact.
    pub net_profit_change: Decimal,
    /// Total refund issued.
    pub total_revenue_lost: Decimal,
    /// Inventory cost of the returned units.
    pub inventory_value: Decimal,
    /// Whether the items were judged resellable.
    pub is_resellable: bool,
    /// Advisory text.
    pub suggestion: String,
    /// Return reason label.
    pub return_reason: String,
    /// Condition label.
    pub product_condition: String,
    /// Return shipping cost.
    pub return_shipping_cost: Decimal,
    /// Handling fee.
    pub handling_fee: Decimal,
}

/// Aggregates for the at-a-glance analytics card.
#[derive(Debug, Clone, Serialize)]
pub struct ReturnAnalytics {
    /// Number of returns tracked in the range.
    pub total_returns: i64,
    /// Sum of net profit/loss over the range.
    pub total_net_profit_loss: Decimal,
    /// Most frequent return reason; `None` when no returns are tracked.
    /// Ties break to the lexically smallest reason.
    pub most_frequent_reason: Option<String>,
    /// Share of returns judged resellable, as a percentage.
    pub resellable_rate: Decimal,
}

/// Inclusive calendar-date range filter.
///
/// The filter only applies when both bounds are present, mirroring the
/// form that submits both fields together. The end date is inclusive
/// through the end of that calendar day.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct DateRange {
    /// First day included in the range.
    pub start: Option<NaiveDate>,
    /// Last day included in the range.
    pub end: Option<NaiveDate>,
}

impl DateRange {
    /// Returns `[start, end)` UTC timestamp bounds for SQL comparison, or
    /// `None` when the filter does not apply.
    ///
    /// The exclusive upper bound is midnight of the day after `end`, which
    /// makes the end date inclusive through 23:59:59.999....
    #[must_use]
    pub fn bounds(&self) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        let (start, end) = (self.start?, self.end?);
        let lower = Utc.from_utc_datetime(&start.and_hms_opt(0, 0, 0)?);
        let upper = Utc.from_utc_datetime(&end.succ_opt()?.and_hms_opt(0, 0, 0)?);
        Some((lower, upper))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn bounds_require_both_dates() {
        assert!(DateRange::default().bounds().is_none());
        assert!(
            DateRange {
                start: Some(date(2026, 1, 1)),
                end: None,
            }
            .bounds()
            .is_none()
        );
        assert!(
            DateRange {
                start: None,
                end: Some(date(2026, 1, 31)),
            }
            .bounds()
            .is_none()
        );
    }

    #[test]
    fn end_date_is_inclusive_through_day_end() {
        let range = DateRange {
            start: Some(date(2026, 1, 1)),
            end: Some(date(2026, 1, 31)),
        };
        let (lower, upper) = range.bounds().unwrap();

        assert_eq!(lower.to_rfc3339(), "2026-01-01T00:00:00+00:00");
        // Exclusive upper bound lands on midnight of February 1st, so all
        // of January 31st is included.
        assert_eq!(upper.to_rfc3339(), "2026-02-01T00:00:00+00:00");
    }

    #[test]
    fn single_day_range_spans_one_day() {
        let range = DateRange {
            start: Some(date(2026, 3, 15)),
            end: Some(date(2026, 3, 15)),
        };
        let (lower, upper) = range.bounds().unwrap();
        assert_eq!((upper - lower).num_days(), 1);
    }
}
