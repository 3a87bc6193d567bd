//! Database operations for saved return records.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;

use super::RepositoryError;
use crate::models::saved_return::{DateRange, NewSavedReturn, ReturnAnalytics, SavedReturn};

/// Internal row type for saved return queries.
#[derive(Debug, sqlx::FromRow)]
struct SavedReturnRow {
    id: i32,
    shopify_order_id: String,
    shopify_order_name: String,
    net_profit_change: Decimal,
    total_revenue_lost: Decimal,
    inventory_value: Decimal,
    is_resellable: bool,
    suggestion: String,
    return_reason: String,
    product_condition: String,
    return_shipping_cost: Decimal,
    handling_fee: Decimal,
    is_archived: bool,
    created_at: DateTime<Utc>,
}

impl From<SavedReturnRow> for SavedReturn {
    fn from(row: SavedReturnRow) -> Self {
        Self {
            id: row.id,
            shopify_order_id: row.shopify_order_id,
            shopify_order_name: row.shopify_order_name,
            net_profit_change: row.net_profit_change,
            total_revenue_lost: row.total_revenue_lost,
            inventory_value: row.inventory_value,
            is_resellable: row.is_resellable,
            suggestion: row.suggestion,
            return_reason: row.return_reason,
            product_condition: row.product_condition,
            return_shipping_cost: row.return_shipping_cost,
            handling_fee: row.handling_fee,
            is_archived: row.is_archived,
            created_at: row.created_at,
        }
    }
}

const SELECT_COLUMNS: &str = "id, shopify_order_id, shopify_order_name, net_profit_change, \
     total_revenue_lost, inventory_value, is_resellable, suggestion, return_reason, \
     product_condition, return_shipping_cost, handling_fee, is_archived, created_at";

/// Repository for `saved_returns` table operations.
///
/// All date-range filters bind optional `[start, end)` timestamps; a `NULL`
/// bound disables that side of the filter so one statement serves both the
/// filtered and unfiltered paths.
#[derive(Clone)]
pub struct SavedReturnRepository {
    pool: PgPool,
}

impl SavedReturnRepository {
    /// Create a repository over the given pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Persist a finalized return calculation as a new active record.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub async fn insert(&self, input: &NewSavedReturn) -> Result<SavedReturn, RepositoryError> {
        let sql = format!(
            "INSERT INTO saved_returns \
             (shopify_order_id, shopify_order_name, net_profit_change, total_revenue_lost, \
              inventory_value, is_resellable, suggestion, return_reason, product_condition, \
              return_shipping_cost, handling_fee) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11) \
             RETURNING {SELECT_COLUMNS}"
        );

        let row: SavedReturnRow = sqlx::query_as(&sql)
            .bind(&input.shopify_order_id)
            .bind(&input.shopify_order_name)
            .bind(input.net_profit_change)
            .bind(input.total_revenue_lost)
            .bind(input.inventory_value)
            .bind(input.is_resellable)
            .bind(&input.suggestion)
            .bind(&input.return_reason)
            .bind(&input.product_condition)
            .bind(input.return_shipping_cost)
            .bind(input.handling_fee)
            .fetch_one(&self.pool)
            .await?;

        Ok(row.into())
    }

    /// List active (non-archived) records, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn list_active(&self, range: DateRange) -> Result<Vec<SavedReturn>, RepositoryError> {
        let (lower, upper) = split_bounds(range);
        let sql = format!(
            "SELECT {SELECT_COLUMNS} FROM saved_returns \
             WHERE is_archived = FALSE \
               AND ($1::timestamptz IS NULL OR created_at >= $1) \
               AND ($2::timestamptz IS NULL OR created_at < $2) \
             ORDER BY created_at DESC"
        );

        let rows: Vec<SavedReturnRow> = sqlx::query_as(&sql)
            .bind(lower)
            .bind(upper)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(SavedReturn::from).collect())
    }

    /// List archived records, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn list_archived(&self) -> Result<Vec<SavedReturn>, RepositoryError> {
        let sql = format!(
            "SELECT {SELECT_COLUMNS} FROM saved_returns \
             WHERE is_archived = TRUE \
             ORDER BY created_at DESC"
        );

        let rows: Vec<SavedReturnRow> = sqlx::query_as(&sql).fetch_all(&self.pool).await?;

        Ok(rows.into_iter().map(SavedReturn::from).collect())
    }

    /// Compute the at-a-glance aggregates over active records.
    ///
    /// The most frequent reason breaks ties deterministically: highest
    /// count first, then the lexically smallest reason.
    ///
    /// # Errors
    ///
    /// Returns an error if any aggregate query fails.
    pub async fn analytics(&self, range: DateRange) -> Result<ReturnAnalytics, RepositoryError> {
        let (lower, upper) = split_bounds(range);

        let (total_returns, total_net_profit_loss, resellable_count): (i64, Decimal, i64) =
            sqlx::query_as(
                "SELECT COUNT(*), \
                        COALESCE(SUM(net_profit_change), 0), \
                        COUNT(*) FILTER (WHERE is_resellable) \
                 FROM saved_returns \
                 WHERE is_archived = FALSE \
                   AND ($1::timestamptz IS NULL OR created_at >= $1) \
                   AND ($2::timestamptz IS NULL OR created_at < $2)",
            )
            .bind(lower)
            .bind(upper)
            .fetch_one(&self.pool)
            .await?;

        let most_frequent_reason: Option<String> = sqlx::query_scalar(
            "SELECT return_reason FROM saved_returns \
             WHERE is_archived = FALSE \
               AND ($1::timestamptz IS NULL OR created_at >= $1) \
               AND ($2::timestamptz IS NULL OR created_at < $2) \
             GROUP BY return_reason \
             ORDER BY COUNT(*) DESC, return_reason ASC \
             LIMIT 1",
        )
        .bind(lower)
        .bind(upper)
        .fetch_optional(&self.pool)
        .await?;

        let resellable_rate = if total_returns > 0 {
            Decimal::from(resellable_count * 100) / Decimal::from(total_returns)
        } else {
            Decimal::ZERO
        };

        Ok(ReturnAnalytics {
            total_returns,
            total_net_profit_loss,
            most_frequent_reason,
            resellable_rate,
        })
    }

    /// Move every active record to the archive. Returns the number of
    /// records archived.
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails.
    pub async fn archive_all(&self) -> Result<u64, RepositoryError> {
        let result = sqlx::query("UPDATE saved_returns SET is_archived = TRUE WHERE is_archived = FALSE")
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Permanently delete every archived record. Returns the number of
    /// records deleted.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub async fn purge_archived(&self) -> Result<u64, RepositoryError> {
        let result = sqlx::query("DELETE FROM saved_returns WHERE is_archived = TRUE")
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}

/// Split a range into the two optional binds used by the SQL filters.
fn split_bounds(range: DateRange) -> (Option<DateTime<Utc>>, Option<DateTime<Utc>>) {
    range
        .bounds()
        .map_or((None, None), |(lower, upper)| (Some(lower), Some(upper)))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn split_bounds_passes_through_complete_ranges() {
        let range = DateRange {
            start: NaiveDate::from_ymd_opt(2026, 1, 1),
            end: NaiveDate::from_ymd_opt(2026, 1, 31),
        };
        let (lower, upper) = split_bounds(range);
        assert!(lower.is_some());
        assert!(upper.is_some());
        assert!(lower.unwrap() < upper.unwrap());
    }

    #[test]
    fn split_bounds_disables_filter_for_partial_ranges() {
        let range = DateRange {
            start: NaiveDate::from_ymd_opt(2026, 1, 1),
            end: None,
        };
        assert_eq!(split_bounds(range), (None, None));
    }
}
