//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET    /health                 - Liveness check
//! GET    /health/ready           - Readiness check (pings the database)
//!
//! # Calculator
//! GET    /api/analytics          - At-a-glance aggregates (date-range filter)
//! POST   /api/orders/lookup      - Look up an order by number or GID
//! POST   /api/returns/calculate  - Run the profit/loss calculation
//! POST   /api/returns            - Persist a finalized calculation
//!
//! # History
//! GET    /api/history            - Active records (date-range filter)
//! POST   /api/history/archive    - Archive all active records
//!
//! # Archive
//! GET    /api/archive            - Archived records
//! DELETE /api/archive            - Permanently delete archived records
//! ```

pub mod analytics;
pub mod archive;
pub mod history;
pub mod orders;
pub mod returns;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Build the application router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/analytics", get(analytics::get_analytics))
        .route("/api/orders/lookup", post(orders::lookup_order))
        .route("/api/returns/calculate", post(returns::calculate_return))
        .route("/api/returns", post(returns::save_return))
        .route("/api/history", get(history::list_history))
        .route("/api/history/archive", post(history::archive_history))
        .route(
            "/api/archive",
            get(archive::list_archive).delete(archive::purge_archive),
        )
}
