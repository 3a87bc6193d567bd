//! Application state shared across handlers.

use std::sync::Arc;

use sqlx::PgPool;

use crate::config::AppConfig;
use crate::db::SavedReturnRepository;
use crate::shopify::ShopifyClient;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: AppConfig,
    pool: PgPool,
    shopify: ShopifyClient,
    returns: SavedReturnRepository,
}

impl AppState {
    /// Build the application state from configuration and a database pool.
    #[must_use]
    pub fn new(config: AppConfig, pool: PgPool) -> Self {
        let shopify = ShopifyClient::new(&config.shopify);
        let returns = SavedReturnRepository::new(pool.clone());

        Self {
            inner: Arc::new(AppStateInner {
                config,
                pool,
                shopify,
                returns,
            }),
        }
    }

    /// Application configuration.
    #[must_use]
    pub fn config(&self) -> &AppConfig {
        &self.inner.config
    }

    /// Database connection pool.
    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.inner.pool
    }

    /// Shopify Admin API client.
    #[must_use]
    pub fn shopify(&self) -> &ShopifyClient {
        &self.inner.shopify
    }

    /// Saved return repository.
    #[must_use]
    pub fn returns(&self) -> &SavedReturnRepository {
        &self.inner.returns
    }
}
