//! ProfitGuard server library.
//!
//! Serves the return profit/loss calculator as a JSON API backed by
//! `PostgreSQL` and the Shopify Admin API.
//!
//! # Architecture
//!
//! - Axum web framework
//! - Shopify Admin API (GraphQL) for order lookup
//! - `PostgreSQL` for saved return history and analytics
//! - `profitguard-core` for the pure calculation engine

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod shopify;
pub mod state;
