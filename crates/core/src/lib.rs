//! ProfitGuard Core - Return profit/loss calculation engine.
//!
//! This crate contains the pure calculation pipeline used when a merchant
//! evaluates the financial impact of accepting a product return:
//!
//! 1. [`expand`] turns an order's line items into one record per physical
//!    unit so individual units can be selected for return.
//! 2. [`ReturnSelection`] tracks which units the merchant has checked.
//! 3. [`calculate`] produces the refund/cost/impact breakdown from the
//!    final selection plus shipping and handling fees.
//! 4. [`recommend`] maps the resellability determination to fixed advisory
//!    text and a severity tone.
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no
//! database access, no HTTP clients. Every function here is total and
//! deterministic: identical input always yields identical output, and
//! malformed monetary text degrades to zero instead of failing (see
//! [`parse_money_or_zero`]).
//!
//! All monetary values are `rust_decimal::Decimal`. The calculator keeps
//! full precision; rounding to two places happens only at the presentation
//! boundary via [`ReturnCalculationResult::rounded`].

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod calculator;
pub mod expander;
pub mod money;
pub mod recommendation;
pub mod selection;
pub mod types;

pub use calculator::calculate;
pub use expander::expand;
pub use money::parse_money_or_zero;
pub use recommendation::{
    NOT_RESELLABLE_SUGGESTION, RESELLABLE_SUGGESTION, Recommendation, SuggestionTone, recommend,
};
pub use selection::ReturnSelection;
pub use types::*;
