//! Domain models for persisted return records.

pub mod saved_return;

pub use saved_return::{DateRange, NewSavedReturn, ReturnAnalytics, SavedReturn};
