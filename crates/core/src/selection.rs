//! Selection state for units being returned.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// The set of unit ids the merchant has marked as returned.
///
/// Backed by a `BTreeSet` so iteration order is stable for display and
/// serialization. Cleared whenever a new order is looked up.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReturnSelection {
    unit_ids: BTreeSet<String>,
}

impl ReturnSelection {
    /// Creates an empty selection.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            unit_ids: BTreeSet::new(),
        }
    }

    /// Toggles a unit id: removed if present, added otherwise.
    pub fn toggle(&mut self, unit_id: &str) {
        if !self.unit_ids.remove(unit_id) {
            self.unit_ids.insert(unit_id.to_string());
        }
    }

    /// Clears the selection.
    pub fn reset(&mut self) {
        self.unit_ids.clear();
    }

    /// Whether the unit is currently selected.
    #[must_use]
    pub fn contains(&self, unit_id: &str) -> bool {
        self.unit_ids.contains(unit_id)
    }

    /// Number of selected units.
    #[must_use]
    pub fn len(&self) -> usize {
        self.unit_ids.len()
    }

    /// Whether nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.unit_ids.is_empty()
    }

    /// Iterates over the selected unit ids in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.unit_ids.iter().map(String::as_str)
    }
}

impl FromIterator<String> for ReturnSelection {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            unit_ids: iter.into_iter().collect(),
        }
    }
}
