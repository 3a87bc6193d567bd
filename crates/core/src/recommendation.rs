//! Advisory text derived from the resellability determination.

use serde::{Deserialize, Serialize};

/// Severity tone attached to a suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionTone {
    /// Cash outlay is offset by recoverable inventory.
    Info,
    /// The return is a true loss.
    Critical,
}

/// A fixed recommendation for the merchant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Advisory text.
    pub suggestion: String,
    /// Severity tone.
    pub tone: SuggestionTone,
}

/// Advisory text when the returned items can be restocked.
pub const RESELLABLE_SUGGESTION: &str = "Although your immediate cash outlay is significant, the item(s) can be resold. This limits the true financial damage to the cost of processing the return. Accepting the return is likely the best path forward.";

/// Advisory text when the returned items cannot be resold.
pub const NOT_RESELLABLE_SUGGESTION: &str = "This return represents a true loss, as you are refunding the customer AND losing the value of the unsellable goods. To mitigate this, consider offering store credit or a partial refund without requiring a return.";

/// Maps the resellability flag to one of two fixed recommendation
/// templates. Deterministic and pure: the same flag always yields the same
/// text/tone pair.
#[must_use]
pub fn recommend(is_resellable: bool) -> Recommendation {
    if is_resellable {
        Recommendation {
            suggestion: RESELLABLE_SUGGESTION.to_string(),
            tone: SuggestionTone::Info,
        }
    } else {
        Recommendation {
            suggestion: NOT_RESELLABLE_SUGGESTION.to_string(),
            tone: SuggestionTone::Critical,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn resellable_gets_info_tone() {
        let rec = recommend(true);
        assert_eq!(rec.tone, SuggestionTone::Info);
        assert!(rec.suggestion.contains("can be resold"));
    }

    #[test]
    fn not_resellable_gets_critical_tone() {
        let rec = recommend(false);
        assert_eq!(rec.tone, SuggestionTone::Critical);
        assert!(rec.suggestion.contains("true loss"));
    }

    #[test]
    fn output_is_deterministic() {
        assert_eq!(recommend(true), recommend(true));
        assert_eq!(recommend(false), recommend(false));
    }

    #[test]
    fn tone_serializes_lowercase() {
        let json = serde_json::to_string(&SuggestionTone::Critical).unwrap();
        assert_eq!(json, "\"critical\"");
    }
}
