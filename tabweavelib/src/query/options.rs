//! Query options that affect presentation.
//!
//! The original loosely-typed options bag is replaced by an explicit
//! structure; only the `totals` flag is consumed by the table presenter.

use serde::{Deserialize, Serialize};

/// Options attached to a query.
///
/// The totals row is appended only on an explicit `true`; an absent flag
/// and an explicit `false` both suppress it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct QueryOptions {
    /// Request an aggregate totals row
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub totals: Option<bool>,
}

impl QueryOptions {
    /// Create options with nothing requested
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set the totals flag explicitly
    pub fn with_totals(mut self, totals: bool) -> Self {
        self.totals = Some(totals);
        self
    }

    /// Whether a totals row should be rendered
    pub fn totals_enabled(&self) -> bool {
        self.totals == Some(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_totals_absent_is_disabled() {
        assert!(!QueryOptions::new().totals_enabled());
    }

    #[test]
    fn test_totals_false_is_disabled() {
        assert!(!QueryOptions::new().with_totals(false).totals_enabled());
    }

    #[test]
    fn test_totals_true_is_enabled() {
        assert!(QueryOptions::new().with_totals(true).totals_enabled());
    }

    #[test]
    fn test_deserialize_missing_totals() {
        let options: QueryOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options.totals, None);
        assert!(!options.totals_enabled());
    }

    #[test]
    fn test_deserialize_explicit_totals() {
        let options: QueryOptions = serde_json::from_str(r#"{"totals": true}"#).unwrap();
        assert!(options.totals_enabled());
    }
}
