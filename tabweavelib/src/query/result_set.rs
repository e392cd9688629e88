//! Result sets: ordered column keys plus records.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One row of result data, keyed by field identifier.
///
/// Records may be sparse; a missing key is a nil value, not an error.
pub type Record = Map<String, Value>;

/// Read-only view over tabular results.
///
/// `keys` is the single source of truth for column identity and order.
/// Tests can supply a lightweight fake satisfying this contract.
pub trait Results {
    /// Field identifiers, in column order
    fn keys(&self) -> &[String];

    /// Records, in row order
    fn records(&self) -> &[Record];
}

/// Owned, fully materialized results.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultSet {
    /// Field identifiers defining column order
    pub keys: Vec<String>,
    /// Rows, in insertion order
    #[serde(default)]
    pub records: Vec<Record>,
}

impl ResultSet {
    /// Create a result set from keys and records
    pub fn new(keys: Vec<String>, records: Vec<Record>) -> Self {
        ResultSet { keys, records }
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when there are no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Results for ResultSet {
    fn keys(&self) -> &[String] {
        &self.keys
    }

    fn records(&self) -> &[Record] {
        &self.records
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_result_set_preserves_order() {
        let set = ResultSet::new(
            vec!["one".to_string(), "two".to_string()],
            vec![
                json!({"one": 1, "two": 2}).as_object().unwrap().clone(),
                json!({"one": 3, "two": 4}).as_object().unwrap().clone(),
            ],
        );
        assert_eq!(set.keys(), ["one", "two"]);
        assert_eq!(set.len(), 2);
        assert_eq!(set.records()[1]["one"], json!(3));
    }

    #[test]
    fn test_sparse_record_lookup() {
        let set = ResultSet::new(
            vec!["one".to_string(), "two".to_string()],
            vec![json!({"one": 1}).as_object().unwrap().clone()],
        );
        assert!(set.records()[0].get("two").is_none());
    }
}
