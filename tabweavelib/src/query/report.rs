//! The query provider contract and the standard JSON-backed implementation.

use serde::{Deserialize, Serialize};

use super::options::QueryOptions;
use super::result_set::{Record, Results, ResultSet};

/// A provider of materialized results plus presentation-affecting options.
///
/// The presenter consumes this read-only. Aggregates for the totals row are
/// supplied by the query, never computed by the presenter.
pub trait Query {
    /// The result set to present
    fn results(&self) -> &dyn Results;

    /// Options attached to the query
    fn options(&self) -> &QueryOptions;

    /// Aggregate record backing the totals row, keyed like a data record.
    /// None when the query supplies no aggregates.
    fn totals(&self) -> Option<&Record> {
        None
    }
}

/// A fully materialized report query.
///
/// Deserializes from the JSON shape
/// `{"keys": [...], "records": [...], "options": {...}, "totals": {...}}`,
/// which is also what the CLI reads from disk.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportQuery {
    /// Keys and records
    #[serde(flatten)]
    pub results: ResultSet,
    /// Presentation-affecting options
    #[serde(default)]
    pub options: QueryOptions,
    /// Aggregate totals record, if the producing query computed one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub totals: Option<Record>,
}

impl ReportQuery {
    /// Create a query over a result set, with default options
    pub fn new(results: ResultSet) -> Self {
        ReportQuery {
            results,
            options: QueryOptions::default(),
            totals: None,
        }
    }

    /// Builder: attach options
    pub fn with_options(mut self, options: QueryOptions) -> Self {
        self.options = options;
        self
    }

    /// Builder: attach an aggregate totals record
    pub fn with_totals(mut self, totals: Record) -> Self {
        self.totals = Some(totals);
        self
    }
}

impl Query for ReportQuery {
    fn results(&self) -> &dyn Results {
        &self.results
    }

    fn options(&self) -> &QueryOptions {
        &self.options
    }

    fn totals(&self) -> Option<&Record> {
        self.totals.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_full_report() {
        let query: ReportQuery = serde_json::from_value(json!({
            "keys": ["item", "cost"],
            "records": [
                {"item": "widget", "cost": 2.5},
                {"item": "gadget", "cost": 4.0}
            ],
            "options": {"totals": true},
            "totals": {"cost": 6.5}
        }))
        .unwrap();

        assert_eq!(query.results.keys, ["item", "cost"]);
        assert_eq!(query.results.len(), 2);
        assert!(query.options.totals_enabled());
        assert_eq!(query.totals.as_ref().unwrap()["cost"], json!(6.5));
    }

    #[test]
    fn test_deserialize_minimal_report() {
        let query: ReportQuery = serde_json::from_value(json!({
            "keys": ["item"],
            "records": []
        }))
        .unwrap();

        assert!(!query.options.totals_enabled());
        assert!(query.totals.is_none());
    }

    #[test]
    fn test_builder_chain() {
        let query = ReportQuery::new(ResultSet::new(vec!["n".to_string()], vec![]))
            .with_options(QueryOptions::new().with_totals(true))
            .with_totals(json!({"n": 0}).as_object().unwrap().clone());

        assert!(query.options().totals_enabled());
        assert!(Query::totals(&query).is_some());
    }
}
