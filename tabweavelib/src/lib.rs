//! # tabweavelib
//!
//! Renders tabular query results into an HTML-shaped markup tree: a table
//! node with a header row, one data row per record, and an optional totals
//! row.
//!
//! ## Overview
//!
//! The library sits between an already-executed query and a web page. It
//! does not execute queries, paginate, sort, or style anything; it takes
//! materialized keys and records and deterministically builds a node tree,
//! delegating every tag to a templating collaborator.
//!
//! The data pipeline is:
//! 1. Query data (`ReportQuery`: keys, records, options, optional totals)
//! 2. Presentation settings (`Settings`: CSS classes, number format, nil text)
//! 3. Markup tree (`Table::render` through a `Template` collaborator)
//!
//! ## Features
//!
//! - **Deterministic rendering**: column order follows `keys` everywhere;
//!   repeated renders produce identical trees
//! - **Configurator closures**: override settings fluently at construction
//! - **Dynamic settings path**: string-keyed assignment that fails fast on
//!   unknown option names
//! - **printf-style number formatting**: `"%0.2f"` and friends, applied to
//!   numeric cells only; malformed formats surface as errors at render time
//! - **Sparse records**: a missing field is a nil value, rendered empty or
//!   substituted via `display_nil_as`
//!
//! ## Example
//!
//! ```rust
//! use serde_json::json;
//! use tabweavelib::{HtmlTemplate, ReportQuery, ResultSet, Table};
//!
//! let results = ResultSet::new(
//!     vec!["item".to_string(), "cost".to_string()],
//!     vec![json!({"item": "widget", "cost": 2.5})
//!         .as_object()
//!         .unwrap()
//!         .clone()],
//! );
//! let query = ReportQuery::new(results);
//! let template = HtmlTemplate::new();
//!
//! let table = Table::configured(&template, &query, |settings| {
//!     settings.set_table_class("report").set_display_nil_as("-");
//! });
//! let node = table.render().unwrap();
//!
//! assert_eq!(
//!     node.to_html(),
//!     "<table class=\"report\">\
//!      <tr class=\"headings\"><th>item</th><th>cost</th></tr>\
//!      <tr class=\"data\"><td>widget</td><td>2.50</td></tr>\
//!      </table>"
//! );
//! ```

pub mod error;
pub mod markup;
pub mod output;
pub mod query;

pub use error::TabweaveError;
pub use markup::node::{AttrMap, Content, Node};
pub use markup::template::{HtmlTemplate, Template};
pub use output::format::{format_cell, format_number};
pub use output::settings::Settings;
pub use output::table::Table;
pub use query::options::QueryOptions;
pub use query::report::{Query, ReportQuery};
pub use query::result_set::{Record, Results, ResultSet};

/// Result type for tabweavelib operations
pub type Result<T> = std::result::Result<T, TabweaveError>;
