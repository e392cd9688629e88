//! Query data: results, records, and options.
//!
//! This module holds the first stage of the pipeline - the contracts and
//! carriers for already-executed query data. It provides:
//!
//! - **Results** ([`result_set`]): the `Results` contract (`keys`/`records`)
//!   and the owned `ResultSet`
//! - **Options** ([`options`]): typed `QueryOptions` (the `totals` flag)
//! - **Providers** ([`report`]): the `Query` contract and the JSON-backed
//!   `ReportQuery`
//!
//! Execution, caching, pagination, sorting, and filtering all happen
//! upstream; this module only carries their output.
//!
//! ## Example
//!
//! ```rust,ignore
//! use tabweavelib::query::report::ReportQuery;
//!
//! let query: ReportQuery = serde_json::from_str(report_json)?;
//! assert!(query.options().totals_enabled());
//! ```

pub mod options;
pub mod report;
pub mod result_set;
