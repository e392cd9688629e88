//! Output presentation: settings, formatting, and the table presenter.
//!
//! This module handles the final stage of the pipeline - turning query data
//! into a markup node tree. It provides:
//!
//! - **Settings** ([`settings`]): the presentation option store with fixed
//!   defaults, fluent setters, and the fail-fast dynamic path
//! - **Formatting** ([`format`]): pure cell-value formatting, including the
//!   printf-style number format language
//! - **Table** ([`table`]): the presenter that composes header, data, and
//!   totals rows through the `Template` collaborator
//!
//! The presenter is a pure presentation layer: aggregation for the totals
//! row is supplied by the query, and all sorting/filtering happened
//! upstream.
//!
//! ## Example
//!
//! ```rust,ignore
//! use tabweavelib::output::table::Table;
//!
//! let table = Table::configured(&template, &query, |s| {
//!     s.set_table_class("report_table").set_display_nil_as("N/A");
//! });
//! let node = table.render()?;
//! ```

pub mod format;
pub mod settings;
pub mod table;
