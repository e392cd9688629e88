//! The table presenter.
//!
//! Deterministically transforms `(Settings, Query)` into one markup node
//! tree, composing every node through the `Template` collaborator. Column
//! order in every row follows `results.keys`; no column is added, dropped,
//! or reordered based on record contents.
//!
//! Rendering is a pure in-memory pass over already-materialized records:
//! no I/O, and repeated `render` calls on an unmutated table produce
//! structurally identical trees.

use crate::markup::node::{AttrMap, Content, Node};
use crate::markup::template::Template;
use crate::query::report::Query;
use crate::query::result_set::Record;
use crate::Result;

use super::format::format_cell;
use super::settings::Settings;

/// Display key for the totals-row marker cell
const TOTALS_LABEL_KEY: &str = "totals";

/// Presents one query's results as a markup table.
///
/// Owns its `Settings`; borrows the template collaborator and the query.
/// Created per render request and cheap to drop.
pub struct Table<'a, T: Template + ?Sized, Q: Query + ?Sized> {
    template: &'a T,
    query: &'a Q,
    settings: Settings,
}

impl<'a, T, Q> Table<'a, T, Q>
where
    T: Template + ?Sized,
    Q: Query + ?Sized,
{
    /// Create a table with default settings
    pub fn new(template: &'a T, query: &'a Q) -> Self {
        Table {
            template,
            query,
            settings: Settings::default(),
        }
    }

    /// Create a table and run a configurator over its settings once,
    /// before first render
    pub fn configured(
        template: &'a T,
        query: &'a Q,
        configure: impl FnOnce(&mut Settings),
    ) -> Self {
        let mut table = Self::new(template, query);
        configure(&mut table.settings);
        table
    }

    /// Current settings
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Mutable settings, for adjustments between renders
    pub fn settings_mut(&mut self) -> &mut Settings {
        &mut self.settings
    }

    /// Render the table node.
    ///
    /// Children, in order: one header row, one data row per record, and a
    /// totals row only when the query's options carry an explicit
    /// `totals: true`. A formatting failure aborts the render; no partial
    /// tree is returned.
    pub fn render(&self) -> Result<Node> {
        let results = self.query.results();
        let keys = results.keys();
        let records = results.records();

        let mut rows = Vec::with_capacity(records.len() + 2);
        rows.push(self.header_row(keys));
        for record in records {
            rows.push(self.data_row(keys, record)?);
        }
        if self.query.options().totals_enabled() {
            rows.push(self.totals_row(keys)?);
        }

        Ok(self.template.build_tag(
            "table",
            class_attr(self.settings.table_class()),
            Content::Nodes(rows),
        ))
    }

    /// Header cells carry the raw field identifier, never number-formatted
    fn header_row(&self, keys: &[String]) -> Node {
        let cells = keys
            .iter()
            .map(|key| {
                self.template
                    .build_tag("th", AttrMap::new(), Content::Text(key.clone()))
            })
            .collect();
        self.template.build_tag(
            "tr",
            class_attr(self.settings.header_class()),
            Content::Nodes(cells),
        )
    }

    fn data_row(&self, keys: &[String], record: &Record) -> Result<Node> {
        let mut cells = Vec::with_capacity(keys.len());
        for key in keys {
            let text = format_cell(record.get(key), &self.settings)?;
            cells.push(
                self.template
                    .build_tag("td", AttrMap::new(), cell_content(text)),
            );
        }
        Ok(self.template.build_tag(
            "tr",
            class_attr(self.settings.row_class()),
            Content::Nodes(cells),
        ))
    }

    /// Aggregate values come from the query; the first column falls back to
    /// the translated totals marker when the aggregate record has no value
    /// for it.
    fn totals_row(&self, keys: &[String]) -> Result<Node> {
        let aggregates = self.query.totals();
        let mut cells = Vec::with_capacity(keys.len());
        for (index, key) in keys.iter().enumerate() {
            let value = aggregates.and_then(|record| record.get(key));
            let content = if index == 0 && value.is_none() {
                Content::Text(self.template.translate(TOTALS_LABEL_KEY))
            } else {
                cell_content(format_cell(value, &self.settings)?)
            };
            cells.push(self.template.build_tag("td", AttrMap::new(), content));
        }
        Ok(self.template.build_tag(
            "tr",
            class_attr(self.settings.totals_class()),
            Content::Nodes(cells),
        ))
    }
}

fn class_attr(class: &str) -> AttrMap {
    AttrMap::from([("class".to_string(), class.to_string())])
}

fn cell_content(text: Option<String>) -> Content {
    match text {
        Some(text) => Content::Text(text),
        None => Content::Empty,
    }
}
