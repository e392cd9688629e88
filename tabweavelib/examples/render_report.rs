//! Renders a small sample report to stdout as an HTML fragment.
//!
//! Run with: cargo run -p tabweavelib --example render_report

use serde_json::json;
use tabweavelib::{HtmlTemplate, QueryOptions, Record, ReportQuery, ResultSet, Table};

fn record(value: serde_json::Value) -> Record {
    value.as_object().expect("record fixture").clone()
}

fn main() -> tabweavelib::Result<()> {
    let results = ResultSet::new(
        vec!["item".to_string(), "quantity".to_string(), "cost".to_string()],
        vec![
            record(json!({"item": "widget", "quantity": 12, "cost": 2.5})),
            record(json!({"item": "gadget", "quantity": 3, "cost": 4.75})),
            record(json!({"item": "gizmo", "quantity": 7})),
        ],
    );
    let query = ReportQuery::new(results)
        .with_options(QueryOptions::new().with_totals(true))
        .with_totals(record(json!({"quantity": 22, "cost": 16.75})));

    let template = HtmlTemplate::new().with_translation("totals", "Total");
    let table = Table::configured(&template, &query, |settings| {
        settings
            .set_table_class("inventory")
            .set_number_format("%0.2f")
            .set_display_nil_as("n/a");
    });

    println!("{}", table.render()?.to_html());
    Ok(())
}
