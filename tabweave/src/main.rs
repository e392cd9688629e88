//! # tabweave
//!
//! A CLI tool for rendering tabular query results as HTML tables.
//!
//! ## Overview
//!
//! tabweave is built on top of tabweavelib and provides a command-line
//! interface for turning a JSON report file into table markup. The report
//! shape is the library's `ReportQuery`:
//!
//! ```json
//! {
//!   "keys": ["item", "cost"],
//!   "records": [{"item": "widget", "cost": 2.5}],
//!   "options": {"totals": true},
//!   "totals": {"cost": 2.5}
//! }
//! ```
//!
//! ## Usage
//!
//! ```bash
//! # Render an HTML fragment to stdout
//! tabweave report.json
//!
//! # Override table settings
//! tabweave report.json --set table_class=report_table --set number_format=%0.1f
//!
//! # Substitute nil values
//! tabweave report.json --nil N/A
//!
//! # Emit a complete HTML page, or the raw node tree as JSON
//! tabweave report.json --output page --title "Q3 Report"
//! tabweave report.json --output json
//! ```

use std::process::ExitCode;

use anyhow::Context;
use clap::{Arg, ArgAction, ArgMatches, Command};
use tabweavelib::{HtmlTemplate, ReportQuery, Table};

mod page;

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("tabweave")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Render tabular query results from JSON as an HTML table")
        .arg(
            Arg::new("input")
                .required(true)
                .help("Report JSON file (keys, records, options, totals)"),
        )
        .arg(
            Arg::new("set")
                .short('s')
                .long("set")
                .action(ArgAction::Append)
                .value_name("OPTION=VALUE")
                .help("Override a table setting (can be specified multiple times)"),
        )
        .arg(
            Arg::new("nil")
                .long("nil")
                .value_name("TEXT")
                .help("Substitute TEXT for nil values (shorthand for display_nil_as)"),
        )
        .arg(
            Arg::new("translate")
                .short('t')
                .long("translate")
                .action(ArgAction::Append)
                .value_name("KEY=TEXT")
                .help("Register a display translation (can be specified multiple times)"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_parser(["html", "page", "json"])
                .default_value("html")
                .help("Output format: HTML fragment, full page, or node tree JSON"),
        )
        .arg(
            Arg::new("title")
                .long("title")
                .default_value("Report")
                .help("Page title for --output page"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue)
                .help("Increase output logging verbosity"),
        )
}

/// Split an OPTION=VALUE pair
fn parse_pair(pair: &str) -> Result<(&str, &str), anyhow::Error> {
    pair.split_once('=')
        .ok_or_else(|| anyhow::anyhow!("expected OPTION=VALUE, got '{pair}'"))
}

/// Load and parse a report file
fn load_report(path: &str) -> Result<ReportQuery, anyhow::Error> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read report '{path}'"))?;
    serde_json::from_str(&text).with_context(|| format!("failed to parse report '{path}'"))
}

fn run(matches: &ArgMatches) -> Result<String, anyhow::Error> {
    let input = matches
        .get_one::<String>("input")
        .ok_or_else(|| anyhow::anyhow!("missing report file"))?;
    let query = load_report(input)?;
    log::debug!("loaded {} records from {}", query.results.len(), input);

    let mut template = HtmlTemplate::new();
    if let Some(pairs) = matches.get_many::<String>("translate") {
        for pair in pairs {
            let (key, text) = parse_pair(pair)?;
            template = template.with_translation(key, text);
        }
    }

    let mut table = Table::new(&template, &query);
    if let Some(pairs) = matches.get_many::<String>("set") {
        for pair in pairs {
            let (name, value) = parse_pair(pair)?;
            table.settings_mut().set(name, value)?;
        }
    }
    if let Some(text) = matches.get_one::<String>("nil") {
        table.settings_mut().set_display_nil_as(text);
    }

    let node = table.render()?;
    log::debug!("rendered table with {} rows", node.children().len());

    let output = match matches.get_one::<String>("output").map(String::as_str) {
        Some("json") => serde_json::to_string_pretty(&node)?,
        Some("page") => {
            let title = matches
                .get_one::<String>("title")
                .map(String::as_str)
                .unwrap_or("Report");
            page::wrap(title, &node.to_html())
        }
        _ => node.to_html(),
    };
    Ok(output)
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();
    simple_logger::init_with_level(if matches.get_flag("verbose") {
        log::Level::Debug
    } else {
        log::Level::Warn
    })
    .unwrap();

    match run(&matches) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
