//! Error types for tabweavelib

use thiserror::Error;

/// Errors that can occur while configuring or rendering a table
#[derive(Error, Debug)]
pub enum TabweaveError {
    /// Unknown option name passed through the dynamic settings path
    #[error("unknown table setting '{name}'")]
    UnknownOption { name: String },

    /// A number format string that cannot be applied to a numeric value
    #[error("invalid number format '{format}': {reason}")]
    NumberFormat { format: String, reason: String },
}
