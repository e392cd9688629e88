//! Table presentation settings.
//!
//! A pure store: values are not validated here. A bad number format only
//! surfaces when a numeric cell is rendered.

use crate::error::TabweaveError;
use crate::Result;

/// Presentation settings for a rendered table.
///
/// Every option has a fixed default. Setters are fluent so a configurator
/// closure can chain overrides:
///
/// ```rust
/// use tabweavelib::Settings;
///
/// let mut settings = Settings::new();
/// settings
///     .set_number_format("%0.1f")
///     .set_table_class("report_table")
///     .set_display_nil_as("N/A");
/// assert_eq!(settings.number_format(), "%0.1f");
/// assert_eq!(settings.row_class(), "data");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    number_format: String,
    table_class: String,
    header_class: String,
    row_class: String,
    totals_class: String,
    display_nil_as: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            number_format: "%0.2f".to_string(),
            table_class: "results".to_string(),
            header_class: "headings".to_string(),
            row_class: "data".to_string(),
            totals_class: "totals".to_string(),
            display_nil_as: None,
        }
    }
}

impl Settings {
    /// Create settings with every option at its default
    pub fn new() -> Self {
        Self::default()
    }

    /// Format string applied to numeric cell values
    pub fn number_format(&self) -> &str {
        &self.number_format
    }

    /// CSS class on the table node
    pub fn table_class(&self) -> &str {
        &self.table_class
    }

    /// CSS class on the header row
    pub fn header_class(&self) -> &str {
        &self.header_class
    }

    /// CSS class on each data row
    pub fn row_class(&self) -> &str {
        &self.row_class
    }

    /// CSS class on the totals row
    pub fn totals_class(&self) -> &str {
        &self.totals_class
    }

    /// Substitution text for nil values; None renders empty cells
    pub fn display_nil_as(&self) -> Option<&str> {
        self.display_nil_as.as_deref()
    }

    /// Set the numeric format string
    pub fn set_number_format(&mut self, value: impl Into<String>) -> &mut Self {
        self.number_format = value.into();
        self
    }

    /// Set the table class
    pub fn set_table_class(&mut self, value: impl Into<String>) -> &mut Self {
        self.table_class = value.into();
        self
    }

    /// Set the header row class
    pub fn set_header_class(&mut self, value: impl Into<String>) -> &mut Self {
        self.header_class = value.into();
        self
    }

    /// Set the data row class
    pub fn set_row_class(&mut self, value: impl Into<String>) -> &mut Self {
        self.row_class = value.into();
        self
    }

    /// Set the totals row class
    pub fn set_totals_class(&mut self, value: impl Into<String>) -> &mut Self {
        self.totals_class = value.into();
        self
    }

    /// Set the nil substitution text
    pub fn set_display_nil_as(&mut self, value: impl Into<String>) -> &mut Self {
        self.display_nil_as = Some(value.into());
        self
    }

    /// Remove the nil substitution, restoring empty-cell behavior
    pub fn clear_display_nil_as(&mut self) -> &mut Self {
        self.display_nil_as = None;
        self
    }

    /// Assign an option by name.
    ///
    /// This is the dynamic configuration path (e.g. `--set option=value`
    /// from a CLI). Unknown option names fail fast rather than being
    /// silently ignored.
    pub fn set(&mut self, name: &str, value: &str) -> Result<&mut Self> {
        match name {
            "number_format" => self.set_number_format(value),
            "table_class" => self.set_table_class(value),
            "header_class" => self.set_header_class(value),
            "row_class" => self.set_row_class(value),
            "totals_class" => self.set_totals_class(value),
            "display_nil_as" => self.set_display_nil_as(value),
            _ => {
                return Err(TabweaveError::UnknownOption {
                    name: name.to_string(),
                })
            }
        };
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::new();
        assert_eq!(settings.number_format(), "%0.2f");
        assert_eq!(settings.table_class(), "results");
        assert_eq!(settings.header_class(), "headings");
        assert_eq!(settings.row_class(), "data");
        assert_eq!(settings.totals_class(), "totals");
        assert_eq!(settings.display_nil_as(), None);
    }

    #[test]
    fn test_fluent_overrides() {
        let mut settings = Settings::new();
        settings
            .set_number_format("%0.1f")
            .set_table_class("report_table")
            .set_header_class("report_heading")
            .set_display_nil_as("N/A");

        assert_eq!(settings.number_format(), "%0.1f");
        assert_eq!(settings.table_class(), "report_table");
        assert_eq!(settings.header_class(), "report_heading");
        assert_eq!(settings.display_nil_as(), Some("N/A"));
        // Untouched options keep their defaults
        assert_eq!(settings.row_class(), "data");
        assert_eq!(settings.totals_class(), "totals");
    }

    #[test]
    fn test_setter_overwrites_prior_value() {
        let mut settings = Settings::new();
        settings.set_row_class("first").set_row_class("second");
        assert_eq!(settings.row_class(), "second");
    }

    #[test]
    fn test_clear_display_nil_as() {
        let mut settings = Settings::new();
        settings.set_display_nil_as("N/A").clear_display_nil_as();
        assert_eq!(settings.display_nil_as(), None);
    }

    #[test]
    fn test_dynamic_set_known_options() {
        let mut settings = Settings::new();
        settings
            .set("table_class", "report_table")
            .unwrap()
            .set("display_nil_as", "-")
            .unwrap();
        assert_eq!(settings.table_class(), "report_table");
        assert_eq!(settings.display_nil_as(), Some("-"));
    }

    #[test]
    fn test_dynamic_set_unknown_option_fails() {
        let mut settings = Settings::new();
        let err = settings.set("font_size", "12").unwrap_err();
        assert!(matches!(
            err,
            TabweaveError::UnknownOption { ref name } if name == "font_size"
        ));
        // The store is untouched by a rejected assignment
        assert_eq!(settings, Settings::new());
    }
}
