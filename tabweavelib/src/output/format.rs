//! Cell value formatting.
//!
//! Pure functions from `(value, settings)` to display text, independent of
//! the templating collaborator so they can be tested on their own.
//!
//! The number format language is a printf-style string with exactly one
//! placeholder: optional literal text around `%[flags][width][.precision]C`
//! where flags are `0`, `-`, `+`, and space, and the conversion `C` is `f`
//! (fixed-point), `d`/`i` (truncating integer), or `s` (shortest form).
//! `%%` escapes a literal percent sign. Anything else is a render-time
//! [`TabweaveError::NumberFormat`].

use serde_json::Value;

use crate::error::TabweaveError;
use crate::Result;

use super::settings::Settings;

/// Format one data cell.
///
/// Returns `Ok(None)` for a nil value with no `display_nil_as` configured;
/// the caller renders that as absent content. Number formatting applies to
/// numeric values only; strings and booleans pass through untouched.
pub fn format_cell(value: Option<&Value>, settings: &Settings) -> Result<Option<String>> {
    let value = match value {
        None | Some(Value::Null) => {
            return Ok(settings.display_nil_as().map(str::to_string));
        }
        Some(value) => value,
    };

    let text = match value {
        Value::Number(number) => match number.as_f64() {
            Some(number) => format_number(settings.number_format(), number)?,
            None => number.to_string(),
        },
        Value::String(text) => text.clone(),
        Value::Bool(flag) => flag.to_string(),
        other => other.to_string(),
    };
    Ok(Some(text))
}

/// Apply a printf-style format string to a numeric value.
pub fn format_number(format: &str, value: f64) -> Result<String> {
    let (prefix, placeholder, suffix) = parse_format(format)?;
    Ok(format!("{prefix}{}{suffix}", placeholder.apply(value)))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Conversion {
    /// `f`: fixed-point, default precision 6
    #[default]
    Fixed,
    /// `d`/`i`: truncate toward zero
    Integer,
    /// `s`: integers without a fraction, everything else as-is
    Shortest,
}

#[derive(Debug, Clone, Copy, Default)]
struct Placeholder {
    zero: bool,
    minus: bool,
    plus: bool,
    space: bool,
    width: Option<usize>,
    precision: Option<usize>,
    conversion: Conversion,
}

impl Placeholder {
    fn apply(&self, value: f64) -> String {
        let mut body = match self.conversion {
            Conversion::Fixed => {
                let precision = self.precision.unwrap_or(6);
                format!("{:.*}", precision, value)
            }
            Conversion::Integer => format!("{}", value.trunc() as i64),
            Conversion::Shortest => {
                if value.fract() == 0.0 && value.abs() < 9.007_199_254_740_992e15 {
                    format!("{}", value as i64)
                } else {
                    format!("{}", value)
                }
            }
        };
        if !body.starts_with('-') {
            if self.plus {
                body.insert(0, '+');
            } else if self.space {
                body.insert(0, ' ');
            }
        }
        self.pad(body)
    }

    fn pad(&self, body: String) -> String {
        let width = match self.width {
            Some(width) => width,
            None => return body,
        };
        let len = body.chars().count();
        if len >= width {
            return body;
        }
        let fill = width - len;
        if self.minus {
            format!("{body}{}", " ".repeat(fill))
        } else if self.zero {
            // Zeros go between the sign and the digits
            let (sign, digits) = match body.strip_prefix(['-', '+', ' ']) {
                Some(rest) => (&body[..body.len() - rest.len()], rest),
                None => ("", body.as_str()),
            };
            format!("{sign}{}{digits}", "0".repeat(fill))
        } else {
            format!("{}{body}", " ".repeat(fill))
        }
    }
}

fn parse_format(format: &str) -> Result<(String, Placeholder, String)> {
    let err = |reason: String| TabweaveError::NumberFormat {
        format: format.to_string(),
        reason,
    };

    let mut prefix = String::new();
    let mut suffix = String::new();
    let mut placeholder: Option<Placeholder> = None;
    let mut chars = format.chars().peekable();

    while let Some(ch) = chars.next() {
        let seen_placeholder = placeholder.is_some();
        let literal = if seen_placeholder {
            &mut suffix
        } else {
            &mut prefix
        };
        if ch != '%' {
            literal.push(ch);
            continue;
        }
        if chars.peek() == Some(&'%') {
            chars.next();
            literal.push('%');
            continue;
        }
        if seen_placeholder {
            return Err(err("more than one placeholder".to_string()));
        }

        let mut parsed = Placeholder::default();
        while let Some(&flag) = chars.peek() {
            match flag {
                '0' => parsed.zero = true,
                '-' => parsed.minus = true,
                '+' => parsed.plus = true,
                ' ' => parsed.space = true,
                _ => break,
            }
            chars.next();
        }

        let mut digits = String::new();
        while let Some(&digit) = chars.peek() {
            if !digit.is_ascii_digit() {
                break;
            }
            digits.push(digit);
            chars.next();
        }
        if !digits.is_empty() {
            parsed.width = Some(
                digits
                    .parse()
                    .map_err(|_| err("width out of range".to_string()))?,
            );
        }

        if chars.peek() == Some(&'.') {
            chars.next();
            let mut digits = String::new();
            while let Some(&digit) = chars.peek() {
                if !digit.is_ascii_digit() {
                    break;
                }
                digits.push(digit);
                chars.next();
            }
            parsed.precision = if digits.is_empty() {
                Some(0)
            } else {
                Some(
                    digits
                        .parse()
                        .map_err(|_| err("precision out of range".to_string()))?,
                )
            };
        }

        parsed.conversion = match chars.next() {
            Some('f') => Conversion::Fixed,
            Some('d') | Some('i') => Conversion::Integer,
            Some('s') => Conversion::Shortest,
            Some(other) => return Err(err(format!("unsupported conversion '{other}'"))),
            None => return Err(err("missing conversion".to_string())),
        };
        placeholder = Some(parsed);
    }

    match placeholder {
        Some(parsed) => Ok((prefix, parsed, suffix)),
        None => Err(err("no placeholder".to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_format() {
        assert_eq!(format_number("%0.2f", 1.0).unwrap(), "1.00");
        assert_eq!(format_number("%0.2f", 3.456).unwrap(), "3.46");
        assert_eq!(format_number("%0.2f", -2.0).unwrap(), "-2.00");
    }

    #[test]
    fn test_single_decimal() {
        assert_eq!(format_number("%0.1f", 2.0).unwrap(), "2.0");
    }

    #[test]
    fn test_fixed_default_precision() {
        assert_eq!(format_number("%f", 1.5).unwrap(), "1.500000");
    }

    #[test]
    fn test_integer_conversion_truncates() {
        assert_eq!(format_number("%d", 7.9).unwrap(), "7");
        assert_eq!(format_number("%i", -7.9).unwrap(), "-7");
    }

    #[test]
    fn test_shortest_conversion() {
        assert_eq!(format_number("%s", 5.0).unwrap(), "5");
        assert_eq!(format_number("%s", 2.5).unwrap(), "2.5");
    }

    #[test]
    fn test_literal_prefix_and_suffix() {
        assert_eq!(format_number("$%0.2f", 2.5).unwrap(), "$2.50");
        assert_eq!(format_number("%0.1f%%", 12.5).unwrap(), "12.5%");
    }

    #[test]
    fn test_zero_padded_width() {
        assert_eq!(format_number("%08.2f", 3.14).unwrap(), "00003.14");
        assert_eq!(format_number("%08.2f", -3.14).unwrap(), "-0003.14");
    }

    #[test]
    fn test_space_padded_width() {
        assert_eq!(format_number("%8.2f", 3.14).unwrap(), "    3.14");
    }

    #[test]
    fn test_left_aligned_width() {
        assert_eq!(format_number("%-6d", 42.0).unwrap(), "42    ");
    }

    #[test]
    fn test_plus_and_space_flags() {
        assert_eq!(format_number("%+.1f", 5.0).unwrap(), "+5.0");
        assert_eq!(format_number("%+.1f", -5.0).unwrap(), "-5.0");
        assert_eq!(format_number("% .0f", 5.0).unwrap(), " 5");
    }

    #[test]
    fn test_no_placeholder_is_error() {
        let err = format_number("total", 1.0).unwrap_err();
        assert!(matches!(err, TabweaveError::NumberFormat { .. }));
    }

    #[test]
    fn test_multiple_placeholders_is_error() {
        assert!(format_number("%d%d", 1.0).is_err());
    }

    #[test]
    fn test_unknown_conversion_is_error() {
        let err = format_number("%0.2q", 1.0).unwrap_err();
        match err {
            TabweaveError::NumberFormat { format, reason } => {
                assert_eq!(format, "%0.2q");
                assert!(reason.contains('q'));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_dangling_percent_is_error() {
        assert!(format_number("%", 1.0).is_err());
    }

    #[test]
    fn test_cell_nil_with_substitution() {
        let mut settings = Settings::new();
        settings.set_display_nil_as("N/A");
        assert_eq!(
            format_cell(None, &settings).unwrap(),
            Some("N/A".to_string())
        );
        assert_eq!(
            format_cell(Some(&Value::Null), &settings).unwrap(),
            Some("N/A".to_string())
        );
    }

    #[test]
    fn test_cell_nil_without_substitution() {
        let settings = Settings::new();
        assert_eq!(format_cell(None, &settings).unwrap(), None);
        assert_eq!(format_cell(Some(&Value::Null), &settings).unwrap(), None);
    }

    #[test]
    fn test_cell_number_uses_number_format() {
        let settings = Settings::new();
        let value = json!(2.5);
        assert_eq!(
            format_cell(Some(&value), &settings).unwrap(),
            Some("2.50".to_string())
        );
    }

    #[test]
    fn test_cell_string_passes_through() {
        let settings = Settings::new();
        let value = json!("widget");
        assert_eq!(
            format_cell(Some(&value), &settings).unwrap(),
            Some("widget".to_string())
        );
    }

    #[test]
    fn test_cell_bool_passes_through() {
        let settings = Settings::new();
        let value = json!(true);
        assert_eq!(
            format_cell(Some(&value), &settings).unwrap(),
            Some("true".to_string())
        );
    }

    #[test]
    fn test_cell_bad_format_only_fails_numerics() {
        let mut settings = Settings::new();
        settings.set_number_format("%q");

        let text = json!("widget");
        assert!(format_cell(Some(&text), &settings).is_ok());

        let number = json!(1);
        assert!(format_cell(Some(&number), &settings).is_err());
    }
}
