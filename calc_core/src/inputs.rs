//! # Input Parsing
//!
//! Turns the raw text a user typed into numbers and dates.
//!
//! Numeric fields follow a [`ParsePolicy`]. The policy is chosen once (per app or
//! per CLI invocation) and applies to every calculator the same way:
//!
//! - [`ParsePolicy::Strict`] (default) - empty or non-numeric text is an
//!   [`CalcError::InvalidInput`]
//! - [`ParsePolicy::CoerceZero`] - unparseable text silently becomes `0.0`
//!
//! Dates are always strict: `YYYY-MM-DD`, four-digit year, two-digit month and day.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::inputs::{parse_number, ParsePolicy};
//!
//! assert_eq!(parse_number("principal", " 1500 ", ParsePolicy::Strict).unwrap(), 1500.0);
//! assert!(parse_number("principal", "abc", ParsePolicy::Strict).is_err());
//! assert_eq!(parse_number("principal", "abc", ParsePolicy::CoerceZero).unwrap(), 0.0);
//! ```

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Expected date layout for the age calculator
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// How unparseable numeric text is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ParsePolicy {
    /// Reject empty, non-numeric and non-finite text
    #[default]
    Strict,
    /// Treat anything unparseable as zero
    CoerceZero,
}

impl ParsePolicy {
    pub const ALL: [ParsePolicy; 2] = [ParsePolicy::Strict, ParsePolicy::CoerceZero];

    /// Identifier used in config files and on the command line
    pub fn id(&self) -> &'static str {
        match self {
            ParsePolicy::Strict => "strict",
            ParsePolicy::CoerceZero => "coerce-zero",
        }
    }
}

impl fmt::Display for ParsePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ParsePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        ParsePolicy::ALL
            .into_iter()
            .find(|p| p.id() == wanted)
            .ok_or_else(|| format!("unknown parse policy '{}' (expected strict or coerce-zero)", s))
    }
}

/// Parse one numeric field under the given policy.
///
/// `field` names the input in the error so callers can point at it.
pub fn parse_number(field: &str, text: &str, policy: ParsePolicy) -> CalcResult<f64> {
    let trimmed = text.trim();
    let parsed = trimmed.parse::<f64>().ok().filter(|v| v.is_finite());

    match (parsed, policy) {
        (Some(value), _) => Ok(value),
        (None, ParsePolicy::CoerceZero) => {
            log::debug!("coercing unparseable '{}' for {} to 0", trimmed, field);
            Ok(0.0)
        }
        (None, ParsePolicy::Strict) if trimmed.is_empty() => {
            Err(CalcError::invalid_input(field, text, "Value is required"))
        }
        (None, ParsePolicy::Strict) => Err(CalcError::invalid_input(field, text, "Not a finite number")),
    }
}

/// Parse a `YYYY-MM-DD` calendar date.
pub fn parse_date(text: &str) -> CalcResult<NaiveDate> {
    let trimmed = text.trim();
    let shaped = trimmed.len() == 10
        && trimmed.char_indices().all(|(i, c)| match i {
            4 | 7 => c == '-',
            _ => c.is_ascii_digit(),
        });
    if !shaped {
        return Err(CalcError::invalid_date(text, "Expected YYYY-MM-DD"));
    }

    NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .map_err(|e| CalcError::invalid_date(text, format!("Not a calendar date ({})", e)))
}
