//! # Calculation Reports
//!
//! A [`Report`] is the formatted success payload of one calculation: an ordered
//! list of labeled values, each carrying its own display precision. Every
//! calculator builds its report through the same small builder, so the
//! "labeled fields to result string" logic exists once.
//!
//! ```rust
//! use calc_core::calculations::Feature;
//! use calc_core::report::Report;
//!
//! let report = Report::new(Feature::SimpleInterest)
//!     .number("interest", "Simple Interest", 150.0, 2)
//!     .unwrap();
//! assert_eq!(report.to_string(), "Simple Interest: 150.00");
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::calculations::Feature;
use crate::errors::{CalcError, CalcResult};

/// Decimal places for financial and physical results
pub const MONEY_DECIMALS: usize = 2;

/// Decimal places for scientific results
pub const SCIENTIFIC_DECIMALS: usize = 4;

/// One displayed value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldValue {
    /// Floating point value rendered with fixed precision
    Number { value: f64, decimals: usize },
    /// Whole count with a unit suffix (e.g. "24 years")
    Count { value: i64, unit: String },
    /// Free text (e.g. a BMI category)
    Text { text: String },
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Number { value, decimals } => write!(f, "{:.*}", decimals, value),
            FieldValue::Count { value, unit } => write!(f, "{} {}", value, unit),
            FieldValue::Text { text } => f.write_str(text),
        }
    }
}

/// A labeled value inside a report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportField {
    /// Stable machine key (e.g. "interest", "total")
    pub key: String,
    /// Human label (e.g. "Compound Interest")
    pub label: String,
    pub value: FieldValue,
}

impl ReportField {
    /// The value as displayed, e.g. "210.00"
    pub fn display_value(&self) -> String {
        self.value.to_string()
    }
}

/// Formatted success payload of a calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub feature: Feature,
    pub fields: Vec<ReportField>,
}

impl Report {
    /// Start an empty report for a feature.
    pub fn new(feature: Feature) -> Self {
        Report {
            feature,
            fields: Vec::new(),
        }
    }

    /// Append a fixed-precision number.
    ///
    /// Non-finite values are rejected as a domain error; a report never shows
    /// `inf` or `NaN`.
    pub fn number(
        mut self,
        key: &str,
        label: &str,
        value: f64,
        decimals: usize,
    ) -> CalcResult<Self> {
        if !value.is_finite() {
            return Err(CalcError::domain_error(
                self.feature.id(),
                value.to_string(),
                format!("{} is not a finite number", label),
            ));
        }
        self.fields.push(ReportField {
            key: key.to_string(),
            label: label.to_string(),
            value: FieldValue::Number { value, decimals },
        });
        Ok(self)
    }

    /// Append a whole count with a unit suffix.
    pub fn count(mut self, key: &str, label: &str, value: i64, unit: &str) -> Self {
        self.fields.push(ReportField {
            key: key.to_string(),
            label: label.to_string(),
            value: FieldValue::Count {
                value,
                unit: unit.to_string(),
            },
        });
        self
    }

    /// Append a text value.
    pub fn text(mut self, key: &str, label: &str, text: impl Into<String>) -> Self {
        self.fields.push(ReportField {
            key: key.to_string(),
            label: label.to_string(),
            value: FieldValue::Text { text: text.into() },
        });
        self
    }

    /// Look up a field by key.
    pub fn field(&self, key: &str) -> Option<&ReportField> {
        self.fields.iter().find(|f| f.key == key)
    }

    /// Raw numeric value of a field, if it is a number.
    pub fn value(&self, key: &str) -> Option<f64> {
        match self.field(key)?.value {
            FieldValue::Number { value, .. } => Some(value),
            FieldValue::Count { value, .. } => Some(value as f64),
            FieldValue::Text { .. } => None,
        }
    }

    /// Displayed (rounded) text of a field.
    pub fn display(&self, key: &str) -> Option<String> {
        self.field(key).map(ReportField::display_value)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, field) in self.fields.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}: {}", field.label, field.value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multi_line_display() {
        let report = Report::new(Feature::CompoundInterest)
            .number("interest", "Compound Interest", 210.0, 2)
            .unwrap()
            .number("total", "Total Amount", 1210.0, 2)
            .unwrap();
        assert_eq!(report.to_string(), "Compound Interest: 210.00\nTotal Amount: 1210.00");
    }

    #[test]
    fn test_scientific_precision() {
        let report = Report::new(Feature::Scientific)
            .number("result", "Result", 0.5, SCIENTIFIC_DECIMALS)
            .unwrap();
        assert_eq!(report.display("result").unwrap(), "0.5000");
    }

    #[test]
    fn test_count_and_text() {
        let report = Report::new(Feature::Bmi)
            .text("category", "Category", "Normal")
            .count("age", "Age", 26, "years");
        assert_eq!(report.display("category").unwrap(), "Normal");
        assert_eq!(report.display("age").unwrap(), "26 years");
        assert_eq!(report.value("age"), Some(26.0));
        assert_eq!(report.value("category"), None);
    }

    #[test]
    fn test_rejects_non_finite() {
        let err = Report::new(Feature::Emi)
            .number("emi", "EMI", f64::INFINITY, 2)
            .unwrap_err();
        assert_eq!(err.error_code(), "DOMAIN_ERROR");
    }

    #[test]
    fn test_json_shape() {
        let report = Report::new(Feature::Unit)
            .number("result", "Result", 1.0, 2)
            .unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["feature"], "unit");
        assert_eq!(json["fields"][0]["value"]["kind"], "number");
        assert_eq!(json["fields"][0]["value"]["decimals"], 2);
    }
}
