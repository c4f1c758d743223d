//! # Calculation Settings
//!
//! Knobs that apply to every calculator for the lifetime of an app or a CLI run.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::inputs::ParsePolicy;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CalcSettings {
    /// How unparseable numeric text is handled
    #[serde(default)]
    pub parse_policy: ParsePolicy,

    /// Fixed "today" for the age calculator; `None` uses the local date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_date: Option<NaiveDate>,
}

impl CalcSettings {
    pub fn new(parse_policy: ParsePolicy) -> Self {
        CalcSettings {
            parse_policy,
            reference_date: None,
        }
    }

    /// Pin "today" to a fixed date.
    pub fn with_reference_date(mut self, date: NaiveDate) -> Self {
        self.reference_date = Some(date);
        self
    }

    /// The date ages are measured at.
    pub fn today(&self) -> NaiveDate {
        self.reference_date.unwrap_or_else(|| Local::now().date_naive())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = CalcSettings::default();
        assert_eq!(settings.parse_policy, ParsePolicy::Strict);
        assert!(settings.reference_date.is_none());
    }

    #[test]
    fn test_pinned_today() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        let settings = CalcSettings::new(ParsePolicy::CoerceZero).with_reference_date(date);
        assert_eq!(settings.today(), date);
    }

    #[test]
    fn test_deserialize_sparse() {
        let settings: CalcSettings = serde_json::from_str(r#"{ "reference_date": "2026-10-18" }"#).unwrap();
        assert_eq!(settings.parse_policy, ParsePolicy::Strict);
        assert_eq!(settings.today(), NaiveDate::from_ymd_opt(2026, 10, 18).unwrap());
    }
}
