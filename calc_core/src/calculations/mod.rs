//! # Calculators
//!
//! Nine stateless calculators. Each one follows the pattern:
//!
//! - `*Input` - typed input parameters (JSON-serializable)
//! - `*Result` - typed results
//! - `calculate(input) -> Result<*Result, CalcError>` - pure calculation function
//!
//! On top of the typed API, [`evaluate`] takes a [`CalculationRequest`] holding
//! the raw text a user typed, parses it under the configured
//! [`ParsePolicy`](crate::inputs::ParsePolicy) and returns a formatted
//! [`Report`].
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::{evaluate, CalculationRequest, Feature};
//! use calc_core::settings::CalcSettings;
//!
//! let request = CalculationRequest::new(Feature::Bmi, ["70", "1.75"]);
//! let report = evaluate(&request, &CalcSettings::default()).unwrap();
//! assert_eq!(report.display("bmi").unwrap(), "22.86");
//! assert_eq!(report.display("category").unwrap(), "Normal");
//! ```
//!
//! ## Available Calculations
//!
//! - [`interest`] - Simple interest, compound interest, SI vs CI
//! - [`bmi`] - Body mass index with category
//! - [`emi`] - Loan equated monthly installment
//! - [`temperature`] - Celsius / Fahrenheit / Kelvin
//! - [`length`] - Meters / kilometers / miles
//! - [`age`] - Whole years since a birth date
//! - [`scientific`] - Trig (degrees), log10, square root

pub mod age;
pub mod bmi;
pub mod emi;
pub mod interest;
pub mod length;
pub mod scientific;
pub mod temperature;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::inputs::{parse_date, parse_number};
use crate::report::{Report, MONEY_DECIMALS, SCIENTIFIC_DECIMALS};
use crate::settings::CalcSettings;

pub use age::{AgeInput, AgeResult};
pub use bmi::{BmiCategory, BmiInput, BmiResult};
pub use emi::{EmiInput, EmiResult};
pub use interest::{CompoundInterestResult, InterestComparison, InterestInput, SimpleInterestResult};
pub use length::{LengthInput, LengthMode, LengthResult};
pub use scientific::{ScientificInput, ScientificOp, ScientificResult};
pub use temperature::{TemperatureInput, TemperatureMode, TemperatureResult};

// ============================================================================
// Features
// ============================================================================

/// The nine calculators, in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Feature {
    #[serde(rename = "si")]
    SimpleInterest,
    #[serde(rename = "ci")]
    CompoundInterest,
    #[serde(rename = "bmi")]
    Bmi,
    #[serde(rename = "emi")]
    Emi,
    #[serde(rename = "temp")]
    Temperature,
    #[serde(rename = "unit")]
    Unit,
    #[serde(rename = "age")]
    Age,
    #[serde(rename = "compare")]
    Compare,
    #[serde(rename = "sci")]
    Scientific,
}

/// One text field on a calculator screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputSpec {
    /// Field name used in errors and JSON
    pub key: &'static str,
    /// Hint shown to the user
    pub hint: &'static str,
}

const fn field(key: &'static str, hint: &'static str) -> InputSpec {
    InputSpec { key, hint }
}

const INTEREST_INPUTS: &[InputSpec] = &[
    field("principal", "Principal"),
    field("rate", "Rate (%)"),
    field("years", "Time (years)"),
];
const BMI_INPUTS: &[InputSpec] = &[field("weight", "Weight (kg)"), field("height", "Height (m)")];
const EMI_INPUTS: &[InputSpec] = &[
    field("principal", "Loan Amount"),
    field("rate", "Annual Rate (%)"),
    field("years", "Tenure (years)"),
];
const TEMPERATURE_INPUTS: &[InputSpec] = &[field("value", "Enter Temperature")];
const VALUE_INPUTS: &[InputSpec] = &[field("value", "Enter Value")];
const AGE_INPUTS: &[InputSpec] = &[field("date", "DOB (YYYY-MM-DD)")];

impl Feature {
    /// All features in menu order
    pub const ALL: [Feature; 9] = [
        Feature::SimpleInterest,
        Feature::CompoundInterest,
        Feature::Bmi,
        Feature::Emi,
        Feature::Temperature,
        Feature::Unit,
        Feature::Age,
        Feature::Compare,
        Feature::Scientific,
    ];

    /// Screen identifier
    pub fn id(&self) -> &'static str {
        match self {
            Feature::SimpleInterest => "si",
            Feature::CompoundInterest => "ci",
            Feature::Bmi => "bmi",
            Feature::Emi => "emi",
            Feature::Temperature => "temp",
            Feature::Unit => "unit",
            Feature::Age => "age",
            Feature::Compare => "compare",
            Feature::Scientific => "sci",
        }
    }

    /// Menu button text
    pub fn title(&self) -> &'static str {
        match self {
            Feature::SimpleInterest => "Simple Interest",
            Feature::CompoundInterest => "Compound Interest",
            Feature::Bmi => "BMI",
            Feature::Emi => "Loan EMI",
            Feature::Temperature => "Temperature Converter",
            Feature::Unit => "Unit Converter",
            Feature::Age => "Age Calculator",
            Feature::Compare => "SI vs CI Comparison",
            Feature::Scientific => "Scientific Calculator",
        }
    }

    /// Text fields the screen asks for, in order
    pub fn inputs(&self) -> &'static [InputSpec] {
        match self {
            Feature::SimpleInterest | Feature::CompoundInterest | Feature::Compare => INTEREST_INPUTS,
            Feature::Bmi => BMI_INPUTS,
            Feature::Emi => EMI_INPUTS,
            Feature::Temperature => TEMPERATURE_INPUTS,
            Feature::Unit | Feature::Scientific => VALUE_INPUTS,
            Feature::Age => AGE_INPUTS,
        }
    }

    /// Mode labels for screens with a selector; empty otherwise
    pub fn mode_labels(&self) -> Vec<&'static str> {
        match self {
            Feature::Temperature => labels::<TemperatureMode>(),
            Feature::Unit => labels::<LengthMode>(),
            Feature::Scientific => labels::<ScientificOp>(),
            _ => Vec::new(),
        }
    }

    /// Selector value a freshly opened screen starts with
    pub fn default_mode(&self) -> Option<&'static str> {
        self.mode_labels().first().copied()
    }

    pub fn has_modes(&self) -> bool {
        matches!(self, Feature::Temperature | Feature::Unit | Feature::Scientific)
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for Feature {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Feature::ALL
            .into_iter()
            .find(|f| f.id() == wanted)
            .ok_or_else(|| format!("unknown feature '{}'", s))
    }
}

// ============================================================================
// Modes
// ============================================================================

/// A closed set of selector values (conversion direction, scientific function).
///
/// A mode is recognised by its short id (`c2f`), its display label
/// (`Celsius to Fahrenheit`) or its arrow form (`C->F`), ignoring case and
/// whitespace.
pub trait Mode: Copy + Sized + 'static {
    const ALL: &'static [Self];

    fn id(&self) -> &'static str;

    fn label(&self) -> &'static str;

    fn arrow(&self) -> &'static str {
        self.id()
    }
}

fn normalize_mode(text: &str) -> String {
    text.replace('→', "->")
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_lowercase()
}

fn labels<M: Mode>() -> Vec<&'static str> {
    M::ALL.iter().map(Mode::label).collect()
}

/// Resolve a mode from user text.
pub fn parse_mode<M: Mode>(text: &str) -> CalcResult<M> {
    let wanted = normalize_mode(text);
    M::ALL
        .iter()
        .copied()
        .find(|m| {
            !wanted.is_empty()
                && [m.id(), m.label(), m.arrow()]
                    .iter()
                    .any(|candidate| normalize_mode(candidate) == wanted)
        })
        .ok_or_else(|| {
            CalcError::invalid_input("mode", text, format!("Expected one of: {}", labels::<M>().join(", ")))
        })
}

// ============================================================================
// Requests
// ============================================================================

/// Raw inputs for one calculation, exactly as typed.
///
/// ## JSON Example
///
/// ```json
/// { "feature": "temp", "inputs": ["100"], "mode": "Celsius to Fahrenheit" }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationRequest {
    pub feature: Feature,
    pub inputs: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
}

impl CalculationRequest {
    pub fn new<I, S>(feature: Feature, inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        CalculationRequest {
            feature,
            inputs: inputs.into_iter().map(Into::into).collect(),
            mode: None,
        }
    }

    pub fn with_mode(mut self, mode: impl Into<String>) -> Self {
        self.mode = Some(mode.into());
        self
    }

    fn number(&self, index: usize, settings: &CalcSettings) -> CalcResult<f64> {
        let spec = self.feature.inputs()[index];
        parse_number(spec.key, &self.inputs[index], settings.parse_policy)
    }

    fn selected_mode<M: Mode>(&self) -> CalcResult<M> {
        match self.mode.as_deref() {
            Some(text) => parse_mode(text),
            None => Err(CalcError::invalid_input("mode", "", "No mode selected")),
        }
    }

    fn interest_input(&self, settings: &CalcSettings) -> CalcResult<InterestInput> {
        Ok(InterestInput {
            principal: self.number(0, settings)?,
            rate_percent: self.number(1, settings)?,
            years: self.number(2, settings)?,
        })
    }
}

/// Parse a request's raw inputs and run its calculator.
///
/// # Returns
///
/// * `Ok(Report)` - labeled values ready for display
/// * `Err(CalcError)` - invalid input, invalid date or domain error
pub fn evaluate(request: &CalculationRequest, settings: &CalcSettings) -> CalcResult<Report> {
    let feature = request.feature;
    let expected = feature.inputs().len();
    if request.inputs.len() != expected {
        return Err(CalcError::invalid_input(
            "inputs",
            request.inputs.len().to_string(),
            format!("{} expects {} value(s)", feature.title(), expected),
        ));
    }

    log::debug!("evaluating {} with {:?} mode={:?}", feature.id(), request.inputs, request.mode);

    let report = Report::new(feature);
    let outcome = match feature {
        Feature::SimpleInterest => {
            let result = interest::simple_interest(&request.interest_input(settings)?)?;
            report.number("interest", "Simple Interest", result.interest, MONEY_DECIMALS)
        }
        Feature::CompoundInterest => {
            let result = interest::compound_interest(&request.interest_input(settings)?)?;
            report
                .number("interest", "Compound Interest", result.interest, MONEY_DECIMALS)?
                .number("total", "Total Amount", result.total, MONEY_DECIMALS)
        }
        Feature::Compare => {
            let result = interest::compare(&request.interest_input(settings)?)?;
            report
                .number("si", "Simple Interest", result.simple_interest, MONEY_DECIMALS)?
                .number("ci", "Compound Interest", result.compound_interest, MONEY_DECIMALS)
        }
        Feature::Bmi => {
            let result = bmi::calculate(&BmiInput {
                weight_kg: request.number(0, settings)?,
                height_m: request.number(1, settings)?,
            })?;
            Ok(report
                .number("bmi", "BMI", result.bmi, MONEY_DECIMALS)?
                .text("category", "Category", result.category.display_name()))
        }
        Feature::Emi => {
            let result = emi::calculate(&EmiInput {
                principal: request.number(0, settings)?,
                annual_rate_percent: request.number(1, settings)?,
                years: request.number(2, settings)?,
            })?;
            report.number("emi", "EMI", result.emi, MONEY_DECIMALS)
        }
        Feature::Temperature => {
            let mode = request.selected_mode::<TemperatureMode>()?;
            let value = request.number(0, settings)?;
            let result = temperature::calculate(&TemperatureInput { value, mode })?;
            report.number("result", "Result", result.value, MONEY_DECIMALS)
        }
        Feature::Unit => {
            let mode = request.selected_mode::<LengthMode>()?;
            let value = request.number(0, settings)?;
            let result = length::calculate(&LengthInput { value, mode })?;
            report.number("result", "Result", result.value, MONEY_DECIMALS)
        }
        Feature::Scientific => {
            let op = request.selected_mode::<ScientificOp>()?;
            let value = request.number(0, settings)?;
            let result = scientific::calculate(&ScientificInput { value, op })?;
            report.number("result", "Result", result.value, SCIENTIFIC_DECIMALS)
        }
        Feature::Age => {
            let birth_date = parse_date(&request.inputs[0])?;
            let result = age::calculate(&AgeInput {
                birth_date,
                today: settings.today(),
            })?;
            Ok(report.count("age", "Age", result.years, "years"))
        }
    };

    if let Err(e) = &outcome {
        log::debug!("{} failed: {}", feature.id(), e);
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inputs::ParsePolicy;
    use chrono::NaiveDate;

    fn strict() -> CalcSettings {
        CalcSettings::default()
    }

    fn coerce() -> CalcSettings {
        CalcSettings {
            parse_policy: ParsePolicy::CoerceZero,
            ..CalcSettings::default()
        }
    }

    fn pinned(y: i32, m: u32, d: u32) -> CalcSettings {
        CalcSettings {
            reference_date: NaiveDate::from_ymd_opt(y, m, d),
            ..CalcSettings::default()
        }
    }

    fn run(request: CalculationRequest) -> CalcResult<Report> {
        evaluate(&request, &strict())
    }

    #[test]
    fn test_feature_ids_round_trip() {
        for feature in Feature::ALL {
            assert_eq!(feature.id().parse::<Feature>().unwrap(), feature);
            let json = serde_json::to_string(&feature).unwrap();
            assert_eq!(json, format!("\"{}\"", feature.id()));
        }
        assert!("menu".parse::<Feature>().is_err());
    }

    #[test]
    fn test_mode_metadata() {
        assert_eq!(Feature::Temperature.default_mode(), Some("Celsius to Fahrenheit"));
        assert_eq!(Feature::Unit.default_mode(), Some("Meters to Kilometers"));
        assert_eq!(Feature::Scientific.default_mode(), Some("Sine"));
        assert_eq!(Feature::Scientific.mode_labels().len(), 5);
        assert!(Feature::Bmi.mode_labels().is_empty());
        assert!(!Feature::Bmi.has_modes());
    }

    #[test]
    fn test_simple_interest_report() {
        let report = run(CalculationRequest::new(Feature::SimpleInterest, ["1000", "5", "2"])).unwrap();
        assert_eq!(report.to_string(), "Simple Interest: 100.00");
    }

    #[test]
    fn test_compound_interest_report() {
        let report = run(CalculationRequest::new(Feature::CompoundInterest, ["1000", "10", "2"])).unwrap();
        assert_eq!(report.display("interest").unwrap(), "210.00");
        assert_eq!(report.display("total").unwrap(), "1210.00");
        let p = report.value("total").unwrap() - report.value("interest").unwrap();
        assert!((p - 1000.0).abs() < 1e-9);
    }

    #[test]
    fn test_compare_report() {
        let report = run(CalculationRequest::new(Feature::Compare, ["1000", "10", "2"])).unwrap();
        assert_eq!(report.to_string(), "Simple Interest: 200.00\nCompound Interest: 210.00");
    }

    #[test]
    fn test_bmi_report() {
        let report = run(CalculationRequest::new(Feature::Bmi, ["70", "1.75"])).unwrap();
        assert_eq!(report.to_string(), "BMI: 22.86\nCategory: Normal");
    }

    #[test]
    fn test_emi_report() {
        let report = run(CalculationRequest::new(Feature::Emi, ["100000", "10", "1"])).unwrap();
        assert_eq!(report.display("emi").unwrap(), "8791.59");
    }

    #[test]
    fn test_temperature_report() {
        let request = CalculationRequest::new(Feature::Temperature, ["0"]).with_mode("C->F");
        assert_eq!(run(request).unwrap().display("result").unwrap(), "32.00");
        let request = CalculationRequest::new(Feature::Temperature, ["32"]).with_mode("Fahrenheit to Celsius");
        assert_eq!(run(request).unwrap().display("result").unwrap(), "0.00");
    }

    #[test]
    fn test_missing_mode_is_an_error() {
        let err = run(CalculationRequest::new(Feature::Temperature, ["10"])).unwrap_err();
        match err {
            CalcError::InvalidInput { field, .. } => assert_eq!(field, "mode"),
            other => panic!("unexpected {:?}", other),
        }
        let err = run(CalculationRequest::new(Feature::Unit, ["10"]).with_mode("furlongs")).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_unit_report() {
        let request = CalculationRequest::new(Feature::Unit, ["1000"]).with_mode("m2km");
        assert_eq!(run(request).unwrap().value("result"), Some(1.0));
        let request = CalculationRequest::new(Feature::Unit, ["1"]).with_mode("Kilometers to Miles");
        let report = run(request).unwrap();
        assert!((report.value("result").unwrap() - 0.621371).abs() < 1e-12);
        assert_eq!(report.display("result").unwrap(), "0.62");
    }

    #[test]
    fn test_scientific_report() {
        let request = CalculationRequest::new(Feature::Scientific, ["90"]).with_mode("Sine");
        assert_eq!(run(request).unwrap().to_string(), "Result: 1.0000");
        let request = CalculationRequest::new(Feature::Scientific, ["-10"]).with_mode("log10");
        assert_eq!(run(request).unwrap_err().error_code(), "DOMAIN_ERROR");
        let request = CalculationRequest::new(Feature::Scientific, ["-1"]).with_mode("Square Root");
        assert_eq!(run(request).unwrap_err().error_code(), "DOMAIN_ERROR");
    }

    #[test]
    fn test_age_report() {
        let request = CalculationRequest::new(Feature::Age, ["2000-01-01"]);
        let report = evaluate(&request, &pinned(2026, 10, 18)).unwrap();
        assert_eq!(report.to_string(), "Age: 26 years");

        let request = CalculationRequest::new(Feature::Age, ["not-a-date"]);
        let err = evaluate(&request, &pinned(2026, 10, 18)).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_DATE");
        assert_eq!(err.user_message(), "Invalid date format.");
    }

    #[test]
    fn test_age_ignores_parse_policy() {
        let settings = CalcSettings {
            parse_policy: ParsePolicy::CoerceZero,
            reference_date: NaiveDate::from_ymd_opt(2026, 10, 18),
        };
        let err = evaluate(&CalculationRequest::new(Feature::Age, [""]), &settings).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_DATE");
    }

    #[test]
    fn test_strict_policy_rejects_non_numeric() {
        for feature in [Feature::SimpleInterest, Feature::CompoundInterest, Feature::Emi, Feature::Compare] {
            for bad in ["", "abc"] {
                let err = run(CalculationRequest::new(feature, ["1000", bad, "2"])).unwrap_err();
                assert_eq!(err.error_code(), "INVALID_INPUT", "{:?} {:?}", feature, bad);
            }
        }
        let err = run(CalculationRequest::new(Feature::Bmi, ["abc", "1.8"])).unwrap_err();
        assert_eq!(err.user_message(), "Invalid input.");
    }

    #[test]
    fn test_coerce_policy_uses_zero() {
        let request = CalculationRequest::new(Feature::SimpleInterest, ["1000", "abc", "2"]);
        let report = evaluate(&request, &coerce()).unwrap();
        assert_eq!(report.display("interest").unwrap(), "0.00");

        let request = CalculationRequest::new(Feature::Temperature, [""]).with_mode("c2f");
        assert_eq!(evaluate(&request, &coerce()).unwrap().display("result").unwrap(), "32.00");

        // Zero height still has no BMI
        let request = CalculationRequest::new(Feature::Bmi, ["70", ""]);
        assert_eq!(evaluate(&request, &coerce()).unwrap_err().error_code(), "DOMAIN_ERROR");
    }

    #[test]
    fn test_wrong_input_count() {
        let err = run(CalculationRequest::new(Feature::SimpleInterest, ["1000", "5"])).unwrap_err();
        match err {
            CalcError::InvalidInput { field, .. } => assert_eq!(field, "inputs"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_request_json() {
        let json = r#"{ "feature": "temp", "inputs": ["100"], "mode": "Celsius to Fahrenheit" }"#;
        let request: CalculationRequest = serde_json::from_str(json).unwrap();
        let report = run(request).unwrap();
        assert_eq!(report.display("result").unwrap(), "212.00");
    }
}
