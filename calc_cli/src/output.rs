//! Printing reports and errors as text or JSON.

use std::io::{self, Write};

use calc_core::calculations::Feature;
use calc_core::errors::CalcError;
use calc_core::report::Report;
use serde::Serialize;

use crate::config::OutputFormat;

#[derive(Serialize)]
struct JsonOut<'a, T: Serialize> {
    ok: bool,
    data: &'a T,
}

#[derive(Serialize)]
struct JsonError<'a> {
    ok: bool,
    code: &'static str,
    message: String,
    error: &'a CalcError,
}

#[derive(Serialize)]
struct FeatureRow {
    id: &'static str,
    title: &'static str,
    inputs: Vec<&'static str>,
    modes: Vec<&'static str>,
}

/// Print a successful report to `out`.
pub fn print_report(out: &mut impl Write, format: OutputFormat, report: &Report) -> io::Result<()> {
    match format {
        OutputFormat::Text => writeln!(out, "{}", report),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&JsonOut { ok: true, data: report })?;
            writeln!(out, "{}", json)
        }
    }
}

/// Print a calculation error. Text goes to `err`, JSON to `out` so API
/// consumers read one stream.
pub fn print_error(
    out: &mut impl Write,
    err: &mut impl Write,
    format: OutputFormat,
    error: &CalcError,
) -> io::Result<()> {
    match format {
        OutputFormat::Text => writeln!(err, "{} ({})", error.user_message(), error),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&JsonError {
                ok: false,
                code: error.error_code(),
                message: error.user_message(),
                error,
            })?;
            writeln!(out, "{}", json)
        }
    }
}

/// Print the table of calculators.
pub fn print_features(out: &mut impl Write, format: OutputFormat) -> io::Result<()> {
    let rows: Vec<FeatureRow> = Feature::ALL
        .into_iter()
        .map(|f| FeatureRow {
            id: f.id(),
            title: f.title(),
            inputs: f.inputs().iter().map(|spec| spec.hint).collect(),
            modes: f.mode_labels(),
        })
        .collect();

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&JsonOut { ok: true, data: &rows })?;
            writeln!(out, "{}", json)
        }
        OutputFormat::Text => {
            for row in &rows {
                write!(out, "{:<8} {:<22} {}", row.id, row.title, row.inputs.join(", "))?;
                if !row.modes.is_empty() {
                    write!(out, "  [{}]", row.modes.join(" | "))?;
                }
                writeln!(out)?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calc_core::calculations::{evaluate, CalculationRequest};
    use calc_core::settings::CalcSettings;

    fn report() -> Report {
        evaluate(
            &CalculationRequest::new(Feature::SimpleInterest, ["1000", "5", "2"]),
            &CalcSettings::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_text_report() {
        let mut out = Vec::new();
        print_report(&mut out, OutputFormat::Text, &report()).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Simple Interest: 100.00\n");
    }

    #[test]
    fn test_json_report() {
        let mut out = Vec::new();
        print_report(&mut out, OutputFormat::Json, &report()).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["ok"], true);
        assert_eq!(value["data"]["fields"][0]["key"], "interest");
        assert_eq!(value["data"]["fields"][0]["value"]["value"], 100.0);
    }

    #[test]
    fn test_error_streams() {
        let error = CalcError::invalid_date("31-12-2000", "Expected YYYY-MM-DD");

        let (mut out, mut err) = (Vec::new(), Vec::new());
        print_error(&mut out, &mut err, OutputFormat::Text, &error).unwrap();
        assert!(out.is_empty());
        assert!(String::from_utf8(err).unwrap().starts_with("Invalid date format."));

        let (mut out, mut err) = (Vec::new(), Vec::new());
        print_error(&mut out, &mut err, OutputFormat::Json, &error).unwrap();
        assert!(err.is_empty());
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["ok"], false);
        assert_eq!(value["code"], "INVALID_DATE");
        assert_eq!(value["error"]["type"], "InvalidDate");
    }

    #[test]
    fn test_feature_table() {
        let mut out = Vec::new();
        print_features(&mut out, OutputFormat::Text).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 9);
        assert!(text.contains("Celsius to Fahrenheit"));
    }
}
