//! # Unit Converter
//!
//! Length conversions offered on the unit converter screen.

use serde::{Deserialize, Serialize};

use super::Mode;
use crate::errors::CalcResult;
use crate::units::{Kilometers, Meters, Miles};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LengthMode {
    MetersToKilometers,
    KilometersToMiles,
}

impl Mode for LengthMode {
    const ALL: &'static [Self] = &[LengthMode::MetersToKilometers, LengthMode::KilometersToMiles];

    fn id(&self) -> &'static str {
        match self {
            LengthMode::MetersToKilometers => "m2km",
            LengthMode::KilometersToMiles => "km2mi",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            LengthMode::MetersToKilometers => "Meters to Kilometers",
            LengthMode::KilometersToMiles => "Kilometers to Miles",
        }
    }

    fn arrow(&self) -> &'static str {
        match self {
            LengthMode::MetersToKilometers => "m->km",
            LengthMode::KilometersToMiles => "km->mi",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LengthInput {
    pub value: f64,
    pub mode: LengthMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LengthResult {
    pub value: f64,
}

pub fn calculate(input: &LengthInput) -> CalcResult<LengthResult> {
    let value = match input.mode {
        LengthMode::MetersToKilometers => Kilometers::from(Meters(input.value)).0,
        LengthMode::KilometersToMiles => Miles::from(Kilometers(input.value)).0,
    };
    Ok(LengthResult { value })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::parse_mode;

    #[test]
    fn test_meters_to_kilometers() {
        let result = calculate(&LengthInput {
            value: 1000.0,
            mode: LengthMode::MetersToKilometers,
        })
        .unwrap();
        assert_eq!(result.value, 1.0);
    }

    #[test]
    fn test_kilometers_to_miles() {
        let result = calculate(&LengthInput {
            value: 1.0,
            mode: LengthMode::KilometersToMiles,
        })
        .unwrap();
        assert!((result.value - 0.621371).abs() < 1e-12);
    }

    #[test]
    fn test_mode_parsing() {
        assert_eq!(parse_mode::<LengthMode>("km2mi").unwrap(), LengthMode::KilometersToMiles);
        assert_eq!(parse_mode::<LengthMode>("m -> km").unwrap(), LengthMode::MetersToKilometers);
        assert!(parse_mode::<LengthMode>("").is_err());
    }
}
