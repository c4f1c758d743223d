//! # Temperature Converter
//!
//! Converts one value between Celsius, Fahrenheit and Kelvin. The formulas
//! themselves live on the unit types in [`crate::units`].

use serde::{Deserialize, Serialize};

use super::Mode;
use crate::errors::CalcResult;
use crate::units::{Celsius, Fahrenheit, Kelvin};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemperatureMode {
    CelsiusToFahrenheit,
    FahrenheitToCelsius,
    CelsiusToKelvin,
    FahrenheitToKelvin,
}

impl Mode for TemperatureMode {
    const ALL: &'static [Self] = &[
        TemperatureMode::CelsiusToFahrenheit,
        TemperatureMode::FahrenheitToCelsius,
        TemperatureMode::CelsiusToKelvin,
        TemperatureMode::FahrenheitToKelvin,
    ];

    fn id(&self) -> &'static str {
        match self {
            TemperatureMode::CelsiusToFahrenheit => "c2f",
            TemperatureMode::FahrenheitToCelsius => "f2c",
            TemperatureMode::CelsiusToKelvin => "c2k",
            TemperatureMode::FahrenheitToKelvin => "f2k",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            TemperatureMode::CelsiusToFahrenheit => "Celsius to Fahrenheit",
            TemperatureMode::FahrenheitToCelsius => "Fahrenheit to Celsius",
            TemperatureMode::CelsiusToKelvin => "Celsius to Kelvin",
            TemperatureMode::FahrenheitToKelvin => "Fahrenheit to Kelvin",
        }
    }

    fn arrow(&self) -> &'static str {
        match self {
            TemperatureMode::CelsiusToFahrenheit => "C->F",
            TemperatureMode::FahrenheitToCelsius => "F->C",
            TemperatureMode::CelsiusToKelvin => "C->K",
            TemperatureMode::FahrenheitToKelvin => "F->K",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TemperatureInput {
    pub value: f64,
    pub mode: TemperatureMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TemperatureResult {
    pub value: f64,
}

pub fn calculate(input: &TemperatureInput) -> CalcResult<TemperatureResult> {
    let v = input.value;
    let value = match input.mode {
        TemperatureMode::CelsiusToFahrenheit => Fahrenheit::from(Celsius(v)).0,
        TemperatureMode::FahrenheitToCelsius => Celsius::from(Fahrenheit(v)).0,
        TemperatureMode::CelsiusToKelvin => Kelvin::from(Celsius(v)).0,
        TemperatureMode::FahrenheitToKelvin => Kelvin::from(Fahrenheit(v)).0,
    };
    Ok(TemperatureResult { value })
}
