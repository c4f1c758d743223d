//! # Body Mass Index
//!
//! BMI = weight / height², classified against fixed adult thresholds:
//!
//! | BMI          | Category    |
//! |--------------|-------------|
//! | < 18.5       | Underweight |
//! | 18.5 - 24.99 | Normal      |
//! | 25 - 29.99   | Overweight  |
//! | ≥ 30         | Obese       |

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BmiInput {
    pub weight_kg: f64,
    pub height_m: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    /// Classify a raw (unrounded) BMI value.
    pub fn classify(bmi: f64) -> Self {
        if bmi < 18.5 {
            BmiCategory::Underweight
        } else if bmi < 25.0 {
            BmiCategory::Normal
        } else if bmi < 30.0 {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obese
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BmiResult {
    pub bmi: f64,
    pub category: BmiCategory,
}

pub fn calculate(input: &BmiInput) -> CalcResult<BmiResult> {
    if input.height_m == 0.0 {
        return Err(CalcError::domain_error(
            "bmi",
            input.height_m.to_string(),
            "Height must not be zero",
        ));
    }

    let bmi = input.weight_kg / (input.height_m * input.height_m);
    Ok(BmiResult {
        bmi,
        category: BmiCategory::classify(bmi),
    })
}
