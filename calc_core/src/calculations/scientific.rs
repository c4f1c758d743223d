//! # Scientific Functions
//!
//! Single-argument functions. Trigonometric operations take degrees.
//! Out-of-domain arguments (log of a non-positive number, square root of a
//! negative one) are reported as [`CalcError::DomainError`], never as `NaN`.

use serde::{Deserialize, Serialize};

use super::Mode;
use crate::errors::{CalcError, CalcResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScientificOp {
    Sine,
    Cosine,
    Tangent,
    Log10,
    SquareRoot,
}

impl Mode for ScientificOp {
    const ALL: &'static [Self] = &[
        ScientificOp::Sine,
        ScientificOp::Cosine,
        ScientificOp::Tangent,
        ScientificOp::Log10,
        ScientificOp::SquareRoot,
    ];

    fn id(&self) -> &'static str {
        match self {
            ScientificOp::Sine => "sin",
            ScientificOp::Cosine => "cos",
            ScientificOp::Tangent => "tan",
            ScientificOp::Log10 => "log10",
            ScientificOp::SquareRoot => "sqrt",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            ScientificOp::Sine => "Sine",
            ScientificOp::Cosine => "Cosine",
            ScientificOp::Tangent => "Tangent",
            ScientificOp::Log10 => "Log10",
            ScientificOp::SquareRoot => "Square Root",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScientificInput {
    pub value: f64,
    pub op: ScientificOp,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScientificResult {
    pub value: f64,
}

pub fn calculate(input: &ScientificInput) -> CalcResult<ScientificResult> {
    let v = input.value;
    let value = match input.op {
        ScientificOp::Sine => v.to_radians().sin(),
        ScientificOp::Cosine => v.to_radians().cos(),
        ScientificOp::Tangent => v.to_radians().tan(),
        ScientificOp::Log10 => {
            if v <= 0.0 {
                return Err(CalcError::domain_error(
                    input.op.id(),
                    v.to_string(),
                    "Logarithm requires a positive number",
                ));
            }
            v.log10()
        }
        ScientificOp::SquareRoot => {
            if v < 0.0 {
                return Err(CalcError::domain_error(
                    input.op.id(),
                    v.to_string(),
                    "Square root of a negative number",
                ));
            }
            v.sqrt()
        }
    };
    Ok(ScientificResult { value })
}
