//! # Interest Calculations
//!
//! Simple interest, compound interest (compounded once per year) and a side by
//! side comparison of the two, all from the same three inputs.
//!
//! ## Formulas
//!
//! - SI = P·R·T / 100
//! - A = P·(1 + R/100)^T, CI = A − P
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::interest::{compound_interest, InterestInput};
//!
//! let input = InterestInput { principal: 1000.0, rate_percent: 10.0, years: 2.0 };
//! let result = compound_interest(&input).unwrap();
//! assert!((result.total - 1210.0).abs() < 1e-9);
//! assert!((result.interest - 210.0).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Inputs shared by the simple, compound and comparison screens.
///
/// ## JSON Example
///
/// ```json
/// { "principal": 1000.0, "rate_percent": 5.0, "years": 2.0 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InterestInput {
    /// Principal amount
    pub principal: f64,
    /// Annual rate in percent (5.0 means 5%)
    pub rate_percent: f64,
    /// Time in years
    pub years: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimpleInterestResult {
    pub interest: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompoundInterestResult {
    /// Interest earned, A − P
    pub interest: f64,
    /// Final amount A
    pub total: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InterestComparison {
    pub simple_interest: f64,
    pub compound_interest: f64,
}

/// SI = P·R·T / 100
pub fn simple_interest(input: &InterestInput) -> CalcResult<SimpleInterestResult> {
    Ok(SimpleInterestResult {
        interest: input.principal * input.rate_percent * input.years / 100.0,
    })
}

/// A = P·(1 + R/100)^T
///
/// A rate below −100% with fractional years has no real result and is reported
/// as a domain error.
pub fn compound_interest(input: &InterestInput) -> CalcResult<CompoundInterestResult> {
    let growth = (1.0 + input.rate_percent / 100.0).powf(input.years);
    let total = input.principal * growth;
    if !total.is_finite() {
        return Err(CalcError::domain_error(
            "compound interest",
            format!("(1 + {}/100)^{}", input.rate_percent, input.years),
            "Growth factor is undefined",
        ));
    }

    Ok(CompoundInterestResult {
        interest: total - input.principal,
        total,
    })
}

/// Both interest figures for the same inputs.
pub fn compare(input: &InterestInput) -> CalcResult<InterestComparison> {
    let si = simple_interest(input)?;
    let ci = compound_interest(input)?;
    Ok(InterestComparison {
        simple_interest: si.interest,
        compound_interest: ci.interest,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(principal: f64, rate_percent: f64, years: f64) -> InterestInput {
        InterestInput {
            principal,
            rate_percent,
            years,
        }
    }

    #[test]
    fn test_simple_interest() {
        let result = simple_interest(&input(1000.0, 5.0, 2.0)).unwrap();
        assert!((result.interest - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_simple_interest_formula_holds() {
        for (p, r, t) in [(1.0, 1.0, 1.0), (2500.0, 7.25, 3.5), (99999.0, 0.1, 30.0)] {
            let result = simple_interest(&input(p, r, t)).unwrap();
            assert!((result.interest - p * r * t / 100.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_compound_interest() {
        let result = compound_interest(&input(1000.0, 10.0, 2.0)).unwrap();
        assert!((result.total - 1210.0).abs() < 1e-9);
        assert!((result.interest - 210.0).abs() < 1e-9);
    }

    #[test]
    fn test_total_minus_interest_is_principal() {
        for (p, r, t) in [(1000.0, 10.0, 2.0), (5000.0, 3.3, 7.0), (12.5, 120.0, 0.5)] {
            let result = compound_interest(&input(p, r, t)).unwrap();
            assert!((result.total - result.interest - p).abs() < 1e-6);
        }
    }

    #[test]
    fn test_zero_rate() {
        let result = compound_interest(&input(1000.0, 0.0, 5.0)).unwrap();
        assert_eq!(result.total, 1000.0);
        assert_eq!(result.interest, 0.0);
    }

    #[test]
    fn test_undefined_growth() {
        let err = compound_interest(&input(1000.0, -150.0, 0.5)).unwrap_err();
        assert_eq!(err.error_code(), "DOMAIN_ERROR");
    }

    #[test]
    fn test_compare() {
        let result = compare(&input(1000.0, 10.0, 2.0)).unwrap();
        assert!((result.simple_interest - 200.0).abs() < 1e-9);
        assert!((result.compound_interest - 210.0).abs() < 1e-9);
        assert!(result.compound_interest > result.simple_interest);
    }
}
