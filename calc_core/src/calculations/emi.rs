//! # Loan EMI
//!
//! Equated monthly installment for a fixed-rate loan.
//!
//! ## Formula
//!
//! With monthly rate r = annual% / 1200 and n = years·12 payments:
//!
//! ```text
//! EMI = P·r·(1+r)^n / ((1+r)^n − 1)
//! ```
//!
//! At r = 0 the formula degenerates to 0/0; an interest-free loan is simply
//! repaid in equal parts, EMI = P / n.
//!
//! (1+r)^n − 1 is evaluated as expm1(n·ln1p(r)) so rates near zero converge on
//! P / n instead of cancelling to garbage.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EmiInput {
    /// Loan amount
    pub principal: f64,
    /// Annual interest rate in percent
    pub annual_rate_percent: f64,
    /// Tenure in years
    pub years: f64,
}

impl EmiInput {
    /// Monthly rate r = annual% / 1200
    pub fn monthly_rate(&self) -> f64 {
        self.annual_rate_percent / 1200.0
    }

    /// Number of monthly payments n = years·12
    pub fn payments(&self) -> f64 {
        self.years * 12.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EmiResult {
    /// Monthly installment
    pub emi: f64,
}

pub fn calculate(input: &EmiInput) -> CalcResult<EmiResult> {
    let r = input.monthly_rate();
    let n = input.payments();

    if n <= 0.0 {
        return Err(CalcError::domain_error(
            "emi",
            input.years.to_string(),
            "Tenure must be greater than zero",
        ));
    }

    let emi = if r == 0.0 {
        input.principal / n
    } else {
        let denominator = (n * r.ln_1p()).exp_m1();
        let growth = denominator + 1.0;
        if denominator == 0.0 || !denominator.is_finite() {
            return Err(CalcError::domain_error(
                "emi",
                format!("r={}, n={}", r, n),
                "Installment is undefined for this rate and tenure",
            ));
        }
        input.principal * r * growth / denominator
    };

    if !emi.is_finite() {
        return Err(CalcError::domain_error(
            "emi",
            format!("r={}, n={}", r, n),
            "Installment is undefined for this rate and tenure",
        ));
    }

    Ok(EmiResult { emi })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(principal: f64, annual_rate_percent: f64, years: f64) -> EmiInput {
        EmiInput {
            principal,
            annual_rate_percent,
            years,
        }
    }

    #[test]
    fn test_one_year_loan() {
        // r = 10/1200, n = 12
        let result = calculate(&input(100000.0, 10.0, 1.0)).unwrap();
        assert!((result.emi - 8791.59).abs() < 0.005, "emi = {}", result.emi);
        assert_eq!(format!("{:.2}", result.emi), "8791.59");
    }

    #[test]
    fn test_zero_rate_splits_evenly() {
        let result = calculate(&input(12000.0, 0.0, 1.0)).unwrap();
        assert_eq!(result.emi, 1000.0);
    }

    #[test]
    fn test_tiny_rate_approaches_even_split() {
        for rate in [1e-15, 1e-11, 1e-6] {
            let result = calculate(&input(12000.0, rate, 1.0)).unwrap();
            assert!((result.emi - 1000.0).abs() < 1e-3, "rate {} -> emi {}", rate, result.emi);
        }
    }

    #[test]
    fn test_long_tenure_matches_closed_form() {
        // 8.5% over 20 years
        let result = calculate(&input(2500000.0, 8.5, 20.0)).unwrap();
        let r: f64 = 8.5 / 1200.0;
        let growth = (1.0 + r).powf(240.0);
        let expected = 2500000.0 * r * growth / (growth - 1.0);
        assert!((result.emi - expected).abs() < 1e-6, "{} vs {}", result.emi, expected);
    }

    #[test]
    fn test_zero_tenure_is_domain_error() {
        let err = calculate(&input(12000.0, 10.0, 0.0)).unwrap_err();
        assert_eq!(err.error_code(), "DOMAIN_ERROR");
        let err = calculate(&input(12000.0, 0.0, 0.0)).unwrap_err();
        assert_eq!(err.error_code(), "DOMAIN_ERROR");
    }
}
