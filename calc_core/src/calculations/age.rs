//! # Age Calculator
//!
//! Whole years between a birth date and a reference "today". One year is
//! subtracted when this year's birthday has not happened yet. Someone born on
//! 29 February turns a year older on 1 March in common years.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeInput {
    pub birth_date: NaiveDate,
    /// The date the age is measured at
    pub today: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeResult {
    pub years: i64,
}

pub fn calculate(input: &AgeInput) -> CalcResult<AgeResult> {
    let AgeInput { birth_date, today } = *input;
    if birth_date > today {
        return Err(CalcError::domain_error(
            "age",
            birth_date.to_string(),
            format!("Birth date is after {}", today),
        ));
    }

    let birthday_pending = (today.month(), today.day()) < (birth_date.month(), birth_date.day());
    let years = i64::from(today.year() - birth_date.year()) - i64::from(birthday_pending);
    Ok(AgeResult { years })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn age(birth: NaiveDate, today: NaiveDate) -> i64 {
        calculate(&AgeInput {
            birth_date: birth,
            today,
        })
        .unwrap()
        .years
    }

    #[test]
    fn test_birthday_passed() {
        assert_eq!(age(date(2000, 1, 1), date(2026, 10, 18)), 26);
    }

    #[test]
    fn test_birthday_pending() {
        assert_eq!(age(date(2000, 12, 25), date(2026, 10, 18)), 25);
    }

    #[test]
    fn test_on_birthday() {
        assert_eq!(age(date(1990, 10, 18), date(2026, 10, 18)), 36);
        assert_eq!(age(date(2026, 10, 18), date(2026, 10, 18)), 0);
    }

    #[test]
    fn test_leap_day() {
        assert_eq!(age(date(2000, 2, 29), date(2025, 2, 28)), 24);
        assert_eq!(age(date(2000, 2, 29), date(2025, 3, 1)), 25);
    }

    #[test]
    fn test_future_birth_date() {
        let err = calculate(&AgeInput {
            birth_date: date(2030, 1, 1),
            today: date(2026, 10, 18),
        })
        .unwrap_err();
        assert_eq!(err.error_code(), "DOMAIN_ERROR");
    }
}
