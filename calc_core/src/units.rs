//! # Unit Types
//!
//! Type-safe wrappers for the quantities the converters handle. These keep a
//! Celsius value from being fed to a Fahrenheit formula while staying as cheap as a
//! bare `f64`.
//!
//! Every conversion the converter screens offer is a `From` impl here, so the
//! formulas live in exactly one place:
//!
//! - Length: meters → kilometers, kilometers → miles
//! - Temperature: Celsius ↔ Fahrenheit, Celsius → Kelvin, Fahrenheit → Kelvin
//!
//! ## Example
//!
//! ```rust
//! use calc_core::units::{Celsius, Fahrenheit, Kilometers, Meters};
//!
//! let boiling: Fahrenheit = Celsius(100.0).into();
//! assert_eq!(boiling.0, 212.0);
//!
//! let km: Kilometers = Meters(1500.0).into();
//! assert_eq!(km.0, 1.5);
//! ```

use serde::{Deserialize, Serialize};

/// Miles per kilometer
pub const MILES_PER_KM: f64 = 0.621371;

/// Offset between the Celsius and Kelvin scales
pub const KELVIN_OFFSET: f64 = 273.15;

// ============================================================================
// Length Units
// ============================================================================

/// Length in meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

/// Length in kilometers
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilometers(pub f64);

/// Length in statute miles
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Miles(pub f64);

impl From<Meters> for Kilometers {
    fn from(m: Meters) -> Self {
        Kilometers(m.0 / 1000.0)
    }
}

impl From<Kilometers> for Miles {
    fn from(km: Kilometers) -> Self {
        Miles(km.0 * MILES_PER_KM)
    }
}

// ============================================================================
// Temperature Units
// ============================================================================

/// Temperature in degrees Celsius
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Celsius(pub f64);

/// Temperature in degrees Fahrenheit
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fahrenheit(pub f64);

/// Temperature in kelvin
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kelvin(pub f64);

impl From<Celsius> for Fahrenheit {
    fn from(c: Celsius) -> Self {
        Fahrenheit(c.0 * 9.0 / 5.0 + 32.0)
    }
}

impl From<Fahrenheit> for Celsius {
    fn from(f: Fahrenheit) -> Self {
        Celsius((f.0 - 32.0) * 5.0 / 9.0)
    }
}

impl From<Celsius> for Kelvin {
    fn from(c: Celsius) -> Self {
        Kelvin(c.0 + KELVIN_OFFSET)
    }
}

impl From<Fahrenheit> for Kelvin {
    fn from(f: Fahrenheit) -> Self {
        Kelvin::from(Celsius::from(f))
    }
}
