//! # calc_core - Pocketcalc Calculation Engine
//!
//! `calc_core` is the computational heart of Pocketcalc: nine small calculators
//! (interest, BMI, loan EMI, converters, age, scientific functions) and the
//! screen router that moves between them. Any front end (terminal, GUI, HTTP)
//! can drive it; all inputs and outputs are JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **Tagged Errors**: Invalid input, invalid date and domain errors stay distinct
//! - **One Policy**: Unparseable numbers are handled the same way everywhere,
//!   chosen through [`inputs::ParsePolicy`]
//! - **No Globals**: Navigation state lives in a [`navigation::Router`] owned by
//!   the [`app::CalculatorApp`]
//!
//! ## Quick Start
//!
//! ```rust
//! use calc_core::calculations::{evaluate, CalculationRequest, Feature};
//! use calc_core::settings::CalcSettings;
//!
//! let request = CalculationRequest::new(Feature::Emi, ["100000", "10", "1"]);
//! let report = evaluate(&request, &CalcSettings::default()).unwrap();
//! assert_eq!(report.to_string(), "EMI: 8791.59");
//!
//! // Serialize to JSON for API consumers
//! let json = serde_json::to_string_pretty(&report).unwrap();
//! assert!(json.contains("\"emi\""));
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - The nine calculators and the request evaluator
//! - [`navigation`] - Screen identifiers and the router
//! - [`app`] - Application context driven by user actions
//! - [`report`] - Labeled, fixed-precision result payloads
//! - [`inputs`] - Number and date parsing policy
//! - [`units`] - Type-safe length and temperature wrappers
//! - [`settings`] - Parse policy and reference date
//! - [`errors`] - Structured error types

pub mod app;
pub mod calculations;
pub mod errors;
pub mod inputs;
pub mod navigation;
pub mod report;
pub mod settings;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use app::{Action, CalculatorApp};
pub use calculations::{evaluate, CalculationRequest, Feature};
pub use errors::{CalcError, CalcResult};
pub use inputs::ParsePolicy;
pub use navigation::{Router, Screen};
pub use report::Report;
pub use settings::CalcSettings;
