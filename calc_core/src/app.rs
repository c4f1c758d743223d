//! # Application State
//!
//! [`CalculatorApp`] is the front-end-agnostic model behind the menu shell. It
//! owns the [`Router`] and one private [`ScreenState`] per calculator, and is
//! driven by [`Action`] messages, one at a time:
//!
//! ```text
//! Action ──dispatch()──▶ CalculatorApp ──▶ Router (current screen)
//!                                      └─▶ ScreenState per Feature
//!                                           (inputs, mode, last result)
//! ```
//!
//! Each action runs to completion before the next is accepted. Screen state
//! survives navigating away and back, like a widget tree that is hidden rather
//! than destroyed.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::app::{Action, CalculatorApp};
//! use calc_core::calculations::Feature;
//! use calc_core::settings::CalcSettings;
//!
//! let mut app = CalculatorApp::new(CalcSettings::default());
//! app.dispatch(Action::Open(Feature::SimpleInterest));
//! app.dispatch(Action::SetInput { index: 0, text: "1000".into() });
//! app.dispatch(Action::SetInput { index: 1, text: "5".into() });
//! app.dispatch(Action::SetInput { index: 2, text: "2".into() });
//! app.dispatch(Action::Calculate);
//! assert_eq!(app.result_text().unwrap(), "Simple Interest: 100.00");
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::calculations::{evaluate, CalculationRequest, Feature};
use crate::errors::CalcResult;
use crate::navigation::{NavCommand, Router, Screen};
use crate::report::Report;
use crate::settings::CalcSettings;

/// Greeting shown above the menu buttons
pub const MENU_GREETING: &str = "Hello! I'm your friendly calculator bot!";

/// One user interaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", content = "args", rename_all = "snake_case")]
pub enum Action {
    /// Menu button
    Open(Feature),
    /// "Back" button on a calculator screen
    Back,
    /// Text typed into an input box on the current screen
    SetInput { index: usize, text: String },
    /// Selector change on the current screen
    SelectMode(String),
    /// "Calculate" / "Convert" button
    Calculate,
}

/// Private state of one calculator screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreenState {
    pub inputs: Vec<String>,
    pub mode: Option<String>,
    /// Outcome of the last Calculate press; `None` until the first one
    pub result: Option<CalcResult<Report>>,
}

impl ScreenState {
    /// Blank inputs and the feature's default selector value.
    pub fn new(feature: Feature) -> Self {
        ScreenState {
            inputs: vec![String::new(); feature.inputs().len()],
            mode: feature.default_mode().map(str::to_string),
            result: None,
        }
    }

    pub fn request(&self, feature: Feature) -> CalculationRequest {
        CalculationRequest {
            feature,
            inputs: self.inputs.clone(),
            mode: self.mode.clone(),
        }
    }

    /// Text the result label shows: the report, or the error's short message.
    pub fn result_text(&self) -> Option<String> {
        self.result.as_ref().map(|result| match result {
            Ok(report) => report.to_string(),
            Err(e) => e.user_message(),
        })
    }
}

/// Top-level application context.
#[derive(Debug, Clone)]
pub struct CalculatorApp {
    router: Router,
    settings: CalcSettings,
    screens: BTreeMap<Feature, ScreenState>,
}

impl CalculatorApp {
    pub fn new(settings: CalcSettings) -> Self {
        CalculatorApp {
            router: Router::new(),
            settings,
            screens: Feature::ALL.into_iter().map(|f| (f, ScreenState::new(f))).collect(),
        }
    }

    pub fn current(&self) -> Screen {
        self.router.current()
    }

    pub fn settings(&self) -> &CalcSettings {
        &self.settings
    }

    pub fn screen(&self, feature: Feature) -> &ScreenState {
        &self.screens[&feature]
    }

    /// State of the active calculator, `None` on the menu.
    pub fn active(&self) -> Option<(Feature, &ScreenState)> {
        let feature = self.current().feature()?;
        Some((feature, self.screen(feature)))
    }

    /// Result text of the active calculator, if it has been calculated.
    pub fn result_text(&self) -> Option<String> {
        self.active().and_then(|(_, state)| state.result_text())
    }

    /// Apply one action.
    ///
    /// Calculator-only actions sent while the menu is showing are ignored, as
    /// are input indexes past the screen's last field.
    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::Open(feature) => {
                self.router.apply(NavCommand::Open(feature));
            }
            Action::Back => {
                self.router.apply(NavCommand::Back);
            }
            Action::SetInput { index, text } => {
                let Some(state) = self.active_mut("set input") else { return };
                match state.inputs.get_mut(index) {
                    Some(slot) => *slot = text,
                    None => log::warn!("ignoring input #{} past the last field", index),
                }
            }
            Action::SelectMode(mode) => {
                let Some(state) = self.active_mut("select mode") else { return };
                state.mode = Some(mode);
            }
            Action::Calculate => {
                let Some(feature) = self.current().feature() else {
                    log::warn!("ignoring calculate on the menu");
                    return;
                };
                let settings = self.settings;
                if let Some(state) = self.screens.get_mut(&feature) {
                    let outcome = evaluate(&state.request(feature), &settings);
                    match &outcome {
                        Ok(report) => log::info!("{} -> {}", feature.id(), report.to_string().replace('\n', "; ")),
                        Err(e) => log::info!("{} -> {} ({})", feature.id(), e.error_code(), e),
                    }
                    state.result = Some(outcome);
                }
            }
        }
    }

    fn active_mut(&mut self, what: &str) -> Option<&mut ScreenState> {
        match self.router.current().feature() {
            Some(feature) => self.screens.get_mut(&feature),
            None => {
                log::warn!("ignoring {} on the menu", what);
                None
            }
        }
    }
}
