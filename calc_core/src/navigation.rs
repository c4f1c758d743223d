//! # Screen Navigation
//!
//! A tiny state machine over the menu plus the nine calculator screens. The
//! menu opens any calculator; every calculator has a single way out, "Back",
//! which always lands on the menu. There is no history stack.
//!
//! ```rust
//! use calc_core::calculations::Feature;
//! use calc_core::navigation::{Router, Screen};
//!
//! let mut router = Router::new();
//! router.open(Feature::Emi);
//! assert_eq!(router.current(), Screen::Feature(Feature::Emi));
//! router.back();
//! assert_eq!(router.current(), Screen::Menu);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::calculations::Feature;

/// Identifier of the active screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Screen {
    #[default]
    Menu,
    Feature(Feature),
}

impl Screen {
    /// Every screen, menu first
    pub fn all() -> impl Iterator<Item = Screen> {
        std::iter::once(Screen::Menu).chain(Feature::ALL.into_iter().map(Screen::Feature))
    }

    pub fn id(&self) -> &'static str {
        match self {
            Screen::Menu => "menu",
            Screen::Feature(feature) => feature.id(),
        }
    }

    pub fn feature(&self) -> Option<Feature> {
        match self {
            Screen::Menu => None,
            Screen::Feature(feature) => Some(*feature),
        }
    }

    pub fn is_menu(&self) -> bool {
        matches!(self, Screen::Menu)
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Screen {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("menu") {
            return Ok(Screen::Menu);
        }
        s.parse::<Feature>()
            .map(Screen::Feature)
            .map_err(|_| format!("unknown screen '{}'", s))
    }
}

impl Serialize for Screen {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.id())
    }
}

impl<'de> Deserialize<'de> for Screen {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let id = String::deserialize(deserializer)?;
        id.parse().map_err(serde::de::Error::custom)
    }
}

/// A navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", content = "feature", rename_all = "snake_case")]
pub enum NavCommand {
    /// Menu button for a calculator
    Open(Feature),
    /// Return to the menu
    Back,
}

/// Holds the single active screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Router {
    current: Screen,
}

impl Router {
    /// A router showing the menu.
    pub fn new() -> Self {
        Router::default()
    }

    pub fn current(&self) -> Screen {
        self.current
    }

    /// Show a calculator screen.
    pub fn open(&mut self, feature: Feature) -> Screen {
        let from = self.current;
        self.current = Screen::Feature(feature);
        log::debug!("navigate {} -> {}", from, self.current);
        self.current
    }

    /// Return to the menu. A no-op when already there.
    pub fn back(&mut self) -> Screen {
        let from = self.current;
        self.current = Screen::Menu;
        log::debug!("navigate {} -> {}", from, self.current);
        self.current
    }

    pub fn apply(&mut self, command: NavCommand) -> Screen {
        match command {
            NavCommand::Open(feature) => self.open(feature),
            NavCommand::Back => self.back(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_on_menu() {
        assert_eq!(Router::new().current(), Screen::Menu);
    }

    #[test]
    fn test_open_then_back_for_every_feature() {
        let mut router = Router::new();
        for feature in Feature::ALL {
            assert_eq!(router.apply(NavCommand::Open(feature)), Screen::Feature(feature));
            assert_eq!(router.current().feature(), Some(feature));
            assert_eq!(router.apply(NavCommand::Back), Screen::Menu);
        }
    }

    #[test]
    fn test_back_from_menu_stays_on_menu() {
        let mut router = Router::new();
        router.back();
        assert!(router.current().is_menu());
    }

    #[test]
    fn test_screen_ids() {
        let ids: Vec<&str> = Screen::all().map(|s| s.id()).collect();
        assert_eq!(
            ids,
            ["menu", "si", "ci", "bmi", "emi", "temp", "unit", "age", "compare", "sci"]
        );
        for screen in Screen::all() {
            assert_eq!(screen.id().parse::<Screen>().unwrap(), screen);
        }
        assert!("settings".parse::<Screen>().is_err());
    }

    #[test]
    fn test_serialization() {
        let mut router = Router::new();
        router.open(Feature::Age);
        let json = serde_json::to_string(&router).unwrap();
        assert_eq!(json, r#"{"current":"age"}"#);
        let roundtrip: Router = serde_json::from_str(&json).unwrap();
        assert_eq!(router, roundtrip);

        let command = serde_json::to_string(&NavCommand::Open(Feature::Bmi)).unwrap();
        assert_eq!(command, r#"{"command":"open","feature":"bmi"}"#);
    }
}
