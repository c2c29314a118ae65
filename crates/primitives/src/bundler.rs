//! Bundler-related primitives

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use strum_macros::EnumString;

/// Bundling modes accepted by `debug_bundler_setBundlingMode`
///
/// Modes other than `auto` and `manual` are carried verbatim in [Mode::Other], for bundlers
/// that define their own.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString)]
#[serde(from = "String", into = "String")]
#[strum(serialize_all = "lowercase")]
pub enum Mode {
    /// The bundler sends bundles on its own schedule
    Auto,
    /// The bundler only sends bundles when asked to (`debug_bundler_sendBundleNow`)
    Manual,
    /// Any other mode string
    #[strum(default)]
    Other(String),
}

impl Mode {
    /// Wire string of the mode
    pub fn as_str(&self) -> &str {
        match self {
            Mode::Auto => "auto",
            Mode::Manual => "manual",
            Mode::Other(mode) => mode,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for Mode {
    fn from(mode: String) -> Self {
        Self::from_str(&mode).unwrap_or(Self::Other(mode))
    }
}

impl From<Mode> for String {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Other(mode) => mode,
            mode => mode.as_str().to_string(),
        }
    }
}
