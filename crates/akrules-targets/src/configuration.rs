//! Build configurations.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TargetError;

/// Engine build configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum BuildConfiguration {
    /// Engine and game code unoptimized.
    Debug,
    /// Engine optimized, game code unoptimized.
    DebugGame,
    Development,
    /// Shipping with console commands and stats kept in.
    Test,
    Shipping,
}

impl BuildConfiguration {
    pub const ALL: [BuildConfiguration; 5] = [
        BuildConfiguration::Debug,
        BuildConfiguration::DebugGame,
        BuildConfiguration::Development,
        BuildConfiguration::Test,
        BuildConfiguration::Shipping,
    ];

    pub fn name(self) -> &'static str {
        match self {
            BuildConfiguration::Debug => "Debug",
            BuildConfiguration::DebugGame => "DebugGame",
            BuildConfiguration::Development => "Development",
            BuildConfiguration::Test => "Test",
            BuildConfiguration::Shipping => "Shipping",
        }
    }

    /// Whether the SDK's optimized (non-instrumented) flavour is linked.
    pub fn is_optimized(self) -> bool {
        self == BuildConfiguration::Shipping
    }
}

impl fmt::Display for BuildConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BuildConfiguration {
    type Err = TargetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let config = match s.trim().to_ascii_lowercase().as_str() {
            "debug" => BuildConfiguration::Debug,
            "debuggame" | "debug-game" => BuildConfiguration::DebugGame,
            "development" | "profile" => BuildConfiguration::Development,
            "test" => BuildConfiguration::Test,
            "shipping" | "release" => BuildConfiguration::Shipping,
            _ => {
                return Err(TargetError::UnknownConfiguration {
                    name: s.to_string(),
                })
            }
        };
        Ok(config)
    }
}

impl TryFrom<String> for BuildConfiguration {
    type Error = TargetError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<BuildConfiguration> for String {
    fn from(config: BuildConfiguration) -> Self {
        config.name().to_string()
    }
}
