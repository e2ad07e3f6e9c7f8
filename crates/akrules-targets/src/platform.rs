//! Target platform identifiers.
//!
//! The set is closed: every platform the engine can target is listed here,
//! including the ones the audio SDK ships no binaries for. Whether a
//! platform is actually supported is decided by the resolver's profile
//! table, not by this enum.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TargetError;

/// A build target platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Platform {
    /// Windows, 32-bit x86.
    Win32,
    /// Windows, x86-64.
    Win64,
    XboxOne,
    /// Linux, x86-64.
    Linux,
    Mac,
    IOS,
    Android,
    PS4,
    Switch,
    Html5,
    TvOS,
    Lumin,
}

impl Platform {
    /// Every known platform, in declaration order.
    pub const ALL: [Platform; 12] = [
        Platform::Win32,
        Platform::Win64,
        Platform::XboxOne,
        Platform::Linux,
        Platform::Mac,
        Platform::IOS,
        Platform::Android,
        Platform::PS4,
        Platform::Switch,
        Platform::Html5,
        Platform::TvOS,
        Platform::Lumin,
    ];

    /// Canonical identifier, as used in descriptor files.
    pub fn name(self) -> &'static str {
        match self {
            Platform::Win32 => "Win32",
            Platform::Win64 => "Win64",
            Platform::XboxOne => "XboxOne",
            Platform::Linux => "Linux",
            Platform::Mac => "Mac",
            Platform::IOS => "IOS",
            Platform::Android => "Android",
            Platform::PS4 => "PS4",
            Platform::Switch => "Switch",
            Platform::Html5 => "HTML5",
            Platform::TvOS => "TVOS",
            Platform::Lumin => "Lumin",
        }
    }

    /// Desktop Windows (either architecture).
    pub fn is_windows(self) -> bool {
        matches!(self, Platform::Win32 | Platform::Win64)
    }

    /// Platforms built with a Visual Studio toolchain, whose SDK library
    /// directories carry a toolchain tag.
    pub fn uses_msvc(self) -> bool {
        matches!(self, Platform::Win32 | Platform::Win64 | Platform::XboxOne)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Platform {
    type Err = TargetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let platform = match s.trim().to_ascii_lowercase().as_str() {
            "win32" | "windows-x86" | "x86" => Platform::Win32,
            "win64" | "windows-x64" | "x64" => Platform::Win64,
            "xboxone" | "xbox-one" => Platform::XboxOne,
            "linux" | "linux-x64" => Platform::Linux,
            "mac" | "macos" | "osx" => Platform::Mac,
            "ios" => Platform::IOS,
            "android" => Platform::Android,
            "ps4" => Platform::PS4,
            "switch" | "nx" | "nx64" => Platform::Switch,
            "html5" => Platform::Html5,
            "tvos" => Platform::TvOS,
            "lumin" => Platform::Lumin,
            _ => {
                return Err(TargetError::UnknownPlatform {
                    name: s.to_string(),
                })
            }
        };
        Ok(platform)
    }
}

impl TryFrom<String> for Platform {
    type Error = TargetError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Platform> for String {
    fn from(platform: Platform) -> Self {
        platform.name().to_string()
    }
}
