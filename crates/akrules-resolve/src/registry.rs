//! The SDK library registry.
//!
//! Holds the catalog of SDK libraries (with the platforms and build flavours
//! each one ships for) and the per-platform convention that turns a
//! canonical library name into what the linker is given. The registry is
//! read-only once built; [`LibraryRegistry::standard`] hands out a single
//! process-wide instance.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::OnceLock;

use akrules_targets::Platform;
use serde::{Deserialize, Serialize};

use crate::error::{ResolveError, Result};
use crate::resolved::LibraryRef;

/// How a platform's linker expects SDK libraries to be named.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NamingConvention {
    /// `<name>.lib`, found through the library search path.
    ImportLibrary,
    /// `<libdir>/lib<name>.a`, an explicit path into the SDK.
    StaticArchive,
    /// The bare name; the toolchain applies its own prefix and suffix.
    Bare,
}

/// One library in the SDK catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct LibraryEntry {
    /// Canonical name, without prefix or extension.
    pub name: String,
    /// Platforms the library ships for. Empty means all.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub only: Vec<Platform>,
    /// Platforms the library does not ship for.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub except: Vec<Platform>,
    /// Absent from the optimized SDK flavour.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub profiling_only: bool,
}

impl LibraryEntry {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            only: Vec::new(),
            except: Vec::new(),
            profiling_only: false,
        }
    }

    pub fn only(mut self, platforms: &[Platform]) -> Self {
        self.only = platforms.to_vec();
        self
    }

    pub fn except(mut self, platforms: &[Platform]) -> Self {
        self.except = platforms.to_vec();
        self
    }

    pub fn profiling_only(mut self) -> Self {
        self.profiling_only = true;
        self
    }

    /// Whether the library should be linked for `platform`.
    pub fn available(&self, platform: Platform, optimized: bool) -> bool {
        (self.only.is_empty() || self.only.contains(&platform))
            && !self.except.contains(&platform)
            && !(self.profiling_only && optimized)
    }
}

/// Catalog of SDK libraries and per-platform naming conventions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct LibraryRegistry {
    /// Convention for platforms without an explicit entry.
    pub default_convention: NamingConvention,
    #[serde(default)]
    pub conventions: BTreeMap<Platform, NamingConvention>,
    pub libraries: Vec<LibraryEntry>,
}

const CORE_LIBRARIES: &[&str] = &[
    "AkSoundEngine",
    "AkMemoryMgr",
    "AkStreamMgr",
    "AkMusicEngine",
    "AkSpatialAudio",
];

const PLUGIN_LIBRARIES: &[&str] = &[
    "AkVorbisDecoder",
    "AkSilenceSource",
    "AkSineSource",
    "AkToneSource",
    "AkPeakLimiterFX",
    "AkMatrixReverbFX",
    "AkParametricEQFX",
    "AkDelayFX",
    "AkExpanderFX",
    "AkFlangerFX",
    "AkCompressorFX",
    "AkGainFX",
    "AkHarmonizerFX",
    "AkTimeStretchFX",
    "AkPitchShifterFX",
    "AkStereoDelayFX",
    "AkMeterFX",
    "AkGuitarDistortionFX",
    "AkTremoloFX",
    "AkRoomVerbFX",
    "AkAudioInputSource",
    "AkSynthOne",
    "AkReflectFX",
    "AkConvolutionReverbFX",
    "AkRecorderFX",
    "AuroHeadphoneFX",
];

/// Platforms without a controller motion/rumble device API.
const NO_MOTION: &[Platform] = &[
    Platform::Android,
    Platform::Linux,
    Platform::Mac,
    Platform::IOS,
    Platform::Switch,
];

impl LibraryRegistry {
    /// The process-wide registry describing the stock SDK.
    pub fn standard() -> &'static LibraryRegistry {
        static STANDARD: OnceLock<LibraryRegistry> = OnceLock::new();
        STANDARD.get_or_init(LibraryRegistry::builtin)
    }

    /// Build a fresh copy of the stock SDK registry.
    pub fn builtin() -> Self {
        let mut libraries: Vec<LibraryEntry> = CORE_LIBRARIES
            .iter()
            .chain(PLUGIN_LIBRARIES)
            .map(|name| LibraryEntry::new(*name))
            .collect();

        libraries.extend([
            LibraryEntry::new("AkMotionGenerator").except(NO_MOTION),
            LibraryEntry::new("AkRumble").except(NO_MOTION),
            LibraryEntry::new("SceAudio3dEngine").only(&[Platform::PS4]),
            LibraryEntry::new("AkAACDecoder").only(&[Platform::Mac, Platform::IOS]),
            LibraryEntry::new("AkOpusDecoder").only(&[Platform::Switch]),
            // Remote connection to the authoring tool; not in the release SDK.
            LibraryEntry::new("CommunicationCentral")
                .except(&[Platform::Linux])
                .profiling_only(),
        ]);

        let mut conventions = BTreeMap::new();
        conventions.insert(Platform::Mac, NamingConvention::StaticArchive);
        for platform in [
            Platform::PS4,
            Platform::Android,
            Platform::Linux,
            Platform::IOS,
            Platform::Switch,
        ] {
            conventions.insert(platform, NamingConvention::Bare);
        }

        Self {
            default_convention: NamingConvention::ImportLibrary,
            conventions,
            libraries,
        }
    }

    /// Load a registry from a TOML file.
    pub fn load_toml(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ResolveError::NotFound {
                path: path.to_path_buf(),
            });
        }
        let content = std::fs::read_to_string(path)?;
        Self::parse_toml(&content)
    }

    pub fn parse_toml(toml_str: &str) -> Result<Self> {
        Ok(toml::from_str(toml_str)?)
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn convention(&self, platform: Platform) -> NamingConvention {
        self.conventions
            .get(&platform)
            .copied()
            .unwrap_or(self.default_convention)
    }

    /// Catalog entries to link for `platform`, in catalog order.
    pub fn libraries_for(
        &self,
        platform: Platform,
        optimized: bool,
    ) -> impl Iterator<Item = &LibraryEntry> {
        self.libraries
            .iter()
            .filter(move |entry| entry.available(platform, optimized))
    }

    /// Turn a canonical library name into the reference the linker gets.
    ///
    /// `lib_dir` is only consulted by [`NamingConvention::StaticArchive`].
    pub fn artifact(&self, name: &str, platform: Platform, lib_dir: &Path) -> LibraryRef {
        match self.convention(platform) {
            NamingConvention::ImportLibrary => LibraryRef::File(format!("{name}.lib").into()),
            NamingConvention::StaticArchive => LibraryRef::File(lib_dir.join(format!("lib{name}.a"))),
            NamingConvention::Bare => LibraryRef::Bare(name.to_string()),
        }
    }
}
