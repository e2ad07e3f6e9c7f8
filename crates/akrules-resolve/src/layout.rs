//! `akrules.toml`: where the plugin, SDK and engine live, and the tunables
//! that end up in preprocessor definitions.

use std::path::{Component, Path, PathBuf};

use semver::{Comparator, Op, Prerelease, VersionReq};
use serde::{Deserialize, Serialize};

use crate::engine_version::BuildVersion;
use crate::error::{ResolveError, Result};

/// Conventional file name for the layout configuration.
pub const LAYOUT_FILE_NAME: &str = "akrules.toml";

/// Filesystem layout and tunables for one plugin checkout.
///
/// Every field has a default matching the stock plugin, so an empty file
/// (or no file) is a valid configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct SdkLayout {
    /// Directory holding the runtime module's sources.
    pub module_dir: PathBuf,
    /// SDK root, relative to `module_dir` unless absolute.
    pub sdk_dir: PathBuf,
    /// Engine installation, used to find `Build/Build.version`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine_dir: Option<PathBuf>,
    /// DirectX SDK root as the build driver spells it.
    pub directx_sdk_root: String,
    /// Streaming IO granularity in bytes.
    pub io_granularity: u32,
    /// Concurrent IO limit for editor builds.
    pub editor_max_concurrent_io: u32,
    /// Concurrent IO limit for game builds.
    pub game_max_concurrent_io: u32,
    /// Engine versions that ship the Matinee-to-Sequencer converter module.
    pub level_sequence_engine: VersionReq,
}

impl Default for SdkLayout {
    fn default() -> Self {
        Self {
            module_dir: PathBuf::from("Source/AkAudio"),
            sdk_dir: PathBuf::from("../../ThirdParty"),
            engine_dir: None,
            directx_sdk_root: "$(DXSDK_DIR)".to_string(),
            io_granularity: 32768,
            editor_max_concurrent_io: 256,
            game_max_concurrent_io: 32,
            level_sequence_engine: VersionReq {
                comparators: vec![Comparator {
                    op: Op::Caret,
                    major: 4,
                    minor: Some(15),
                    patch: None,
                    pre: Prerelease::EMPTY,
                }],
            },
        }
    }
}

impl SdkLayout {
    /// Layout for a plugin whose runtime module lives at `module_dir`.
    pub fn for_module(module_dir: impl Into<PathBuf>) -> Self {
        Self {
            module_dir: module_dir.into(),
            ..Self::default()
        }
    }

    pub fn with_engine_dir(mut self, engine_dir: impl Into<PathBuf>) -> Self {
        self.engine_dir = Some(engine_dir.into());
        self
    }

    pub fn load_toml(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ResolveError::NotFound {
                path: path.to_path_buf(),
            });
        }
        let content = std::fs::read_to_string(path)?;
        Self::parse_toml(&content)
    }

    /// Load `akrules.toml` from `dir`, or the defaults if there is none.
    pub fn discover(dir: &Path) -> Result<Self> {
        let path = dir.join(LAYOUT_FILE_NAME);
        if path.is_file() {
            Self::load_toml(&path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn parse_toml(toml_str: &str) -> Result<Self> {
        Ok(toml::from_str(toml_str)?)
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// The SDK root with `.` and `..` folded away. Never touches the
    /// filesystem.
    pub fn sdk_root(&self) -> PathBuf {
        normalize(&self.module_dir.join(&self.sdk_dir))
    }

    /// `<sdk>/samples/SoundEngine`.
    pub fn samples_dir(&self) -> PathBuf {
        self.sdk_root().join("samples").join("SoundEngine")
    }

    pub fn version_file(&self) -> Option<PathBuf> {
        self.engine_dir.as_deref().map(BuildVersion::default_path)
    }

    pub fn max_concurrent_io(&self, editor: bool) -> u32 {
        if editor {
            self.editor_max_concurrent_io
        } else {
            self.game_max_concurrent_io
        }
    }

    /// Whether an engine of `version` ships the level sequence converter.
    /// An unknown version does not.
    pub fn has_level_sequence_converter(&self, version: Option<&BuildVersion>) -> bool {
        version.is_some_and(|v| v.satisfies(&self.level_sequence_engine))
    }
}

/// Lexically fold `.` and `..` components.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other.as_os_str()),
        }
    }
    out
}
