//! The engine's `Build/Build.version` file.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ResolveError, Result};

/// Engine version record, as written by the engine's build scripts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BuildVersion {
    pub major_version: u64,
    pub minor_version: u64,
    #[serde(default)]
    pub patch_version: u64,
    #[serde(default)]
    pub changelist: u64,
    #[serde(default)]
    pub branch_name: String,
}

impl BuildVersion {
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major_version: major,
            minor_version: minor,
            patch_version: patch,
            changelist: 0,
            branch_name: String::new(),
        }
    }

    /// Location of the version file inside an engine installation.
    pub fn default_path(engine_dir: &Path) -> PathBuf {
        engine_dir.join("Build").join("Build.version")
    }

    pub fn parse(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn read(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ResolveError::NotFound {
                path: path.to_path_buf(),
            });
        }
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Like [`BuildVersion::read`], but a missing or malformed file is
    /// reported as `None`.
    pub fn try_read(path: &Path) -> Option<Self> {
        match Self::read(path) {
            Ok(version) => Some(version),
            Err(err) => {
                log::debug!("engine version unavailable from {}: {err}", path.display());
                None
            }
        }
    }

    pub fn to_semver(&self) -> semver::Version {
        semver::Version::new(self.major_version, self.minor_version, self.patch_version)
    }

    pub fn satisfies(&self, req: &semver::VersionReq) -> bool {
        req.matches(&self.to_semver())
    }
}
