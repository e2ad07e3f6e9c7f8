//! The resolved build configuration handed to the compiler/linker driver.

use std::collections::BTreeSet;
use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A preprocessor definition, optionally carrying a value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Define {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl Define {
    /// A bare flag such as `AK_OPTIMIZED`.
    pub fn flag(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
        }
    }

    /// A `NAME=VALUE` definition.
    pub fn valued(name: impl Into<String>, value: impl ToString) -> Self {
        Self {
            name: name.into(),
            value: Some(value.to_string()),
        }
    }
}

impl fmt::Display for Define {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{}={}", self.name, value),
            None => f.write_str(&self.name),
        }
    }
}

/// A library to hand to the linker.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LibraryRef {
    /// A bare name the platform linker resolves through its search paths.
    Bare(String),
    /// An explicit file name or path.
    File(PathBuf),
}

impl LibraryRef {
    /// Whether this reference denotes the library `name`, under any of the
    /// naming conventions the registry produces.
    pub fn refers_to(&self, name: &str) -> bool {
        match self {
            LibraryRef::Bare(bare) => bare == name,
            LibraryRef::File(path) => path
                .file_name()
                .and_then(|f| f.to_str())
                .is_some_and(|f| {
                    f == name
                        || f.strip_suffix(".lib") == Some(name)
                        || f.strip_prefix("lib").and_then(|s| s.strip_suffix(".a")) == Some(name)
                }),
        }
    }
}

impl fmt::Display for LibraryRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LibraryRef::Bare(name) => f.write_str(name),
            LibraryRef::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Output of one resolution.
///
/// Every list keeps insertion order; two resolutions of the same target
/// compare equal and serialize identically.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ResolvedConfiguration {
    pub include_paths: Vec<PathBuf>,
    /// Include paths visible only to the module's own sources.
    pub private_include_paths: Vec<PathBuf>,
    pub library_dirs: Vec<PathBuf>,
    pub defines: Vec<Define>,
    pub libraries: Vec<LibraryRef>,
    /// Apple frameworks to link.
    pub frameworks: Vec<String>,
    pub public_modules: Vec<String>,
    pub private_modules: Vec<String>,
    /// Modules whose headers are used without linking against them.
    pub public_include_path_modules: Vec<String>,
    pub private_include_path_modules: Vec<String>,
    /// Conditionally added module dependencies (editor-only and version-gated).
    pub additional_modules: BTreeSet<String>,
}

impl ResolvedConfiguration {
    pub fn has_define(&self, name: &str) -> bool {
        self.defines.iter().any(|d| d.name == name)
    }

    /// Value of the first definition named `name`, if it has one.
    pub fn define_value(&self, name: &str) -> Option<&str> {
        self.defines
            .iter()
            .find(|d| d.name == name)
            .and_then(|d| d.value.as_deref())
    }

    pub fn has_library(&self, name: &str) -> bool {
        self.libraries.iter().any(|l| l.refers_to(name))
    }

    /// Whether `module` is a dependency of any kind.
    pub fn depends_on(&self, module: &str) -> bool {
        self.public_modules.iter().any(|m| m == module)
            || self.private_modules.iter().any(|m| m == module)
            || self.additional_modules.contains(module)
    }

    /// Definitions rendered as `NAME` / `NAME=VALUE` strings.
    pub fn define_strings(&self) -> Vec<String> {
        self.defines.iter().map(Define::to_string).collect()
    }

    /// Pretty JSON for build drivers that consume the result out of process.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
