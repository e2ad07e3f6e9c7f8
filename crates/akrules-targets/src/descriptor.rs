//! The target descriptor: one build invocation's identity.

use serde::{Deserialize, Serialize};

use crate::configuration::BuildConfiguration;
use crate::platform::Platform;

/// Everything the resolver needs to know about the build being configured.
///
/// Constructed by the build driver (or loaded from a `.target.toml` file)
/// and never mutated by resolution.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct TargetDescriptor {
    pub platform: Platform,
    pub configuration: BuildConfiguration,
    /// Compiler identifier reported by the driver (e.g. `VisualStudio2017`).
    /// Only meaningful for Visual Studio platforms.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compiler: Option<String>,
    /// Building the editor rather than a standalone game.
    #[serde(default)]
    pub editor: bool,
    /// Debug builds link the SDK's debug binaries instead of the profile ones.
    #[serde(default)]
    pub debug_crt: bool,
}

impl TargetDescriptor {
    /// A game (non-editor) target without a compiler token.
    pub fn new(platform: Platform, configuration: BuildConfiguration) -> Self {
        Self {
            platform,
            configuration,
            compiler: None,
            editor: false,
            debug_crt: false,
        }
    }

    pub fn with_compiler(mut self, compiler: impl Into<String>) -> Self {
        self.compiler = Some(compiler.into());
        self
    }

    pub fn with_editor(mut self, editor: bool) -> Self {
        self.editor = editor;
        self
    }

    pub fn with_debug_crt(mut self, debug_crt: bool) -> Self {
        self.debug_crt = debug_crt;
        self
    }

    /// Short label such as `Win64-Shipping` or `Mac-Development-editor`.
    pub fn label(&self) -> String {
        let mut label = format!("{}-{}", self.platform, self.configuration);
        if self.editor {
            label.push_str("-editor");
        }
        label
    }
}
