//! TOML parsing, serialization, validation, and discovery for target descriptors.
//!
//! Descriptors are stored as `.target.toml` files in the `targets/` directory
//! of a plugin checkout. This module provides functions to load, validate,
//! serialize, and discover these files.

use std::path::{Path, PathBuf};

use crate::configuration::BuildConfiguration;
use crate::descriptor::TargetDescriptor;
use crate::error::{Result, TargetError};
use crate::platform::Platform;

/// A validation issue found in a target descriptor.
#[derive(Debug, Clone)]
pub struct ValidationIssue {
    /// Severity: "error" or "warning".
    pub severity: &'static str,
    /// Human-readable description.
    pub message: String,
}

/// Load a descriptor from a `.target.toml` file.
pub fn load_descriptor_toml(path: &Path) -> Result<TargetDescriptor> {
    if !path.exists() {
        return Err(TargetError::NotFound {
            path: path.to_path_buf(),
        });
    }
    let content = std::fs::read_to_string(path)?;
    parse_descriptor_toml(&content)
}

/// Parse a descriptor from a TOML string.
pub fn parse_descriptor_toml(toml_str: &str) -> Result<TargetDescriptor> {
    let descriptor: TargetDescriptor = toml::from_str(toml_str)?;
    Ok(descriptor)
}

/// Serialize a descriptor to pretty TOML.
pub fn descriptor_to_toml(descriptor: &TargetDescriptor) -> Result<String> {
    let toml_str = toml::to_string_pretty(descriptor)?;
    Ok(toml_str)
}

/// Check a descriptor for combinations that parse but make little sense.
///
/// Nothing here is fatal to resolution, so every issue is a warning.
pub fn validate_descriptor(descriptor: &TargetDescriptor) -> std::result::Result<(), Vec<ValidationIssue>> {
    let mut issues = Vec::new();

    if let Some(compiler) = &descriptor.compiler {
        if !descriptor.platform.uses_msvc() {
            issues.push(ValidationIssue {
                severity: "warning",
                message: format!(
                    "compiler '{}' is ignored on {}: only Visual Studio platforms select a toolchain",
                    compiler, descriptor.platform
                ),
            });
        }
    }

    if descriptor.debug_crt && descriptor.configuration != BuildConfiguration::Debug {
        issues.push(ValidationIssue {
            severity: "warning",
            message: format!(
                "debug-crt has no effect in the {} configuration",
                descriptor.configuration
            ),
        });
    }

    if descriptor.editor
        && !(descriptor.platform.is_windows()
            || matches!(descriptor.platform, Platform::Mac | Platform::Linux))
    {
        issues.push(ValidationIssue {
            severity: "warning",
            message: format!("the editor does not run on {}", descriptor.platform),
        });
    }

    if issues.is_empty() {
        Ok(())
    } else {
        Err(issues)
    }
}

/// Discover all `.target.toml` files in a checkout's `targets/` directory.
///
/// Returns a list of (target_name, file_path) pairs sorted by name.
pub fn discover_descriptors(root: &Path) -> Result<Vec<(String, PathBuf)>> {
    let targets_dir = root.join("targets");
    if !targets_dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut targets = Vec::new();
    for entry in std::fs::read_dir(&targets_dir)? {
        let path = entry?.path();
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .and_then(|n| n.strip_suffix(".target.toml"))
            .map(str::to_string);
        if let Some(name) = name {
            targets.push((name, path));
        }
    }
    targets.sort_by(|a, b| a.0.cmp(&b.0));
    log::trace!("discovered {} target descriptor(s) under {}", targets.len(), targets_dir.display());
    Ok(targets)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_windows_editor() {
        let original = TargetDescriptor::new(Platform::Win64, BuildConfiguration::Debug)
            .with_compiler("VisualStudio2017")
            .with_editor(true)
            .with_debug_crt(true);
        let toml_str = descriptor_to_toml(&original).unwrap();
        let parsed = parse_descriptor_toml(&toml_str).unwrap();
        assert_eq!(original, parsed);
    }

    #[test]
    fn parse_minimal_toml() {
        let toml_str = r#"
platform = "PS4"
configuration = "Shipping"
"#;
        let d = parse_descriptor_toml(toml_str).unwrap();
        assert_eq!(d.platform, Platform::PS4);
        assert_eq!(d.configuration, BuildConfiguration::Shipping);
        assert!(d.compiler.is_none());
        assert!(!d.editor);
        assert!(!d.debug_crt);
    }

    #[test]
    fn parse_accepts_aliases() {
        let toml_str = r#"
platform = "windows-x64"
configuration = "profile"
compiler = "VisualStudio2013"
editor = true
"#;
        let d = parse_descriptor_toml(toml_str).unwrap();
        assert_eq!(d.platform, Platform::Win64);
        assert_eq!(d.configuration, BuildConfiguration::Development);
        assert!(d.editor);
    }

    #[test]
    fn parse_unknown_platform_returns_error() {
        let toml_str = r#"
platform = "Dreamcast"
configuration = "Debug"
"#;
        let err = parse_descriptor_toml(toml_str).unwrap_err();
        assert!(err.to_string().contains("Dreamcast"));
    }

    #[test]
    fn parse_missing_field_returns_error() {
        assert!(parse_descriptor_toml("platform = \"Linux\"").is_err());
    }

    #[test]
    fn parse_invalid_returns_error() {
        assert!(parse_descriptor_toml("this is not valid toml [[[").is_err());
    }

    #[test]
    fn validate_clean_descriptor() {
        let d = TargetDescriptor::new(Platform::Win64, BuildConfiguration::Debug)
            .with_compiler("VisualStudio2015")
            .with_debug_crt(true);
        assert!(validate_descriptor(&d).is_ok());
    }

    #[test]
    fn validate_compiler_on_linux() {
        let d = TargetDescriptor::new(Platform::Linux, BuildConfiguration::Development)
            .with_compiler("VisualStudio2017");
        let issues = validate_descriptor(&d).unwrap_err();
        assert!(issues.iter().any(|i| i.message.contains("is ignored on Linux")));
        assert!(issues.iter().all(|i| i.severity == "warning"));
    }

    #[test]
    fn validate_debug_crt_outside_debug() {
        let d = TargetDescriptor::new(Platform::Win64, BuildConfiguration::Shipping)
            .with_debug_crt(true);
        let issues = validate_descriptor(&d).unwrap_err();
        assert!(issues.iter().any(|i| i.message.contains("debug-crt")));
    }

    #[test]
    fn validate_editor_on_console() {
        let d = TargetDescriptor::new(Platform::Switch, BuildConfiguration::Development)
            .with_editor(true);
        let issues = validate_descriptor(&d).unwrap_err();
        assert!(issues.iter().any(|i| i.message.contains("editor does not run")));

        let xbox = TargetDescriptor::new(Platform::XboxOne, BuildConfiguration::Development).with_editor(true);
        assert!(validate_descriptor(&xbox).is_err());
        for host in [Platform::Win32, Platform::Win64, Platform::Mac, Platform::Linux] {
            let d = TargetDescriptor::new(host, BuildConfiguration::Development).with_editor(true);
            assert!(validate_descriptor(&d).is_ok(), "{host}");
        }
    }

    fn template(platform: Platform) -> String {
        let mut descriptor = TargetDescriptor::new(platform, BuildConfiguration::Development);
        if platform.uses_msvc() {
            descriptor.compiler = Some("VisualStudio2015".into());
        }
        descriptor_to_toml(&descriptor).unwrap()
    }

    #[test]
    fn serialized_descriptors_validate() {
        let toml_str = template(Platform::XboxOne);
        let d = parse_descriptor_toml(&toml_str).unwrap();
        assert_eq!(d.platform, Platform::XboxOne);
        assert!(d.compiler.is_some());
        assert!(validate_descriptor(&d).is_ok());

        let d = parse_descriptor_toml(&template(Platform::Android)).unwrap();
        assert!(d.compiler.is_none());
    }

    #[test]
    fn discover_descriptors_finds_files() {
        let dir = tempfile::tempdir().unwrap();
        let targets_dir = dir.path().join("targets");
        std::fs::create_dir_all(&targets_dir).unwrap();

        let template = template(Platform::Linux);
        std::fs::write(targets_dir.join("linux.target.toml"), &template).unwrap();
        std::fs::write(targets_dir.join("android.target.toml"), &template).unwrap();
        std::fs::write(targets_dir.join("notes.txt"), "ignore me").unwrap();

        let targets = discover_descriptors(dir.path()).unwrap();
        assert_eq!(targets.len(), 2);
        assert_eq!(targets[0].0, "android");
        assert_eq!(targets[1].0, "linux");
    }

    #[test]
    fn discover_empty_dir() {
        let dir = tempfile::tempdir().unwrap();
        assert!(discover_descriptors(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn load_not_found() {
        let result = load_descriptor_toml(Path::new("/nonexistent/path.target.toml"));
        assert!(matches!(result.unwrap_err(), TargetError::NotFound { .. }));
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mac.target.toml");
        std::fs::write(&path, template(Platform::Mac)).unwrap();

        let d = load_descriptor_toml(&path).unwrap();
        assert_eq!(d.platform, Platform::Mac);
    }
}
