//! Mapping from engine build configuration to SDK binary flavour directory.

use akrules_targets::BuildConfiguration;

/// How a platform adjusts the configuration directory after the table lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigDirRule {
    Standard,
    /// Append a suffix (e.g. `-iphoneos`).
    Suffix(&'static str),
    /// Always link the release binaries; the SDK ships no profiling build
    /// for this platform's toolchain.
    ForceRelease,
}

/// Directory name before platform rules apply.
///
/// Debug links the profile binaries unless the debug CRT is in use, since
/// the SDK's debug binaries require it.
pub fn base_config_dir(configuration: BuildConfiguration, debug_crt: bool) -> &'static str {
    match configuration {
        BuildConfiguration::Debug if debug_crt => "Debug",
        BuildConfiguration::Debug
        | BuildConfiguration::DebugGame
        | BuildConfiguration::Development
        | BuildConfiguration::Test => "Profile",
        BuildConfiguration::Shipping => "Release",
    }
}

pub fn config_dir(configuration: BuildConfiguration, debug_crt: bool, rule: ConfigDirRule) -> String {
    let base = base_config_dir(configuration, debug_crt);
    match rule {
        ConfigDirRule::Standard => base.to_string(),
        ConfigDirRule::Suffix(suffix) => format!("{base}{suffix}"),
        ConfigDirRule::ForceRelease => "Release".to_string(),
    }
}
