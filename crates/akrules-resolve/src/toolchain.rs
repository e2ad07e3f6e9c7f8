//! Visual Studio toolchain detection.
//!
//! SDK binaries for Visual Studio platforms live in directories tagged with
//! the toolchain they were built with (`x64_vc140`, `XboxOne_vc110`, ...).
//! The compiler in use is only known to the build driver, and not every
//! driver reports it, so detection is optional and always falls back to
//! [`DEFAULT_TOOLCHAIN_TAG`].

/// Tag used whenever the compiler cannot be identified.
pub const DEFAULT_TOOLCHAIN_TAG: &str = "vc140";

/// Environment variable consulted by [`EnvCompilerProbe`] for Windows targets.
pub const WINDOWS_COMPILER_VAR: &str = "AKRULES_WINDOWS_COMPILER";

/// Environment variable consulted by [`EnvCompilerProbe`] for Xbox One targets.
pub const XBOXONE_COMPILER_VAR: &str = "AKRULES_XBOXONE_COMPILER";

/// Outcome of an optional lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Detection<T> {
    Found(T),
    NotFound,
}

impl<T> Detection<T> {
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Detection::Found(value) => value,
            Detection::NotFound => default,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Detection::Found(_))
    }
}

impl<T> From<Option<T>> for Detection<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Detection::Found(value),
            None => Detection::NotFound,
        }
    }
}

/// Which compiler setting a platform reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolchainFamily {
    /// Desktop Windows, both architectures.
    Windows,
    XboxOne,
}

/// Source of the active compiler identifier when the target descriptor
/// does not carry one.
pub trait CompilerProbe: Send + Sync {
    /// Report the compiler identifier (e.g. `VisualStudio2017`) configured
    /// for `family`.
    fn detect(&self, family: ToolchainFamily) -> Detection<String>;
}

/// A probe that never finds anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProbe;

impl CompilerProbe for NoProbe {
    fn detect(&self, _family: ToolchainFamily) -> Detection<String> {
        Detection::NotFound
    }
}

/// Reads the compiler identifier from environment variables.
#[derive(Debug, Clone)]
pub struct EnvCompilerProbe {
    windows_var: String,
    xbox_one_var: String,
}

impl EnvCompilerProbe {
    /// Probe reading [`WINDOWS_COMPILER_VAR`] and [`XBOXONE_COMPILER_VAR`].
    pub fn new() -> Self {
        Self::with_vars(WINDOWS_COMPILER_VAR, XBOXONE_COMPILER_VAR)
    }

    pub fn with_vars(windows_var: impl Into<String>, xbox_one_var: impl Into<String>) -> Self {
        Self {
            windows_var: windows_var.into(),
            xbox_one_var: xbox_one_var.into(),
        }
    }
}

impl Default for EnvCompilerProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl CompilerProbe for EnvCompilerProbe {
    fn detect(&self, family: ToolchainFamily) -> Detection<String> {
        let var = match family {
            ToolchainFamily::Windows => &self.windows_var,
            ToolchainFamily::XboxOne => &self.xbox_one_var,
        };
        std::env::var(var)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .into()
    }
}

/// Map a compiler identifier to the SDK directory tag for `family`.
pub fn toolchain_tag(family: ToolchainFamily, compiler: &str) -> Detection<&'static str> {
    let tag = match (family, compiler) {
        (ToolchainFamily::Windows, "VisualStudio2013") => "vc120",
        (ToolchainFamily::Windows, "VisualStudio2015") => "vc140",
        (ToolchainFamily::Windows, "VisualStudio2017") => "vc150",
        (ToolchainFamily::XboxOne, "VisualStudio2012") => "vc110",
        _ => return Detection::NotFound,
    };
    Detection::Found(tag)
}

/// Pick the toolchain tag: the explicit compiler if given, else whatever the
/// probe reports, else [`DEFAULT_TOOLCHAIN_TAG`].
pub fn select_tag(
    family: ToolchainFamily,
    compiler: Option<&str>,
    probe: &dyn CompilerProbe,
) -> &'static str {
    let compiler = match compiler {
        Some(compiler) => Detection::Found(compiler.to_string()),
        None => probe.detect(family),
    };

    let Detection::Found(compiler) = compiler else {
        log::debug!("no {family:?} compiler reported; using {DEFAULT_TOOLCHAIN_TAG}");
        return DEFAULT_TOOLCHAIN_TAG;
    };

    let tag = toolchain_tag(family, &compiler);
    if !tag.is_found() {
        log::debug!("unrecognised {family:?} compiler '{compiler}'; using {DEFAULT_TOOLCHAIN_TAG}");
    }
    tag.unwrap_or(DEFAULT_TOOLCHAIN_TAG)
}
