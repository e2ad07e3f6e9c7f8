//! Build configuration resolution for the audio SDK plugin.
//!
//! Given a [`TargetDescriptor`](akrules_targets::TargetDescriptor), a
//! [`ConfigResolver`] produces the include paths, library directories,
//! preprocessor definitions, libraries and module dependencies the engine's
//! build driver must pass on to the compiler and linker.
//!
//! # Architecture
//!
//! - **Profiles**: one static record per SDK-supported platform
//! - **Registry**: the SDK library catalog and per-platform naming rules
//! - **Toolchain**: optional compiler detection with a default tag
//! - **Layout**: plugin/SDK/engine locations and tunables (`akrules.toml`)
//!
//! Resolution has no error channel. Missing optional signals (compiler
//! identity, engine version file) fall back to defaults.

pub mod config_dir;
pub mod engine_version;
pub mod error;
pub mod layout;
pub mod profile;
pub mod registry;
pub mod resolved;
pub mod resolver;
pub mod toolchain;
pub mod tools;

// Re-exports for convenience.
pub use engine_version::BuildVersion;
pub use error::{ResolveError, Result};
pub use layout::SdkLayout;
pub use registry::{LibraryEntry, LibraryRegistry, NamingConvention};
pub use resolved::{Define, LibraryRef, ResolvedConfiguration};
pub use resolver::ConfigResolver;
pub use toolchain::{CompilerProbe, Detection, EnvCompilerProbe, NoProbe, ToolchainFamily};
pub use tools::resolve_editor_tools;
