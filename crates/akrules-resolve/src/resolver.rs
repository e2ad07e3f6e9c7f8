//! Resolution of a target descriptor into a concrete build configuration.

use std::path::PathBuf;

use akrules_targets::TargetDescriptor;

use crate::config_dir::config_dir;
use crate::engine_version::BuildVersion;
use crate::layout::SdkLayout;
use crate::profile::{profile_for, LibDirName, PlatformProfile};
use crate::registry::LibraryRegistry;
use crate::resolved::{Define, LibraryRef, ResolvedConfiguration};
use crate::toolchain::{select_tag, CompilerProbe, NoProbe};

const PUBLIC_MODULES: &[&str] = &["Core", "CoreUObject", "Engine", "MovieScene", "MovieSceneTracks"];

const PRIVATE_MODULES: &[&str] = &[
    "Core",
    "CoreUObject",
    "Engine",
    "SlateCore",
    "NetworkReplayStreaming",
    "Projects",
];

const EDITOR_MODULES: &[&str] = &["SlateCore", "Slate", "UnrealEd"];

/// Module only present in engines matching [`SdkLayout::level_sequence_engine`].
pub const LEVEL_SEQUENCE_MODULE: &str = "MatineeToLevelSequence";

/// Library linked when the authoring-tool bridge is enabled.
const SOUND_FRAME_LIBRARY: &str = "SFLib.lib";

/// Resolves target descriptors for one plugin layout.
///
/// Holds only read-only inputs; [`ConfigResolver::resolve`] can be called
/// any number of times and from any thread.
pub struct ConfigResolver<'a> {
    registry: &'a LibraryRegistry,
    layout: SdkLayout,
    probe: &'a dyn CompilerProbe,
    engine_version: Option<BuildVersion>,
}

impl<'a> ConfigResolver<'a> {
    /// A resolver without a compiler probe that reads the engine version
    /// from the layout's engine directory when needed.
    pub fn new(registry: &'a LibraryRegistry, layout: SdkLayout) -> Self {
        Self {
            registry,
            layout,
            probe: &NoProbe,
            engine_version: None,
        }
    }

    pub fn with_probe(mut self, probe: &'a dyn CompilerProbe) -> Self {
        self.probe = probe;
        self
    }

    /// Use `version` instead of reading the engine's version file.
    pub fn with_engine_version(mut self, version: BuildVersion) -> Self {
        self.engine_version = Some(version);
        self
    }

    /// The engine version, if it was given or the version file is readable.
    pub fn engine_version(&self) -> Option<BuildVersion> {
        if let Some(version) = &self.engine_version {
            return Some(version.clone());
        }
        self.layout
            .version_file()
            .and_then(|path| BuildVersion::try_read(&path))
    }

    /// Resolve `target`. Never fails: anything that cannot be determined
    /// falls back to a default, and platforms without SDK support get only
    /// the platform-independent part of the configuration.
    pub fn resolve(&self, target: &TargetDescriptor) -> ResolvedConfiguration {
        let mut out = ResolvedConfiguration::default();
        let sdk = self.layout.sdk_root();
        let samples = self.layout.samples_dir();

        out.include_paths.push(sdk.join("include"));
        out.include_paths.push(samples.join("Common"));
        out.include_paths.push(samples.clone());
        out.private_include_paths.push(PathBuf::from("AkAudio/Private"));
        out.private_include_path_modules.push("Settings".to_string());
        out.public_modules = to_strings(PUBLIC_MODULES);
        out.private_modules = to_strings(PRIVATE_MODULES);

        out.defines.push(Define::flag("USE_AKAUDIO"));
        out.defines.push(Define::valued(
            "AK_UNREAL_MAX_CONCURRENT_IO",
            self.layout.max_concurrent_io(target.editor),
        ));
        out.defines.push(Define::valued("AK_UNREAL_IO_GRANULARITY", self.layout.io_granularity));

        if target.editor {
            self.add_editor_modules(&mut out);
        }

        let profile = profile_for(target.platform);
        if let Some(profile) = profile {
            for subdir in profile.include_subdirs {
                out.include_paths.push(samples.join(subdir));
            }
            if let Some(arch) = profile.directx_arch {
                out.library_dirs
                    .push(PathBuf::from(&self.layout.directx_sdk_root).join("Lib").join(arch));
            }
            out.defines
                .extend(profile.defines.iter().map(|name| Define::flag(*name)));
            if target.editor && profile.sound_frame_in_editor {
                out.defines.push(Define::flag("AK_SOUNDFRAME"));
            }
            out.libraries
                .extend(profile.system_libraries.iter().map(|lib| lib.to_library_ref()));
            out.frameworks = to_strings(profile.frameworks);
        }

        let optimized = target.configuration.is_optimized();
        if optimized {
            out.defines.push(Define::flag("AK_OPTIMIZED"));
        }

        let Some(profile) = profile else {
            log::debug!(
                "{}: no SDK binaries for this platform; skipping library resolution",
                target.label()
            );
            return out;
        };

        let config_dir = config_dir(target.configuration, target.debug_crt, profile.config_dir_rule);
        let lib_dir = sdk
            .join(self.lib_dir_name(profile, target))
            .join(&config_dir)
            .join("lib");
        out.library_dirs.push(lib_dir.clone());
        for secondary in profile.secondary_lib_dirs {
            out.library_dirs.push(sdk.join(secondary).join(&config_dir));
        }

        for entry in self.registry.libraries_for(target.platform, optimized) {
            out.libraries
                .push(self.registry.artifact(&entry.name, target.platform, &lib_dir));
        }
        if out.has_define("AK_SOUNDFRAME") {
            out.libraries.push(LibraryRef::File(PathBuf::from(SOUND_FRAME_LIBRARY)));
        }

        log::trace!(
            "{}: {} include path(s), {} library dir(s), {} librar(ies)",
            target.label(),
            out.include_paths.len(),
            out.library_dirs.len(),
            out.libraries.len()
        );
        out
    }

    /// The SDK binary directory name for `target`, e.g. `x64_vc150`.
    fn lib_dir_name(&self, profile: &PlatformProfile, target: &TargetDescriptor) -> String {
        match profile.lib_dir {
            LibDirName::Fixed(name) => name.to_string(),
            LibDirName::Toolchain { prefix, family } => {
                let tag = select_tag(family, target.compiler.as_deref(), self.probe);
                format!("{prefix}{tag}")
            }
        }
    }

    fn add_editor_modules(&self, out: &mut ResolvedConfiguration) {
        out.additional_modules
            .extend(EDITOR_MODULES.iter().map(|m| m.to_string()));

        let version = self.engine_version();
        if self.layout.has_level_sequence_converter(version.as_ref()) {
            out.additional_modules.insert(LEVEL_SEQUENCE_MODULE.to_string());
        } else {
            log::debug!(
                "engine version {:?} outside {}; not adding {LEVEL_SEQUENCE_MODULE}",
                version.map(|v| v.to_semver()),
                self.layout.level_sequence_engine
            );
        }
    }
}

pub(crate) fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
