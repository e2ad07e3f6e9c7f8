//! Rules for the editor tools module, which builds only for editor targets
//! and links no SDK binaries of its own.

use std::path::PathBuf;

use crate::engine_version::BuildVersion;
use crate::layout::SdkLayout;
use crate::resolved::ResolvedConfiguration;
use crate::resolver::{to_strings, LEVEL_SEQUENCE_MODULE};

const PRIVATE_INCLUDE_PATH_MODULES: &[&str] = &["TargetPlatform", "MainFrame", "MovieSceneTools", "LevelEditor"];

const PUBLIC_INCLUDE_PATH_MODULES: &[&str] = &["AssetTools", "ContentBrowser", "Matinee"];

const PUBLIC_MODULES: &[&str] = &[
    "AkAudio",
    "Core",
    "InputCore",
    "CoreUObject",
    "Engine",
    "UnrealEd",
    "Slate",
    "SlateCore",
    "Matinee",
    "EditorStyle",
    "Json",
    "XmlParser",
    "WorkspaceMenuStructure",
    "DirectoryWatcher",
    "Projects",
    "Sequencer",
    "PropertyEditor",
];

const PRIVATE_MODULES: &[&str] = &["MovieScene", "MovieSceneTools", "MovieSceneTracks"];

/// Resolve the editor tools module for an engine of `engine_version`.
pub fn resolve_editor_tools(layout: &SdkLayout, engine_version: Option<&BuildVersion>) -> ResolvedConfiguration {
    let mut out = ResolvedConfiguration {
        private_include_paths: vec![PathBuf::from("AudiokineticTools/Private")],
        private_include_path_modules: to_strings(PRIVATE_INCLUDE_PATH_MODULES),
        public_include_path_modules: to_strings(PUBLIC_INCLUDE_PATH_MODULES),
        public_modules: to_strings(PUBLIC_MODULES),
        private_modules: to_strings(PRIVATE_MODULES),
        ..ResolvedConfiguration::default()
    };
    if layout.has_level_sequence_converter(engine_version) {
        out.additional_modules.insert(LEVEL_SEQUENCE_MODULE.to_string());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn depends_on_runtime_module() {
        let out = resolve_editor_tools(&SdkLayout::default(), None);
        assert_eq!(out.public_modules[0], "AkAudio");
        assert!(out.depends_on("UnrealEd"));
        assert!(out.depends_on("MovieSceneTools"));
        assert_eq!(out.private_include_paths, vec![PathBuf::from("AudiokineticTools/Private")]);
        assert!(out.libraries.is_empty());
        assert!(out.defines.is_empty());
    }

    #[test]
    fn level_sequence_gate() {
        let layout = SdkLayout::default();
        let old = resolve_editor_tools(&layout, Some(&BuildVersion::new(4, 14, 0)));
        assert!(!old.additional_modules.contains(LEVEL_SEQUENCE_MODULE));
        let new = resolve_editor_tools(&layout, Some(&BuildVersion::new(4, 15, 1)));
        assert!(new.additional_modules.contains(LEVEL_SEQUENCE_MODULE));
    }
}
