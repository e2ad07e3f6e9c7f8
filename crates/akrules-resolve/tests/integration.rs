//! End-to-end resolution from files on disk: layout, engine version file,
//! and target descriptors.

use std::path::{Path, PathBuf};

use akrules_resolve::{
    resolve_editor_tools, BuildVersion, ConfigResolver, LibraryRef, LibraryRegistry, ResolvedConfiguration,
    SdkLayout,
};
use akrules_targets::parse::{discover_descriptors, load_descriptor_toml};
use akrules_targets::{BuildConfiguration, Platform, TargetDescriptor};

fn write_checkout(root: &Path) {
    let engine = root.join("UE_4.16/Engine");
    std::fs::create_dir_all(engine.join("Build")).unwrap();
    std::fs::write(
        engine.join("Build/Build.version"),
        r#"{ "MajorVersion": 4, "MinorVersion": 16, "PatchVersion": 3, "BranchName": "++UE4+Release-4.16" }"#,
    )
    .unwrap();

    let plugin = root.join("Plugins/Wwise");
    std::fs::create_dir_all(plugin.join("targets")).unwrap();
    std::fs::write(
        plugin.join("akrules.toml"),
        format!(
            "module-dir = \"{}\"\nengine-dir = \"{}\"\n",
            plugin.join("Source/AkAudio").display(),
            engine.display()
        ),
    )
    .unwrap();
    std::fs::write(
        plugin.join("targets/win64-editor.target.toml"),
        "platform = \"Win64\"\nconfiguration = \"Development\"\ncompiler = \"VisualStudio2017\"\neditor = true\n",
    )
    .unwrap();
    std::fs::write(
        plugin.join("targets/mac.target.toml"),
        "platform = \"Mac\"\nconfiguration = \"Development\"\n",
    )
    .unwrap();
}

fn resolve(target: &TargetDescriptor) -> ResolvedConfiguration {
    ConfigResolver::new(LibraryRegistry::standard(), SdkLayout::for_module("/p/Source/AkAudio")).resolve(target)
}

#[test]
fn checkout_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    write_checkout(dir.path());
    let plugin = dir.path().join("Plugins/Wwise");

    let layout = SdkLayout::discover(&plugin).unwrap();
    assert_eq!(layout.sdk_root(), plugin.join("ThirdParty"));
    let resolver = ConfigResolver::new(LibraryRegistry::standard(), layout);
    assert_eq!(resolver.engine_version().map(|v| v.minor_version), Some(16));

    let targets = discover_descriptors(&plugin).unwrap();
    assert_eq!(targets.len(), 2);
    assert_eq!(targets[0].0, "mac");

    let win = resolver.resolve(&load_descriptor_toml(&targets[1].1).unwrap());
    assert_eq!(win.library_dirs[1], plugin.join("ThirdParty/x64_vc150/Profile/lib"));
    assert!(win.additional_modules.contains("MatineeToLevelSequence"));
    assert!(win.has_library("CommunicationCentral"));
    assert!(win.has_library("SFLib.lib"));

    let mac = resolver.resolve(&load_descriptor_toml(&targets[0].1).unwrap());
    let mac_lib = plugin.join("ThirdParty/Mac/Profile/lib");
    assert_eq!(mac.library_dirs, vec![mac_lib.clone()]);
    assert!(mac
        .libraries
        .contains(&LibraryRef::File(mac_lib.join("libAkSoundEngine.a"))));
    assert!(mac.additional_modules.is_empty());
}

#[test]
fn windows_x64_shipping_scenario() {
    let out = resolve(&TargetDescriptor::new(Platform::Win64, BuildConfiguration::Shipping));
    assert!(out.library_dirs.iter().any(|d| d.ends_with("x64_vc140/Release/lib")));
    let defines = out.define_strings();
    assert!(defines.contains(&"AK_OPTIMIZED".to_string()));
    assert!(defines.contains(&"AK_UNREAL_MAX_CONCURRENT_IO=32".to_string()));
    assert!(!out.has_library("CommunicationCentral"));
}

#[test]
fn android_adds_secondary_arch_dir() {
    let out = resolve(&TargetDescriptor::new(Platform::Android, BuildConfiguration::Test));
    assert_eq!(
        out.library_dirs,
        vec![
            PathBuf::from("/p/ThirdParty/android-9_armeabi-v7a/Profile/lib"),
            PathBuf::from("/p/ThirdParty/android-9_x86/Profile"),
        ]
    );
    assert!(out.has_define("__ANDROID__"));
    assert!(out.include_paths.contains(&PathBuf::from("/p/ThirdParty/samples/SoundEngine/Android")));
    assert!(!out.has_library("AkRumble"));
}

#[test]
fn consoles() {
    let ps4 = resolve(&TargetDescriptor::new(Platform::PS4, BuildConfiguration::Development));
    assert!(ps4.has_define("__ORBIS__"));
    assert_eq!(ps4.libraries[0], LibraryRef::Bare("SceAjm_stub_weak".into()));
    assert_eq!(ps4.libraries[1], LibraryRef::Bare("SceAudio3d_stub_weak".into()));
    assert!(!ps4.libraries.iter().any(|lib| matches!(lib, LibraryRef::File(_))));
    assert!(ps4.libraries.contains(&LibraryRef::Bare("SceAudio3dEngine".into())));
    assert!(ps4.has_library("AkRumble"));

    let xbox = resolve(&TargetDescriptor::new(Platform::XboxOne, BuildConfiguration::Development));
    assert_eq!(xbox.libraries[0], LibraryRef::File("AcpHal.lib".into()));

    let switch = resolve(&TargetDescriptor::new(Platform::Switch, BuildConfiguration::Shipping));
    assert!(switch.has_define("NN_NINTENDO_SDK"));
    assert!(switch.library_dirs[0].ends_with("NX64/Release/lib"));
    assert!(switch.has_library("AkOpusDecoder"));
    assert!(!switch.has_library("CommunicationCentral"));

    let xbox = resolve(&TargetDescriptor::new(Platform::XboxOne, BuildConfiguration::Debug));
    assert!(xbox.has_define("_XBOX_ONE"));
    assert!(xbox.library_dirs[0].ends_with("XboxOne_vc140/Profile/lib"));
    assert!(xbox.libraries.contains(&LibraryRef::File("AkRumble.lib".into())));
}

#[test]
fn every_target_resolves_deterministically() {
    for platform in Platform::ALL {
        for configuration in BuildConfiguration::ALL {
            for editor in [false, true] {
                let target = TargetDescriptor::new(platform, configuration).with_editor(editor);
                let first = resolve(&target);
                assert_eq!(first, resolve(&target), "{}", target.label());
                let expected = if editor { "256" } else { "32" };
                assert_eq!(first.define_value("AK_UNREAL_MAX_CONCURRENT_IO"), Some(expected));
                assert_eq!(first.has_define("AK_OPTIMIZED"), configuration == BuildConfiguration::Shipping);
            }
        }
    }
}

#[test]
fn resolver_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ConfigResolver<'static>>();
    assert_send_sync::<LibraryRegistry>();

    let resolver = ConfigResolver::new(LibraryRegistry::standard(), SdkLayout::default());
    let target = TargetDescriptor::new(Platform::Linux, BuildConfiguration::Development);
    let expected = resolver.resolve(&target);
    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4).map(|_| s.spawn(|| resolver.resolve(&target))).collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

#[test]
fn editor_tools_follow_engine_version() {
    let layout = SdkLayout::default();
    let tools = resolve_editor_tools(&layout, Some(&BuildVersion::new(4, 18, 0)));
    assert!(tools.depends_on("AkAudio"));
    assert!(tools.additional_modules.contains("MatineeToLevelSequence"));
    assert!(tools.public_include_path_modules.contains(&"ContentBrowser".to_string()));
}
