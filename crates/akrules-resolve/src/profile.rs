//! Per-platform contributions to the resolved configuration.
//!
//! Each SDK-supported platform has one [`PlatformProfile`]. Platforms the
//! SDK does not ship binaries for have none, and [`profile_for`] says so
//! explicitly with `None`.

use std::path::PathBuf;

use akrules_targets::Platform;

use crate::config_dir::ConfigDirRule;
use crate::resolved::LibraryRef;
use crate::toolchain::ToolchainFamily;

/// Name of the platform's SDK binary directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LibDirName {
    Fixed(&'static str),
    /// `<prefix><toolchain tag>`, e.g. `x64_vc140`.
    Toolchain {
        prefix: &'static str,
        family: ToolchainFamily,
    },
}

/// A platform library outside the SDK.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemLibrary {
    /// Explicit file name, e.g. `dsound.lib`.
    File(&'static str),
    /// Linker name without prefix or extension, e.g. `SceAjm_stub_weak`.
    Bare(&'static str),
}

impl SystemLibrary {
    pub fn to_library_ref(self) -> LibraryRef {
        match self {
            SystemLibrary::File(name) => LibraryRef::File(PathBuf::from(name)),
            SystemLibrary::Bare(name) => LibraryRef::Bare(name.to_string()),
        }
    }
}

/// What one platform adds on top of the base configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformProfile {
    pub lib_dir: LibDirName,
    /// Subdirectories of `samples/SoundEngine` to add as include paths.
    pub include_subdirs: &'static [&'static str],
    pub defines: &'static [&'static str],
    pub system_libraries: &'static [SystemLibrary],
    pub frameworks: &'static [&'static str],
    /// Architecture subdirectory of the DirectX SDK's `Lib` directory.
    pub directx_arch: Option<&'static str>,
    /// Extra SDK binary directories for secondary architectures, each
    /// joined with the configuration directory.
    pub secondary_lib_dirs: &'static [&'static str],
    pub config_dir_rule: ConfigDirRule,
    /// Editor builds enable the authoring-tool bridge (`AK_SOUNDFRAME`).
    pub sound_frame_in_editor: bool,
}

const BASE: PlatformProfile = PlatformProfile {
    lib_dir: LibDirName::Fixed(""),
    include_subdirs: &[],
    defines: &[],
    system_libraries: &[],
    frameworks: &[],
    directx_arch: None,
    secondary_lib_dirs: &[],
    config_dir_rule: ConfigDirRule::Standard,
    sound_frame_in_editor: false,
};

const WINDOWS_SYSTEM_LIBRARIES: &[SystemLibrary] = &[
    SystemLibrary::File("dsound.lib"),
    SystemLibrary::File("dxguid.lib"),
    SystemLibrary::File("Msacm32.lib"),
    SystemLibrary::File("XInput.lib"),
];

const WIN32: PlatformProfile = PlatformProfile {
    lib_dir: LibDirName::Toolchain {
        prefix: "Win32_",
        family: ToolchainFamily::Windows,
    },
    include_subdirs: &["Win32"],
    system_libraries: WINDOWS_SYSTEM_LIBRARIES,
    directx_arch: Some("x86"),
    sound_frame_in_editor: true,
    ..BASE
};

const WIN64: PlatformProfile = PlatformProfile {
    lib_dir: LibDirName::Toolchain {
        prefix: "x64_",
        family: ToolchainFamily::Windows,
    },
    directx_arch: Some("x64"),
    ..WIN32
};

const XBOX_ONE: PlatformProfile = PlatformProfile {
    lib_dir: LibDirName::Toolchain {
        prefix: "XboxOne_",
        family: ToolchainFamily::XboxOne,
    },
    include_subdirs: &["Win32"],
    defines: &["_XBOX_ONE"],
    system_libraries: &[SystemLibrary::File("AcpHal.lib"), SystemLibrary::File("MMDevApi.lib")],
    ..BASE
};

const LINUX: PlatformProfile = PlatformProfile {
    lib_dir: LibDirName::Fixed("Linux_x64"),
    include_subdirs: &["POSIX", "Common"],
    config_dir_rule: ConfigDirRule::ForceRelease,
    ..BASE
};

const MAC: PlatformProfile = PlatformProfile {
    lib_dir: LibDirName::Fixed("Mac"),
    include_subdirs: &["POSIX"],
    frameworks: &["AudioUnit", "AudioToolbox", "CoreAudio"],
    ..BASE
};

const IOS: PlatformProfile = PlatformProfile {
    lib_dir: LibDirName::Fixed("iOS"),
    include_subdirs: &["POSIX"],
    frameworks: &["AudioToolbox", "CoreAudio"],
    config_dir_rule: ConfigDirRule::Suffix("-iphoneos"),
    ..BASE
};

const PS4: PlatformProfile = PlatformProfile {
    lib_dir: LibDirName::Fixed("PS4"),
    include_subdirs: &["PS4"],
    defines: &["__ORBIS__"],
    system_libraries: &[
        SystemLibrary::Bare("SceAjm_stub_weak"),
        SystemLibrary::Bare("SceAudio3d_stub_weak"),
    ],
    ..BASE
};

const ANDROID: PlatformProfile = PlatformProfile {
    lib_dir: LibDirName::Fixed("android-9_armeabi-v7a"),
    include_subdirs: &["Android", "POSIX"],
    defines: &["__ANDROID__"],
    // The toolchain filters per architecture.
    secondary_lib_dirs: &["android-9_x86"],
    ..BASE
};

const SWITCH: PlatformProfile = PlatformProfile {
    lib_dir: LibDirName::Fixed("NX64"),
    include_subdirs: &["NX"],
    defines: &["NN_NINTENDO_SDK"],
    ..BASE
};

/// The profile for `platform`, or `None` if the SDK does not support it.
pub fn profile_for(platform: Platform) -> Option<&'static PlatformProfile> {
    match platform {
        Platform::Win32 => Some(&WIN32),
        Platform::Win64 => Some(&WIN64),
        Platform::XboxOne => Some(&XBOX_ONE),
        Platform::Linux => Some(&LINUX),
        Platform::Mac => Some(&MAC),
        Platform::IOS => Some(&IOS),
        Platform::PS4 => Some(&PS4),
        Platform::Android => Some(&ANDROID),
        Platform::Switch => Some(&SWITCH),
        Platform::Html5 | Platform::TvOS | Platform::Lumin => None,
    }
}
