//! Build target descriptors for the audio SDK plugin module rules.
//!
//! A build target is identified by:
//! - **Platform:** one of a closed set of engine platforms
//! - **Configuration:** Debug through Shipping
//! - **Toolchain:** an optional compiler token for Visual Studio platforms
//! - **Flags:** editor vs. game, debug CRT

pub mod configuration;
pub mod descriptor;
pub mod error;
pub mod parse;
pub mod platform;

pub use configuration::BuildConfiguration;
pub use descriptor::TargetDescriptor;
pub use error::{Result, TargetError};
pub use platform::Platform;
