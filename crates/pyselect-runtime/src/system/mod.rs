//! Platform probe implementation for pyselect-runtime.
//!
//! This module provides the `DefaultPlatformProbe` which implements
//! `PlatformProbe` from pyselect-core by reading the target the process
//! was built for.

use pyselect_core::{OsFamily, PlatformProbe};
use tracing::debug;

/// Default implementation of `PlatformProbe`.
///
/// Construct it once at startup and hand it to the rules that need it.
///
/// # Example
///
/// ```ignore
/// use pyselect_runtime::system::DefaultPlatformProbe;
/// use pyselect_core::PlatformProbe;
///
/// let probe = DefaultPlatformProbe::new();
/// let on_windows = probe.os_family() == OsFamily::Windows;
/// ```
#[derive(Debug, Clone, Copy)]
pub struct DefaultPlatformProbe {
    family: OsFamily,
}

impl DefaultPlatformProbe {
    /// Create a probe for the running platform.
    pub fn new() -> Self {
        Self::for_os_name(std::env::consts::OS)
    }

    /// Create a probe reporting the family of an OS name such as `"windows"`.
    pub fn for_os_name(name: &str) -> Self {
        let family = OsFamily::from_os_name(name);
        debug!(os = name, family = %family, "Platform detected");
        Self { family }
    }
}

impl Default for DefaultPlatformProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl PlatformProbe for DefaultPlatformProbe {
    fn os_family(&self) -> OsFamily {
        self.family
    }
}
