//! Platform probe port for operating system detection.
//!
//! This port abstracts OS detection from the core domain. The default
//! implementation lives in `pyselect-runtime`.

use crate::domain::OsFamily;

/// Port for reporting the operating system family.
///
/// # Example
///
/// ```ignore
/// use pyselect_core::ports::PlatformProbe;
///
/// fn is_windows(probe: &dyn PlatformProbe) -> bool {
///     probe.os_family() == OsFamily::Windows
/// }
/// ```
#[cfg_attr(test, mockall::automock)]
pub trait PlatformProbe: Send + Sync {
    /// Family of the operating system this process runs on.
    fn os_family(&self) -> OsFamily;
}

/// A probe that always reports the same family.
#[derive(Debug, Clone, Copy)]
pub struct FixedPlatform(pub OsFamily);

impl PlatformProbe for FixedPlatform {
    fn os_family(&self) -> OsFamily {
        self.0
    }
}
