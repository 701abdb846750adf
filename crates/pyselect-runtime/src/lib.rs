//! # pyselect-runtime
//!
//! OS-level adapters for the ports defined in `pyselect-core`.

pub mod system;

pub use system::DefaultPlatformProbe;
