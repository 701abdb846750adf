//! Python environment and resource scope types.

use std::fmt;
use std::path::{Path, PathBuf};

use semver::Version;
use serde::{Deserialize, Serialize};

/// Discovery source an environment was reported by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnvironmentKind {
    /// Registered under the Windows registry `PythonCore` keys.
    WindowsRegistry,
    /// Found by walking the directories on `PATH`.
    CurrentPath,
    /// A global interpreter installed outside of any project.
    Global,
    /// A virtual environment (`venv`, `virtualenv`).
    Venv,
    /// A conda environment.
    Conda,
    #[default]
    Unknown,
}

/// An installed Python runtime.
///
/// Environments are produced by locators and never mutated afterwards.
/// The path identifies the install; two environments with the same path
/// are the same environment regardless of the other fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Environment {
    /// Path to the interpreter executable.
    pub path: PathBuf,
    /// Interpreter version, if the locator could determine it.
    pub version: Option<Version>,
    /// Discovery source.
    #[serde(default)]
    pub kind: EnvironmentKind,
}

impl Environment {
    /// Create an environment with a known version.
    pub fn new(path: impl Into<PathBuf>, version: Version) -> Self {
        Self {
            path: path.into(),
            version: Some(version),
            kind: EnvironmentKind::Unknown,
        }
    }

    /// Create an environment whose version is unknown.
    pub fn unversioned(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            version: None,
            kind: EnvironmentKind::Unknown,
        }
    }

    /// Set the discovery source.
    #[must_use]
    pub const fn with_kind(mut self, kind: EnvironmentKind) -> Self {
        self.kind = kind;
        self
    }

    /// Whether both values describe the same install.
    pub fn same_install(&self, other: &Self) -> bool {
        self.path == other.path
    }
}

impl PartialEq for Environment {
    fn eq(&self, other: &Self) -> bool {
        self.same_install(other) && self.version == other.version
    }
}

impl Eq for Environment {}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.version {
            Some(version) => write!(f, "Python {version} ({})", self.path.display()),
            None => write!(f, "Python ({})", self.path.display()),
        }
    }
}

/// Where a selection applies, typically a workspace folder or a file in it.
///
/// Only used to parameterise discovery; it owns no state.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceScope(PathBuf);

impl ResourceScope {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }
}

impl From<PathBuf> for ResourceScope {
    fn from(path: PathBuf) -> Self {
        Self(path)
    }
}

impl From<&Path> for ResourceScope {
    fn from(path: &Path) -> Self {
        Self(path.to_path_buf())
    }
}

impl fmt::Display for ResourceScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}
