//! Environment locator port.
//!
//! A locator enumerates the interpreters visible to one discovery source
//! (the Windows registry, `PATH`, known install roots, ...). Scanning is the
//! adapter's business; the core only consumes the finished list.

use async_trait::async_trait;

use super::LocatorError;
use crate::domain::{Environment, ResourceScope};

/// Port for enumerating candidate environments from one discovery source.
#[async_trait]
pub trait EnvironmentLocator: Send + Sync {
    /// Discover the environments visible for `resource`.
    ///
    /// `None` asks for the global context. An empty list is a valid answer.
    /// Order carries no meaning.
    async fn discover(
        &self,
        resource: Option<&ResourceScope>,
    ) -> Result<Vec<Environment>, LocatorError>;
}

/// A locator with a fixed answer.
///
/// Useful for wiring a chain where a discovery source does not exist on the
/// current machine, and in tests.
#[derive(Debug, Clone, Default)]
pub struct StaticLocator {
    environments: Vec<Environment>,
}

impl StaticLocator {
    pub const fn new(environments: Vec<Environment>) -> Self {
        Self { environments }
    }

    pub const fn empty() -> Self {
        Self {
            environments: Vec::new(),
        }
    }
}

#[async_trait]
impl EnvironmentLocator for StaticLocator {
    async fn discover(
        &self,
        _resource: Option<&ResourceScope>,
    ) -> Result<Vec<Environment>, LocatorError> {
        Ok(self.environments.clone())
    }
}
