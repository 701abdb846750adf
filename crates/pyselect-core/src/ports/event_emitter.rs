//! Event emitter trait for selection events.
//!
//! Implementations handle transport details (channels, editor notifications,
//! log sinks, ...).

use crate::events::SelectionEvent;

/// Trait for emitting selection events.
///
/// # Implementations
///
/// - `NoopSelectionEmitter` - For tests and contexts that don't need events
/// - Adapter-specific implementations
pub trait SelectionEventEmitter: Send + Sync {
    /// Emit a selection event.
    ///
    /// This method should not block.
    fn emit(&self, event: SelectionEvent);
}

/// A no-op event emitter.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSelectionEmitter;

impl NoopSelectionEmitter {
    /// Create a new no-op emitter.
    pub const fn new() -> Self {
        Self
    }
}

impl SelectionEventEmitter for NoopSelectionEmitter {
    fn emit(&self, _event: SelectionEvent) {
        // Intentionally do nothing
    }
}
