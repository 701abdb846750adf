//! Store implementations.

mod sqlite_selection_store;

pub use sqlite_selection_store::SqliteSelectionStore;
