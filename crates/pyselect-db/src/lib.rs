//! # pyselect-db
//!
//! `SQLite` persistence for auto-selected environments.
//!
//! Entry points call [`setup_database`] with the path from
//! `pyselect_core::database_path()` and wrap the pool in a
//! [`SqliteSelectionStore`].

#![deny(unsafe_code)]

pub mod repositories;
pub mod setup;

pub use repositories::SqliteSelectionStore;

pub use setup::setup_database;
#[cfg(any(test, feature = "test-utils"))]
pub use setup::setup_test_database;

// Linked for the bundled SQLite build only
use libsqlite3_sys as _;
