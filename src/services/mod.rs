//! Service layer for business logic.
//!
//! This module contains the queries and conversions that operate on the
//! application list, plus file I/O for the store.

pub mod key_index;
pub mod snapshot;
pub mod store_file;

// Re-export commonly used types and functions
pub use key_index::{find_bindings_for_key, KeyBinding, KeyIndex};
pub use snapshot::{export_snapshot, import_snapshot, ExportOptions, SnapshotError};
pub use store_file::StoreFileService;
