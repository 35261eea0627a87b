//! Data models
//!
//! Shared between the store client and the TUI front-end. Wire parsing is
//! deliberately lenient: the remote store is a spreadsheet and field types
//! drift (numbers as strings, booleans as "TRUE"). All fallback rules live
//! here, in one place.

pub mod order;

// Re-exports
pub use order::*;
