//! Remote store client for Bloom Board
//!
//! Wraps the single spreadsheet-backed HTTP endpoint. `list()` is the only
//! call whose result the UI depends on; `create`/`set_paid`/`delete` exist
//! to be dispatched fire-and-forget — they return a [`ClientResult`] the
//! caller is allowed to discard, and never retry or roll anything back.

pub mod client;
pub mod config;
pub mod error;

// Re-exports
pub use client::StoreClient;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
