//! Bloom Board TUI
//!
//! Terminal order tracker for a flower shop. The order board is hydrated
//! once from the remote store at startup; add/toggle/delete mutate the
//! board optimistically and dispatch the matching store call
//! fire-and-forget. The store stays the durable source of truth.

pub mod app;
pub mod board;
pub mod config;
pub mod ui;

// Re-exports
pub use app::{App, AppEvent, Focus};
pub use board::OrderBoard;
pub use config::AppConfig;
