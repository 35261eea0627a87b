//! Shared types for Bloom Board
//!
//! Domain types used by both the store client and the TUI front-end:
//! the order model with its lenient wire parsing, and the color codec
//! used for flower/bouquet color strings.

pub mod color;
pub mod models;

// Re-exports
pub use color::{PALETTE, PLACEHOLDER_HEX, PaletteColor, decode_names, encode_selection};
pub use models::{Order, PaidUpdate};
pub use serde::{Deserialize, Serialize};
