//! UI primitives for the Photo Archive CLI.
//!
//! This module provides:
//! - **Context**: Display settings from flags, config and the terminal
//! - **Mode**: Output mode resolution (json, plain, pretty)
//! - **Theme**: Badge tokens and color palette
//! - **Render**: Tables, headers, hints, key-value lines
//! - **Format**: String utilities (truncate, sizes, dimensions)

mod context;
pub mod format;
mod mode;
pub mod render;
pub mod theme;

pub use context::{DisplayFlags, UiContext};
pub use mode::OutputMode;
pub use theme::Badge;

pub use render::{badge, header, hint, kv, print, print_error, table, Column};

pub use format::{format_dimensions, format_size_mb, or_dash, truncate};
