//! Output formatting helpers for the CLI.
//!
//! This module provides formatting utilities for displaying photos
//! in various formats (JSON, table, plain text).

mod json;
mod text;

pub use json::{photo_json, photos_json};
pub use text::{print_photo_list, render_photo_detail, render_photo_list, NumberedPhoto};
