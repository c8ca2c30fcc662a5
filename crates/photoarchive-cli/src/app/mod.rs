//! Application-level utilities for the Photo Archive CLI.
//!
//! This module provides:
//! - The application context (CLI args plus lazily-loaded config)
//! - Path resolution for config and archive files

mod context;
mod resolver;

pub use context::AppContext;
pub use resolver::{resolve_archive_path, resolve_config_path};
