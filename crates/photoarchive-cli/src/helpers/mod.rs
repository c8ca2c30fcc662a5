//! Helper functions for the Photo Archive CLI.
//!
//! This module contains utilities for:
//! - Prompting (terminal and line-oriented)
//! - Field prompting and validation for new photos
//! - Output format and position parsing

mod fields;
mod parsing;
mod prompt;

pub use fields::{resolve_photo, MissingField, PhotoInput};
pub use parsing::{parse_output_format, parse_position, OutputFormat};
pub use prompt::{stdin_is_terminal, LinePrompter, Prompter, TerminalPrompter};
