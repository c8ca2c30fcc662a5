//! Parsing helpers for output format and record positions.

use crate::errors::CliError;

/// Output format selectable with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Plain,
}

impl OutputFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Table => "table",
            Self::Plain => "plain",
        }
    }
}

/// Parse the `--format` flag, rejecting it together with `--json`.
pub fn parse_output_format(
    value: Option<&str>,
    json: bool,
) -> anyhow::Result<Option<OutputFormat>> {
    let format = match value {
        None => None,
        Some("table") => Some(OutputFormat::Table),
        Some("plain") => Some(OutputFormat::Plain),
        Some(other) => {
            return Err(CliError::invalid_input(format!(
                "Unsupported format: {} (use table or plain)",
                other
            ))
            .into())
        }
    };
    if json && format.is_some() {
        return Err(CliError::invalid_input("--format cannot be used with --json").into());
    }
    Ok(format)
}

/// Parse a 1-based record position.
pub fn parse_position(value: &str) -> anyhow::Result<usize> {
    match value.trim().parse::<usize>() {
        Ok(position) if position > 0 => Ok(position),
        _ => Err(CliError::invalid_input(format!(
            "Invalid position: {} (expected a number starting at 1)",
            value
        ))
        .into()),
    }
}
