//! Constants used throughout the CLI.

/// Exit codes for the CLI.
///
/// These follow common Unix conventions:
/// - 0: Success
/// - 1: General error (storage failures and anything unclassified)
/// - 2: Misuse of shell command (reserved by shells, used by clap)
/// - 3+: Application-specific errors
pub mod exit_codes {
    /// Resource not found (record position, archive file, config).
    pub const NOT_FOUND: i32 = 3;

    /// Invalid user input or arguments.
    pub const INVALID_INPUT: i32 = 4;

    /// The archive already holds the maximum number of records.
    pub const CAPACITY_EXCEEDED: i32 = 5;
}

/// Archive file used when neither a flag nor the config names one.
pub const DEFAULT_ARCHIVE_FILE: &str = "photo_archive.txt";
