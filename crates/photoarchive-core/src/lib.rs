//! # Photo Archive Core
//!
//! Core library for Photo Archive - a small personal catalog of photo
//! metadata kept in a flat text file.
//!
//! This crate provides the record model, the bounded record store, the
//! flat-file codec, search and sort, independent of the CLI interface.
//!
//! ## Architecture
//!
//! - **photo**: The photo record and its field limits
//! - **validation**: Field checks and input parsing
//! - **store**: Bounded ordered record collection
//! - **storage**: Storage engine trait and the flat-file backend
//! - **query**: Location and date+tag search
//! - **sort**: Multi-level sort (date, category, resolution)

pub mod error;
pub mod fs;
pub mod photo;
pub mod query;
pub mod sort;
pub mod storage;
pub mod store;
pub mod validation;

pub use error::{ArchiveError, Result};
pub use photo::{Photo, TextField};
pub use query::{search_by_date_and_tag, search_by_location, SearchHit, SearchResults};
pub use sort::{compare_photos, sort_multi_level};
pub use storage::{FlatFileStorage, LoadOutcome, LoadStatus, StorageEngine};
pub use store::PhotoStore;

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
