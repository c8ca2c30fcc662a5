//! Storage engine trait definition.

use std::path::Path;

use super::types::{IntegrityReport, LoadOutcome};
use crate::error::Result;
use crate::store::PhotoStore;

/// Storage backend for a photo archive.
///
/// Each call opens, fully reads or writes, and closes the underlying
/// resource; no handle is kept between calls.
pub trait StorageEngine {
    /// Location of the archive, for display.
    fn location(&self) -> &Path;

    /// Load the archive.
    ///
    /// A missing archive is not an error: it yields an empty store with
    /// `LoadStatus::NotFound`. Malformed content ends loading at the first
    /// bad record and keeps everything before it.
    ///
    /// # Errors
    ///
    /// Returns `ArchiveError::Storage` if the archive exists but cannot be read.
    fn load(&self) -> Result<LoadOutcome>;

    /// Write the whole store, replacing previous content.
    ///
    /// # Errors
    ///
    /// Returns `ArchiveError::Storage` if the archive cannot be written. The
    /// previous content is left intact in that case.
    fn save(&self, store: &PhotoStore) -> Result<()>;

    /// Report how much of the archive is loadable.
    ///
    /// # Errors
    ///
    /// Returns `ArchiveError::Storage` if the archive cannot be read, or
    /// `ArchiveError::InvalidInput` if it does not exist.
    fn check_integrity(&self) -> Result<IntegrityReport>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trait_is_object_safe() {
        fn _accepts_dyn(_engine: &dyn StorageEngine) {}
    }
}
