//! Result types for loading and inspecting an archive.

use crate::photo::Photo;
use crate::store::PhotoStore;

/// What was found when loading an archive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    /// No archive existed; the store starts empty
    NotFound,
    /// The archive existed but held no loadable records
    Empty,
    /// The given number of records were loaded
    Loaded(usize),
}

/// A loaded store and how it was obtained.
#[derive(Debug, Clone)]
pub struct LoadOutcome {
    pub store: PhotoStore,
    pub status: LoadStatus,
}

impl LoadOutcome {
    pub fn not_found() -> Self {
        Self {
            store: PhotoStore::new(),
            status: LoadStatus::NotFound,
        }
    }

    pub fn from_photos(photos: Vec<Photo>) -> Self {
        let store = PhotoStore::from_photos(photos);
        let status = if store.is_empty() {
            LoadStatus::Empty
        } else {
            LoadStatus::Loaded(store.len())
        };
        Self { store, status }
    }
}

/// Records decoded from archive text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Decoded {
    /// Records in file order, at most `PhotoStore::CAPACITY`
    pub photos: Vec<Photo>,

    /// 1-based line number of the first line that could not be decoded
    pub stopped_at_line: Option<usize>,

    /// Whether decoding stopped because the capacity was reached
    pub hit_capacity: bool,
}

/// Summary of how much of an archive file is loadable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntegrityReport {
    /// Records that a load would produce
    pub records_loaded: usize,

    /// Non-blank lines in the file
    pub data_lines: usize,

    /// First line that stopped decoding, if any
    pub stopped_at_line: Option<usize>,

    /// Whether records beyond the capacity were ignored
    pub hit_capacity: bool,
}

impl IntegrityReport {
    /// True when every non-blank line is loaded.
    pub fn is_clean(&self) -> bool {
        !self.hit_capacity && self.records_loaded == self.data_lines
    }
}
