//! Persistence for the photo archive.
//!
//! `StorageEngine` is the backend interface; `FlatFileStorage` is the
//! pipe-delimited text file backend.

pub mod flat_file;
pub mod traits;
pub mod types;

pub use flat_file::{decode, decode_line, encode, encode_photo, FlatFileStorage};
pub use traits::StorageEngine;
pub use types::{Decoded, IntegrityReport, LoadOutcome, LoadStatus};
