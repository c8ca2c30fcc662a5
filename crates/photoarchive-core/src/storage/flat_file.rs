//! Pipe-delimited flat-file backend.
//!
//! Each record is one line of nine `|`-separated fields:
//!
//! ```text
//! name|date|place|category|tags|size|width|height|format
//! ```
//!
//! Size is written with two decimals. Fields are not escaped, so a field
//! containing `|` or a line break corrupts the file on the next load; the
//! validators reject such values before they reach the store.
//!
//! Loading stops at the first line that does not decode into a record and
//! keeps every record before it.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use super::traits::StorageEngine;
use super::types::{Decoded, IntegrityReport, LoadOutcome};
use crate::error::{ArchiveError, Result};
use crate::fs::write_replacing;
use crate::photo::Photo;
use crate::store::PhotoStore;
use crate::validation::FIELD_DELIMITER;

const FIELD_COUNT: usize = 9;

/// Encode one record as a line, without the trailing newline.
pub fn encode_photo(photo: &Photo) -> String {
    format!(
        "{}|{}|{}|{}|{}|{:.2}|{}|{}|{}",
        photo.name,
        photo.date,
        photo.place,
        photo.category,
        photo.tags,
        photo.size_mb,
        photo.width,
        photo.height,
        photo.format
    )
}

/// Encode records in order, one newline-terminated line each.
pub fn encode(photos: &[Photo]) -> String {
    let mut out = String::new();
    for photo in photos {
        out.push_str(&encode_photo(photo));
        out.push('\n');
    }
    out
}

/// Decode one line (without its line terminator) into a record.
///
/// Returns `None` unless the line has exactly nine fields and the numeric
/// fields parse.
pub fn decode_line(line: &str) -> Option<Photo> {
    let fields: Vec<&str> = line.split(FIELD_DELIMITER).collect();
    let [name, date, place, category, tags, size, width, height, format] =
        <[&str; FIELD_COUNT]>::try_from(fields).ok()?;

    let size_mb: f64 = size.trim().parse().ok().filter(|v: &f64| v.is_finite())?;
    let width: u32 = width.trim().parse().ok()?;
    let height: u32 = height.trim().parse().ok()?;

    Some(Photo {
        name: name.to_string(),
        date: date.to_string(),
        place: place.to_string(),
        category: category.to_string(),
        tags: tags.to_string(),
        size_mb,
        width,
        height,
        format: format.to_string(),
    })
}

/// Decode archive text from a reader.
///
/// Stops at the first undecodable line (including blank lines and lines
/// that are not UTF-8) or once `PhotoStore::CAPACITY` records are held.
///
/// # Errors
///
/// Returns `ArchiveError::Storage` if reading fails.
pub fn decode<R: BufRead>(mut reader: R) -> Result<Decoded> {
    let mut decoded = Decoded::default();
    let mut buf = Vec::new();
    let mut line_number = 0;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        line_number += 1;

        if decoded.photos.len() >= PhotoStore::CAPACITY {
            decoded.hit_capacity = !is_blank(&buf);
            break;
        }

        let photo = std::str::from_utf8(&buf)
            .ok()
            .map(trim_line_end)
            .and_then(decode_line);
        match photo {
            Some(photo) => decoded.photos.push(photo),
            None => {
                tracing::debug!(line = line_number, "stopped loading at malformed line");
                decoded.stopped_at_line = Some(line_number);
                break;
            }
        }
    }

    Ok(decoded)
}

fn is_blank(line: &[u8]) -> bool {
    line.iter().all(|b| b.is_ascii_whitespace())
}

fn trim_line_end(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

/// Archive stored as a single pipe-delimited text file.
#[derive(Debug, Clone)]
pub struct FlatFileStorage {
    path: PathBuf,
}

impl FlatFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn open(&self) -> Result<Option<BufReader<File>>> {
        match File::open(&self.path) {
            Ok(file) => Ok(Some(BufReader::new(file))),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(ArchiveError::Storage(format!(
                "Failed to open {}: {}",
                self.path.display(),
                err
            ))),
        }
    }
}

impl StorageEngine for FlatFileStorage {
    fn location(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<LoadOutcome> {
        let Some(reader) = self.open()? else {
            tracing::info!(path = %self.path.display(), "no archive file, starting empty");
            return Ok(LoadOutcome::not_found());
        };

        let decoded = decode(reader)?;
        tracing::info!(
            path = %self.path.display(),
            records = decoded.photos.len(),
            "loaded archive"
        );
        Ok(LoadOutcome::from_photos(decoded.photos))
    }

    fn save(&self, store: &PhotoStore) -> Result<()> {
        let contents = encode(store.photos());
        write_replacing(&self.path, contents.as_bytes()).map_err(|err| {
            ArchiveError::Storage(format!(
                "Failed to write {}: {}",
                self.path.display(),
                err
            ))
        })?;
        tracing::info!(path = %self.path.display(), records = store.len(), "saved archive");
        Ok(())
    }

    fn check_integrity(&self) -> Result<IntegrityReport> {
        let contents = std::fs::read(&self.path).map_err(|err| {
            if err.kind() == io::ErrorKind::NotFound {
                ArchiveError::InvalidInput(format!(
                    "Archive not found: {}",
                    self.path.display()
                ))
            } else {
                ArchiveError::Storage(format!(
                    "Failed to read {}: {}",
                    self.path.display(),
                    err
                ))
            }
        })?;

        let data_lines = contents
            .split(|b| *b == b'\n')
            .filter(|line| !is_blank(line))
            .count();
        let decoded = decode(contents.as_slice())?;
        let records_loaded = decoded.photos.len();

        // Trailing blank lines stop a load without dropping any record.
        Ok(IntegrityReport {
            records_loaded,
            data_lines,
            stopped_at_line: decoded
                .stopped_at_line
                .filter(|_| records_loaded < data_lines),
            hit_capacity: decoded.hit_capacity,
        })
    }
}
