//! Bounded, ordered in-memory collection of photo records.

use crate::error::{ArchiveError, Result};
use crate::photo::Photo;

/// Ordered collection of at most [`PhotoStore::CAPACITY`] photos.
///
/// Insertion order is preserved; the only reordering is a whole-collection
/// [`PhotoStore::reorder`]. Records are never removed or edited in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PhotoStore {
    photos: Vec<Photo>,
}

impl PhotoStore {
    /// Maximum number of records an archive may hold.
    pub const CAPACITY: usize = 100;

    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from loaded records, keeping at most `CAPACITY` of them.
    pub fn from_photos(photos: Vec<Photo>) -> Self {
        let mut store = Self::new();
        store.replace_all(photos);
        store
    }

    pub fn len(&self) -> usize {
        self.photos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.photos.len() >= Self::CAPACITY
    }

    /// Number of records that can still be appended.
    pub fn remaining(&self) -> usize {
        Self::CAPACITY.saturating_sub(self.photos.len())
    }

    /// Records in store order.
    pub fn photos(&self) -> &[Photo] {
        &self.photos
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Photo> {
        self.photos.iter()
    }

    /// Get a record by zero-based position.
    pub fn get(&self, index: usize) -> Option<&Photo> {
        self.photos.get(index)
    }

    /// Append a record at the end.
    ///
    /// # Errors
    ///
    /// Returns `ArchiveError::CapacityExceeded` when the store is full; the
    /// record is dropped and the store is unchanged.
    pub fn append(&mut self, photo: Photo) -> Result<()> {
        if self.is_full() {
            tracing::warn!(capacity = Self::CAPACITY, "append rejected, archive is full");
            return Err(ArchiveError::CapacityExceeded {
                capacity: Self::CAPACITY,
            });
        }
        self.photos.push(photo);
        tracing::debug!(len = self.photos.len(), "appended photo");
        Ok(())
    }

    /// Replace the whole collection, truncating to `CAPACITY`.
    pub fn replace_all(&mut self, mut photos: Vec<Photo>) {
        if photos.len() > Self::CAPACITY {
            tracing::warn!(
                given = photos.len(),
                kept = Self::CAPACITY,
                "truncating records to capacity"
            );
            photos.truncate(Self::CAPACITY);
        }
        self.photos = photos;
    }

    /// Install a reordering of the current records.
    ///
    /// # Errors
    ///
    /// Returns `ArchiveError::InvalidInput` if `photos` does not have the
    /// same length as the store; the store is left unchanged.
    pub fn reorder(&mut self, photos: Vec<Photo>) -> Result<()> {
        if photos.len() != self.photos.len() {
            return Err(ArchiveError::InvalidInput(format!(
                "Reorder must keep {} records, got {}",
                self.photos.len(),
                photos.len()
            )));
        }
        self.photos = photos;
        Ok(())
    }
}

impl<'a> IntoIterator for &'a PhotoStore {
    type Item = &'a Photo;
    type IntoIter = std::slice::Iter<'a, Photo>;

    fn into_iter(self) -> Self::IntoIter {
        self.photos.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn photo(name: &str) -> Photo {
        Photo::new(name, "2023-07-01", "Sochi", "landscape")
            .with_size_mb(1.0)
            .with_dimensions(10, 10)
            .with_format("JPG")
    }

    fn full_store() -> PhotoStore {
        let mut store = PhotoStore::new();
        for i in 0..PhotoStore::CAPACITY {
            store.append(photo(&format!("p{}", i))).unwrap();
        }
        store
    }

    #[test]
    fn test_append_preserves_order() {
        let mut store = PhotoStore::new();
        store.append(photo("a")).unwrap();
        store.append(photo("b")).unwrap();
        let names: Vec<&str> = store.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b"]);
        assert_eq!(store.remaining(), PhotoStore::CAPACITY - 2);
    }

    #[test]
    fn test_append_to_full_store_fails() {
        let mut store = full_store();
        assert!(store.is_full());

        let result = store.append(photo("overflow"));
        assert!(matches!(
            result,
            Err(ArchiveError::CapacityExceeded { capacity: 100 })
        ));
        assert_eq!(store.len(), 100);
        assert!(store.iter().all(|p| p.name != "overflow"));
    }

    #[test]
    fn test_replace_all_truncates() {
        let photos: Vec<Photo> = (0..150).map(|i| photo(&format!("p{}", i))).collect();
        let store = PhotoStore::from_photos(photos);
        assert_eq!(store.len(), PhotoStore::CAPACITY);
        assert_eq!(store.get(0).unwrap().name, "p0");
        assert_eq!(store.get(99).unwrap().name, "p99");
        assert_eq!(store.remaining(), 0);
    }

    #[test]
    fn test_reorder_requires_same_length() {
        let mut store = PhotoStore::new();
        store.append(photo("a")).unwrap();
        store.append(photo("b")).unwrap();

        assert!(store.reorder(vec![photo("b")]).is_err());
        assert_eq!(store.len(), 2);

        store.reorder(vec![photo("b"), photo("a")]).unwrap();
        assert_eq!(store.get(0).unwrap().name, "b");
    }

    #[test]
    fn test_empty_store() {
        let store = PhotoStore::new();
        assert!(store.is_empty());
        assert!(store.get(0).is_none());
        assert_eq!((&store).into_iter().count(), 0);
    }
}
