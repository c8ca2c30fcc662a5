//! Multi-level sort: date, then category, then resolution.

use std::cmp::Ordering;

use crate::error::{ArchiveError, Result};
use crate::photo::Photo;
use crate::store::PhotoStore;

/// Compare two photos by date, category, then resolution (all ascending).
///
/// Dates compare as strings; `YYYY-MM-DD` is zero-padded so this matches
/// chronological order.
pub fn compare_photos(a: &Photo, b: &Photo) -> Ordering {
    a.date
        .cmp(&b.date)
        .then_with(|| a.category.cmp(&b.category))
        .then_with(|| a.resolution().cmp(&b.resolution()))
}

/// Sort the store in place.
///
/// Records equal on all three keys keep no guaranteed relative order.
///
/// # Errors
///
/// Returns `ArchiveError::NothingToSort` when the store holds fewer than two
/// records; the store is unchanged.
pub fn sort_multi_level(store: &mut PhotoStore) -> Result<()> {
    if store.len() <= 1 {
        return Err(ArchiveError::NothingToSort { len: store.len() });
    }

    let mut photos = store.photos().to_vec();
    photos.sort_by(compare_photos);
    store.reorder(photos)?;
    tracing::debug!(len = store.len(), "sorted archive");
    Ok(())
}
