//! Location and combined date+tag search over a store.
//!
//! Both searches scan the store in its current order and return matches in
//! that order. Matching is case-sensitive substring containment.

use crate::error::{ArchiveError, Result};
use crate::photo::Photo;
use crate::store::PhotoStore;
use crate::validation::validate_date;

/// One matching record together with its 1-based position in the store.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchHit<'a> {
    pub position: usize,
    pub photo: &'a Photo,
}

/// Ordered matches of a search.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchResults<'a> {
    hits: Vec<SearchHit<'a>>,
}

impl<'a> SearchResults<'a> {
    pub fn count(&self) -> usize {
        self.hits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    pub fn hits(&self) -> &[SearchHit<'a>] {
        &self.hits
    }

    /// Matching records without their positions.
    pub fn photos(&self) -> impl Iterator<Item = &'a Photo> + '_ {
        self.hits.iter().map(|hit| hit.photo)
    }
}

fn collect_matches<'a>(
    store: &'a PhotoStore,
    predicate: impl Fn(&Photo) -> bool,
) -> SearchResults<'a> {
    let hits = store
        .iter()
        .enumerate()
        .filter(|(_, photo)| predicate(photo))
        .map(|(index, photo)| SearchHit {
            position: index + 1,
            photo,
        })
        .collect();
    SearchResults { hits }
}

/// Find records whose place contains `query`.
///
/// # Errors
///
/// - `ArchiveError::EmptyStore` if the store has no records
/// - `ArchiveError::EmptyQuery` if `query` is empty
pub fn search_by_location<'a>(store: &'a PhotoStore, query: &str) -> Result<SearchResults<'a>> {
    if store.is_empty() {
        return Err(ArchiveError::EmptyStore);
    }
    if query.is_empty() {
        return Err(ArchiveError::EmptyQuery);
    }

    let results = collect_matches(store, |photo| photo.place.contains(query));
    tracing::debug!(query, matches = results.count(), "searched by location");
    Ok(results)
}

/// Find records taken on exactly `date` whose tags contain `tag`.
///
/// An empty `tag` matches every record on that date.
///
/// # Errors
///
/// - `ArchiveError::EmptyStore` if the store has no records
/// - `ArchiveError::Validation` if `date` is not a valid `YYYY-MM-DD` date
pub fn search_by_date_and_tag<'a>(
    store: &'a PhotoStore,
    date: &str,
    tag: &str,
) -> Result<SearchResults<'a>> {
    if store.is_empty() {
        return Err(ArchiveError::EmptyStore);
    }
    validate_date(date)?;

    let results = collect_matches(store, |photo| photo.date == date && photo.tags.contains(tag));
    tracing::debug!(date, tag, matches = results.count(), "searched by date and tag");
    Ok(results)
}
