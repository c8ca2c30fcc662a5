//! Photo commands: add, list, show, search, sort.

mod add;
mod list;
mod search;
mod show;
mod sort;

pub use add::handle_add;
pub use list::handle_list;
pub use search::{handle_search_date_tag, handle_search_place};
pub use show::handle_show;
pub use sort::handle_sort;

use photoarchive_core::{FlatFileStorage, PhotoStore, StorageEngine};

use crate::app::AppContext;
use crate::output::NumberedPhoto;

/// Open the resolved archive and load it. A missing file loads as empty.
fn load_store(ctx: &AppContext) -> anyhow::Result<(FlatFileStorage, PhotoStore)> {
    let storage = ctx.storage()?;
    let outcome = storage.load()?;
    tracing::debug!(status = ?outcome.status, "archive loaded for command");
    Ok((storage, outcome.store))
}

fn numbered(store: &PhotoStore) -> Vec<NumberedPhoto<'_>> {
    store
        .iter()
        .enumerate()
        .map(|(index, photo)| (index + 1, photo))
        .collect()
}
