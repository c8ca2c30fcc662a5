use photoarchive_core::{sort_multi_level, StorageEngine};

use crate::app::AppContext;
use crate::ui::{badge, print, Badge};

use super::load_store;

pub fn handle_sort(ctx: &AppContext) -> anyhow::Result<()> {
    let ui = ctx.ui_context(false, None);
    let (storage, mut store) = load_store(ctx)?;

    sort_multi_level(&mut store)?;
    storage.save(&store)?;

    if !ctx.quiet() {
        if ui.mode.is_pretty() {
            let message = format!(
                "Sorted {} photos by date, category, then resolution",
                store.len()
            );
            print(&ui, &badge(&ui, Badge::Ok, &message));
        } else {
            print(&ui, &format!("sorted records={}", store.len()));
        }
    }
    Ok(())
}
