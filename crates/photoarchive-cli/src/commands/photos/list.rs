use photoarchive_core::PhotoStore;

use crate::app::AppContext;
use crate::cli::ListArgs;
use crate::helpers::{parse_output_format, OutputFormat};
use crate::output::print_photo_list;
use crate::ui::{header, print};

use super::{load_store, numbered};

pub fn handle_list(ctx: &AppContext, args: &ListArgs) -> anyhow::Result<()> {
    let format = parse_output_format(args.format.as_deref(), args.json)?;
    let ui = ctx.ui_context(args.json, format.map(OutputFormat::as_str));
    let (_storage, store) = load_store(ctx)?;

    if ui.mode.is_pretty() && !ctx.quiet() {
        let count = format!("{} of {} photos", store.len(), PhotoStore::CAPACITY);
        print(&ui, &header(&ui, "list", Some(&count)));
    }

    print_photo_list(
        &ui,
        &numbered(&store),
        "Archive is empty. Add a photo with `photoarchive add`.",
        ctx.quiet(),
    )
}
