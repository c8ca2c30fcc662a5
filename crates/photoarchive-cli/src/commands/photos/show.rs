use photoarchive_core::Photo;

use crate::app::AppContext;
use crate::cli::ShowArgs;
use crate::errors::CliError;
use crate::helpers::parse_position;
use crate::output::{photo_json, render_photo_detail};
use crate::ui::print;

use super::load_store;

pub fn handle_show(ctx: &AppContext, args: &ShowArgs) -> anyhow::Result<()> {
    let position = parse_position(&args.position)?;
    let ui = ctx.ui_context(args.json, None);
    let (_storage, store) = load_store(ctx)?;

    let photo: &Photo = store.get(position - 1).ok_or_else(|| {
        CliError::not_found(
            format!("No photo at position {}", position),
            format!(
                "Hint: The archive holds {} photo(s). Run `photoarchive list` to see positions.",
                store.len()
            ),
        )
    })?;

    if ui.mode.is_json() {
        println!(
            "{}",
            serde_json::to_string_pretty(&photo_json(position, photo))?
        );
    } else {
        print(&ui, &render_photo_detail(&ui, position, photo));
    }
    Ok(())
}
