use photoarchive_core::{ArchiveError, PhotoStore, StorageEngine};

use crate::app::AppContext;
use crate::cli::AddArgs;
use crate::errors::CliError;
use crate::helpers::{
    resolve_photo, stdin_is_terminal, MissingField, PhotoInput, TerminalPrompter,
};
use crate::ui::{badge, print, Badge};

use super::load_store;

impl From<&AddArgs> for PhotoInput {
    fn from(args: &AddArgs) -> Self {
        Self {
            name: args.name.clone(),
            date: args.date.clone(),
            place: args.place.clone(),
            category: args.category.clone(),
            tags: args.tags.clone(),
            size: args.size.clone(),
            width: args.width.clone(),
            height: args.height.clone(),
            format: args.format.clone(),
        }
    }
}

pub fn handle_add(ctx: &AppContext, args: &AddArgs) -> anyhow::Result<()> {
    let ui = ctx.ui_context(false, None);
    let (storage, mut store) = load_store(ctx)?;

    // Refuse before asking for any field.
    if store.is_full() {
        return Err(ArchiveError::CapacityExceeded {
            capacity: PhotoStore::CAPACITY,
        }
        .into());
    }

    let missing = if args.no_input || !ui.is_tty || !stdin_is_terminal() {
        MissingField::Reject
    } else {
        MissingField::Prompt
    };
    let photo = resolve_photo(&PhotoInput::from(args), &mut TerminalPrompter, missing)?
        .ok_or_else(|| CliError::invalid_input("Input ended before all fields were entered"))?;

    let name = photo.name.clone();
    store.append(photo)?;
    storage.save(&store)?;

    if !ctx.quiet() {
        if ui.mode.is_pretty() {
            let message = format!("Added \"{}\" as #{}", name, store.len());
            print(&ui, &badge(&ui, Badge::Ok, &message));
        } else {
            print(&ui, &format!("added position={}", store.len()));
        }
    }
    Ok(())
}
