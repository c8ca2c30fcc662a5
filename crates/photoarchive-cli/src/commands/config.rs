use crate::app::{resolve_config_path, AppContext};
use crate::cli::ConfigInitArgs;
use crate::config::{write_config, ArchiveConfig};
use crate::errors::CliError;
use crate::ui::{badge, hint, kv, print, Badge};

pub fn handle_config_init(ctx: &AppContext, args: &ConfigInitArgs) -> anyhow::Result<()> {
    let ui = ctx.ui_context(false, None);
    let path = resolve_config_path()?;

    if path.exists() && !args.force {
        return Err(CliError::invalid_input(format!(
            "Config already exists at {}\nHint: Pass --force to overwrite it.",
            path.display()
        ))
        .into());
    }

    let archive_path = ctx
        .cli()
        .archive
        .as_deref()
        .map(std::path::absolute)
        .transpose()?;
    write_config(&path, &ArchiveConfig::new(archive_path))?;
    tracing::info!(path = %path.display(), "wrote config");

    if !ctx.quiet() {
        if ui.mode.is_pretty() {
            let message = format!("Wrote config to {}", path.display());
            print(&ui, &badge(&ui, Badge::Ok, &message));
            print(&ui, &hint(&ui, "Set archive.path to use the same archive everywhere."));
        } else {
            print(&ui, &kv(&ui, "config", &path.display().to_string()));
        }
    }
    Ok(())
}

pub fn handle_config_path(ctx: &AppContext) -> anyhow::Result<()> {
    let ui = ctx.ui_context(false, None);
    let config_path = resolve_config_path()?;
    let archive_path = ctx.archive_path()?;

    print(&ui, &kv(&ui, "config", &config_path.display().to_string()));
    print(&ui, &kv(&ui, "archive", &archive_path.display().to_string()));
    Ok(())
}
