//! Photo Archive CLI - a small catalog of photo metadata kept in a flat file
//!
//! This is the command-line interface for Photo Archive. It provides the
//! interactive menu and scriptable commands over the core library.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod helpers;
mod logging;
mod output;
mod ui;

use clap::Parser;

use crate::app::AppContext;
use crate::cli::{Cli, Commands, ConfigSubcommand, SearchSubcommand};
use crate::commands::{config as config_cmd, maintenance, menu, misc, photos};
use crate::errors::exit_code_for;
use crate::ui::print_error;

fn main() {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose);
    let ctx = AppContext::new(&cli);

    if let Err(e) = run(&ctx, &cli) {
        let ui_ctx = ctx.ui_context(false, None);
        let (message, hint) = split_error_hint(&format!("{:#}", e));
        print_error(&ui_ctx, &message, hint.as_deref());
        std::process::exit(exit_code_for(&e));
    }
}

/// Split a trailing "Hint: ..." line off an error message, or provide a
/// contextual hint for common errors.
fn split_error_hint(error: &str) -> (String, Option<String>) {
    if let Some(idx) = error.find("\nHint:") {
        let hint = error[idx + "\nHint:".len()..].trim();
        return (error[..idx].to_string(), Some(hint.to_string()));
    }

    let error_lower = error.to_lowercase();

    let hint = if error_lower.contains("archive is full") {
        Some("The archive holds at most 100 photos. Use another --archive file.")
    } else if error_lower.contains("archive is empty") {
        Some("Add a photo with `photoarchive add`.")
    } else if error_lower.contains("failed to parse config") {
        Some("Fix the file or recreate it with `photoarchive config init --force`.")
    } else if error_lower.contains("storage error") {
        Some("Check that the archive path is writable and its directory exists.")
    } else {
        None
    };

    (error.to_string(), hint.map(String::from))
}

fn run(ctx: &AppContext, cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        None | Some(Commands::Menu) => {
            menu::handle_menu(ctx)?;
        }
        Some(Commands::List(args)) => {
            photos::handle_list(ctx, args)?;
        }
        Some(Commands::Show(args)) => {
            photos::handle_show(ctx, args)?;
        }
        Some(Commands::Add(args)) => {
            photos::handle_add(ctx, args)?;
        }
        Some(Commands::Search(args)) => match &args.command {
            SearchSubcommand::Place(place_args) => {
                photos::handle_search_place(ctx, place_args)?;
            }
            SearchSubcommand::DateTag(date_tag_args) => {
                photos::handle_search_date_tag(ctx, date_tag_args)?;
            }
        },
        Some(Commands::Sort) => {
            photos::handle_sort(ctx)?;
        }
        Some(Commands::Check) => {
            maintenance::handle_check(ctx)?;
        }
        Some(Commands::Config(args)) => match &args.command {
            ConfigSubcommand::Init(init_args) => {
                config_cmd::handle_config_init(ctx, init_args)?;
            }
            ConfigSubcommand::Path => {
                config_cmd::handle_config_path(ctx)?;
            }
        },
        Some(Commands::Completions(args)) => {
            misc::handle_completions(args)?;
        }
    }

    Ok(())
}
