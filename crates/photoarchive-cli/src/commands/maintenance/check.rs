use photoarchive_core::storage::IntegrityReport;
use photoarchive_core::{PhotoStore, StorageEngine};

use crate::app::AppContext;
use crate::errors::CliError;
use crate::ui::{badge, header, hint, kv, print, Badge, OutputMode, UiContext};

pub fn handle_check(ctx: &AppContext) -> anyhow::Result<()> {
    let storage = ctx.storage()?;
    let ui_ctx = ctx.ui_context(false, None);

    if !storage.location().exists() {
        return Err(CliError::not_found(
            format!("No archive found at {}", storage.location().display()),
            "Hint: Add a photo with `photoarchive add` or pass --archive <PATH>.",
        )
        .into());
    }

    let report = storage.check_integrity()?;
    let location = storage.location().display().to_string();

    if report.is_clean() {
        if !ctx.quiet() {
            match ui_ctx.mode {
                OutputMode::Pretty => {
                    print(&ui_ctx, &header(&ui_ctx, "check", Some(&location)));
                    print_counts(&ui_ctx, &report);
                    print(&ui_ctx, &badge(&ui_ctx, Badge::Ok, "Every line loads"));
                }
                OutputMode::Plain | OutputMode::Json => {
                    print_counts(&ui_ctx, &report);
                    println!("status=ok");
                }
            }
        }
        return Ok(());
    }

    match ui_ctx.mode {
        OutputMode::Pretty => {
            print(&ui_ctx, &header(&ui_ctx, "check", Some(&location)));
            print_counts(&ui_ctx, &report);
            if let Some(line) = report.stopped_at_line {
                let message = format!("Loading stops at line {}", line);
                print(&ui_ctx, &badge(&ui_ctx, Badge::Warn, &message));
            }
            if report.hit_capacity {
                let message = format!(
                    "Lines beyond the first {} records are ignored",
                    PhotoStore::CAPACITY
                );
                print(&ui_ctx, &badge(&ui_ctx, Badge::Warn, &message));
            }
            print(
                &ui_ctx,
                &hint(
                    &ui_ctx,
                    "Fix or remove the reported line; the next save drops everything after it.",
                ),
            );
        }
        OutputMode::Plain | OutputMode::Json => {
            print_counts(&ui_ctx, &report);
            if let Some(line) = report.stopped_at_line {
                println!("stopped_at_line={}", line);
            }
            if report.hit_capacity {
                println!("capacity_reached=true");
            }
            println!("status=truncated");
        }
    }
    Err(anyhow::anyhow!(
        "Integrity check failed: {} of {} lines load",
        report.records_loaded,
        report.data_lines
    ))
}

fn print_counts(ui_ctx: &UiContext, report: &IntegrityReport) {
    println!(
        "{}",
        kv(ui_ctx, "Records loaded", &report.records_loaded.to_string())
    );
    println!("{}", kv(ui_ctx, "Data lines", &report.data_lines.to_string()));
}
