use photoarchive_core::{search_by_date_and_tag, search_by_location, SearchResults};

use crate::app::AppContext;
use crate::cli::{DateTagSearchArgs, PlaceSearchArgs};
use crate::helpers::{parse_output_format, OutputFormat};
use crate::output::{print_photo_list, NumberedPhoto};
use crate::ui::{header, print, UiContext};

use super::load_store;

pub fn handle_search_place(ctx: &AppContext, args: &PlaceSearchArgs) -> anyhow::Result<()> {
    let format = parse_output_format(args.format.as_deref(), args.json)?;
    let ui = ctx.ui_context(args.json, format.map(OutputFormat::as_str));
    let (_storage, store) = load_store(ctx)?;

    let results = search_by_location(&store, &args.query)?;
    let context = format!("place contains \"{}\"", args.query);
    print_results(ctx, &ui, &context, &results)
}

pub fn handle_search_date_tag(ctx: &AppContext, args: &DateTagSearchArgs) -> anyhow::Result<()> {
    let format = parse_output_format(args.format.as_deref(), args.json)?;
    let ui = ctx.ui_context(args.json, format.map(OutputFormat::as_str));
    let (_storage, store) = load_store(ctx)?;

    let results = search_by_date_and_tag(&store, &args.date, &args.tag)?;
    let context = format!("{} tagged \"{}\"", args.date, args.tag);
    print_results(ctx, &ui, &context, &results)
}

fn print_results(
    ctx: &AppContext,
    ui: &UiContext,
    context: &str,
    results: &SearchResults<'_>,
) -> anyhow::Result<()> {
    if ui.mode.is_pretty() && !ctx.quiet() {
        let summary = format!("{}, {} found", context, results.count());
        print(ui, &header(ui, "search", Some(&summary)));
    }

    let hits: Vec<NumberedPhoto<'_>> = results
        .hits()
        .iter()
        .map(|hit| (hit.position, hit.photo))
        .collect();
    print_photo_list(ui, &hits, "No photos found.", ctx.quiet())
}
