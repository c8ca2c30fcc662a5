//! Text and table output formatting for photos.

use photoarchive_core::storage::encode_photo;
use photoarchive_core::Photo;

use crate::ui::{
    format_dimensions, format_size_mb, kv, or_dash, table, truncate, Badge, Column, UiContext,
};

use super::json::photos_json;

/// A photo with its 1-based position in the archive.
pub type NumberedPhoto<'a> = (usize, &'a Photo);

const TABLE_TEXT_MAX: usize = 24;

/// Render a list of photos for display.
///
/// Pretty mode renders a table; plain mode prints one line per photo as the
/// position followed by the archive line, all `|`-separated.
pub fn render_photo_list(ctx: &UiContext, photos: &[NumberedPhoto<'_>]) -> String {
    if !ctx.mode.is_pretty() {
        return photos
            .iter()
            .map(|(position, photo)| format!("{}|{}", position, encode_photo(photo)))
            .collect::<Vec<_>>()
            .join("\n");
    }

    let columns = [
        Column::numeric("#"),
        Column::new("Name"),
        Column::new("Date"),
        Column::new("Place"),
        Column::new("Category"),
        Column::new("Tags"),
        Column::numeric("Size"),
        Column::numeric("Resolution"),
        Column::new("Format"),
    ];
    let rows: Vec<Vec<String>> = photos
        .iter()
        .map(|(position, photo)| {
            vec![
                position.to_string(),
                truncate(or_dash(&photo.name), TABLE_TEXT_MAX),
                photo.date.clone(),
                truncate(or_dash(&photo.place), TABLE_TEXT_MAX),
                truncate(or_dash(&photo.category), TABLE_TEXT_MAX),
                truncate(or_dash(&photo.tags), TABLE_TEXT_MAX),
                format_size_mb(photo.size_mb, true),
                format_dimensions(photo),
                or_dash(&photo.format).to_string(),
            ]
        })
        .collect();
    table(ctx, &columns, &rows)
}

/// Print a photo list in the resolved output mode.
///
/// `empty_message` is shown in pretty mode when there is nothing to list.
pub fn print_photo_list(
    ctx: &UiContext,
    photos: &[NumberedPhoto<'_>],
    empty_message: &str,
    quiet: bool,
) -> anyhow::Result<()> {
    if ctx.mode.is_json() {
        println!("{}", serde_json::to_string_pretty(&photos_json(photos))?);
        return Ok(());
    }

    if photos.is_empty() {
        if ctx.mode.is_pretty() && !quiet {
            println!("{}", crate::ui::badge(ctx, Badge::Info, empty_message));
        }
        return Ok(());
    }

    println!("{}", render_photo_list(ctx, photos));
    Ok(())
}

/// Render the detailed view of one photo.
pub fn render_photo_detail(ctx: &UiContext, position: usize, photo: &Photo) -> String {
    [
        kv(ctx, "Position", &position.to_string()),
        kv(ctx, "Name", &photo.name),
        kv(ctx, "Date", &photo.date),
        kv(ctx, "Place", &photo.place),
        kv(ctx, "Category", &photo.category),
        kv(ctx, "Tags", &photo.tags),
        kv(ctx, "Size", &format_size_mb(photo.size_mb, ctx.mode.is_pretty())),
        kv(ctx, "Resolution", &format_dimensions(photo)),
        kv(ctx, "Format", &photo.format),
    ]
    .join("\n")
}
