//! Field prompting and validation for photo creation.

use photoarchive_core::validation::{
    parse_dimension, parse_size, validate_date, validate_text_field,
};
use photoarchive_core::{Photo, TextField};

use super::prompt::Prompter;
use crate::errors::CliError;

/// Raw field values as given on the command line.
///
/// `None` means the field was not provided and may be prompted for.
#[derive(Debug, Default, Clone)]
pub struct PhotoInput {
    pub name: Option<String>,
    pub date: Option<String>,
    pub place: Option<String>,
    pub category: Option<String>,
    pub tags: Option<String>,
    pub size: Option<String>,
    pub width: Option<String>,
    pub height: Option<String>,
    pub format: Option<String>,
}

/// How a missing field is obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingField {
    /// Ask through the prompter.
    Prompt,
    /// Fail with `CliError::InvalidInput`.
    Reject,
}

/// Ask until `parse` accepts the answer, reporting each rejection.
///
/// Returns `None` if input ends first.
pub fn prompt_until<P, T>(
    prompter: &mut P,
    prompt: &str,
    parse: impl Fn(&str) -> photoarchive_core::Result<T>,
) -> anyhow::Result<Option<T>>
where
    P: Prompter + ?Sized,
{
    loop {
        let Some(answer) = prompter.input(prompt)? else {
            return Ok(None);
        };
        match parse(&answer) {
            Ok(value) => return Ok(Some(value)),
            Err(err) => prompter.say(&format!("{}. Try again.", err))?,
        }
    }
}

fn text(field: TextField) -> impl Fn(&str) -> photoarchive_core::Result<String> {
    move |value| validate_text_field(field, value).map(|_| value.to_string())
}

fn parse_date(value: &str) -> photoarchive_core::Result<String> {
    validate_date(value).map(|_| value.to_string())
}

struct Resolver<'p, P: ?Sized> {
    prompter: &'p mut P,
    missing: MissingField,
}

impl<P: Prompter + ?Sized> Resolver<'_, P> {
    fn field<T>(
        &mut self,
        provided: Option<&str>,
        flag: &str,
        prompt: &str,
        parse: impl Fn(&str) -> photoarchive_core::Result<T>,
    ) -> anyhow::Result<Option<T>> {
        if let Some(value) = provided {
            return parse(value)
                .map(Some)
                .map_err(|e| CliError::invalid_input(format!("--{}: {}", flag, e)).into());
        }
        match self.missing {
            MissingField::Prompt => prompt_until(&mut *self.prompter, prompt, parse),
            MissingField::Reject => Err(CliError::invalid_input(format!(
                "Missing --{} (required without a terminal)",
                flag
            ))
            .into()),
        }
    }
}

/// Build a validated photo from provided values, prompting for the rest.
///
/// Provided values that fail validation are errors; prompted values are
/// asked again until valid. Tags are optional and default to empty when
/// prompting is not allowed. Returns `None` if input ends mid-way.
pub fn resolve_photo<P>(
    input: &PhotoInput,
    prompter: &mut P,
    missing: MissingField,
) -> anyhow::Result<Option<Photo>>
where
    P: Prompter + ?Sized,
{
    let mut r = Resolver { prompter, missing };

    let Some(name) = r.field(
        input.name.as_deref(),
        "name",
        "Photo name (max 49 characters)",
        text(TextField::Name),
    )?
    else {
        return Ok(None);
    };
    let Some(date) = r.field(input.date.as_deref(), "date", "Date (YYYY-MM-DD)", parse_date)? else {
        return Ok(None);
    };
    let Some(place) = r.field(
        input.place.as_deref(),
        "place",
        "Place (max 49 characters)",
        text(TextField::Place),
    )?
    else {
        return Ok(None);
    };
    let Some(category) = r.field(
        input.category.as_deref(),
        "category",
        "Category (max 29 characters)",
        text(TextField::Category),
    )?
    else {
        return Ok(None);
    };
    let tags_input = match (input.tags.as_deref(), missing) {
        (None, MissingField::Reject) => Some(""),
        (tags, _) => tags,
    };
    let Some(tags) = r.field(
        tags_input,
        "tags",
        "Tags, comma-separated (max 99 characters)",
        text(TextField::Tags),
    )?
    else {
        return Ok(None);
    };
    let Some(size_mb) = r.field(input.size.as_deref(), "size", "File size in MB", parse_size)?
    else {
        return Ok(None);
    };
    let Some(width) = r.field(input.width.as_deref(), "width", "Width in pixels", parse_dimension)?
    else {
        return Ok(None);
    };
    let Some(height) = r.field(
        input.height.as_deref(),
        "height",
        "Height in pixels",
        parse_dimension,
    )?
    else {
        return Ok(None);
    };
    let Some(format) = r.field(
        input.format.as_deref(),
        "format",
        "Format, e.g. JPG (max 9 characters)",
        text(TextField::Format),
    )?
    else {
        return Ok(None);
    };

    let photo = Photo::new(name, date, place, category)
        .with_tags(tags)
        .with_size_mb(size_mb)
        .with_dimensions(width, height)
        .with_format(format);
    photo.validate()?;
    Ok(Some(photo))
}
