//! The photo record and its field limits.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::validation::{
    validate_date, validate_positive_integer, validate_positive_number, validate_text_field,
};

/// Free-text fields of a [`Photo`], each with a fixed character limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    Name,
    Place,
    Category,
    Tags,
    Format,
}

impl TextField {
    /// Maximum number of characters the field may hold.
    pub const fn max_chars(self) -> usize {
        match self {
            Self::Name => 49,
            Self::Place => 49,
            Self::Category => 29,
            Self::Tags => 99,
            Self::Format => 9,
        }
    }

    /// Human-readable field label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Place => "place",
            Self::Category => "category",
            Self::Tags => "tags",
            Self::Format => "format",
        }
    }
}

/// A single catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Photo {
    /// Photo title
    pub name: String,

    /// Capture date, `YYYY-MM-DD`
    pub date: String,

    /// Where the photo was taken
    pub place: String,

    /// Free-form category (e.g., "landscape")
    pub category: String,

    /// Comma-separated tags, kept verbatim
    pub tags: String,

    /// File size in megabytes
    pub size_mb: f64,

    /// Width in pixels
    pub width: u32,

    /// Height in pixels
    pub height: u32,

    /// File format (e.g., "JPG")
    pub format: String,
}

impl Photo {
    /// Start a record from its identifying fields.
    ///
    /// Size and dimensions start at zero and must be set with the builder
    /// methods before the record passes [`Photo::validate`].
    pub fn new(
        name: impl Into<String>,
        date: impl Into<String>,
        place: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            date: date.into(),
            place: place.into(),
            category: category.into(),
            tags: String::new(),
            size_mb: 0.0,
            width: 0,
            height: 0,
            format: String::new(),
        }
    }

    pub fn with_tags(mut self, tags: impl Into<String>) -> Self {
        self.tags = tags.into();
        self
    }

    pub fn with_size_mb(mut self, size_mb: f64) -> Self {
        self.size_mb = size_mb;
        self
    }

    pub fn with_dimensions(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }

    /// Pixel count, used as the third sort key.
    pub fn resolution(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    /// Check every field constraint, reporting the first violation.
    pub fn validate(&self) -> Result<()> {
        validate_text_field(TextField::Name, &self.name)?;
        validate_date(&self.date)?;
        validate_text_field(TextField::Place, &self.place)?;
        validate_text_field(TextField::Category, &self.category)?;
        validate_text_field(TextField::Tags, &self.tags)?;
        validate_positive_number(self.size_mb)?;
        validate_positive_integer(i64::from(self.width))?;
        validate_positive_integer(i64::from(self.height))?;
        validate_text_field(TextField::Format, &self.format)?;
        Ok(())
    }
}
