//! JSON output formatting for photos.

use photoarchive_core::Photo;

use crate::ui::format_dimensions;

use super::text::NumberedPhoto;

/// Convert a photo to JSON for output.
///
/// `position` is the 1-based position in the archive.
pub fn photo_json(position: usize, photo: &Photo) -> serde_json::Value {
    serde_json::json!({
        "position": position,
        "name": photo.name,
        "date": photo.date,
        "place": photo.place,
        "category": photo.category,
        "tags": photo.tags,
        "size_mb": (photo.size_mb * 100.0).round() / 100.0,
        "width": photo.width,
        "height": photo.height,
        "dimensions": format_dimensions(photo),
        "resolution": photo.resolution(),
        "format": photo.format,
    })
}

/// Convert numbered photos to a JSON array.
pub fn photos_json(photos: &[NumberedPhoto<'_>]) -> Vec<serde_json::Value> {
    photos
        .iter()
        .map(|(position, photo)| photo_json(*position, photo))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_photo_json_fields() {
        let photo = Photo::new("Sunset", "2023-07-01", "Sochi", "landscape")
            .with_tags("beach,sunset")
            .with_size_mb(3.14159)
            .with_dimensions(1920, 1080)
            .with_format("JPG");
        let value = photo_json(2, &photo);

        assert_eq!(value["position"], 2);
        assert_eq!(value["size_mb"], 3.14);
        assert_eq!(value["dimensions"], "1920x1080");
        assert_eq!(value["resolution"], 1920u64 * 1080);
        assert_eq!(value["tags"], "beach,sunset");
    }

    #[test]
    fn test_photos_json_keeps_order() {
        let a = Photo::new("a", "2023-07-01", "x", "y");
        let b = Photo::new("b", "2023-07-02", "x", "y");
        let values = photos_json(&[(3, &a), (7, &b)]);
        assert_eq!(values.len(), 2);
        assert_eq!(values[0]["name"], "a");
        assert_eq!(values[1]["position"], 7);
    }
}
