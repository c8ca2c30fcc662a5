use std::fs;

use photoarchive_core::storage::{encode, FlatFileStorage, LoadStatus, StorageEngine};
use photoarchive_core::{sort_multi_level, Photo, PhotoStore};
use tempfile::tempdir;

fn photo(i: usize) -> Photo {
    Photo::new(
        format!("Photo {}", i),
        format!("20{:02}-{:02}-{:02}", i % 30, i % 12 + 1, i % 28 + 1),
        format!("Place {}", i % 7),
        format!("cat{}", i % 3),
    )
    .with_tags(format!("tag{},common", i))
    .with_size_mb(i as f64 * 1.337 + 0.005)
    .with_dimensions(100 + i as u32, 50 + (i as u32 * 3) % 17)
    .with_format("JPG")
}

#[test]
fn test_missing_file_is_not_an_error() {
    let dir = tempdir().expect("tempdir");
    let storage = FlatFileStorage::new(dir.path().join("photo_archive.txt"));

    let outcome = storage.load().expect("load should succeed");
    assert_eq!(outcome.status, LoadStatus::NotFound);
    assert!(outcome.store.is_empty());
}

#[test]
fn test_empty_file_is_distinct_from_missing() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("photo_archive.txt");
    fs::write(&path, "").expect("write");

    let outcome = FlatFileStorage::new(&path).load().expect("load should succeed");
    assert_eq!(outcome.status, LoadStatus::Empty);
}

#[test]
fn test_garbage_only_file_loads_as_empty() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("photo_archive.txt");
    fs::write(&path, "not an archive\n").expect("write");

    let outcome = FlatFileStorage::new(&path).load().expect("load should succeed");
    assert_eq!(outcome.status, LoadStatus::Empty);
}

#[test]
fn test_save_load_round_trip() {
    let dir = tempdir().expect("tempdir");
    let storage = FlatFileStorage::new(dir.path().join("photo_archive.txt"));
    let store = PhotoStore::from_photos((0..PhotoStore::CAPACITY).map(photo).collect());

    storage.save(&store).expect("save should succeed");
    let outcome = storage.load().expect("load should succeed");

    assert_eq!(outcome.status, LoadStatus::Loaded(PhotoStore::CAPACITY));
    for (loaded, original) in outcome.store.iter().zip(store.iter()) {
        let expected_size: f64 = format!("{:.2}", original.size_mb).parse().unwrap();
        assert_eq!(loaded.size_mb, expected_size);
        assert_eq!(
            Photo {
                size_mb: original.size_mb,
                ..loaded.clone()
            },
            *original
        );
    }
}

#[test]
fn test_save_replaces_previous_content() {
    let dir = tempdir().expect("tempdir");
    let storage = FlatFileStorage::new(dir.path().join("photo_archive.txt"));

    storage
        .save(&PhotoStore::from_photos((0..5).map(photo).collect()))
        .expect("first save");
    storage
        .save(&PhotoStore::from_photos((0..2).map(photo).collect()))
        .expect("second save");

    let outcome = storage.load().expect("load");
    assert_eq!(outcome.status, LoadStatus::Loaded(2));
}

#[test]
fn test_sorted_store_persists_in_sorted_order() {
    let dir = tempdir().expect("tempdir");
    let storage = FlatFileStorage::new(dir.path().join("photo_archive.txt"));
    let mut store = PhotoStore::from_photos((0..20).map(photo).collect());
    sort_multi_level(&mut store).expect("sort");

    storage.save(&store).expect("save");
    let loaded = storage.load().expect("load").store;

    let names = |s: &PhotoStore| s.iter().map(|p| p.name.clone()).collect::<Vec<_>>();
    assert_eq!(names(&loaded), names(&store));
}

#[test]
fn test_truncated_file_keeps_leading_records() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("photo_archive.txt");
    let mut text = encode(&[photo(1), photo(2)]);
    text.push_str("Broken|2023-01-01|only four fields\n");
    text.push_str(&encode(&[photo(3)]));
    fs::write(&path, text).expect("write");

    let storage = FlatFileStorage::new(&path);
    let outcome = storage.load().expect("load");
    assert_eq!(outcome.status, LoadStatus::Loaded(2));

    let report = storage.check_integrity().expect("check");
    assert_eq!(report.records_loaded, 2);
    assert_eq!(report.data_lines, 4);
    assert_eq!(report.stopped_at_line, Some(3));
    assert!(!report.is_clean());
}

#[test]
fn test_check_integrity_clean_file() {
    let dir = tempdir().expect("tempdir");
    let storage = FlatFileStorage::new(dir.path().join("photo_archive.txt"));
    storage
        .save(&PhotoStore::from_photos((0..3).map(photo).collect()))
        .expect("save");

    let report = storage.check_integrity().expect("check");
    assert!(report.is_clean());
    assert_eq!(report.records_loaded, 3);
}

#[test]
fn test_check_integrity_ignores_trailing_blank_line() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("photo_archive.txt");
    let mut text = encode(&[photo(1), photo(2)]);
    text.push('\n');
    fs::write(&path, text).expect("write");

    let storage = FlatFileStorage::new(&path);
    assert_eq!(storage.load().expect("load").status, LoadStatus::Loaded(2));

    let report = storage.check_integrity().expect("check");
    assert_eq!(report.records_loaded, 2);
    assert_eq!(report.data_lines, 2);
    assert_eq!(report.stopped_at_line, None);
    assert!(report.is_clean());
}

#[test]
fn test_check_integrity_blank_line_before_data_is_truncation() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("photo_archive.txt");
    let mut text = encode(&[photo(1)]);
    text.push('\n');
    text.push_str(&encode(&[photo(2)]));
    fs::write(&path, text).expect("write");

    let report = FlatFileStorage::new(&path).check_integrity().expect("check");
    assert_eq!(report.records_loaded, 1);
    assert_eq!(report.data_lines, 2);
    assert_eq!(report.stopped_at_line, Some(2));
    assert!(!report.is_clean());
}

#[test]
fn test_check_integrity_full_archive_with_trailing_blank_line() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("photo_archive.txt");
    let photos: Vec<Photo> = (0..PhotoStore::CAPACITY).map(photo).collect();
    let mut text = encode(&photos);
    text.push_str("\n\n");
    fs::write(&path, text).expect("write");

    let report = FlatFileStorage::new(&path).check_integrity().expect("check");
    assert_eq!(report.records_loaded, PhotoStore::CAPACITY);
    assert!(!report.hit_capacity);
    assert!(report.is_clean());
}

#[test]
fn test_check_integrity_missing_file_fails() {
    let dir = tempdir().expect("tempdir");
    let storage = FlatFileStorage::new(dir.path().join("absent.txt"));
    assert!(storage.check_integrity().is_err());
}

#[test]
fn test_save_to_unwritable_location_fails() {
    let dir = tempdir().expect("tempdir");
    let storage = FlatFileStorage::new(dir.path().join("no_such_dir").join("archive.txt"));
    let store = PhotoStore::from_photos(vec![photo(1)]);
    assert!(storage.save(&store).is_err());
}
