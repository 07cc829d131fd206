// SPDX-License-Identifier: MPL-2.0
//! Directory scanner for building a photo library from image files.
//!
//! Scans a directory for supported image formats, sorts the files according
//! to the configured sort order, and maps each file to a [`Photo`] named
//! after its file stem with an empty tag list.

use crate::config::SortOrder;
use crate::domain::photo::Photo;
use crate::error::Result;
use std::path::{Path, PathBuf};

/// Image extensions the viewer can display.
const SUPPORTED_EXTENSIONS: &[&str] = &[
    "jpg", "jpeg", "png", "gif", "bmp", "webp", "tif", "tiff", "ico",
];

/// Scans `directory` for image files and maps them to photos.
///
/// Returns an error if the directory cannot be read. Unsupported files are
/// skipped silently.
pub fn scan_directory(directory: &Path, sort_order: SortOrder) -> Result<Vec<Photo>> {
    let mut files = Vec::new();

    for entry in std::fs::read_dir(directory)? {
        let entry = entry?;
        let path = entry.path();

        if path.is_file() && is_supported_image(&path) {
            files.push(path);
        }
    }

    sort_files(&mut files, sort_order);

    Ok(files
        .into_iter()
        .map(|path| {
            let name = Photo::name_from_path(&path);
            Photo::new(name, path)
        })
        .collect())
}

/// Checks if a file has a supported image extension.
fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| ext.eq_ignore_ascii_case(supported))
        })
}

/// Sorts image file paths according to the specified sort order.
fn sort_files(files: &mut [PathBuf], sort_order: SortOrder) {
    match sort_order {
        SortOrder::Alphabetical => {
            files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        }
        SortOrder::ModifiedDate => {
            files.sort_by(|a, b| {
                let a_time = a
                    .metadata()
                    .and_then(|m| m.modified())
                    .unwrap_or(std::time::SystemTime::UNIX_EPOCH);
                let b_time = b
                    .metadata()
                    .and_then(|m| m.modified())
                    .unwrap_or(std::time::SystemTime::UNIX_EPOCH);
                a_time.cmp(&b_time)
            });
        }
        SortOrder::CreatedDate => {
            files.sort_by(|a, b| {
                let a_time = a
                    .metadata()
                    .and_then(|m| m.created())
                    .unwrap_or(std::time::SystemTime::UNIX_EPOCH);
                let b_time = b
                    .metadata()
                    .and_then(|m| m.created())
                    .unwrap_or(std::time::SystemTime::UNIX_EPOCH);
                a_time.cmp(&b_time)
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Write;
    use tempfile::tempdir;

    fn create_test_file(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        let mut file = fs::File::create(&path).expect("failed to create test file");
        file.write_all(b"fake image data")
            .expect("failed to write test file");
        path
    }

    #[test]
    fn scan_finds_supported_images_only() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        create_test_file(temp_dir.path(), "a.jpg");
        create_test_file(temp_dir.path(), "b.PNG");
        create_test_file(temp_dir.path(), "notes.txt");
        create_test_file(temp_dir.path(), "noext");

        let photos = scan_directory(temp_dir.path(), SortOrder::Alphabetical)
            .expect("scan should succeed");
        assert_eq!(photos.len(), 2);
    }

    #[test]
    fn scan_sorts_alphabetically_by_file_name() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        create_test_file(temp_dir.path(), "c.gif");
        create_test_file(temp_dir.path(), "a.jpg");
        create_test_file(temp_dir.path(), "b.png");

        let photos = scan_directory(temp_dir.path(), SortOrder::Alphabetical)
            .expect("scan should succeed");
        let names: Vec<&str> = photos.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn scanned_photos_have_stem_names_and_no_tags() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = create_test_file(temp_dir.path(), "mountain.jpeg");

        let photos = scan_directory(temp_dir.path(), SortOrder::Alphabetical)
            .expect("scan should succeed");
        assert_eq!(photos[0].name, "mountain");
        assert_eq!(photos[0].source, path);
        assert!(photos[0].tags.is_empty());
        assert!(photos[0].date_taken.is_none());
    }

    #[test]
    fn scan_of_empty_directory_yields_no_photos() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let photos = scan_directory(temp_dir.path(), SortOrder::Alphabetical)
            .expect("scan should succeed");
        assert!(photos.is_empty());
    }

    #[test]
    fn scan_of_missing_directory_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let missing = temp_dir.path().join("nope");
        assert!(scan_directory(&missing, SortOrder::Alphabetical).is_err());
    }

    #[test]
    fn extension_check_is_case_insensitive() {
        assert!(is_supported_image(Path::new("photo.JPG")));
        assert!(is_supported_image(Path::new("photo.WebP")));
        assert!(!is_supported_image(Path::new("clip.mp4")));
        assert!(!is_supported_image(Path::new("README")));
    }
}
