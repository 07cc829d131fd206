// SPDX-License-Identifier: MPL-2.0
//! Photo catalog loading.
//!
//! A catalog is a TOML file enumerating the photos of a library:
//!
//! ```toml
//! [[photo]]
//! name = "Sunset"
//! source = "photos/sunset.jpg"
//! tags = ["nature", "orange"]
//! date_taken = "2023-07-15 10:30:00"
//! camera_model = "Canon EOS R5"
//! location = "Beach"
//! ```
//!
//! Only `source` is required. A missing `name` falls back to the source
//! file stem, and a missing `tags` list is an empty one. Relative sources
//! are resolved against the catalog file's directory.

use crate::domain::photo::Photo;
use crate::error::{CatalogError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default, rename = "photo")]
    photos: Vec<PhotoEntry>,
}

#[derive(Debug, Deserialize)]
struct PhotoEntry {
    name: Option<String>,
    source: Option<PathBuf>,
    #[serde(default)]
    tags: Vec<String>,
    date_taken: Option<String>,
    camera_model: Option<String>,
    location: Option<String>,
}

/// Reads and parses the catalog at `path`.
pub fn load_catalog(path: &Path) -> Result<Vec<Photo>> {
    let content = fs::read_to_string(path)?;
    let base_dir = path.parent().unwrap_or_else(|| Path::new(""));
    parse_catalog(&content, base_dir)
}

/// Parses catalog TOML, resolving relative sources against `base_dir`.
pub fn parse_catalog(content: &str, base_dir: &Path) -> Result<Vec<Photo>> {
    let file: CatalogFile =
        toml::from_str(content).map_err(|e| CatalogError::Malformed(e.to_string()))?;

    let mut photos = Vec::with_capacity(file.photos.len());
    for (index, entry) in file.photos.into_iter().enumerate() {
        let source = entry
            .source
            .ok_or(CatalogError::MissingSource { index })?;
        let source = if source.is_relative() {
            base_dir.join(source)
        } else {
            source
        };

        let name = entry
            .name
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| Photo::name_from_path(&source));

        photos.push(Photo {
            name,
            source,
            tags: entry.tags,
            date_taken: entry.date_taken,
            camera_model: entry.camera_model,
            location: entry.location,
        });
    }

    Ok(photos)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    const SAMPLE: &str = r#"
        [[photo]]
        name = "Sunset"
        source = "photos/sunset.jpg"
        tags = ["nature", "orange"]
        date_taken = "2023-07-15 10:30:00"
        camera_model = "Canon EOS R5"
        location = "Beach"

        [[photo]]
        source = "/absolute/skyline.png"
    "#;

    #[test]
    fn parses_full_and_minimal_entries() {
        let photos = parse_catalog(SAMPLE, Path::new("/base")).expect("catalog should parse");
        assert_eq!(photos.len(), 2);

        let sunset = &photos[0];
        assert_eq!(sunset.name, "Sunset");
        assert_eq!(sunset.source, PathBuf::from("/base/photos/sunset.jpg"));
        assert_eq!(sunset.tags, vec!["nature", "orange"]);
        assert_eq!(sunset.date_taken.as_deref(), Some("2023-07-15 10:30:00"));
        assert_eq!(sunset.camera_model.as_deref(), Some("Canon EOS R5"));
        assert_eq!(sunset.location.as_deref(), Some("Beach"));

        let skyline = &photos[1];
        assert_eq!(skyline.name, "skyline"); // file stem fallback
        assert_eq!(skyline.source, PathBuf::from("/absolute/skyline.png"));
        assert!(skyline.tags.is_empty()); // missing tags list is empty
        assert!(skyline.date_taken.is_none());
    }

    #[test]
    fn tag_order_is_preserved() {
        let content = r#"
            [[photo]]
            source = "a.jpg"
            tags = ["zebra", "apple", "mango"]
        "#;
        let photos = parse_catalog(content, Path::new("")).expect("catalog should parse");
        assert_eq!(photos[0].tags, vec!["zebra", "apple", "mango"]);
    }

    #[test]
    fn empty_catalog_yields_no_photos() {
        let photos = parse_catalog("", Path::new("")).expect("empty catalog is valid");
        assert!(photos.is_empty());
    }

    #[test]
    fn missing_source_is_rejected_with_entry_index() {
        let content = r#"
            [[photo]]
            source = "a.jpg"

            [[photo]]
            name = "No source"
        "#;
        let err = parse_catalog(content, Path::new("")).unwrap_err();
        match err {
            Error::Catalog(CatalogError::MissingSource { index }) => assert_eq!(index, 1),
            other => panic!("expected MissingSource, got {:?}", other),
        }
    }

    #[test]
    fn malformed_toml_is_rejected() {
        let err = parse_catalog("not = valid = toml", Path::new("")).unwrap_err();
        assert!(matches!(
            err,
            Error::Catalog(CatalogError::Malformed(_))
        ));
    }

    #[test]
    fn blank_name_falls_back_to_file_stem() {
        let content = r#"
            [[photo]]
            name = "  "
            source = "mountain.jpeg"
        "#;
        let photos = parse_catalog(content, Path::new("")).expect("catalog should parse");
        assert_eq!(photos[0].name, "mountain");
    }

    #[test]
    fn load_catalog_resolves_against_file_directory() {
        let dir = tempdir().expect("failed to create temp dir");
        let catalog_path = dir.path().join("library.toml");
        fs::write(
            &catalog_path,
            r#"
                [[photo]]
                source = "pics/beach.jpg"
            "#,
        )
        .expect("failed to write catalog");

        let photos = load_catalog(&catalog_path).expect("catalog should load");
        assert_eq!(photos[0].source, dir.path().join("pics/beach.jpg"));
    }
}
