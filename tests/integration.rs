// SPDX-License-Identifier: MPL-2.0
use photonav::config::{self, Config, SortOrder};
use photonav::domain::photo::PhotoFilter;
use photonav::i18n::fluent::I18n;
use photonav::library::{self, PhotoLibrary};
use photonav::ui::photo_details::DetailsContent;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_language_change_via_config() {
    // Create a temporary directory for the config file
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    // 1. Initial config: en-US
    let initial_config = Config {
        language: Some("en-US".to_string()),
        sort_order: Some(SortOrder::Alphabetical),
    };
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    let loaded_initial_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let i18n_en = I18n::new(None, &loaded_initial_config);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");
    assert_eq!(
        i18n_en.tr("details-empty-placeholder"),
        "Select a photo to see details."
    );

    // 2. Change config to uk
    let ukrainian_config = Config {
        language: Some("uk".to_string()),
        sort_order: Some(SortOrder::Alphabetical),
    };
    config::save_to_path(&ukrainian_config, &temp_config_file_path)
        .expect("Failed to write ukrainian config file");

    let loaded_ukrainian_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load ukrainian config from path");
    let i18n_uk = I18n::new(None, &loaded_ukrainian_config);
    assert_eq!(i18n_uk.current_locale().to_string(), "uk");

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_catalog_to_details_flow() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let catalog_path = dir.path().join("library.toml");
    fs::write(
        &catalog_path,
        r#"
            [[photo]]
            name = "Sunset"
            source = "photos/sunset.jpg"
            tags = ["nature", "orange"]

            [[photo]]
            name = "Skyline"
            source = "photos/skyline.png"
            tags = ["city"]
        "#,
    )
    .expect("Failed to write catalog");

    let photos = library::load_from_path(&catalog_path, SortOrder::Alphabetical)
        .expect("Catalog should load");
    let mut library = PhotoLibrary::from_photos(photos);

    // Nothing selected: the details pane projects the placeholder.
    assert_eq!(
        DetailsContent::from_photo(library.selected_photo()),
        DetailsContent::Placeholder
    );

    // Selecting the first photo projects its fields in catalog order.
    library.select(0);
    let DetailsContent::Photo(details) = DetailsContent::from_photo(library.selected_photo())
    else {
        panic!("expected photo content");
    };
    assert_eq!(details.name, "Sunset");
    assert_eq!(details.tags, ["nature".to_string(), "orange".to_string()]);
    assert!(details.source.ends_with("photos/sunset.jpg"));

    // A tag filter that hides the selection returns the pane to the
    // placeholder, with no residual content.
    let mut filter = PhotoFilter::default();
    filter.tags = vec!["city".to_string()];
    library.set_filter(filter);
    assert_eq!(
        DetailsContent::from_photo(library.selected_photo()),
        DetailsContent::Placeholder
    );

    // Navigation walks only the visible list.
    library.select_next();
    let DetailsContent::Photo(details) = DetailsContent::from_photo(library.selected_photo())
    else {
        panic!("expected photo content");
    };
    assert_eq!(details.name, "Skyline");
}

#[test]
fn test_directory_scan_builds_a_library() {
    let dir = tempdir().expect("Failed to create temporary directory");
    fs::write(dir.path().join("b.png"), b"fake").expect("write failed");
    fs::write(dir.path().join("a.jpg"), b"fake").expect("write failed");
    fs::write(dir.path().join("notes.txt"), b"fake").expect("write failed");

    let photos = library::load_from_path(dir.path(), SortOrder::Alphabetical)
        .expect("Scan should succeed");
    let names: Vec<&str> = photos.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["a", "b"]);
    assert!(photos.iter().all(|p| p.tags.is_empty()));
}
