use submission_heatmap::mode::ShowMode;
use submission_heatmap::settings::{load_settings, save_settings, PersistentSettings};
use tempfile::TempDir;

#[test]
fn test_load_missing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nonexistent.json");
    let settings = load_settings(&path);
    assert!(settings.default_mode.is_none());
}

#[test]
fn test_load_invalid_json() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.json");
    std::fs::write(&path, "not json at all {{{").unwrap();
    let settings = load_settings(&path);
    // Should return defaults instead of panicking
    assert!(settings.default_mode.is_none());
}

#[test]
fn test_load_unknown_mode_falls_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, r#"{"default_mode": "streak"}"#).unwrap();
    let settings = load_settings(&path);
    assert!(settings.default_mode.is_none());
}

#[test]
fn test_save_and_load_roundtrip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.json");

    let settings = PersistentSettings {
        default_mode: Some(ShowMode::UniqueAccepted),
    };

    save_settings(&path, &settings);
    let loaded = load_settings(&path);

    assert_eq!(loaded.default_mode, Some(ShowMode::UniqueAccepted));
    let raw = std::fs::read_to_string(&path).unwrap();
    assert!(raw.contains("\"unique-ac\""));
}

#[test]
fn test_empty_object() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("partial.json");

    std::fs::write(&path, "{}").unwrap();
    let loaded = load_settings(&path);

    assert!(loaded.default_mode.is_none());
}

#[test]
fn test_save_into_missing_dir_does_not_panic() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing").join("settings.json");

    save_settings(
        &path,
        &PersistentSettings {
            default_mode: Some(ShowMode::MaxDifficulty),
        },
    );
    assert!(!path.exists());
}

#[test]
fn test_settings_path() {
    use chrono::FixedOffset;
    use std::path::PathBuf;
    use submission_heatmap::config::HeatmapConfig;
    use submission_heatmap::settings::settings_path;

    let config = HeatmapConfig {
        data_dir: PathBuf::from("/tmp/heatmap-data"),
        port: 9880,
        utc_offset: FixedOffset::east_opt(0).unwrap(),
        initial_mode: None,
    };

    let path = settings_path(&config);
    assert_eq!(
        path,
        PathBuf::from("/tmp/heatmap-data/heatmap-settings.json")
    );
}

#[test]
fn test_overwrite_replaces_file_without_leftovers() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("heatmap-settings.json");

    for mode in [ShowMode::AllAccepted, ShowMode::TopPlayerEquivalentEffort] {
        save_settings(
            &path,
            &PersistentSettings {
                default_mode: Some(mode),
            },
        );
    }

    assert_eq!(
        load_settings(&path).default_mode,
        Some(ShowMode::TopPlayerEquivalentEffort)
    );
    let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
    assert_eq!(entries.len(), 1);
}
