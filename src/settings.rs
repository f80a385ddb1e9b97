use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::config::{HeatmapConfig, SETTINGS_FILE};
use crate::mode::ShowMode;

#[derive(Serialize, Deserialize, Default)]
pub struct PersistentSettings {
    pub default_mode: Option<ShowMode>,
}

pub fn settings_path(config: &HeatmapConfig) -> PathBuf {
    config.data_dir.join(SETTINGS_FILE)
}

/// Missing or unreadable settings fall back to defaults.
pub fn load_settings(path: &Path) -> PersistentSettings {
    let Ok(content) = std::fs::read_to_string(path) else {
        return PersistentSettings::default();
    };
    serde_json::from_str(&content).unwrap_or_else(|e| {
        warn!("Ignoring malformed heatmap settings in {:?}: {}", path, e);
        PersistentSettings::default()
    })
}

/// Writes through a sibling temp file and renames it over `path`, so readers
/// never observe a partially written file.
pub fn save_settings(path: &Path, settings: &PersistentSettings) {
    let json = match serde_json::to_string_pretty(settings) {
        Ok(json) => json,
        Err(e) => {
            warn!("Failed to serialize heatmap settings: {}", e);
            return;
        }
    };

    let tmp = path.with_extension("json.tmp");
    let written = std::fs::write(&tmp, json).and_then(|_| std::fs::rename(&tmp, path));
    if let Err(e) = written {
        warn!("Failed to save heatmap settings to {:?}: {}", path, e);
        let _ = std::fs::remove_file(&tmp);
    }
}
