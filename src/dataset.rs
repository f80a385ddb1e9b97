use anyhow::Context;
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use std::path::Path;
use tracing::{info, warn};

use crate::config::HeatmapConfig;
use crate::model::{ProblemIndex, Submission};

/// Snapshot of the inputs the heatmap is computed from.
#[derive(Debug, Default)]
pub struct Dataset {
    pub submissions: Vec<Submission>,
    pub problems: ProblemIndex,
    pub loaded_at: Option<DateTime<Utc>>,
}

impl Dataset {
    pub fn user_submissions(&self, user_id: &str) -> Vec<Submission> {
        self.submissions
            .iter()
            .filter(|s| s.user_id == user_id)
            .cloned()
            .collect()
    }
}

/// Reads a JSON file, treating a missing file as the type's default.
fn read_json_or_default<T: DeserializeOwned + Default>(path: &Path) -> anyhow::Result<T> {
    if !path.exists() {
        warn!("{:?} not found, starting empty", path);
        return Ok(T::default());
    }
    let content =
        std::fs::read_to_string(path).with_context(|| format!("Failed to read {:?}", path))?;
    serde_json::from_str(&content).with_context(|| format!("Failed to parse {:?}", path))
}

pub fn load_dataset(config: &HeatmapConfig) -> anyhow::Result<Dataset> {
    let submissions: Vec<Submission> = read_json_or_default(&config.submissions_path())?;
    let problems: ProblemIndex = read_json_or_default(&config.problem_models_path())?;

    info!(
        "Loaded {} submissions and {} problem models from {:?}",
        submissions.len(),
        problems.len(),
        config.data_dir
    );

    Ok(Dataset {
        submissions,
        problems,
        loaded_at: Some(Utc::now()),
    })
}
