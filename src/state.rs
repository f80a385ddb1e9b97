use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

use crate::config::HeatmapConfig;
use crate::dataset::{self, Dataset};
use crate::mode::ShowMode;
use crate::settings::{self, PersistentSettings};

pub type SharedState = Arc<HeatmapState>;

pub struct HeatmapState {
    pub config: HeatmapConfig,
    pub dataset: RwLock<Arc<Dataset>>,
    pub mode: RwLock<ShowMode>,
}

impl HeatmapState {
    /// The CLI mode wins over the persisted one; otherwise the default mode.
    pub fn new(config: HeatmapConfig, dataset: Dataset) -> Self {
        let persisted = settings::load_settings(&settings::settings_path(&config));
        let mode = config
            .initial_mode
            .or(persisted.default_mode)
            .unwrap_or_default();

        Self {
            config,
            dataset: RwLock::new(Arc::new(dataset)),
            mode: RwLock::new(mode),
        }
    }

    /// Current dataset; holders keep it alive across a concurrent reload.
    pub async fn snapshot(&self) -> Arc<Dataset> {
        self.dataset.read().await.clone()
    }

    pub async fn current_mode(&self) -> ShowMode {
        *self.mode.read().await
    }

    /// Updates the default mode. The write lock is held through the save so
    /// the settings file always matches the in-memory mode.
    pub async fn set_mode(&self, mode: ShowMode) {
        let mut current = self.mode.write().await;
        *current = mode;
        settings::save_settings(
            &settings::settings_path(&self.config),
            &PersistentSettings {
                default_mode: Some(mode),
            },
        );
        drop(current);
        info!("Default heatmap mode set to {}", mode);
    }

    /// Re-reads the data files. The previous dataset stays in place on error.
    pub async fn reload(&self) -> anyhow::Result<Arc<Dataset>> {
        let fresh = Arc::new(dataset::load_dataset(&self.config)?);
        *self.dataset.write().await = fresh.clone();
        Ok(fresh)
    }
}
