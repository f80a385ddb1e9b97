use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::state::SharedState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub dataset: DatasetHealth,
    pub mode: String,
    pub server: ServerInfo,
}

#[derive(Serialize)]
pub struct DatasetHealth {
    pub submissions: usize,
    pub problems: usize,
    pub loaded_at: Option<String>,
}

#[derive(Serialize)]
pub struct ServerInfo {
    pub version: String,
    pub data_dir: String,
    pub utc_offset: String,
}

/// Overall status from what the dataset snapshot holds.
pub fn determine_overall_status(loaded: bool, submissions: usize) -> &'static str {
    if !loaded {
        "unloaded"
    } else if submissions == 0 {
        "empty"
    } else {
        "ready"
    }
}

pub async fn health(State(state): State<SharedState>) -> Json<HealthResponse> {
    Json(build_health_response(&state).await)
}

pub async fn build_health_response(state: &SharedState) -> HealthResponse {
    let dataset = state.snapshot().await;
    let mode = state.current_mode().await;

    let overall_status =
        determine_overall_status(dataset.loaded_at.is_some(), dataset.submissions.len());

    HealthResponse {
        status: overall_status.to_string(),
        dataset: DatasetHealth {
            submissions: dataset.submissions.len(),
            problems: dataset.problems.len(),
            loaded_at: dataset.loaded_at.map(|t| t.to_rfc3339()),
        },
        mode: mode.to_string(),
        server: ServerInfo {
            version: env!("CARGO_PKG_VERSION").to_string(),
            data_dir: state.config.data_dir.display().to_string(),
            utc_offset: state.config.utc_offset.to_string(),
        },
    }
}
