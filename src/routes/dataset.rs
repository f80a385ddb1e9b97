use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use tracing::{error, info};

use crate::error::HeatmapError;
use crate::state::SharedState;

/// POST /dataset/reload — re-read the data files and swap the snapshot.
pub async fn reload_dataset(
    State(state): State<SharedState>,
) -> Result<impl IntoResponse, HeatmapError> {
    let dataset = state.reload().await.map_err(|e| {
        error!("Dataset reload failed: {:#}", e);
        HeatmapError::from(e)
    })?;

    info!("Dataset reloaded");

    Ok(Json(serde_json::json!({
        "status": "reloaded",
        "submissions": dataset.submissions.len(),
        "problems": dataset.problems.len(),
        "loaded_at": dataset.loaded_at.map(|t| t.to_rfc3339()),
    })))
}
