use axum::extract::{Path, Query, State};
use axum::Json;
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::HeatmapError;
use crate::heatmap::{self, Collaborators, RenderedCell};
use crate::mode::ShowMode;
use crate::state::SharedState;

#[derive(Debug, Deserialize)]
pub struct HeatmapQuery {
    pub mode: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct HeatmapResponse {
    pub user_id: String,
    pub mode: ShowMode,
    pub label: &'static str,
    pub columns: usize,
    pub rows: usize,
    pub window_start: NaiveDate,
    pub window_end: NaiveDate,
    pub cells: Vec<RenderedCell>,
}

/// GET /heatmap/{user_id} — one user's grid under the requested or default mode.
pub async fn user_heatmap(
    State(state): State<SharedState>,
    Path(user_id): Path<String>,
    Query(query): Query<HeatmapQuery>,
) -> Result<Json<HeatmapResponse>, HeatmapError> {
    let mode = match query.mode.as_deref() {
        Some(id) => id.parse::<ShowMode>()?,
        None => state.current_mode().await,
    };

    let dataset = state.snapshot().await;
    let submissions = dataset.user_submissions(&user_id);
    let collaborators = Collaborators::new(&dataset.problems);
    let now = Utc::now();

    let table = heatmap::build_heatmap(
        &submissions,
        mode,
        &collaborators,
        now,
        state.config.utc_offset,
    );
    let cells = heatmap::render_heatmap(&table, &collaborators);

    debug!(
        "Heatmap for {} ({}): {} submissions",
        user_id,
        mode,
        submissions.len()
    );

    Ok(Json(HeatmapResponse {
        user_id,
        mode,
        label: mode.label(),
        columns: table.columns,
        rows: table.rows,
        window_start: table.window.start,
        window_end: table.window.end,
        cells,
    }))
}
