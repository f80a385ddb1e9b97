use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::error::HeatmapError;
use crate::mode::ShowMode;
use crate::state::SharedState;

#[derive(Debug, Serialize)]
pub struct ModeInfo {
    pub id: ShowMode,
    pub label: &'static str,
    pub caption: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ModesResponse {
    pub current: ShowMode,
    pub modes: Vec<ModeInfo>,
}

/// Mode id as sent by the client; parsed in the handler so unknown ids get
/// the same error body as the heatmap query.
#[derive(Debug, Deserialize)]
pub struct SetModeRequest {
    pub mode: String,
}

pub fn mode_catalogue() -> Vec<ModeInfo> {
    ShowMode::ALL
        .into_iter()
        .map(|m| ModeInfo {
            id: m,
            label: m.label(),
            caption: m.caption(),
        })
        .collect()
}

/// GET /modes — selectable modes and the current default.
pub async fn list_modes(State(state): State<SharedState>) -> Json<ModesResponse> {
    Json(ModesResponse {
        current: state.current_mode().await,
        modes: mode_catalogue(),
    })
}

/// PUT /settings/mode — change and persist the default mode.
pub async fn set_mode(
    State(state): State<SharedState>,
    Json(body): Json<SetModeRequest>,
) -> Result<Json<serde_json::Value>, HeatmapError> {
    let mode: ShowMode = body.mode.parse()?;
    state.set_mode(mode).await;

    Ok(Json(serde_json::json!({
        "status": "ok",
        "mode": mode,
    })))
}
