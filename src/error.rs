use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::mode::UnknownMode;

#[derive(Debug, thiserror::Error)]
pub enum HeatmapError {
    #[error("Invalid mode: {0}")]
    InvalidMode(String),

    #[error("Dataset error: {0}")]
    Dataset(String),
}

impl From<UnknownMode> for HeatmapError {
    fn from(e: UnknownMode) -> Self {
        HeatmapError::InvalidMode(e.0)
    }
}

impl From<anyhow::Error> for HeatmapError {
    fn from(e: anyhow::Error) -> Self {
        HeatmapError::Dataset(format!("{:#}", e))
    }
}

impl IntoResponse for HeatmapError {
    fn into_response(self) -> Response {
        let status = match &self {
            HeatmapError::InvalidMode(_) => StatusCode::BAD_REQUEST,
            HeatmapError::Dataset(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = serde_json::json!({
            "error": self.to_string(),
        });

        (status, axum::Json(body)).into_response()
    }
}
