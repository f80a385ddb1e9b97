use axum::routing::{get, post, put};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::SharedState;

pub fn build_router(state: SharedState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health
        .route("/health", get(crate::routes::health::health))
        // Heatmap
        .route(
            "/heatmap/{user_id}",
            get(crate::routes::heatmap::user_heatmap),
        )
        // Mode selection
        .route("/modes", get(crate::routes::modes::list_modes))
        .route("/settings/mode", put(crate::routes::modes::set_mode))
        // Dataset
        .route(
            "/dataset/reload",
            post(crate::routes::dataset::reload_dataset),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
