use crate::config::TOP_PLAYER_RATING;
use crate::model::TimeModel;

/// Predicted solve time in seconds for a player of the given rating.
pub fn predict_solve_time(model: &TimeModel, rating: f64) -> f64 {
    (model.slope * rating + model.intercept).exp()
}

/// Top-player-equivalent effort (TEE): how long a top player is expected to
/// spend on the problem, in seconds.
pub fn top_player_equivalent_effort(model: &TimeModel) -> f64 {
    predict_solve_time(model, TOP_PLAYER_RATING)
}
