use crate::config::UNKNOWN_DIFFICULTY;
use crate::mode::ShowMode;
use crate::model::Submission;

use super::Collaborators;

/// Value of one day's cell under `mode`; `None` when the day has no data.
pub fn reduce_day(
    day: &[&Submission],
    mode: ShowMode,
    collaborators: &Collaborators<'_>,
) -> Option<f64> {
    (mode.strategy().reduce)(day, collaborators)
}

pub fn count(day: &[&Submission], _collaborators: &Collaborators<'_>) -> Option<f64> {
    match day.len() {
        0 => None,
        n => Some(n as f64),
    }
}

/// Highest difficulty among the day's problems, never below
/// `UNKNOWN_DIFFICULTY`. Problems without a difficulty count as unknown.
pub fn max_difficulty(day: &[&Submission], collaborators: &Collaborators<'_>) -> Option<f64> {
    day.iter()
        .map(|s| {
            collaborators
                .problems
                .difficulty(&s.problem_id)
                .unwrap_or(UNKNOWN_DIFFICULTY)
        })
        .fold(None, |max, d| Some(max.unwrap_or(UNKNOWN_DIFFICULTY).max(d)))
}

/// Total effort of the day's problems. Problems without a time model
/// contribute nothing, and a zero total is reported as no value.
pub fn effort_sum(day: &[&Submission], collaborators: &Collaborators<'_>) -> Option<f64> {
    let mut efforts: Vec<f64> = day
        .iter()
        .map(|s| {
            collaborators
                .problems
                .time_model(&s.problem_id)
                .map_or(0.0, |tm| (collaborators.effort)(&tm))
        })
        .collect();
    // Fixed summation order keeps the float total independent of input order.
    efforts.sort_by(f64::total_cmp);
    let total: f64 = efforts.iter().sum();

    if total == 0.0 {
        None
    } else {
        Some(total)
    }
}
