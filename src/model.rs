use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Judge verdict for an accepted submission.
pub const ACCEPTED: &str = "AC";

pub fn is_accepted(result: &str) -> bool {
    result == ACCEPTED
}

/// One judged submission, as exported by the submission-history provider.
///
/// `id` is unique per judge and grows with submission time, so the highest
/// id for a problem is its most recent submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    pub id: u64,
    pub epoch_second: i64,
    pub problem_id: String,
    #[serde(default)]
    pub contest_id: String,
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub point: f64,
    #[serde(default)]
    pub length: u64,
    pub result: String,
    #[serde(default)]
    pub execution_time: Option<u64>,
}

impl Submission {
    pub fn is_accepted(&self) -> bool {
        is_accepted(&self.result)
    }
}

/// Log-linear solve time model: `ln(seconds) = slope * rating + intercept`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeModel {
    pub slope: f64,
    pub intercept: f64,
    pub variance: f64,
}

/// Difficulty estimate for a single problem, as published by the metadata
/// provider. Every statistic is optional; experimental models are flagged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProblemModel {
    #[serde(default)]
    pub slope: Option<f64>,
    #[serde(default)]
    pub intercept: Option<f64>,
    #[serde(default)]
    pub variance: Option<f64>,
    #[serde(default)]
    pub difficulty: Option<f64>,
    #[serde(default)]
    pub discrimination: Option<f64>,
    #[serde(default)]
    pub irt_loglikelihood: Option<f64>,
    #[serde(default)]
    pub irt_users: Option<f64>,
    #[serde(default)]
    pub is_experimental: bool,
}

impl ProblemModel {
    /// The solve time model, when all of its parameters were estimated.
    pub fn time_model(&self) -> Option<TimeModel> {
        Some(TimeModel {
            slope: self.slope?,
            intercept: self.intercept?,
            variance: self.variance?,
        })
    }
}

/// Lookup table from problem id to its model. Missing problems are
/// "unknown", never an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProblemIndex {
    models: HashMap<String, ProblemModel>,
}

impl ProblemIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, problem_id: impl Into<String>, model: ProblemModel) {
        self.models.insert(problem_id.into(), model);
    }

    pub fn get(&self, problem_id: &str) -> Option<&ProblemModel> {
        self.models.get(problem_id)
    }

    pub fn difficulty(&self, problem_id: &str) -> Option<f64> {
        self.get(problem_id).and_then(|m| m.difficulty)
    }

    pub fn time_model(&self, problem_id: &str) -> Option<TimeModel> {
        self.get(problem_id).and_then(ProblemModel::time_model)
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}

impl FromIterator<(String, ProblemModel)> for ProblemIndex {
    fn from_iter<I: IntoIterator<Item = (String, ProblemModel)>>(iter: I) -> Self {
        Self {
            models: iter.into_iter().collect(),
        }
    }
}
