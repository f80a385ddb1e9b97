use std::collections::HashMap;

use crate::mode::ShowMode;
use crate::model::Submission;

/// Submissions relevant to `mode`.
pub fn filter_submissions(submissions: &[Submission], mode: ShowMode) -> Vec<&Submission> {
    (mode.strategy().filter)(submissions)
}

pub fn all(submissions: &[Submission]) -> Vec<&Submission> {
    submissions.iter().collect()
}

/// Accepted submissions, in input order.
pub fn accepted(submissions: &[Submission]) -> Vec<&Submission> {
    submissions.iter().filter(|s| s.is_accepted()).collect()
}

/// One accepted submission per problem: the one with the highest id.
/// Output order is unspecified.
pub fn latest_accepted_per_problem(submissions: &[Submission]) -> Vec<&Submission> {
    let mut latest: HashMap<&str, &Submission> = HashMap::new();
    for s in submissions.iter().filter(|s| s.is_accepted()) {
        latest
            .entry(s.problem_id.as_str())
            .and_modify(|kept| {
                if s.id > kept.id {
                    *kept = s;
                }
            })
            .or_insert(s);
    }
    latest.into_values().collect()
}
