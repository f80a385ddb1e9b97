use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::heatmap::{filter, present, reduce, Collaborators};
use crate::model::Submission;

/// Aggregation mode of the heatmap. Selecting a mode fixes the filter, the
/// per-day reduction, the tooltip and the color mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum)]
pub enum ShowMode {
    /// Every submission, whatever the verdict.
    #[default]
    #[serde(rename = "submissions")]
    #[value(name = "submissions")]
    AllSubmissions,
    /// Accepted submissions.
    #[serde(rename = "ac")]
    #[value(name = "ac")]
    AllAccepted,
    /// Latest accepted submission per problem.
    #[serde(rename = "unique-ac")]
    #[value(name = "unique-ac")]
    UniqueAccepted,
    /// Hardest problem accepted each day.
    #[serde(rename = "max-difficulty")]
    #[value(name = "max-difficulty")]
    MaxDifficulty,
    /// Sum of top-player-equivalent effort of problems first solved each day.
    #[serde(rename = "tee")]
    #[value(name = "tee")]
    TopPlayerEquivalentEffort,
}

pub type FilterFn = for<'a> fn(&'a [Submission]) -> Vec<&'a Submission>;
pub type ReduceFn = fn(&[&Submission], &Collaborators<'_>) -> Option<f64>;
pub type TooltipFn = fn(NaiveDate, f64) -> String;
pub type ColorFn = fn(f64, &Collaborators<'_>) -> &'static str;

/// The four pure functions a mode resolves to.
#[derive(Clone, Copy)]
pub struct ModeStrategy {
    pub filter: FilterFn,
    pub reduce: ReduceFn,
    pub tooltip: TooltipFn,
    pub color: ColorFn,
}

impl ShowMode {
    pub const ALL: [ShowMode; 5] = [
        ShowMode::AllSubmissions,
        ShowMode::AllAccepted,
        ShowMode::UniqueAccepted,
        ShowMode::MaxDifficulty,
        ShowMode::TopPlayerEquivalentEffort,
    ];

    /// Stable identifier used on the wire and on the command line.
    pub fn id(self) -> &'static str {
        match self {
            ShowMode::AllSubmissions => "submissions",
            ShowMode::AllAccepted => "ac",
            ShowMode::UniqueAccepted => "unique-ac",
            ShowMode::MaxDifficulty => "max-difficulty",
            ShowMode::TopPlayerEquivalentEffort => "tee",
        }
    }

    /// Label used inside tooltips.
    pub fn label(self) -> &'static str {
        match self {
            ShowMode::AllSubmissions => "Submissions",
            ShowMode::AllAccepted => "AC",
            ShowMode::UniqueAccepted => "Unique AC",
            ShowMode::MaxDifficulty => "Max Difficulty",
            ShowMode::TopPlayerEquivalentEffort => "TEE",
        }
    }

    /// Caption of the mode selector button.
    pub fn caption(self) -> &'static str {
        match self {
            ShowMode::AllSubmissions => "All Submissions",
            ShowMode::AllAccepted => "All AC",
            ShowMode::UniqueAccepted => "Unique AC",
            ShowMode::MaxDifficulty => "Max Difficulty",
            ShowMode::TopPlayerEquivalentEffort => "TEE",
        }
    }

    pub fn strategy(self) -> ModeStrategy {
        match self {
            ShowMode::AllSubmissions => ModeStrategy {
                filter: filter::all,
                reduce: reduce::count,
                tooltip: present::submissions_tooltip,
                color: present::count_color,
            },
            ShowMode::AllAccepted => ModeStrategy {
                filter: filter::accepted,
                reduce: reduce::count,
                tooltip: present::ac_tooltip,
                color: present::count_color,
            },
            ShowMode::UniqueAccepted => ModeStrategy {
                filter: filter::latest_accepted_per_problem,
                reduce: reduce::count,
                tooltip: present::unique_ac_tooltip,
                color: present::count_color,
            },
            ShowMode::MaxDifficulty => ModeStrategy {
                filter: filter::accepted,
                reduce: reduce::max_difficulty,
                tooltip: present::max_difficulty_tooltip,
                color: present::difficulty_color,
            },
            ShowMode::TopPlayerEquivalentEffort => ModeStrategy {
                filter: filter::latest_accepted_per_problem,
                reduce: reduce::effort_sum,
                tooltip: present::tee_tooltip,
                color: present::tee_color,
            },
        }
    }
}

impl fmt::Display for ShowMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown mode: {0}")]
pub struct UnknownMode(pub String);

impl FromStr for ShowMode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ShowMode::ALL
            .into_iter()
            .find(|m| m.id() == s)
            .ok_or_else(|| UnknownMode(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_roundtrips_through_from_str() {
        for mode in ShowMode::ALL {
            assert_eq!(mode.id().parse::<ShowMode>().unwrap(), mode);
        }
        assert!("Unique AC".parse::<ShowMode>().is_err());
    }

    #[test]
    fn test_serde_uses_wire_ids() {
        let json = serde_json::to_string(&ShowMode::MaxDifficulty).unwrap();
        assert_eq!(json, "\"max-difficulty\"");
        let mode: ShowMode = serde_json::from_str("\"tee\"").unwrap();
        assert_eq!(mode, ShowMode::TopPlayerEquivalentEffort);
    }

    #[test]
    fn test_default_is_all_submissions() {
        assert_eq!(ShowMode::default(), ShowMode::AllSubmissions);
    }
}
