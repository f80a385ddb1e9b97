use chrono::{FixedOffset, Local, Offset};
use clap::Parser;
use std::path::PathBuf;

use crate::mode::ShowMode;

/// Submission heatmap — serves a year of judge submissions as a calendar grid.
#[derive(Parser, Debug, Clone)]
#[command(name = "submission-heatmap")]
pub struct CliArgs {
    /// Directory holding submissions.json, problem-models.json and settings
    #[arg(short = 'd', long = "data-dir")]
    pub data_dir: PathBuf,

    /// HTTP port
    #[arg(long = "port", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Calendar offset used to assign submissions to days, e.g. +09:00
    /// (defaults to the host's current local offset)
    #[arg(long = "utc-offset", value_parser = parse_utc_offset)]
    pub utc_offset: Option<FixedOffset>,

    /// Initial aggregation mode (overrides the persisted default)
    #[arg(short = 'm', long = "mode", value_enum)]
    pub mode: Option<ShowMode>,
}

pub struct HeatmapConfig {
    pub data_dir: PathBuf,
    pub port: u16,
    pub utc_offset: FixedOffset,
    pub initial_mode: Option<ShowMode>,
}

// Server constants
pub const DEFAULT_PORT: u16 = 9880;

// Data files
pub const SUBMISSIONS_FILE: &str = "submissions.json";
pub const PROBLEM_MODELS_FILE: &str = "problem-models.json";
pub const SETTINGS_FILE: &str = "heatmap-settings.json";

// Grid shape
pub const WEEKS: usize = 53;
pub const WEEKDAY: usize = 7;
pub const WINDOW_DAYS: usize = WEEKS * WEEKDAY;

// Difficulty sentinel for problems without a model
pub const UNKNOWN_DIFFICULTY: f64 = -1.0;

// TEE constants
pub const TOP_PLAYER_RATING: f64 = 4000.0;
pub const TEE_DIGIT: usize = 2;
pub const TEE_COLOR_RATIO: f64 = 180.0; // seconds per band

// Palettes, lightest first. Band 0 doubles as the "no data" color.
pub const COLORS_COUNT: [&str; 5] = ["#ebedf0", "#c6e48b", "#7bc96f", "#239a3b", "#196127"];
pub const COLORS_TEE: [&str; 6] = [
    "#ebedf0", "#c6e48b", "#7bc96f", "#239a3b", "#196127", "#0f3a17",
];
pub const EMPTY_CELL_COLOR: &str = COLORS_COUNT[0];

fn parse_utc_offset(s: &str) -> Result<FixedOffset, String> {
    s.parse::<FixedOffset>()
        .map_err(|e| format!("invalid UTC offset {:?}: {}", s, e))
}

impl HeatmapConfig {
    pub fn from_args(args: CliArgs) -> Self {
        let utc_offset = args
            .utc_offset
            .unwrap_or_else(|| Local::now().offset().fix());

        HeatmapConfig {
            data_dir: args.data_dir,
            port: args.port,
            utc_offset,
            initial_mode: args.mode,
        }
    }

    pub fn submissions_path(&self) -> PathBuf {
        self.data_dir.join(SUBMISSIONS_FILE)
    }

    pub fn problem_models_path(&self) -> PathBuf {
        self.data_dir.join(PROBLEM_MODELS_FILE)
    }
}
