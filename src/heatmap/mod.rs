pub mod bucket;
pub mod filter;
pub mod present;
pub mod reduce;
pub mod window;

use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use serde::Serialize;
use tracing::debug;

use crate::config::{EMPTY_CELL_COLOR, WEEKDAY, WEEKS};
use crate::effort::top_player_equivalent_effort;
use crate::mode::{ModeStrategy, ShowMode};
use crate::model::{ProblemIndex, Submission, TimeModel};
use crate::rating::rating_color_code;

use self::bucket::bucket_by_day;
use self::window::{build_window, Window};

pub type EffortFn = fn(&TimeModel) -> f64;
pub type RatingColorFn = fn(f64) -> &'static str;

/// Data and functions the heatmap borrows from the problem metadata side.
#[derive(Clone, Copy)]
pub struct Collaborators<'a> {
    pub problems: &'a ProblemIndex,
    pub effort: EffortFn,
    pub rating_color: RatingColorFn,
}

impl<'a> Collaborators<'a> {
    /// Uses the built-in TEE estimate and rating colors.
    pub fn new(problems: &'a ProblemIndex) -> Self {
        Self {
            problems,
            effort: top_player_equivalent_effort,
            rating_color: rating_color_code,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Cell {
    pub date: NaiveDate,
    pub value: Option<f64>,
}

/// One full grid: `columns * rows` cells in chronological order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeatmapTable {
    pub mode: ShowMode,
    pub columns: usize,
    pub rows: usize,
    pub window: Window,
    pub cells: Vec<Cell>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedCell {
    pub date: String,
    pub value: Option<f64>,
    pub tooltip: String,
    pub color: &'static str,
}

/// Runs filter, day bucketing and per-day reduction for one mode.
///
/// `reference` stands for "now"; the window is derived from it on every
/// call and never cached.
pub fn build_heatmap(
    submissions: &[Submission],
    mode: ShowMode,
    collaborators: &Collaborators<'_>,
    reference: DateTime<Utc>,
    offset: FixedOffset,
) -> HeatmapTable {
    let strategy = mode.strategy();
    let filtered = (strategy.filter)(submissions);
    let buckets = bucket_by_day(&filtered, offset);
    let window = build_window(reference, offset);

    let cells: Vec<Cell> = window
        .days()
        .map(|date| Cell {
            date,
            value: buckets
                .get(date)
                .and_then(|day| (strategy.reduce)(day, collaborators)),
        })
        .collect();

    debug!(
        "Built {} heatmap: {} of {} submissions kept over {} days, {} cells with data",
        mode,
        filtered.len(),
        submissions.len(),
        buckets.len(),
        cells.iter().filter(|c| c.value.is_some()).count()
    );

    HeatmapTable {
        mode,
        columns: WEEKS,
        rows: WEEKDAY,
        window,
        cells,
    }
}

pub fn render_cell(
    cell: &Cell,
    strategy: &ModeStrategy,
    collaborators: &Collaborators<'_>,
) -> RenderedCell {
    let (tooltip, color) = match cell.value {
        Some(value) => (
            (strategy.tooltip)(cell.date, value),
            (strategy.color)(value, collaborators),
        ),
        None => (present::format_date(cell.date), EMPTY_CELL_COLOR),
    };
    RenderedCell {
        date: present::format_date(cell.date),
        value: cell.value,
        tooltip,
        color,
    }
}

/// Applies the mode's tooltip and color mapping to every cell.
pub fn render_heatmap(table: &HeatmapTable, collaborators: &Collaborators<'_>) -> Vec<RenderedCell> {
    let strategy = table.mode.strategy();
    table
        .cells
        .iter()
        .map(|cell| render_cell(cell, &strategy, collaborators))
        .collect()
}
