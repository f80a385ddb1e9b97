use chrono::{DateTime, Datelike, Days, FixedOffset, NaiveDate, Utc};
use serde::Serialize;

use crate::config::WINDOW_DAYS;

/// The trailing range of days shown on the grid.
///
/// `end` is the first Sunday on or after "today" and is exclusive; the grid
/// covers the `WINDOW_DAYS` days before it, so `start` is always a Sunday
/// as well and every column is one Sunday-to-Saturday week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Window {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl Window {
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        self.start.iter_days().take(WINDOW_DAYS)
    }

    pub fn last_day(&self) -> NaiveDate {
        self.end.pred_opt().unwrap_or(self.end)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date < self.end
    }
}

/// Smallest Sunday on or after `date`.
pub fn next_sunday(date: NaiveDate) -> NaiveDate {
    let ahead = (7 - date.weekday().num_days_from_sunday()) % 7;
    date.checked_add_days(Days::new(u64::from(ahead)))
        .unwrap_or(date)
}

pub fn window_ending_after(today: NaiveDate) -> Window {
    let end = next_sunday(today);
    let start = end
        .checked_sub_days(Days::new(WINDOW_DAYS as u64))
        .unwrap_or(NaiveDate::MIN);
    Window { start, end }
}

/// Window for the calendar day that `reference` falls on under `offset`.
pub fn build_window(reference: DateTime<Utc>, offset: FixedOffset) -> Window {
    let today = reference.with_timezone(&offset).date_naive();
    window_ending_after(today)
}
