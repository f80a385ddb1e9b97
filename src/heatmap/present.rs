use chrono::NaiveDate;

use crate::config::{COLORS_COUNT, COLORS_TEE, TEE_COLOR_RATIO, TEE_DIGIT};
use crate::mode::ShowMode;

use super::Collaborators;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub fn format_tooltip(date: NaiveDate, value: f64, mode: ShowMode) -> String {
    (mode.strategy().tooltip)(date, value)
}

pub fn select_color(value: f64, mode: ShowMode, collaborators: &Collaborators<'_>) -> &'static str {
    (mode.strategy().color)(value, collaborators)
}

fn format_count_tooltip(date: NaiveDate, count: f64, mode: ShowMode) -> String {
    let date = format_date(date);
    match mode {
        ShowMode::AllSubmissions if count == 1.0 => format!("{} {} submission", date, count),
        ShowMode::AllSubmissions => format!("{} {} submissions", date, count),
        _ => format!("{} {} {}", date, count, mode.label()),
    }
}

pub fn submissions_tooltip(date: NaiveDate, count: f64) -> String {
    format_count_tooltip(date, count, ShowMode::AllSubmissions)
}

pub fn ac_tooltip(date: NaiveDate, count: f64) -> String {
    format_count_tooltip(date, count, ShowMode::AllAccepted)
}

pub fn unique_ac_tooltip(date: NaiveDate, count: f64) -> String {
    format_count_tooltip(date, count, ShowMode::UniqueAccepted)
}

pub fn max_difficulty_tooltip(date: NaiveDate, difficulty: f64) -> String {
    if difficulty >= 0.0 {
        format!("{} Max Difficulty: {}", format_date(date), difficulty)
    } else {
        format!("{} Max Difficulty: -", format_date(date))
    }
}

/// Ties round away from zero (`0.125` shows as `0.13`).
pub fn tee_tooltip(date: NaiveDate, tee: f64) -> String {
    let scale = 10f64.powi(TEE_DIGIT as i32);
    let rounded = (tee * scale).round() / scale;
    format!("{} TEE: {:.*}", format_date(date), TEE_DIGIT, rounded)
}

pub fn count_color(count: f64, _collaborators: &Collaborators<'_>) -> &'static str {
    let band = (count.max(0.0) as usize).min(COLORS_COUNT.len() - 1);
    COLORS_COUNT[band]
}

pub fn difficulty_color(difficulty: f64, collaborators: &Collaborators<'_>) -> &'static str {
    (collaborators.rating_color)(difficulty)
}

/// Band 0 is kept for empty days, so any present effort lands on band 1+.
pub fn tee_color(tee: f64, _collaborators: &Collaborators<'_>) -> &'static str {
    let band = ((tee / TEE_COLOR_RATIO).floor().max(0.0) as usize + 1).min(COLORS_TEE.len() - 1);
    COLORS_TEE[band]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ProblemIndex;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 9).unwrap()
    }

    #[test]
    fn test_submission_tooltip_pluralization() {
        assert_eq!(submissions_tooltip(day(), 1.0), "2024-03-09 1 submission");
        assert_eq!(submissions_tooltip(day(), 3.0), "2024-03-09 3 submissions");
    }

    #[test]
    fn test_ac_tooltips_use_mode_label() {
        assert_eq!(ac_tooltip(day(), 1.0), "2024-03-09 1 AC");
        assert_eq!(unique_ac_tooltip(day(), 2.0), "2024-03-09 2 Unique AC");
    }

    #[test]
    fn test_max_difficulty_tooltip_hides_negative() {
        assert_eq!(
            max_difficulty_tooltip(day(), 1200.0),
            "2024-03-09 Max Difficulty: 1200"
        );
        assert_eq!(
            max_difficulty_tooltip(day(), -1.0),
            "2024-03-09 Max Difficulty: -"
        );
    }

    #[test]
    fn test_tee_tooltip_two_decimals() {
        assert_eq!(tee_tooltip(day(), 123.456), "2024-03-09 TEE: 123.46");
        assert_eq!(tee_tooltip(day(), 60.0), "2024-03-09 TEE: 60.00");
    }

    #[test]
    fn test_tee_tooltip_rounds_ties_up() {
        assert_eq!(tee_tooltip(day(), 0.125), "2024-03-09 TEE: 0.13");
        assert_eq!(tee_tooltip(day(), 2.5), "2024-03-09 TEE: 2.50");
    }

    #[test]
    fn test_count_color_clamps_to_last_band() {
        let problems = ProblemIndex::new();
        let c = Collaborators::new(&problems);
        assert_eq!(count_color(1.0, &c), "#c6e48b");
        assert_eq!(count_color(4.0, &c), "#196127");
        assert_eq!(count_color(40.0, &c), "#196127");
    }

    #[test]
    fn test_tee_color_bands() {
        let problems = ProblemIndex::new();
        let c = Collaborators::new(&problems);
        assert_eq!(tee_color(0.5, &c), COLORS_TEE[1]);
        assert_eq!(tee_color(179.9, &c), COLORS_TEE[1]);
        assert_eq!(tee_color(180.0, &c), COLORS_TEE[2]);
        assert_eq!(tee_color(720.0, &c), COLORS_TEE[5]);
        assert_eq!(tee_color(10_000.0, &c), COLORS_TEE[5]);
    }

    #[test]
    fn test_difficulty_color_delegates_to_rating_color() {
        let problems = ProblemIndex::new();
        let c = Collaborators::new(&problems);
        assert_eq!(difficulty_color(1600.0, &c), "#0000FF");
        assert_eq!(difficulty_color(-1.0, &c), "#000000");
    }
}
