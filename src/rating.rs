use serde::Serialize;

/// Color tier of a rating (or of a difficulty on the same scale).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RatingColor {
    Black,
    Grey,
    Brown,
    Green,
    Cyan,
    Blue,
    Yellow,
    Orange,
    Red,
}

const RATING_COLORS: [RatingColor; 8] = [
    RatingColor::Grey,
    RatingColor::Brown,
    RatingColor::Green,
    RatingColor::Cyan,
    RatingColor::Blue,
    RatingColor::Yellow,
    RatingColor::Orange,
    RatingColor::Red,
];

const RATING_STEP: f64 = 400.0;

/// 400-point tiers starting at Grey; everything from 2800 up is Red and
/// negative values are Black.
pub fn rating_color(rating: f64) -> RatingColor {
    if rating.is_nan() || rating < 0.0 {
        return RatingColor::Black;
    }
    let index = ((rating / RATING_STEP).floor() as usize).min(RATING_COLORS.len() - 1);
    RATING_COLORS[index]
}

impl RatingColor {
    pub fn code(self) -> &'static str {
        match self {
            RatingColor::Black => "#000000",
            RatingColor::Grey => "#808080",
            RatingColor::Brown => "#804000",
            RatingColor::Green => "#008000",
            RatingColor::Cyan => "#00C0C0",
            RatingColor::Blue => "#0000FF",
            RatingColor::Yellow => "#C0C000",
            RatingColor::Orange => "#FF8000",
            RatingColor::Red => "#FF0000",
        }
    }
}

/// Default rating-to-color mapping used for the max difficulty grid.
pub fn rating_color_code(rating: f64) -> &'static str {
    rating_color(rating).code()
}
