use serde::Serialize;

use super::domain::round_one_decimal;

const SCORE_FIT_WITHOUT_SCORE: f64 = 20.0;
const POINTS_PER_MATCHING_PROGRAM: f64 = 15.0;
const SPECIALTY_CAP: f64 = 30.0;
const RATING_FLOOR: f64 = 3.0;
const RATING_SPAN: f64 = 2.0;
const RATING_WEIGHT: f64 = 20.0;
const RATING_WITHOUT_BONUS: f64 = 5.0;

/// Per-component contributions to a match score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    /// Score proximity, up to 50.
    pub score_fit: f64,
    /// Matching programs, up to 30.
    pub specialty_match: f64,
    /// Institutional rating, up to 20.
    pub rating: f64,
    /// Clamped, one-decimal composite.
    pub total: f64,
}

pub fn score_breakdown(
    ent_score: Option<u16>,
    university_min_score: u16,
    rating: Option<f64>,
    matching_program_count: usize,
) -> ScoreBreakdown {
    let score_fit = score_fit(ent_score, university_min_score);
    let specialty_match =
        (matching_program_count as f64 * POINTS_PER_MATCHING_PROGRAM).min(SPECIALTY_CAP);
    let rating = rating_bonus(rating);

    let total = round_one_decimal((score_fit + specialty_match + rating).clamp(0.0, 100.0));

    ScoreBreakdown {
        score_fit,
        specialty_match,
        rating,
        total,
    }
}

/// Composite fit score in [0, 100], rounded to one decimal place.
pub fn match_score(
    ent_score: Option<u16>,
    university_min_score: u16,
    rating: Option<f64>,
    matching_program_count: usize,
) -> f64 {
    score_breakdown(ent_score, university_min_score, rating, matching_program_count).total
}

fn score_fit(ent_score: Option<u16>, university_min_score: u16) -> f64 {
    let Some(ent_score) = ent_score else {
        return SCORE_FIT_WITHOUT_SCORE;
    };

    match i32::from(ent_score) - i32::from(university_min_score) {
        d if d >= 20 => 50.0,
        d if d >= 10 => 45.0,
        d if d >= 5 => 40.0,
        d if d >= 0 => 30.0,
        d if d >= -5 => 15.0,
        _ => 5.0,
    }
}

fn rating_bonus(rating: Option<f64>) -> f64 {
    match rating {
        Some(rating) if rating >= RATING_FLOOR => {
            (rating - RATING_FLOOR) / RATING_SPAN * RATING_WEIGHT
        }
        _ => RATING_WITHOUT_BONUS,
    }
}
