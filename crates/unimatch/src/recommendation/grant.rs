use super::domain::{round_one_decimal, GrantChance, GrantEstimate};

/// Quota assumed when no program matched the requested specialties.
pub const DEFAULT_GRANT_QUOTA: u8 = 50;

const SCARCE_QUOTA_BELOW: u8 = 30;
const ABUNDANT_QUOTA_ABOVE: u8 = 50;

/// Estimate the chance of a grant seat from the score margin and the program's funded share.
pub fn estimate_grant_chance(
    ent_score: Option<u16>,
    program_min_score: u16,
    grant_percent: u8,
) -> GrantEstimate {
    let Some(ent_score) = ent_score else {
        return GrantEstimate::UNKNOWN;
    };

    let diff = i32::from(ent_score) - i32::from(program_min_score);
    let adjusted = base_percentage(diff) * quota_multiplier(grant_percent);
    let percentage = round_one_decimal(adjusted.clamp(0.0, 100.0));

    GrantEstimate {
        chance: GrantChance::from_percentage(percentage),
        percentage,
    }
}

fn base_percentage(diff: i32) -> f64 {
    match diff {
        d if d >= 20 => 95.0,
        d if d >= 10 => 85.0,
        d if d >= 5 => 70.0,
        d if d >= 0 => 50.0,
        d if d >= -5 => 25.0,
        _ => 10.0,
    }
}

fn quota_multiplier(grant_percent: u8) -> f64 {
    if grant_percent < SCARCE_QUOTA_BELOW {
        0.85
    } else if grant_percent > ABUNDANT_QUOTA_ABOVE {
        1.10
    } else {
        1.0
    }
}
