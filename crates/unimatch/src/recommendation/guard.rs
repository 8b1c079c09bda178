use serde::{Deserialize, Serialize};

use super::domain::{Budget, StudentProfile};

/// Highest attainable ENT score.
pub const MAX_ENT_SCORE: u16 = 140;

/// Inbound request as submitted by a client, before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationRequest {
    #[serde(default)]
    pub ent_score: Option<i64>,
    #[serde(default)]
    pub preferred_city: Option<String>,
    #[serde(default)]
    pub preferred_specialties: Option<Vec<String>>,
    #[serde(default)]
    pub budget: Option<String>,
}

/// Validation errors raised by the profile guard.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProfileViolation {
    #[error("ent_score must be between 0 and {max} (found {found})")]
    EntScoreOutOfRange { found: i64, max: u16 },
    #[error("budget must be one of grant, paid, any (found '{0}')")]
    UnknownBudget(String),
}

/// Guard responsible for producing `StudentProfile` instances.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProfileGuard;

impl ProfileGuard {
    /// Convert an inbound request into a validated, normalized profile.
    pub fn profile_from_request(
        &self,
        request: RecommendationRequest,
    ) -> Result<StudentProfile, ProfileViolation> {
        let ent_score = match request.ent_score {
            Some(score) if (0..=i64::from(MAX_ENT_SCORE)).contains(&score) => Some(score as u16),
            Some(found) => {
                return Err(ProfileViolation::EntScoreOutOfRange {
                    found,
                    max: MAX_ENT_SCORE,
                })
            }
            None => None,
        };

        let budget = match request.budget {
            Some(raw) => Budget::parse(&raw).ok_or(ProfileViolation::UnknownBudget(raw))?,
            None => Budget::Any,
        };

        let preferred_city = request
            .preferred_city
            .map(|city| city.trim().to_string())
            .filter(|city| !city.is_empty());

        let preferred_specialties =
            normalize_specialties(request.preferred_specialties.unwrap_or_default());

        Ok(StudentProfile {
            ent_score,
            preferred_city,
            preferred_specialties,
            budget,
        })
    }
}

fn normalize_specialties(raw: Vec<String>) -> Vec<String> {
    let mut seen = Vec::new();
    let mut specialties = Vec::new();

    for specialty in raw {
        let trimmed = specialty.trim();
        if trimmed.is_empty() {
            continue;
        }
        let key = trimmed.to_lowercase();
        if seen.contains(&key) {
            continue;
        }
        seen.push(key);
        specialties.push(trimmed.to_string());
    }

    specialties
}
