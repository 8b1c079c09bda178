use serde::{Deserialize, Serialize};

use crate::catalog::University;

/// Funding preference stated by the student.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Budget {
    Grant,
    Paid,
    #[default]
    Any,
}

impl Budget {
    pub const fn label(self) -> &'static str {
        match self {
            Budget::Grant => "grant",
            Budget::Paid => "paid",
            Budget::Any => "any",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "grant" => Some(Budget::Grant),
            "paid" => Some(Budget::Paid),
            "any" => Some(Budget::Any),
            _ => None,
        }
    }
}

/// Validated student criteria. Built by the profile guard, immutable afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentProfile {
    pub ent_score: Option<u16>,
    pub preferred_city: Option<String>,
    pub preferred_specialties: Vec<String>,
    pub budget: Budget,
}

/// Coarse bucket describing the likelihood of a state-funded seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GrantChance {
    High,
    Medium,
    Low,
    Unknown,
}

impl GrantChance {
    /// Tier for a known grant percentage. `Unknown` is reserved for missing scores.
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 70.0 {
            GrantChance::High
        } else if percentage >= 40.0 {
            GrantChance::Medium
        } else {
            GrantChance::Low
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            GrantChance::High => "High",
            GrantChance::Medium => "Medium",
            GrantChance::Low => "Low",
            GrantChance::Unknown => "Unknown",
        }
    }
}

/// Output of the grant-chance estimator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GrantEstimate {
    pub chance: GrantChance,
    pub percentage: f64,
}

impl GrantEstimate {
    pub const UNKNOWN: Self = Self {
        chance: GrantChance::Unknown,
        percentage: 0.0,
    };
}

/// A ranked university together with its fit score and funding outlook.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationResult {
    pub university: University,
    pub match_score: f64,
    pub grant_chance: GrantChance,
    pub grant_percentage: f64,
    pub matching_specialties: Vec<String>,
}

/// Recommendation annotated with human-readable explanation text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExplainedRecommendation {
    #[serde(flatten)]
    pub result: RecommendationResult,
    pub explanation: String,
}

pub(crate) fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
