use serde::{Deserialize, Serialize};

/// Study program offered by a university.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Program {
    pub name: String,
    #[serde(default)]
    pub code: Option<String>,
    /// Program cluster identifier used for grant eligibility.
    #[serde(default)]
    pub group_code: Option<String>,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub cost_per_year: Option<f64>,
    #[serde(default)]
    pub grant_available: bool,
    /// Share of seats funded by grants, 0-100.
    #[serde(default)]
    pub grant_percent: u8,
    pub min_ent_score: u16,
}

/// Dormitory availability for a university.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dormitory {
    pub available: bool,
    #[serde(default)]
    pub cost_per_month: Option<f64>,
}

/// Reference record describing a university and its programs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct University {
    pub id: u32,
    pub name: String,
    pub city: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub description: String,
    /// Institution-wide admission floor, used when no program matches.
    pub min_ent_score: u16,
    pub programs: Vec<Program>,
    #[serde(default)]
    pub dormitory: Dormitory,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub tour_images: Vec<String>,
    #[serde(default)]
    pub partnerships: Vec<String>,
    #[serde(default)]
    pub rating: Option<f64>,
}

impl University {
    pub fn offers_grants(&self) -> bool {
        self.programs.iter().any(|program| program.grant_available)
    }
}
