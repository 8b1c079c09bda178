use serde::{Deserialize, Serialize};
use tracing::debug;

use super::domain::{RecommendationResult, StudentProfile};
use super::filter::CriteriaFilter;
use super::grant::{estimate_grant_chance, DEFAULT_GRANT_QUOTA};
use super::matching::SpecialtyMatcher;
use super::scorer::match_score;
use crate::catalog::{Program, University};

/// Ranking knobs for the recommendation pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationConfig {
    /// Points below a university's floor that are still admitted.
    pub score_tolerance: u16,
    pub max_results: usize,
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self {
            score_tolerance: 5,
            max_results: 5,
        }
    }
}

/// Stateless pipeline: filter, assess each candidate, sort, truncate.
#[derive(Debug, Clone, Default)]
pub struct RecommendationEngine {
    config: RecommendationConfig,
}

impl RecommendationEngine {
    pub fn new(config: RecommendationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RecommendationConfig {
        &self.config
    }

    pub fn recommend(
        &self,
        universities: &[University],
        profile: &StudentProfile,
    ) -> Vec<RecommendationResult> {
        let matcher = SpecialtyMatcher::new(&profile.preferred_specialties);
        let filter = CriteriaFilter::new(profile, &matcher, self.config.score_tolerance);
        let candidates = filter.apply(universities);

        debug!(
            catalog = universities.len(),
            candidates = candidates.len(),
            "filtered catalog"
        );

        let mut results: Vec<RecommendationResult> = candidates
            .into_iter()
            .map(|university| assess(university, profile, &matcher))
            .collect();

        // `sort_by` is stable, so equal scores keep catalog order.
        results.sort_by(|a, b| b.match_score.total_cmp(&a.match_score));
        results.truncate(self.config.max_results);
        results
    }
}

fn assess(
    university: &University,
    profile: &StudentProfile,
    matcher: &SpecialtyMatcher,
) -> RecommendationResult {
    let matched: Vec<&Program> = university
        .programs
        .iter()
        .filter(|program| matcher.matches(program))
        .collect();

    let estimate = match best_program(&matched) {
        Some(program) => estimate_grant_chance(
            profile.ent_score,
            program.min_ent_score,
            program.grant_percent,
        ),
        None => estimate_grant_chance(
            profile.ent_score,
            university.min_ent_score,
            DEFAULT_GRANT_QUOTA,
        ),
    };

    // Scoring weighs every matching program; the displayed names are de-duplicated.
    let match_score = match_score(
        profile.ent_score,
        university.min_ent_score,
        university.rating,
        matched.len(),
    );

    let mut matching_specialties: Vec<String> = Vec::with_capacity(matched.len());
    for program in &matched {
        if !matching_specialties.contains(&program.name) {
            matching_specialties.push(program.name.clone());
        }
    }

    RecommendationResult {
        university: university.clone(),
        match_score,
        grant_chance: estimate.chance,
        grant_percentage: estimate.percentage,
        matching_specialties,
    }
}

/// Matching program with the highest threshold; the first one wins ties.
pub(crate) fn best_program<'p>(matched: &[&'p Program]) -> Option<&'p Program> {
    matched.iter().copied().fold(None, |best, program| match best {
        Some(current) if current.min_ent_score >= program.min_ent_score => Some(current),
        _ => Some(program),
    })
}
