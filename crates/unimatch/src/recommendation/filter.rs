use tracing::debug;

use super::domain::{Budget, StudentProfile};
use super::matching::SpecialtyMatcher;
use crate::catalog::University;

/// First admissibility rule a university failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    ScoreBelowTolerance { ent_score: u16, min_ent_score: u16 },
    CityMismatch,
    NoMatchingSpecialty,
    NoGrantPrograms,
}

/// Reduces the catalog to universities satisfying every stated criterion.
pub struct CriteriaFilter<'a> {
    profile: &'a StudentProfile,
    matcher: &'a SpecialtyMatcher,
    city: Option<String>,
    score_tolerance: u16,
}

impl<'a> CriteriaFilter<'a> {
    pub fn new(
        profile: &'a StudentProfile,
        matcher: &'a SpecialtyMatcher,
        score_tolerance: u16,
    ) -> Self {
        Self {
            profile,
            matcher,
            city: profile.preferred_city.as_deref().map(str::to_lowercase),
            score_tolerance,
        }
    }

    pub fn check(&self, university: &University) -> Result<(), Rejection> {
        if let Some(ent_score) = self.profile.ent_score {
            let floor = i32::from(university.min_ent_score) - i32::from(self.score_tolerance);
            if i32::from(ent_score) < floor {
                return Err(Rejection::ScoreBelowTolerance {
                    ent_score,
                    min_ent_score: university.min_ent_score,
                });
            }
        }

        if let Some(city) = &self.city {
            if university.city.to_lowercase() != *city {
                return Err(Rejection::CityMismatch);
            }
        }

        if !self.matcher.is_empty() && !self.matcher.any_match(&university.programs) {
            return Err(Rejection::NoMatchingSpecialty);
        }

        if self.profile.budget == Budget::Grant && !university.offers_grants() {
            return Err(Rejection::NoGrantPrograms);
        }

        Ok(())
    }

    /// Candidates in catalog order.
    pub fn apply<'c>(&self, universities: &'c [University]) -> Vec<&'c University> {
        universities
            .iter()
            .filter(|university| match self.check(university) {
                Ok(()) => true,
                Err(reason) => {
                    debug!(university_id = university.id, ?reason, "university filtered out");
                    false
                }
            })
            .collect()
    }
}
