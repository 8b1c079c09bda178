//! Student-to-university matching: profile validation, filtering, grant estimation,
//! match scoring, and ranking.
//!
//! Every stage is a pure function over the catalog snapshot and a validated
//! [`StudentProfile`], so requests can run concurrently without coordination.

pub mod domain;
pub(crate) mod explain;
pub mod filter;
pub mod grant;
pub mod guard;
pub mod matching;
pub mod ranker;
pub mod router;
pub mod scorer;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    Budget, ExplainedRecommendation, GrantChance, GrantEstimate, RecommendationResult,
    StudentProfile,
};
pub use explain::{Explainer, TemplateExplainer};
pub use filter::{CriteriaFilter, Rejection};
pub use grant::{estimate_grant_chance, DEFAULT_GRANT_QUOTA};
pub use guard::{ProfileGuard, ProfileViolation, RecommendationRequest, MAX_ENT_SCORE};
pub use matching::SpecialtyMatcher;
pub use ranker::{RecommendationConfig, RecommendationEngine};
pub use router::{recommendation_router, CompareRequest};
pub use scorer::{match_score, score_breakdown, ScoreBreakdown};
pub use service::{RecommendationService, RecommendationServiceError};
