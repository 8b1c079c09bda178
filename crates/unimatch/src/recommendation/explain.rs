use super::domain::{GrantChance, RecommendationResult, StudentProfile};

/// Produces explanation text for a ranked university.
///
/// Explanations annotate a result; they never influence ranking.
pub trait Explainer: Send + Sync {
    fn explain(&self, profile: &StudentProfile, result: &RecommendationResult) -> String;
}

/// Deterministic explainer assembled from the scored facts.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateExplainer;

impl Explainer for TemplateExplainer {
    fn explain(&self, profile: &StudentProfile, result: &RecommendationResult) -> String {
        let university = &result.university;
        let mut reasons = Vec::new();

        if let Some(ent_score) = profile.ent_score {
            let relation = if ent_score >= university.min_ent_score {
                "meets"
            } else {
                "is just below"
            };
            reasons.push(format!(
                "your ENT score ({ent_score}) {relation} the minimum ({})",
                university.min_ent_score
            ));
        }

        if !result.matching_specialties.is_empty() {
            reasons.push(format!(
                "it offers {}",
                result.matching_specialties.join(", ")
            ));
        }

        if result.grant_chance != GrantChance::Unknown {
            reasons.push(format!(
                "your grant chances are {}",
                result.grant_chance.label().to_lowercase()
            ));
        }

        if reasons.is_empty() {
            format!("{} is a good choice for your profile.", university.name)
        } else {
            format!("{} fits you because {}.", university.name, reasons.join("; "))
        }
    }
}
