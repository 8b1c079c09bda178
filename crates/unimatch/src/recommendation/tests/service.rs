use super::common::*;
use crate::recommendation::domain::{GrantChance, RecommendationResult, StudentProfile};
use crate::recommendation::guard::{ProfileViolation, RecommendationRequest};
use crate::recommendation::{
    Explainer, RecommendationConfig, RecommendationService, RecommendationServiceError,
};
use std::sync::Arc;

struct FixedExplainer;

impl Explainer for FixedExplainer {
    fn explain(&self, _profile: &StudentProfile, result: &RecommendationResult) -> String {
        format!("fixed:{}", result.university.id)
    }
}

#[test]
fn recommend_annotates_ranked_results() {
    let service = build_service();

    let recommendations = service.recommend(grant_request()).expect("ranked");

    assert_eq!(recommendations.len(), 1);
    let top = &recommendations[0];
    assert_eq!(top.result.university.id, 1);
    assert_eq!(top.result.grant_chance, GrantChance::High);
    assert!(top.explanation.starts_with("University 1 fits you because"));
}

#[test]
fn recommend_uses_injected_explainer() {
    let service = RecommendationService::with_explainer(
        static_catalog(sample_catalog()),
        RecommendationConfig::default(),
        Arc::new(FixedExplainer),
    );

    let recommendations = service.recommend(grant_request()).expect("ranked");

    assert_eq!(recommendations[0].explanation, "fixed:1");
}

#[test]
fn recommend_propagates_profile_violations() {
    let service = build_service();
    let mut request = grant_request();
    request.ent_score = Some(150);

    match service.recommend(request) {
        Err(RecommendationServiceError::InvalidProfile(
            ProfileViolation::EntScoreOutOfRange { found: 150, .. },
        )) => {}
        other => panic!("expected invalid profile, got {other:?}"),
    }
}

#[test]
fn recommend_fails_hard_when_catalog_is_unavailable() {
    let service =
        RecommendationService::new(Arc::new(UnavailableCatalog), RecommendationConfig::default());

    match service.recommend(RecommendationRequest::default()) {
        Err(RecommendationServiceError::Catalog(_)) => {}
        other => panic!("expected catalog error, got {other:?}"),
    }
}

#[test]
fn university_lookup_reports_missing_ids() {
    let service = build_service();

    assert_eq!(service.university(3).expect("present").id, 3);
    match service.university(42) {
        Err(RecommendationServiceError::UniversityNotFound(42)) => {}
        other => panic!("expected not found, got {other:?}"),
    }
}

#[test]
fn compare_keeps_request_order_and_skips_unknown_ids() {
    let service = build_service();

    let selected = service.compare(&[4, 99, 1]).expect("comparison");

    let ids: Vec<u32> = selected.iter().map(|u| u.id).collect();
    assert_eq!(ids, vec![4, 1]);
}

#[test]
fn compare_requires_two_ids() {
    let service = build_service();

    match service.compare(&[1]) {
        Err(RecommendationServiceError::ComparisonTooSmall { selected: 1 }) => {}
        other => panic!("expected too small comparison, got {other:?}"),
    }
}

#[test]
fn compare_reports_when_nothing_matches() {
    let service = build_service();

    match service.compare(&[98, 99]) {
        Err(RecommendationServiceError::NothingToCompare) => {}
        other => panic!("expected nothing to compare, got {other:?}"),
    }
}

#[test]
fn catalog_exposes_snapshot() {
    let service = build_service();

    let catalog = service.catalog().expect("catalog available");

    assert_eq!(catalog.len(), 5);
    assert!(catalog.skipped().is_empty());
}
