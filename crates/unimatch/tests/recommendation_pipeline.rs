//! End-to-end recommendation scenarios over the bundled catalog.
//!
//! Everything goes through the public service facade and HTTP router, the same
//! surface the API binary mounts.

mod common {
    use std::path::PathBuf;
    use std::sync::Arc;

    use unimatch::catalog::{JsonFileCatalog, StaticCatalog};
    use unimatch::recommendation::{RecommendationConfig, RecommendationService};

    pub(super) fn bundled_catalog_path() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data/universities.json")
    }

    pub(super) fn service() -> RecommendationService<StaticCatalog> {
        let catalog = StaticCatalog::preload(&JsonFileCatalog::new(bundled_catalog_path()))
            .expect("bundled catalog loads");
        RecommendationService::new(Arc::new(catalog), RecommendationConfig::default())
    }
}

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use unimatch::recommendation::{
    recommendation_router, GrantChance, RecommendationRequest, RecommendationServiceError,
};

fn request(
    ent_score: Option<i64>,
    city: Option<&str>,
    specialties: &[&str],
    budget: &str,
) -> RecommendationRequest {
    RecommendationRequest {
        ent_score,
        preferred_city: city.map(str::to_string),
        preferred_specialties: Some(specialties.iter().map(|s| s.to_string()).collect()),
        budget: Some(budget.to_string()),
    }
}

#[test]
fn grant_seeker_gets_funded_information_systems_programs() {
    let service = common::service();

    let recommendations = service
        .recommend(request(Some(92), None, &["information"], "grant"))
        .expect("ranked");

    let ids: Vec<u32> = recommendations
        .iter()
        .map(|r| r.result.university.id)
        .collect();
    assert_eq!(ids, vec![6, 2], "paid-only KBTU is excluded for grant seekers");

    let karaganda = &recommendations[0].result;
    assert_eq!(karaganda.match_score, 76.0);
    assert_eq!(karaganda.grant_chance, GrantChance::High);
    assert_eq!(karaganda.grant_percentage, 95.0);

    let satbayev = &recommendations[1].result;
    assert_eq!(satbayev.match_score, 75.0);
    assert_eq!(satbayev.grant_percentage, 85.0);
    assert_eq!(
        satbayev.matching_specialties,
        vec!["Information Systems".to_string()]
    );
}

#[test]
fn group_code_matches_programs_within_city() {
    let service = common::service();

    let recommendations = service
        .recommend(request(Some(100), Some("almaty"), &["B057"], "any"))
        .expect("ranked");

    let ids: Vec<u32> = recommendations
        .iter()
        .map(|r| r.result.university.id)
        .collect();
    assert_eq!(ids, vec![2, 1, 7]);
    assert_eq!(recommendations[0].result.match_score, 80.0);
    assert_eq!(recommendations[1].result.match_score, 78.0);
    assert_eq!(
        recommendations[1].result.matching_specialties,
        vec!["Computer Science".to_string()]
    );
    assert_eq!(recommendations[1].result.grant_chance, GrantChance::High);
}

#[test]
fn missing_score_ranks_by_rating_with_unknown_chances() {
    let service = common::service();

    let recommendations = service
        .recommend(request(None, Some("Astana"), &[], "any"))
        .expect("ranked");

    let ids: Vec<u32> = recommendations
        .iter()
        .map(|r| r.result.university.id)
        .collect();
    assert_eq!(ids, vec![4, 3]);
    assert_eq!(recommendations[0].result.match_score, 36.0);
    assert_eq!(recommendations[1].result.match_score, 34.0);
    assert!(recommendations
        .iter()
        .all(|r| r.result.grant_chance == GrantChance::Unknown && r.result.grant_percentage == 0.0));
}

#[test]
fn open_profile_is_capped_at_five_results() {
    let service = common::service();

    let recommendations = service
        .recommend(RecommendationRequest::default())
        .expect("ranked");

    assert_eq!(recommendations.len(), 5);
    for pair in recommendations.windows(2) {
        assert!(pair[0].result.match_score >= pair[1].result.match_score);
    }
}

#[test]
fn out_of_range_score_is_rejected() {
    let service = common::service();

    match service.recommend(request(Some(141), None, &[], "any")) {
        Err(RecommendationServiceError::InvalidProfile(_)) => {}
        other => panic!("expected invalid profile, got {other:?}"),
    }
}

#[tokio::test]
async fn recommend_endpoint_serves_bundled_catalog() {
    let router = recommendation_router(Arc::new(common::service()));

    let response = router
        .oneshot(
            Request::post("/api/recommend")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    json!({
                        "ent_score": 92,
                        "preferred_specialties": ["information"],
                        "budget": "grant"
                    })
                    .to_string(),
                ))
                .expect("request builds"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), 256 * 1024)
        .await
        .expect("read body");
    let payload: Value = serde_json::from_slice(&bytes).expect("json payload");

    assert_eq!(payload["success"], json!(true));
    assert_eq!(payload["total_found"], json!(2));
    let top = &payload["recommendations"][0];
    assert_eq!(top["university"]["name"], json!("Karaganda Technical University"));
    assert_eq!(top["grant_chance"], json!("High"));
    assert!(top["explanation"]
        .as_str()
        .expect("explanation text")
        .starts_with("Karaganda Technical University fits you because"));
}
