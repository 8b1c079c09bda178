use std::path::PathBuf;
use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::catalog::{
    Catalog, CatalogError, CatalogProvider, Dormitory, Program, StaticCatalog, University,
};
use crate::recommendation::domain::{Budget, StudentProfile};
use crate::recommendation::guard::RecommendationRequest;
use crate::recommendation::{
    recommendation_router, RecommendationConfig, RecommendationEngine, RecommendationService,
};

pub(crate) fn profile(
    ent_score: Option<u16>,
    city: Option<&str>,
    specialties: &[&str],
    budget: Budget,
) -> StudentProfile {
    StudentProfile {
        ent_score,
        preferred_city: city.map(str::to_string),
        preferred_specialties: specialties.iter().map(|s| s.to_string()).collect(),
        budget,
    }
}

pub(crate) fn program(
    name: &str,
    min_ent_score: u16,
    grant_available: bool,
    grant_percent: u8,
) -> Program {
    Program {
        name: name.to_string(),
        code: None,
        group_code: None,
        duration: "4 years".to_string(),
        cost_per_year: Some(1_500_000.0),
        grant_available,
        grant_percent,
        min_ent_score,
    }
}

pub(crate) fn university(
    id: u32,
    city: &str,
    min_ent_score: u16,
    rating: Option<f64>,
    programs: Vec<Program>,
) -> University {
    University {
        id,
        name: format!("University {id}"),
        city: city.to_string(),
        kind: "national".to_string(),
        description: "Fixture university".to_string(),
        min_ent_score,
        programs,
        dormitory: Dormitory {
            available: true,
            cost_per_month: Some(30_000.0),
        },
        website: None,
        tour_images: Vec::new(),
        partnerships: Vec::new(),
        rating,
    }
}

pub(crate) fn university_with_program(
    id: u32,
    city: &str,
    program_name: &str,
    min_ent_score: u16,
    grant_available: bool,
    grant_percent: u8,
) -> University {
    university(
        id,
        city,
        min_ent_score,
        Some(4.0),
        vec![program(program_name, min_ent_score, grant_available, grant_percent)],
    )
}

/// Mixed catalog: two Almaty and two Astana universities plus one in Shymkent.
pub(crate) fn sample_catalog() -> Vec<University> {
    vec![
        university(
            1,
            "Almaty",
            80,
            Some(4.6),
            vec![
                program("IT Systems", 80, true, 40),
                program("Law", 75, false, 0),
            ],
        ),
        university(
            2,
            "Astana",
            70,
            Some(4.0),
            vec![
                program("Software Engineering and IT", 72, true, 60),
                program("Pedagogy", 65, true, 70),
            ],
        ),
        university(
            3,
            "Almaty",
            95,
            Some(4.9),
            vec![program("Medicine", 100, true, 20)],
        ),
        university(
            4,
            "Astana",
            60,
            None,
            vec![program("Economics", 60, false, 0)],
        ),
        university(
            5,
            "Shymkent",
            55,
            Some(2.5),
            vec![program("Agronomy", 55, true, 80)],
        ),
    ]
}

pub(crate) fn grant_request() -> RecommendationRequest {
    RecommendationRequest {
        ent_score: Some(90),
        preferred_city: Some("Almaty".to_string()),
        preferred_specialties: Some(vec!["IT".to_string()]),
        budget: Some("grant".to_string()),
    }
}

pub(crate) fn engine() -> RecommendationEngine {
    RecommendationEngine::new(RecommendationConfig::default())
}

pub(crate) fn static_catalog(universities: Vec<University>) -> Arc<StaticCatalog> {
    Arc::new(StaticCatalog::new(Catalog::from_universities(universities)))
}

pub(crate) fn build_service() -> RecommendationService<StaticCatalog> {
    RecommendationService::new(
        static_catalog(sample_catalog()),
        RecommendationConfig::default(),
    )
}

pub(crate) fn recommendation_router_with_service<C>(
    service: RecommendationService<C>,
) -> axum::Router
where
    C: CatalogProvider + 'static,
{
    recommendation_router(Arc::new(service))
}

pub(crate) struct UnavailableCatalog;

impl CatalogProvider for UnavailableCatalog {
    fn load(&self) -> Result<Arc<Catalog>, CatalogError> {
        Err(CatalogError::Unavailable {
            path: PathBuf::from("data/universities.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        })
    }
}

pub(crate) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
