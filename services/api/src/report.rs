use crate::cli::{CatalogArgs, RecommendArgs};
use crate::infra::{default_recommendation_config, load_catalog, resolve_catalog_path};
use std::path::PathBuf;
use std::sync::Arc;
use unimatch::catalog::Catalog;
use unimatch::config::AppConfig;
use unimatch::error::AppError;
use unimatch::recommendation::{
    ExplainedRecommendation, GrantChance, RecommendationRequest, RecommendationService,
};
use unimatch::telemetry;

/// Load configuration, install the log subscriber, and pick the catalog file.
pub(crate) fn prepare_command(catalog_override: Option<PathBuf>) -> Result<PathBuf, AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    Ok(resolve_catalog_path(catalog_override, &config))
}

pub(crate) fn run_recommend(args: RecommendArgs) -> Result<(), AppError> {
    let RecommendArgs {
        catalog,
        ent_score,
        city,
        specialties,
        budget,
    } = args;

    let path = prepare_command(catalog)?;
    let catalog = load_catalog(&path)?;
    let service = RecommendationService::new(Arc::new(catalog), default_recommendation_config());

    let request = RecommendationRequest {
        ent_score,
        preferred_city: city,
        preferred_specialties: Some(specialties),
        budget,
    };
    let recommendations = service.recommend(request)?;

    println!("{}", render_recommendations(&recommendations));
    Ok(())
}

pub(crate) fn run_catalog_check(args: CatalogArgs) -> Result<(), AppError> {
    let path = prepare_command(args.catalog)?;
    let catalog = load_catalog(&path)?;

    println!("Catalog: {}", path.display());
    println!("{}", render_catalog_check(catalog.snapshot()));
    Ok(())
}

pub(crate) fn render_recommendations(recommendations: &[ExplainedRecommendation]) -> String {
    if recommendations.is_empty() {
        return "No universities match this profile.".to_string();
    }

    let mut lines = vec![format!("Top {} recommendation(s)", recommendations.len())];
    for (rank, recommendation) in recommendations.iter().enumerate() {
        let result = &recommendation.result;
        lines.push(format!(
            "\n{}. {} ({}) - match {:.1}",
            rank + 1,
            result.university.name,
            result.university.city,
            result.match_score
        ));

        let grant = match result.grant_chance {
            GrantChance::Unknown => "unknown (no ENT score provided)".to_string(),
            chance => format!("{} ({:.1}%)", chance.label(), result.grant_percentage),
        };
        lines.push(format!("   Grant chance: {grant}"));

        if !result.matching_specialties.is_empty() {
            lines.push(format!(
                "   Matching programs: {}",
                result.matching_specialties.join(", ")
            ));
        }
        lines.push(format!("   {}", recommendation.explanation));
    }

    lines.join("\n")
}

pub(crate) fn render_catalog_check(catalog: &Catalog) -> String {
    let mut lines = vec![
        format!("Loaded universities: {}", catalog.len()),
        format!("Skipped records: {}", catalog.skipped().len()),
        format!("Loaded at: {}", catalog.loaded_at().to_rfc3339()),
    ];

    for skipped in catalog.skipped() {
        let id = skipped
            .id
            .map(|id| format!("id {id}"))
            .unwrap_or_else(|| "no id".to_string());
        lines.push(format!(
            "  - position {} ({}): {}",
            skipped.position, id, skipped.reason
        ));
    }

    lines.join("\n")
}
