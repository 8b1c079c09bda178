use metrics_exporter_prometheus::PrometheusHandle;
use std::path::{Path, PathBuf};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::{info, warn};
use unimatch::catalog::{CatalogError, JsonFileCatalog, StaticCatalog};
use unimatch::config::AppConfig;
use unimatch::recommendation::RecommendationConfig;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn default_recommendation_config() -> RecommendationConfig {
    RecommendationConfig::default()
}

/// Command-line override first, then the configured catalog location.
pub(crate) fn resolve_catalog_path(
    cli_override: Option<PathBuf>,
    config: &AppConfig,
) -> PathBuf {
    cli_override.unwrap_or_else(|| config.catalog.path.clone())
}

/// Read the catalog once and pin the snapshot for the lifetime of the process.
pub(crate) fn load_catalog(path: &Path) -> Result<StaticCatalog, CatalogError> {
    let catalog = StaticCatalog::preload(&JsonFileCatalog::new(path))?;

    let snapshot = catalog.snapshot();
    if !snapshot.skipped().is_empty() {
        warn!(
            path = %path.display(),
            skipped = snapshot.skipped().len(),
            "catalog contained malformed records"
        );
    }
    info!(
        path = %path.display(),
        universities = snapshot.len(),
        "catalog loaded"
    );

    Ok(catalog)
}
