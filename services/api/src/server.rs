use crate::cli::ServeArgs;
use crate::infra::{default_recommendation_config, load_catalog, resolve_catalog_path, AppState};
use crate::routes::with_recommendation_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;
use unimatch::config::AppConfig;
use unimatch::error::AppError;
use unimatch::recommendation::RecommendationService;
use unimatch::telemetry;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }
    config.catalog.path = resolve_catalog_path(args.catalog.take(), &config);

    telemetry::init(&config.telemetry)?;

    // Refuse to start without reference data.
    let catalog = Arc::new(load_catalog(&config.catalog.path)?);

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let service = Arc::new(RecommendationService::new(
        catalog,
        default_recommendation_config(),
    ));

    let app = with_recommendation_routes(service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "university recommendation service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
