use crate::cli::ServeArgs;
use crate::infra::{standard_service, AppState};
use crate::routes::with_recommendation_routes;
use autogenius::config::AppConfig;
use autogenius::error::AppError;
use autogenius::telemetry;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::{debug, info};

pub(crate) async fn run(args: ServeArgs) -> Result<(), AppError> {
    let config = with_flag_overrides(AppConfig::load()?, args);
    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let service = standard_service();
    let catalog_size = service.catalog().len();
    debug!(catalog_size, "showroom catalog loaded");

    let app = with_recommendation_routes(service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, catalog_size, "autogenius accepting recommendation requests");

    axum::serve(listener, app).await?;
    Ok(())
}

/// `--host`/`--port` win over the environment.
fn with_flag_overrides(mut config: AppConfig, args: ServeArgs) -> AppConfig {
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    config
}
