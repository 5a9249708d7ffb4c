use autogenius::workflows::recommendations::{RecommendationService, VehicleCatalog};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Recommendation service over the built-in showroom inventory.
pub(crate) fn standard_service() -> Arc<RecommendationService<VehicleCatalog>> {
    Arc::new(RecommendationService::new(Arc::new(
        VehicleCatalog::standard(),
    )))
}
