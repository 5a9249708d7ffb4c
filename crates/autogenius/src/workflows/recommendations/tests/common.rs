use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::workflows::recommendations::catalog::{CatalogStore, VehicleCatalog};
use crate::workflows::recommendations::domain::{RecommendedVehicle, Vehicle, VehicleCategory};
use crate::workflows::recommendations::preferences::{
    BudgetRange, FuelPreference, MaintenancePriority, PreferencesRequest, UserPreferences,
};
use crate::workflows::recommendations::{recommendation_router, RecommendationService};

pub(super) fn catalog() -> VehicleCatalog {
    VehicleCatalog::standard()
}

pub(super) fn budget(min: u32, max: u32) -> UserPreferences {
    UserPreferences::with_budget(BudgetRange::new(min, max).expect("valid budget"))
}

pub(super) fn preferences(
    min: u32,
    max: u32,
    car_types: &[VehicleCategory],
    fuel: FuelPreference,
) -> UserPreferences {
    UserPreferences::new(
        BudgetRange::new(min, max).expect("valid budget"),
        car_types.iter().copied(),
        Vec::new(),
        fuel,
        MaintenancePriority::Balanced,
    )
}

pub(super) fn request(min: u32, max: u32) -> PreferencesRequest {
    PreferencesRequest {
        budget: [min, max],
        car_type: Vec::new(),
        usage: vec!["city".to_string()],
        fuel_preference: "any".to_string(),
        maintenance_priority: "balanced".to_string(),
    }
}

pub(super) fn names(recommendations: &[RecommendedVehicle]) -> Vec<&str> {
    recommendations
        .iter()
        .map(|entry| entry.vehicle.name.as_str())
        .collect()
}

/// Catalog with no vehicles at all.
#[derive(Default)]
pub(super) struct EmptyCatalog;

impl CatalogStore for EmptyCatalog {
    fn vehicles(&self) -> &[Vehicle] {
        &[]
    }
}

pub(super) fn build_service() -> RecommendationService<VehicleCatalog> {
    RecommendationService::new(Arc::new(catalog()))
}

pub(super) fn router_with_service(service: RecommendationService<VehicleCatalog>) -> axum::Router {
    recommendation_router(Arc::new(service))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
