//! Catalog matching for the car-buying questionnaire.
//!
//! The engine is a pure function over an immutable catalog; the questionnaire
//! state machine is the only place preferences are assembled.

pub mod catalog;
pub mod comparison;
pub mod domain;
pub mod engine;
pub mod preferences;
pub mod questionnaire;
pub mod report;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use catalog::{CatalogStore, VehicleCatalog};
pub use comparison::{format_usd, ComparisonSelection, ComparisonTable};
pub use domain::{
    Badge, CostOfOwnership, MaintenanceTier, RecommendedVehicle, Vehicle, VehicleCategory,
    VehicleId, VehicleSpecs,
};
pub use engine::{recommend, RecommendationEngine, RESULT_LIMIT};
pub use preferences::{
    BudgetRange, FuelPreference, MaintenancePriority, PreferencesError, PreferencesRequest,
    UsageIntent, UserPreferences,
};
pub use questionnaire::{
    PreferenceDraft, Questionnaire, QuestionnaireError, QuestionnaireEvent, QuestionnaireStep,
};
pub use report::RecommendationReport;
pub use router::recommendation_router;
pub use service::{
    ComparisonRequest, QuestionnaireOutcome, QuestionnaireRequest, RecommendationService,
    RecommendationServiceError,
};
