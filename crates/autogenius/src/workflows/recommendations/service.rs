use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use super::catalog::CatalogStore;
use super::comparison::{ComparisonSelection, ComparisonTable, MAX_SELECTED};
use super::domain::{Vehicle, VehicleId};
use super::engine::RecommendationEngine;
use super::preferences::{PreferencesError, PreferencesRequest, UserPreferences};
use super::questionnaire::{
    DraftSummary, Questionnaire, QuestionnaireError, QuestionnaireEvent, QuestionnaireStep,
    TOTAL_STEPS,
};
use super::report::RecommendationReport;

/// Preferences plus the vehicle ids pinned for comparison.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonRequest {
    pub preferences: PreferencesRequest,
    #[serde(default)]
    pub selected: Vec<VehicleId>,
}

/// Ordered questionnaire interactions replayed from a fresh start.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionnaireRequest {
    pub events: Vec<QuestionnaireEvent>,
}

/// Where a replayed questionnaire ended up.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionnaireOutcome {
    pub step: QuestionnaireStep,
    pub step_number: Option<u8>,
    pub total_steps: u8,
    pub step_label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<DraftSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<RecommendationReport>,
}

/// Service composing the catalog, engine, and questionnaire for the HTTP and CLI surfaces.
pub struct RecommendationService<C> {
    engine: RecommendationEngine<C>,
}

impl<C> RecommendationService<C>
where
    C: CatalogStore + 'static,
{
    pub fn new(catalog: Arc<C>) -> Self {
        Self {
            engine: RecommendationEngine::new(catalog),
        }
    }

    pub fn catalog(&self) -> &[Vehicle] {
        self.engine.catalog().vehicles()
    }

    pub fn vehicle(&self, id: &VehicleId) -> Result<&Vehicle, RecommendationServiceError> {
        self.engine
            .catalog()
            .find(id)
            .ok_or_else(|| RecommendationServiceError::UnknownVehicle(id.clone()))
    }

    /// Ranks the catalog for already validated preferences.
    pub fn report(&self, preferences: &UserPreferences) -> RecommendationReport {
        let recommendations = self.engine.recommend(preferences);
        let report = RecommendationReport::new(preferences, recommendations);
        info!(
            count = report.count,
            badges = report.badges.len(),
            "recommendations generated"
        );
        report
    }

    /// Validates a raw form submission and ranks the catalog against it.
    pub fn recommend(
        &self,
        request: PreferencesRequest,
    ) -> Result<RecommendationReport, RecommendationServiceError> {
        let preferences = UserPreferences::try_from(request)?;
        Ok(self.report(&preferences))
    }

    pub fn compare(
        &self,
        request: ComparisonRequest,
    ) -> Result<ComparisonTable, RecommendationServiceError> {
        let preferences = UserPreferences::try_from(request.preferences)?;
        let recommendations = self.engine.recommend(&preferences);

        let mut selection = ComparisonSelection::new();
        for id in request.selected {
            if !recommendations.iter().any(|entry| entry.id() == &id) {
                return Err(RecommendationServiceError::NotRecommended(id));
            }
            if selection.contains(&id) {
                continue;
            }
            if !selection.toggle(id) {
                return Err(RecommendationServiceError::TooManySelected { max: MAX_SELECTED });
            }
        }

        Ok(ComparisonTable::for_selection(&recommendations, &selection))
    }

    /// Replays questionnaire events; a submitted questionnaire also carries its report.
    pub fn questionnaire(
        &self,
        request: QuestionnaireRequest,
    ) -> Result<QuestionnaireOutcome, RecommendationServiceError> {
        let questionnaire = Questionnaire::replay(request.events)?;
        let step = questionnaire.step();
        let summary = questionnaire.draft().map(|draft| draft.summary());
        let report = questionnaire
            .preferences()
            .map(|preferences| self.report(preferences));

        Ok(QuestionnaireOutcome {
            step,
            step_number: step.number(),
            total_steps: TOTAL_STEPS,
            step_label: step.label(),
            summary,
            report,
        })
    }
}

/// Error raised by the recommendation service.
#[derive(Debug, thiserror::Error)]
pub enum RecommendationServiceError {
    #[error(transparent)]
    Preferences(#[from] PreferencesError),
    #[error(transparent)]
    Questionnaire(#[from] QuestionnaireError),
    #[error("vehicle '{0}' is not in the catalog")]
    UnknownVehicle(VehicleId),
    #[error("vehicle '{0}' is not among the current recommendations")]
    NotRecommended(VehicleId),
    #[error("at most {max} vehicles can be compared")]
    TooManySelected { max: usize },
}
