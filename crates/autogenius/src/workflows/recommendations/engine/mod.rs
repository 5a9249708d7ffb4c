mod badges;
mod ranking;

use std::sync::Arc;

use tracing::debug;

use super::catalog::CatalogStore;
use super::domain::{RecommendedVehicle, Vehicle};
use super::preferences::UserPreferences;
use badges::assign_badges;
use ranking::rank_candidates;

/// Maximum number of vehicles returned per run.
pub const RESULT_LIMIT: usize = 5;

/// Ranks `catalog` against `preferences`.
///
/// Filters on budget, body type, and fuel; sorts by rating (stable); badges the
/// full filtered list; then keeps the top [`RESULT_LIMIT`]. The catalog is only
/// read, every returned entry is a fresh copy.
pub fn recommend(catalog: &[Vehicle], preferences: &UserPreferences) -> Vec<RecommendedVehicle> {
    let mut ranked = rank_and_badge(catalog, preferences);
    ranked.truncate(RESULT_LIMIT);
    ranked
}

/// Every admitted vehicle, sorted and badged, before the result cap.
fn rank_and_badge(catalog: &[Vehicle], preferences: &UserPreferences) -> Vec<RecommendedVehicle> {
    let mut ranked = rank_candidates(catalog, preferences);
    assign_badges(&mut ranked);
    ranked
}

/// Stateless engine bound to a catalog source.
pub struct RecommendationEngine<C> {
    catalog: Arc<C>,
}

impl<C> Clone for RecommendationEngine<C> {
    fn clone(&self) -> Self {
        Self {
            catalog: Arc::clone(&self.catalog),
        }
    }
}

impl<C> RecommendationEngine<C>
where
    C: CatalogStore,
{
    pub fn new(catalog: Arc<C>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    pub fn recommend(&self, preferences: &UserPreferences) -> Vec<RecommendedVehicle> {
        let vehicles = self.catalog.vehicles();
        let mut recommendations = rank_and_badge(vehicles, preferences);
        let matched = recommendations.len();
        recommendations.truncate(RESULT_LIMIT);

        debug!(
            catalog_size = vehicles.len(),
            matched,
            returned = recommendations.len(),
            budget_min = preferences.budget().min(),
            budget_max = preferences.budget().max(),
            fuel = preferences.fuel_preference().as_str(),
            "ranked catalog against preferences"
        );

        recommendations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::recommendations::catalog::VehicleCatalog;
    use crate::workflows::recommendations::preferences::BudgetRange;

    fn crowded_catalog() -> VehicleCatalog {
        let standard = VehicleCatalog::standard();
        let mut vehicles = standard.vehicles().to_vec();
        for (index, template) in standard.vehicles().iter().enumerate() {
            let mut copy = template.clone();
            copy.id = format!("extra-{index}").as_str().into();
            copy.rating -= 1.0;
            vehicles.push(copy);
        }
        VehicleCatalog::from_vehicles(vehicles)
    }

    #[test]
    fn matched_count_is_taken_before_the_cap() {
        let catalog = crowded_catalog();
        let preferences =
            UserPreferences::with_budget(BudgetRange::new(20_000, 250_000).expect("valid"));

        let matched = rank_and_badge(catalog.vehicles(), &preferences);
        let capped = recommend(catalog.vehicles(), &preferences);

        assert_eq!(matched.len(), 10);
        assert_eq!(capped.len(), RESULT_LIMIT);
        assert_eq!(&matched[..RESULT_LIMIT], capped.as_slice());
    }

    #[test]
    fn engine_returns_the_same_ranking_as_the_free_function() {
        let catalog = Arc::new(crowded_catalog());
        let engine = RecommendationEngine::new(Arc::clone(&catalog));
        let preferences =
            UserPreferences::with_budget(BudgetRange::new(50_000, 130_000).expect("valid"));

        assert_eq!(
            engine.recommend(&preferences),
            recommend(catalog.vehicles(), &preferences)
        );
    }
}
