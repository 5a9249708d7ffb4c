use super::super::domain::{RecommendedVehicle, Vehicle};
use super::super::preferences::UserPreferences;

/// Copies every admitted vehicle, best rated first. Equal ratings keep catalog order.
pub(crate) fn rank_candidates(
    catalog: &[Vehicle],
    preferences: &UserPreferences,
) -> Vec<RecommendedVehicle> {
    let mut candidates: Vec<RecommendedVehicle> = catalog
        .iter()
        .filter(|vehicle| preferences.admits(vehicle))
        .cloned()
        .map(RecommendedVehicle::new)
        .collect();

    // `sort_by` is stable.
    candidates.sort_by(|a, b| b.vehicle.rating.total_cmp(&a.vehicle.rating));
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::recommendations::catalog::{CatalogStore, VehicleCatalog};
    use crate::workflows::recommendations::preferences::BudgetRange;

    #[test]
    fn equal_ratings_preserve_catalog_order() {
        let mut vehicles = VehicleCatalog::standard().vehicles().to_vec();
        for vehicle in &mut vehicles {
            vehicle.rating = 9.0;
        }
        let preferences = UserPreferences::with_budget(BudgetRange::new(0, u32::MAX).unwrap());

        let ranked = rank_candidates(&vehicles, &preferences);

        let ids: Vec<_> = ranked.iter().map(|entry| entry.id().as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4", "5"]);
    }
}
