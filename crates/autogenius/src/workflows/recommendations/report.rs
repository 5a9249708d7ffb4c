use serde::Serialize;

use super::domain::{Badge, RecommendedVehicle, VehicleId};
use super::preferences::UserPreferences;
use super::questionnaire::{DraftSummary, PreferenceDraft};

/// Who earned which badge in a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BadgeHolder {
    pub badge: Badge,
    pub label: &'static str,
    pub vehicle_id: VehicleId,
    pub vehicle_name: String,
}

/// Results page payload: headline, preference recap, and the ranked vehicles.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationReport {
    pub count: usize,
    pub headline: String,
    pub preferences: DraftSummary,
    pub badges: Vec<BadgeHolder>,
    pub recommendations: Vec<RecommendedVehicle>,
}

impl RecommendationReport {
    pub fn new(preferences: &UserPreferences, recommendations: Vec<RecommendedVehicle>) -> Self {
        let badges = recommendations
            .iter()
            .filter_map(|entry| {
                entry.badge.map(|badge| BadgeHolder {
                    badge,
                    label: badge.label(),
                    vehicle_id: entry.id().clone(),
                    vehicle_name: entry.vehicle.display_name(),
                })
            })
            .collect();

        Self {
            count: recommendations.len(),
            headline: headline(recommendations.len()),
            preferences: PreferenceDraft::from(preferences).summary(),
            badges,
            recommendations,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.recommendations.is_empty()
    }
}

fn headline(count: usize) -> String {
    match count {
        0 => "No vehicles match your criteria yet. Try widening your budget or removing a filter."
            .to_string(),
        1 => "Based on your preferences, we've found 1 exceptional vehicle that matches your criteria perfectly."
            .to_string(),
        n => format!(
            "Based on your preferences, we've found {n} exceptional vehicles that match your criteria perfectly."
        ),
    }
}
