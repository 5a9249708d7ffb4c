use std::cmp::Ordering;

use super::super::domain::{Badge, RecommendedVehicle};

/// Annotates a rating-sorted list in place.
///
/// The leader always takes `BestOverall`; later badges never displace an earlier one.
pub(crate) fn assign_badges(ranked: &mut [RecommendedVehicle]) {
    let Some(leader) = ranked.first_mut() else {
        return;
    };
    leader.badge = Some(Badge::BestOverall);

    if ranked.len() >= 2 {
        let best_value = position_of_max(ranked, |a, b| {
            a.vehicle.value_ratio().total_cmp(&b.vehicle.value_ratio())
        });
        if let Some(index) = best_value.filter(|index| *index > 0) {
            ranked[index].badge = Some(Badge::BestValue);
        }
    }

    if ranked.len() >= 3 {
        let premium = position_of_max(ranked, |a, b| a.vehicle.price.cmp(&b.vehicle.price));
        if let Some(index) = premium.filter(|index| *index > 0) {
            if ranked[index].badge.is_none() {
                ranked[index].badge = Some(Badge::PremiumChoice);
            }
        }
    }
}

/// First position holding the maximum, so ties favour the better-rated entry.
fn position_of_max<F>(ranked: &[RecommendedVehicle], compare: F) -> Option<usize>
where
    F: Fn(&RecommendedVehicle, &RecommendedVehicle) -> Ordering,
{
    let mut best: Option<usize> = None;
    for (index, candidate) in ranked.iter().enumerate() {
        match best {
            Some(current) if compare(candidate, &ranked[current]) != Ordering::Greater => {}
            _ => best = Some(index),
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::recommendations::catalog::{CatalogStore, VehicleCatalog};

    fn entries(prices_and_ratings: &[(u32, f32)]) -> Vec<RecommendedVehicle> {
        let template = VehicleCatalog::standard().vehicles()[0].clone();
        prices_and_ratings
            .iter()
            .enumerate()
            .map(|(index, (price, rating))| {
                let mut vehicle = template.clone();
                vehicle.id = format!("v{index}").as_str().into();
                vehicle.price = *price;
                vehicle.rating = *rating;
                RecommendedVehicle::new(vehicle)
            })
            .collect()
    }

    fn badges(ranked: &[RecommendedVehicle]) -> Vec<Option<Badge>> {
        ranked.iter().map(|entry| entry.badge).collect()
    }

    #[test]
    fn empty_list_is_left_alone() {
        let mut ranked: Vec<RecommendedVehicle> = Vec::new();
        assign_badges(&mut ranked);
        assert!(ranked.is_empty());
    }

    #[test]
    fn leader_keeps_best_overall_even_when_it_is_best_value() {
        let mut ranked = entries(&[(40_000, 9.5), (90_000, 9.0)]);
        assign_badges(&mut ranked);
        assert_eq!(badges(&ranked), vec![Some(Badge::BestOverall), None]);
    }

    #[test]
    fn premium_choice_goes_to_most_expensive_follower() {
        let mut ranked = entries(&[(60_000, 9.5), (30_000, 9.0), (150_000, 8.0)]);
        assign_badges(&mut ranked);
        assert_eq!(
            badges(&ranked),
            vec![
                Some(Badge::BestOverall),
                Some(Badge::BestValue),
                Some(Badge::PremiumChoice)
            ]
        );
    }

    #[test]
    fn premium_choice_never_overwrites_best_value() {
        // Deliberately unsorted so one follower holds both the best ratio and the top price.
        let mut ranked = entries(&[(20_000, 9.9), (500_000, 400.0), (400_000, 1.0)]);
        assign_badges(&mut ranked);
        assert_eq!(
            badges(&ranked),
            vec![Some(Badge::BestOverall), Some(Badge::BestValue), None]
        );
    }

    #[test]
    fn ties_resolve_to_the_earlier_position() {
        let mut ranked = entries(&[(100_000, 9.0), (50_000, 8.0), (50_000, 8.0)]);
        assign_badges(&mut ranked);
        assert_eq!(ranked[1].badge, Some(Badge::BestValue));
        assert_eq!(ranked[2].badge, None);
    }

    #[test]
    fn free_vehicle_wins_best_value() {
        let mut ranked = entries(&[(100_000, 9.0), (80_000, 8.5), (0, 1.0)]);
        assign_badges(&mut ranked);
        assert_eq!(ranked[2].badge, Some(Badge::BestValue));
    }
}
