use serde::Serialize;

use super::domain::{RecommendedVehicle, VehicleId};

/// Vehicles a shopper may pin for side-by-side review.
pub const MAX_SELECTED: usize = 3;
/// Columns rendered in the comparison table.
pub const COMPARISON_COLUMNS: usize = 4;

/// Whole dollars with thousands separators, e.g. `$89,990`.
pub fn format_usd(amount: u32) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    grouped.push('$');
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

/// Ordered set of pinned vehicle ids, capped at [`MAX_SELECTED`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ComparisonSelection {
    selected: Vec<VehicleId>,
}

impl ComparisonSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes a pinned id, or pins it when there is room. A full selection ignores new ids.
    pub fn toggle(&mut self, id: VehicleId) -> bool {
        if let Some(index) = self.selected.iter().position(|existing| *existing == id) {
            self.selected.remove(index);
            return true;
        }
        if self.selected.len() >= MAX_SELECTED {
            return false;
        }
        self.selected.push(id);
        true
    }

    pub fn contains(&self, id: &VehicleId) -> bool {
        self.selected.contains(id)
    }

    pub fn ids(&self) -> &[VehicleId] {
        &self.selected
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparisonColumn {
    pub id: VehicleId,
    pub title: String,
    pub badge: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparisonRow {
    pub label: &'static str,
    pub values: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparisonTable {
    pub columns: Vec<ComparisonColumn>,
    pub rows: Vec<ComparisonRow>,
}

impl ComparisonTable {
    /// Side-by-side view of the first [`COMPARISON_COLUMNS`] entries.
    pub fn from_recommendations(recommendations: &[RecommendedVehicle]) -> Self {
        let shown: Vec<&RecommendedVehicle> =
            recommendations.iter().take(COMPARISON_COLUMNS).collect();
        Self::build(&shown)
    }

    /// Restricts the table to pinned vehicles, keeping recommendation order.
    /// Falls back to the default view when nothing is pinned.
    pub fn for_selection(
        recommendations: &[RecommendedVehicle],
        selection: &ComparisonSelection,
    ) -> Self {
        if selection.is_empty() {
            return Self::from_recommendations(recommendations);
        }
        let shown: Vec<&RecommendedVehicle> = recommendations
            .iter()
            .filter(|entry| selection.contains(entry.id()))
            .collect();
        Self::build(&shown)
    }

    fn build(shown: &[&RecommendedVehicle]) -> Self {
        let columns = shown
            .iter()
            .map(|entry| ComparisonColumn {
                id: entry.id().clone(),
                title: entry.vehicle.display_name(),
                badge: entry.badge.map(|badge| badge.label()),
            })
            .collect();

        let rows = vec![
            row("Price", shown, |entry| format_usd(entry.vehicle.price)),
            row("Rating", shown, |entry| format!("{:.1}/10", entry.vehicle.rating)),
            row("Power", shown, |entry| entry.vehicle.specs.power.clone()),
            row("0-60", shown, |entry| entry.vehicle.specs.acceleration.clone()),
            row("Range", shown, |entry| entry.vehicle.specs.range.clone()),
            row("Annual Cost", shown, |entry| {
                format_usd(entry.vehicle.cost_of_ownership.annual)
            }),
            row("Maintenance", shown, |entry| {
                entry.vehicle.cost_of_ownership.maintenance.label().to_string()
            }),
        ];

        Self { columns, rows }
    }
}

fn row<F>(label: &'static str, shown: &[&RecommendedVehicle], cell: F) -> ComparisonRow
where
    F: Fn(&RecommendedVehicle) -> String,
{
    ComparisonRow {
        label,
        values: shown.iter().map(|entry| cell(*entry)).collect(),
    }
}
