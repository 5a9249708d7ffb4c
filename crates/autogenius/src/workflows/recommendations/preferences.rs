use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::str::FromStr;

use super::domain::{Vehicle, VehicleCategory};

/// Inclusive price window in whole dollars; `min <= max` holds by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BudgetRange {
    min: u32,
    max: u32,
}

impl BudgetRange {
    pub fn new(min: u32, max: u32) -> Result<Self, PreferencesError> {
        if min > max {
            return Err(PreferencesError::InvertedBudget { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> u32 {
        self.min
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    pub fn contains(&self, price: u32) -> bool {
        self.min <= price && price <= self.max
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UsageIntent {
    City,
    LongTrips,
    Family,
    Business,
    Performance,
}

impl UsageIntent {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::City,
            Self::LongTrips,
            Self::Family,
            Self::Business,
            Self::Performance,
        ]
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::City => "city",
            Self::LongTrips => "long-trips",
            Self::Family => "family",
            Self::Business => "business",
            Self::Performance => "performance",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::City => "City Commute",
            Self::LongTrips => "Long Trips",
            Self::Family => "Family",
            Self::Business => "Business",
            Self::Performance => "Performance",
        }
    }
}

impl FromStr for UsageIntent {
    type Err = PreferencesError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let normalized = raw.trim().to_ascii_lowercase();
        Self::ordered()
            .into_iter()
            .find(|usage| usage.as_str() == normalized)
            .ok_or_else(|| PreferencesError::UnknownUsage(raw.to_string()))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FuelPreference {
    #[default]
    Any,
    Electric,
    Hybrid,
    Gas,
}

impl FuelPreference {
    pub const fn ordered() -> [Self; 4] {
        [Self::Any, Self::Electric, Self::Hybrid, Self::Gas]
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Any => "any",
            Self::Electric => "electric",
            Self::Hybrid => "hybrid",
            Self::Gas => "gas",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Any => "Any",
            Self::Electric => "Electric Only",
            Self::Hybrid => "Hybrid",
            Self::Gas => "Gas/Petrol",
        }
    }

    /// Fuel is inferred from the vehicle category; gas means "neither electric nor hybrid".
    pub fn admits(self, category: VehicleCategory) -> bool {
        match self {
            Self::Any => true,
            Self::Electric => category == VehicleCategory::Electric,
            Self::Hybrid => category == VehicleCategory::Hybrid,
            Self::Gas => !category.is_electrified(),
        }
    }
}

impl FromStr for FuelPreference {
    type Err = PreferencesError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let normalized = raw.trim().to_ascii_lowercase();
        Self::ordered()
            .into_iter()
            .find(|fuel| fuel.as_str() == normalized)
            .ok_or_else(|| PreferencesError::UnknownFuel(raw.to_string()))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaintenancePriority {
    Low,
    #[default]
    Balanced,
    Performance,
}

impl MaintenancePriority {
    pub const fn ordered() -> [Self; 3] {
        [Self::Low, Self::Balanced, Self::Performance]
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Balanced => "balanced",
            Self::Performance => "performance",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low Cost Priority",
            Self::Balanced => "Balanced",
            Self::Performance => "Performance First",
        }
    }
}

impl FromStr for MaintenancePriority {
    type Err = PreferencesError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let normalized = raw.trim().to_ascii_lowercase();
        Self::ordered()
            .into_iter()
            .find(|priority| priority.as_str() == normalized)
            .ok_or_else(|| PreferencesError::UnknownMaintenancePriority(raw.to_string()))
    }
}

/// Validated questionnaire answers. Immutable once handed to the engine.
///
/// `usage` and `maintenance_priority` are carried through but do not influence ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserPreferences {
    budget: BudgetRange,
    car_types: BTreeSet<VehicleCategory>,
    usage: BTreeSet<UsageIntent>,
    fuel_preference: FuelPreference,
    maintenance_priority: MaintenancePriority,
}

impl UserPreferences {
    pub fn new(
        budget: BudgetRange,
        car_types: impl IntoIterator<Item = VehicleCategory>,
        usage: impl IntoIterator<Item = UsageIntent>,
        fuel_preference: FuelPreference,
        maintenance_priority: MaintenancePriority,
    ) -> Self {
        Self {
            budget,
            car_types: car_types.into_iter().collect(),
            usage: usage.into_iter().collect(),
            fuel_preference,
            maintenance_priority,
        }
    }

    /// Budget-only preferences with every other answer left open.
    pub fn with_budget(budget: BudgetRange) -> Self {
        Self {
            budget,
            car_types: BTreeSet::new(),
            usage: BTreeSet::new(),
            fuel_preference: FuelPreference::Any,
            maintenance_priority: MaintenancePriority::Balanced,
        }
    }

    pub fn budget(&self) -> BudgetRange {
        self.budget
    }

    pub fn car_types(&self) -> &BTreeSet<VehicleCategory> {
        &self.car_types
    }

    pub fn usage(&self) -> &BTreeSet<UsageIntent> {
        &self.usage
    }

    pub fn fuel_preference(&self) -> FuelPreference {
        self.fuel_preference
    }

    pub fn maintenance_priority(&self) -> MaintenancePriority {
        self.maintenance_priority
    }

    /// Budget, body type, and fuel constraints. An empty type set admits every category.
    pub fn admits(&self, vehicle: &Vehicle) -> bool {
        self.budget.contains(vehicle.price)
            && (self.car_types.is_empty() || self.car_types.contains(&vehicle.category))
            && self.fuel_preference.admits(vehicle.category)
    }
}

/// Loosely typed preferences exactly as the questionnaire form posts them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferencesRequest {
    pub budget: [u32; 2],
    #[serde(default, alias = "carType")]
    pub car_type: Vec<String>,
    #[serde(default)]
    pub usage: Vec<String>,
    #[serde(default = "default_fuel", alias = "fuelPreference")]
    pub fuel_preference: String,
    #[serde(default = "default_maintenance", alias = "maintenancePriority")]
    pub maintenance_priority: String,
}

fn default_fuel() -> String {
    FuelPreference::Any.as_str().to_string()
}

fn default_maintenance() -> String {
    MaintenancePriority::Balanced.as_str().to_string()
}

impl From<&UserPreferences> for PreferencesRequest {
    fn from(preferences: &UserPreferences) -> Self {
        Self {
            budget: [preferences.budget.min(), preferences.budget.max()],
            car_type: preferences
                .car_types
                .iter()
                .map(|category| category.as_str().to_string())
                .collect(),
            usage: preferences
                .usage
                .iter()
                .map(|usage| usage.as_str().to_string())
                .collect(),
            fuel_preference: preferences.fuel_preference.as_str().to_string(),
            maintenance_priority: preferences.maintenance_priority.as_str().to_string(),
        }
    }
}

impl TryFrom<PreferencesRequest> for UserPreferences {
    type Error = PreferencesError;

    fn try_from(request: PreferencesRequest) -> Result<Self, Self::Error> {
        let [min, max] = request.budget;
        let budget = BudgetRange::new(min, max)?;

        let car_types = request
            .car_type
            .iter()
            .map(|raw| raw.parse::<VehicleCategory>())
            .collect::<Result<Vec<_>, _>>()?;
        let usage = request
            .usage
            .iter()
            .map(|raw| raw.parse::<UsageIntent>())
            .collect::<Result<Vec<_>, _>>()?;
        let fuel_preference = request.fuel_preference.parse::<FuelPreference>()?;
        let maintenance_priority = request
            .maintenance_priority
            .parse::<MaintenancePriority>()?;

        Ok(Self::new(
            budget,
            car_types,
            usage,
            fuel_preference,
            maintenance_priority,
        ))
    }
}

/// Rejections raised while validating submitted preferences.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PreferencesError {
    #[error("budget minimum {min} exceeds maximum {max}")]
    InvertedBudget { min: u32, max: u32 },
    #[error("unknown car type '{0}'")]
    UnknownCategory(String),
    #[error("unknown usage '{0}'")]
    UnknownUsage(String),
    #[error("unknown fuel preference '{0}'")]
    UnknownFuel(String),
    #[error("unknown maintenance priority '{0}'")]
    UnknownMaintenancePriority(String),
}
