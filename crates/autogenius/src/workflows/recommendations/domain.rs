use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::preferences::PreferencesError;

/// Identifier wrapper for catalog entries.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VehicleId(pub String);

impl VehicleId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VehicleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for VehicleId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleCategory {
    Suv,
    Sedan,
    Electric,
    Hybrid,
    Sport,
    Luxury,
}

impl VehicleCategory {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::Suv,
            Self::Sedan,
            Self::Electric,
            Self::Hybrid,
            Self::Sport,
            Self::Luxury,
        ]
    }

    /// Wire identifier used by the questionnaire form.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Suv => "suv",
            Self::Sedan => "sedan",
            Self::Electric => "electric",
            Self::Hybrid => "hybrid",
            Self::Sport => "sport",
            Self::Luxury => "luxury",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Suv => "SUV",
            Self::Sedan => "Sedan",
            Self::Electric => "Electric",
            Self::Hybrid => "Hybrid",
            Self::Sport => "Sport",
            Self::Luxury => "Luxury",
        }
    }

    /// Electric and hybrid drivetrains are modelled as categories of their own.
    pub const fn is_electrified(self) -> bool {
        matches!(self, Self::Electric | Self::Hybrid)
    }
}

impl FromStr for VehicleCategory {
    type Err = PreferencesError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let normalized = raw.trim().to_ascii_lowercase();
        Self::ordered()
            .into_iter()
            .find(|category| category.as_str() == normalized)
            .ok_or_else(|| PreferencesError::UnknownCategory(raw.to_string()))
    }
}

/// Annotation computed per recommendation run; never stored on the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Badge {
    BestOverall,
    BestValue,
    PremiumChoice,
}

impl Badge {
    pub const fn label(self) -> &'static str {
        match self {
            Self::BestOverall => "Best Overall",
            Self::BestValue => "Best Value",
            Self::PremiumChoice => "Premium Choice",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MaintenanceTier {
    #[serde(rename = "Very Low")]
    VeryLow,
    Low,
    Medium,
    High,
}

impl MaintenanceTier {
    pub const fn label(self) -> &'static str {
        match self {
            Self::VeryLow => "Very Low",
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostOfOwnership {
    /// Estimated yearly running cost in whole dollars.
    pub annual: u32,
    pub maintenance: MaintenanceTier,
    pub fuel: String,
}

/// Display-only figures; none of these participate in ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleSpecs {
    pub power: String,
    pub acceleration: String,
    pub range: String,
    pub top_speed: String,
}

/// Catalog entry. Prices are whole US dollars, ratings sit on a 0-10 scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: VehicleId,
    pub name: String,
    pub brand: String,
    #[serde(rename = "type")]
    pub category: VehicleCategory,
    pub price: u32,
    pub image: String,
    pub rating: f32,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
    pub cost_of_ownership: CostOfOwnership,
    pub specs: VehicleSpecs,
    pub tags: Vec<String>,
}

impl Vehicle {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.brand, self.name)
    }

    /// Rating earned per dollar. A free vehicle is infinitely good value.
    pub fn value_ratio(&self) -> f64 {
        if self.price == 0 {
            return f64::INFINITY;
        }
        f64::from(self.rating) / f64::from(self.price)
    }
}

/// Owned copy of a catalog vehicle annotated for a single recommendation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendedVehicle {
    #[serde(flatten)]
    pub vehicle: Vehicle,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<Badge>,
}

impl RecommendedVehicle {
    pub fn new(vehicle: Vehicle) -> Self {
        Self {
            vehicle,
            badge: None,
        }
    }

    pub fn id(&self) -> &VehicleId {
        &self.vehicle.id
    }
}
