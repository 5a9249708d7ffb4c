use super::domain::{
    CostOfOwnership, MaintenanceTier, Vehicle, VehicleCategory, VehicleId, VehicleSpecs,
};

/// Read-only source of vehicles the engine ranks against.
pub trait CatalogStore: Send + Sync {
    fn vehicles(&self) -> &[Vehicle];

    fn find(&self, id: &VehicleId) -> Option<&Vehicle> {
        self.vehicles().iter().find(|vehicle| &vehicle.id == id)
    }
}

/// Curated catalog compiled into the service.
#[derive(Debug, Clone)]
pub struct VehicleCatalog {
    vehicles: Vec<Vehicle>,
}

impl VehicleCatalog {
    pub fn standard() -> Self {
        Self {
            vehicles: standard_vehicles(),
        }
    }

    /// Fixture catalogs for tests and demos.
    pub fn from_vehicles(vehicles: Vec<Vehicle>) -> Self {
        Self { vehicles }
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }
}

impl Default for VehicleCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

impl CatalogStore for VehicleCatalog {
    fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

fn standard_vehicles() -> Vec<Vehicle> {
    vec![
        Vehicle {
            id: VehicleId::from("1"),
            name: "Model S Plaid".to_string(),
            brand: "Tesla".to_string(),
            category: VehicleCategory::Electric,
            price: 89_990,
            image: "/car-electric-sedan.jpg".to_string(),
            rating: 9.5,
            pros: strings(&[
                "Fastest acceleration in class",
                "Zero emissions",
                "Autopilot included",
                "Minimal maintenance",
            ]),
            cons: strings(&["Charging infrastructure dependent", "Premium price point"]),
            cost_of_ownership: CostOfOwnership {
                annual: 2_400,
                maintenance: MaintenanceTier::VeryLow,
                fuel: "Electric".to_string(),
            },
            specs: VehicleSpecs {
                power: "1,020 hp".to_string(),
                acceleration: "1.99s 0-60".to_string(),
                range: "396 miles".to_string(),
                top_speed: "200 mph".to_string(),
            },
            tags: strings(&["electric", "performance", "luxury", "tech"]),
        },
        Vehicle {
            id: VehicleId::from("2"),
            name: "X5 xDrive50e".to_string(),
            brand: "BMW".to_string(),
            category: VehicleCategory::Hybrid,
            price: 72_800,
            image: "/car-suv.jpg".to_string(),
            rating: 9.0,
            pros: strings(&[
                "Versatile hybrid system",
                "Premium interior",
                "Strong resale value",
                "Excellent handling",
            ]),
            cons: strings(&["Complex maintenance", "Smaller electric range"]),
            cost_of_ownership: CostOfOwnership {
                annual: 3_800,
                maintenance: MaintenanceTier::Medium,
                fuel: "Hybrid".to_string(),
            },
            specs: VehicleSpecs {
                power: "483 hp".to_string(),
                acceleration: "4.6s 0-60".to_string(),
                range: "30 mi electric".to_string(),
                top_speed: "155 mph".to_string(),
            },
            tags: strings(&["suv", "hybrid", "luxury", "family"]),
        },
        Vehicle {
            id: VehicleId::from("3"),
            name: "911 Carrera S".to_string(),
            brand: "Porsche".to_string(),
            category: VehicleCategory::Sport,
            price: 124_200,
            image: "/car-sport.jpg".to_string(),
            rating: 9.8,
            pros: strings(&[
                "Iconic design",
                "Track-ready performance",
                "Exceptional build quality",
                "Timeless appeal",
            ]),
            cons: strings(&["Limited practicality", "High insurance costs"]),
            cost_of_ownership: CostOfOwnership {
                annual: 5_200,
                maintenance: MaintenanceTier::High,
                fuel: "Premium Gas".to_string(),
            },
            specs: VehicleSpecs {
                power: "443 hp".to_string(),
                acceleration: "3.3s 0-60".to_string(),
                range: "340 miles".to_string(),
                top_speed: "191 mph".to_string(),
            },
            tags: strings(&["sport", "luxury", "performance"]),
        },
        Vehicle {
            id: VehicleId::from("4"),
            name: "S-Class S580".to_string(),
            brand: "Mercedes-Benz".to_string(),
            category: VehicleCategory::Luxury,
            price: 118_500,
            image: "/car-luxury-sedan.jpg".to_string(),
            rating: 9.4,
            pros: strings(&[
                "Ultimate comfort",
                "Cutting-edge technology",
                "Prestigious status",
                "Whisper quiet",
            ]),
            cons: strings(&["Expensive options", "Complex systems"]),
            cost_of_ownership: CostOfOwnership {
                annual: 4_800,
                maintenance: MaintenanceTier::High,
                fuel: "Premium Gas".to_string(),
            },
            specs: VehicleSpecs {
                power: "496 hp".to_string(),
                acceleration: "4.4s 0-60".to_string(),
                range: "450 miles".to_string(),
                top_speed: "130 mph".to_string(),
            },
            tags: strings(&["luxury", "sedan", "business", "comfort"]),
        },
        Vehicle {
            id: VehicleId::from("5"),
            name: "Model Y Long Range".to_string(),
            brand: "Tesla".to_string(),
            category: VehicleCategory::Electric,
            price: 52_990,
            image: "/car-suv.jpg".to_string(),
            rating: 8.8,
            pros: strings(&[
                "Great value",
                "Spacious interior",
                "Low running costs",
                "OTA updates",
            ]),
            cons: strings(&["Build quality varies", "Minimalist interior"]),
            cost_of_ownership: CostOfOwnership {
                annual: 1_800,
                maintenance: MaintenanceTier::VeryLow,
                fuel: "Electric".to_string(),
            },
            specs: VehicleSpecs {
                power: "384 hp".to_string(),
                acceleration: "4.8s 0-60".to_string(),
                range: "330 miles".to_string(),
                top_speed: "135 mph".to_string(),
            },
            tags: strings(&["electric", "suv", "family", "value"]),
        },
    ]
}
