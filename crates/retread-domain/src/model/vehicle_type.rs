//! Vehicle categories and their retreading cost profiles

use std::fmt;
use std::str::FromStr;

use retread_types::RoiError;
use serde::{Deserialize, Serialize};

/// Fleet vehicle category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleType {
    /// Heavy trucks (>12T)
    HeavyTruck,
    /// Medium trucks (3.5-12T)
    MediumTruck,
    /// Light utility vehicles (<3.5T)
    LightUtility,
    /// Buses and coaches
    Bus,
}

/// Per-tire economics for one vehicle category
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VehicleTypeProfile {
    /// Retreading cost per tire (currency units); this is the post-savings price
    pub base_cost: f64,
    /// Fraction in (0, 1) such that `base_cost / savings_ratio` is the new-tire price
    pub savings_ratio: f64,
    /// Kilograms of CO2 averted per retreaded tire
    pub co2_factor_kg_per_tire: f64,
}

static HEAVY_TRUCK: VehicleTypeProfile = VehicleTypeProfile {
    base_cost: 450.0,
    savings_ratio: 0.35,
    co2_factor_kg_per_tire: 2.8,
};

static MEDIUM_TRUCK: VehicleTypeProfile = VehicleTypeProfile {
    base_cost: 320.0,
    savings_ratio: 0.32,
    co2_factor_kg_per_tire: 2.2,
};

static LIGHT_UTILITY: VehicleTypeProfile = VehicleTypeProfile {
    base_cost: 180.0,
    savings_ratio: 0.28,
    co2_factor_kg_per_tire: 1.6,
};

static BUS: VehicleTypeProfile = VehicleTypeProfile {
    base_cost: 520.0,
    savings_ratio: 0.38,
    co2_factor_kg_per_tire: 3.2,
};

impl VehicleType {
    pub const ALL: [VehicleType; 4] = [
        VehicleType::HeavyTruck,
        VehicleType::MediumTruck,
        VehicleType::LightUtility,
        VehicleType::Bus,
    ];

    /// Constant cost profile applied to this category
    pub fn profile(&self) -> &'static VehicleTypeProfile {
        match self {
            VehicleType::HeavyTruck => &HEAVY_TRUCK,
            VehicleType::MediumTruck => &MEDIUM_TRUCK,
            VehicleType::LightUtility => &LIGHT_UTILITY,
            VehicleType::Bus => &BUS,
        }
    }

    /// Wire name (`heavy_truck`, `medium_truck`, ...)
    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleType::HeavyTruck => "heavy_truck",
            VehicleType::MediumTruck => "medium_truck",
            VehicleType::LightUtility => "light_utility",
            VehicleType::Bus => "bus",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            VehicleType::HeavyTruck => "Heavy trucks (>12T)",
            VehicleType::MediumTruck => "Medium trucks (3.5-12T)",
            VehicleType::LightUtility => "Light utility (<3.5T)",
            VehicleType::Bus => "Buses / coaches",
        }
    }
}

impl fmt::Display for VehicleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VehicleType {
    type Err = RoiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VehicleType::ALL
            .into_iter()
            .find(|t| t.as_str() == s.trim())
            .ok_or_else(|| RoiError::invalid("vehicle_type", format!("unknown vehicle type '{}'", s)))
    }
}
