//! Fleet parameters fed to the ROI engine

use std::ops::RangeInclusive;

use retread_types::RoiError;
use serde::{Deserialize, Serialize};

use super::vehicle_type::VehicleType;

pub const FLEET_SIZE_RANGE: RangeInclusive<u32> = 1..=10_000;
pub const ANNUAL_KILOMETERS_RANGE: RangeInclusive<u32> = 1_000..=1_000_000;
pub const FUEL_PRICE_RANGE: RangeInclusive<f64> = 0.5..=5.0;

/// Fleet description for one ROI request
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FleetProfile {
    /// Number of vehicles
    pub fleet_size: u32,
    /// Kilometers driven per vehicle per year
    pub annual_kilometers: u32,
    pub vehicle_type: VehicleType,
    /// Local fuel price per liter. Validated but not used by any formula.
    pub fuel_price: f64,
}

impl FleetProfile {
    /// Build a profile, rejecting out-of-range fields
    pub fn new(
        fleet_size: u32,
        annual_kilometers: u32,
        vehicle_type: VehicleType,
        fuel_price: f64,
    ) -> Result<Self, RoiError> {
        let profile = Self {
            fleet_size,
            annual_kilometers,
            vehicle_type,
            fuel_price,
        };
        profile.validate()?;
        Ok(profile)
    }

    pub fn validate(&self) -> Result<(), RoiError> {
        if !FLEET_SIZE_RANGE.contains(&self.fleet_size) {
            return Err(RoiError::invalid(
                "fleet_size",
                format!("must be between 1 and 10000, got {}", self.fleet_size),
            ));
        }
        if !ANNUAL_KILOMETERS_RANGE.contains(&self.annual_kilometers) {
            return Err(RoiError::invalid(
                "annual_kilometers",
                format!("must be between 1000 and 1000000, got {}", self.annual_kilometers),
            ));
        }
        // NaN fails `contains`
        if !FUEL_PRICE_RANGE.contains(&self.fuel_price) {
            return Err(RoiError::invalid(
                "fuel_price",
                format!("must be between 0.5 and 5.0, got {}", self.fuel_price),
            ));
        }
        Ok(())
    }
}

/// Loosely-typed ROI request as received from an outer layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoiRequest {
    pub fleet_size: i64,
    pub annual_kilometers: i64,
    pub vehicle_type: String,
    pub fuel_price: f64,
    #[serde(default)]
    pub company_id: Option<String>,
}

impl TryFrom<&RoiRequest> for FleetProfile {
    type Error = RoiError;

    fn try_from(req: &RoiRequest) -> Result<Self, Self::Error> {
        let fleet_size = u32::try_from(req.fleet_size).map_err(|_| {
            RoiError::invalid(
                "fleet_size",
                format!("must be between 1 and 10000, got {}", req.fleet_size),
            )
        })?;
        let annual_kilometers = u32::try_from(req.annual_kilometers).map_err(|_| {
            RoiError::invalid(
                "annual_kilometers",
                format!("must be between 1000 and 1000000, got {}", req.annual_kilometers),
            )
        })?;
        let vehicle_type = req.vehicle_type.parse::<VehicleType>()?;
        FleetProfile::new(fleet_size, annual_kilometers, vehicle_type, req.fuel_price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(fleet_size: i64, km: i64, vehicle_type: &str, fuel: f64) -> RoiRequest {
        RoiRequest {
            fleet_size,
            annual_kilometers: km,
            vehicle_type: vehicle_type.to_string(),
            fuel_price: fuel,
            company_id: None,
        }
    }

    fn rejected_field(req: &RoiRequest) -> &'static str {
        match FleetProfile::try_from(req) {
            Err(RoiError::InvalidInput { field, .. }) => field,
            other => panic!("expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_accepts_boundaries() {
        assert!(FleetProfile::new(1, 1_000, VehicleType::Bus, 0.5).is_ok());
        assert!(FleetProfile::new(10_000, 1_000_000, VehicleType::Bus, 5.0).is_ok());
    }

    #[test]
    fn test_rejects_out_of_range() {
        assert_eq!(rejected_field(&request(0, 120_000, "heavy_truck", 1.55)), "fleet_size");
        assert_eq!(rejected_field(&request(10_001, 120_000, "heavy_truck", 1.55)), "fleet_size");
        assert_eq!(rejected_field(&request(-3, 120_000, "heavy_truck", 1.55)), "fleet_size");
        assert_eq!(rejected_field(&request(87, 999, "heavy_truck", 1.55)), "annual_kilometers");
        assert_eq!(rejected_field(&request(87, 1_000_001, "heavy_truck", 1.55)), "annual_kilometers");
        assert_eq!(rejected_field(&request(87, 120_000, "heavy_truck", 5.1)), "fuel_price");
        assert_eq!(rejected_field(&request(87, 120_000, "heavy_truck", 0.49)), "fuel_price");
        assert_eq!(rejected_field(&request(87, 120_000, "heavy_truck", f64::NAN)), "fuel_price");
        assert_eq!(rejected_field(&request(87, 120_000, "unknown", 1.55)), "vehicle_type");
    }

    #[test]
    fn test_request_camel_case() {
        let req: RoiRequest = serde_json::from_str(
            r#"{"fleetSize":87,"annualKilometers":120000,"vehicleType":"heavy_truck","fuelPrice":1.55}"#,
        )
        .unwrap();
        let profile = FleetProfile::try_from(&req).unwrap();
        assert_eq!(profile.fleet_size, 87);
        assert_eq!(profile.annual_kilometers, 120_000);
        assert_eq!(profile.vehicle_type, VehicleType::HeavyTruck);
        assert!(req.company_id.is_none());
    }
}
