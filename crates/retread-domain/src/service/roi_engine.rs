//! ROI projection for switching a fleet to retreaded tires
//!
//! Pure arithmetic over a validated [`FleetProfile`]. No state, no I/O and no
//! logging; identical input always yields an identical [`RoiProjection`].
//!
//! # Formula
//! ```text
//! tires/year        = fleet_size x 4
//! new tire cost     = base_cost / savings_ratio
//! savings per tire  = new tire cost - base_cost
//! annual savings    = tires/year x savings per tire
//! investment        = fleet_size x 1500
//! roi %             = (annual x 5 - investment) / investment x 100
//! cost per km       = base_cost / (annual_kilometers x 0.8)
//! payback (months)  = min(ceil(investment / annual x 12), 60)
//! co2 (t)           = tires/year x co2_factor / 1000
//! ```
//!
//! Rounding follows [`super::rounding`] and is applied only to output fields.
//! `fuel_price` is validated but takes no part in any formula.

use retread_types::RoiError;

use super::rounding::{round_to, round_to_i64};
use crate::model::projection::PROJECTION_YEARS;
use crate::model::{EnvironmentalImpact, FleetProfile, RoiProjection, VehicleTypeProfile};

pub const TIRES_PER_VEHICLE_PER_YEAR: u32 = 4;
pub const INVESTMENT_PER_VEHICLE: f64 = 1500.0;
pub const TIRE_EFFICIENCY: f64 = 0.8;
pub const MAX_PAYBACK_MONTHS: u32 = 60;

/// Compute the projection using the constant profile of the fleet's vehicle type
pub fn compute(fleet: &FleetProfile) -> Result<RoiProjection, RoiError> {
    compute_with_profile(fleet, fleet.vehicle_type.profile())
}

/// Compute the projection against an explicit cost profile
///
/// The fleet is validated first. Fails with [`RoiError::DivisionByZero`] when
/// the profile yields zero (or non-finite) annual savings.
pub fn compute_with_profile(
    fleet: &FleetProfile,
    profile: &VehicleTypeProfile,
) -> Result<RoiProjection, RoiError> {
    fleet.validate()?;

    let fleet_size = f64::from(fleet.fleet_size);
    let total_tires = f64::from(tires_per_year(fleet));

    let retreading_cost = profile.base_cost;
    let new_tire_cost = profile.base_cost / profile.savings_ratio;
    let savings_per_tire = new_tire_cost - retreading_cost;

    let annual_raw = total_tires * savings_per_tire;
    if annual_raw == 0.0 || !annual_raw.is_finite() {
        return Err(RoiError::DivisionByZero("payback period"));
    }
    let five_year_raw = annual_raw * PROJECTION_YEARS as f64;

    let co2_tonnes = (total_tires * profile.co2_factor_kg_per_tire) / 1000.0;

    let investment = fleet_size * INVESTMENT_PER_VEHICLE;
    let roi = ((five_year_raw - investment) / investment) * 100.0;

    let cost_per_km = retreading_cost / (f64::from(fleet.annual_kilometers) * TIRE_EFFICIENCY);

    let mut savings_breakdown = [0i64; PROJECTION_YEARS];
    for (i, slot) in savings_breakdown.iter_mut().enumerate() {
        *slot = round_to_i64(annual_raw * (i + 1) as f64);
    }

    Ok(RoiProjection {
        annual_savings: round_to_i64(annual_raw),
        five_year_savings: round_to_i64(five_year_raw),
        co2_reduction_tonnes: round_to(co2_tonnes, 2),
        roi_percent: round_to(roi, 2),
        cost_per_km: round_to(cost_per_km, 3),
        payback_period_months: payback_months(investment, annual_raw),
        savings_breakdown,
    })
}

/// Tire replacements per year across the whole fleet
pub fn tires_per_year(fleet: &FleetProfile) -> u32 {
    fleet.fleet_size * TIRES_PER_VEHICLE_PER_YEAR
}

/// Environmental summary stored alongside a projection
pub fn environmental_impact(fleet: &FleetProfile, projection: &RoiProjection) -> EnvironmentalImpact {
    EnvironmentalImpact {
        tires_retreaded_per_year: tires_per_year(fleet),
        co2_reduction_tonnes: projection.co2_reduction_tonnes,
    }
}

fn payback_months(investment: f64, annual_raw: f64) -> u32 {
    let months = ((investment / annual_raw) * 12.0).ceil();
    // negative savings never pay back
    if months < 0.0 || months > f64::from(MAX_PAYBACK_MONTHS) {
        MAX_PAYBACK_MONTHS
    } else {
        months as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{RoiRequest, VehicleType};

    fn fleet(fleet_size: u32, km: u32, vehicle_type: VehicleType) -> FleetProfile {
        FleetProfile {
            fleet_size,
            annual_kilometers: km,
            vehicle_type,
            fuel_price: 1.55,
        }
    }

    fn reference_fleet() -> FleetProfile {
        fleet(87, 120_000, VehicleType::HeavyTruck)
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    // ==========================================
    // Reference scenario
    // ==========================================

    #[test]
    fn test_reference_scenario() {
        let p = compute(&reference_fleet()).unwrap();
        assert_eq!(p.annual_savings, 290_829);
        assert_eq!(p.five_year_savings, 1_454_143);
        assert_close(p.co2_reduction_tonnes, 0.97);
        assert_close(p.roi_percent, 1014.29);
        assert_close(p.cost_per_km, 0.005);
        assert_eq!(p.payback_period_months, 6);
        assert_eq!(
            p.savings_breakdown,
            [290_829, 581_657, 872_486, 1_163_314, 1_454_143]
        );
    }

    #[test]
    fn test_reference_tire_volume() {
        assert_eq!(tires_per_year(&reference_fleet()), 348);
    }

    #[test]
    fn test_breakdown_rounds_from_raw_base() {
        // 2 x 290829 = 581658, but 2 x 290828.57 rounds to 581657
        let p = compute(&reference_fleet()).unwrap();
        assert_ne!(p.savings_breakdown[1], p.annual_savings * 2);
    }

    // ==========================================
    // Per-vehicle-type tables
    // ==========================================

    #[test]
    fn test_medium_truck() {
        let p = compute(&fleet(42, 80_000, VehicleType::MediumTruck)).unwrap();
        // 168 tires x 680 savings per tire
        assert_eq!(p.annual_savings, 114_240);
        assert_eq!(p.five_year_savings, 571_200);
        assert_close(p.co2_reduction_tonnes, 0.37);
        assert_close(p.roi_percent, 806.67);
        assert_close(p.cost_per_km, 0.005);
        assert_eq!(p.payback_period_months, 7);
    }

    #[test]
    fn test_light_utility() {
        let p = compute(&fleet(10, 1_000, VehicleType::LightUtility)).unwrap();
        // 40 tires x 462.857 savings per tire
        assert_eq!(p.annual_savings, 18_514);
        assert_eq!(p.five_year_savings, 92_571);
        assert_close(p.co2_reduction_tonnes, 0.06);
        assert_close(p.roi_percent, 517.14);
        assert_close(p.cost_per_km, 0.225);
        assert_eq!(p.payback_period_months, 10);
    }

    #[test]
    fn test_bus() {
        let p = compute(&fleet(100, 50_000, VehicleType::Bus)).unwrap();
        // 400 tires x 848.42 savings per tire
        assert_eq!(p.annual_savings, 339_368);
        assert_close(p.co2_reduction_tonnes, 1.28);
        assert_close(p.roi_percent, 1031.23);
        assert_close(p.cost_per_km, 0.013);
        assert_eq!(p.payback_period_months, 6);
    }

    #[test]
    fn test_co2_factor_does_not_affect_cost_per_km() {
        let base = reference_fleet();
        let mut profile = *base.vehicle_type.profile();
        let expected = compute_with_profile(&base, &profile).unwrap();
        profile.co2_factor_kg_per_tire = 99.0;
        let altered = compute_with_profile(&base, &profile).unwrap();
        assert_eq!(altered.cost_per_km, expected.cost_per_km);
        assert_eq!(altered.roi_percent, expected.roi_percent);
        assert_eq!(altered.annual_savings, expected.annual_savings);
        assert_eq!(altered.payback_period_months, expected.payback_period_months);
        assert_ne!(altered.co2_reduction_tonnes, expected.co2_reduction_tonnes);
    }

    #[test]
    fn test_fuel_price_is_ignored() {
        let mut cheap = reference_fleet();
        cheap.fuel_price = 0.5;
        let mut expensive = reference_fleet();
        expensive.fuel_price = 5.0;
        assert_eq!(compute(&cheap).unwrap(), compute(&expensive).unwrap());
    }

    // ==========================================
    // Properties
    // ==========================================

    #[test]
    fn test_deterministic() {
        for t in VehicleType::ALL {
            let f = fleet(87, 120_000, t);
            assert_eq!(compute(&f).unwrap(), compute(&f).unwrap());
        }
    }

    #[test]
    fn test_scales_with_fleet_size() {
        for t in VehicleType::ALL {
            let mut previous = compute(&fleet(1, 120_000, t)).unwrap();
            for size in [2, 10, 87, 500, 10_000] {
                let current = compute(&fleet(size, 120_000, t)).unwrap();
                assert!(current.annual_savings > previous.annual_savings);
                assert!(current.five_year_savings > previous.five_year_savings);
                // two-digit rounding can flatten small steps (light utility 1 -> 2 gives 0.01 twice)
                assert!(current.co2_reduction_tonnes >= previous.co2_reduction_tonnes);
                previous = current;
            }
        }
    }

    #[test]
    fn test_roi_independent_of_fleet_size() {
        for t in VehicleType::ALL {
            let reference = compute(&fleet(1, 120_000, t)).unwrap().roi_percent;
            for size in [2, 7, 87, 1_234, 10_000] {
                let roi = compute(&fleet(size, 120_000, t)).unwrap().roi_percent;
                assert_close(roi, reference);
            }
        }
    }

    #[test]
    fn test_payback_capped() {
        for t in VehicleType::ALL {
            for size in [1, 87, 10_000] {
                for km in [1_000, 120_000, 1_000_000] {
                    let p = compute(&fleet(size, km, t)).unwrap();
                    assert!(p.payback_period_months <= MAX_PAYBACK_MONTHS);
                }
            }
        }
    }

    #[test]
    fn test_payback_cap_applies_to_weak_profile() {
        let weak = VehicleTypeProfile {
            base_cost: 450.0,
            savings_ratio: 0.999,
            co2_factor_kg_per_tire: 2.8,
        };
        let p = compute_with_profile(&reference_fleet(), &weak).unwrap();
        assert_eq!(p.payback_period_months, MAX_PAYBACK_MONTHS);
        assert!(p.roi_percent < 0.0);
    }

    #[test]
    fn test_five_year_matches_last_breakdown_entry() {
        for t in VehicleType::ALL {
            for size in [1, 3, 87, 134, 9_999] {
                let p = compute(&fleet(size, 120_000, t)).unwrap();
                assert_eq!(p.five_year_savings, p.savings_breakdown[4]);
                assert_eq!(p.annual_savings, p.savings_breakdown[0]);
            }
        }
    }

    // ==========================================
    // Failures
    // ==========================================

    #[test]
    fn test_rejects_invalid_fleet() {
        let cases = [
            fleet(0, 120_000, VehicleType::HeavyTruck),
            fleet(10_001, 120_000, VehicleType::HeavyTruck),
            fleet(87, 999, VehicleType::HeavyTruck),
            FleetProfile {
                fuel_price: 5.1,
                ..reference_fleet()
            },
        ];
        for case in cases {
            assert!(matches!(compute(&case), Err(RoiError::InvalidInput { .. })));
        }
    }

    #[test]
    fn test_rejects_unknown_vehicle_type() {
        let req = RoiRequest {
            fleet_size: 87,
            annual_kilometers: 120_000,
            vehicle_type: "unknown".to_string(),
            fuel_price: 1.55,
            company_id: None,
        };
        let result = FleetProfile::try_from(&req).and_then(|f| compute(&f));
        assert!(matches!(
            result,
            Err(RoiError::InvalidInput { field: "vehicle_type", .. })
        ));
    }

    #[test]
    fn test_zero_savings_is_division_by_zero() {
        let flat = VehicleTypeProfile {
            base_cost: 450.0,
            savings_ratio: 1.0,
            co2_factor_kg_per_tire: 2.8,
        };
        let result = compute_with_profile(&reference_fleet(), &flat);
        assert_eq!(result, Err(RoiError::DivisionByZero("payback period")));
    }

    #[test]
    fn test_zero_ratio_is_division_by_zero() {
        let broken = VehicleTypeProfile {
            base_cost: 450.0,
            savings_ratio: 0.0,
            co2_factor_kg_per_tire: 2.8,
        };
        let result = compute_with_profile(&reference_fleet(), &broken);
        assert!(matches!(result, Err(RoiError::DivisionByZero(_))));
    }

    #[test]
    fn test_environmental_impact() {
        let f = reference_fleet();
        let p = compute(&f).unwrap();
        let impact = environmental_impact(&f, &p);
        assert_eq!(impact.tires_retreaded_per_year, 348);
        assert_close(impact.co2_reduction_tonnes, 0.97);
    }
}
