//! Immutable vehicle parameters.

use crate::error::{VehicleError, VehicleResult};
use serde::{Deserialize, Serialize};
use std::path::Path;
use wot_core::constants::G0_MPS2;

/// Scalar physical constants for one vehicle configuration.
///
/// Constructed once at simulation setup (defaults, or a YAML file) and
/// read-only thereafter. All values are SI.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VehicleParams {
    /// Curb mass plus driver [kg].
    pub mass_kg: f64,
    /// Frontal area [m²].
    pub frontal_area_m2: f64,
    /// Aerodynamic drag coefficient [-].
    pub drag_coeff: f64,
    /// Ambient air density [kg/m³].
    pub air_density_kgpm3: f64,
    /// Front tire rolling radius [m].
    pub tire_radius_front_m: f64,
    /// Rear tire rolling radius [m].
    pub tire_radius_rear_m: f64,
    /// Launch-control overboost window [s].
    pub boost_duration_s: f64,
    /// Fraction of vehicle weight the tires can transmit longitudinally [-].
    pub traction_utilization: f64,
    /// Vehicle-speed → wheel-curve-lookup-speed calibration factor [-].
    pub slip_ratio: f64,
    /// Rolling resistance coefficient [-].
    pub rolling_resist_coeff: f64,
    /// Gravitational acceleration [m/s²].
    pub gravity_mps2: f64,
}

impl Default for VehicleParams {
    fn default() -> Self {
        Self {
            mass_kg: 2350.0,
            frontal_area_m2: 2.33,
            drag_coeff: 0.25,
            air_density_kgpm3: 1.20,
            tire_radius_front_m: 0.35,
            tire_radius_rear_m: 0.36,
            boost_duration_s: 2.5,
            traction_utilization: 1.06,
            slip_ratio: 1.02,
            rolling_resist_coeff: 0.010,
            gravity_mps2: G0_MPS2,
        }
    }
}

impl VehicleParams {
    pub fn validate(&self) -> VehicleResult<()> {
        let positive: [(f64, &'static str); 9] = [
            (self.mass_kg, "mass_kg must be positive"),
            (self.frontal_area_m2, "frontal_area_m2 must be positive"),
            (self.drag_coeff, "drag_coeff must be positive"),
            (self.air_density_kgpm3, "air_density_kgpm3 must be positive"),
            (
                self.tire_radius_front_m,
                "tire_radius_front_m must be positive",
            ),
            (
                self.tire_radius_rear_m,
                "tire_radius_rear_m must be positive",
            ),
            (
                self.traction_utilization,
                "traction_utilization must be positive",
            ),
            (self.slip_ratio, "slip_ratio must be positive"),
            (self.gravity_mps2, "gravity_mps2 must be positive"),
        ];
        for (value, what) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(VehicleError::InvalidParam { what });
            }
        }
        if !self.boost_duration_s.is_finite() || self.boost_duration_s < 0.0 {
            return Err(VehicleError::InvalidParam {
                what: "boost_duration_s must be non-negative",
            });
        }
        if !self.rolling_resist_coeff.is_finite() || self.rolling_resist_coeff < 0.0 {
            return Err(VehicleError::InvalidParam {
                what: "rolling_resist_coeff must be non-negative",
            });
        }
        Ok(())
    }

    /// Vehicle weight [N].
    pub fn weight_n(&self) -> f64 {
        self.mass_kg * self.gravity_mps2
    }

    /// Traction force ceiling [N]: utilization fraction × weight.
    pub fn traction_ceiling_n(&self) -> f64 {
        self.traction_utilization * self.weight_n()
    }

    /// Mean of the two tire radii [m], used for the single-curve nominal force.
    pub fn mean_tire_radius_m(&self) -> f64 {
        0.5 * (self.tire_radius_front_m + self.tire_radius_rear_m)
    }

    pub fn load_yaml(path: &Path) -> VehicleResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let params: Self = serde_yaml::from_str(&content)?;
        params.validate()?;
        tracing::debug!(path = %path.display(), mass_kg = params.mass_kg, "loaded vehicle parameters");
        Ok(params)
    }

    pub fn save_yaml(&self, path: &Path) -> VehicleResult<()> {
        self.validate()?;
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
