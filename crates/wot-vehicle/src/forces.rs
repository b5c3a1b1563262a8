//! Force evaluators composed by the longitudinal model.
//!
//! Each evaluator is a small immutable struct built from `VehicleParams`
//! (and the curve set, for wheel force) exposing one pure evaluation, so
//! every stage is testable against synthetic inputs in isolation.

use crate::params::VehicleParams;
use wot_curve::CurveSet;

/// Quadratic aerodynamic drag: 0.5·Cd·A·ρ·v².
#[derive(Debug, Clone, Copy)]
pub struct AeroDrag {
    half_rho_cd_a: f64,
}

impl AeroDrag {
    pub fn new(params: &VehicleParams) -> Self {
        Self {
            half_rho_cd_a: 0.5 * params.drag_coeff * params.frontal_area_m2
                * params.air_density_kgpm3,
        }
    }

    /// Drag force [N] opposing forward motion; exactly 0 at v = 0.
    pub fn force(&self, v_mps: f64) -> f64 {
        self.half_rho_cd_a * v_mps * v_mps
    }
}

/// Constant-magnitude rolling resistance, direction following motion.
#[derive(Debug, Clone, Copy)]
pub struct RollingResistance {
    magnitude_n: f64,
}

impl RollingResistance {
    pub fn new(params: &VehicleParams) -> Self {
        Self {
            magnitude_n: params.rolling_resist_coeff * params.weight_n(),
        }
    }

    /// Resistive force [N], signed with v so it always opposes motion;
    /// exactly 0 at standstill.
    pub fn force(&self, v_mps: f64) -> f64 {
        if v_mps == 0.0 {
            0.0
        } else {
            v_mps.signum() * self.magnitude_n
        }
    }
}

/// Time-boxed overboost gate. The transition is a hard step: boosted output
/// strictly before the boundary, nominal at and after it.
#[derive(Debug, Clone, Copy)]
pub struct BoostWindow {
    duration_s: f64,
}

impl BoostWindow {
    pub fn new(params: &VehicleParams) -> Self {
        Self {
            duration_s: params.boost_duration_s,
        }
    }

    pub fn duration_s(&self) -> f64 {
        self.duration_s
    }

    pub fn active(&self, t_s: f64) -> bool {
        t_s < self.duration_s
    }
}

/// Tire grip clamp, independent of powertrain output.
#[derive(Debug, Clone, Copy)]
pub struct TractionLimit {
    f_max_n: f64,
}

impl TractionLimit {
    pub fn new(params: &VehicleParams) -> Self {
        Self {
            f_max_n: params.traction_ceiling_n(),
        }
    }

    pub fn ceiling_n(&self) -> f64 {
        self.f_max_n
    }

    /// Capability below the ceiling passes through; above it, exactly the
    /// ceiling.
    pub fn clamp(&self, capability_n: f64) -> f64 {
        capability_n.min(self.f_max_n)
    }
}

/// Wheel force vs vehicle speed, from the axle torque curves.
///
/// Vehicle speed (m/s) converts to the curves' km/h lookup domain through
/// the slip ratio and the 3.6 factor.
#[derive(Debug, Clone)]
pub struct WheelForce {
    curves: CurveSet,
    kph_per_mps: f64,
    radius_front_m: f64,
    radius_rear_m: f64,
    radius_mean_m: f64,
}

impl WheelForce {
    pub fn new(params: &VehicleParams, curves: CurveSet) -> Self {
        Self {
            curves,
            kph_per_mps: 3.6 * params.slip_ratio,
            radius_front_m: params.tire_radius_front_m,
            radius_rear_m: params.tire_radius_rear_m,
            radius_mean_m: params.mean_tire_radius_m(),
        }
    }

    fn lookup_kph(&self, v_mps: f64) -> f64 {
        self.kph_per_mps * v_mps
    }

    /// Overboost wheel force [N]: both boosted axle curves over their own
    /// radii.
    pub fn boosted_n(&self, v_mps: f64) -> f64 {
        let k = self.lookup_kph(v_mps);
        self.curves.front_boosted_torque(k) / self.radius_front_m
            + self.curves.rear_boosted_torque(k) / self.radius_rear_m
    }

    /// Sustained wheel force [N]: the single full-availability curve over
    /// the mean radius.
    pub fn nominal_n(&self, v_mps: f64) -> f64 {
        let k = self.lookup_kph(v_mps);
        self.curves.max_torque(k) / self.radius_mean_m
    }

    pub fn curves(&self) -> &CurveSet {
        &self.curves
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    fn params() -> VehicleParams {
        VehicleParams::default()
    }

    #[test]
    fn drag_zero_at_rest() {
        let drag = AeroDrag::new(&params());
        assert_eq!(drag.force(0.0), 0.0);
    }

    #[test]
    fn drag_scales_exactly_quadratically_for_power_of_two_factors() {
        let drag = AeroDrag::new(&params());
        for v in [1.0, 3.0, 7.0, 26.0] {
            // scaling by powers of two is exact in binary floating point
            assert_eq!(drag.force(2.0 * v), 4.0 * drag.force(v));
            assert_eq!(drag.force(4.0 * v), 16.0 * drag.force(v));
        }
    }

    #[test]
    fn rolling_resistance_zero_at_rest_constant_otherwise() {
        let rr = RollingResistance::new(&params());
        assert_eq!(rr.force(0.0), 0.0);
        assert_eq!(rr.force(0.1), rr.force(50.0));
        // opposes motion for either direction of travel
        assert!(rr.force(10.0) > 0.0);
        assert_eq!(rr.force(-10.0), -rr.force(10.0));
    }

    #[test]
    fn boost_gate_hard_step() {
        let gate = BoostWindow::new(&params());
        let t_boost = gate.duration_s();
        assert!(gate.active(0.0));
        assert!(gate.active(t_boost - 1e-12));
        assert!(!gate.active(t_boost));
        assert!(!gate.active(t_boost + 1e-12));
    }

    #[test]
    fn traction_clamp_identity_below_exact_ceiling_above() {
        let limit = TractionLimit::new(&params());
        let f_max = limit.ceiling_n();
        assert_eq!(limit.clamp(0.5 * f_max), 0.5 * f_max);
        assert_eq!(limit.clamp(f_max), f_max);
        assert_eq!(limit.clamp(2.0 * f_max), f_max);
    }

    #[test]
    fn wheel_force_uses_slip_adjusted_lookup() {
        let curves = wot_curve::data::default_curve_set().unwrap();
        let wheels = WheelForce::new(&params(), curves.clone());
        // at standstill: front 3850/0.35 + rear 5940/0.36 = 11000 + 16500
        assert_relative_eq!(wheels.boosted_n(0.0), 27_500.0, max_relative = 1e-9);
        // nominal plateau: 7100 / 0.355 = 20000
        assert_relative_eq!(wheels.nominal_n(0.0), 20_000.0, max_relative = 1e-9);
        // lookup conversion: 10 m/s → 36.72 km/h
        let k = 3.6 * 1.02 * 10.0;
        assert_relative_eq!(
            wheels.nominal_n(10.0),
            curves.max_torque(k) / 0.355,
            max_relative = 1e-12
        );
    }

    proptest! {
        #[test]
        fn drag_quadratic_scaling_within_tolerance(v in 0.01f64..80.0, k in 0.1f64..8.0) {
            let drag = AeroDrag::new(&params());
            let lhs = drag.force(k * v);
            let rhs = k * k * drag.force(v);
            prop_assert!((lhs - rhs).abs() <= 1e-9 * rhs.abs().max(1e-12));
        }

        #[test]
        fn rolling_resistance_signed_with_velocity(v in -80.0f64..80.0) {
            prop_assume!(v != 0.0);
            let rr = RollingResistance::new(&params());
            prop_assert_eq!(rr.force(v).signum(), v.signum());
            prop_assert!((rr.force(v).abs() - rr.force(1.0)).abs() < 1e-12);
        }

        #[test]
        fn traction_clamp_never_exceeds_ceiling(f in 0.0f64..100_000.0) {
            let limit = TractionLimit::new(&params());
            prop_assert!(limit.clamp(f) <= limit.ceiling_n());
            if f <= limit.ceiling_n() {
                prop_assert_eq!(limit.clamp(f), f);
            }
        }
    }
}
