//! Net longitudinal force and acceleration.

use crate::error::VehicleResult;
use crate::forces::{AeroDrag, BoostWindow, RollingResistance, TractionLimit, WheelForce};
use crate::params::VehicleParams;
use wot_curve::CurveSet;

/// Single-degree-of-freedom longitudinal model under wide-open throttle.
///
/// Composes the force stages without branching on global state:
/// `propulsive = clamp(gated wheel force) − drag − rolling`.
#[derive(Debug, Clone)]
pub struct LongitudinalModel {
    mass_kg: f64,
    drag: AeroDrag,
    rolling: RollingResistance,
    boost: BoostWindow,
    traction: TractionLimit,
    wheels: WheelForce,
}

impl LongitudinalModel {
    pub fn new(params: &VehicleParams, curves: CurveSet) -> VehicleResult<Self> {
        params.validate()?;
        Ok(Self {
            mass_kg: params.mass_kg,
            drag: AeroDrag::new(params),
            rolling: RollingResistance::new(params),
            boost: BoostWindow::new(params),
            traction: TractionLimit::new(params),
            wheels: WheelForce::new(params, curves),
        })
    }

    pub fn mass_kg(&self) -> f64 {
        self.mass_kg
    }

    pub fn boost_duration_s(&self) -> f64 {
        self.boost.duration_s()
    }

    /// Traction-clamped wheel force [N] with the overboost window open.
    pub fn boosted_wheel_force_n(&self, v_mps: f64) -> f64 {
        self.traction.clamp(self.wheels.boosted_n(v_mps))
    }

    /// Traction-clamped sustained wheel force [N].
    pub fn nominal_wheel_force_n(&self, v_mps: f64) -> f64 {
        self.traction.clamp(self.wheels.nominal_n(v_mps))
    }

    /// Traction-clamped, boost-gated wheel force [N].
    pub fn wheel_force_n(&self, v_mps: f64, t_s: f64) -> f64 {
        if self.boost.active(t_s) {
            self.boosted_wheel_force_n(v_mps)
        } else {
            self.nominal_wheel_force_n(v_mps)
        }
    }

    /// Aerodynamic drag at this speed [N].
    pub fn drag_force_n(&self, v_mps: f64) -> f64 {
        self.drag.force(v_mps)
    }

    /// Rolling resistance at this speed [N].
    pub fn rolling_force_n(&self, v_mps: f64) -> f64 {
        self.rolling.force(v_mps)
    }

    /// Net propulsive force [N] at (speed, elapsed time).
    pub fn propulsive_force_n(&self, v_mps: f64, t_s: f64) -> f64 {
        self.wheel_force_n(v_mps, t_s) - self.drag_force_n(v_mps) - self.rolling_force_n(v_mps)
    }

    /// Longitudinal acceleration [m/s²] at (speed, elapsed time).
    pub fn acceleration_mps2(&self, v_mps: f64, t_s: f64) -> f64 {
        self.propulsive_force_n(v_mps, t_s) / self.mass_kg
    }

    /// Acceleration [m/s²] with the boosted wheel force, regardless of time.
    ///
    /// Integrators evaluate each side of the boost-expiry step with one of
    /// these so no stage straddles the force discontinuity.
    pub fn boosted_acceleration_mps2(&self, v_mps: f64) -> f64 {
        (self.boosted_wheel_force_n(v_mps) - self.drag_force_n(v_mps) - self.rolling_force_n(v_mps))
            / self.mass_kg
    }

    /// Acceleration [m/s²] with the sustained wheel force, regardless of time.
    pub fn nominal_acceleration_mps2(&self, v_mps: f64) -> f64 {
        (self.nominal_wheel_force_n(v_mps) - self.drag_force_n(v_mps) - self.rolling_force_n(v_mps))
            / self.mass_kg
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn model() -> LongitudinalModel {
        let curves = wot_curve::data::default_curve_set().unwrap();
        LongitudinalModel::new(&VehicleParams::default(), curves).unwrap()
    }

    #[test]
    fn launch_force_is_traction_limited() {
        let m = model();
        let params = VehicleParams::default();
        // raw boosted capability at standstill (27.5 kN) exceeds grip
        assert_relative_eq!(
            m.wheel_force_n(0.0, 0.0),
            params.traction_ceiling_n(),
            max_relative = 1e-12
        );
    }

    #[test]
    fn boost_expiry_switches_to_nominal() {
        let m = model();
        let t_boost = m.boost_duration_s();
        let v = 30.0;
        let during = m.wheel_force_n(v, t_boost - 1e-9);
        let after = m.wheel_force_n(v, t_boost);
        assert!(during > after, "boost should outpull nominal at {v} m/s");
        // at 30 m/s no clamp is active: nominal = max_torque / mean radius
        let k = 3.6 * 1.02 * v;
        let curves = wot_curve::data::default_curve_set().unwrap();
        assert_relative_eq!(after, curves.max_torque(k) / 0.355, max_relative = 1e-12);
    }

    #[test]
    fn acceleration_is_force_over_mass() {
        let m = model();
        let (v, t) = (15.0, 1.0);
        assert_relative_eq!(
            m.acceleration_mps2(v, t),
            m.propulsive_force_n(v, t) / 2350.0,
            max_relative = 1e-12
        );
    }

    #[test]
    fn gated_acceleration_matches_phase_variants() {
        let m = model();
        let v = 20.0;
        assert_eq!(m.acceleration_mps2(v, 0.0), m.boosted_acceleration_mps2(v));
        assert_eq!(
            m.acceleration_mps2(v, m.boost_duration_s()),
            m.nominal_acceleration_mps2(v)
        );
    }

    #[test]
    fn standstill_acceleration_has_no_resistive_terms() {
        let m = model();
        let params = VehicleParams::default();
        // drag and rolling resistance are exactly zero at v = 0
        assert_relative_eq!(
            m.propulsive_force_n(0.0, 0.0),
            params.traction_ceiling_n(),
            max_relative = 1e-12
        );
    }
}
