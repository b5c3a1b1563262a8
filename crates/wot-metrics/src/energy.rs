//! Energy-conservation audit.
//!
//! Propulsion work minus aerodynamic and rolling losses, accumulated by the
//! trapezoid rule over the recorded trajectory, must match the change in
//! kinetic energy. A large residual indicates a modeling or
//! integration-accuracy defect.

use crate::error::{MetricsError, MetricsResult};
use tracing::debug;
use wot_sim::Trajectory;
use wot_vehicle::LongitudinalModel;

/// Relative residual above which the audit fails.
pub const ENERGY_TOL: f64 = 1e-3;

/// Signed relative residual: (net work - ΔKE) / ΔKE.
pub fn energy_residual(model: &LongitudinalModel, traj: &Trajectory) -> MetricsResult<f64> {
    if traj.is_empty() {
        return Err(MetricsError::EmptyTrajectory);
    }
    if traj.len() < 2 {
        return Err(MetricsError::Degenerate {
            what: "at least two samples required",
        });
    }

    let net = |i: usize| -> f64 {
        let v = traj.velocity_mps[i];
        model.wheel_force_n(v, traj.time_s[i])
            - model.drag_force_n(v)
            - model.rolling_force_n(v)
    };

    let mut work_j = 0.0;
    let mut f_prev = net(0);
    for i in 1..traj.len() {
        let f = net(i);
        work_j += 0.5 * (f_prev + f) * (traj.position_m[i] - traj.position_m[i - 1]);
        f_prev = f;
    }

    let v0 = traj.velocity_mps[0];
    let vf = traj.velocity_mps[traj.len() - 1];
    let delta_ke_j = 0.5 * model.mass_kg() * (vf * vf - v0 * v0);
    if delta_ke_j <= 0.0 {
        return Err(MetricsError::Degenerate {
            what: "kinetic energy did not increase over the run",
        });
    }

    let residual = (work_j - delta_ke_j) / delta_ke_j;
    debug!(work_j, delta_ke_j, residual, "energy audit");
    Ok(residual)
}

/// Run the audit and fail if |residual| exceeds `ENERGY_TOL`.
pub fn audit_energy(model: &LongitudinalModel, traj: &Trajectory) -> MetricsResult<f64> {
    let residual = energy_residual(model, traj)?;
    if residual.abs() > ENERGY_TOL {
        return Err(MetricsError::EnergyImbalance { residual });
    }
    Ok(residual)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wot_vehicle::VehicleParams;

    fn model() -> LongitudinalModel {
        let curves = wot_curve::data::default_curve_set().unwrap();
        LongitudinalModel::new(&VehicleParams::default(), curves).unwrap()
    }

    #[test]
    fn degenerate_trajectories_are_rejected() {
        let m = model();
        let traj = Trajectory::new();
        assert!(matches!(
            energy_residual(&m, &traj),
            Err(MetricsError::EmptyTrajectory)
        ));

        let mut flat = Trajectory::new();
        flat.push(0.0, 0.0, 0.0, 0.0);
        flat.push(1.0, 0.0, 0.0, 0.0);
        assert!(matches!(
            energy_residual(&m, &flat),
            Err(MetricsError::Degenerate { .. })
        ));
    }

    #[test]
    fn consistent_launch_segment_balances() {
        // integrate the model's own dynamics finely by hand over a short
        // traction-limited stretch; work and ΔKE must agree closely
        let m = model();
        let mut traj = Trajectory::new();
        let dt = 1e-5;
        let (mut t, mut x, mut v) = (0.0, 0.0, 0.0);
        traj.push(t, x, v, m.acceleration_mps2(v, t));
        for _ in 0..20_000 {
            // midpoint step
            let a1 = m.acceleration_mps2(v, t);
            let vm = v + 0.5 * dt * a1;
            let am = m.acceleration_mps2(vm, t + 0.5 * dt);
            x += dt * (v + 0.5 * dt * am);
            v += dt * am;
            t += dt;
            traj.push(t, x, v, am);
        }
        let residual = audit_energy(&m, &traj).unwrap();
        assert!(residual.abs() < 1e-3, "residual {residual}");
    }
}
