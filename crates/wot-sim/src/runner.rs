//! Wide-open-throttle run driver.
//!
//! Integrates the two-state longitudinal ODE from standstill until the stop
//! condition crosses, recording a uniformly sampled trajectory plus the
//! exact terminal point. The span is split at the overboost expiry so each
//! leg integrates smooth dynamics.

use crate::error::{SimError, SimResult};
use crate::events::{brent_root, HermiteSegment, StopCondition};
use crate::ode::{ForcePhase, LongitudinalOde};
use crate::rk45::{DormandPrince45, Tolerances};
use crate::trajectory::Trajectory;
use tracing::{debug, info};
use wot_vehicle::LongitudinalModel;

/// Options for a wide-open-throttle run.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Terminal condition.
    pub stop: StopCondition,
    /// Relative tolerance for the embedded error estimate.
    pub rel_tol: f64,
    /// Absolute tolerance for the embedded error estimate.
    pub abs_tol: f64,
    /// Uniform recording interval [s].
    pub sample_dt_s: f64,
    /// Give up if the stop condition has not crossed by this time [s].
    pub max_time_s: f64,
    /// Initial step size guess [s].
    pub initial_step_s: f64,
    /// Safety limit on attempted steps.
    pub max_steps: u64,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            // 150 mph, the slowest-crossing threshold of the standard report
            stop: StopCondition::SpeedReached(67.056),
            rel_tol: 1e-9,
            abs_tol: 1e-12,
            sample_dt_s: 1e-3,
            max_time_s: 40.0,
            initial_step_s: 1e-4,
            max_steps: 1_000_000,
        }
    }
}

impl RunOptions {
    pub fn validate(&self) -> SimResult<()> {
        let positive = [
            (self.rel_tol, "rel_tol must be positive"),
            (self.abs_tol, "abs_tol must be positive"),
            (self.sample_dt_s, "sample_dt_s must be positive"),
            (self.max_time_s, "max_time_s must be positive"),
            (self.initial_step_s, "initial_step_s must be positive"),
        ];
        for (value, what) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(SimError::InvalidArg { what });
            }
        }
        if self.max_steps == 0 {
            return Err(SimError::InvalidArg {
                what: "max_steps must be positive",
            });
        }
        Ok(())
    }
}

const ROOT_TOL_S: f64 = 1e-12;
const ROOT_MAX_ITER: usize = 100;
const SPAN_EPS_S: f64 = 1e-12;

/// Run from standstill until `opts.stop` crosses.
///
/// The returned trajectory starts at t = 0 and ends with the terminal sample
/// located by root-finding, so its last entry sits exactly on the stop
/// condition (to root tolerance).
pub fn run_wot(model: &LongitudinalModel, opts: &RunOptions) -> SimResult<Trajectory> {
    opts.validate()?;

    let mut traj = Trajectory::with_capacity((opts.max_time_s / opts.sample_dt_s) as usize + 2);
    let mut t = 0.0_f64;
    let mut y = [0.0_f64; 2];
    traj.push(t, y[0], y[1], model.acceleration_mps2(y[1], t));

    let mut g_prev = opts.stop.eval(&y);
    if g_prev >= 0.0 {
        debug!(stop = %opts.stop.describe(), "stop condition already satisfied at launch");
        return Ok(traj);
    }

    let t_boost = model.boost_duration_s();
    let mut legs: Vec<(f64, ForcePhase)> = Vec::with_capacity(2);
    if t_boost > 0.0 {
        legs.push((t_boost.min(opts.max_time_s), ForcePhase::Boosted));
    }
    if t_boost < opts.max_time_s {
        legs.push((opts.max_time_s, ForcePhase::Nominal));
    }

    let mut solver = DormandPrince45::new(Tolerances::new(opts.abs_tol, opts.rel_tol));
    solver.max_steps = opts.max_steps;

    let mut h = opts.initial_step_s;
    let mut next_sample = 1u64;
    let mut step_count = 0u64;

    for &(t_end, phase) in &legs {
        let sys = LongitudinalOde::new(model, phase);
        debug!(t_start = t, t_end, ?phase, "integrating leg");

        while t_end - t > SPAN_EPS_S {
            let h_try = h.min(t_end - t);
            let result = solver.step(&sys, t, &y, h_try);

            if result.accepted {
                let (t_b, y_b) = (result.t, result.y);
                if !y_b.iter().all(|v| v.is_finite()) {
                    return Err(SimError::NonFiniteState { t: t_b });
                }

                let seg = HermiteSegment::new(&sys, t, &y, t_b, &y_b);
                let g_new = opts.stop.eval(&y_b);

                if g_prev < 0.0 && g_new >= 0.0 {
                    let g_of = |s: f64| opts.stop.eval(&seg.eval(s));
                    let t_star =
                        brent_root(g_of, t, t_b, g_prev, g_new, ROOT_TOL_S, ROOT_MAX_ITER)?;

                    emit_grid(&mut traj, model, opts, &seg, &mut next_sample, t_star);
                    let mut y_star = seg.eval(t_star);
                    // snap the watched component onto the target so the
                    // terminal sample satisfies the stop condition exactly
                    match opts.stop {
                        StopCondition::SpeedReached(target) => y_star[1] = target,
                        StopCondition::DistanceReached(target) => y_star[0] = target,
                    }
                    traj.push(
                        t_star,
                        y_star[0],
                        y_star[1],
                        model.acceleration_mps2(y_star[1], t_star),
                    );
                    info!(
                        stop = %opts.stop.describe(),
                        t_stop = t_star,
                        accepted = solver.stats.accepted_steps,
                        rejected = solver.stats.rejected_steps,
                        fn_evals = solver.stats.fn_evals,
                        "run complete"
                    );
                    return Ok(traj);
                }

                emit_grid(&mut traj, model, opts, &seg, &mut next_sample, f64::INFINITY);
                t = t_b;
                y = y_b;
                g_prev = g_new;
            } else if result.h_next <= solver.h_min {
                return Err(SimError::StepSizeTooSmall {
                    t,
                    h: result.h_next,
                });
            }

            h = result.h_next;

            step_count += 1;
            if step_count > opts.max_steps {
                return Err(SimError::MaxStepsExceeded);
            }
        }
    }

    Err(SimError::TargetNotReached {
        t_max: opts.max_time_s,
    })
}

/// Record grid points covered by `seg`, stopping short of `t_limit`.
fn emit_grid(
    traj: &mut Trajectory,
    model: &LongitudinalModel,
    opts: &RunOptions,
    seg: &HermiteSegment<2>,
    next_sample: &mut u64,
    t_limit: f64,
) {
    let (_, t_b) = seg.span();
    let slack = 1e-9 * opts.sample_dt_s;
    loop {
        let tg = *next_sample as f64 * opts.sample_dt_s;
        if tg > t_b + slack || tg >= t_limit {
            return;
        }
        let yg = seg.eval(tg);
        traj.push(tg, yg[0], yg[1], model.acceleration_mps2(yg[1], tg));
        *next_sample += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use wot_vehicle::VehicleParams;

    fn model() -> LongitudinalModel {
        let curves = wot_curve::data::default_curve_set().unwrap();
        LongitudinalModel::new(&VehicleParams::default(), curves).unwrap()
    }

    #[test]
    fn terminal_sample_sits_on_speed_target() {
        let m = model();
        let opts = RunOptions {
            stop: StopCondition::SpeedReached(1.0),
            ..Default::default()
        };
        let traj = run_wot(&m, &opts).unwrap();
        let last = traj.terminal().unwrap();
        assert_relative_eq!(last.velocity_mps, 1.0, epsilon = 1e-6);
        // traction-limited launch: nearly constant acceleration, drag at
        // 1 m/s is ~1e-5 of the clamped wheel force
        let a = m.acceleration_mps2(0.5, 0.0);
        assert_relative_eq!(last.time_s, 1.0 / a, max_relative = 1e-4);
    }

    #[test]
    fn terminal_sample_sits_on_distance_target() {
        let m = model();
        let opts = RunOptions {
            stop: StopCondition::DistanceReached(0.3048),
            ..Default::default()
        };
        let traj = run_wot(&m, &opts).unwrap();
        let last = traj.terminal().unwrap();
        assert_relative_eq!(last.position_m, 0.3048, epsilon = 1e-6);
        // constant-acceleration estimate of the first foot
        let a0 = m.acceleration_mps2(0.0, 0.0);
        let t_est = (2.0 * 0.3048 / a0).sqrt();
        assert_relative_eq!(last.time_s, t_est, max_relative = 1e-2);
    }

    #[test]
    fn trajectory_is_monotone_and_uniformly_sampled() {
        let m = model();
        let opts = RunOptions {
            stop: StopCondition::SpeedReached(30.0),
            ..Default::default()
        };
        let traj = run_wot(&m, &opts).unwrap();
        assert!(traj.len() > 100);
        for i in 1..traj.len() {
            assert!(traj.time_s[i] > traj.time_s[i - 1]);
            assert!(traj.position_m[i] >= traj.position_m[i - 1]);
            assert!(traj.velocity_mps[i] >= traj.velocity_mps[i - 1]);
        }
        // interior points lie on the 1 ms grid
        for i in 1..traj.len() - 1 {
            let k = (traj.time_s[i] / opts.sample_dt_s).round();
            assert_relative_eq!(traj.time_s[i], k * opts.sample_dt_s, epsilon = 1e-9);
        }
    }

    #[test]
    fn unreachable_target_reports_time_limit() {
        let m = model();
        let opts = RunOptions {
            stop: StopCondition::SpeedReached(500.0),
            max_time_s: 5.0,
            ..Default::default()
        };
        assert!(matches!(
            run_wot(&m, &opts),
            Err(SimError::TargetNotReached { t_max }) if t_max == 5.0
        ));
    }

    #[test]
    fn zero_target_returns_launch_sample_only() {
        let m = model();
        let opts = RunOptions {
            stop: StopCondition::SpeedReached(0.0),
            ..Default::default()
        };
        let traj = run_wot(&m, &opts).unwrap();
        assert_eq!(traj.len(), 1);
        assert_eq!(traj.time_s[0], 0.0);
    }

    #[test]
    fn rejects_bad_options() {
        let m = model();
        let opts = RunOptions {
            sample_dt_s: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            run_wot(&m, &opts),
            Err(SimError::InvalidArg { .. })
        ));
    }
}
