//! First-crossing search over a recorded trajectory.

use crate::error::{MetricsError, MetricsResult};
use wot_sim::Trajectory;

/// Which trajectory column a threshold watches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThresholdVar {
    Position,
    Velocity,
}

/// Interpolated crossing point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Crossing {
    pub time_s: f64,
    pub velocity_mps: f64,
}

/// Locate the first sample where `var` reaches or exceeds `target`, refined
/// by linear interpolation inside the bracketing segment.
///
/// `name` labels the threshold in the not-reached error.
pub fn first_crossing(
    traj: &Trajectory,
    var: ThresholdVar,
    target: f64,
    name: &'static str,
) -> MetricsResult<Crossing> {
    if traj.is_empty() {
        return Err(MetricsError::EmptyTrajectory);
    }

    let col: &[f64] = match var {
        ThresholdVar::Position => &traj.position_m,
        ThresholdVar::Velocity => &traj.velocity_mps,
    };

    let i = match col.iter().position(|&value| value >= target) {
        Some(i) => i,
        None => return Err(MetricsError::ThresholdNotReached { name }),
    };

    if i == 0 {
        return Ok(Crossing {
            time_s: traj.time_s[0],
            velocity_mps: traj.velocity_mps[0],
        });
    }

    let span = col[i] - col[i - 1];
    // col[i] >= target > col[i-1] guarantees a positive span
    let frac = (target - col[i - 1]) / span;
    Ok(Crossing {
        time_s: traj.time_s[i - 1] + frac * (traj.time_s[i] - traj.time_s[i - 1]),
        velocity_mps: traj.velocity_mps[i - 1]
            + frac * (traj.velocity_mps[i] - traj.velocity_mps[i - 1]),
    })
}
