//! Standard performance figures extracted from one standing-start run.

use crate::error::MetricsResult;
use crate::threshold::{first_crossing, ThresholdVar};
use tracing::debug;
use wot_core::units::{mph_to_mps, mps_to_mph};
use wot_core::constants::{QUARTER_MILE_M, ROLLOUT_M};
use wot_sim::Trajectory;

/// Named scalar metrics of a wide-open-throttle run.
///
/// All interval times are measured from launch; imperial test thresholds
/// are converted to SI before searching the trajectory.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerformanceReport {
    /// Time to cover the first foot of travel [s].
    pub rollout_s: f64,
    pub zero_to_sixty_s: f64,
    pub zero_to_hundred_s: f64,
    pub zero_to_one_fifty_s: f64,
    /// Rolling start: t(60 mph) - t(5 mph) [s].
    pub five_to_sixty_s: f64,
    pub thirty_to_fifty_s: f64,
    pub fifty_to_seventy_s: f64,
    /// Time to 402.336 m [s].
    pub quarter_mile_s: f64,
    /// Speed at the quarter-mile mark [mph].
    pub trap_speed_mph: f64,
}

impl PerformanceReport {
    /// Extract the full report from a trajectory that covers at least
    /// 150 mph and the quarter mile.
    pub fn extract(traj: &Trajectory) -> MetricsResult<Self> {
        let speed = |mph: f64, name: &'static str| -> MetricsResult<f64> {
            Ok(first_crossing(traj, ThresholdVar::Velocity, mph_to_mps(mph), name)?.time_s)
        };

        let t5 = speed(5.0, "5 mph")?;
        let t30 = speed(30.0, "30 mph")?;
        let t50 = speed(50.0, "50 mph")?;
        let t60 = speed(60.0, "60 mph")?;
        let t70 = speed(70.0, "70 mph")?;
        let t100 = speed(100.0, "100 mph")?;
        let t150 = speed(150.0, "150 mph")?;

        let rollout = first_crossing(traj, ThresholdVar::Position, ROLLOUT_M, "rollout")?;
        let quarter = first_crossing(traj, ThresholdVar::Position, QUARTER_MILE_M, "quarter mile")?;

        debug!(t60, quarter = quarter.time_s, "extracted performance report");

        Ok(Self {
            rollout_s: rollout.time_s,
            zero_to_sixty_s: t60,
            zero_to_hundred_s: t100,
            zero_to_one_fifty_s: t150,
            five_to_sixty_s: t60 - t5,
            thirty_to_fifty_s: t50 - t30,
            fifty_to_seventy_s: t70 - t50,
            quarter_mile_s: quarter.time_s,
            trap_speed_mph: mps_to_mph(quarter.velocity_mps),
        })
    }
}
