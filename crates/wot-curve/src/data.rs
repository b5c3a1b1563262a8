//! Built-in dyno sample data for a Taycan-class two-motor EV.
//!
//! These are the curve provider's standard data set so the pipeline runs
//! without external files; delimited-text files loaded through
//! [`TorqueSamples::from_delimited`] override them. Speeds are km/h at the
//! wheel-lookup domain, torques are N·m at the wheel (post-reduction).

use crate::error::CurveResult;
use crate::samples::TorqueSamples;
use crate::set::{CurveSet, FitConfig};

/// Front-axle dyno samples. The high-torque region follows the motor's
/// field-weakening roll-off; the tail below ~3100 N·m is an instrumented
/// segment with a structural break and is excluded from the boost fit.
pub const FRONT_AXLE: &[(f64, f64)] = &[
    (0.0, 4400.0),
    (20.0, 4376.0),
    (40.0, 4304.0),
    (60.0, 4184.0),
    (80.0, 4016.0),
    (100.0, 3800.0),
    (120.0, 3536.0),
    (140.0, 3224.0),
    (160.0, 2790.0),
    (180.0, 2395.0),
    (200.0, 1980.0),
];

/// Rear axle, range calibration.
pub const REAR_AXLE_RANGE: &[(f64, f64)] = &[
    (0.0, 5400.0),
    (20.0, 5400.0),
    (40.0, 5400.0),
    (60.0, 5400.0),
    (80.0, 5000.0),
    (100.0, 4000.0),
    (120.0, 3100.0),
    (140.0, 2300.0),
    (160.0, 1700.0),
    (180.0, 1200.0),
    (200.0, 900.0),
];

/// Rear axle, performance calibration.
pub const REAR_AXLE_PERFORMANCE: &[(f64, f64)] = &[
    (0.0, 5400.0),
    (20.0, 5400.0),
    (40.0, 5400.0),
    (60.0, 5400.0),
    (80.0, 5100.0),
    (100.0, 4080.0),
    (120.0, 3400.0),
    (140.0, 2914.0),
    (160.0, 2550.0),
    (180.0, 2267.0),
    (200.0, 2040.0),
    (220.0, 1855.0),
    (240.0, 1700.0),
];

/// Sustained full-availability ("max torque") curve, both axles combined.
pub const MAX_AVAILABILITY: &[(f64, f64)] = &[
    (0.0, 7100.0),
    (20.0, 7100.0),
    (40.0, 7100.0),
    (60.0, 7100.0),
    (80.0, 7100.0),
    (100.0, 5736.0),
    (120.0, 4780.0),
    (140.0, 4097.0),
    (160.0, 3585.0),
    (180.0, 3187.0),
    (200.0, 2868.0),
    (220.0, 2607.0),
    (240.0, 2390.0),
    (260.0, 2206.0),
    (280.0, 2049.0),
    (300.0, 1912.0),
];

pub fn front_axle() -> CurveResult<TorqueSamples> {
    TorqueSamples::new(FRONT_AXLE)
}

pub fn rear_axle_range() -> CurveResult<TorqueSamples> {
    TorqueSamples::new(REAR_AXLE_RANGE)
}

pub fn rear_axle_performance() -> CurveResult<TorqueSamples> {
    TorqueSamples::new(REAR_AXLE_PERFORMANCE)
}

pub fn max_availability() -> CurveResult<TorqueSamples> {
    TorqueSamples::new(MAX_AVAILABILITY)
}

/// The default curve set with the reference fit configuration.
pub fn default_curve_set() -> CurveResult<CurveSet> {
    CurveSet::new(
        front_axle()?,
        rear_axle_range()?,
        rear_axle_performance()?,
        max_availability()?,
        FitConfig::default(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_data_is_valid() {
        assert!(front_axle().is_ok());
        assert!(rear_axle_range().is_ok());
        assert!(rear_axle_performance().is_ok());
        assert!(max_availability().is_ok());
        assert!(default_curve_set().is_ok());
    }

    #[test]
    fn front_fit_cut_is_at_first_sample_below_floor() {
        // samples 0..=7 are at or above 3100 N·m; index 8 (2790) is first below
        let floor = FitConfig::default().front_torque_floor_nm;
        let first_below = FRONT_AXLE.iter().position(|&(_, t)| t < floor);
        assert_eq!(first_below, Some(8));
    }
}
