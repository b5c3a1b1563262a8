//! Combined and boosted axle torque curves.

use crate::error::{CurveError, CurveResult};
use crate::interp::{Extrapolation, Interp1d};
use crate::polyfit::{fit_polynomial, Polynomial};
use crate::samples::TorqueSamples;
use wot_core::relative_deviation;

/// Configuration for the boosted curve construction.
///
/// The front-axle fit depends on an exact sample cut (first sample whose
/// torque drops below `front_torque_floor_nm`) and an exact fit degree; both
/// are configuration rather than constants so a changed data set is visible
/// as a deliberate choice, not a silent behavior shift.
#[derive(Debug, Clone, Copy)]
pub struct FitConfig {
    /// Structural break in the front-axle data: samples below this torque
    /// are excluded from the fit.
    pub front_torque_floor_nm: f64,
    /// Degree of the least-squares fit over the kept front samples.
    pub fit_degree: usize,
    /// Hardware torque ceiling for the boosted front axle.
    pub front_ceiling_nm: f64,
    /// Hardware torque ceiling for the boosted rear axle.
    pub rear_ceiling_nm: f64,
    /// Overboost scaling applied to the combined rear curve.
    pub boost_ratio: f64,
    /// Max relative deviation of the fit at kept samples before a warning.
    pub fit_divergence_tol: f64,
}

impl Default for FitConfig {
    fn default() -> Self {
        Self {
            front_torque_floor_nm: 3100.0,
            fit_degree: 4,
            front_ceiling_nm: 3850.0,
            rear_ceiling_nm: 5940.0,
            boost_ratio: 1.1,
            fit_divergence_tol: 2e-2,
        }
    }
}

/// Continuous torque curves for both axles, built once from raw samples.
///
/// All queries are in the curves' native km/h domain and are total for any
/// real speed; out-of-range behavior follows each curve's extrapolation
/// policy.
#[derive(Debug, Clone)]
pub struct CurveSet {
    front: Interp1d,
    rear_a: Interp1d,
    rear_b: Interp1d,
    max_avail: Interp1d,
    front_fit: Polynomial,
    config: FitConfig,
}

impl CurveSet {
    pub fn new(
        front: TorqueSamples,
        rear_a: TorqueSamples,
        rear_b: TorqueSamples,
        max_avail: TorqueSamples,
        config: FitConfig,
    ) -> CurveResult<Self> {
        let front_fit = Self::fit_front(&front, &config)?;

        Ok(Self {
            front: Interp1d::new(&front, Extrapolation::Linear),
            rear_a: Interp1d::new(&rear_a, Extrapolation::Linear),
            rear_b: Interp1d::new(&rear_b, Extrapolation::Linear),
            // The full-availability curve plateaus past its samples.
            max_avail: Interp1d::new(&max_avail, Extrapolation::Flat),
            front_fit,
            config,
        })
    }

    /// Fit the high-torque prefix of the front samples: keep everything up
    /// to (excluding) the first sample below the torque floor, then fit.
    fn fit_front(front: &TorqueSamples, config: &FitConfig) -> CurveResult<Polynomial> {
        let torques = front.torques_nm();
        let cut = torques
            .iter()
            .position(|&t| t < config.front_torque_floor_nm)
            .unwrap_or(torques.len());

        let needed = config.fit_degree + 2;
        if cut < needed {
            return Err(CurveError::FitUnderdetermined {
                degree: config.fit_degree,
                needed,
                got: cut,
            });
        }

        let xs = &front.speeds_kph()[..cut];
        let ys = &torques[..cut];
        let fit = fit_polynomial(xs, ys, config.fit_degree)?;

        // Flag fit divergence from the kept samples instead of silently
        // accepting a different curve.
        let mut worst = 0.0_f64;
        for (&x, &y) in xs.iter().zip(ys.iter()) {
            worst = worst.max(relative_deviation(fit.eval(x), y));
        }
        if worst > config.fit_divergence_tol {
            tracing::warn!(
                max_relative_deviation = worst,
                degree = config.fit_degree,
                kept_samples = cut,
                "boosted front-axle fit diverges from its samples"
            );
        }

        Ok(fit)
    }

    pub fn config(&self) -> &FitConfig {
        &self.config
    }

    /// Raw front-axle torque (piecewise linear).
    pub fn front_torque(&self, speed_kph: f64) -> f64 {
        self.front.eval(speed_kph)
    }

    /// Better of the two rear-axle drive-mode calibrations.
    pub fn rear_combined_torque(&self, speed_kph: f64) -> f64 {
        self.rear_a.eval(speed_kph).max(self.rear_b.eval(speed_kph))
    }

    /// Overboost rear torque: ratio-scaled combined rear, ceiling-clamped.
    pub fn rear_boosted_torque(&self, speed_kph: f64) -> f64 {
        (self.config.boost_ratio * self.rear_combined_torque(speed_kph))
            .min(self.config.rear_ceiling_nm)
    }

    /// Overboost front torque: fitted high-torque curve, ceiling-clamped.
    pub fn front_boosted_torque(&self, speed_kph: f64) -> f64 {
        self.front_fit.eval(speed_kph).min(self.config.front_ceiling_nm)
    }

    /// Sustained full-availability torque (flat beyond its sample range).
    pub fn max_torque(&self, speed_kph: f64) -> f64 {
        self.max_avail.eval(speed_kph)
    }
}
