//! Piecewise-linear interpolation over ordered samples.

use crate::samples::TorqueSamples;

/// Out-of-range policy for queries beyond the sampled domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extrapolation {
    /// Hold the boundary sample value constant ("flat").
    Flat,
    /// Continue the boundary segment's slope ("line").
    Linear,
}

/// Piecewise-linear interpolant. Total over all real queries: out-of-range
/// inputs are resolved by the extrapolation policy, never an error.
#[derive(Debug, Clone)]
pub struct Interp1d {
    xs: Vec<f64>,
    ys: Vec<f64>,
    extrapolation: Extrapolation,
}

impl Interp1d {
    pub fn new(samples: &TorqueSamples, extrapolation: Extrapolation) -> Self {
        Self {
            xs: samples.speeds_kph().to_vec(),
            ys: samples.torques_nm().to_vec(),
            extrapolation,
        }
    }

    /// Interpolant of the segment containing `x` (boundary segment when out
    /// of range and the policy is `Linear`).
    fn segment_value(&self, seg: usize, x: f64) -> f64 {
        let (x0, x1) = (self.xs[seg], self.xs[seg + 1]);
        let (y0, y1) = (self.ys[seg], self.ys[seg + 1]);
        y0 + (y1 - y0) * (x - x0) / (x1 - x0)
    }

    pub fn eval(&self, x: f64) -> f64 {
        let n = self.xs.len();
        if x < self.xs[0] {
            return match self.extrapolation {
                Extrapolation::Flat => self.ys[0],
                Extrapolation::Linear => self.segment_value(0, x),
            };
        }
        if x > self.xs[n - 1] {
            return match self.extrapolation {
                Extrapolation::Flat => self.ys[n - 1],
                Extrapolation::Linear => self.segment_value(n - 2, x),
            };
        }

        // partition_point: first index with xs[i] > x, so seg = i - 1
        let i = self.xs.partition_point(|&xi| xi <= x);
        if i == 0 {
            return self.ys[0];
        }
        if i == n {
            return self.ys[n - 1];
        }
        self.segment_value(i - 1, x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn samples() -> TorqueSamples {
        TorqueSamples::new(&[(0.0, 100.0), (10.0, 80.0), (30.0, 40.0)]).unwrap()
    }

    #[test]
    fn interpolates_within_segments() {
        let f = Interp1d::new(&samples(), Extrapolation::Linear);
        assert_relative_eq!(f.eval(0.0), 100.0);
        assert_relative_eq!(f.eval(5.0), 90.0);
        assert_relative_eq!(f.eval(10.0), 80.0);
        assert_relative_eq!(f.eval(20.0), 60.0);
        assert_relative_eq!(f.eval(30.0), 40.0);
    }

    #[test]
    fn linear_extrapolation_continues_boundary_slope() {
        let f = Interp1d::new(&samples(), Extrapolation::Linear);
        // leading segment slope is -2 per unit
        assert_relative_eq!(f.eval(-5.0), 110.0);
        // trailing segment slope is -2 per unit
        assert_relative_eq!(f.eval(40.0), 20.0);
    }

    #[test]
    fn flat_extrapolation_holds_boundary_values() {
        let f = Interp1d::new(&samples(), Extrapolation::Flat);
        assert_relative_eq!(f.eval(-5.0), 100.0);
        assert_relative_eq!(f.eval(1000.0), 40.0);
    }
}
