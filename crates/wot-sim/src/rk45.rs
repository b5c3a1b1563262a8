//! Adaptive Dormand-Prince 5(4) integrator.
//!
//! A 7-stage embedded pair with first-same-as-last structure. The fifth-order
//! solution propagates; the difference against the embedded fourth-order
//! solution drives the step-size controller.
//!
//! Reference: Dormand & Prince, J. Comp. Appl. Math. 6 (1980).

use crate::error::{SimError, SimResult};
use crate::ode::OdeSystem;

pub const STAGES: usize = 7;

const C: [f64; STAGES] = [0.0, 1.0 / 5.0, 3.0 / 10.0, 4.0 / 5.0, 8.0 / 9.0, 1.0, 1.0];

const A: [[f64; STAGES - 1]; STAGES] = [
    [0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
    [1.0 / 5.0, 0.0, 0.0, 0.0, 0.0, 0.0],
    [3.0 / 40.0, 9.0 / 40.0, 0.0, 0.0, 0.0, 0.0],
    [44.0 / 45.0, -56.0 / 15.0, 32.0 / 9.0, 0.0, 0.0, 0.0],
    [
        19372.0 / 6561.0,
        -25360.0 / 2187.0,
        64448.0 / 6561.0,
        -212.0 / 729.0,
        0.0,
        0.0,
    ],
    [
        9017.0 / 3168.0,
        -355.0 / 33.0,
        46732.0 / 5247.0,
        49.0 / 176.0,
        -5103.0 / 18656.0,
        0.0,
    ],
    [
        35.0 / 384.0,
        0.0,
        500.0 / 1113.0,
        125.0 / 192.0,
        -2187.0 / 6784.0,
        11.0 / 84.0,
    ],
];

/// Fifth-order weights (identical to the last stage row).
const B5: [f64; STAGES] = [
    35.0 / 384.0,
    0.0,
    500.0 / 1113.0,
    125.0 / 192.0,
    -2187.0 / 6784.0,
    11.0 / 84.0,
    0.0,
];

/// Embedded fourth-order weights.
const B4: [f64; STAGES] = [
    5179.0 / 57600.0,
    0.0,
    7571.0 / 16695.0,
    393.0 / 640.0,
    -92097.0 / 339200.0,
    187.0 / 2100.0,
    1.0 / 40.0,
];

/// Tolerance specification for error control.
///
/// The per-component error scale is `atol + rtol * max(|y|, |y_new|)`.
#[derive(Debug, Clone)]
pub struct Tolerances<const N: usize> {
    pub atol: [f64; N],
    pub rtol: [f64; N],
}

impl<const N: usize> Tolerances<N> {
    /// Uniform tolerances across all components.
    pub fn new(atol: f64, rtol: f64) -> Self {
        Self {
            atol: [atol; N],
            rtol: [rtol; N],
        }
    }

    pub fn with_components(atol: [f64; N], rtol: [f64; N]) -> Self {
        Self { atol, rtol }
    }
}

/// I-controller for the step size: h_new = safety * h * error^(-1/5).
#[derive(Debug, Clone)]
pub struct StepController {
    pub safety: f64,
    pub max_factor: f64,
    pub min_factor: f64,
    exponent: f64,
}

impl Default for StepController {
    fn default() -> Self {
        Self {
            safety: 0.9,
            max_factor: 5.0,
            min_factor: 0.2,
            // 1/(p+1) with p = 4 for the error-estimate order
            exponent: 1.0 / 5.0,
        }
    }
}

impl StepController {
    pub fn compute_factor(&self, error: f64) -> f64 {
        if error == 0.0 {
            return self.max_factor;
        }
        let factor = self.safety * error.powf(-self.exponent);
        factor.clamp(self.min_factor, self.max_factor)
    }
}

/// Result of a single attempted step.
#[derive(Debug, Clone)]
pub struct StepResult<const N: usize> {
    /// Fifth-order state at `t` (valid only when `accepted`).
    pub y: [f64; N],
    /// End time of the attempted step.
    pub t: f64,
    /// Normalized error estimate; accepted when <= 1.
    pub error: f64,
    /// Suggested magnitude for the next step.
    pub h_next: f64,
    pub accepted: bool,
}

/// Evaluation and step counters for diagnostics.
#[derive(Debug, Clone, Default)]
pub struct Stats {
    pub fn_evals: u64,
    pub accepted_steps: u64,
    pub rejected_steps: u64,
}

/// Dormand-Prince 5(4) solver with pre-allocated stage workspace.
#[derive(Clone)]
pub struct DormandPrince45<const N: usize> {
    tol: Tolerances<N>,
    controller: StepController,
    pub h_min: f64,
    pub h_max: f64,
    pub max_steps: u64,
    k: [[f64; N]; STAGES],
    pub stats: Stats,
}

impl<const N: usize> DormandPrince45<N> {
    pub fn new(tol: Tolerances<N>) -> Self {
        Self {
            tol,
            controller: StepController::default(),
            h_min: 1e-14,
            h_max: f64::INFINITY,
            max_steps: 1_000_000,
            k: [[0.0; N]; STAGES],
            stats: Stats::default(),
        }
    }

    pub fn set_step_limits(&mut self, h_min: f64, h_max: f64) {
        self.h_min = h_min;
        self.h_max = h_max;
    }

    /// Attempt one step of size `h` from (t, y).
    pub fn step<S: OdeSystem<N>>(
        &mut self,
        sys: &S,
        t: f64,
        y: &[f64; N],
        h: f64,
    ) -> StepResult<N> {
        let h = h.clamp(self.h_min, self.h_max);

        self.compute_stages(sys, t, y, h);

        let mut y5 = [0.0; N];
        for n in 0..N {
            let mut sum = 0.0;
            for (i, &b) in B5.iter().enumerate() {
                sum += b * self.k[i][n];
            }
            y5[n] = y[n] + h * sum;
        }

        let error = self.error_norm(y, &y5, h);
        let accepted = error <= 1.0;

        let factor = self.controller.compute_factor(error);
        let h_next = (h * factor).clamp(self.h_min, self.h_max);

        self.stats.fn_evals += STAGES as u64;
        if accepted {
            self.stats.accepted_steps += 1;
        } else {
            self.stats.rejected_steps += 1;
        }

        StepResult {
            y: y5,
            t: t + h,
            error,
            h_next,
            accepted,
        }
    }

    /// Integrate forward from t0 to tf, returning the final (t, y).
    pub fn integrate<S: OdeSystem<N>>(
        &mut self,
        sys: &S,
        t0: f64,
        y0: &[f64; N],
        tf: f64,
        h0: f64,
    ) -> SimResult<(f64, [f64; N])> {
        if tf < t0 {
            return Err(SimError::InvalidArg {
                what: "tf must not precede t0",
            });
        }
        if !h0.is_finite() || h0 <= 0.0 {
            return Err(SimError::InvalidArg {
                what: "h0 must be positive",
            });
        }

        let mut t = t0;
        let mut y = *y0;
        let mut h = h0;
        let mut step_count = 0u64;

        while tf - t > self.h_min {
            if t + h > tf {
                h = tf - t;
            }

            let result = self.step(sys, t, &y, h);

            if result.accepted {
                t = result.t;
                y = result.y;
                if !y.iter().all(|v| v.is_finite()) {
                    return Err(SimError::NonFiniteState { t });
                }
            } else if result.h_next <= self.h_min {
                return Err(SimError::StepSizeTooSmall {
                    t,
                    h: result.h_next,
                });
            }

            h = result.h_next;

            step_count += 1;
            if step_count > self.max_steps {
                return Err(SimError::MaxStepsExceeded);
            }
        }

        Ok((t, y))
    }

    fn compute_stages<S: OdeSystem<N>>(&mut self, sys: &S, t: f64, y: &[f64; N], h: f64) {
        let mut y_temp = [0.0; N];

        sys.rhs(t, y, &mut self.k[0]);

        for i in 1..STAGES {
            for n in 0..N {
                let mut sum = 0.0;
                for j in 0..i {
                    sum += A[i][j] * self.k[j][n];
                }
                y_temp[n] = y[n] + h * sum;
            }
            sys.rhs(t + C[i] * h, &y_temp, &mut self.k[i]);
        }
    }

    fn error_norm(&self, y: &[f64; N], y5: &[f64; N], h: f64) -> f64 {
        let mut sum = 0.0;
        for n in 0..N {
            let mut de = 0.0;
            for i in 0..STAGES {
                de += (B5[i] - B4[i]) * self.k[i][n];
            }
            let scale = self.tol.atol[n] + self.tol.rtol[n] * y[n].abs().max(y5[n].abs());
            let e = h * de / scale;
            sum += e * e;
        }
        (sum / N as f64).sqrt()
    }
}
