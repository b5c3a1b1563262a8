//! Stop conditions and continuous event location.
//!
//! Crossings are detected as a sign change of g = value - target across an
//! accepted step, then located by Brent's method on a Hermite cubic
//! reconstruction of the step interior (O(h^4) state accuracy).

use crate::error::{SimError, SimResult};
use crate::ode::OdeSystem;

/// Terminal condition for a run, evaluated on y = [position, velocity].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StopCondition {
    /// Stop when velocity [m/s] reaches the target.
    SpeedReached(f64),
    /// Stop when position [m] reaches the target.
    DistanceReached(f64),
}

impl StopCondition {
    /// Signed distance to the target; negative before the crossing.
    pub fn eval(&self, y: &[f64; 2]) -> f64 {
        match *self {
            StopCondition::SpeedReached(target) => y[1] - target,
            StopCondition::DistanceReached(target) => y[0] - target,
        }
    }

    pub fn describe(&self) -> String {
        match *self {
            StopCondition::SpeedReached(target) => format!("speed {target:.3} m/s"),
            StopCondition::DistanceReached(target) => format!("distance {target:.3} m"),
        }
    }
}

/// Cubic Hermite reconstruction of one accepted step.
///
/// Matches state and derivative at both endpoints, so it is exact for the
/// local solution through cubic order.
#[derive(Debug, Clone)]
pub struct HermiteSegment<const N: usize> {
    t_a: f64,
    t_b: f64,
    y_a: [f64; N],
    y_b: [f64; N],
    f_a: [f64; N],
    f_b: [f64; N],
}

impl<const N: usize> HermiteSegment<N> {
    /// Build a segment over [t_a, t_b]; costs two RHS evaluations.
    pub fn new<S: OdeSystem<N>>(
        sys: &S,
        t_a: f64,
        y_a: &[f64; N],
        t_b: f64,
        y_b: &[f64; N],
    ) -> Self {
        let mut f_a = [0.0; N];
        let mut f_b = [0.0; N];
        sys.rhs(t_a, y_a, &mut f_a);
        sys.rhs(t_b, y_b, &mut f_b);
        Self {
            t_a,
            t_b,
            y_a: *y_a,
            y_b: *y_b,
            f_a,
            f_b,
        }
    }

    pub fn span(&self) -> (f64, f64) {
        (self.t_a, self.t_b)
    }

    /// Interpolated state at `t` in [t_a, t_b].
    pub fn eval(&self, t: f64) -> [f64; N] {
        let dt = self.t_b - self.t_a;
        let alpha = (t - self.t_a) / dt;
        let a2 = alpha * alpha;
        let a3 = a2 * alpha;
        let h00 = 1.0 - 3.0 * a2 + 2.0 * a3;
        let h10 = alpha - 2.0 * a2 + a3;
        let h01 = 3.0 * a2 - 2.0 * a3;
        let h11 = a3 - a2;

        let mut y = [0.0; N];
        for n in 0..N {
            y[n] = h00 * self.y_a[n]
                + h10 * dt * self.f_a[n]
                + h01 * self.y_b[n]
                + h11 * dt * self.f_b[n];
        }
        y
    }
}

/// Locate a root of `g` in [a, b] given g(a), g(b) of opposite sign.
///
/// Classic Brent: inverse quadratic interpolation with a bisection
/// safeguard. Returns the abscissa of the root to within `tol`.
pub fn brent_root<F>(
    mut g: F,
    a0: f64,
    b0: f64,
    ga: f64,
    gb: f64,
    tol: f64,
    max_iter: usize,
) -> SimResult<f64>
where
    F: FnMut(f64) -> f64,
{
    if ga == 0.0 {
        return Ok(a0);
    }
    if gb == 0.0 {
        return Ok(b0);
    }
    if ga.signum() == gb.signum() {
        return Err(SimError::RootNotBracketed { a: a0, b: b0 });
    }

    let mut a = a0;
    let mut b = b0;
    let mut fa = ga;
    let mut fb = gb;
    let mut c = a;
    let mut fc = fa;
    let mut d = b - a;
    let mut e = d;

    for _ in 0..max_iter {
        if fb.signum() == fc.signum() {
            c = a;
            fc = fa;
            d = b - a;
            e = d;
        }
        if fc.abs() < fb.abs() {
            a = b;
            b = c;
            c = a;
            fa = fb;
            fb = fc;
            fc = fa;
        }

        let tol1 = 2.0 * f64::EPSILON * b.abs() + 0.5 * tol;
        let xm = 0.5 * (c - b);
        if xm.abs() <= tol1 || fb == 0.0 {
            return Ok(b);
        }

        if e.abs() >= tol1 && fa.abs() > fb.abs() {
            let s = fb / fa;
            let (mut p, mut q);
            if a == c {
                p = 2.0 * xm * s;
                q = 1.0 - s;
            } else {
                let r0 = fa / fc;
                let r1 = fb / fc;
                p = s * (2.0 * xm * r0 * (r0 - r1) - (b - a) * (r1 - 1.0));
                q = (r0 - 1.0) * (r1 - 1.0) * (s - 1.0);
            }
            if p > 0.0 {
                q = -q;
            }
            p = p.abs();
            let min1 = 3.0 * xm * q - (tol1 * q).abs();
            let min2 = (e * q).abs();
            if 2.0 * p < min1.min(min2) {
                e = d;
                d = p / q;
            } else {
                d = xm;
                e = d;
            }
        } else {
            d = xm;
            e = d;
        }

        a = b;
        fa = fb;
        if d.abs() > tol1 {
            b += d;
        } else {
            b += tol1.copysign(xm);
        }
        fb = g(b);
    }

    // did not converge within max_iter; b is still the best bracket point
    Ok(b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn stop_condition_sign_convention() {
        let stop = StopCondition::SpeedReached(26.8);
        assert!(stop.eval(&[100.0, 20.0]) < 0.0);
        assert!(stop.eval(&[100.0, 30.0]) > 0.0);
        assert_eq!(stop.eval(&[100.0, 26.8]), 0.0);

        let stop = StopCondition::DistanceReached(402.336);
        assert!(stop.eval(&[400.0, 50.0]) < 0.0);
        assert!(stop.eval(&[403.0, 50.0]) > 0.0);
    }

    #[test]
    fn brent_finds_cubic_root() {
        let g = |x: f64| x * x * x - 2.0 * x - 5.0;
        // real root near 2.0945514815
        let root = brent_root(g, 2.0, 3.0, g(2.0), g(3.0), 1e-12, 100).unwrap();
        assert_relative_eq!(root, 2.094_551_481_542_327, epsilon = 1e-10);
    }

    #[test]
    fn brent_rejects_unbracketed_interval() {
        let g = |x: f64| x * x + 1.0;
        assert!(matches!(
            brent_root(g, 0.0, 1.0, g(0.0), g(1.0), 1e-12, 100),
            Err(SimError::RootNotBracketed { .. })
        ));
    }

    #[test]
    fn brent_returns_exact_endpoint_roots() {
        let g = |x: f64| x;
        assert_eq!(brent_root(g, 0.0, 1.0, 0.0, 1.0, 1e-12, 100).unwrap(), 0.0);
        assert_eq!(
            brent_root(g, -1.0, 0.0, -1.0, 0.0, 1e-12, 100).unwrap(),
            0.0
        );
    }

    struct Cubic;

    impl crate::ode::OdeSystem<1> for Cubic {
        fn rhs(&self, t: f64, _y: &[f64; 1], dydt: &mut [f64; 1]) {
            dydt[0] = 3.0 * t * t;
        }
    }

    #[test]
    fn hermite_reproduces_cubic_exactly() {
        // y = t^3 has cubic state and quadratic derivative, both matched
        let seg = HermiteSegment::new(&Cubic, 1.0, &[1.0], 2.0, &[8.0]);
        for t in [1.0, 1.25, 1.5, 1.9, 2.0] {
            assert_relative_eq!(seg.eval(t)[0], t * t * t, max_relative = 1e-13);
        }
    }
}
