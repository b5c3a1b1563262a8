//! Least-squares polynomial fitting.

use crate::error::{CurveError, CurveResult};
use nalgebra::{DMatrix, DVector};

/// Dense polynomial with ascending coefficients: c0 + c1·x + c2·x² + …
#[derive(Debug, Clone, PartialEq)]
pub struct Polynomial {
    coeffs: Vec<f64>,
}

impl Polynomial {
    pub fn new(coeffs: Vec<f64>) -> Self {
        Self { coeffs }
    }

    pub fn degree(&self) -> usize {
        self.coeffs.len().saturating_sub(1)
    }

    pub fn coeffs(&self) -> &[f64] {
        &self.coeffs
    }

    /// Horner evaluation.
    pub fn eval(&self, x: f64) -> f64 {
        self.coeffs.iter().rev().fold(0.0, |acc, &c| acc * x + c)
    }
}

/// Least-squares fit of a polynomial of the given degree through the sample
/// points, via SVD on the Vandermonde matrix. Requires at least degree + 1
/// samples; an exact interpolation problem is a degenerate special case.
pub fn fit_polynomial(xs: &[f64], ys: &[f64], degree: usize) -> CurveResult<Polynomial> {
    let n = xs.len();
    if n < degree + 1 || ys.len() != n {
        return Err(CurveError::FitUnderdetermined {
            degree,
            needed: degree + 1,
            got: n.min(ys.len()),
        });
    }

    let vander = DMatrix::from_fn(n, degree + 1, |r, c| xs[r].powi(c as i32));
    let rhs = DVector::from_column_slice(ys);

    let svd = vander.svd(true, true);
    let coeffs = svd
        .solve(&rhs, 1e-12)
        .map_err(|_| CurveError::FitSolve {
            what: "SVD solve on Vandermonde matrix failed",
        })?;

    Ok(Polynomial::new(coeffs.iter().copied().collect()))
}
