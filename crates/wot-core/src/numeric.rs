//! Scalar comparison helpers shared by the curve and metrics layers.

/// Relative deviation of `value` from `reference`.
///
/// The denominator is floored at 1.0 so near-zero references (torques or
/// energies in consistent SI units) do not inflate the result.
pub fn relative_deviation(value: f64, reference: f64) -> f64 {
    (value - reference).abs() / reference.abs().max(1.0)
}

/// Symmetric float comparison with combined absolute and relative tolerance.
pub fn nearly_equal(a: f64, b: f64, abs_tol: f64, rel_tol: f64) -> bool {
    let diff = (a - b).abs();
    diff <= abs_tol || diff <= rel_tol * a.abs().max(b.abs())
}
