//! Error types for curve construction and fitting.

use thiserror::Error;

pub type CurveResult<T> = Result<T, CurveError>;

#[derive(Error, Debug)]
pub enum CurveError {
    #[error("Curve needs at least {needed} samples, got {got}")]
    TooFewSamples { needed: usize, got: usize },

    #[error("Sample speeds must be strictly increasing (index {index})")]
    NotIncreasing { index: usize },

    #[error("Non-finite sample value at index {index}")]
    NonFiniteSample { index: usize },

    #[error("Malformed curve row {line}: {what}")]
    Parse { line: usize, what: &'static str },

    #[error("Polynomial fit of degree {degree} needs at least {needed} samples, got {got}")]
    FitUnderdetermined {
        degree: usize,
        needed: usize,
        got: usize,
    },

    #[error("Least-squares solve failed: {what}")]
    FitSolve { what: &'static str },
}
