//! Error types for metric extraction and validation.

use thiserror::Error;

pub type MetricsResult<T> = Result<T, MetricsError>;

#[derive(Error, Debug)]
pub enum MetricsError {
    #[error("Trajectory is empty")]
    EmptyTrajectory,

    #[error("Degenerate trajectory: {what}")]
    Degenerate { what: &'static str },

    #[error("Threshold not reached: {name}")]
    ThresholdNotReached { name: &'static str },

    #[error("Energy balance residual {residual:.3e} exceeds tolerance")]
    EnergyImbalance { residual: f64 },
}
