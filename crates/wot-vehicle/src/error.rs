//! Error types for vehicle model construction.

use thiserror::Error;

pub type VehicleResult<T> = Result<T, VehicleError>;

#[derive(Error, Debug)]
pub enum VehicleError {
    #[error("Invalid parameter: {what}")]
    InvalidParam { what: &'static str },

    #[error("Curve error: {0}")]
    Curve(#[from] wot_curve::CurveError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
