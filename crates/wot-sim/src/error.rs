//! Error types for transient integration.

use thiserror::Error;

pub type SimResult<T> = Result<T, SimError>;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Step size underflow at t = {t:.6} s (h = {h:.3e} s)")]
    StepSizeTooSmall { t: f64, h: f64 },

    #[error("Maximum step count exceeded")]
    MaxStepsExceeded,

    #[error("Non-finite state at t = {t:.6} s")]
    NonFiniteState { t: f64 },

    #[error("Stop-condition root not bracketed in [{a:.6}, {b:.6}] s")]
    RootNotBracketed { a: f64, b: f64 },

    #[error("Stop condition not reached within {t_max:.1} s")]
    TargetNotReached { t_max: f64 },
}
