//! wot-curve: torque curve samples, interpolation and fitting.
//!
//! Provides:
//! - validated ordered (speed, torque) sample sets + delimited-text parsing
//! - piecewise-linear interpolation with flat or linear extrapolation
//! - least-squares polynomial fitting (for the boosted front-axle curve)
//! - the combined/boosted axle curve set consumed by the force model

pub mod data;
pub mod error;
pub mod interp;
pub mod polyfit;
pub mod samples;
pub mod set;

pub use error::{CurveError, CurveResult};
pub use interp::{Extrapolation, Interp1d};
pub use polyfit::{fit_polynomial, Polynomial};
pub use samples::TorqueSamples;
pub use set::{CurveSet, FitConfig};
