//! wot-vehicle: vehicle parameters and the longitudinal force model.
//!
//! Provides:
//! - `VehicleParams`: immutable scalar constants, YAML-loadable
//! - resistance/limit evaluators (drag, rolling, boost gate, traction clamp)
//! - `WheelForce`: axle torque curves composed into wheel force vs speed
//! - `LongitudinalModel`: net propulsive force and acceleration of (v, t)

pub mod error;
pub mod forces;
pub mod model;
pub mod params;

pub use error::{VehicleError, VehicleResult};
pub use forces::{AeroDrag, BoostWindow, RollingResistance, TractionLimit, WheelForce};
pub use model::LongitudinalModel;
pub use params::VehicleParams;
