//! wot-sim: transient integration of the longitudinal model.
//!
//! Provides:
//! - `OdeSystem`: dy/dt = f(t, y) abstraction over a const-generic state
//! - `DormandPrince45`: adaptive embedded 5(4) pair with error control
//! - stop conditions located by Brent's method on Hermite dense output
//! - `run_wot`: standing-start run driver producing a `Trajectory`

pub mod error;
pub mod events;
pub mod ode;
pub mod rk45;
pub mod runner;
pub mod trajectory;

pub use error::{SimError, SimResult};
pub use events::{brent_root, HermiteSegment, StopCondition};
pub use ode::{ForcePhase, LongitudinalOde, OdeSystem};
pub use rk45::{DormandPrince45, StepController, Stats, StepResult, Tolerances};
pub use runner::{run_wot, RunOptions};
pub use trajectory::{Sample, Trajectory};
