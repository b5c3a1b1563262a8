//! wot-metrics: performance figures from recorded trajectories.
//!
//! Provides:
//! - threshold first-crossing search with linear refinement
//! - `PerformanceReport`: rollout, speed intervals, quarter-mile figures
//! - energy-conservation audit of a run
//! - simulated-vs-reference comparison rows and table rendering

pub mod energy;
pub mod error;
pub mod metrics;
pub mod report;
pub mod threshold;

pub use energy::{audit_energy, energy_residual, ENERGY_TOL};
pub use error::{MetricsError, MetricsResult};
pub use metrics::PerformanceReport;
pub use report::{comparison_rows, render_table, MetricRow};
pub use threshold::{first_crossing, Crossing, ThresholdVar};
