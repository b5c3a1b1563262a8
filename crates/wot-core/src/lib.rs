//! wot-core: stable foundation for the WOT acceleration simulator.
//!
//! Contains:
//! - units (uom SI types + constructors + imperial boundary conversions)
//! - numeric (scalar comparison helpers)

pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use numeric::*;
pub use units::*;
