//! ODE system abstraction and the longitudinal right-hand side.

use wot_vehicle::LongitudinalModel;

/// System of ordinary differential equations: dy/dt = f(t, y).
pub trait OdeSystem<const N: usize> {
    /// Evaluate the right-hand side into `dydt`.
    fn rhs(&self, t: f64, y: &[f64; N], dydt: &mut [f64; N]);
}

/// Which side of the overboost expiry the dynamics are on.
///
/// The wheel force steps down when the overboost window closes. Integrating
/// with a fixed phase on each side keeps every stage evaluation smooth; the
/// runner splits the time span at the expiry instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForcePhase {
    Boosted,
    Nominal,
}

/// Two-state longitudinal dynamics: y = [position, velocity].
///
/// Acceleration is a pure output of (velocity, phase) and is not carried as
/// a state variable.
pub struct LongitudinalOde<'a> {
    model: &'a LongitudinalModel,
    phase: ForcePhase,
}

impl<'a> LongitudinalOde<'a> {
    pub fn new(model: &'a LongitudinalModel, phase: ForcePhase) -> Self {
        Self { model, phase }
    }
}

impl OdeSystem<2> for LongitudinalOde<'_> {
    fn rhs(&self, _t: f64, y: &[f64; 2], dydt: &mut [f64; 2]) {
        let v = y[1];
        dydt[0] = v;
        dydt[1] = match self.phase {
            ForcePhase::Boosted => self.model.boosted_acceleration_mps2(v),
            ForcePhase::Nominal => self.model.nominal_acceleration_mps2(v),
        };
    }
}
