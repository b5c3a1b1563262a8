//! Integrator checks against closed-form kinematics.

use approx::assert_relative_eq;
use wot_sim::{DormandPrince45, OdeSystem, Tolerances};

struct ConstantAccel {
    a: f64,
}

impl OdeSystem<2> for ConstantAccel {
    fn rhs(&self, _t: f64, y: &[f64; 2], dydt: &mut [f64; 2]) {
        dydt[0] = y[1];
        dydt[1] = self.a;
    }
}

#[test]
fn unit_acceleration_from_rest() {
    let sys = ConstantAccel { a: 1.0 };
    let mut solver = DormandPrince45::new(Tolerances::new(1e-12, 1e-10));
    let (t, y) = solver.integrate(&sys, 0.0, &[0.0, 0.0], 10.0, 1e-3).unwrap();
    assert_relative_eq!(t, 10.0, epsilon = 1e-12);
    // x = t^2/2, v = t; quadratics are exact for a fifth-order method
    assert_relative_eq!(y[0], 50.0, max_relative = 1e-10);
    assert_relative_eq!(y[1], 10.0, max_relative = 1e-10);
}

#[test]
fn braking_profile_reaches_standstill() {
    let sys = ConstantAccel { a: -2.0 };
    let mut solver = DormandPrince45::new(Tolerances::new(1e-12, 1e-10));
    let (_, y) = solver
        .integrate(&sys, 0.0, &[0.0, 20.0], 10.0, 1e-3)
        .unwrap();
    assert_relative_eq!(y[0], 100.0, max_relative = 1e-10);
    assert!(y[1].abs() < 1e-9);
}

struct DragOnly {
    k: f64,
}

impl OdeSystem<1> for DragOnly {
    fn rhs(&self, _t: f64, y: &[f64; 1], dydt: &mut [f64; 1]) {
        dydt[0] = -self.k * y[0] * y[0];
    }
}

#[test]
fn quadratic_drag_matches_analytic_decay() {
    // v(t) = v0 / (1 + k v0 t)
    let (k, v0, tf) = (0.05, 30.0, 8.0);
    let sys = DragOnly { k };
    let mut solver = DormandPrince45::new(Tolerances::new(1e-12, 1e-10));
    let (_, y) = solver.integrate(&sys, 0.0, &[v0], tf, 1e-3).unwrap();
    assert_relative_eq!(y[0], v0 / (1.0 + k * v0 * tf), max_relative = 1e-8);
}
