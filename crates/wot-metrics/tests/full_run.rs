//! End-to-end validation: default vehicle against published figures.

use approx::assert_relative_eq;
use wot_core::nearly_equal;
use wot_core::units::mph_to_mps;
use wot_metrics::{audit_energy, first_crossing, PerformanceReport, ThresholdVar};
use wot_sim::{run_wot, RunOptions, StopCondition, Trajectory};
use wot_vehicle::{LongitudinalModel, VehicleParams};

fn default_model() -> LongitudinalModel {
    let curves = wot_curve::data::default_curve_set().unwrap();
    LongitudinalModel::new(&VehicleParams::default(), curves).unwrap()
}

fn full_run(model: &LongitudinalModel) -> Trajectory {
    run_wot(model, &RunOptions::default()).unwrap()
}

#[test]
fn report_is_ordered_and_near_published_figures() {
    let model = default_model();
    let traj = full_run(&model);
    let report = PerformanceReport::extract(&traj).unwrap();

    // ordering invariants
    assert!(report.rollout_s > 0.0);
    assert!(report.rollout_s < report.zero_to_sixty_s);
    assert!(report.zero_to_sixty_s < report.quarter_mile_s);
    assert!(report.quarter_mile_s < report.zero_to_one_fifty_s);
    assert!(report.five_to_sixty_s < report.zero_to_sixty_s);
    assert!(report.thirty_to_fifty_s < report.fifty_to_seventy_s);

    // published test figures
    assert!((report.zero_to_sixty_s - 2.7).abs() < 0.1, "0-60 {}", report.zero_to_sixty_s);
    assert!((report.zero_to_hundred_s - 6.3).abs() < 0.3, "0-100 {}", report.zero_to_hundred_s);
    assert!(
        (report.zero_to_one_fifty_s - 14.3).abs() < 0.5,
        "0-150 {}",
        report.zero_to_one_fifty_s
    );
    assert!((report.quarter_mile_s - 10.8).abs() < 0.3, "1/4 mi {}", report.quarter_mile_s);
    assert!(
        report.trap_speed_mph > 128.0 && report.trap_speed_mph < 136.0,
        "trap {}",
        report.trap_speed_mph
    );
    assert!((report.rollout_s - 0.25).abs() < 0.05, "rollout {}", report.rollout_s);
}

#[test]
fn energy_audit_passes_for_full_run() {
    let model = default_model();
    let traj = full_run(&model);
    let residual = audit_energy(&model, &traj).unwrap();
    assert!(residual.abs() < 1e-3, "residual {residual}");
}

#[test]
fn threshold_roundtrip_matches_terminal_time() {
    let model = default_model();
    let target = mph_to_mps(60.0);
    let opts = RunOptions {
        stop: StopCondition::SpeedReached(target),
        ..Default::default()
    };
    let traj = run_wot(&model, &opts).unwrap();
    let terminal = traj.terminal().unwrap();

    let crossing = first_crossing(&traj, ThresholdVar::Velocity, target, "60 mph").unwrap();
    assert!(nearly_equal(crossing.time_s, terminal.time_s, 1e-9, 1e-9));
    assert_relative_eq!(terminal.velocity_mps, target, epsilon = 1e-6);
}

#[test]
fn quarter_mile_stop_yields_consistent_trap_speed() {
    let model = default_model();
    let opts = RunOptions {
        stop: StopCondition::DistanceReached(402.336),
        ..Default::default()
    };
    let traj = run_wot(&model, &opts).unwrap();
    let terminal = traj.terminal().unwrap();
    assert_relative_eq!(terminal.position_m, 402.336, epsilon = 1e-6);

    // the full-run extraction sees the same crossing
    let full = full_run(&model);
    let report = PerformanceReport::extract(&full).unwrap();
    assert_relative_eq!(report.quarter_mile_s, terminal.time_s, epsilon = 1e-3);
}
