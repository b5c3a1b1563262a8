use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;
use wot_core::units::{mph_to_mps, mps_to_mph};
use wot_metrics::{comparison_rows, energy_residual, render_table, PerformanceReport};
use wot_sim::{run_wot, RunOptions, StopCondition};
use wot_vehicle::{LongitudinalModel, VehicleParams};

#[derive(Error, Debug)]
enum CliError {
    #[error(transparent)]
    Curve(#[from] wot_curve::CurveError),
    #[error(transparent)]
    Vehicle(#[from] wot_vehicle::VehicleError),
    #[error(transparent)]
    Sim(#[from] wot_sim::SimError),
    #[error(transparent)]
    Metrics(#[from] wot_metrics::MetricsError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

type CliResult<T> = Result<T, CliError>;

#[derive(Parser)]
#[command(name = "wot-cli")]
#[command(about = "Wide-open-throttle EV acceleration simulator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate vehicle parameters and the torque-curve fit
    Validate {
        /// Path to a parameters YAML file (defaults used when omitted)
        #[arg(short, long)]
        params: Option<PathBuf>,
    },
    /// Run a standing start to a speed target
    Run {
        /// Path to a parameters YAML file (defaults used when omitted)
        #[arg(short, long)]
        params: Option<PathBuf>,
        /// Target speed [mph]
        #[arg(long, default_value_t = 60.0)]
        target_mph: f64,
        /// Run to the quarter-mile mark instead of a speed target
        #[arg(long, conflicts_with = "target_mph")]
        quarter: bool,
        /// Write the trajectory as CSV to this path
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Full run plus the simulated-vs-reference metric table
    Metrics {
        /// Path to a parameters YAML file (defaults used when omitted)
        #[arg(short, long)]
        params: Option<PathBuf>,
    },
    /// Write the default parameter set as a YAML file
    InitParams {
        /// Destination path
        output: PathBuf,
    },
}

fn main() -> CliResult<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { params } => cmd_validate(params.as_deref()),
        Commands::Run {
            params,
            target_mph,
            quarter,
            output,
        } => cmd_run(params.as_deref(), target_mph, quarter, output.as_deref()),
        Commands::Metrics { params } => cmd_metrics(params.as_deref()),
        Commands::InitParams { output } => cmd_init_params(&output),
    }
}

fn load_params(path: Option<&Path>) -> CliResult<VehicleParams> {
    match path {
        Some(p) => Ok(VehicleParams::load_yaml(p)?),
        None => Ok(VehicleParams::default()),
    }
}

fn build_model(path: Option<&Path>) -> CliResult<LongitudinalModel> {
    let params = load_params(path)?;
    let curves = wot_curve::data::default_curve_set()?;
    Ok(LongitudinalModel::new(&params, curves)?)
}

fn cmd_validate(params_path: Option<&Path>) -> CliResult<()> {
    let params = load_params(params_path)?;
    params.validate()?;
    // curve construction runs the front-axle fit and its divergence check
    let curves = wot_curve::data::default_curve_set()?;
    println!("✓ Parameters and torque curves are valid");
    println!("  mass: {:.0} kg", params.mass_kg);
    println!("  traction ceiling: {:.0} N", params.traction_ceiling_n());
    println!("  boost window: {:.1} s", params.boost_duration_s);

    // energy-conservation check over a 0-60 run
    let model = LongitudinalModel::new(&params, curves)?;
    let opts = RunOptions {
        stop: StopCondition::SpeedReached(mph_to_mps(60.0)),
        ..Default::default()
    };
    let traj = run_wot(&model, &opts)?;
    let residual = wot_metrics::audit_energy(&model, &traj)?;
    println!("✓ Energy balance holds (residual {residual:+.2e})");
    Ok(())
}

fn cmd_run(
    params_path: Option<&Path>,
    target_mph: f64,
    quarter: bool,
    output: Option<&Path>,
) -> CliResult<()> {
    let model = build_model(params_path)?;
    let stop = if quarter {
        println!("Running the quarter mile...");
        StopCondition::DistanceReached(wot_core::constants::QUARTER_MILE_M)
    } else {
        println!("Running 0-{target_mph:.0} mph...");
        StopCondition::SpeedReached(mph_to_mps(target_mph))
    };
    let opts = RunOptions {
        stop,
        ..Default::default()
    };
    let traj = run_wot(&model, &opts)?;
    let last = traj
        .terminal()
        .ok_or(wot_metrics::MetricsError::EmptyTrajectory)?;

    println!("✓ Target reached at t = {:.3} s", last.time_s);
    println!("  distance: {:.1} m", last.position_m);
    println!("  speed: {:.2} m/s ({:.1} mph)", last.velocity_mps, mps_to_mph(last.velocity_mps));
    println!("  samples: {}", traj.len());
    println!("  energy residual: {:+.2e}", energy_residual(&model, &traj)?);

    if let Some(path) = output {
        write_csv(path, &traj)?;
        println!("  trajectory written to {}", path.display());
    }
    Ok(())
}

fn cmd_metrics(params_path: Option<&Path>) -> CliResult<()> {
    let model = build_model(params_path)?;
    let traj = run_wot(&model, &RunOptions::default())?;
    let report = PerformanceReport::extract(&traj)?;

    println!("{}", render_table(&comparison_rows(&report)));
    println!("Energy residual: {:+.2e}", energy_residual(&model, &traj)?);
    Ok(())
}

fn cmd_init_params(output: &Path) -> CliResult<()> {
    let params = VehicleParams::default();
    params.save_yaml(output)?;
    println!("✓ Default parameters written to {}", output.display());
    Ok(())
}

fn write_csv(path: &Path, traj: &wot_sim::Trajectory) -> CliResult<()> {
    let mut file = std::fs::File::create(path)?;
    writeln!(file, "time_s,position_m,velocity_mps,acceleration_mps2")?;
    for i in 0..traj.len() {
        writeln!(
            file,
            "{},{},{},{}",
            traj.time_s[i], traj.position_m[i], traj.velocity_mps[i], traj.acceleration_mps2[i]
        )?;
    }
    Ok(())
}
