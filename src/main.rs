use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use nalgebra::Vector3;

use rocket_launcher::io::csv;
use rocket_launcher::io::json::{self, SolutionSummary};
use rocket_launcher::launcher::{estimate_launch_speed, Launcher, PointMassBody, RigidBody};
use rocket_launcher::{LaunchError, LaunchSolution, LauncherConfig};

/// Find a launch angle and speed that put the rocket on a target, then fly it.
#[derive(Parser, Debug)]
#[command(author, version, about = "Rocket auto-launcher (drag + fuel burn)")]
struct Cli {
    /// Target position
    #[arg(long, required = true, num_args = 3, value_names = ["X", "Y", "Z"], allow_negative_numbers = true)]
    target: Vec<f64>,

    /// Launch position (defaults to the configured pad)
    #[arg(long, num_args = 3, value_names = ["X", "Y", "Z"], allow_negative_numbers = true)]
    start: Option<Vec<f64>>,

    /// Rocket mass used by the search (defaults to the configured nominal mass)
    #[arg(long)]
    mass: Option<f64>,

    /// TOML launcher configuration
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write the planned trajectory to this CSV file
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Print a JSON summary instead of the report
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Fly the launched rocket for this many physics steps and print the schedule
    #[arg(long, default_value_t = 0)]
    flight_ticks: usize,

    /// Physics step for the flight (defaults to the search time step)
    #[arg(long)]
    dt: Option<f64>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => LauncherConfig::load(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => LauncherConfig::default(),
    };
    if let Some(start) = &cli.start {
        config.home = to_vector(start);
    }
    let target = to_vector(&cli.target);
    let mass = cli.mass.unwrap_or(config.nominal_mass);
    let dt = cli.dt.unwrap_or(config.search.time_step);

    let mut body = PointMassBody::new(config.home, mass, config.physics.gravity);
    let mut launcher = Launcher::new(config)?;
    let cfg = launcher.config().clone();

    if !cli.json {
        eprintln!(
            "Searching {} candidates toward ({:.2}, {:.2}, {:.2}) ...",
            cfg.search.grid_size().unwrap_or_default(),
            target.x,
            target.y,
            target.z
        );
    }

    let solution = match launcher.request_launch(target, Some(mass), &mut body) {
        Ok(sol) => sol.clone(),
        Err(LaunchError::NoSolutionFound) => {
            anyhow::bail!(
                "no valid trajectory found within angle {}..{} deg, speed {}..{}",
                cfg.search.angle_min,
                cfg.search.angle_max,
                cfg.search.speed_min,
                cfg.search.speed_max
            );
        }
        Err(err) => return Err(err.into()),
    };

    let summary = SolutionSummary::from_solution(&solution, &target, cfg.search.time_step);

    if let Some(path) = &cli.csv {
        csv::write_trajectory_file(path, &solution.trajectory)
            .with_context(|| format!("writing {}", path.display()))?;
        if !cli.json {
            eprintln!("Exported: {}", path.display());
        }
    }

    if cli.json {
        let stdout = std::io::stdout();
        json::write_summary(&mut stdout.lock(), &summary)?;
    } else {
        print_report(&cfg, &target, mass, &solution, &summary);
    }

    if cli.flight_ticks > 0 {
        fly(&mut launcher, &mut body, cli.flight_ticks, dt, cli.json)?;
    }

    Ok(())
}

fn to_vector(v: &[f64]) -> Vector3<f64> {
    Vector3::new(v[0], v[1], v[2])
}

fn print_report(
    cfg: &LauncherConfig,
    target: &Vector3<f64>,
    mass: f64,
    solution: &LaunchSolution,
    summary: &SolutionSummary,
) {
    let estimate = estimate_launch_speed(&cfg.home, target, cfg.physics.gravity);

    println!();
    println!("====================================================================");
    println!("  LAUNCH SOLUTION");
    println!("====================================================================");
    println!();
    println!("  Setup");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  Pad:      ({:>8.2}, {:>8.2}, {:>8.2})   Mass:   {:>8.3} kg",
        cfg.home.x, cfg.home.y, cfg.home.z, mass
    );
    println!(
        "  Target:   ({:>8.2}, {:>8.2}, {:>8.2})   Cd*A:   {:>8.4} m^2",
        target.x,
        target.y,
        target.z,
        cfg.physics.drag_coefficient * cfg.physics.cross_sectional_area
    );
    println!(
        "  Fuel:     {:.3} -> {:.3} kg over {:.2} s",
        cfg.fuel.initial_mass, cfg.fuel.dry_mass, cfg.fuel.burn_duration
    );
    println!();
    println!("  Result");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!("  Angle:     {:>8.1} deg", solution.angle);
    println!("  Speed:     {:>8.1} m/s   (sqrt(d*g) estimate {:.1} m/s)", solution.speed, estimate);
    println!("  Apex:      {:>8.2} m", summary.apex_height);
    println!("  Miss:      {:>8.3} m", summary.miss_distance.unwrap_or(f64::NAN));
    println!("  Time:      {:>8.2} s", summary.flight_time);
    println!(
        "  Search:    {} of {} candidates, {} samples",
        solution.evaluated,
        cfg.search.grid_size().unwrap_or_default(),
        summary.samples
    );
    println!("====================================================================");
    println!();
}

/// Drive the stand-in body with the launcher's per-step forces.
fn fly(
    launcher: &mut Launcher,
    body: &mut PointMassBody,
    ticks: usize,
    dt: f64,
    quiet: bool,
) -> anyhow::Result<()> {
    let sample_interval = (ticks / 30).max(1);
    if !quiet {
        println!("  Flight");
        println!("  ──────────────────────────────────────────────────────────────────");
        println!(
            "  {:>7}  {:>8}  {:>9}  {:>9}  {:>9}  {:>6}",
            "t (s)", "mass", "drag (N)", "x", "y", "phase"
        );
        println!("  {}", "─".repeat(60));
    }

    for i in 0..ticks {
        let Some(out) = launcher.fixed_update(body, dt)? else {
            break;
        };
        body.step(dt);

        let landed = body.on_ground();
        if !quiet && (i % sample_interval == 0 || landed || i + 1 == ticks) {
            let phase = if launcher.flight().burning(launcher.burn()) { "BURN" } else { "COAST" };
            let pos = body.position();
            println!(
                "  {:>7.2}  {:>8.4}  {:>9.4}  {:>9.2}  {:>9.2}  {:>6}",
                body.state.time,
                out.mass,
                out.force.norm(),
                pos.x,
                pos.y,
                if landed { "LAND" } else { phase }
            );
        }
        if landed {
            break;
        }
    }

    launcher.reset(body);
    Ok(())
}
