//! Launch-solution search for a drag-affected rocket.
//!
//! [`solver::solve`] scans an (angle, speed) grid with a fixed-step planning
//! integrator and returns the first launch whose sampled path passes within
//! tolerance of the target. After launch, [`dynamics::tick`] supplies the
//! per-step mass and drag force for the host rigid-body engine, and
//! [`launcher::Launcher`] wires the two together around launch and reset
//! events.

pub mod config;
pub mod dynamics;
pub mod error;
pub mod io;
pub mod launcher;
pub mod physics;
pub mod sim;
pub mod solver;

pub use config::LauncherConfig;
pub use dynamics::{FlightState, FlightTick, SearchParams};
pub use error::LaunchError;
pub use launcher::Launcher;
pub use physics::{FuelBurnParams, PhysicsParams};
pub use solver::{solve, LaunchSolution};
