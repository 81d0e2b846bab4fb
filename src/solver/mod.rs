pub mod control;
pub mod search;

pub use control::{CandidateBudget, Exhaustive, SearchControl};
pub use search::{launch_velocity, solve, solve_with, LaunchSolution};
