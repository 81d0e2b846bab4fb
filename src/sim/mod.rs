pub mod event;
pub mod integrator;
pub mod runner;

pub use event::EventKind;
pub use integrator::euler_step;
pub use runner::{simulate, try_simulate, SimOutcome};
