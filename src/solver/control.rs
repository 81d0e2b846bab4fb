/// Trait for cooperative control of a launch search.
///
/// The solver asks before simulating each candidate; returning `false`
/// stops the search with [`LaunchError::Cancelled`](crate::error::LaunchError::Cancelled).
pub trait SearchControl {
    fn proceed(&mut self, angle: f64, speed: f64) -> bool;

    /// Human-readable name for display.
    fn name(&self) -> &str {
        "unnamed"
    }
}

/// Never cancels; scans the whole grid.
#[derive(Debug, Clone, Copy, Default)]
pub struct Exhaustive;

impl SearchControl for Exhaustive {
    fn proceed(&mut self, _angle: f64, _speed: f64) -> bool {
        true
    }

    fn name(&self) -> &str {
        "exhaustive"
    }
}

/// Cancels once a fixed number of candidates has been simulated.
#[derive(Debug, Clone)]
pub struct CandidateBudget {
    remaining: usize,
}

impl CandidateBudget {
    pub fn new(candidates: usize) -> Self {
        Self { remaining: candidates }
    }
}

impl SearchControl for CandidateBudget {
    fn proceed(&mut self, _angle: f64, _speed: f64) -> bool {
        match self.remaining.checked_sub(1) {
            Some(left) => {
                self.remaining = left;
                true
            }
            None => false,
        }
    }

    fn name(&self) -> &str {
        "budget"
    }
}

impl<F> SearchControl for F
where
    F: FnMut(f64, f64) -> bool,
{
    fn proceed(&mut self, angle: f64, speed: f64) -> bool {
        self(angle, speed)
    }

    fn name(&self) -> &str {
        "closure"
    }
}
