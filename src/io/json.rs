use std::io::Write;

use nalgebra::Vector3;
use serde::Serialize;

use crate::solver::LaunchSolution;

/// Summary statistics computed from a launch solution.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SolutionSummary {
    pub found: bool,
    pub angle_deg: f64,
    pub speed: f64,
    pub candidates_evaluated: usize,
    pub samples: usize,
    pub apex_height: f64,
    /// Last planned sample.
    pub end_point: Option<Vector3<f64>>,
    /// Distance from the last sample to the target.
    pub miss_distance: Option<f64>,
    /// Planned time to the last sample.
    pub flight_time: f64,
}

impl SolutionSummary {
    /// Compute summary from a solution, its target and the integrator step.
    pub fn from_solution(solution: &LaunchSolution, target: &Vector3<f64>, time_step: f64) -> Self {
        let apex_height = solution
            .trajectory
            .iter()
            .map(|p| p.y)
            .fold(f64::NEG_INFINITY, f64::max);
        let end_point = solution.impact_point().copied();

        SolutionSummary {
            found: solution.found,
            angle_deg: solution.angle,
            speed: solution.speed,
            candidates_evaluated: solution.evaluated,
            samples: solution.trajectory.len(),
            apex_height: if apex_height.is_finite() { apex_height } else { 0.0 },
            end_point,
            miss_distance: end_point.map(|p| (p - target).norm()),
            flight_time: solution.trajectory.len().saturating_sub(1) as f64 * time_step,
        }
    }
}

/// Write solution summary as pretty JSON to a writer.
pub fn write_summary<W: Write>(writer: &mut W, summary: &SolutionSummary) -> serde_json::Result<()> {
    serde_json::to_writer_pretty(&mut *writer, summary)?;
    writeln!(writer).map_err(serde_json::Error::io)
}
