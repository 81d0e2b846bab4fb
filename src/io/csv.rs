use std::io::{self, Write};
use std::path::Path;

use nalgebra::Vector3;

/// Write trajectory samples to CSV format.
///
/// Columns: step, x, y, z
pub fn write_trajectory<W: Write>(writer: &mut W, trajectory: &[Vector3<f64>]) -> io::Result<()> {
    writeln!(writer, "step,x,y,z")?;

    for (i, p) in trajectory.iter().enumerate() {
        writeln!(writer, "{},{:.4},{:.4},{:.4}", i, p.x, p.y, p.z)?;
    }

    Ok(())
}

/// Write trajectory to a CSV file at the given path.
pub fn write_trajectory_file<P: AsRef<Path>>(path: P, trajectory: &[Vector3<f64>]) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    write_trajectory(&mut file, trajectory)
}
