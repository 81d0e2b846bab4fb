use nalgebra::Vector3;

/// Speeds at or below this are treated as rest; drag direction is undefined there.
pub const REST_SPEED: f64 = 1e-6;

/// Compute quadratic aerodynamic drag force, opposing velocity.
///
/// `F = 0.5 * rho * Cd * A * |v|^2`, directed along `-v / |v|`.
/// Pure drag only: no lift or side force.
pub fn drag_force(vel: &Vector3<f64>, air_density: f64, cd: f64, area: f64) -> Vector3<f64> {
    let speed = vel.norm();
    if speed > REST_SPEED {
        let q_dyn = 0.5 * air_density * speed * speed;
        let drag_mag = q_dyn * cd * area;
        -vel.normalize() * drag_mag
    } else {
        Vector3::zeros()
    }
}
