use nalgebra::Vector3;

/// World up axis. The ground plane is `y = 0`.
pub const UP: Vector3<f64> = Vector3::new(0.0, 1.0, 0.0);

/// Uniform gravity acceleration for a flat, y-up world.
pub fn gravity_accel(g: f64) -> Vector3<f64> {
    -UP * g
}

/// Gravitational force on a body of `mass`.
pub fn gravity_force(g: f64, mass: f64) -> Vector3<f64> {
    gravity_accel(g) * mass
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gravity_points_down() {
        let a = gravity_accel(9.81);
        assert!((a.y + 9.81).abs() < 1e-12);
        assert_eq!(a.x, 0.0);
        assert_eq!(a.z, 0.0);
    }

    #[test]
    fn force_scales_with_mass() {
        let f = gravity_force(9.81, 2.0);
        assert!((f.y + 19.62).abs() < 1e-12);
    }
}
