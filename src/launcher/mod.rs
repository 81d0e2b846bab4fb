pub mod body;

use nalgebra::Vector3;

use crate::config::LauncherConfig;
use crate::dynamics::flight::{tick, FlightTick};
use crate::dynamics::state::FlightState;
use crate::error::{ensure_positive, LaunchError, Result};
use crate::physics::FuelBurnParams;
use crate::solver::{launch_velocity, solve, LaunchSolution};

pub use body::{PointMassBody, RigidBody};

// ---------------------------------------------------------------------------
// Launcher: event adapter around the solver and the flight updater
// ---------------------------------------------------------------------------

/// One rocket on one pad.
///
/// A launch request runs the solver once, hands the resulting velocity to
/// the rigid body and starts the burn clock. `fixed_update` is then called
/// once per physics step until `reset`.
///
/// The burn of each flight starts from the launch mass: the configured fuel
/// curve is rescaled so its wet mass equals that mass.
#[derive(Debug, Clone)]
pub struct Launcher {
    config: LauncherConfig,
    burn: FuelBurnParams,
    flight: FlightState,
    target: Option<Vector3<f64>>,
    solution: Option<LaunchSolution>,
}

impl Launcher {
    pub fn new(config: LauncherConfig) -> Result<Self> {
        config.validate()?;
        let burn = config.fuel;
        let flight = FlightState::new(&burn);
        Ok(Self { config, burn, flight, target: None, solution: None })
    }

    pub fn config(&self) -> &LauncherConfig {
        &self.config
    }

    pub fn flight(&self) -> &FlightState {
        &self.flight
    }

    /// Fuel curve of the current flight.
    pub fn burn(&self) -> &FuelBurnParams {
        &self.burn
    }

    pub fn target(&self) -> Option<&Vector3<f64>> {
        self.target.as_ref()
    }

    /// Solution of the current flight, if launched by the solver.
    pub fn solution(&self) -> Option<&LaunchSolution> {
        self.solution.as_ref()
    }

    pub fn is_launched(&self) -> bool {
        self.flight.launched
    }

    /// Solve for `target` from the body's current position and launch.
    ///
    /// `mass` overrides the configured nominal mass for both the search and
    /// the body. On any error the body is left untouched and the launcher
    /// stays on the pad.
    pub fn request_launch(
        &mut self,
        target: Vector3<f64>,
        mass: Option<f64>,
        body: &mut dyn RigidBody,
    ) -> Result<&LaunchSolution> {
        if self.flight.launched {
            return Err(LaunchError::AlreadyLaunched);
        }
        let mass = mass.unwrap_or(self.config.nominal_mass);
        ensure_positive("mass", mass)?;
        let burn = self.config.fuel.scaled_to(mass)?;

        let start = body.position();
        let solution = solve(&start, &target, &self.config.physics, mass, &self.config.search)?
            .require()?;
        let velocity = launch_velocity(&start, &target, solution.angle, solution.speed)?;

        body.set_mass(mass);
        body.set_velocity(velocity);
        self.flight = FlightState::launch(&burn);
        self.burn = burn;
        self.target = Some(target);
        Ok(self.solution.insert(solution))
    }

    /// Launch at a fixed angle in the x/y plane with an impulse, no search.
    pub fn launch_manual(
        &mut self,
        angle_deg: f64,
        impulse: f64,
        mass: f64,
        body: &mut dyn RigidBody,
    ) -> Result<Vector3<f64>> {
        if self.flight.launched {
            return Err(LaunchError::AlreadyLaunched);
        }
        let delta_v = manual_launch_velocity(angle_deg, impulse, mass)?;
        let burn = self.config.fuel.scaled_to(mass)?;
        let vel = body.velocity() + delta_v;
        body.set_mass(mass);
        body.set_velocity(vel);
        self.flight = FlightState::launch(&burn);
        self.burn = burn;
        Ok(delta_v)
    }

    /// Per-physics-step update: burn fuel, push mass and drag into the body.
    ///
    /// Returns `None` while on the pad.
    pub fn fixed_update(&mut self, body: &mut dyn RigidBody, dt: f64) -> Result<Option<FlightTick>> {
        if !self.flight.launched {
            return Ok(None);
        }
        let out = tick(&mut self.flight, &body.velocity(), dt, &self.config.physics, &self.burn)?;
        body.set_mass(out.mass);
        body.add_force(out.force);
        Ok(Some(out))
    }

    /// Return the rocket to the pad and forget the current flight.
    pub fn reset(&mut self, body: &mut dyn RigidBody) {
        body.reset_to(self.config.home);
        self.burn = self.config.fuel;
        self.flight.reset(&self.burn);
        self.target = None;
        self.solution = None;
    }
}

/// Rough first-guess speed, `sqrt(distance * g)`.
pub fn estimate_launch_speed(start: &Vector3<f64>, target: &Vector3<f64>, gravity: f64) -> f64 {
    ((target - start).norm() * gravity).sqrt()
}

/// Velocity change from an `impulse` applied at `angle_deg` above +x.
pub fn manual_launch_velocity(angle_deg: f64, impulse: f64, mass: f64) -> Result<Vector3<f64>> {
    ensure_positive("mass", mass)?;
    let rad = angle_deg.to_radians();
    let direction = Vector3::new(rad.cos(), rad.sin(), 0.0);
    Ok(direction * (impulse / mass))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::PhysicsParams;

    fn quick_config() -> LauncherConfig {
        let mut cfg = LauncherConfig::default();
        cfg.search.speed_max = 200.0;
        cfg
    }

    fn pad(cfg: &LauncherConfig) -> PointMassBody {
        PointMassBody::new(cfg.home, cfg.nominal_mass, cfg.physics.gravity)
    }

    #[test]
    fn launch_sets_velocity_and_enters_flight() {
        let cfg = quick_config();
        let mut body = pad(&cfg);
        let mut launcher = Launcher::new(cfg).unwrap();
        let target = Vector3::new(30.0, 0.0, 10.0);

        let sol = launcher.request_launch(target, Some(1.5), &mut body).unwrap().clone();
        assert!(sol.found);
        assert!(launcher.is_launched());
        assert_eq!(body.mass, 1.5);
        assert!((body.velocity().norm() - sol.speed).abs() < 1e-9);
        assert_eq!(launcher.target(), Some(&target));
    }

    #[test]
    fn second_request_rejected_until_reset() {
        let cfg = quick_config();
        let mut body = pad(&cfg);
        let mut launcher = Launcher::new(cfg).unwrap();
        let target = Vector3::new(30.0, 0.0, 0.0);
        launcher.request_launch(target, None, &mut body).unwrap();

        let err = launcher.request_launch(target, None, &mut body).unwrap_err();
        assert_eq!(err, LaunchError::AlreadyLaunched);

        launcher.reset(&mut body);
        assert!(!launcher.is_launched());
        assert!(launcher.solution().is_none());
        assert_eq!(body.velocity(), Vector3::zeros());
        assert!(launcher.request_launch(target, None, &mut body).is_ok());
    }

    #[test]
    fn unreachable_target_leaves_body_on_pad() {
        let mut cfg = quick_config();
        cfg.search.speed_max = 20.0;
        let mut body = pad(&cfg);
        let mut launcher = Launcher::new(cfg).unwrap();

        let err = launcher
            .request_launch(Vector3::new(5_000.0, 0.0, 0.0), None, &mut body)
            .unwrap_err();
        assert_eq!(err, LaunchError::NoSolutionFound);
        assert!(!launcher.is_launched());
        assert_eq!(body.velocity(), Vector3::zeros());
    }

    #[test]
    fn non_positive_mass_rejected() {
        let cfg = quick_config();
        let mut body = pad(&cfg);
        let mut launcher = Launcher::new(cfg).unwrap();
        let err = launcher
            .request_launch(Vector3::new(30.0, 0.0, 0.0), Some(-2.0), &mut body)
            .unwrap_err();
        assert!(matches!(err, LaunchError::InvalidConfiguration { field: "mass", .. }));
    }

    #[test]
    fn fixed_update_burns_fuel_and_applies_drag() {
        let cfg = quick_config();
        let mut body = pad(&cfg);
        let mut launcher = Launcher::new(cfg).unwrap();
        assert_eq!(launcher.fixed_update(&mut body, 0.02).unwrap(), None);

        launcher.request_launch(Vector3::new(30.0, 0.0, 0.0), None, &mut body).unwrap();
        let out = launcher.fixed_update(&mut body, 0.02).unwrap().unwrap();
        assert!(out.mass < 1.0);
        assert_eq!(body.mass, out.mass);
        assert!(out.force.dot(&body.velocity()) < 0.0);
    }

    #[test]
    fn burn_starts_from_requested_mass() {
        let cfg = quick_config();
        let mut body = pad(&cfg);
        let mut launcher = Launcher::new(cfg).unwrap();
        launcher.request_launch(Vector3::new(30.0, 0.0, 0.0), Some(5.0), &mut body).unwrap();
        assert_eq!(launcher.flight().current_mass, 5.0);

        let out = launcher.fixed_update(&mut body, 0.02).unwrap().unwrap();
        assert!((out.mass - 5.0 * (1.0 - 0.5 * 0.01)).abs() < 1e-12, "mass {}", out.mass);
        assert_eq!(body.mass, out.mass);

        let mut last = out.mass;
        for _ in 0..200 {
            let m = launcher.fixed_update(&mut body, 0.02).unwrap().unwrap().mass;
            assert!(m <= last && last - m < 0.05, "mass jumped from {last} to {m}");
            last = m;
        }
        assert_eq!(last, 2.5, "dry ratio of the configured burn");

        launcher.reset(&mut body);
        assert_eq!(*launcher.burn(), launcher.config().fuel);
    }

    #[test]
    fn manual_launch_impulse() {
        let v = manual_launch_velocity(45.0, 10.0, 2.0).unwrap();
        assert!((v.x - 5.0 * 0.5f64.sqrt()).abs() < 1e-12);
        assert!((v.x - v.y).abs() < 1e-12);
        assert_eq!(v.z, 0.0);
    }

    #[test]
    fn manual_launch_enters_flight() {
        let cfg = LauncherConfig::default();
        let mut body = pad(&cfg);
        let mut launcher = Launcher::new(cfg).unwrap();
        launcher.launch_manual(45.0, 10.0, 1.0, &mut body).unwrap();
        assert!(launcher.is_launched());
        assert!(launcher.solution().is_none());
        assert!(body.velocity().y > 0.0);
    }

    #[test]
    fn speed_estimate_matches_vacuum_range_formula() {
        // Range at 45 deg in vacuum is v^2 / g, so the estimate inverts it.
        let v = estimate_launch_speed(&Vector3::zeros(), &Vector3::new(90.0, 0.0, 0.0), 9.81);
        assert!((v * v / PhysicsParams::default().gravity - 90.0).abs() < 1e-9);
    }
}
