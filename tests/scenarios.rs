use nalgebra::Vector3;

use rocket_launcher::dynamics::{tick, FlightState, SearchParams};
use rocket_launcher::launcher::{Launcher, PointMassBody, RigidBody};
use rocket_launcher::sim::{simulate, EventKind};
use rocket_launcher::solver::{launch_velocity, solve};
use rocket_launcher::{FuelBurnParams, LaunchError, LauncherConfig, PhysicsParams};

fn grid(speed_max: f64) -> SearchParams {
    SearchParams {
        angle_min: 20.0,
        angle_max: 80.0,
        speed_min: 5.0,
        speed_max,
        time_step: 0.02,
        acceptable_distance: 1.0,
        max_steps: 1000,
        ..SearchParams::default()
    }
}

#[test]
fn vacuum_shot_reaches_50m() {
    let start = Vector3::zeros();
    let target = Vector3::new(50.0, 0.0, 0.0);
    let physics = PhysicsParams::vacuum(9.81);
    let search = grid(200.0);

    let sol = solve(&start, &target, &physics, 1.0, &search).expect("valid search");
    assert!(sol.found, "classical projectile should reach 50 m");
    assert!((20.0..=80.0).contains(&sol.angle));
    assert!((5.0..=200.0).contains(&sol.speed));
    assert_eq!(sol.trajectory[0], start);

    let last = sol.trajectory.last().unwrap();
    assert!(
        (last - target).norm() < search.acceptable_distance,
        "landed {:.3} from target",
        (last - target).norm()
    );
}

#[test]
fn solution_replays_identically() {
    let start = Vector3::new(2.0, 0.0, -3.0);
    let target = Vector3::new(-20.0, 4.0, 25.0);
    let physics = PhysicsParams::default();
    let search = grid(200.0);

    let sol = solve(&start, &target, &physics, 1.0, &search).unwrap();
    assert!(sol.found);

    let v = launch_velocity(&start, &target, sol.angle, sol.speed).unwrap();
    let replay = simulate(&start, &v, &target, &physics, 1.0, &search);
    assert!(replay.success);
    assert_eq!(replay.event, Some(EventKind::TargetReached));
    assert_eq!(replay.points, sol.trajectory);

    let again = solve(&start, &target, &physics, 1.0, &search).unwrap();
    assert_eq!(again, sol);
}

#[test]
fn half_step_grid_solution_is_on_grid_and_replays() {
    let start = Vector3::zeros();
    let target = Vector3::new(40.0, 5.0, 0.0);
    let physics = PhysicsParams::vacuum(9.81);
    let search = SearchParams { angle_step: 0.5, speed_step: 0.5, ..grid(200.0) };

    let sol = solve(&start, &target, &physics, 1.0, &search).unwrap();
    assert!(sol.found, "elevated target should be reachable in vacuum");

    let angle_index = (sol.angle - search.angle_min) / search.angle_step;
    let speed_index = (sol.speed - search.speed_min) / search.speed_step;
    assert_eq!(angle_index.fract(), 0.0, "angle {} off grid", sol.angle);
    assert_eq!(speed_index.fract(), 0.0, "speed {} off grid", sol.speed);
    assert_eq!(sol.angle, search.angle_min + angle_index * search.angle_step);
    assert_eq!(sol.speed, search.speed_min + speed_index * search.speed_step);

    let v = launch_velocity(&start, &target, sol.angle, sol.speed).unwrap();
    let replay = simulate(&start, &v, &target, &physics, 1.0, &search);
    assert_eq!(replay.event, Some(EventKind::TargetReached));
    assert_eq!(replay.points, sol.trajectory);
    assert!((sol.impact_point().unwrap() - target).norm() < search.acceptable_distance);
}

#[test]
fn target_straight_above_is_degenerate() {
    let err = solve(
        &Vector3::zeros(),
        &Vector3::new(0.0, 100.0, 0.0),
        &PhysicsParams::default(),
        1.0,
        &grid(200.0),
    )
    .unwrap_err();
    assert_eq!(err, LaunchError::DegenerateTarget);
}

#[test]
fn unreachable_target_returns_empty_solution() {
    let sol = solve(
        &Vector3::zeros(),
        &Vector3::new(10_000.0, 0.0, 0.0),
        &PhysicsParams::default(),
        1.0,
        &grid(20.0),
    )
    .unwrap();
    assert!(!sol.found);
    assert!(sol.trajectory.is_empty());
    assert_eq!(sol.evaluated, 61 * 16);
    assert_eq!(sol.require().unwrap_err(), LaunchError::NoSolutionFound);
}

#[test]
fn ground_failure_ends_below_ground() {
    let out = simulate(
        &Vector3::zeros(),
        &Vector3::new(8.0, 8.0, 0.0),
        &Vector3::new(200.0, 0.0, 0.0),
        &PhysicsParams::default(),
        1.0,
        &grid(200.0),
    );
    assert!(!out.success);
    assert_eq!(out.event, Some(EventKind::GroundImpact));
    assert!(out.points.last().unwrap().y < 0.0);
}

#[test]
fn fuel_burn_mass_sequence() {
    let fuel = FuelBurnParams { initial_mass: 1.0, dry_mass: 0.5, burn_duration: 2.0 };
    let physics = PhysicsParams::default();
    let mut state = FlightState::launch(&fuel);
    let vel = Vector3::new(20.0, 5.0, 0.0);

    let mut masses = vec![state.current_mass];
    for _ in 0..5 {
        masses.push(tick(&mut state, &vel, 1.0, &physics, &fuel).unwrap().mass);
    }
    assert_eq!(masses, vec![1.0, 0.75, 0.5, 0.5, 0.5, 0.5]);
}

#[test]
fn launcher_full_cycle() {
    let mut config = LauncherConfig::default();
    config.search.speed_max = 200.0;
    let mut body = PointMassBody::new(config.home, config.nominal_mass, config.physics.gravity);
    let mut launcher = Launcher::new(config).unwrap();

    let target = Vector3::new(25.0, 0.0, 15.0);
    launcher.request_launch(target, None, &mut body).unwrap();

    let dt = 0.02;
    let mut ticks = 0;
    while !body.on_ground() && ticks < 5_000 {
        let out = launcher.fixed_update(&mut body, dt).unwrap().unwrap();
        let (lo, hi) = launcher.config().fuel.mass_bounds();
        assert!(out.mass >= lo && out.mass <= hi);
        body.step(dt);
        ticks += 1;
    }
    assert!(body.on_ground(), "rocket should come back down");
    assert!(launcher.flight().current_mass < launcher.config().fuel.initial_mass);

    launcher.reset(&mut body);
    assert_eq!(body.position(), Vector3::zeros());
    assert_eq!(*launcher.flight(), FlightState::new(&launcher.config().fuel));
}
