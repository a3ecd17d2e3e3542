//! End-to-end checks of the reference configuration.

use approx::assert_relative_eq;
use pendulum::{Bounds, Config, Playback, Position, State};

#[test]
fn reference_run_from_config() {
    let run = Config::default().build().unwrap();
    let trajectory = run.execute().unwrap();

    assert_eq!(trajectory.len(), 201);
    assert_eq!(trajectory.initial(), State::new(0.0, 0.0));
    assert_relative_eq!(trajectory.thetas()[3], 0.028, max_relative = 1e-9);
    assert_relative_eq!(
        trajectory.omegas()[3],
        0.497_799_836_667_483_34,
        max_relative = 1e-9
    );

    let bounds = Bounds::around(run.length());
    assert!(trajectory.positions(run.length()).into_iter().all(|p| bounds.contains(p)));
}

#[test]
fn snapshot_run_from_toml() {
    let config = Config::from_toml_str(
        r"
        theta_0 = 0.5
        steps = 20
        snapshots = [0, 5, 10, 15]
        ",
    )
    .unwrap();
    let run = config.build().unwrap();
    let trajectory = run.execute().unwrap();

    let snapshots = trajectory.sample(&run.snapshots).unwrap();
    assert_eq!(snapshots.len(), 4);
    assert_eq!(snapshots[0], State::new(0.5, 0.0));
    assert_eq!(snapshots[2], trajectory.get(10).unwrap());

    let first = Position::from_angle(snapshots[0].theta, run.length());
    assert_relative_eq!(first.x, -0.5 * 0.5_f64.sin());
    assert_relative_eq!(first.y, 0.5 * 0.5_f64.cos());
}

#[test]
fn animation_replays_precomputed_frames() {
    let run = Config::from_toml_str("theta_0 = 0.5\nsteps = 20").unwrap().build().unwrap();
    let trajectory = run.execute().unwrap();
    let mut playback = Playback::new(trajectory.len(), run.frame_interval);

    playback.advance(run.frame_interval * 7);
    let frame = trajectory.frame(playback.current(), run.length()).unwrap();

    assert_eq!(frame.index(), 7);
    assert_eq!(frame.positions().len(), 8);
    assert_eq!(frame.head(), trajectory.positions(run.length())[7]);
}
