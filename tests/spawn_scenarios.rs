mod common;

use common::{harness, harness_with};
use turtle_spawner::{SpawnResponse, SpawnerConfig};

#[test]
fn accepted_then_rejected_spawn() {
    let mut h = harness();

    h.fire_timer();
    h.spawn.succeed_next(SpawnResponse::accepted("turtle1"));
    h.settle();
    assert_eq!(h.alive_names(), vec!["turtle1"]);
    assert_eq!(h.feed.len(), 1);

    h.fire_timer();
    assert_eq!(h.spawn.requests()[1].name, "turtle2");
    h.spawn.succeed_next(SpawnResponse::rejected());
    h.settle();
    assert_eq!(h.alive_names(), vec!["turtle1"]);
    assert_eq!(h.feed.len(), 1);
}

#[test]
fn names_strictly_increase_across_rejections() {
    let mut h = harness();
    for i in 1..=6 {
        h.fire_timer();
        let response = if i % 2 == 0 {
            SpawnResponse::rejected()
        } else {
            SpawnResponse::accepted(format!("turtle{i}"))
        };
        h.spawn.succeed_next(response);
        h.settle();
    }

    let requested: Vec<String> = h.spawn.requests().into_iter().map(|r| r.name).collect();
    assert_eq!(
        requested,
        vec!["turtle1", "turtle2", "turtle3", "turtle4", "turtle5", "turtle6"]
    );
    assert_eq!(h.alive_names(), vec!["turtle1", "turtle3", "turtle5"]);
    assert_eq!(h.node.names_issued(), 6);

    // Next name continues past the gaps.
    h.fire_timer();
    assert_eq!(h.spawn.requests()[6].name, "turtle7");
}

#[test]
fn n_creates_give_n_unique_turtles_in_completion_order() {
    let mut h = harness();
    for _ in 0..3 {
        h.fire_timer();
    }
    // Newest call first, one completion per tick.
    for name in ["turtle3", "turtle2", "turtle1"] {
        assert!(h.spawn.succeed_newest(SpawnResponse::accepted(name)));
        h.settle();
    }

    assert_eq!(h.alive_names(), vec!["turtle3", "turtle2", "turtle1"]);
    let sizes: Vec<usize> = h.feed.snapshots().iter().map(|s| s.len()).collect();
    assert_eq!(sizes, vec![1, 2, 3]);
}

#[test]
fn registered_pose_is_the_requested_pose() {
    let mut h = harness();
    h.fire_timer();
    let request = h.spawn.requests()[0].clone();
    h.spawn.succeed_next(SpawnResponse::accepted("turtle1"));
    h.settle();

    let alive = h.node.alive_turtles();
    assert_eq!(alive.turtles[0], request.into_turtle("turtle1".to_string()));
}

#[test]
fn custom_prefix_and_frequency() {
    let mut h = harness_with(SpawnerConfig::from_params([
        "turtle_name_prefix:=enemy",
        "spawn_frequency:=2.0",
        "seed:=5",
    ])
    .unwrap());

    // One second at 2 Hz in half-second ticks: two spawns.
    h.node.spin_once(std::time::Duration::from_millis(500));
    h.node.spin_once(std::time::Duration::from_millis(500));
    let names: Vec<String> = h.spawn.requests().into_iter().map(|r| r.name).collect();
    assert_eq!(names, vec!["enemy1", "enemy2"]);
}
