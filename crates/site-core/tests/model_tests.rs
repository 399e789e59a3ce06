use site_core::mesh::Mesh;
use site_core::model::{hero_pose, HeroModel, LoadEvent};

#[test]
fn load_success_is_terminal() {
    let mut model = HeroModel::default();
    assert!(!model.is_terminal());
    assert!(model.mesh().is_none());

    assert!(model.resolve(LoadEvent::Loaded(Mesh::torus_knot(1.0, 0.3, 10, 4, 2, 3))));
    assert!(model.is_terminal());
    assert!(matches!(model, HeroModel::Loaded(_)));
}

#[test]
fn failure_and_timeout_degrade_to_fallback() {
    let mut model = HeroModel::default();
    assert!(model.resolve(LoadEvent::Failed("http 404".into())));
    assert!(matches!(model, HeroModel::Fallback(_)));
    assert!(model.mesh().is_some());

    let mut model = HeroModel::default();
    assert!(model.resolve(LoadEvent::TimedOut));
    assert!(matches!(model, HeroModel::Fallback(_)));
}

#[test]
fn later_events_are_ignored_once_terminal() {
    // Timeout fires first, then the fetch completes late: the fallback stays.
    let mut model = HeroModel::default();
    assert!(model.resolve(LoadEvent::TimedOut));
    assert!(!model.resolve(LoadEvent::Loaded(Mesh::torus_knot(1.0, 0.3, 10, 4, 2, 3))));
    assert!(matches!(model, HeroModel::Fallback(_)));

    // And the reverse: a late timeout cannot evict a loaded mesh.
    let mut model = HeroModel::default();
    assert!(model.resolve(LoadEvent::Loaded(Mesh::torus_knot(1.0, 0.3, 10, 4, 2, 3))));
    assert!(!model.resolve(LoadEvent::TimedOut));
    assert!(matches!(model, HeroModel::Loaded(_)));
}

#[test]
fn pose_at_rest_only_floats() {
    let pose = hero_pose(0.0, 0.0, 3000.0);
    assert_eq!(pose.rotation_y, 0.0);
    assert_eq!(pose.scale, 1.0);
    assert_eq!(pose.camera_y, 0.0);
    assert!((pose.model_y - 1.0).abs() < 1e-6);
}

#[test]
fn pose_mid_page_spins_grows_and_descends() {
    let pose = hero_pose(0.0, 1500.0, 3000.0);
    // One of the two full turns
    assert!((pose.rotation_y - std::f32::consts::TAU * 1.0).abs() < 1e-3);
    assert!((pose.scale - 2.5).abs() < 1e-4);
    let descend = 0.5 * 2000.0;
    assert!((pose.camera_y + descend * 0.99).abs() < 1.0);
    assert!(pose.model_y < 0.0);
}

#[test]
fn pose_without_scrollable_page_is_stable() {
    let pose = hero_pose(2.0, 0.0, 0.0);
    assert_eq!(pose.rotation_y, 0.0);
    assert_eq!(pose.scale, 1.0);
    assert_eq!(pose.camera_y, 0.0);
}

#[test]
fn scroll_past_the_end_clamps() {
    let end = hero_pose(0.0, 3000.0, 3000.0);
    let over = hero_pose(0.0, 9000.0, 3000.0);
    assert_eq!(end.rotation_y, over.rotation_y);
    assert_eq!(end.scale, over.scale);
}
