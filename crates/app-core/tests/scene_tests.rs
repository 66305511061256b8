// Integration tests for scene composition: instances, comparison placement,
// bounds and the info line.

use app_core::constants::{
    COMPARISON_SPACING_RATIO, EDGE_TEXTURE_MAX_AMOUNT, GROUND_EXTENT, MAX_AMOUNT,
};
use app_core::scene::{format_thousands, SceneState, SurfaceKind};

fn scene_with(amount: u64) -> SceneState {
    let mut scene = SceneState::new();
    scene.set_amount(amount);
    scene
}

#[test]
fn ground_comes_first_and_spans_the_scene() {
    let scene = scene_with(1_000_000);
    let instances = scene.instances();
    let ground = &instances[0];
    assert_eq!(ground.surface, SurfaceKind::Flat);
    assert_eq!(ground.size.x, GROUND_EXTENT);
    assert_eq!(ground.size.z, GROUND_EXTENT);
    assert!(ground.center.y < 0.0, "ground top must sit at y = 0");
}

#[test]
fn stacks_rest_on_the_ground_plane() {
    let scene = scene_with(25_000_000);
    for b in scene.instances().iter().skip(SceneState::STACKS_OFFSET) {
        let bottom = b.center.y - b.size.y / 2.0;
        assert!(
            bottom.abs() < 1e-5,
            "instance bottom not on ground: {bottom}"
        );
    }
}

#[test]
fn empty_scene_has_only_the_ground() {
    let scene = scene_with(0);
    assert_eq!(scene.instances().len(), 1);
    assert!(scene.scene_bounds().is_none());
}

#[test]
fn malformed_amount_input_counts_as_zero() {
    let mut scene = SceneState::new();
    scene.set_amount_input("not a number");
    assert_eq!(scene.amount, 0);
    assert!(scene.layout.is_empty());
    scene.set_amount_input("1000000");
    assert_eq!(scene.amount, 1_000_000);
}

#[test]
fn edge_texture_only_below_the_threshold() {
    let textured = scene_with(EDGE_TEXTURE_MAX_AMOUNT - 100);
    let first_stack = textured.instances()[SceneState::STACKS_OFFSET];
    assert_eq!(first_stack.surface, SurfaceKind::BillTextured);

    let plain = scene_with(EDGE_TEXTURE_MAX_AMOUNT);
    let first_stack = plain.instances()[SceneState::STACKS_OFFSET];
    assert_eq!(first_stack.surface, SurfaceKind::BillPlainSides);
}

#[test]
fn comparison_sits_right_of_the_stacks_with_a_gap() {
    let mut scene = scene_with(50_000_000);
    scene.select_comparison("human").unwrap();
    let stacks = scene.stack_bounds().unwrap();
    let comp = scene.comparison_bounds().unwrap();
    assert!(comp.min.x > stacks.max.x, "comparison overlaps the stacks");
    let expected_gap = stacks.size().x.max(comp.size().x) * COMPARISON_SPACING_RATIO;
    let gap = comp.min.x - stacks.max.x;
    assert!((gap - expected_gap).abs() < 1e-3);
    // bottom on the ground
    assert!(comp.min.y.abs() < 1e-5);
}

#[test]
fn comparison_without_stacks_uses_the_fallback_spot() {
    let mut scene = SceneState::new();
    scene.select_comparison("car").unwrap();
    let (center, size) = scene.comparison_placement().unwrap();
    assert_eq!(center.x, app_core::constants::COMPARISON_FALLBACK_X);
    assert!((center.y - size.y / 2.0).abs() < 1e-5);
}

#[test]
fn unknown_comparison_id_is_an_error_and_clears_the_selection() {
    let mut scene = scene_with(10_000);
    scene.select_comparison("human").unwrap();
    assert!(scene.comparison.is_some());
    let err = scene.select_comparison("teapot").unwrap_err();
    assert!(err.to_string().contains("teapot"));
    assert!(scene.comparison.is_none());
}

#[test]
fn none_clears_the_selection() {
    let mut scene = scene_with(10_000);
    scene.select_comparison("bus").unwrap();
    scene.select_comparison("none").unwrap();
    assert!(scene.comparison.is_none());
    scene.select_comparison("bus").unwrap();
    scene.select_comparison("").unwrap();
    assert!(scene.comparison.is_none());
}

#[test]
fn scene_bounds_cover_both_stacks_and_comparison() {
    let mut scene = scene_with(1_000_000);
    scene.select_comparison("eiffel-tower").unwrap();
    let all = scene.scene_bounds().unwrap();
    let stacks = scene.stack_bounds().unwrap();
    let comp = scene.comparison_bounds().unwrap();
    assert!(all.min.x <= stacks.min.x);
    assert!(all.max.x >= comp.max.x);
    assert!(all.max.y >= comp.max.y);
}

#[test]
fn framing_covers_the_largest_amount() {
    let scene = scene_with(MAX_AMOUNT);
    let fit = scene.frame(16.0 / 9.0);
    assert!(fit.distance.is_finite());
    assert!(fit.distance > 0.0);
}

#[test]
fn info_line_formats_thousands() {
    let scene = scene_with(1_000_000);
    assert_eq!(scene.info_line(), "10,000 x $100 = $1,000,000");

    let mut scene = scene_with(200);
    scene.select_comparison("human").unwrap();
    assert_eq!(scene.info_line(), "2 x $100 = $200 | vs Average person");
}

#[test]
fn format_thousands_cases() {
    assert_eq!(format_thousands(0), "0");
    assert_eq!(format_thousands(999), "999");
    assert_eq!(format_thousands(1_000), "1,000");
    assert_eq!(format_thousands(1_234_567), "1,234,567");
    assert_eq!(format_thousands(500_000_000_000), "500,000,000,000");
}
