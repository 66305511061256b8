// Integration tests for the scene framer and bounding boxes.

use app_core::bounds::{union_opt, Aabb};
use app_core::constants::{
    CAMERA_AZIMUTH_RAD, CAMERA_ELEVATION_RATIO, CAMERA_FOVY_RAD, DEFAULT_EYE, FIT_MARGIN,
};
use app_core::framer::{default_fit, frame_scene, Camera};
use glam::Vec3;

fn unit_box() -> Aabb {
    Aabb::new(Vec3::ZERO, Vec3::ONE)
}

#[test]
fn aabb_center_and_size() {
    let bb = Aabb::new(Vec3::new(-1.0, 0.0, -2.0), Vec3::new(3.0, 4.0, 2.0));
    assert_eq!(bb.center(), Vec3::new(1.0, 2.0, 0.0));
    assert_eq!(bb.size(), Vec3::new(4.0, 4.0, 4.0));
}

#[test]
fn aabb_union_is_commutative_and_monotonic() {
    let a = unit_box();
    let b = Aabb::new(Vec3::new(2.0, -1.0, 0.5), Vec3::new(5.0, 0.5, 3.0));
    let ab = a.union(b);
    let ba = b.union(a);
    assert_eq!(ab, ba);
    // the union contains both operands
    assert!(ab.min.x <= a.min.x && ab.min.x <= b.min.x);
    assert!(ab.max.y >= a.max.y && ab.max.y >= b.max.y);
    assert!(ab.max.z >= a.max.z && ab.max.z >= b.max.z);
}

#[test]
fn union_opt_ignores_missing_operands() {
    let a = unit_box();
    assert_eq!(union_opt(Some(a), None), Some(a));
    assert_eq!(union_opt(None, Some(a)), Some(a));
    assert_eq!(union_opt(None, None), None);
}

#[test]
fn degenerate_scene_returns_default_camera() {
    let fit = frame_scene(None, 16.0 / 9.0, CAMERA_FOVY_RAD);
    let def = default_fit();
    assert_eq!(fit.eye, def.eye);
    assert_eq!(fit.target, Vec3::ZERO);
    assert_eq!(fit.eye.x, DEFAULT_EYE[0]);
    assert_eq!(fit.eye.y, DEFAULT_EYE[1]);
    assert_eq!(fit.eye.z, DEFAULT_EYE[2]);
}

#[test]
fn distance_is_finite_and_nonnegative() {
    let boxes = [
        unit_box(),
        Aabb::new(Vec3::splat(-0.001), Vec3::splat(0.001)),
        Aabb::new(Vec3::new(-500.0, 0.0, -200.0), Vec3::new(500.0, 800.0, 200.0)),
        Aabb::from_center_size(Vec3::new(40.0, 3.0, -17.0), Vec3::new(90.0, 0.1, 60.0)),
    ];
    for bb in boxes {
        let fit = frame_scene(Some(bb), 1.5, CAMERA_FOVY_RAD);
        assert!(fit.distance.is_finite());
        assert!(fit.distance >= 0.0);
        assert!(fit.eye.is_finite());
    }
}

#[test]
fn distance_covers_every_axis() {
    let bb = Aabb::new(Vec3::new(-30.0, 0.0, -5.0), Vec3::new(30.0, 12.0, 5.0));
    let aspect = 1.25;
    let fit = frame_scene(Some(bb), aspect, CAMERA_FOVY_RAD);
    let size = bb.size();
    let half_tan = (CAMERA_FOVY_RAD / 2.0).tan();
    let fit_h = size.y * FIT_MARGIN / (2.0 * half_tan);
    let fit_w = size.x * FIT_MARGIN / (2.0 * half_tan * aspect);
    let fit_d = size.z * FIT_MARGIN / (2.0 * half_tan);
    assert!(fit.distance >= fit_h);
    assert!(fit.distance >= fit_w);
    assert!(fit.distance >= fit_d);
    assert_eq!(fit.distance, fit_h.max(fit_w).max(fit_d));
}

#[test]
fn eye_sits_at_the_oblique_azimuth() {
    let bb = Aabb::new(Vec3::new(-10.0, 0.0, -10.0), Vec3::new(10.0, 5.0, 10.0));
    let fit = frame_scene(Some(bb), 1.0, CAMERA_FOVY_RAD);
    let center = bb.center();
    let dx = fit.eye.x - center.x;
    let dz = fit.eye.z - center.z;
    let horizontal = (dx * dx + dz * dz).sqrt();
    assert!((horizontal - fit.distance).abs() < 1e-3 * fit.distance);
    // offset direction is -sin/-cos of the fixed azimuth
    assert!((dx + CAMERA_AZIMUTH_RAD.sin() * fit.distance).abs() < 1e-3);
    assert!((dz + CAMERA_AZIMUTH_RAD.cos() * fit.distance).abs() < 1e-3);
}

#[test]
fn eye_is_elevated_by_half_the_distance() {
    let bb = Aabb::new(Vec3::new(-4.0, 0.0, -4.0), Vec3::new(4.0, 9.0, 4.0));
    let fit = frame_scene(Some(bb), 1.7, CAMERA_FOVY_RAD);
    let rise = fit.eye.y - bb.center().y;
    assert!((rise - fit.distance * CAMERA_ELEVATION_RATIO).abs() < 1e-4);
}

#[test]
fn larger_boxes_need_more_distance() {
    let mut prev = 0.0;
    for scale in [1.0f32, 2.0, 10.0, 100.0, 1000.0] {
        let bb = Aabb::from_center_size(Vec3::ZERO, Vec3::splat(scale));
        let fit = frame_scene(Some(bb), 1.0, CAMERA_FOVY_RAD);
        assert!(fit.distance > prev, "distance not increasing at scale {scale}");
        prev = fit.distance;
    }
}

#[test]
fn camera_matrices_are_finite() {
    let fit = frame_scene(Some(unit_box()), 1.33, CAMERA_FOVY_RAD);
    let cam = Camera::from_fit(&fit, 1.33);
    let vp = cam.view_proj();
    for v in vp.to_cols_array() {
        assert!(v.is_finite());
    }
}
