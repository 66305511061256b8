// Checks on the tuning constants and their mathematical relationships.

use app_core::constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn bill_geometry_is_sane() {
    assert!(BILL_WIDTH > 0.0);
    assert!(BILL_DEPTH > 0.0);
    assert!(BILL_THICKNESS > 0.0);
    // bills are wider than deep, and far thinner than either
    assert!(BILL_WIDTH > BILL_DEPTH);
    assert!(BILL_THICKNESS < BILL_DEPTH / 100.0);
    assert!(BILLS_PER_STACK > 0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn amount_caps_are_round_numbers() {
    assert!(MAX_AMOUNT > 0);
    assert_eq!(MAX_AMOUNT % BILL_VALUE, 0);
    assert!(EDGE_TEXTURE_MAX_AMOUNT < MAX_AMOUNT);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn grid_limits_are_positive() {
    assert!(MAX_GRID_COLS > 0);
    assert!(MAX_GRID_ROWS > 0);
    assert!(STACK_SPACING >= 1.0, "stacks would overlap");
    assert!(FOOTPRINT_VOLUME_SCALE > 0.0);
    assert!(TARGET_HEIGHT_RATIO > 0.0 && TARGET_HEIGHT_RATIO < 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn framing_constants_are_consistent() {
    // margin > 1 guarantees breathing room around the fitted bounds
    assert!(FIT_MARGIN > 1.0);
    assert!(CAMERA_FOVY_RAD > 0.0 && CAMERA_FOVY_RAD < std::f32::consts::PI);
    assert!(CAMERA_AZIMUTH_RAD > 0.0 && CAMERA_AZIMUTH_RAD < std::f32::consts::TAU);
    assert!(CAMERA_ELEVATION_RATIO > 0.0 && CAMERA_ELEVATION_RATIO <= 1.0);
    assert!(CAMERA_ZNEAR > 0.0);
    assert!(CAMERA_ZFAR > CAMERA_ZNEAR);
    // the default eye must be away from the origin it looks at
    assert!(default_eye_vec3().length() > 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn comparison_constants_are_positive() {
    assert!(WORLD_UNITS_PER_METER > 0.0);
    assert!(COMPARISON_SPACING_RATIO > 0.0 && COMPARISON_SPACING_RATIO < 1.0);
    assert!(GROUND_EXTENT > 0.0);
}
