use glam::Vec3;

// Shared layout/framing/palette constants used by both web and native frontends.

// Bill geometry. 1 world unit = 100 mm, so a US $100 bill (156 x 66.3 x 0.11 mm)
// spans 1.56 x 0.663 units with a 0.0011-unit thickness.
pub const BILL_WIDTH: f32 = 1.56;
pub const BILL_DEPTH: f32 = 0.663;
pub const BILL_THICKNESS: f32 = 0.0011;
pub const BILLS_PER_STACK: u32 = 100;
pub const BILL_VALUE: u64 = 100; // dollars per bill

// Amount handling
pub const MAX_AMOUNT: u64 = 500_000_000_000; // hard cap on the rendered amount
pub const EDGE_TEXTURE_MAX_AMOUNT: u64 = 100_000_000; // above this, sides go flat

// Grid shape
pub const MAX_GRID_COLS: u32 = 75;
pub const MAX_GRID_ROWS: u32 = 150;
pub const FOOTPRINT_VOLUME_SCALE: f32 = 1.5; // widens the cube-root footprint
pub const TARGET_HEIGHT_RATIO: f32 = 2.0 / 3.0; // pile height relative to footprint width
pub const STACK_SPACING: f32 = 1.15; // center-to-center spacing in bill dimensions

// Camera framing
pub const FIT_MARGIN: f32 = 1.8; // zoom-out factor around the fitted bounds
pub const CAMERA_AZIMUTH_RAD: f32 = std::f32::consts::PI * 3.0 / 4.0; // 135 degrees
pub const CAMERA_ELEVATION_RATIO: f32 = 0.5; // eye height above center, in fit distances
pub const CAMERA_FOVY_RAD: f32 = 75.0 * std::f32::consts::PI / 180.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 5000.0;
pub const DEFAULT_EYE: [f32; 3] = [0.0, 10.0, 20.0]; // empty-scene camera position

// Comparison objects
pub const WORLD_UNITS_PER_METER: f32 = 10.0;
pub const COMPARISON_SPACING_RATIO: f32 = 0.2; // gap as a share of the wider footprint
pub const COMPARISON_FALLBACK_X: f32 = 5.0; // placement when no stacks exist

// Ground
pub const GROUND_EXTENT: f32 = 5000.0;
pub const GROUND_THICKNESS: f32 = 0.01;

// Palette
pub const SKY_COLOR: [f32; 4] = [0.776, 0.894, 1.0, 1.0];
pub const GROUND_COLOR: [f32; 4] = [0.42, 0.56, 0.30, 1.0];
pub const PAPER_COLOR: [f32; 4] = [0.961, 0.953, 0.910, 1.0];
pub const COMPARISON_COLOR: [f32; 4] = [0.2, 0.4, 1.0, 0.7];

#[inline]
pub fn default_eye_vec3() -> Vec3 {
    Vec3::new(DEFAULT_EYE[0], DEFAULT_EYE[1], DEFAULT_EYE[2])
}

#[inline]
pub fn stack_height() -> f32 {
    BILL_THICKNESS * BILLS_PER_STACK as f32
}
