//! Scene Framer: fits the camera around whatever the scene currently holds.
//!
//! These types intentionally avoid referencing platform-specific APIs and are
//! suitable for use on both native and web targets. The frontends consume
//! them to build view/projection matrices after every scene change.

use crate::bounds::Aabb;
use crate::constants::*;
use glam::{Mat4, Vec3};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Build a camera from a framing fit and the current surface aspect ratio.
    pub fn from_fit(fit: &CameraFit, aspect: f32) -> Self {
        Self {
            eye: fit.eye,
            target: fit.target,
            up: Vec3::Y,
            aspect,
            fovy_radians: CAMERA_FOVY_RAD,
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

/// Where the camera should sit and look after a scene change.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraFit {
    pub eye: Vec3,
    pub target: Vec3,
    pub distance: f32,
}

/// The fit used when there is nothing to frame.
pub fn default_fit() -> CameraFit {
    let eye = default_eye_vec3();
    CameraFit {
        eye,
        target: Vec3::ZERO,
        distance: eye.length(),
    }
}

/// Fit the camera around `bounds` with a fixed margin, from a fixed oblique
/// azimuth, using the pinhole fit formula per axis and keeping the largest of
/// the three distances so the whole box is always contained.
pub fn frame_scene(bounds: Option<Aabb>, aspect: f32, fovy_radians: f32) -> CameraFit {
    let Some(bounds) = bounds else {
        return default_fit();
    };

    let center = bounds.center();
    let size = bounds.size();

    let half_tan = (fovy_radians / 2.0).tan();
    let fit_height = size.y * FIT_MARGIN / (2.0 * half_tan);
    let fit_width = size.x * FIT_MARGIN / (2.0 * half_tan * aspect);
    let fit_depth = size.z * FIT_MARGIN / (2.0 * half_tan);
    let distance = fit_height.max(fit_width).max(fit_depth);

    let eye = Vec3::new(
        center.x - CAMERA_AZIMUTH_RAD.sin() * distance,
        center.y + distance * CAMERA_ELEVATION_RATIO,
        center.z - CAMERA_AZIMUTH_RAD.cos() * distance,
    );

    CameraFit {
        eye,
        target: center,
        distance,
    }
}
