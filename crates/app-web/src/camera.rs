use app_core::Camera;
use glam::{Vec3, Vec4};
use web_sys as web;

#[inline]
/// Compute a world-space ray from screen-space canvas coordinates.
///
/// - `canvas`: target canvas to derive dimensions
/// - `sx`, `sy`: pixel coordinates in the canvas' backing store space
/// - `camera`: the currently fitted camera
///
/// Returns `(ray_origin, ray_direction)` in world space.
pub fn screen_to_world_ray(
    canvas: &web::HtmlCanvasElement,
    sx: f32,
    sy: f32,
    camera: &Camera,
) -> (Vec3, Vec3) {
    let width = canvas.width() as f32;
    let height = canvas.height().max(1) as f32;
    let ndc_x = (2.0 * sx / width) - 1.0;
    let ndc_y = 1.0 - (2.0 * sy / height);
    let inv = camera.view_proj().inverse();
    let p_far = inv * Vec4::new(ndc_x, ndc_y, 1.0, 1.0);
    let p1: Vec3 = p_far.truncate() / p_far.w;
    let ro = camera.eye;
    let rd = (p1 - ro).normalize();
    (ro, rd)
}
