use glam::{Vec2, Vec3};
use web_sys as web;

#[derive(Default, Clone, Copy)]
pub struct MouseState {
    pub x: f32,
    pub y: f32,
    pub down: bool,
}
#[derive(Default, Clone, Copy)]
pub struct DragState {
    pub active: bool,
    pub stack: usize,
}

/// Ray / horizontal-plane intersection at `plane_y`.
#[inline]
pub fn ray_plane_y(ray_origin: Vec3, ray_dir: Vec3, plane_y: f32) -> Option<f32> {
    if ray_dir.y.abs() < 1e-6 {
        return None;
    }
    let t = (plane_y - ray_origin.y) / ray_dir.y;
    (t >= 0.0).then_some(t)
}

/// Slab-method ray / axis-aligned-box intersection; returns the entry
/// distance, 0 when the origin is inside the box.
#[inline]
pub fn ray_box(ray_origin: Vec3, ray_dir: Vec3, min: Vec3, max: Vec3) -> Option<f32> {
    let inv = ray_dir.recip();
    let t0 = (min - ray_origin) * inv;
    let t1 = (max - ray_origin) * inv;
    let near = t0.min(t1);
    let far = t0.max(t1);
    let enter = near.max_element();
    let exit = far.min_element();
    if enter > exit || exit < 0.0 {
        return None;
    }
    Some(enter.max(0.0))
}

/// Nearest box hit by the ray; boxes are `(center, size)` pairs.
#[inline]
pub fn pick_box(ray_origin: Vec3, ray_dir: Vec3, boxes: &[(Vec3, Vec3)]) -> Option<(usize, f32)> {
    let mut best = None::<(usize, f32)>;
    for (i, (center, size)) in boxes.iter().enumerate() {
        let half = *size * 0.5;
        if let Some(t) = ray_box(ray_origin, ray_dir, *center - half, *center + half) {
            match best {
                Some((_, bt)) if t >= bt => {}
                _ => best = Some((i, t)),
            }
        }
    }
    best
}

// ---------------- Pointer helpers ----------------
#[inline]
pub fn pointer_canvas_px(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let x_css = ev.client_x() as f32 - rect.left() as f32;
    let y_css = ev.client_y() as f32 - rect.top() as f32;
    let sx = (x_css / rect.width() as f32) * canvas.width() as f32;
    let sy = (y_css / rect.height() as f32) * canvas.height() as f32;
    Vec2::new(sx, sy)
}
