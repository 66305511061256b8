use crate::camera;
use crate::input;
use app_core::scene::{BoxInstance, SurfaceKind};
use app_core::{Camera, CameraFit};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Shared handles the pointer handlers close over.
#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub instances: Rc<RefCell<Vec<BoxInstance>>>,
    pub camera_fit: Rc<RefCell<CameraFit>>,
    pub mouse_state: Rc<RefCell<input::MouseState>>,
    pub drag_state: Rc<RefCell<input::DragState>>,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_pointerdown(&w);
    wire_pointermove(&w);
    wire_pointerup(&w);
}

fn fitted_camera(canvas: &web::HtmlCanvasElement, fit: &CameraFit) -> Camera {
    let aspect = canvas.width().max(1) as f32 / canvas.height().max(1) as f32;
    Camera::from_fit(fit, aspect)
}

fn wire_pointerdown(w: &InputWiring) {
    let w = w.clone();
    let canvas = w.canvas.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = input::pointer_canvas_px(&ev, &w.canvas);
        {
            let mut ms = w.mouse_state.borrow_mut();
            ms.x = pos.x;
            ms.y = pos.y;
            ms.down = true;
        }
        let cam = fitted_camera(&w.canvas, &w.camera_fit.borrow());
        let (ro, rd) = camera::screen_to_world_ray(&w.canvas, pos.x, pos.y, &cam);

        // Only bill stacks are draggable; the ground and the comparison
        // placeholder stay put.
        let hit = {
            let inst = w.instances.borrow();
            let mut targets = Vec::new();
            let mut indices = Vec::new();
            for (i, b) in inst.iter().enumerate() {
                if b.surface != SurfaceKind::Flat {
                    targets.push((b.center, b.size));
                    indices.push(i);
                }
            }
            input::pick_box(ro, rd, &targets).map(|(i, _t)| indices[i])
        };
        if let Some(index) = hit {
            let mut ds = w.drag_state.borrow_mut();
            ds.active = true;
            ds.stack = index;
            log::info!("[pointer] begin drag on stack instance {}", index);
        }
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    let _ = canvas.add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();
    let canvas = w.canvas.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = input::pointer_canvas_px(&ev, &w.canvas);
        {
            let mut ms = w.mouse_state.borrow_mut();
            ms.x = pos.x;
            ms.y = pos.y;
        }
        if !w.drag_state.borrow().active {
            return;
        }
        let cam = fitted_camera(&w.canvas, &w.camera_fit.borrow());
        let (ro, rd) = camera::screen_to_world_ray(&w.canvas, pos.x, pos.y, &cam);
        if let Some(t) = input::ray_plane_y(ro, rd, 0.0) {
            let hit = ro + rd * t;
            let index = w.drag_state.borrow().stack;
            let mut inst = w.instances.borrow_mut();
            if let Some(b) = inst.get_mut(index) {
                b.center.x = hit.x;
                b.center.z = hit.z;
            }
        }
    }) as Box<dyn FnMut(_)>);
    let _ = canvas.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerup(w: &InputWiring) {
    let w = w.clone();
    let canvas = w.canvas.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        w.drag_state.borrow_mut().active = false;
        w.mouse_state.borrow_mut().down = false;
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    let _ = canvas.add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
    closure.forget();
}
