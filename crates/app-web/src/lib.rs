#![cfg(target_arch = "wasm32")]
use app_core::scene::BoxInstance;
use app_core::{CameraFit, SceneState};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod camera;
mod dom;
mod events;
mod frame;
mod input;
mod overlay;
mod render;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

/// Recompute instances, camera fit and the info line after a scene change.
fn refresh_scene(
    canvas: &web::HtmlCanvasElement,
    scene: &Rc<RefCell<SceneState>>,
    instances: &Rc<RefCell<Vec<BoxInstance>>>,
    camera_fit: &Rc<RefCell<CameraFit>>,
) {
    let scene_ref = scene.borrow();
    *instances.borrow_mut() = scene_ref.instances();
    let aspect = canvas.width().max(1) as f32 / canvas.height().max(1) as f32;
    *camera_fit.borrow_mut() = scene_ref.frame(aspect);
    if let Some(document) = dom::window_document() {
        overlay::update_info(&document, &scene_ref);
    }
}

fn wire_select_handlers(
    document: &web::Document,
    canvas: &web::HtmlCanvasElement,
    scene: &Rc<RefCell<SceneState>>,
    instances: &Rc<RefCell<Vec<BoxInstance>>>,
    camera_fit: &Rc<RefCell<CameraFit>>,
) {
    {
        let canvas = canvas.clone();
        let scene = scene.clone();
        let instances = instances.clone();
        let camera_fit = camera_fit.clone();
        dom::add_change_listener(document, "amount-select", move || {
            let value = dom::window_document()
                .and_then(|d| dom::select_value(&d, "amount-select"))
                .unwrap_or_default();
            scene.borrow_mut().set_amount_input(&value);
            refresh_scene(&canvas, &scene, &instances, &camera_fit);
        });
    }
    {
        let canvas = canvas.clone();
        let scene = scene.clone();
        let instances = instances.clone();
        let camera_fit = camera_fit.clone();
        dom::add_change_listener(document, "compare-select", move || {
            let value = dom::window_document()
                .and_then(|d| dom::select_value(&d, "compare-select"))
                .unwrap_or_else(|| "none".to_string());
            if let Err(e) = scene.borrow_mut().select_comparison(&value) {
                log::warn!("comparison selection failed: {}", e);
            }
            refresh_scene(&canvas, &scene, &instances, &camera_fit);
        });
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("app-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id("app-canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #app-canvas"))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    wire_canvas_resize(&canvas);

    // Scene state seeded from the current select values
    let scene = Rc::new(RefCell::new(SceneState::new()));
    {
        let mut s = scene.borrow_mut();
        if let Some(v) = dom::select_value(&document, "amount-select") {
            s.set_amount_input(&v);
        }
        if let Some(v) = dom::select_value(&document, "compare-select") {
            if let Err(e) = s.select_comparison(&v) {
                log::warn!("comparison selection failed: {}", e);
            }
        }
        log::info!(
            "[scene] amount=${} stacks={} grid={}x{}",
            s.amount,
            s.layout.stacks.len(),
            s.layout.grid_cols,
            s.layout.grid_rows
        );
    }

    let aspect = canvas.width().max(1) as f32 / canvas.height().max(1) as f32;
    let instances = Rc::new(RefCell::new(scene.borrow().instances()));
    let camera_fit = Rc::new(RefCell::new(scene.borrow().frame(aspect)));
    overlay::update_info(&document, &scene.borrow());

    // Initialize WebGPU
    let gpu = frame::init_gpu(&canvas).await;

    wire_select_handlers(&document, &canvas, &scene, &instances, &camera_fit);

    // Pointer handlers (down/move/up) for dragging stacks on the ground plane
    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        instances: instances.clone(),
        camera_fit: camera_fit.clone(),
        mouse_state: Rc::new(RefCell::new(input::MouseState::default())),
        drag_state: Rc::new(RefCell::new(input::DragState::default())),
    });

    // Renderer loop driven by requestAnimationFrame
    frame::start_loop(Rc::new(RefCell::new(frame::FrameContext {
        canvas: canvas.clone(),
        instances,
        camera_fit,
        gpu,
    })));

    Ok(())
}
