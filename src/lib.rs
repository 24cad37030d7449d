#![cfg(target_arch = "wasm32")]
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod anim;
mod camera;
mod constants;
mod dom;
mod events;
mod frame;
mod geo;
mod input;
mod mesh;
mod overlay;
mod render;

// Scene/interaction tuning constants live in `constants.rs`
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

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("globe-web starting");

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
        .get_element_by_id("globe-canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #globe-canvas"))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    wire_canvas_resize(&canvas);

    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    // The journey: markers on the globe plus one info card each.
    let markers: Vec<frame::Marker> = geo::JOURNEY.iter().map(frame::Marker::new).collect();
    let anims = vec![anim::HoverAnim::default(); markers.len()];
    let cards = overlay::build_cards(&document, &geo::JOURNEY)?;
    log::info!("[scene] markers={} cards={}", markers.len(), cards.len());

    // ---------------- Interaction state ----------------
    let mouse_state = Rc::new(RefCell::new(input::MouseState::default()));
    let drag_state = Rc::new(RefCell::new(input::DragState::default()));
    let orbit = Rc::new(RefCell::new(camera::OrbitCamera::new()));

    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        mouse_state: mouse_state.clone(),
        drag_state: drag_state.clone(),
        camera: orbit.clone(),
    });

    // Initialize WebGPU, then drive everything from requestAnimationFrame.
    let gpu: Option<render::GpuState> = frame::init_gpu(&canvas).await;

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        markers,
        anims,
        cards,
        canvas: canvas.clone(),
        mouse: mouse_state.clone(),
        camera: orbit.clone(),
        gpu,
        last_instant: Instant::now(),
        spin: constants::INITIAL_SPIN,
        clouds_spin: 0.0,
    }));
    frame::start_loop(frame_ctx);

    Ok(())
}
