use crate::anim::HoverAnim;
use crate::camera::OrbitCamera;
use crate::constants::{BASE_ANGULAR_VEL, GLOBE_SPIN_FACTOR, MARKER_ALTITUDE, PICK_RADIUS};
use crate::geo;
use crate::input;
use crate::overlay;
use crate::render;
use glam::{Mat3, Mat4, Vec3};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// A journey stop placed on the globe: projected position and the model
/// matrix that orients its disc along the surface normal. Cards are
/// index-aligned with the journey list.
pub struct Marker {
    pub local_pos: Vec3,
    pub base_model: Mat4,
}

impl Marker {
    pub fn new(location: &geo::Location) -> Self {
        let local_pos = geo::project(location.lat, location.lon, MARKER_ALTITUDE);
        Self {
            local_pos,
            base_model: geo::marker_basis(local_pos),
        }
    }
}

pub struct FrameContext<'a> {
    pub markers: Vec<Marker>,
    pub anims: Vec<HoverAnim>,
    pub cards: Vec<web::HtmlElement>,

    pub canvas: web::HtmlCanvasElement,
    pub mouse: Rc<RefCell<input::MouseState>>,
    pub camera: Rc<RefCell<OrbitCamera>>,

    pub gpu: Option<render::GpuState<'a>>,

    pub last_instant: Instant,
    pub spin: f32,
    pub clouds_spin: f32,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;
        let dt_sec = dt.as_secs_f32();

        // Idle rotation: the globe drifts one way, clouds the other.
        self.spin -= dt_sec * BASE_ANGULAR_VEL * GLOBE_SPIN_FACTOR;
        self.clouds_spin += dt_sec * BASE_ANGULAR_VEL;

        let width = self.canvas.width();
        let height = self.canvas.height();

        let (eye, view_proj, ray) = {
            let mut cam = self.camera.borrow_mut();
            cam.set_aspect(width as f32 / height.max(1) as f32);
            cam.update(dt_sec);
            let ms = self.mouse.borrow();
            let ray = cam.screen_ray(width as f32, height as f32, ms.x, ms.y);
            (cam.eye(), cam.view_proj(), ray)
        };

        // Hover pick against the spun marker positions; suppressed while
        // the pointer is dragging the camera.
        let dragging = self.mouse.borrow().down;
        let hover = if dragging {
            None
        } else {
            let spin_mat = Mat3::from_rotation_y(self.spin);
            let centers: Vec<Vec3> = self.markers.iter().map(|m| spin_mat * m.local_pos).collect();
            input::nearest_hit(ray.0, ray.1, &centers, PICK_RADIUS).map(|(i, _t)| i)
        };

        let (cursor_x, cursor_y) = {
            let ms = self.mouse.borrow();
            (ms.client_x, ms.client_y)
        };
        for (i, anim) in self.anims.iter_mut().enumerate() {
            anim.step(hover == Some(i), dt_sec);
            overlay::place_card(&self.cards[i], cursor_x, cursor_y, anim.opacity);
        }

        if let Some(g) = &mut self.gpu {
            let spin_mat = Mat4::from_rotation_y(self.spin);
            let instances: Vec<render::MarkerInstance> = self
                .markers
                .iter()
                .zip(self.anims.iter())
                .map(|(m, anim)| render::MarkerInstance {
                    model: (spin_mat * m.base_model * Mat4::from_scale(Vec3::splat(anim.scale)))
                        .to_cols_array_2d(),
                    color: [1.0, 1.0, 1.0, 1.0],
                })
                .collect();

            g.set_camera(eye, view_proj);
            g.resize_if_needed(width, height);
            if let Err(e) = g.render(dt_sec, self.spin, self.clouds_spin, &instances) {
                log::error!("render error: {:?}", e);
            }
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
