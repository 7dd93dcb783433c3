use crate::render;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use viz_core::SceneState;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub scene: Rc<RefCell<SceneState>>,
    pub gpu: Option<render::GpuState>,
    pub canvas: web::HtmlCanvasElement,
    pub last_instant: Instant,
}

impl FrameContext {
    /// One cooperative step: damp the orbit camera, advance the scene, then
    /// delegate a draw call. Runs whether or not the model ever loaded.
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;

        let w = self.canvas.width();
        let h = self.canvas.height();
        {
            let mut scene = self.scene.borrow_mut();
            scene.camera.aspect = w as f32 / h.max(1) as f32;
            let target = scene.camera.target;
            scene.camera.eye = scene.orbit.update(dt_sec, target);
            scene.advance_frame();
        }

        if let Some(gpu) = &mut self.gpu {
            gpu.resize_if_needed(w, h);
            let scene = self.scene.borrow();
            if let Err(e) = gpu.render(&scene) {
                log::error!("render error: {:?}", e);
            }
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState> {
    match render::GpuState::new(canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

/// Drive the frame loop with requestAnimationFrame; each invocation does
/// one step then reschedules itself until the page unloads.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            let _ = w.request_animation_frame(
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
        let _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
