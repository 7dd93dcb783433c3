#![cfg(target_arch = "wasm32")]

mod dom;
mod events;
mod frame;
mod loader;
mod render;

use instant::Instant;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use viz_core::{SceneState, MODEL_ASSET_PATH};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("viz-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id("app-canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #app-canvas"))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    dom::sync_canvas_backing_size(&canvas);

    let aspect = canvas.width() as f32 / canvas.height().max(1) as f32;
    let scene = Rc::new(RefCell::new(SceneState::new(aspect)));
    let rng = Rc::new(RefCell::new(StdRng::from_entropy()));
    let link = dom::find_link(&document);

    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        scene: scene.clone(),
        rng: rng.clone(),
        link: link.clone(),
    });

    // Initial visible colors, unconditionally and before any pointer
    // interaction or asset arrival.
    let change = scene.borrow_mut().startup_scheme(&mut rng.borrow_mut());
    dom::set_link_color(link.as_ref(), change.text);

    let gpu = frame::init_gpu(&canvas).await;

    // Async-populate the scene, then start the frame loop from the load
    // completion so the first frame always observes the load outcome. A
    // failed load leaves the model permanently absent and the loop runs
    // anyway.
    spawn_local(async move {
        match loader::fetch_model(MODEL_ASSET_PATH).await {
            Ok(model) => {
                log::info!(
                    "model loaded: {} vertices, {} indices",
                    model.mesh.positions.len(),
                    model.mesh.indices.len()
                );
                scene
                    .borrow_mut()
                    .install_model(model, &mut rng.borrow_mut());
            }
            Err(e) => log::error!("model load failed: {e:?}"),
        }

        let ctx = frame::FrameContext {
            scene,
            gpu,
            canvas,
            last_instant: Instant::now(),
        };
        frame::start_loop(Rc::new(RefCell::new(ctx)));
    });

    Ok(())
}
