use anyhow::anyhow;
use js_sys::Uint8Array;
use viz_core::ModelNode;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// Fetch the GLB asset by relative path and parse it. One shot: failures
/// are reported to the caller and nothing retries.
pub async fn fetch_model(path: &str) -> anyhow::Result<ModelNode> {
    let window = web::window().ok_or_else(|| anyhow!("no window"))?;
    let resp_value = JsFuture::from(window.fetch_with_str(path))
        .await
        .map_err(|e| anyhow!("fetch {path} failed: {:?}", e))?;
    let resp: web::Response = resp_value
        .dyn_into()
        .map_err(|e| anyhow!("not a Response: {:?}", e))?;
    if !resp.ok() {
        return Err(anyhow!("fetch {path}: HTTP {}", resp.status()));
    }
    let buf_promise = resp
        .array_buffer()
        .map_err(|e| anyhow!("array_buffer: {:?}", e))?;
    let buf = JsFuture::from(buf_promise)
        .await
        .map_err(|e| anyhow!("body read failed: {:?}", e))?;
    let bytes = Uint8Array::new(&buf).to_vec();
    log::info!("fetched {path} ({} bytes)", bytes.len());
    Ok(ModelNode::from_glb(&bytes)?)
}
