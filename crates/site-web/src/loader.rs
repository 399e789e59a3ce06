//! Hero model fetch. The result lands in a shared slot consumed by the
//! frame loop, which races it against the load deadline.

use crate::constants::MODEL_URLS;
use site_core::{LoadEvent, Mesh};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

pub fn spawn_model_fetch(slot: Rc<RefCell<Option<LoadEvent>>>) {
    spawn_local(async move {
        let mut last_error = String::from("no model URL configured");
        for url in MODEL_URLS {
            match fetch_mesh(url).await {
                Ok(mesh) => {
                    *slot.borrow_mut() = Some(LoadEvent::Loaded(mesh));
                    return;
                }
                Err(e) => {
                    log::warn!("model fetch from {url} failed: {e:#}");
                    last_error = format!("{e:#}");
                }
            }
        }
        *slot.borrow_mut() = Some(LoadEvent::Failed(last_error));
    });
}

async fn fetch_mesh(url: &str) -> anyhow::Result<Mesh> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| anyhow::anyhow!("fetch error: {e:?}"))?;
    let response: web::Response = response
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("not a Response: {e:?}"))?;
    if !response.ok() {
        anyhow::bail!("http status {}", response.status());
    }
    let buffer = JsFuture::from(
        response
            .array_buffer()
            .map_err(|e| anyhow::anyhow!("array_buffer error: {e:?}"))?,
    )
    .await
    .map_err(|e| anyhow::anyhow!("body error: {e:?}"))?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    Ok(Mesh::from_blob(&bytes)?)
}
