//! The placeholder activator: scans the page for video placeholders, loads
//! their thumbnails, and swaps in the live player on click.

mod dom;

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::config::EmbedConfig;
use crate::slot::SlotState;
use crate::urls;

const CONFIG_SCRIPT_ID: &str = "lazytube-config";

/// Entry point. Activates immediately when the page structure is already
/// parsed, otherwise waits for `DOMContentLoaded`. Runs once; there is no
/// re-scan.
pub fn start() {
    if let Err(e) = schedule_activation() {
        warn(&format!("start failed: {e}"));
    }
}

fn schedule_activation() -> Result<(), String> {
    let document = dom::document()?;
    if document.ready_state() == "loading" {
        let cb = Closure::wrap(Box::new(move |_ev: web_sys::Event| {
            run_activation();
        }) as Box<dyn FnMut(_)>);
        document
            .add_event_listener_with_callback("DOMContentLoaded", cb.as_ref().unchecked_ref())
            .map_err(|_| "document: addEventListener threw".to_string())?;
        cb.forget();
    } else {
        run_activation();
    }
    Ok(())
}

fn run_activation() {
    match activate_all() {
        Ok(count) => debug(&format!("activated {count} placeholder(s)")),
        Err(e) => warn(&e),
    }
}

fn activate_all() -> Result<u32, String> {
    let document = dom::document()?;
    let config = page_config(&document);

    let nodes = document
        .query_selector_all(&config.placeholder_selector)
        .map_err(|_| format!("document: bad selector {:?}", config.placeholder_selector))?;

    let mut activated = 0;
    for i in 0..nodes.length() {
        let Some(node) = nodes.get(i) else { continue };
        let Ok(placeholder) = node.dyn_into::<web_sys::Element>() else {
            continue;
        };
        match activate_slot(&document, &config, placeholder) {
            Ok(()) => activated += 1,
            Err(e) => warn(&e),
        }
    }
    Ok(activated)
}

/// Wire one placeholder: fire the thumbnail load and register the click
/// handler. Every handle the two callbacks capture (element, video id, state
/// cell) is owned by this slot; nothing is shared across iterations.
fn activate_slot(
    document: &web_sys::Document,
    config: &EmbedConfig,
    placeholder: web_sys::Element,
) -> Result<(), String> {
    let video_id = placeholder
        .get_attribute(&config.embed_attr)
        .ok_or_else(|| format!("placeholder: missing {} attribute", config.embed_attr))?;
    if !urls::is_valid_video_id(&video_id) {
        return Err(format!("placeholder: invalid video id {video_id:?}"));
    }

    let state = Rc::new(Cell::new(SlotState::Empty));
    spawn_thumbnail_load(config, &placeholder, &video_id, Rc::clone(&state));
    attach_click_handler(document, config, placeholder, video_id, state)
}

/// Fire-and-forget thumbnail load. The spawned future appends the image to
/// its originating placeholder, unless the player got embedded first.
fn spawn_thumbnail_load(
    config: &EmbedConfig,
    placeholder: &web_sys::Element,
    video_id: &str,
    state: Rc<Cell<SlotState>>,
) {
    let path = urls::thumbnail_path(&config.static_prefix, video_id);

    let image = match web_sys::HtmlImageElement::new() {
        Ok(image) => image,
        Err(_) => {
            warn("image: constructor threw");
            return;
        }
    };
    let loaded = dom::image_load_promise(&image);
    image.set_src(&path);

    let placeholder = placeholder.clone();
    wasm_bindgen_futures::spawn_local(async move {
        if wasm_bindgen_futures::JsFuture::from(loaded).await.is_err() {
            // No fallback for a missing thumbnail; the placeholder stays inert.
            debug(&format!("thumbnail missing: {path}"));
            return;
        }

        let (next, append) = state.get().on_thumbnail_loaded();
        if !append {
            return;
        }
        match placeholder.append_child(&image) {
            Ok(_) => state.set(next),
            Err(_) => warn("placeholder: appendChild threw"),
        }
    });
}

fn attach_click_handler(
    document: &web_sys::Document,
    config: &EmbedConfig,
    placeholder: web_sys::Element,
    video_id: String,
    state: Rc<Cell<SlotState>>,
) -> Result<(), String> {
    let url = urls::embed_url(&config.embed_base, &video_id);
    let document = document.clone();
    let target = placeholder.clone();

    let cb = Closure::wrap(Box::new(move |_ev: web_sys::MouseEvent| {
        let (next, embed) = state.get().on_click();
        if !embed {
            return;
        }
        match embed_player(&document, &target, &url) {
            Ok(()) => state.set(next),
            Err(e) => warn(&e),
        }
    }) as Box<dyn FnMut(_)>);

    placeholder
        .add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())
        .map_err(|_| "placeholder: addEventListener threw".to_string())?;
    cb.forget();
    Ok(())
}

/// Replace the placeholder's content with the live player. Irreversible.
fn embed_player(
    document: &web_sys::Document,
    placeholder: &web_sys::Element,
    url: &str,
) -> Result<(), String> {
    let iframe = document
        .create_element("iframe")
        .map_err(|_| "document: createElement threw".to_string())?
        .dyn_into::<web_sys::HtmlIFrameElement>()
        .map_err(|_| "document: iframe cast failed".to_string())?;

    iframe
        .set_attribute("frameborder", "0")
        .map_err(|_| "iframe: setAttribute threw".to_string())?;
    iframe
        .set_attribute("allowfullscreen", "")
        .map_err(|_| "iframe: setAttribute threw".to_string())?;
    iframe.set_src(url);

    placeholder.set_inner_html("");
    placeholder
        .append_child(&iframe)
        .map_err(|_| "placeholder: appendChild threw".to_string())?;
    Ok(())
}

fn page_config(document: &web_sys::Document) -> EmbedConfig {
    document
        .get_element_by_id(CONFIG_SCRIPT_ID)
        .and_then(|el| el.text_content())
        .and_then(|raw| EmbedConfig::from_json(&raw))
        .unwrap_or_default()
}

fn warn(message: &str) {
    web_sys::console::warn_1(&JsValue::from_str(&format!("lazytube: {message}")));
}

fn debug(message: &str) {
    web_sys::console::debug_1(&JsValue::from_str(&format!("lazytube: {message}")));
}
