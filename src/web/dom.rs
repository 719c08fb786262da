use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

pub(super) fn window() -> Result<web_sys::Window, String> {
    web_sys::window().ok_or("no window".to_string())
}

pub(super) fn document() -> Result<web_sys::Document, String> {
    window()?.document().ok_or("no document".to_string())
}

/// Wrap an image's `load`/`error` events into a promise so a slot's
/// activation future can await the outcome. Register before setting `src`.
pub(super) fn image_load_promise(image: &web_sys::HtmlImageElement) -> js_sys::Promise {
    js_sys::Promise::new(&mut |resolve, reject| {
        let on_load = Closure::wrap(Box::new(move |_ev: web_sys::Event| {
            let _ = resolve.call0(&JsValue::UNDEFINED);
        }) as Box<dyn FnMut(_)>);
        let _ = image.add_event_listener_with_callback("load", on_load.as_ref().unchecked_ref());
        on_load.forget();

        let on_error = Closure::wrap(Box::new(move |_ev: web_sys::Event| {
            let _ = reject.call1(&JsValue::UNDEFINED, &JsValue::from_str("image: load error"));
        }) as Box<dyn FnMut(_)>);
        let _ = image.add_event_listener_with_callback("error", on_error.as_ref().unchecked_ref());
        on_error.forget();
    })
}
