//! `window.poetsPage`: a small API for browser automation and tests.
//!
//! Records can only be added through a form submission; the API reads the
//! roster and can trigger that submission, nothing more.

use zoon::wasm_bindgen::closure::Closure;
use zoon::*;

use crate::form::request_submit;
use crate::page::PoetsPage;

const API_NAME: &str = "poetsPage";

pub fn install(page: &PoetsPage) {
    let Some(window) = web_sys::window() else {
        zoon::eprintln!("No window; skipping window.{API_NAME}");
        return;
    };
    let api = js_sys::Object::new();

    // isReady() - always returns true once the API is set up
    let is_ready = Closure::wrap(Box::new(|| true) as Box<dyn Fn() -> bool>);
    set_property(&api, "isReady", is_ready.as_ref());
    is_ready.forget();

    let record_count = Closure::wrap(Box::new({
        let page = page.clone();
        move || page.read(|app| app.roster().len() as u32)
    }) as Box<dyn Fn() -> u32>);
    set_property(&api, "recordCount", record_count.as_ref());
    record_count.forget();

    // records() - roster as a JSON array
    let records = Closure::wrap(Box::new({
        let page = page.clone();
        move || {
            page.read(|app| {
                serde_json::to_string(app.roster().as_slice()).unwrap_or_else(|error| {
                    zoon::eprintln!("Failed to encode records: {error}");
                    "[]".to_string()
                })
            })
        }
    }) as Box<dyn Fn() -> String>);
    set_property(&api, "records", records.as_ref());
    records.forget();

    let submit = Closure::wrap(Box::new(request_submit) as Box<dyn Fn()>);
    set_property(&api, "submit", submit.as_ref());
    submit.forget();

    set_property(&window, API_NAME, &api);
}

fn set_property(target: &wasm_bindgen::JsValue, name: &str, value: &wasm_bindgen::JsValue) {
    if let Err(error) = js_sys::Reflect::set(target, &name.into(), value) {
        zoon::eprintln!("Failed to set '{name}' on window.{API_NAME}: {error:?}");
    }
}
