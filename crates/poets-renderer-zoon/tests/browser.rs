//! In-browser test of the rendered page.
//!
//! Run with `wasm-pack test --headless --firefox crates/poets-renderer-zoon`.

#![cfg(target_arch = "wasm32")]

use poets_renderer_zoon::dom::element_by_id;
use poets_renderer_zoon::form::request_submit;
use poets_renderer_zoon::zoon::wasm_bindgen::JsCast;
use poets_renderer_zoon::zoon::*;
use poets_renderer_zoon::{MOUNT_ID, PageConfig, PoetsPage};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

async fn settle() {
    Timer::sleep(50).await;
}

fn input(id: &str) -> web_sys::HtmlInputElement {
    element_by_id(id).unwrap_or_else(|| panic!("no input '#{id}'"))
}

fn type_into(id: &str, text: &str) {
    let input = input(id);
    input.set_value(text);
    let event = web_sys::Event::new("input").unwrap();
    input.dispatch_event(&event).unwrap();
}

fn click_toggle() {
    let checkbox = input("masodik");
    checkbox.set_checked(!checkbox.checked());
    let event = web_sys::Event::new("change").unwrap();
    checkbox.dispatch_event(&event).unwrap();
}

fn text_of(id: &str) -> String {
    document()
        .get_element_by_id(id)
        .and_then(|element| element.text_content())
        .unwrap_or_default()
}

fn body_row_count() -> u32 {
    document()
        .get_element_by_id("tbody")
        .map(|tbody| tbody.child_element_count())
        .unwrap_or(0)
}

#[wasm_bindgen_test]
async fn submit_cycle_in_the_browser() {
    let mount = document().create_element("div").unwrap();
    mount.set_id(MOUNT_ID);
    document()
        .body()
        .unwrap()
        .append_child(&mount)
        .unwrap();
    start_app(MOUNT_ID, || PoetsPage::new(PageConfig::default()));
    settle().await;

    // Initial state: empty body, disabled second love.
    assert_eq!(body_row_count(), 0);
    assert!(input("szerelem2").disabled());

    // Empty name is rejected with its message and marker.
    type_into("korszak", "X");
    type_into("szerelem1", "Y");
    request_submit();
    settle().await;
    assert_eq!(text_of("nev-error"), "Kérem adja meg a költő nevét!");
    assert_eq!(
        document().get_element_by_id("nev-error").unwrap().class_name(),
        "error"
    );
    assert_eq!(text_of("korszak-error"), "");
    assert_eq!(body_row_count(), 0);

    // One love: the love cell spans two columns.
    type_into("kolto_nev", "Petőfi");
    type_into("korszak", "Romantic");
    type_into("szerelem1", "Júlia");
    request_submit();
    settle().await;
    assert_eq!(body_row_count(), 1);
    let cell = document().get_element_by_id("0-szerelem1").unwrap();
    assert_eq!(cell.get_attribute("colspan").as_deref(), Some("2"));
    assert_eq!(text_of("nev-error"), "");
    assert_eq!(input("kolto_nev").value(), "");

    // Two loves.
    type_into("kolto_nev", "Ady");
    type_into("korszak", "Nyugat");
    type_into("szerelem1", "Léda");
    click_toggle();
    settle().await;
    assert!(!input("szerelem2").disabled());
    type_into("szerelem2", "Csinszka");
    request_submit();
    settle().await;
    assert_eq!(body_row_count(), 2);
    let row = document().get_element_by_id("thead-tr-1").unwrap();
    assert_eq!(row.child_element_count(), 4);
    assert!(input("szerelem2").disabled());
    assert!(!input("masodik").checked());

    // The automation hook sees both records.
    let api = js_sys::Reflect::get(&web_sys::window().unwrap(), &"poetsPage".into()).unwrap();
    let count = js_sys::Reflect::get(&api, &"recordCount".into()).unwrap();
    let count = count
        .dyn_into::<js_sys::Function>()
        .unwrap()
        .call0(&api)
        .unwrap();
    assert_eq!(count.as_f64(), Some(2.0));
}
