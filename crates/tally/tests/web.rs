//! Browser tests for the DOM host. Run with `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]

use tally::{mount_counter, Counter, CounterConfig, DomMount};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Element, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

fn container() -> Element {
    let document = web_sys::window().unwrap().document().unwrap();
    let div = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&div).unwrap();
    div
}

fn click(el: &Element) {
    el.dyn_ref::<HtmlElement>().unwrap().click();
}

#[wasm_bindgen_test]
fn test_mount_counter_entry_point() {
    let dom = container();
    let config = js_sys::JSON::parse(r#"{"start": 5, "step": 10}"#).unwrap();
    mount_counter(config, &dom).unwrap();

    let button = dom.first_element_child().unwrap();
    let display = button.next_element_sibling().unwrap();
    assert_eq!(button.tag_name(), "BUTTON");
    assert_eq!(button.text_content().unwrap(), "Click me");
    assert_eq!(display.text_content().unwrap(), "5");

    click(&button);
    click(&button);
    assert_eq!(display.text_content().unwrap(), "7");
}

#[wasm_bindgen_test]
fn test_mount_counter_undefined_config() {
    let dom = container();
    mount_counter(JsValue::UNDEFINED, &dom).unwrap();
    let display = dom.last_element_child().unwrap();
    assert_eq!(display.text_content().unwrap(), "0");
}

#[wasm_bindgen_test]
fn test_mount_counter_rejects_bad_config() {
    let dom = container();
    let config = js_sys::JSON::parse(r#"{"start": "x"}"#).unwrap();
    assert!(mount_counter(config, &dom).is_err());
    assert_eq!(dom.child_element_count(), 0);
}

#[wasm_bindgen_test]
fn test_dom_mount_direct() {
    let dom = container();
    let mut host = DomMount::new().unwrap();
    let mut counter = Counter::mount(&CounterConfig::default(), &mut host, &dom).unwrap();
    counter.click(&mut host).unwrap();
    assert_eq!(counter.display().text_content().unwrap(), "1");
}

#[wasm_bindgen_test]
fn test_mount_counter_rejects_unserializable_config() {
    let dom = container();
    let config = js_sys::Object::new();
    js_sys::Reflect::set(&config, &"start".into(), &JsValue::from(3)).unwrap();
    js_sys::Reflect::set(&config, &"self".into(), &config).unwrap();

    assert!(mount_counter(config.into(), &dom).is_err());
    assert_eq!(dom.child_element_count(), 0);
}
