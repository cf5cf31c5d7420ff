// Browser-only smoke tests for the sentinel observer; run with wasm-pack.
#![cfg(target_arch = "wasm32")]

use frontend::observer::SentinelObserver;
use wasm_bindgen_test::*;
use yew::Callback;

wasm_bindgen_test_configure!(run_in_browser);

fn attached_div() -> web_sys::Element {
    let document = web_sys::window().unwrap().document().unwrap();
    let target = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&target).unwrap();
    target
}

#[wasm_bindgen_test]
fn sentinel_observer_attaches_and_detaches() {
    let target = attached_div();
    let observer = SentinelObserver::new(Callback::from(|_| ())).unwrap();
    observer.observe(&target);
    observer.disconnect();
}

#[wasm_bindgen_test]
fn dropping_the_observer_disconnects() {
    let target = attached_div();
    let observer = SentinelObserver::new(Callback::from(|_| ())).unwrap();
    observer.observe(&target);
    drop(observer);
}
