use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry};
use yew::Callback;

/// Watches the sentinel element at the end of the visible match list and
/// reports every time it crosses into the viewport (zero-margin threshold).
///
/// The browser observer and its callback closure live exactly as long as
/// this value: dropping it disconnects the observer, so a torn-down
/// component can no longer be signalled.
pub struct SentinelObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array)>,
}

impl SentinelObserver {
    pub fn new(on_enter: Callback<()>) -> Result<Self, JsValue> {
        let callback = Closure::wrap(Box::new(move |entries: js_sys::Array| {
            let entered = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .any(|entry| entry.is_intersecting());
            if entered {
                on_enter.emit(());
            }
        }) as Box<dyn FnMut(js_sys::Array)>);

        let observer = IntersectionObserver::new(callback.as_ref().unchecked_ref())?;

        Ok(Self {
            observer,
            _callback: callback,
        })
    }

    /// Starts observing the sentinel. The element must be attached to the
    /// document, which is why arming happens only after the first render of
    /// the loaded dashboard.
    pub fn observe(&self, target: &Element) {
        self.observer.observe(target);
    }

    pub fn disconnect(&self) {
        self.observer.disconnect();
    }
}

impl Drop for SentinelObserver {
    fn drop(&mut self) {
        self.disconnect();
    }
}
