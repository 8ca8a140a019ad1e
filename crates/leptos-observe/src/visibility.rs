//! One-shot visibility observation.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

use crate::js_err;

/// Intersection observer watching a single element. Disconnects on drop.
pub struct VisibilityObserver {
    observer: web_sys::IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>,
}

impl Drop for VisibilityObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Call `on_visible` the first time at least `threshold` (0.0..=1.0) of
/// `element` is in the viewport, then stop observing it.
pub fn observe_once<F>(element: &web_sys::Element, threshold: f64, on_visible: F) -> Result<VisibilityObserver, String>
where
    F: FnOnce() + 'static,
{
    let mut pending = Some(on_visible);
    let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
            for entry in entries.iter() {
                let entry: web_sys::IntersectionObserverEntry = entry.unchecked_into();
                if !entry.is_intersecting() {
                    continue;
                }
                observer.unobserve(&entry.target());
                if let Some(f) = pending.take() {
                    f();
                }
            }
        },
    );

    let options = web_sys::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    let observer = web_sys::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
        .map_err(js_err)?;
    observer.observe(element);

    Ok(VisibilityObserver {
        observer,
        _callback: callback,
    })
}
