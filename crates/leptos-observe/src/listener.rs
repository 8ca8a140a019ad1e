//! DOM event listeners removed on drop.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::js_err;

/// A registered event listener. Dropping it removes the listener.
pub struct Listener {
    target: web_sys::EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(web_sys::Event)>,
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

/// Listen for `event` on `target`, casting each event to `E`
pub fn listen<E, F>(target: &web_sys::EventTarget, event: &'static str, mut handler: F) -> Result<Listener, String>
where
    E: JsCast,
    F: FnMut(E) + 'static,
{
    let callback = Closure::<dyn FnMut(web_sys::Event)>::new(move |ev: web_sys::Event| {
        handler(ev.unchecked_into::<E>());
    });
    target
        .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
        .map_err(js_err)?;
    Ok(Listener {
        target: target.clone(),
        event,
        callback,
    })
}

/// Listen on `window`
pub fn listen_window<E, F>(event: &'static str, handler: F) -> Result<Listener, String>
where
    E: JsCast,
    F: FnMut(E) + 'static,
{
    let win = web_sys::window().ok_or("no window")?;
    listen(win.as_ref(), event, handler)
}

/// Listen on `document`
pub fn listen_document<E, F>(event: &'static str, handler: F) -> Result<Listener, String>
where
    E: JsCast,
    F: FnMut(E) + 'static,
{
    let doc = web_sys::window()
        .and_then(|win| win.document())
        .ok_or("no document")?;
    listen(doc.as_ref(), event, handler)
}
