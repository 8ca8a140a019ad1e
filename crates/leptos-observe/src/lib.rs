//! Leptos Observe Utilities
//!
//! Browser plumbing for self-updating widgets: cancellable tickers, DOM
//! listeners, one-shot visibility observers and web storage access.
//! Everything registered here is torn down together with the component
//! that created it.

mod listener;
mod storage;
mod task;
mod visibility;

pub use listener::{listen, listen_document, listen_window, Listener};
pub use storage::{local_storage, read_key, session_storage, write_key};
pub use task::{spawn_delayed, spawn_ticker, use_cancel_token, use_ticker, CancelToken};
pub use visibility::{observe_once, VisibilityObserver};

use leptos::prelude::*;

/// Keep `value` alive until the current reactive owner is cleaned up.
///
/// Used for handles that own JS closures (listeners, observers) and clean up
/// in their `Drop` impl.
pub fn bind_to_owner<T: 'static>(value: T) {
    let _ = StoredValue::new_local(value);
}

/// Format a JS exception for logging
pub fn js_err(err: wasm_bindgen::JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}
