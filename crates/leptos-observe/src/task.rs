//! Cancellable local tasks.

use std::ops::ControlFlow;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;

/// Cancellation flag shared between a component and the tasks it spawned.
///
/// Tasks check the flag each time they wake up and exit once it is set.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Token that is cancelled when the current owner is cleaned up (unmount)
pub fn use_cancel_token() -> CancelToken {
    let token = CancelToken::new();
    let on_unmount = token.clone();
    on_cleanup(move || on_unmount.cancel());
    token
}

/// Call `tick` every `period_ms` until it breaks or `token` is cancelled.
///
/// The first call happens one period after spawning.
pub fn spawn_ticker<F>(token: CancelToken, period_ms: u32, mut tick: F)
where
    F: FnMut() -> ControlFlow<()> + 'static,
{
    wasm_bindgen_futures::spawn_local(async move {
        loop {
            TimeoutFuture::new(period_ms).await;
            if token.is_cancelled() {
                break;
            }
            if tick().is_break() {
                break;
            }
        }
    });
}

/// Ticker owned by the current component.
///
/// Returns the token so the caller can also stop the ticker early.
pub fn use_ticker<F>(period_ms: u32, tick: F) -> CancelToken
where
    F: FnMut() -> ControlFlow<()> + 'static,
{
    let token = use_cancel_token();
    spawn_ticker(token.clone(), period_ms, tick);
    token
}

/// Run `f` once after `delay_ms` unless `token` was cancelled meanwhile
pub fn spawn_delayed<F>(token: CancelToken, delay_ms: u32, f: F)
where
    F: FnOnce() + 'static,
{
    wasm_bindgen_futures::spawn_local(async move {
        TimeoutFuture::new(delay_ms).await;
        if !token.is_cancelled() {
            f();
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_cancel_is_shared() {
        let token = CancelToken::new();
        let clone = token.clone();
        assert!(!clone.is_cancelled());
        token.cancel();
        assert!(clone.is_cancelled());
    }
}
