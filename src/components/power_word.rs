//! Power Word Component
//!
//! Inline emphasis that shakes the page once, the first time it is at
//! least half visible.

use std::time::Duration;

use leptos::html;
use leptos::prelude::*;
use leptos_observe::{bind_to_owner, observe_once};

const SHAKE_CLASS: &str = "shake-effect";
const SHAKE_MS: u64 = 500;
const THRESHOLD: f64 = 0.5;

fn shake_body() {
    let Some(body) = document().body() else { return };
    if let Err(e) = body.class_list().add_1(SHAKE_CLASS) {
        log::warn!("[POWER] failed to shake: {:?}", e);
        return;
    }
    set_timeout(
        move || {
            let _ = body.class_list().remove_1(SHAKE_CLASS);
        },
        Duration::from_millis(SHAKE_MS),
    );
}

#[component]
pub fn PowerWord(children: Children) -> impl IntoView {
    let span_ref = NodeRef::<html::Span>::new();

    Effect::new(move |_| {
        let Some(span) = span_ref.get() else { return };
        match observe_once(&span, THRESHOLD, shake_body) {
            Ok(observer) => bind_to_owner(observer),
            Err(e) => log::warn!("[POWER] observer: {}", e),
        }
    });

    view! {
        <span class="power-word" node_ref=span_ref>{children()}</span>
    }
}
