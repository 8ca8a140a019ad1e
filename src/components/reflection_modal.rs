//! Reflection Modal Component
//!
//! Asks a random reflection question after a full window of inactivity.

use std::ops::ControlFlow;

use leptos::prelude::*;
use leptos_observe::{bind_to_owner, listen_window, use_ticker};

use crate::content::REFLECTION_PROMPTS;
use crate::context::use_config;
use crate::triggers::{pick_index, InactivityTracker, ACTIVITY_EVENTS};

#[component]
pub fn ReflectionModal() -> impl IntoView {
    let config = use_config();
    let tracker = StoredValue::new(InactivityTracker::default());
    let (prompt, set_prompt) = signal(None::<&'static str>);

    for event in ACTIVITY_EVENTS {
        match listen_window::<web_sys::Event, _>(event, move |_| tracker.update_value(|t| t.record_activity())) {
            Ok(listener) => bind_to_owner(listener),
            Err(e) => log::warn!("[REFLECT] {} listener: {}", event, e),
        }
    }

    use_ticker(config.reflection_delay_ms, move || {
        let mut idle = false;
        tracker.update_value(|t| idle = t.window_elapsed());
        if idle && prompt.get_untracked().is_none() {
            let picked = REFLECTION_PROMPTS[pick_index(js_sys::Math::random(), REFLECTION_PROMPTS.len())];
            log::debug!("[REFLECT] idle, asking: {}", picked);
            set_prompt.set(Some(picked));
        }
        ControlFlow::Continue(())
    });

    let close = move |_: web_sys::MouseEvent| set_prompt.set(None);

    view! {
        <div class=move || if prompt.get().is_some() { "modal-backdrop open" } else { "modal-backdrop" } on:click=close>
            <div class="modal reflection-modal" on:click=|ev| ev.stop_propagation()>
                <button class="modal-close" on:click=close>"×"</button>
                <h3>"Masculine Reflection"</h3>
                <p class="reflection-prompt">{move || prompt.get().unwrap_or_default()}</p>
                <button class="btn btn-outline" on:click=close>"Reflect Later"</button>
            </div>
        </div>
    }
}
