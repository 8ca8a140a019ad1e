//! Exit Intent Modal Component
//!
//! Shown once per browser session when the pointer leaves through the top
//! edge of the page.

use leptos::prelude::*;
use leptos_observe::{bind_to_owner, listen_document, read_key, session_storage, write_key};
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

use crate::context::use_theme;
use crate::triggers::{ExitIntent, EXIT_INTENT_KEY};

const PROTOCOL_ANCHOR: &str = "protocol";

fn restore() -> ExitIntent {
    let stored = session_storage().and_then(|s| read_key(&s, EXIT_INTENT_KEY));
    match stored {
        Ok(value) => ExitIntent::restore(value.as_deref()),
        Err(e) => {
            log::warn!("[EXIT] cannot read session flag: {}", e);
            ExitIntent::default()
        }
    }
}

fn remember() {
    if let Err(e) = session_storage().and_then(|s| write_key(&s, EXIT_INTENT_KEY, "true")) {
        log::warn!("[EXIT] cannot persist session flag: {}", e);
    }
}

fn scroll_to_protocol() {
    let Some(section) = document().get_element_by_id(PROTOCOL_ANCHOR) else { return };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    section.scroll_into_view_with_scroll_into_view_options(&options);
}

#[component]
pub fn ExitIntentModal() -> impl IntoView {
    let theme = use_theme();
    let intent = StoredValue::new(restore());
    let (open, set_open) = signal(false);

    match listen_document("mouseleave", move |ev: web_sys::MouseEvent| {
        let mut fired = false;
        intent.update_value(|i| fired = i.on_pointer_leave(ev.client_y()));
        if fired {
            log::info!("[EXIT] exit intent detected");
            remember();
            set_open.set(true);
        }
    }) {
        Ok(listener) => bind_to_owner(listener),
        Err(e) => log::warn!("[EXIT] listener: {}", e),
    }

    let close = move |_: web_sys::MouseEvent| set_open.set(false);
    let stay = move |_: web_sys::MouseEvent| {
        set_open.set(false);
        scroll_to_protocol();
    };

    view! {
        <div class=move || if open.get() { "modal-backdrop open" } else { "modal-backdrop" }>
            <div class=move || theme.theme.get().pick("modal exit-modal fire-card", "modal exit-modal")>
                <button class="modal-close" aria-label="Close" on:click=close>"×"</button>
                <h3 class=move || theme.theme.get().pick("fire-text", "text-red")>
                    "Are you walking away from your power again?"
                </h3>
                <p>
                    "Most men never take the step to reclaim their masculine energy. They stay trapped in patterns of weakness and frustration."
                </p>
                <button class=move || theme.theme.get().pick("btn fire-button", "btn btn-red") on:click=stay>
                    "No. I'm Ready."
                </button>
                <p class="modal-footnote">"Your journey to masculine power is one decision away."</p>
            </div>
        </div>
    }
}
