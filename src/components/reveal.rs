//! Reveal Component
//!
//! Section wrapper that fades in the first time 30% of it is in view.

use leptos::html;
use leptos::prelude::*;
use leptos_observe::{bind_to_owner, observe_once};

const THRESHOLD: f64 = 0.3;

#[component]
pub fn Reveal(
    /// Anchor id for in-page navigation
    #[prop(optional)]
    id: &'static str,
    #[prop(optional)] class: &'static str,
    children: Children,
) -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let (visible, set_visible) = signal(false);

    Effect::new(move |_| {
        let Some(section) = section_ref.get() else { return };
        match observe_once(&section, THRESHOLD, move || set_visible.set(true)) {
            Ok(observer) => bind_to_owner(observer),
            Err(e) => {
                log::warn!("[REVEAL] observer: {}", e);
                set_visible.set(true);
            }
        }
    });

    view! {
        <section
            id=(!id.is_empty()).then_some(id)
            node_ref=section_ref
            class=move || format!("reveal {}{}", class, if visible.get() { " visible" } else { "" })
        >
            {children()}
        </section>
    }
}
