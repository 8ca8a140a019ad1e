//! Flame Cursor Component
//!
//! Particles trail the pointer while it hovers a buy button.

use std::ops::ControlFlow;

use leptos::prelude::*;
use leptos_observe::{bind_to_owner, listen_window, use_ticker};

use crate::context::use_cursor;
use crate::particles::{FlameField, SPAWN_INTERVAL_MS};

#[component]
pub fn FlameCursor() -> impl IntoView {
    let cursor = use_cursor();
    let (field, set_field) = signal(FlameField::default());
    let pointer = StoredValue::new((0.0_f64, 0.0_f64));

    match listen_window("mousemove", move |ev: web_sys::MouseEvent| {
        pointer.set_value((ev.client_x() as f64, ev.client_y() as f64));
    }) {
        Ok(listener) => bind_to_owner(listener),
        Err(e) => log::warn!("[FLAME] pointer listener: {}", e),
    }

    // Leaving a buy button clears the trail
    Effect::new(move |_| {
        if !cursor.hovering_buy.get() {
            set_field.update(|f| f.clear());
        }
    });

    use_ticker(SPAWN_INTERVAL_MS, move || {
        let now = js_sys::Date::now();
        let hovering = cursor.hovering_buy.get_untracked();
        if !hovering && field.with_untracked(|f| f.particles().is_empty()) {
            return ControlFlow::Continue(());
        }
        set_field.update(|f| {
            f.expire(now);
            if hovering {
                let (x, y) = pointer.get_value();
                f.spawn(x, y, js_sys::Math::random(), js_sys::Math::random(), now);
            }
        });
        ControlFlow::Continue(())
    });

    view! {
        <div class="flame-layer">
            <For
                each=move || field.get().particles().to_vec()
                key=|p| p.id
                children=|p| view! {
                    <div class="flame-particle" style:left=format!("{}px", p.x) style:top=format!("{}px", p.y)></div>
                }
            />
        </div>
    }
}
