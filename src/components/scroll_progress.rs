//! Scroll Progress Component
//!
//! Sticky bar showing how much of a section has been read.

use leptos::prelude::*;
use leptos_observe::{bind_to_owner, listen_window};

use crate::scroll::section_progress;

fn measure(section_id: &str) -> Option<f64> {
    let section = document().get_element_by_id(section_id)?;
    let viewport = window().inner_height().ok()?.as_f64()?;
    let rect = section.get_bounding_client_rect();
    Some(section_progress(rect.top(), rect.height(), viewport))
}

#[component]
pub fn ScrollProgress(
    /// Id of the section being tracked
    section_id: &'static str,
) -> impl IntoView {
    let (percent, set_percent) = signal(0.0_f64);
    let update = move || {
        if let Some(p) = measure(section_id) {
            set_percent.set(p);
        }
    };

    Effect::new(move |_| {
        update();
        match listen_window::<web_sys::Event, _>("scroll", move |_| update()) {
            Ok(listener) => bind_to_owner(listener),
            Err(e) => log::warn!("[SCROLL] listener: {}", e),
        }
    });

    view! {
        <div class="scroll-progress">
            <div class="scroll-progress-bar" style:width=move || format!("{:.1}%", percent.get())></div>
        </div>
    }
}
