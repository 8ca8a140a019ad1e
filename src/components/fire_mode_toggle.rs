//! Fire Mode Toggle Component

use leptos::prelude::*;

use crate::context::use_theme;

#[component]
pub fn FireModeToggle() -> impl IntoView {
    let theme = use_theme();

    view! {
        <button
            class=move || theme.theme.get().pick("fire-toggle active", "fire-toggle")
            title="Toggle Fire Mode"
            on:click=move |_| {
                theme.toggle();
                log::info!("[THEME] fire mode: {}", theme.theme.get_untracked().fire_mode);
            }
        >
            "🔥"
        </button>
    }
}
