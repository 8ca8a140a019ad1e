//! Header
//!
//! Sticky navigation with a collapsible menu for narrow screens.

use leptos::prelude::*;

use super::NAV_LINKS;
use crate::context::{use_config, use_cursor, use_theme};

#[component]
pub fn Header() -> impl IntoView {
    let config = use_config();
    let theme = use_theme();
    let cursor = use_cursor();
    let (menu_open, set_menu_open) = signal(false);

    view! {
        <header class="site-header">
            <div class="header-inner">
                <a class="brand" href="#hero">
                    <span class="brand-flame">"🔥"</span>
                    <span class=move || theme.theme.get().pick("brand-name fire-text", "brand-name")>"MASCULINE ENERGY"</span>
                    <span class="brand-offer glow-text">"🔥 Limited-Time Offer!"</span>
                </a>
                <nav class="nav-desktop">
                    {NAV_LINKS.iter().map(|(href, label)| view! { <a href=*href>{*label}</a> }).collect_view()}
                </nav>
                <a
                    href="#offer"
                    class=move || theme.theme.get().pick("btn btn-buy fire-button header-buy", "btn btn-buy btn-red header-buy")
                    on:mouseenter=move |_| cursor.set_hovering(true)
                    on:mouseleave=move |_| cursor.set_hovering(false)
                >
                    {format!("Buy Now – {}", config.display_price)}
                </a>
                <button class="menu-toggle" aria-label="Menu" on:click=move |_| set_menu_open.update(|open| *open = !*open)>
                    "☰"
                </button>
            </div>
            <nav id="mobile-menu" class="nav-mobile" class:hidden=move || !menu_open.get()>
                <a href="#hero" on:click=move |_| set_menu_open.set(false)>"Home"</a>
                {NAV_LINKS.iter().map(|(href, label)| view! {
                    <a href=*href on:click=move |_| set_menu_open.set(false)>{*label}</a>
                }).collect_view()}
            </nav>
        </header>
    }
}
