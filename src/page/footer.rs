//! Footer
//!
//! Site links plus the floating back-to-top and chat buttons.

use chrono::{Datelike, Local};
use leptos::prelude::*;

use crate::context::{use_config, use_theme};

static FOOTER_LINKS: [(&str, &str); 5] = [
    ("#", "Home"),
    ("#articles", "Articles"),
    ("#brotherhood", "Brotherhood"),
    ("#protocol", "Protocol"),
    ("#contact", "Contact"),
];

#[component]
pub fn Footer() -> impl IntoView {
    let config = use_config();
    let theme = use_theme();
    let year = Local::now().year();

    view! {
        <footer class="site-footer">
            <div class="footer-inner">
                <div class="brand">
                    <span class="brand-flame">"🔥"</span>
                    <span class=move || theme.theme.get().pick("brand-name fire-text", "brand-name")>"MASCULINE ENERGY"</span>
                </div>
                <nav class="footer-nav">
                    {FOOTER_LINKS.iter().map(|(href, label)| view! { <a href=*href>{*label}</a> }).collect_view()}
                </nav>
                <div class="copyright">{format!("© {} Masculine Energy Academy", year)}</div>
            </div>
        </footer>
        <a class="back-to-top" href="#hero" aria-label="Back to top">"↑"</a>
        <a class="whatsapp-chat" href=config.whatsapp_url.clone() target="_blank">"Chat with us 💬"</a>
    }
}
