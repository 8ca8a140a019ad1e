//! Landing Page
//!
//! One long scrolling page; each section lives in its own module.

mod about;
mod articles;
mod brotherhood;
mod contact;
mod footer;
mod header;
mod hero;
mod offer;
mod protocol;
mod testimonials;

use leptos::prelude::*;

use crate::context::use_theme;

pub use about::About;
pub use articles::Articles;
pub use brotherhood::Brotherhood;
pub use contact::Contact;
pub use footer::Footer;
pub use header::Header;
pub use hero::Hero;
pub use offer::Offer;
pub use protocol::Protocol;
pub use testimonials::Testimonials;

/// In-page navigation targets, in page order
pub static NAV_LINKS: [(&str, &str); 6] = [
    ("#about", "About"),
    ("#protocol", "Protocol"),
    ("#testimonials", "Testimonials"),
    ("#articles", "Articles"),
    ("#brotherhood", "Brotherhood"),
    ("#contact", "Contact"),
];

/// Section heading with the accent word highlighted
#[component]
pub fn SectionTitle(
    lead: &'static str,
    accent: &'static str,
    #[prop(optional)] tail: &'static str,
    #[prop(optional)] centered: bool,
) -> impl IntoView {
    let theme = use_theme();
    let class = move || {
        let mut class = String::from("section-title");
        if centered {
            class.push_str(" centered");
        }
        if theme.fire_mode() {
            class.push_str(" fire-text");
        }
        class
    };
    view! {
        <h2 class=class>
            {lead}" "<span class="text-red">{accent}</span>{tail}
        </h2>
    }
}

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <Header />
        <main class="page">
            <div class="scarcity-banner">"🚨 Only 3 spots left for this month! Join now."</div>
            <Hero />
            <About />
            <Protocol />
            <Testimonials />
            <Articles />
            <Brotherhood />
            <Offer />
            <Contact />
        </main>
        <Footer />
    }
}
