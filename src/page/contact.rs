//! Contact Support

use leptos::prelude::*;

use super::SectionTitle;
use crate::components::{ContactForm, Reveal};
use crate::context::use_config;

#[component]
pub fn Contact() -> impl IntoView {
    let config = use_config();

    view! {
        <Reveal id="contact" class="section section-dark">
            <SectionTitle lead="Contact" accent="Support" centered=true />
            <div class="two-column">
                <div>
                    <h3>"Get in Touch"</h3>
                    <p>"Have questions about the protocol or need support on your journey? Our team is here to help."</p>
                    <p class="contact-email">"✉ "{config.support_email.clone()}</p>
                    <p class="contact-note">"We typically respond within 24 hours."</p>
                </div>
                <ContactForm />
            </div>
        </Reveal>
    }
}
