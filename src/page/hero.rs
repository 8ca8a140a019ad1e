//! Hero

use leptos::prelude::*;

use crate::components::{JoinCounter, PowerWord, PurchaseForm, TypewriterText, VideoBackground};
use crate::content::HERO_WORDS;
use crate::context::use_theme;

#[component]
pub fn Hero() -> impl IntoView {
    let theme = use_theme();

    view! {
        <section id="hero" class="hero">
            <VideoBackground />
            <div class="hero-content">
                <h1 class="hero-title">
                    "Are you really "
                    <span class=move || theme.theme.get().pick("text-red fire-text", "text-red pulsate")>
                        <TypewriterText words=&HERO_WORDS />
                    </span>
                </h1>
                <p class="hero-lead">
                    "Discover the 30-Day Protocol to Master Your Sexual Energy, Overcome Premature Ejaculation, and Awaken Your True Masculine "
                    <PowerWord>"POWER"</PowerWord>
                    "."
                </p>
                <JoinCounter />
                <PurchaseForm class="hero-form" />
            </div>
        </section>
    }
}
