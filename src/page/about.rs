//! About the Program

use leptos::prelude::*;

use super::SectionTitle;
use crate::components::{PowerWord, Reveal};
use crate::context::use_theme;

static INCLUDED: [(&str, &str, &str); 4] = [
    (
        "🔥",
        "Breathwork & body awareness",
        "Ancient breathing techniques that instantly shift your energy state and build control over your arousal response. These practices alone have helped thousands of men overcome premature ejaculation.",
    ),
    (
        "🛡",
        "Semen retention training",
        "Learn the practice that high-performers throughout history have used to fuel their greatest achievements. Harness your vital energy for greater purpose instead of wasting it.",
    ),
    (
        "🔒",
        "Pelvic floor strength exercises",
        "Develop the physical foundation of sexual control through targeted exercises that strengthen the muscles responsible for ejaculatory control and sexual stamina.",
    ),
    (
        "➜",
        "Energy redirection into confidence and purpose",
        "Specific techniques to transmute sexual energy into confidence, focus, and drive. This is where the real transformation happens, turning frustration into fuel for your life's purpose.",
    ),
];

#[component]
pub fn About() -> impl IntoView {
    let theme = use_theme();

    view! {
        <Reveal id="about" class="section section-dark">
            <div class="two-column">
                <div>
                    <SectionTitle lead="About the" accent="Program" />
                    <p>
                        "Masculine Energy Academy is built on ancient wisdom that has been forgotten in our modern world. We believe that a man's sexual energy is his most powerful creative force when properly harnessed and redirected."
                    </p>
                    <p>
                        "Through disciplined breathwork, pelvic floor training, and conscious energy management, men can transform frustration into focus, anxiety into "
                        <PowerWord>"POWER"</PowerWord>
                        ", and weakness into strength."
                    </p>
                    <p>
                        "Our 30-day protocol combines Eastern practices of energy cultivation with modern neuroscience to help you break free from the cycle of energy depletion and reclaim your masculine essence."
                    </p>
                </div>
                <img
                    class="section-image"
                    src="https://images.unsplash.com/photo-1506126613408-eca07ce68773"
                    alt="Calm man meditating at sunrise on a cliff, peaceful and focused, energy mastery vibe"
                />
            </div>
            <div class=move || theme.theme.get().pick("included fire-card", "included card")>
                <h3>"What's Included:"</h3>
                <ul>
                    {INCLUDED.iter().map(|(icon, title, body)| view! {
                        <li>
                            <span class="included-icon">{*icon}</span>
                            <div>
                                <span class="included-title">{*title}</span>
                                <span class="included-body">{*body}</span>
                            </div>
                        </li>
                    }).collect_view()}
                </ul>
            </div>
        </Reveal>
    }
}
