//! Real Results

use leptos::prelude::*;

use super::SectionTitle;
use crate::components::{PowerWord, Reveal, Soundboard, TestimonialCarousel};
use crate::context::use_theme;

#[component]
fn ResultCard(name: &'static str, age: u8, avatar: &'static str, children: Children) -> impl IntoView {
    let theme = use_theme();
    view! {
        <div class=move || theme.theme.get().pick("result-card fire-card", "result-card card")>
            <div class="stars">"★★★★★"</div>
            <p class="result-quote">{children()}</p>
            <div class="result-author">
                <img class="avatar" src=avatar alt=name width="48" height="48" />
                <div>
                    <p class="author-name">{name}</p>
                    <p class="author-age">{format!("Age {}", age)}</p>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn Testimonials() -> impl IntoView {
    view! {
        <Reveal id="testimonials" class="section section-dark">
            <SectionTitle lead="Real" accent="Results" centered=true />
            <div class="result-grid">
                <ResultCard name="Daniel" age=28 avatar="https://images.unsplash.com/photo-1500648767791-00dcc994a43e">
                    "\"After struggling with premature ejaculation for years, I was skeptical that a program could help. By week 2, I noticed a massive difference in my control. The breathwork techniques alone were worth the investment. Now I last as long as I want, and the confidence has spilled over into every area of my life.\""
                </ResultCard>
                <ResultCard name="Amir" age=34 avatar="https://images.unsplash.com/photo-1544005313-94ddf0286df2">
                    "\"The protocol rewired my brain. It's not just about sex, it's about "
                    <PowerWord>"POWER"</PowerWord>
                    ". I've been practicing semen retention for 45 days now, and my energy, focus, and drive are through the roof. My business is thriving, my workouts are more intense, and women respond to me differently. This is the real deal.\""
                </ResultCard>
                <ResultCard name="Jack" age=25 avatar="https://images.unsplash.com/photo-1527980965255-d3b416303d12">
                    "\"She noticed the change before I did. Three weeks into the protocol, my girlfriend commented on how much more present and confident I seemed. What surprised me most was how this practice affected my overall energy and motivation. I'm more focused at work and have started pursuing goals I'd put off for years.\""
                </ResultCard>
            </div>
            <TestimonialCarousel />
            <Soundboard />
        </Reveal>
    }
}
