//! Weekly Articles

use leptos::prelude::*;

use super::SectionTitle;
use crate::components::{PowerWord, Reveal};
use crate::context::use_theme;

#[component]
fn ArticleCard(
    image: &'static str,
    alt: &'static str,
    title: &'static str,
    /// Title ends with a power word
    #[prop(optional)]
    power: bool,
    children: Children,
) -> impl IntoView {
    let theme = use_theme();
    view! {
        <article class=move || theme.theme.get().pick("article-card fire-card", "article-card card")>
            <img class="article-image" src=image alt=alt />
            <div class="article-body">
                <h3 class=move || theme.theme.get().pick("fire-text", "")>{title}{power.then(|| view! { " "<PowerWord>"POWER"</PowerWord> })}</h3>
                {children()}
                <a class="read-more" href="#">"Read more ›"</a>
            </div>
        </article>
    }
}

#[component]
pub fn Articles() -> impl IntoView {
    view! {
        <Reveal id="articles" class="section">
            <SectionTitle lead="Weekly" accent="Articles" centered=true />
            <div class="article-grid">
                <ArticleCard
                    image="https://images.unsplash.com/photo-1506126613408-eca07ce68773"
                    alt="Man doing breathing meditation with energy particles around his body, symbolic of control"
                    title="Why Semen Retention is the Key to Your Masculine"
                    power=true
                >
                    <p>
                        "Throughout history, warriors, artists, and leaders have practiced semen retention to fuel their greatest achievements. From ancient Taoist masters to modern athletes, the practice of conserving sexual energy has been a closely guarded secret of high performers."
                    </p>
                    <p>
                        "This article explores the science behind semen retention, including the neurochemical changes that occur when you retain your vital essence. We'll examine how testosterone levels, dopamine sensitivity, and focus are all affected by this practice."
                    </p>
                </ArticleCard>
                <ArticleCard
                    image="https://images.unsplash.com/photo-1618085220188-b4f210d22703"
                    alt="Man with serious expression looking in the mirror, personal transformation theme"
                    title="From Frustration to Focus: The Sexual Shift That Changed My Life"
                >
                    <p>
                        "\"Six months ago, I was trapped in a cycle of sexual frustration, low energy, and diminished confidence. My relationships suffered, my work performance declined, and I felt like a shadow of the man I wanted to be. Then I discovered the ancient practice of sexual energy transmutation.\""
                    </p>
                    <p>
                        "This personal account details one man's journey from sexual frustration to mastery, and how redirecting his sexual energy transformed every aspect of his existence, from his career to his relationships to his sense of purpose."
                    </p>
                </ArticleCard>
                <ArticleCard
                    image="https://images.unsplash.com/photo-1519058082700-08a0b56da9b4"
                    alt="Man walking confidently in urban setting wearing dark clothes, masculine energy"
                    title="Reclaiming Your Edge in the Modern World"
                >
                    <p>
                        "The modern world is designed to drain your masculine energy. From constant digital stimulation to environmental factors that lower testosterone, today's man faces unprecedented challenges to his vitality and focus."
                    </p>
                    <p>
                        "This article provides practical strategies for maintaining your masculine edge in a society that seems designed to blunt it. Learn how to create energetic boundaries, optimize your environment, and develop daily practices that protect and enhance your masculine "
                        <PowerWord>"POWER"</PowerWord>
                        "."
                    </p>
                </ArticleCard>
            </div>
        </Reveal>
    }
}
