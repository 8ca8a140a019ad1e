//! 30-Day Protocol
//!
//! Week cards plus the interactive widgets: breathing, quizzes and chart.

use leptos::prelude::*;

use super::SectionTitle;
use crate::components::{
    ArchetypeQuiz, BreathingBox, DailyQuiz, EnergyGrowthChart, PowerWord, Reveal, ScrollProgress,
};
use crate::context::use_theme;

const SECTION_ID: &str = "protocol";

struct Week {
    number: &'static str,
    title: &'static str,
    image: &'static str,
    alt: &'static str,
    intro: &'static str,
    practices: [&'static str; 4],
}

static WEEKS: [Week; 4] = [
    Week {
        number: "01",
        title: "Week 1: Awareness & Reset",
        image: "https://images.unsplash.com/photo-1508672019048-805c876b67e2",
        alt: "Focused man sitting cross-legged meditating indoors with warm lighting, peaceful vibe",
        intro: "The journey begins with awareness. You'll identify the habits and patterns that drain your masculine energy and learn the foundational breathwork techniques that will become your daily practice. This week focuses on:",
        practices: [
            "Daily energy awareness meditation",
            "Breaking the cycle of energy depletion",
            "Introduction to pelvic floor control",
            "Setting your masculine intention",
        ],
    },
    Week {
        number: "02",
        title: "Week 2: Control & Practice",
        image: "https://images.unsplash.com/photo-1605296867304-46d5465a13f1?auto=format&fit=crop&w=1920&q=80",
        alt: "Man practicing breathing control",
        intro: "Now that you've established awareness, you'll develop the physical and mental control necessary for mastery. This week's practices include:",
        practices: [
            "Advanced pelvic floor strengthening",
            "Breathwork for immediate arousal control",
            "Mind-body connection exercises",
            "Retention techniques and practice",
        ],
    },
    Week {
        number: "03",
        title: "Week 3: Energy Redirection",
        image: "https://images.unsplash.com/photo-1531297484001-80022131f5a1",
        alt: "Man in a dark room working on laptop with intense focus, energetic glow",
        intro: "This is where transformation accelerates. You'll learn to redirect your sexual energy into productive channels that fuel your purpose and passion:",
        practices: [
            "Energy circulation techniques",
            "Transmutation practices for creativity",
            "Focus and productivity enhancement",
            "Building magnetic presence",
        ],
    },
    Week {
        number: "04",
        title: "Week 4: Masculine Mastery",
        image: "https://images.unsplash.com/photo-1493246507139-91e8fad9978e",
        alt: "Confident man standing on mountain top with open arms, sunrise, victorious energy",
        intro: "The final week integrates everything you've learned into a sustainable lifestyle of masculine power and presence:",
        practices: [
            "Embodying masculine presence",
            "Integrating practices into daily life",
            "Maintaining energy during intimacy",
            "Creating your ongoing masculine practice",
        ],
    },
];

#[component]
fn WeekCard(week: &'static Week, #[prop(optional)] children: Option<Children>) -> impl IntoView {
    let theme = use_theme();
    view! {
        <div class=move || theme.theme.get().pick("week-card fire-card", "week-card card")>
            <div class="week-number">{week.number}</div>
            <h3>{week.title}</h3>
            <img class="week-image" src=week.image alt=week.alt />
            <p>{week.intro}</p>
            <ul class="week-practices">
                {week.practices.iter().map(|p| view! { <li>{format!("• {}", p)}</li> }).collect_view()}
            </ul>
            {children.map(|c| c())}
        </div>
    }
}

#[component]
pub fn Protocol() -> impl IntoView {
    let theme = use_theme();

    view! {
        <Reveal id=SECTION_ID class="section">
            <SectionTitle lead="The 30-Day" accent="Protocol" centered=true />
            <ScrollProgress section_id=SECTION_ID />
            <div class="week-grid">
                <WeekCard week=&WEEKS[0] />
                <WeekCard week=&WEEKS[1]><BreathingBox /></WeekCard>
                <WeekCard week=&WEEKS[2] />
                <WeekCard week=&WEEKS[3]>
                    <p class="week-power">"Live it with "<PowerWord>"POWER"</PowerWord>"."</p>
                </WeekCard>
            </div>
            <ArchetypeQuiz />
            <DailyQuiz />
            <EnergyGrowthChart />
            <div class=move || theme.theme.get().pick("protocol-note fire-card", "protocol-note card")>
                <p>
                    <span class="text-red">"Note:"</span>
                    " Course sent via email upon purchase as a full private PDF guide. Begin your journey immediately with no waiting."
                </p>
            </div>
        </Reveal>
    }
}
