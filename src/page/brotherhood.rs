//! Anonymous Brotherhood

use leptos::prelude::*;

use super::SectionTitle;
use crate::components::Reveal;
use crate::context::use_theme;

struct Post {
    author: &'static str,
    day: u32,
    text: &'static str,
    replies: u32,
}

static POSTS: [Post; 3] = [
    Post {
        author: "Warrior_547",
        day: 14,
        text: "I felt like giving up today. The urges were intense, and I almost broke my streak. Used the 4-7-8 breathing technique from Week 2 and it pulled me through. Anyone else feel stuck in the middle of their journey? How do you push through?",
        replies: 8,
    },
    Post {
        author: "Phoenix_Rising",
        day: 7,
        text: "My breathing routine saved me today. Had a stressful meeting at work and could feel my energy draining. Stepped away for 5 minutes of breathwork and came back centered and powerful. Already seeing benefits in unexpected areas of life.",
        replies: 12,
    },
    Post {
        author: "Iron_Will",
        day: 21,
        text: "Week 3 energy redirection exercises are game-changing. I've never felt this level of drive and focus before. Channeled my energy into a project I've been putting off for months and finished it in two days. This isn't just about sex, it's about becoming the man you're meant to be.",
        replies: 5,
    },
];

#[component]
pub fn Brotherhood() -> impl IntoView {
    let theme = use_theme();

    view! {
        <Reveal id="brotherhood" class="section section-dark">
            <div class="two-column">
                <div>
                    <SectionTitle lead="The" accent="Brotherhood" />
                    <p>
                        "Join our anonymous brotherhood, a private space to share struggles, wins, and daily reflections. No names. No ego. Just men growing together."
                    </p>
                    <p>
                        "The journey of masculine energy mastery can be challenging. Having a community of like-minded men to share experiences with makes all the difference. Our private forum allows you to connect anonymously with others on the same path."
                    </p>
                    <div class="member-stat">
                        <span class="member-icon">"👥"</span>
                        <div>
                            <span class="member-count">"500+ Active Members"</span>
                            <span class="member-origin">"Men from 32 countries"</span>
                        </div>
                    </div>
                    <button class=move || theme.theme.get().pick("btn fire-button", "btn btn-red")>"Join the Brotherhood"</button>
                    <img
                        class="section-image"
                        src="https://images.unsplash.com/photo-1511632765486-a01980e01a18"
                        alt="Group of men in a circle supporting each other outdoors, brotherhood and strength theme"
                    />
                </div>
                <div class=move || theme.theme.get().pick("posts fire-card", "posts card")>
                    <h3>"🔒 Anonymous Posts"</h3>
                    {POSTS.iter().map(|post| view! {
                        <div class="post">
                            <div class="post-meta">
                                <span class="post-author">{post.author}</span>
                                <span class="post-day">{format!("Day {}", post.day)}</span>
                            </div>
                            <p>{format!("\"{}\"", post.text)}</p>
                            <div class="post-replies">{format!("{} replies", post.replies)}</div>
                        </div>
                    }).collect_view()}
                </div>
            </div>
        </Reveal>
    }
}
