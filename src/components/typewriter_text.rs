//! Typewriter Text Component
//!
//! Types, holds and deletes each word in turn, forever.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_observe::use_cancel_token;

use crate::typewriter::Typewriter;

#[component]
pub fn TypewriterText(words: &'static [&'static str]) -> impl IntoView {
    let (text, set_text) = signal(String::new());
    let token = use_cancel_token();

    spawn_local(async move {
        let mut writer = Typewriter::new(words);
        loop {
            let delay = writer.step();
            set_text.set(writer.text().to_string());
            TimeoutFuture::new(delay).await;
            if token.is_cancelled() {
                break;
            }
        }
    });

    view! {
        <span class="typewriter">{text}<span class="typewriter-caret">"_"</span></span>
    }
}
