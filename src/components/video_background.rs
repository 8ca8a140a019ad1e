//! Video Background Component
//!
//! Muted looping hero video, faded in once the browser can play it.

use leptos::html;
use leptos::prelude::*;

const VIDEO_SRC: &str = "/videos/masculine-energy.mp4";

#[component]
pub fn VideoBackground() -> impl IntoView {
    let video_ref = NodeRef::<html::Video>::new();
    let (loaded, set_loaded) = signal(false);

    // `loop` is a keyword, so playback flags are set on the element directly
    Effect::new(move |_| {
        let Some(video) = video_ref.get() else { return };
        video.set_loop(true);
        video.set_muted(true);
        video.set_autoplay(true);
        // no stable setter for playsInline
        if let Err(e) = video.set_attribute("playsinline", "") {
            log::warn!("[VIDEO] playsinline: {:?}", e);
        }
    });

    view! {
        <div class="video-background">
            <video
                node_ref=video_ref
                class=move || if loaded.get() { "hero-video loaded" } else { "hero-video" }
                src=VIDEO_SRC
                on:canplay=move |_| {
                    if !loaded.get_untracked() {
                        log::debug!("[VIDEO] ready");
                        set_loaded.set(true);
                    }
                }
            ></video>
            <div class="video-overlay"></div>
        </div>
    }
}
