//! Soundboard Component
//!
//! Affirmation clips; starting one stops and rewinds whatever was playing.

use leptos::prelude::*;
use leptos_observe::{bind_to_owner, listen};
use web_sys::HtmlAudioElement;

use crate::content::AUDIO_CLIPS;
use crate::playback::Soundboard as Board;

fn load_clips() -> Vec<(&'static str, HtmlAudioElement)> {
    AUDIO_CLIPS
        .iter()
        .filter_map(|clip| match HtmlAudioElement::new_with_src(&clip.src()) {
            Ok(audio) => Some((clip.id, audio)),
            Err(e) => {
                log::warn!("[AUDIO] cannot load {}: {:?}", clip.id, e);
                None
            }
        })
        .collect()
}

#[component]
pub fn Soundboard() -> impl IntoView {
    let (board, set_board) = signal(Board::default());
    let clips = StoredValue::new_local(load_clips());

    clips.with_value(|clips| {
        for (id, audio) in clips {
            let id = *id;
            match listen(audio.as_ref(), "ended", move |_: web_sys::Event| set_board.update(|b| b.ended(id))) {
                Ok(listener) => bind_to_owner(listener),
                Err(e) => log::warn!("[AUDIO] ended listener for {}: {}", id, e),
            }
        }
    });

    let play = move |id: &'static str| {
        let mut next = board.get_untracked();
        let previous = next.play(id);
        clips.with_value(|clips| {
            if let Some((_, audio)) = previous.and_then(|prev| clips.iter().find(|(clip, _)| *clip == prev)) {
                let _ = audio.pause();
                audio.set_current_time(0.0);
            }
            if let Some((_, audio)) = clips.iter().find(|(clip, _)| *clip == id) {
                audio.set_current_time(0.0);
                if let Err(e) = audio.play() {
                    log::warn!("[AUDIO] play {} failed: {:?}", id, e);
                }
            }
        });
        set_board.set(next);
    };

    view! {
        <div class="soundboard">
            {AUDIO_CLIPS.iter().map(|clip| {
                let id = clip.id;
                view! {
                    <button
                        class=move || if board.get().playing() == Some(id) { "sound-btn playing" } else { "sound-btn" }
                        on:click=move |_| play(id)
                    >
                        <span class="sound-icon">{clip.icon}</span>
                        <span>{format!("\u{201c}{}\u{201d}", clip.text)}</span>
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
