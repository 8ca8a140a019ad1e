//! Breathing Box Component

use std::ops::ControlFlow;

use leptos::prelude::*;
use leptos_observe::use_ticker;

use crate::breathing::BreathState;

#[component]
pub fn BreathingBox() -> impl IntoView {
    let (state, set_state) = signal(BreathState::default());

    use_ticker(1000, move || {
        set_state.update(|s| s.tick());
        ControlFlow::Continue(())
    });

    view! {
        <div class="breathing-card">
            <h3>"Breathwork Session"</h3>
            <div class=move || state.get().phase.class()>
                <span class="breath-phase">{move || state.get().phase.label()}</span>
                <span class="breath-counter">{move || state.get().counter}</span>
            </div>
            <p class="breath-note">"Inhale 4s, hold 7s, exhale 8s. Repeat until your mind is still."</p>
        </div>
    }
}
