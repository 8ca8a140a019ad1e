//! Countdown Timer Component
//!
//! Live "Xh Ym Zs" display that stops once the target passes.

use std::ops::ControlFlow;

use chrono::{DateTime, Utc};
use leptos::prelude::*;
use leptos_observe::use_ticker;

use crate::countdown::{Countdown, Tick};

#[component]
pub fn CountdownTimer(target: DateTime<Utc>) -> impl IntoView {
    let countdown = Countdown::new(target);
    let (text, set_text) = signal(countdown.display(Utc::now()));

    use_ticker(1000, move || {
        let now = Utc::now();
        set_text.set(countdown.display(now));
        match countdown.tick(now) {
            Tick::Running(_) => ControlFlow::Continue(()),
            Tick::Expired => {
                log::info!("[COUNTDOWN] target {} passed, stopping", countdown.target());
                ControlFlow::Break(())
            }
        }
    });

    view! { <span class="countdown">{text}</span> }
}
