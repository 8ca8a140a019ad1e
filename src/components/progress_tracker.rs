//! Progress Tracker Component
//!
//! Fixed top bar showing the demo protocol day. The day advances on a timer
//! and survives reloads through local storage.

use std::ops::ControlFlow;

use leptos::prelude::*;
use leptos_observe::{local_storage, read_key, use_ticker, write_key};

use crate::context::use_config;
use crate::counters::{ProgressDay, PROGRESS_DAY_KEY};

fn load_day() -> Option<String> {
    match local_storage().and_then(|storage| read_key(&storage, PROGRESS_DAY_KEY)) {
        Ok(stored) => stored,
        Err(e) => {
            log::warn!("[PROGRESS] could not read saved day: {}", e);
            None
        }
    }
}

fn save_day(day: u32) {
    let result = local_storage().and_then(|storage| write_key(&storage, PROGRESS_DAY_KEY, &day.to_string()));
    if let Err(e) = result {
        log::warn!("[PROGRESS] could not save day {}: {}", day, e);
    }
}

#[component]
pub fn ProgressTracker() -> impl IntoView {
    let config = use_config();
    let stored = load_day();
    let (progress, set_progress) = signal(ProgressDay::restore(config.progress_total_days, stored.as_deref()));

    use_ticker(config.progress_interval_ms, move || {
        let mut next = progress.get_untracked();
        let day = next.advance();
        set_progress.set(next);
        save_day(day);
        log::debug!("[PROGRESS] advanced to day {}", day);
        ControlFlow::Continue(())
    });

    view! {
        <div class="progress-tracker">
            <div class="progress-fill" style:width=move || format!("{}%", progress.get().percent())></div>
            <div class="progress-label">{move || progress.get().label()}</div>
        </div>
    }
}
