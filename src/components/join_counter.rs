//! Join Counter Component
//!
//! Simulated sign-up counts; a number is highlighted briefly after it changes.

use std::ops::ControlFlow;

use leptos::prelude::*;
use leptos_observe::{spawn_delayed, use_cancel_token, use_ticker};

use crate::context::use_config;
use crate::counters::{group_thousands, JoinCounts};

const FLASH_MS: u32 = 1000;

#[component]
pub fn JoinCounter() -> impl IntoView {
    let config = use_config();
    let (counts, set_counts) = signal(JoinCounts {
        total: config.join_total_start,
        weekly: config.join_weekly_start,
    });
    let (flash_total, set_flash_total) = signal(false);
    let (flash_weekly, set_flash_weekly) = signal(false);
    let chance = config.join_weekly_chance;
    let flash_token = use_cancel_token();

    use_ticker(config.join_interval_ms, move || {
        let mut next = counts.get_untracked();
        let weekly = next.tick(js_sys::Math::random(), chance);
        set_counts.set(next);

        set_flash_total.set(true);
        spawn_delayed(flash_token.clone(), FLASH_MS, move || set_flash_total.set(false));
        if weekly {
            set_flash_weekly.set(true);
            spawn_delayed(flash_token.clone(), FLASH_MS, move || set_flash_weekly.set(false));
        }
        ControlFlow::Continue(())
    });

    view! {
        <div class="join-counter">
            <span class="join-icon">"👥"</span>
            <span class=move || if flash_total.get() { "count flash" } else { "count" }>
                {move || group_thousands(counts.get().total)}
            </span>
            " men have already joined. "
            <span class=move || if flash_weekly.get() { "count flash" } else { "count" }>
                {move || counts.get().weekly}
            </span>
            " joined this week."
        </div>
    }
}
