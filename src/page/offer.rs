//! Purchase Section
//!
//! Price card with the checkout form and the limited-time countdown.

use chrono::Utc;
use leptos::prelude::*;

use super::SectionTitle;
use crate::components::{CountdownTimer, PurchaseForm, Reveal};
use crate::context::{use_config, use_theme};
use crate::countdown::Countdown;

static PERKS: [&str; 4] = [
    "Complete 30-day protocol PDF guide",
    "Daily practices and exercises",
    "Access to the Brotherhood community",
    "Lifetime access to all updates",
];

#[component]
pub fn Offer() -> impl IntoView {
    let config = use_config();
    let theme = use_theme();
    let deadline = Countdown::hours_from(Utc::now(), config.countdown_hours).target();

    view! {
        <Reveal id="offer" class="section offer">
            <SectionTitle lead="Ready to Reclaim Your" accent="POWER" tail="?" centered=true />
            <p class="offer-lead">
                "Join thousands of men who have transformed their lives through the Masculine Energy Academy protocol."
            </p>
            <div class=move || theme.theme.get().pick("price-card fire-card", "price-card card")>
                <h3>"Masculine Energy Academy"</h3>
                <p class="price-subtitle">"30-Day Protocol"</p>
                <div class="price">{config.display_price.clone()}</div>
                <ul class="perks">
                    {PERKS.iter().map(|perk| view! { <li>"› "{*perk}</li> }).collect_view()}
                </ul>
                <PurchaseForm full_width=true />
                <p class="delivery-note">"Course will be delivered via email immediately after purchase."</p>
            </div>
            <div class="offer-countdown">
                "Offer ends in: "
                <CountdownTimer target=deadline />
            </div>
        </Reveal>
    }
}
