#![allow(warnings)]
//! Energy Academy Frontend Entry Point

mod app;
mod breathing;
mod chart;
mod components;
mod config;
mod content;
mod context;
mod counters;
mod countdown;
mod logging;
mod models;
mod page;
mod particles;
mod playback;
mod quiz;
mod scroll;
mod theme;
mod triggers;
mod typewriter;

use app::App;
use config::SiteConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let (config, problems) = SiteConfig::load();
    logging::init(config.log_level());
    for problem in problems {
        log::warn!("[CONFIG] using default: {}", problem);
    }

    mount_to_body(move || view! { <App config=config /> });
}
