//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::config::SiteConfig;
use crate::theme::{ThemeState, FIRE_MODE_CLASS};

/// Get the site configuration from context
pub fn use_config() -> SiteConfig {
    expect_context::<SiteConfig>()
}

/// Fire-mode flag shared by every themed widget
#[derive(Clone, Copy)]
pub struct ThemeContext {
    /// Current theme - read
    pub theme: ReadSignal<ThemeState>,
    /// Current theme - write (only the toggle writes)
    set_theme: WriteSignal<ThemeState>,
}

impl ThemeContext {
    pub fn new(theme: (ReadSignal<ThemeState>, WriteSignal<ThemeState>)) -> Self {
        Self {
            theme: theme.0,
            set_theme: theme.1,
        }
    }

    pub fn fire_mode(&self) -> bool {
        self.theme.get().fire_mode
    }

    pub fn toggle(&self) {
        self.set_theme.update(|theme| *theme = theme.toggled());
    }

    /// Keep the `<body>` class in sync with the flag
    pub fn sync_body_class(&self) {
        let theme = self.theme;
        Effect::new(move |_| {
            let fire = theme.get().fire_mode;
            let Some(body) = document().body() else { return };
            let classes = body.class_list();
            let result = if fire {
                classes.add_1(FIRE_MODE_CLASS)
            } else {
                classes.remove_1(FIRE_MODE_CLASS)
            };
            if let Err(e) = result {
                log::warn!("[THEME] failed to update body class: {:?}", e);
            }
        });
    }
}

pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext should be provided")
}

/// Whether the pointer is over a buy button. Buttons opt in by reporting hover.
#[derive(Clone, Copy)]
pub struct CursorContext {
    pub hovering_buy: ReadSignal<bool>,
    set_hovering_buy: WriteSignal<bool>,
}

impl CursorContext {
    pub fn new(hovering_buy: (ReadSignal<bool>, WriteSignal<bool>)) -> Self {
        Self {
            hovering_buy: hovering_buy.0,
            set_hovering_buy: hovering_buy.1,
        }
    }

    pub fn set_hovering(&self, hovering: bool) {
        self.set_hovering_buy.set(hovering);
    }
}

pub fn use_cursor() -> CursorContext {
    use_context::<CursorContext>().expect("CursorContext should be provided")
}
