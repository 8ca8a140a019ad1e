//! Energy Academy App
//!
//! Root component: shared context, page-wide overlays and the landing page.

use leptos::prelude::*;

use crate::components::{ExitIntentModal, FireModeToggle, FlameCursor, ProgressTracker, ReflectionModal};
use crate::config::SiteConfig;
use crate::context::{CursorContext, ThemeContext};
use crate::page::LandingPage;
use crate::theme::ThemeState;

#[component]
pub fn App(config: SiteConfig) -> impl IntoView {
    // State
    let theme = ThemeContext::new(signal(ThemeState::default()));
    let cursor = CursorContext::new(signal(false));

    // Provide context to all children
    provide_context(config);
    provide_context(theme);
    provide_context(cursor);

    theme.sync_body_class();
    log::info!("[APP] mounted");

    view! {
        <ProgressTracker />
        <ReflectionModal />
        <FlameCursor />
        <LandingPage />
        <FireModeToggle />
        <ExitIntentModal />
    }
}
