//! UI Components
//!
//! Self-contained page widgets. Each one owns its timers and listeners.

mod archetype_quiz;
mod breathing_box;
mod contact_form;
mod countdown_timer;
mod daily_quiz;
mod energy_chart;
mod exit_intent_modal;
mod fire_mode_toggle;
mod flame_cursor;
mod join_counter;
mod power_word;
mod progress_tracker;
mod purchase_form;
mod reflection_modal;
mod reveal;
mod scroll_progress;
mod soundboard;
mod testimonial_carousel;
mod typewriter_text;
mod video_background;

pub use archetype_quiz::ArchetypeQuiz;
pub use breathing_box::BreathingBox;
pub use contact_form::ContactForm;
pub use countdown_timer::CountdownTimer;
pub use daily_quiz::DailyQuiz;
pub use energy_chart::EnergyGrowthChart;
pub use exit_intent_modal::ExitIntentModal;
pub use fire_mode_toggle::FireModeToggle;
pub use flame_cursor::FlameCursor;
pub use join_counter::JoinCounter;
pub use power_word::PowerWord;
pub use progress_tracker::ProgressTracker;
pub use purchase_form::PurchaseForm;
pub use reflection_modal::ReflectionModal;
pub use reveal::Reveal;
pub use scroll_progress::ScrollProgress;
pub use soundboard::Soundboard;
pub use testimonial_carousel::TestimonialCarousel;
pub use typewriter_text::TypewriterText;
pub use video_background::VideoBackground;
