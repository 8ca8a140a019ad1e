//! Testimonial Carousel Component
//!
//! Shows one testimonial at a time and rotates on a fixed interval.

use std::ops::ControlFlow;

use leptos::prelude::*;
use leptos_observe::use_ticker;

use crate::content::TESTIMONIALS;
use crate::playback::Rotation;

const ROTATE_MS: u32 = 7000;

#[component]
pub fn TestimonialCarousel() -> impl IntoView {
    let (rotation, set_rotation) = signal(Rotation::new(TESTIMONIALS.len()));

    use_ticker(ROTATE_MS, move || {
        set_rotation.update(|r| {
            r.advance();
        });
        ControlFlow::Continue(())
    });

    view! {
        <div class="testimonial-carousel">
            {TESTIMONIALS.iter().enumerate().map(|(i, t)| {
                view! {
                    <blockquote class=move || if rotation.get().index() == i { "testimonial active" } else { "testimonial" }>
                        <p>{format!("\u{201c}{}\u{201d}", t.quote)}</p>
                        <footer>{format!("{}, {}", t.name, t.age)}</footer>
                    </blockquote>
                }
            }).collect_view()}
        </div>
    }
}
