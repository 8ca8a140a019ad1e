//! Contact Form Component
//!
//! Client-only: a submission is logged to the console and the form resets.

use leptos::prelude::*;
use leptos_observe::{spawn_delayed, use_cancel_token};

use crate::context::use_theme;
use crate::models::ContactMessage;

const SUCCESS_MS: u32 = 5000;

/// Log the payload as a JS object so it can be inspected in devtools
fn log_submission(message: &ContactMessage) {
    match serde_wasm_bindgen::to_value(message) {
        Ok(payload) => web_sys::console::log_2(&"Form submitted:".into(), &payload),
        Err(e) => log::warn!("[CONTACT] cannot serialize payload: {}", e),
    }
}

#[component]
pub fn ContactForm() -> impl IntoView {
    let theme = use_theme();
    let (form, set_form) = signal(ContactMessage::default());
    let (submitted, set_submitted) = signal(false);
    let token = use_cancel_token();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let message = form.get_untracked();
        if !message.is_complete() {
            return;
        }
        log_submission(&message);
        set_form.set(ContactMessage::default());
        set_submitted.set(true);
        spawn_delayed(token.clone(), SUCCESS_MS, move || set_submitted.set(false));
    };

    let field_class = move || theme.theme.get().pick("field fire-field", "field");
    let submit_class = move || theme.theme.get().pick("btn full fire-button", "btn full btn-red");

    view! {
        <div class="contact-form-wrap">
            <div class="contact-success" class:hidden=move || !submitted.get()>
                <h4>"Message Sent!"</h4>
                <p>"Thank you for reaching out. We'll get back to you within 24 hours."</p>
            </div>
            <form class="contact-form" class:hidden=move || submitted.get() on:submit=on_submit>
                <input
                    type="text"
                    name="name"
                    placeholder="Your Name"
                    required
                    class=field_class
                    prop:value=move || form.get().name
                    on:input=move |ev| set_form.update(|f| f.name = event_target_value(&ev))
                />
                <input
                    type="email"
                    name="email"
                    placeholder="Your Email"
                    required
                    class=field_class
                    prop:value=move || form.get().email
                    on:input=move |ev| set_form.update(|f| f.email = event_target_value(&ev))
                />
                <textarea
                    name="message"
                    placeholder="Your Message"
                    required
                    class=field_class
                    prop:value=move || form.get().message
                    on:input=move |ev| set_form.update(|f| f.message = event_target_value(&ev))
                ></textarea>
                <button type="submit" class=submit_class>"Send Message"</button>
            </form>
        </div>
    }
}
