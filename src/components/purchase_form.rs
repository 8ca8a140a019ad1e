//! Purchase Form Component
//!
//! Static "Buy Now" form posting to the PayPal checkout page in a new tab.

use leptos::prelude::*;

use crate::context::{use_config, use_cursor, use_theme};

#[component]
pub fn PurchaseForm(
    /// Stretch the button to the form width
    #[prop(optional)]
    full_width: bool,
    /// Extra wrapper class
    #[prop(optional)]
    class: &'static str,
) -> impl IntoView {
    let config = use_config();
    let theme = use_theme();
    let cursor = use_cursor();

    let fields = config
        .checkout_fields()
        .map(|(name, value)| view! { <input type="hidden" name=name value=value.to_string() /> });
    let label = format!("Buy Now – {}", config.display_price);

    let button_class = move || {
        let base = theme.theme.get().pick("btn btn-buy fire-button", "btn btn-buy btn-red");
        if full_width { format!("{} full", base) } else { base.to_string() }
    };

    view! {
        <form class=class action=config.paypal_endpoint.clone() method="post" target="_blank">
            {fields.into_iter().collect_view()}
            <button
                type="submit"
                class=button_class
                on:mouseenter=move |_| cursor.set_hovering(true)
                on:mouseleave=move |_| cursor.set_hovering(false)
            >
                {label}
                <span class="btn-chevron">"›"</span>
            </button>
        </form>
    }
}
