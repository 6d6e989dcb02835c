use leptos::prelude::*;

use super::DEALER_PHONE;

#[component]
pub fn Nav() -> impl IntoView {
    let phone_href = format!("tel:+91{DEALER_PHONE}");
    let phone_label = format!("📞 {DEALER_PHONE}");
    view! {
        <nav class="nav">
            <div class="nav-inner">
                <a href="/" class="nav-brand">
                    <img src="assets/hyundai-logo.png" class="nav-logo" alt="Hyundai Logo" />
                </a>
                <a href=phone_href class="nav-phone">{phone_label}</a>
            </div>
        </nav>
    }
}
