use leptos::prelude::*;
use leptos_router::components::A;

use crate::analytics;
use crate::sections::Nav;

#[component]
pub fn ThankYouPage() -> impl IntoView {
    // One-shot conversion ping on mount.
    Effect::new(move || {
        analytics::report_enquiry_conversion();
    });

    view! {
        <Nav />
        <main class="thankyou">
            <svg
                class="thankyou-check"
                viewBox="0 0 24 24"
                fill="none"
                stroke="currentColor"
                stroke-width="2"
                aria-hidden="true"
            >
                <path
                    stroke-linecap="round"
                    stroke-linejoin="round"
                    d="M9 12l2 2 4-4m6 2a9 9 0 11-18 0 9 9 0 0118 0z"
                />
            </svg>
            <h1 class="thankyou-title">"THANK YOU!"</h1>
            <p class="thankyou-text">
                "Your enquiry has been processed successfully. Our executive will get in touch \
                with you shortly."
            </p>
            <A href="/" attr:class="thankyou-back">
                "← Back to Home"
            </A>
        </main>
    }
}
