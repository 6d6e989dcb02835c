use leptos::prelude::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            // Which banner shows is a stylesheet concern (viewport width).
            <img
                src="assets/landing-page-banner.webp"
                alt="Banner"
                class="hero-banner hero-banner-desktop"
            />
            <img
                src="assets/mobile-banner.webp"
                alt="Mobile Banner"
                class="hero-banner hero-banner-mobile"
            />
        </section>
    }
}
