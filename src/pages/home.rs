// Home route - hero banner, enquiry form, showcase sections
use leptos::prelude::*;

use crate::sections::{
    ColorShowcase, FeaturesCarousel, Footer, Hero, LeadCaptureSection, Nav, OffersCarousel,
};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Nav />
        <main>
            <Hero />
            <LeadCaptureSection />
            <OffersCarousel />
            <ColorShowcase />
            <FeaturesCarousel />
        </main>
        <Footer />
    }
}
