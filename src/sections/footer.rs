use leptos::prelude::*;

use super::{DEALER_ADDRESS, DEALER_PHONE};

const FOOTER_CARS: [&str; 5] = [
    "Hyundai Creta",
    "Hyundai Creta EV",
    "Hyundai I20",
    "Hyundai Verna",
    "Hyundai Venue",
];

const FOOTER_ABOUT: [&str; 5] = [
    "About Bharat Hyundai Motors",
    "Gallery",
    "Testimonials",
    "Contact Us",
    "Career",
];

#[component]
pub fn Footer() -> impl IntoView {
    let phone_href = format!("tel:+91{DEALER_PHONE}");
    view! {
        <footer class="footer">
            <div class="footer-grid">
                <div class="footer-col">
                    <h2 class="footer-brand">"Bharat Hyundai"</h2>
                    <p class="footer-address">{DEALER_ADDRESS}</p>
                </div>
                <div class="footer-col">
                    <h3 class="footer-heading">"Cars"</h3>
                    <ul class="footer-list">
                        {FOOTER_CARS.iter().map(|car| view! { <li>{*car}</li> }).collect_view()}
                    </ul>
                </div>
                <div class="footer-col">
                    <h3 class="footer-heading">"About Us"</h3>
                    <ul class="footer-list">
                        {FOOTER_ABOUT.iter().map(|item| view! { <li>{*item}</li> }).collect_view()}
                    </ul>
                </div>
                <div class="footer-col">
                    <h3 class="footer-heading">"Follow Us"</h3>
                    <div class="footer-social">
                        <a href="https://www.facebook.com/BharatHyundaiTelangana" target="_blank">
                            "Facebook"
                        </a>
                        <a
                            href="https://www.linkedin.com/company/86301981/"
                            target="_blank"
                        >
                            "LinkedIn"
                        </a>
                        <a
                            href="https://www.instagram.com/bharathyundai.telangana/"
                            target="_blank"
                        >
                            "Instagram"
                        </a>
                    </div>
                    <p class="footer-contact">
                        <a href=phone_href>{DEALER_PHONE}</a>
                    </p>
                    <p class="footer-contact">
                        <a href="mailto:info@bharathyundai.in">"info@bharathyundai.in"</a>
                    </p>
                </div>
            </div>
            <div class="footer-bottom">
                <p>
                    <a href="#">"Terms & Conditions"</a>
                    " | "
                    <a href="#">"Privacy Policy"</a>
                </p>
                <p>"© 2025 All Rights Reserved by Bharat Hyundai Motors."</p>
                <p class="footer-powered">
                    "Powered by "
                    <a href="https://broaddcast.com/">"BroaddCast Business Solutions LLP."</a>
                </p>
            </div>
        </footer>
    }
}
