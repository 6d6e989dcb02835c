// Bharat Hyundai Landing Page — Leptos 0.8 Edition
// Developed by BroaddCast Business Solutions LLP (c)2025

mod analytics;
mod api;
mod form;
mod pages;
mod sections;

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use pages::{HomePage, ThankYouPage};

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

#[component]
fn App() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <p class="not-found">"Page not found."</p> }>
                <Route path=path!("/") view=HomePage />
                <Route path=path!("/thank-you") view=ThankYouPage />
            </Routes>
        </Router>
    }
}
