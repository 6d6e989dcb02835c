use leptos::prelude::*;

use super::carousel;

struct Feature {
    image: &'static str,
    title: &'static str,
    description: &'static str,
}

static FEATURES: [Feature; 6] = [
    Feature {
        image: "https://cretaelectric.hyundai.co.in/assets/creta-DcM4ZZq5.jpg",
        title: "Driving range up to 473 km**",
        description: "Say goodbye to frequent charging stops! With a driving range of up to 473 km \
            on a single full charge**, the CRETA Electric is built for those who crave \
            uninterrupted adventures.",
    },
    Feature {
        image: "https://cretaelectric.hyundai.co.in/assets/creta2-CtNK2RxL.jpg",
        title: "Pixelated graphic grille",
        description: "The Hyundai CRETA Electric sets a new benchmark in design with a pixelated \
            graphic front-grille with integrated charging port and a pixelated graphic lower \
            bumper.",
    },
    Feature {
        image: "https://cretaelectric.hyundai.co.in/assets/creta7-DR7lee5y.jpg",
        title: "Active Air Flaps#",
        description: "The Active Air Flap (AAF) adds a flare in style and performance, optimizing \
            airflow for cooling and enhanced aerodynamics.",
    },
    Feature {
        image: "https://cretaelectric.hyundai.co.in/assets/creta3-DI0AVk7J.jpg",
        title: "Pixelated graphic rear bumper",
        description: "Complementing the front design, the pixelated graphic rear bumper, and the \
            connected LED tail lamps offer an innovative and electrifying appearance.",
    },
    Feature {
        image: "https://cretaelectric.hyundai.co.in/assets/creta8-CxR7ji2m.jpg",
        title: "R17 (D=436.6 mm) Aero Alloy wheels",
        description: "Equipped with R17 Aero Alloy Wheels with Low Rolling Resistance (LRR) tyres, \
            the CRETA Electric enhances aerodynamic performance, contributing to improved range \
            efficiency.",
    },
    Feature {
        image: "https://cretaelectric.hyundai.co.in/assets/creta4-hp25Do38.jpg",
        title: "Fast home charging",
        description: "The Hyundai CRETA Electric can be charged from 10% to 80% in just 58 \
            minutes*** (DC charging), while the 11kW Wall Box Home fast AC charger can achieve \
            the same charge range in an impressive 4 hours*.",
    },
];

const SLIDES_SHOWN: usize = 3;

#[component]
pub fn FeaturesCarousel() -> impl IntoView {
    let (start, set_start) = signal(0usize);

    view! {
        <section class="features">
            <h2 class="section-title">"Features"</h2>
            <div class="carousel">
                <button
                    class="carousel-btn carousel-prev"
                    aria-label="Previous features"
                    on:click=move |_| {
                        set_start.update(|s| *s = carousel::step_back(*s, FEATURES.len()))
                    }
                >
                    "❮"
                </button>
                <div class="carousel-track">
                    {move || {
                        carousel::visible_window(start.get(), FEATURES.len(), SLIDES_SHOWN)
                            .into_iter()
                            .map(|i| {
                                let feature = &FEATURES[i];
                                view! {
                                    <FeatureCard
                                        image=feature.image
                                        title=feature.title
                                        description=feature.description
                                    />
                                }
                            })
                            .collect_view()
                    }}
                </div>
                <button
                    class="carousel-btn carousel-next"
                    aria-label="Next features"
                    on:click=move |_| {
                        set_start.update(|s| *s = carousel::step_forward(*s, FEATURES.len()))
                    }
                >
                    "❯"
                </button>
            </div>
        </section>
    }
}

#[component]
fn FeatureCard(
    image: &'static str,
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    view! {
        <article class="feature-card">
            <img src=image alt=title class="feature-image" />
            <div class="feature-body">
                <h3 class="feature-title">{title}</h3>
                <p class="feature-description">{description}</p>
            </div>
        </article>
    }
}
