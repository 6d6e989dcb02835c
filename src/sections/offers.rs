use leptos::prelude::*;

use super::carousel;

struct Offer {
    name: &'static str,
    saving: &'static str,
    image: &'static str,
}

static OFFERS: [Offer; 10] = [
    Offer {
        name: "Hyundai Verna",
        saving: "₹50,000*",
        image: "https://bharathyundai.com/wp-content/uploads/2024/05/1679903528.png",
    },
    Offer {
        name: "Hyundai Venue",
        saving: "₹55,000*",
        image: "https://bharathyundai.com/wp-content/uploads/2024/05/1662110515.png",
    },
    Offer {
        name: "Hyundai I20",
        saving: "₹50,000*",
        image: "https://bharathyundai.com/wp-content/uploads/2024/05/1656409788.png",
    },
    Offer {
        name: "Hyundai I20 N Line",
        saving: "₹45,000*",
        image: "https://bharathyundai.com/wp-content/uploads/2024/05/1665133996.png",
    },
    Offer {
        name: "Hyundai Venue N Line",
        saving: "₹50,000*",
        image: "https://bharathyundai.com/wp-content/uploads/2024/05/image-removebg-preview-24.png",
    },
    Offer {
        name: "Grand i10 NIOS",
        saving: "₹53,000*",
        image: "https://lakshmihyundai.s3.ap-south-1.amazonaws.com/models/display_images/1675149576.png",
    },
    Offer {
        name: "Hyundai Alcazar",
        saving: "₹25,000*",
        image: "https://bharathyundai.com/wp-content/uploads/2024/05/1659615610.png",
    },
    Offer {
        name: "Hyundai Tucson",
        saving: "₹50,000*",
        image: "https://bharathyundai.com/wp-content/uploads/2024/05/1662112191.png",
    },
    Offer {
        name: "Hyundai Exter",
        saving: "₹35,000*",
        image: "https://bharathyundai.com/wp-content/uploads/2024/05/1689152983-1.png",
    },
    Offer {
        name: "Hyundai Aura",
        saving: "₹48,000*",
        image: "https://lakshmihyundai.s3.ap-south-1.amazonaws.com/models/display_images/1676446028.png",
    },
];

const SLIDES_SHOWN: usize = 4;

#[component]
pub fn OffersCarousel() -> impl IntoView {
    let (start, set_start) = signal(0usize);

    view! {
        <section class="offers">
            <h2 class="section-title">"Our Exclusive Offers"</h2>
            <div class="carousel">
                <button
                    class="carousel-btn carousel-prev"
                    aria-label="Previous offers"
                    on:click=move |_| set_start.update(|s| *s = carousel::step_back(*s, OFFERS.len()))
                >
                    "❮"
                </button>
                <div class="carousel-track">
                    {move || {
                        carousel::visible_window(start.get(), OFFERS.len(), SLIDES_SHOWN)
                            .into_iter()
                            .map(|i| {
                                let offer = &OFFERS[i];
                                view! {
                                    <OfferCard
                                        name=offer.name
                                        saving=offer.saving
                                        image=offer.image
                                    />
                                }
                            })
                            .collect_view()
                    }}
                </div>
                <button
                    class="carousel-btn carousel-next"
                    aria-label="Next offers"
                    on:click=move |_| {
                        set_start.update(|s| *s = carousel::step_forward(*s, OFFERS.len()))
                    }
                >
                    "❯"
                </button>
            </div>
            <p class="offers-tnc">"*TnC apply"</p>
        </section>
    }
}

#[component]
fn OfferCard(name: &'static str, saving: &'static str, image: &'static str) -> impl IntoView {
    view! {
        <article class="offer-card">
            <div class="offer-badge">"OFFER"</div>
            <img src=image alt=name class="offer-image" />
            <h3 class="offer-name">{name}</h3>
            <p class="offer-price">
                <span class="offer-price-label">"save upto : "</span>
                {saving}
            </p>
        </article>
    }
}
