use leptos::prelude::*;

struct Paint {
    name: &'static str,
    code: &'static str,
    image: &'static str,
}

static PAINTS: [Paint; 5] = [
    Paint {
        name: "White",
        code: "#FFFFFF",
        image: "https://imgd.aeplcdn.com/600x337/n/g8ajt9b_1804861.jpg?q=80",
    },
    Paint {
        name: "Black",
        code: "#000000",
        image: "https://imgd.aeplcdn.com/600x337/n/xacjt9b_1804863.jpg?q=80",
    },
    Paint {
        name: "Gray",
        code: "#808080",
        image: "https://imgd.aeplcdn.com/600x337/n/xfq8t9b_1804851.jpg?q=80",
    },
    Paint {
        name: "Blue",
        code: "#0033CC",
        image: "https://imgd.aeplcdn.com/600x337/n/08u8t9b_1804857.jpg?q=80",
    },
    Paint {
        name: "Red",
        code: "#CC0000",
        image: "https://imgd.aeplcdn.com/600x337/n/28v8t9b_1804859.jpg?q=80",
    },
];

/// CRETA Electric spotlight with paint swatches driving the displayed car.
#[component]
pub fn ColorShowcase() -> impl IntoView {
    let (selected, set_selected) = signal(0usize);

    view! {
        <section class="showcase">
            <div class="showcase-grid">
                <div class="showcase-copy">
                    <h2 class="showcase-title">"Hyundai CRETA Electric"</h2>
                    <p class="showcase-tagline">"Undisputed. Ultimate. Now electric."</p>
                    <p class="showcase-text">
                        "The iconic SUV, in its electric avatar, is here to take your driving \
                        experience to the next level. Building on the undisputed ultimate machine, \
                        the car seamlessly merges design, performance, technology, and style."
                    </p>
                    <div class="showcase-actions">
                        <button class="btn-outline">"Brochure"</button>
                        <a href="#enquiry" class="showcase-link">"Register your Interest →"</a>
                    </div>
                </div>
                <div class="showcase-visual">
                    <div
                        class="showcase-backdrop"
                        style=move || format!("background-color: {};", PAINTS[selected.get()].code)
                    ></div>
                    <img
                        class="showcase-car"
                        src=move || PAINTS[selected.get()].image
                        alt=move || format!("CRETA Electric - {}", PAINTS[selected.get()].name)
                    />
                </div>
            </div>
            <div class="showcase-swatches">
                {PAINTS
                    .iter()
                    .enumerate()
                    .map(|(i, paint)| {
                        view! {
                            <button
                                class=move || {
                                    if selected.get() == i { "swatch active" } else { "swatch" }
                                }
                                style=format!("background-color: {};", paint.code)
                                aria-label=format!("Select {} color", paint.name)
                                on:click=move |_| set_selected.set(i)
                            ></button>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
