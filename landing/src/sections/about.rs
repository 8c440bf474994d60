use bella_core::BRAND;
use leptos::prelude::*;

#[component]
pub fn About() -> impl IntoView {
    let heading = format!("About {BRAND}");
    view! {
        <section id="about" class="about">
            <div class="container narrow">
                <h2 class="section-title">{heading}</h2>
                <p class="section-lead">
                    "Bella is more than just a clothing brand — it's a celebration of individuality, elegance, and confidence. "
                    "Our mission is to empower every person who wears Bella to express their true self through thoughtfully designed fashion."
                </p>
            </div>
        </section>
    }
}
