use bella_core::{FEATURE_CARDS, FeatureCard};
use leptos::prelude::*;

#[component]
pub fn Collections() -> impl IntoView {
    view! {
        <section id="collections" class="collections">
            <div class="container">
                <h2 class="section-title">"Explore Our Collections"</h2>
                <div class="collections-grid">
                    {FEATURE_CARDS
                        .into_iter()
                        .map(|card| view! { <CollectionCard card=card /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn CollectionCard(card: FeatureCard) -> impl IntoView {
    view! {
        <article class="feature-card">
            <div class="feature-icon">{card.icon}</div>
            <h3 class="feature-title">{card.title}</h3>
            <p class="feature-description">{card.description}</p>
        </article>
    }
}
