use bella_core::BRAND;
use leptos::prelude::*;

#[component]
pub fn Hero() -> impl IntoView {
    let title = format!("Welcome to {BRAND} — Where Style Meets Soul.");
    view! {
        <section class="hero">
            <div class="hero-glow" aria-hidden="true">
                <div class="hero-orb hero-orb-left"></div>
                <div class="hero-orb hero-orb-right"></div>
            </div>
            <div class="hero-content fade-in-up">
                <h1 class="hero-title">{title}</h1>
                <p class="hero-description">
                    "Discover timeless fashion crafted for the bold and beautiful."
                </p>
                <a href="#cta" class="btn btn-pill">
                    "Join the Movement"
                </a>
            </div>
        </section>
    }
}
