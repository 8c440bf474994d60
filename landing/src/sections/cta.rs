use leptos::prelude::*;

/// Sign-up banner between the brand story and the collections.
#[component]
pub fn CallToAction() -> impl IntoView {
    view! {
        <section id="cta" class="cta">
            <div class="container narrow">
                <h2 class="cta-title">"Be the First to Know"</h2>
                <p class="cta-description">
                    "Sign up now to get exclusive early access to our collections, special offers, and style inspiration."
                </p>
                <a href="#form" class="btn btn-pill">
                    "Subscribe Now"
                </a>
            </div>
        </section>
    }
}
