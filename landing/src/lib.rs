//! # bella-landing
//!
//! The Bella landing page as a Leptos 0.8 component tree.
//!
//! The same [`LandingPage`] is used by two builds:
//!
//! - **csr** - `src/main.rs`, built by trunk, mounts the page to `<body>` and
//!   runs the email capture form in the browser
//! - **ssr** (default) - [`render_page`] renders a complete `index.html`;
//!   the `bella-prerender` binary writes it to disk
//!
//! All behavior lives in [`bella_core`]; this crate only binds it to signals
//! and a browser timeout.

pub mod sections;
pub mod styles;
pub mod timer;

#[cfg(feature = "ssr")]
mod render;

#[cfg(feature = "ssr")]
pub use render::{LandingDocument, render_page};

use bella_core::LandingConfig;
use leptos::prelude::*;
use sections::*;
use styles::LANDING_CSS;

/// The whole page: static sections around the subscription form.
#[component]
pub fn LandingPage(config: LandingConfig) -> impl IntoView {
    let confirmation = config.subscribe.confirmation_delay();
    view! {
        <style>{LANDING_CSS}</style>
        <div class="page">
            <Hero />
            <About />
            <CallToAction />
            <Collections />
            <SubscribeSection confirmation=confirmation />
            <Footer year=current_year() />
        </div>
    }
}

/// Calendar year for the footer copyright line.
#[cfg(target_arch = "wasm32")]
pub fn current_year() -> i32 {
    js_sys::Date::new_0().get_full_year() as i32
}

/// Calendar year for the footer copyright line.
#[cfg(not(target_arch = "wasm32"))]
pub fn current_year() -> i32 {
    time::OffsetDateTime::now_utc().year()
}
