// Bella Landing Page — browser entry point (Leptos 0.8 CSR)

use bella_core::LandingConfig;
use bella_landing::LandingPage;
use leptos::prelude::*;

const EMBEDDED_CONFIG: &str = include_str!("../bella.toml");

fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    let config = LandingConfig::from_toml_str(EMBEDDED_CONFIG).unwrap_or_else(|err| {
        tracing::warn!(%err, "embedded bella.toml rejected, using defaults");
        LandingConfig::default()
    });

    leptos::mount::mount_to_body(move || view! { <LandingPage config=config.clone() /> });
}
