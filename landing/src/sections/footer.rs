use bella_core::BRAND;
use leptos::prelude::*;

#[component]
pub fn Footer(year: i32) -> impl IntoView {
    let copyright = format!("© {year} {BRAND}. All rights reserved.");
    view! {
        <footer class="footer">
            <p class="footer-copyright">{copyright}</p>
        </footer>
    }
}
