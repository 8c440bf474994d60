//! Static rendering of the full document.
//!
//! Uses Leptos 0.8's `RenderHtml` trait. Event handlers and timers are never
//! run here; the form renders in its initial state.

use bella_core::LandingConfig;
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

use crate::LandingPage;

/// `<html>` shell around [`LandingPage`], with head metadata from config.
#[component]
pub fn LandingDocument(config: LandingConfig) -> impl IntoView {
    let page = config.page.clone();
    view! {
        <html lang=page.lang>
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta name="description" content=page.description />
                <title>{page.title}</title>
            </head>
            <body>
                <LandingPage config=config />
            </body>
        </html>
    }
}

/// Render the complete landing page as an HTML document.
///
/// # Example
///
/// ```rust
/// use bella_core::LandingConfig;
/// use bella_landing::render_page;
///
/// let html = render_page(&LandingConfig::default());
/// assert!(html.starts_with("<!DOCTYPE html>"));
/// assert!(html.contains("Explore Our Collections"));
/// ```
pub fn render_page(config: &LandingConfig) -> String {
    let owner = Owner::new();
    let html = owner.with(|| {
        let doc = view! { <LandingDocument config=config.clone() /> };
        doc.to_html()
    });

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn head_uses_page_config() {
        let mut config = LandingConfig::default();
        config.page.title = "Bella Preview".into();
        config.page.lang = "fr".into();

        let html = render_page(&config);

        assert!(html.contains("<title>"));
        assert!(html.contains("Bella Preview"));
        assert!(html.contains(r#"lang="fr""#));
    }

    #[test]
    fn renders_inline_stylesheet() {
        let html = render_page(&LandingConfig::default());
        assert!(html.contains("<style>"));
        assert!(html.contains("@keyframes fadeInUp"));
    }
}
