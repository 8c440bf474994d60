//! Page stylesheet.
//!
//! Inlined into the page by [`crate::LandingPage`], so the browser build and
//! the prerendered document share one source. Keep it free of `<`, `>` and
//! `&`: it is emitted as element text.

/// Complete CSS for the landing page - dark theme with olive accent.
pub const LANDING_CSS: &str = r#"
:root {
    --bg: #121212;
    --bg-deep: #000000;
    --surface: #111827;
    --text: #e5e7eb;
    --text-muted: #d1d5db;
    --text-dim: #9ca3af;
    --accent: #7e8c54;
    --accent-hover: #15803d;
    --border: #166534;
    --error: #ef4444;
    --success: #22c55e;
}

* { box-sizing: border-box; }

body {
    margin: 0;
    background: var(--bg);
    color: var(--text);
    font-family: "Inter", system-ui, -apple-system, sans-serif;
    line-height: 1.6;
}

.page { min-height: 100vh; background: var(--bg); }

.container { max-width: 72rem; margin: 0 auto; padding: 0 1.5rem; }
.container.narrow { max-width: 48rem; text-align: center; }

.section-title {
    font-size: 1.875rem;
    font-weight: 700;
    margin: 0 0 1.5rem;
    color: var(--accent);
    text-align: center;
}

.section-lead { font-size: 1.125rem; color: var(--text-muted); margin: 0 0 2rem; }

.btn {
    display: inline-block;
    border: none;
    cursor: pointer;
    font-weight: 600;
    text-decoration: none;
    color: #000000;
    background: var(--accent);
    transition: transform 0.3s ease, background-color 0.3s ease;
}
.btn:hover { background: var(--accent-hover); }
.btn-pill { padding: 0.75rem 2rem; border-radius: 9999px; box-shadow: 0 10px 15px rgba(0, 0, 0, 0.4); }
.btn-pill:hover { transform: scale(1.05); }
.btn-submit { padding: 0.75rem 1.5rem; border-radius: 0.5rem; font-weight: 500; }

/* Hero */
.hero {
    position: relative;
    display: flex;
    align-items: center;
    justify-content: center;
    min-height: 70vh;
    overflow: hidden;
    background: linear-gradient(to bottom, #000000, #111827, #1f2937);
}
.hero-glow { position: absolute; inset: 0; opacity: 0.3; animation: pulse 2s ease-in-out infinite; }
.hero-orb {
    position: absolute;
    width: 16rem;
    height: 16rem;
    border-radius: 9999px;
    background: #14532d;
    filter: blur(24px);
    opacity: 0.7;
}
.hero-orb-left { top: 25%; left: 25%; }
.hero-orb-right { bottom: 25%; right: 25%; }
.hero-content { position: relative; z-index: 10; max-width: 48rem; padding: 0 1.5rem; text-align: center; }
.hero-title {
    font-size: 3rem;
    font-weight: 700;
    line-height: 1.15;
    letter-spacing: -0.025em;
    margin: 0 0 1.5rem;
    color: var(--accent);
}
.hero-description { font-size: 1.125rem; color: var(--text-muted); margin: 0 0 2rem; }

/* Sections */
.about, .collections, .subscribe { padding: 4rem 0; background: var(--bg); }
.cta { padding: 4rem 0; background: var(--bg-deep); }
.cta-title { font-size: 1.875rem; font-weight: 700; margin: 0 0 1.5rem; color: #ffffff; }
.cta-description { font-size: 1.125rem; color: var(--text-dim); margin: 0 0 2rem; }

/* Collections */
.collections .section-title { margin-bottom: 3rem; }
.collections-grid { display: grid; grid-template-columns: 1fr; gap: 2rem; }
.feature-card {
    background: var(--surface);
    padding: 1.5rem;
    border-radius: 0.75rem;
    border: 1px solid var(--border);
    cursor: pointer;
    transition: transform 0.3s ease, box-shadow 0.3s ease;
}
.feature-card:hover { transform: translateY(-0.5rem); box-shadow: 0 20px 25px rgba(0, 0, 0, 0.5); }
.feature-icon { font-size: 2.25rem; margin-bottom: 1rem; color: var(--accent); }
.feature-title { font-size: 1.25rem; font-weight: 600; margin: 0 0 0.5rem; color: #ffffff; }
.feature-description { margin: 0; color: var(--text-muted); }

/* Subscribe */
.subscribe-form { display: flex; flex-direction: column; gap: 1rem; max-width: 36rem; margin: 0 auto; }
.subscribe-input {
    flex-grow: 1;
    padding: 0.75rem 1.25rem;
    border-radius: 0.5rem;
    border: 1px solid #4b5563;
    background: #1f2937;
    color: #ffffff;
    font-size: 1rem;
}
.subscribe-input:focus { outline: none; box-shadow: 0 0 0 2px var(--accent); }
.form-error { margin: 0.5rem 0 0; color: var(--error); }
.form-success { margin: 0.5rem 0 0; color: var(--success); }

/* Footer */
.footer { padding: 2rem 1.5rem; background: var(--bg); text-align: center; }
.footer-copyright { margin: 0; font-size: 0.875rem; color: #4b5563; }

/* Animations */
@keyframes fadeInUp {
    from { opacity: 0; transform: translateY(20px); }
    to { opacity: 1; transform: translateY(0); }
}
@keyframes pulse {
    0%, 100% { opacity: 0.3; }
    50% { opacity: 0.15; }
}
.fade-in-up { animation: fadeInUp 1s ease-out forwards; }

@media (min-width: 640px) {
    .collections-grid { grid-template-columns: repeat(2, 1fr); }
}
@media (min-width: 768px) {
    .hero-title { font-size: 3.75rem; }
    .hero-description { font-size: 1.25rem; }
    .subscribe-form { flex-direction: row; }
}
@media (min-width: 1024px) {
    .collections-grid { grid-template-columns: repeat(4, 1fr); }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_is_safe_as_element_text() {
        assert!(!LANDING_CSS.contains(['<', '>', '&']));
    }

    #[test]
    fn css_styles_rendered_classes() {
        for class in [".hero", ".cta", ".feature-card", ".subscribe-form", ".form-error", ".form-success", ".footer"] {
            assert!(LANDING_CSS.contains(class), "missing {class}");
        }
    }
}
