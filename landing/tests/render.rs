//! Rendering tests for the prerendered landing page.

#![cfg(feature = "ssr")]

use bella_core::{FEATURE_CARDS, LandingConfig};
use bella_landing::{current_year, render_page};
use pretty_assertions::assert_eq;

fn default_page() -> String {
    render_page(&LandingConfig::default())
}

#[test]
fn renders_complete_document() {
    let html = default_page();

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<html"));
    assert!(html.contains("<body"));
}

#[test]
fn renders_exactly_four_cards_in_order() {
    let html = default_page();

    assert_eq!(html.matches(r#"class="feature-card""#).count(), 4);

    let positions: Vec<usize> = ["Women", "Men", "Accessories", "New Arrivals"]
        .iter()
        .map(|title| {
            html.find(&format!(">{title}<"))
                .unwrap_or_else(|| panic!("card {title} not rendered"))
        })
        .collect();
    let mut sorted = positions.clone();
    sorted.sort_unstable();
    assert_eq!(positions, sorted);
}

#[test]
fn renders_card_content() {
    let html = default_page();
    for card in &FEATURE_CARDS {
        assert!(html.contains(card.description), "missing {}", card.title);
        assert!(html.contains(card.icon), "missing icon for {}", card.title);
    }
}

#[test]
fn renders_in_page_anchors() {
    let html = default_page();

    assert!(html.contains(r##"href="#cta""##));
    assert!(html.contains(r#"id="cta""#));
    assert!(html.contains(r##"href="#form""##));
    assert!(html.contains(r#"id="form""#));
}

#[test]
fn renders_email_form_in_initial_state() {
    let html = default_page();

    assert!(html.contains("<form"));
    assert!(html.contains(r#"type="email""#));
    assert!(html.contains("required"));
    assert!(html.contains(r#"placeholder="Your email address""#));
    assert!(html.contains(r#"aria-label="Email address""#));
    assert!(html.contains(r#"type="submit""#));

    assert!(!html.contains("Please enter a valid email address."));
    assert!(!html.contains(r#"class="form-success""#));
    assert!(!html.contains(r#"class="form-error""#));
}

#[test]
fn renders_static_copy() {
    let html = default_page();

    for text in [
        "Where Style Meets Soul.",
        "Join the Movement",
        "About Bella",
        "Be the First to Know",
        "Subscribe Now",
        "Explore Our Collections",
        "Stay in the Loop",
    ] {
        assert!(html.contains(text), "missing {text:?}");
    }
}

#[test]
fn footer_shows_current_year() {
    let html = default_page();
    let line = format!("© {} Bella. All rights reserved.", current_year());
    assert!(html.contains(&line));
}
