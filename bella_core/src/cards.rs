//! Collection cards rendered in the "Explore Our Collections" grid.

/// A static display record in the collections grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureCard {
    /// Collection name
    pub title: &'static str,
    /// One-line pitch shown under the title
    pub description: &'static str,
    /// Single glyph shown above the title
    pub icon: &'static str,
}

/// The collections, in display order.
pub const FEATURE_CARDS: [FeatureCard; 4] = [
    FeatureCard {
        title: "Women",
        description: "Elegant and modern designs for every occasion.",
        icon: "👗",
    },
    FeatureCard {
        title: "Men",
        description: "Sophisticated styles that speak confidence.",
        icon: "👔",
    },
    FeatureCard {
        title: "Accessories",
        description: "Complete your look with our curated collection.",
        icon: "👜",
    },
    FeatureCard {
        title: "New Arrivals",
        description: "Fresh drops weekly. Stay ahead of the trends.",
        icon: "🆕",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn cards_are_in_display_order() {
        let titles: Vec<_> = FEATURE_CARDS.iter().map(|c| c.title).collect();
        assert_eq!(titles, ["Women", "Men", "Accessories", "New Arrivals"]);
    }

    #[test]
    fn every_card_has_content() {
        for card in &FEATURE_CARDS {
            assert!(!card.description.is_empty(), "{} has no description", card.title);
            assert_eq!(card.icon.chars().count(), 1, "{} icon is not a single glyph", card.title);
        }
    }
}
