#![cfg(test)]
//! Guards the contract between components and the shared theme: every
//! load-bearing selector the views emit must exist in the embedded CSS.

const EMBEDDED_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

const NAVBAR_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/styling/navbar.css"
));

#[test]
fn theme_covers_component_selectors() {
    let required = [
        ".next-up",
        ".streak-badge",
        ".activity-feed",
        ".segment-card--next",
        ".step-row--done",
        ".shelf-ring--fresh",
        ".shelf-ring--low",
        ".shelf-ring--expired",
        ".wishlist-item",
        ".ingredient-row",
        ".tier-badge--avoid",
        ".page__stale",
    ];
    for selector in required {
        assert!(
            EMBEDDED_CSS.contains(selector),
            "theme is missing selector `{selector}`"
        );
    }
}

#[test]
fn navbar_stylesheet_covers_navbar_selectors() {
    let required = [
        ".navbar__inner",
        ".navbar__brand",
        ".navbar__links",
        ".navbar__locale",
        ".visually-hidden",
    ];
    for selector in required {
        assert!(
            NAVBAR_CSS.contains(selector),
            "navbar stylesheet is missing selector `{selector}`"
        );
    }
}
