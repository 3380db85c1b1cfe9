use dioxus::prelude::*;

use crate::core::format;

use super::ShelfEntry;

/// Product list with the remaining-life ring per opened product.
#[component]
pub fn ProductList(entries: Vec<ShelfEntry>) -> Element {
    rsx! {
        section { class: "shelf-card",
            div { class: "shelf-card__header",
                h2 { "On the shelf" }
                if !entries.is_empty() {
                    span { class: "shelf-card__meta", "{entries.len()} products" }
                }
            }

            if entries.is_empty() {
                p { class: "shelf-card__placeholder",
                    "Products you add for this child will appear here."
                }
            } else {
                ul { class: "shelf-card__items",
                    for entry in entries.into_iter() {
                        {render_entry(entry)}
                    }
                }
            }
        }
    }
}

fn render_entry(entry: ShelfEntry) -> Element {
    let ShelfEntry { row, status } = entry;

    let (ring_class, ring_label, life_label) = match status {
        Some(status) => (
            format!("shelf-ring {}", status.tier.css_class()),
            format::format_percent(status.remaining_fraction),
            format!(
                "{} left · ~{} mo",
                format::format_days(status.remaining_days),
                status.months_left
            ),
        ),
        None => (
            "shelf-ring shelf-ring--unopened".to_string(),
            "—".to_string(),
            format!("Not opened yet · PAO {} mo", row.pao_months),
        ),
    };

    rsx! {
        li { key: "{row.id}", class: "shelf-item",
            div {
                class: "{ring_class}",
                style: "--ring-fill: {ring_label}",
                span { class: "shelf-ring__label", "{ring_label}" }
            }

            div { class: "shelf-item__body",
                span { class: "shelf-item__name", "{row.name}" }
                span { class: "shelf-item__brand", "{row.brand}" }
                span { class: "shelf-item__life", "{life_label}" }
            }
        }
    }
}
