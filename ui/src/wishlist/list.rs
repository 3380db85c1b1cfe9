use dioxus::prelude::*;

use crate::core::{dates, format};

use super::WishlistGroup;

#[component]
pub fn WishlistGroups(groups: Vec<WishlistGroup>) -> Element {
    rsx! {
        section { class: "wishlist-card",
            div { class: "wishlist-card__header",
                h2 { "Wishlist" }
            }

            if groups.is_empty() {
                p { class: "wishlist-card__placeholder",
                    "Nothing saved yet. Products you bookmark land here."
                }
            } else {
                for group in groups.into_iter() {
                    div { key: "{group.category}", class: "wishlist-group",
                        h3 { class: "wishlist-group__title", "{group.category}" }
                        ul { class: "wishlist-group__items",
                            for item in group.items.into_iter() {
                                {render_item(item)}
                            }
                        }
                    }
                }
            }
        }
    }
}

fn render_item(item: api::WishlistItemRow) -> Element {
    let added = dates::parse_iso_date(&item.added_on)
        .map(format::format_date_badge)
        .unwrap_or_else(|_| item.added_on.clone());

    rsx! {
        li { key: "{item.id}", class: "wishlist-item",
            span { class: "wishlist-item__name", "{item.name}" }
            span { class: "wishlist-item__brand", "{item.brand}" }
            span { class: "wishlist-item__added", "Added {added}" }
        }
    }
}
