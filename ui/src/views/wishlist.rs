use dioxus::prelude::*;

use crate::core::storage;
use crate::wishlist::{group_items, WishlistGroups};

#[component]
pub fn Wishlist() -> Element {
    let _lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = _lang_code.as_ref().map(|s| s()).unwrap_or_default();

    let wishlist = use_resource(|| async {
        storage::fetch_or_cache("wishlist", api::fetch_wishlist()).await
    });

    rsx! {
        div { style: "display:none", "{_lang_marker}" }
        section { class: "page page-wishlist",
            h1 { {crate::t!("page-wishlist-title")} }
            p { {crate::t!("page-wishlist-intro")} }

            if let Some(result) = wishlist() {
                {render_wishlist(result)}
            } else {
                p { class: "page__placeholder", "Loading wishlist…" }
            }
        }
    }
}

fn render_wishlist(result: Result<(Vec<api::WishlistItemRow>, Option<String>), String>) -> Element {
    match result {
        Ok((rows, stale_since)) => {
            let groups = group_items(&rows);
            rsx! {
                if let Some(since) = stale_since {
                    div { class: "page__stale", "Offline — showing data from {since}." }
                }
                WishlistGroups { groups }
            }
        }
        Err(err) => rsx! {
            div { class: "page__error", "⚠️ Couldn't load the wishlist: {err}" }
        },
    }
}
