use dioxus::prelude::*;

use crate::core::{dates, storage};
use crate::shelf::{shelf_entries, ProductList};

use super::use_active_child_id;

#[component]
pub fn Shelf() -> Element {
    let _lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = _lang_code.as_ref().map(|s| s()).unwrap_or_default();

    let active_child = use_active_child_id();

    let products = use_resource(move || {
        let child = active_child();
        async move {
            let child_id = child.flatten()?;
            let key = storage::scoped_key("shelf", &child_id);
            Some(storage::fetch_or_cache(&key, api::fetch_shelf(child_id)).await)
        }
    });

    rsx! {
        div { style: "display:none", "{_lang_marker}" }
        section { class: "page page-shelf",
            h1 { {crate::t!("page-shelf-title")} }
            p { {crate::t!("page-shelf-intro")} }

            if let Some(Some(result)) = products() {
                {render_shelf(result)}
            } else {
                p { class: "page__placeholder", "Loading shelf…" }
            }
        }
    }
}

fn render_shelf(result: Result<(Vec<api::ProductRow>, Option<String>), String>) -> Element {
    match result {
        Ok((rows, stale_since)) => {
            let (entries, dropped) = shelf_entries(&rows, dates::today());
            if dropped > 0 {
                eprintln!("[shelf] {dropped} products without a usable expiry state");
            }
            rsx! {
                if let Some(since) = stale_since {
                    div { class: "page__stale", "Offline — showing data from {since}." }
                }
                ProductList { entries }
            }
        }
        Err(err) => rsx! {
            div { class: "page__error", "⚠️ Couldn't load the shelf: {err}" }
        },
    }
}
