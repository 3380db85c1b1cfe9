use dioxus::prelude::*;

use crate::core::ingredients::{filter_catalog, from_rows, IngredientEntry};
use crate::core::storage;

#[component]
pub fn Ingredients() -> Element {
    let _lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = _lang_code.as_ref().map(|s| s()).unwrap_or_default();

    let mut query = use_signal(String::new);

    let catalog = use_resource(|| async {
        storage::fetch_or_cache("ingredients", api::fetch_ingredients())
            .await
            .map(|(rows, stale_since)| {
                let (entries, dropped) = from_rows(&rows);
                if dropped > 0 {
                    eprintln!("[ingredients] dropped {dropped} rows with unknown tiers");
                }
                (entries, stale_since)
            })
    });

    rsx! {
        div { style: "display:none", "{_lang_marker}" }
        section { class: "page page-ingredients",
            h1 { {crate::t!("page-ingredients-title")} }
            p { {crate::t!("page-ingredients-intro")} }

            div { class: "ingredient-search",
                label {
                    class: "visually-hidden",
                    r#for: "ingredient-query",
                    {crate::t!("ingredients-search-label")}
                }
                input {
                    id: "ingredient-query",
                    r#type: "search",
                    placeholder: "e.g. fragrance",
                    value: "{query}",
                    oninput: move |evt| query.set(evt.value()),
                }
            }

            if let Some(result) = catalog() {
                {render_matches(result, &query())}
            } else {
                p { class: "page__placeholder", "Loading catalog…" }
            }
        }
    }
}

fn render_matches(
    result: Result<(Vec<IngredientEntry>, Option<String>), String>,
    query: &str,
) -> Element {
    let (catalog, stale_since) = match result {
        Ok(catalog) => catalog,
        Err(err) => {
            return rsx! {
                div { class: "page__error", "⚠️ Couldn't load the catalog: {err}" }
            }
        }
    };

    let matches = filter_catalog(&catalog, query);

    rsx! {
        if let Some(since) = stale_since {
            div { class: "page__stale", "Offline — showing data from {since}." }
        }
        if matches.is_empty() {
            p { class: "page__placeholder", "No ingredients match that search." }
        } else {
            ul { class: "ingredient-list",
                for entry in matches.into_iter() {
                    {
                        let tier_class = format!("tier-badge {}", entry.tier.css_class());
                        let tier_label = entry.tier.to_string();
                        rsx! {
                            li { key: "{entry.name}", class: "ingredient-row",
                                span { class: "{tier_class}", "{tier_label}" }
                                span { class: "ingredient-row__name", "{entry.name}" }
                                if let Some(note) = entry.note.as_ref() {
                                    span { class: "ingredient-row__note", "{note}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
