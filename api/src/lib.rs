//! Typed backend boundary for Sproutglow.
//!
//! Every remote table the app reads is modelled as an explicit row struct
//! here; screens never see untyped payloads. The server functions run
//! against a seeded in-process store so all platform targets work end to
//! end without a hosted backend. Swapping the store for real table queries
//! changes only the function bodies, not the row contracts.

use dioxus::prelude::*;
use serde::{Deserialize, Serialize};

/// A child profile managed by the signed-in parent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChildRow {
    pub id: String,
    pub name: String,
    pub birth_year: i32,
}

/// A routine assigned to one child and one segment of the day.
///
/// `segment` is the raw table value (`"morning"`, `"afternoon"`,
/// `"evening"`); the UI parses it into its own enum at the boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutineRow {
    pub id: String,
    pub child_id: String,
    pub segment: String,
    pub title: String,
    pub steps: Vec<RoutineStepRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutineStepRow {
    pub id: String,
    pub routine_id: String,
    pub title: String,
    pub position: u32,
}

/// One step marked done on one calendar day (`date` is `YYYY-MM-DD`).
/// Several rows may exist for the same day, one per completed step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionRow {
    pub id: String,
    pub child_id: String,
    pub routine_id: String,
    pub step_id: String,
    pub date: String,
}

/// A product on a child's shelf. `opened_on` is `None` until the parent
/// records opening it; `pao_months` is the manufacturer's period-after-
/// opening figure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRow {
    pub id: String,
    pub child_id: String,
    pub name: String,
    pub brand: String,
    pub pao_months: f64,
    pub opened_on: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WishlistItemRow {
    pub id: String,
    pub name: String,
    pub brand: String,
    pub category: String,
    pub added_on: String,
}

/// One entry of the ingredient-safety catalog. `tier` is the raw table
/// value (`"safe"`, `"caution"`, `"avoid"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientRow {
    pub name: String,
    pub tier: String,
    pub note: Option<String>,
}

#[server]
pub async fn fetch_children() -> Result<Vec<ChildRow>, ServerFnError> {
    Ok(store::with(|s| s.children.clone()))
}

#[server]
pub async fn fetch_routines(child_id: String) -> Result<Vec<RoutineRow>, ServerFnError> {
    Ok(store::with(|s| {
        s.routines
            .iter()
            .filter(|r| r.child_id == child_id)
            .cloned()
            .collect()
    }))
}

#[server]
pub async fn fetch_completions(child_id: String) -> Result<Vec<CompletionRow>, ServerFnError> {
    Ok(store::with(|s| {
        s.completions
            .iter()
            .filter(|c| c.child_id == child_id)
            .cloned()
            .collect()
    }))
}

/// Persist a step completion. Idempotent per (step, date): recording the
/// same step twice on one day keeps a single row.
#[server]
pub async fn record_completion(row: CompletionRow) -> Result<CompletionRow, ServerFnError> {
    Ok(store::with(|s| {
        if let Some(existing) = s
            .completions
            .iter()
            .find(|c| c.step_id == row.step_id && c.date == row.date)
        {
            existing.clone()
        } else {
            s.completions.push(row.clone());
            row
        }
    }))
}

/// Undo a completion by step and date (the natural key the UI holds).
#[server]
pub async fn undo_completion(step_id: String, date: String) -> Result<(), ServerFnError> {
    store::with(|s| {
        s.completions
            .retain(|c| !(c.step_id == step_id && c.date == date));
    });
    Ok(())
}

#[server]
pub async fn fetch_shelf(child_id: String) -> Result<Vec<ProductRow>, ServerFnError> {
    Ok(store::with(|s| {
        s.products
            .iter()
            .filter(|p| p.child_id == child_id)
            .cloned()
            .collect()
    }))
}

#[server]
pub async fn fetch_wishlist() -> Result<Vec<WishlistItemRow>, ServerFnError> {
    Ok(store::with(|s| s.wishlist.clone()))
}

#[server]
pub async fn fetch_ingredients() -> Result<Vec<IngredientRow>, ServerFnError> {
    Ok(store::with(|s| s.ingredients.clone()))
}

/// Seeded in-process store standing in for the remote tables.
#[allow(dead_code)]
mod store {
    use super::*;
    use once_cell::sync::Lazy;
    use std::sync::Mutex;
    use time::{macros::format_description, Duration, OffsetDateTime};

    pub(super) struct Store {
        pub children: Vec<ChildRow>,
        pub routines: Vec<RoutineRow>,
        pub completions: Vec<CompletionRow>,
        pub products: Vec<ProductRow>,
        pub wishlist: Vec<WishlistItemRow>,
        pub ingredients: Vec<IngredientRow>,
    }

    static STORE: Lazy<Mutex<Store>> = Lazy::new(|| Mutex::new(seed()));

    pub(super) fn with<T>(f: impl FnOnce(&mut Store) -> T) -> T {
        let mut guard = STORE.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        f(&mut guard)
    }

    fn iso(date: time::Date) -> String {
        date.format(&format_description!("[year]-[month]-[day]"))
            .unwrap_or_default()
    }

    fn days_ago(days: i64) -> String {
        iso((OffsetDateTime::now_utc() - Duration::days(days)).date())
    }

    fn step(id: &str, routine_id: &str, title: &str, position: u32) -> RoutineStepRow {
        RoutineStepRow {
            id: id.into(),
            routine_id: routine_id.into(),
            title: title.into(),
            position,
        }
    }

    fn completion(id: &str, routine_id: &str, step_id: &str, date: String) -> CompletionRow {
        CompletionRow {
            id: id.into(),
            child_id: "child-mila".into(),
            routine_id: routine_id.into(),
            step_id: step_id.into(),
            date,
        }
    }

    fn seed() -> Store {
        let children = vec![
            ChildRow {
                id: "child-mila".into(),
                name: "Mila".into(),
                birth_year: 2018,
            },
            ChildRow {
                id: "child-theo".into(),
                name: "Theo".into(),
                birth_year: 2015,
            },
        ];

        let routines = vec![
            RoutineRow {
                id: "rt-mila-am".into(),
                child_id: "child-mila".into(),
                segment: "morning".into(),
                title: "Morning glow-up".into(),
                steps: vec![
                    step("st-am-1", "rt-mila-am", "Rinse with warm water", 1),
                    step("st-am-2", "rt-mila-am", "Gentle cleanser", 2),
                    step("st-am-3", "rt-mila-am", "Sunscreen SPF 50", 3),
                ],
            },
            RoutineRow {
                id: "rt-mila-pm".into(),
                child_id: "child-mila".into(),
                segment: "evening".into(),
                title: "Wind-down".into(),
                steps: vec![
                    step("st-pm-1", "rt-mila-pm", "Cleanser", 1),
                    step("st-pm-2", "rt-mila-pm", "Moisturiser", 2),
                ],
            },
            RoutineRow {
                id: "rt-theo-am".into(),
                child_id: "child-theo".into(),
                segment: "morning".into(),
                title: "Quick start".into(),
                steps: vec![
                    step("st-theo-1", "rt-theo-am", "Face wash", 1),
                    step("st-theo-2", "rt-theo-am", "Sunscreen", 2),
                ],
            },
        ];

        // Three-day running streak for Mila plus an older burst, so the
        // home screen has something to show out of the box.
        let completions = vec![
            completion("cp-1", "rt-mila-am", "st-am-1", days_ago(1)),
            completion("cp-2", "rt-mila-am", "st-am-2", days_ago(1)),
            completion("cp-3", "rt-mila-pm", "st-pm-1", days_ago(1)),
            completion("cp-4", "rt-mila-am", "st-am-1", days_ago(2)),
            completion("cp-5", "rt-mila-pm", "st-pm-1", days_ago(2)),
            completion("cp-6", "rt-mila-am", "st-am-1", days_ago(3)),
            completion("cp-7", "rt-mila-am", "st-am-1", days_ago(6)),
            completion("cp-8", "rt-mila-am", "st-am-2", days_ago(7)),
        ];

        let products = vec![
            ProductRow {
                id: "pr-1".into(),
                child_id: "child-mila".into(),
                name: "Mineral sunscreen".into(),
                brand: "Sunbud".into(),
                pao_months: 6.0,
                opened_on: Some(days_ago(45)),
            },
            ProductRow {
                id: "pr-2".into(),
                child_id: "child-mila".into(),
                name: "Oat cleanser".into(),
                brand: "Mildly".into(),
                pao_months: 12.0,
                opened_on: Some(days_ago(350)),
            },
            ProductRow {
                id: "pr-3".into(),
                child_id: "child-mila".into(),
                name: "Barrier balm".into(),
                brand: "Mildly".into(),
                pao_months: 6.0,
                opened_on: None,
            },
        ];

        let wishlist = vec![
            WishlistItemRow {
                id: "wl-1".into(),
                name: "Fragrance-free lotion".into(),
                brand: "Mildly".into(),
                category: "Moisturiser".into(),
                added_on: days_ago(4),
            },
            WishlistItemRow {
                id: "wl-2".into(),
                name: "Stick sunscreen".into(),
                brand: "Sunbud".into(),
                category: "Sun care".into(),
                added_on: days_ago(1),
            },
            WishlistItemRow {
                id: "wl-3".into(),
                name: "Tinted SPF 30".into(),
                brand: "Sunbud".into(),
                category: "Sun care".into(),
                added_on: days_ago(9),
            },
        ];

        let ingredients = vec![
            IngredientRow {
                name: "Glycerin".into(),
                tier: "safe".into(),
                note: None,
            },
            IngredientRow {
                name: "Colloidal oatmeal".into(),
                tier: "safe".into(),
                note: Some("Soothing for sensitive skin".into()),
            },
            IngredientRow {
                name: "Zinc oxide".into(),
                tier: "safe".into(),
                note: Some("Preferred mineral UV filter".into()),
            },
            IngredientRow {
                name: "Salicylic acid".into(),
                tier: "caution".into(),
                note: Some("Low concentrations only for children".into()),
            },
            IngredientRow {
                name: "Sodium lauryl sulfate".into(),
                tier: "caution".into(),
                note: Some("Can strip a developing skin barrier".into()),
            },
            IngredientRow {
                name: "Fragrance (parfum)".into(),
                tier: "avoid".into(),
                note: Some("Top allergen for young skin".into()),
            },
            IngredientRow {
                name: "Retinol".into(),
                tier: "avoid".into(),
                note: Some("Not intended for pre-teen routines".into()),
            },
        ];

        Store {
            children,
            routines,
            completions,
            products,
            wishlist,
            ingredients,
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn seed_rows_reference_each_other() {
            let s = seed();
            for routine in &s.routines {
                assert!(s.children.iter().any(|c| c.id == routine.child_id));
                for step in &routine.steps {
                    assert_eq!(step.routine_id, routine.id);
                }
            }
            for completion in &s.completions {
                let routine = s
                    .routines
                    .iter()
                    .find(|r| r.id == completion.routine_id)
                    .expect("completion references a seeded routine");
                assert!(routine.steps.iter().any(|st| st.id == completion.step_id));
            }
        }

        #[test]
        fn seed_dates_are_iso() {
            let s = seed();
            for completion in &s.completions {
                assert_eq!(completion.date.len(), 10);
                assert_eq!(&completion.date[4..5], "-");
                assert_eq!(&completion.date[7..8], "-");
            }
        }
    }
}
