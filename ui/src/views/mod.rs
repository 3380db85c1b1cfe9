use dioxus::prelude::*;

use crate::core::storage;

/// The child the screens should show: the persisted selection if it still
/// exists on the roster, otherwise the first child on the account.
pub(crate) fn resolve_child(selected: Option<String>, roster: &[api::ChildRow]) -> Option<String> {
    selected
        .filter(|id| roster.iter().any(|c| &c.id == id))
        .or_else(|| roster.first().map(|c| c.id.clone()))
}

pub(crate) fn use_active_child_id() -> Resource<Option<String>> {
    use_resource(|| async {
        let roster = api::fetch_children().await.ok()?;
        resolve_child(storage::active_child_id(), &roster)
    })
}

mod home;
pub use home::Home;

mod routines;
pub use routines::Routines;

mod shelf;
pub use shelf::Shelf;

mod wishlist;
pub use wishlist::Wishlist;

mod ingredients;
pub use ingredients::Ingredients;

#[cfg(test)]
mod tests {
    use super::resolve_child;

    fn roster() -> Vec<api::ChildRow> {
        vec![
            api::ChildRow {
                id: "child-a".into(),
                name: "A".into(),
                birth_year: 2018,
            },
            api::ChildRow {
                id: "child-b".into(),
                name: "B".into(),
                birth_year: 2015,
            },
        ]
    }

    #[test]
    fn valid_selection_is_kept() {
        let resolved = resolve_child(Some("child-b".into()), &roster());
        assert_eq!(resolved.as_deref(), Some("child-b"));
    }

    #[test]
    fn missing_or_stale_selection_falls_back_to_first_child() {
        assert_eq!(resolve_child(None, &roster()).as_deref(), Some("child-a"));
        assert_eq!(
            resolve_child(Some("child-gone".into()), &roster()).as_deref(),
            Some("child-a")
        );
    }

    #[test]
    fn empty_roster_resolves_to_nothing() {
        assert_eq!(resolve_child(Some("child-a".into()), &[]), None);
    }
}
