mod list;
pub use list::WishlistGroups;

/// Wishlist items grouped by category. Groups sort by category name;
/// items inside a group sort newest first. `added_on` is an ISO
/// `YYYY-MM-DD` string, so plain string comparison orders correctly.
#[derive(Debug, Clone, PartialEq)]
pub struct WishlistGroup {
    pub category: String,
    pub items: Vec<api::WishlistItemRow>,
}

pub fn group_items(rows: &[api::WishlistItemRow]) -> Vec<WishlistGroup> {
    let mut groups: Vec<WishlistGroup> = Vec::new();
    for row in rows {
        match groups.iter_mut().find(|g| g.category == row.category) {
            Some(group) => group.items.push(row.clone()),
            None => groups.push(WishlistGroup {
                category: row.category.clone(),
                items: vec![row.clone()],
            }),
        }
    }

    groups.sort_by(|a, b| a.category.cmp(&b.category));
    for group in &mut groups {
        group.items.sort_by(|a, b| b.added_on.cmp(&a.added_on));
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, name: &str, category: &str, added_on: &str) -> api::WishlistItemRow {
        api::WishlistItemRow {
            id: id.into(),
            name: name.into(),
            brand: "Brand".into(),
            category: category.into(),
            added_on: added_on.into(),
        }
    }

    #[test]
    fn groups_sort_by_category_and_items_newest_first() {
        let rows = [
            item("1", "Tinted SPF", "Sun care", "2026-08-20"),
            item("2", "Lotion", "Moisturiser", "2026-08-25"),
            item("3", "Stick sunscreen", "Sun care", "2026-08-28"),
        ];
        let groups = group_items(&rows);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].category, "Moisturiser");
        assert_eq!(groups[1].category, "Sun care");
        let sun: Vec<&str> = groups[1].items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(sun, ["Stick sunscreen", "Tinted SPF"]);
    }

    #[test]
    fn every_item_appears_exactly_once() {
        let rows = [
            item("1", "A", "X", "2026-08-01"),
            item("2", "B", "Y", "2026-08-02"),
            item("3", "C", "X", "2026-08-03"),
        ];
        let groups = group_items(&rows);
        let mut ids: Vec<&str> = groups
            .iter()
            .flat_map(|g| g.items.iter().map(|i| i.id.as_str()))
            .collect();
        ids.sort_unstable();
        assert_eq!(ids, ["1", "2", "3"]);
    }

    #[test]
    fn empty_input_yields_no_groups() {
        assert!(group_items(&[]).is_empty());
    }
}
