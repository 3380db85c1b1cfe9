mod list;
pub use list::ProductList;

use time::Date;

use crate::core::dates;
use crate::core::expiry::{self, ExpiryStatus};

/// A shelf product joined with its computed expiry state. `status` is
/// `None` for unopened products (nothing to count down yet).
#[derive(Debug, Clone, PartialEq)]
pub struct ShelfEntry {
    pub row: api::ProductRow,
    pub status: Option<ExpiryStatus>,
}

/// Join product rows with their expiry status as of `today`.
///
/// Rows that cannot be evaluated (malformed `opened_on`, an opening date
/// in the future, or a non-positive PAO) keep their product visible but
/// without a ring, and are counted for logging.
pub fn shelf_entries(rows: &[api::ProductRow], today: Date) -> (Vec<ShelfEntry>, usize) {
    let mut entries = Vec::with_capacity(rows.len());
    let mut dropped = 0usize;

    for row in rows {
        let status = match &row.opened_on {
            None => None,
            Some(raw) => match dates::parse_iso_date(raw) {
                Ok(opened) => {
                    let days_open = dates::days_between(opened, today);
                    if days_open < 0 {
                        dropped += 1;
                        None
                    } else {
                        match expiry::compute(row.pao_months, days_open as u32) {
                            Ok(status) => Some(status),
                            Err(_) => {
                                dropped += 1;
                                None
                            }
                        }
                    }
                }
                Err(_) => {
                    dropped += 1;
                    None
                }
            },
        };
        entries.push(ShelfEntry {
            row: row.clone(),
            status,
        });
    }

    // Most urgent first: expired and low products float to the top.
    entries.sort_by(|a, b| match (&a.status, &b.status) {
        (Some(sa), Some(sb)) => sa
            .remaining_days
            .cmp(&sb.remaining_days)
            .then_with(|| a.row.name.cmp(&b.row.name)),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => a.row.name.cmp(&b.row.name),
    });

    (entries, dropped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::expiry::ExpiryTier;
    use time::macros::date;

    const TODAY: Date = date!(2026 - 08 - 29);

    fn product(id: &str, name: &str, pao_months: f64, opened_on: Option<&str>) -> api::ProductRow {
        api::ProductRow {
            id: id.into(),
            child_id: "child".into(),
            name: name.into(),
            brand: "Brand".into(),
            pao_months,
            opened_on: opened_on.map(Into::into),
        }
    }

    #[test]
    fn opened_products_get_a_ring() {
        // Opened 45 days ago with a 2M PAO: 15 days left -> Low.
        let rows = [product("p1", "Sunscreen", 2.0, Some("2026-07-15"))];
        let (entries, dropped) = shelf_entries(&rows, TODAY);
        assert_eq!(dropped, 0);
        let status = entries[0].status.unwrap();
        assert_eq!(status.remaining_days, 15);
        assert_eq!(status.tier, ExpiryTier::Low);
    }

    #[test]
    fn unopened_products_have_no_ring() {
        let rows = [product("p1", "Balm", 6.0, None)];
        let (entries, dropped) = shelf_entries(&rows, TODAY);
        assert_eq!(dropped, 0);
        assert!(entries[0].status.is_none());
    }

    #[test]
    fn bad_rows_stay_visible_without_a_ring() {
        let rows = [
            product("p1", "Future cream", 6.0, Some("2027-01-01")),
            product("p2", "Typo cream", 6.0, Some("yesterday-ish")),
            product("p3", "Zero PAO", 0.0, Some("2026-08-01")),
        ];
        let (entries, dropped) = shelf_entries(&rows, TODAY);
        assert_eq!(entries.len(), 3);
        assert_eq!(dropped, 3);
        assert!(entries.iter().all(|e| e.status.is_none()));
    }

    #[test]
    fn most_urgent_products_sort_first() {
        let rows = [
            product("fresh", "Fresh", 6.0, Some("2026-08-20")),
            product("expired", "Expired", 1.0, Some("2026-05-01")),
            product("unopened", "Unopened", 6.0, None),
        ];
        let (entries, _) = shelf_entries(&rows, TODAY);
        let names: Vec<&str> = entries.iter().map(|e| e.row.name.as_str()).collect();
        assert_eq!(names, ["Expired", "Fresh", "Unopened"]);
    }
}
