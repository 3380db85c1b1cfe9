//! Ingredient safety tiers and client-side catalog filtering.

use std::fmt;
use std::str::FromStr;

use super::CoreError;

/// Safety classification of an ingredient for young skin. Ordering is by
/// severity: `Avoid` sorts before `Caution` sorts before `Safe`, so the
/// scariest matches surface first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SafetyTier {
    Avoid,
    Caution,
    Safe,
}

impl SafetyTier {
    pub fn css_class(self) -> &'static str {
        match self {
            SafetyTier::Safe => "tier-badge--safe",
            SafetyTier::Caution => "tier-badge--caution",
            SafetyTier::Avoid => "tier-badge--avoid",
        }
    }
}

impl fmt::Display for SafetyTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SafetyTier::Safe => "safe",
            SafetyTier::Caution => "caution",
            SafetyTier::Avoid => "avoid",
        })
    }
}

impl FromStr for SafetyTier {
    type Err = CoreError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "safe" => Ok(SafetyTier::Safe),
            "caution" => Ok(SafetyTier::Caution),
            "avoid" => Ok(SafetyTier::Avoid),
            other => Err(CoreError::InvalidArgument(format!(
                "unknown safety tier {other:?}"
            ))),
        }
    }
}

/// A catalog entry after boundary validation.
#[derive(Debug, Clone, PartialEq)]
pub struct IngredientEntry {
    pub name: String,
    pub tier: SafetyTier,
    pub note: Option<String>,
}

/// Validate raw catalog rows, dropping entries with unknown tiers.
/// Returns the validated entries plus the dropped count for logging.
pub fn from_rows(rows: &[api::IngredientRow]) -> (Vec<IngredientEntry>, usize) {
    let mut entries = Vec::with_capacity(rows.len());
    let mut dropped = 0usize;
    for row in rows {
        match row.tier.parse::<SafetyTier>() {
            Ok(tier) => entries.push(IngredientEntry {
                name: row.name.clone(),
                tier,
                note: row.note.clone(),
            }),
            Err(_) => dropped += 1,
        }
    }
    (entries, dropped)
}

/// Case-insensitive substring filter over the catalog, sorted by tier
/// severity (worst first) then name. An empty query returns the whole
/// catalog in that order.
pub fn filter_catalog(catalog: &[IngredientEntry], query: &str) -> Vec<IngredientEntry> {
    let needle = query.trim().to_lowercase();
    let mut matches: Vec<IngredientEntry> = catalog
        .iter()
        .filter(|entry| needle.is_empty() || entry.name.to_lowercase().contains(&needle))
        .cloned()
        .collect();
    matches.sort_by(|a, b| a.tier.cmp(&b.tier).then_with(|| a.name.cmp(&b.name)));
    matches
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, tier: SafetyTier) -> IngredientEntry {
        IngredientEntry {
            name: name.into(),
            tier,
            note: None,
        }
    }

    fn catalog() -> Vec<IngredientEntry> {
        vec![
            entry("Glycerin", SafetyTier::Safe),
            entry("Fragrance (parfum)", SafetyTier::Avoid),
            entry("Salicylic acid", SafetyTier::Caution),
            entry("Zinc oxide", SafetyTier::Safe),
        ]
    }

    #[test]
    fn matching_is_case_insensitive() {
        let hits = filter_catalog(&catalog(), "FRAG");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Fragrance (parfum)");
    }

    #[test]
    fn results_sort_worst_tier_first_then_name() {
        let hits = filter_catalog(&catalog(), "");
        let names: Vec<&str> = hits.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(
            names,
            ["Fragrance (parfum)", "Salicylic acid", "Glycerin", "Zinc oxide"]
        );
    }

    #[test]
    fn unknown_tiers_are_dropped_at_the_boundary() {
        let rows = vec![
            api::IngredientRow {
                name: "Glycerin".into(),
                tier: "safe".into(),
                note: None,
            },
            api::IngredientRow {
                name: "Mystery goo".into(),
                tier: "sparkly".into(),
                note: None,
            },
        ];
        let (entries, dropped) = from_rows(&rows);
        assert_eq!(entries.len(), 1);
        assert_eq!(dropped, 1);
    }

    #[test]
    fn tier_round_trips_through_table_value() {
        for tier in [SafetyTier::Safe, SafetyTier::Caution, SafetyTier::Avoid] {
            assert_eq!(tier.to_string().parse::<SafetyTier>().unwrap(), tier);
        }
        assert!("spicy".parse::<SafetyTier>().is_err());
    }
}
