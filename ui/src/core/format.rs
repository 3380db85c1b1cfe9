//! Formatting helpers for presenting core results.

use time::{macros::format_description, Date};

pub fn format_percent(fraction: f64) -> String {
    format!("{:.0}%", fraction.clamp(0.0, 1.0) * 100.0)
}

pub fn format_days(days: u32) -> String {
    if days == 1 {
        "1 day".to_string()
    } else {
        format!("{days} days")
    }
}

pub fn format_streak(current: u32) -> String {
    match current {
        0 => "No active streak".to_string(),
        1 => "1-day streak".to_string(),
        n => format!("{n}-day streak"),
    }
}

/// Compact display like `Aug 29` for activity feeds and badges.
pub fn format_date_badge(date: Date) -> String {
    date.format(&format_description!(
        "[month repr:short] [day padding:none]"
    ))
    .unwrap_or_else(|_| "—".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn percent_is_clamped_and_rounded() {
        assert_eq!(format_percent(0.254), "25%");
        assert_eq!(format_percent(1.7), "100%");
        assert_eq!(format_percent(-0.3), "0%");
    }

    #[test]
    fn day_counts_pluralise() {
        assert_eq!(format_days(1), "1 day");
        assert_eq!(format_days(15), "15 days");
    }

    #[test]
    fn streak_labels() {
        assert_eq!(format_streak(0), "No active streak");
        assert_eq!(format_streak(1), "1-day streak");
        assert_eq!(format_streak(7), "7-day streak");
    }

    #[test]
    fn date_badge_is_compact() {
        assert_eq!(format_date_badge(date!(2026 - 08 - 09)), "Aug 9");
    }
}
