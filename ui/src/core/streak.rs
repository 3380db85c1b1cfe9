//! Consecutive-day streak calculation over completion dates.
//!
//! Input is the set of calendar days with at least one step completion
//! (duplicates per day are fine, one row per step). The result is
//! invariant to input order and duplication.
//!
//! Two anchoring policies exist because the product rule is genuinely
//! different per surface: the home badge forgives a not-yet-logged today
//! (`GraceYesterday`), while stricter surfaces can demand a completion on
//! the reference day itself (`StrictToday`). The policy is an explicit
//! parameter rather than an implicit per-call-site divergence.

use time::Date;

use super::dates::days_between;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreakPolicy {
    /// The streak is alive only if the most recent completion is `today`.
    StrictToday,
    /// The streak is alive if the most recent completion is `today` or
    /// `today - 1` (today simply hasn't been logged yet).
    GraceYesterday,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StreakSummary {
    /// Length of the run ending at the anchor day, 0 if the run is broken.
    pub current: u32,
    /// Longest consecutive-day run anywhere in the history.
    pub longest: u32,
    /// Most recent completion day, if any.
    pub last: Option<Date>,
}

/// Compute current and longest streaks from completion days.
pub fn compute(dates: &[Date], today: Date, policy: StreakPolicy) -> StreakSummary {
    let mut unique = dates.to_vec();
    unique.sort_unstable_by(|a, b| b.cmp(a));
    unique.dedup();

    let Some(&most_recent) = unique.first() else {
        return StreakSummary::default();
    };

    let anchored = match policy {
        StreakPolicy::StrictToday => most_recent == today,
        StreakPolicy::GraceYesterday => {
            let gap = days_between(most_recent, today);
            (0..=1).contains(&gap)
        }
    };

    let current = if anchored {
        let mut run = 1u32;
        for pair in unique.windows(2) {
            if days_between(pair[1], pair[0]) == 1 {
                run += 1;
            } else {
                break;
            }
        }
        run
    } else {
        0
    };

    let mut longest = 1u32;
    let mut run = 1u32;
    for pair in unique.windows(2) {
        if days_between(pair[1], pair[0]) == 1 {
            run += 1;
            longest = longest.max(run);
        } else {
            run = 1;
        }
    }

    StreakSummary {
        current,
        longest,
        last: Some(most_recent),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::{macros::date, Duration};

    const TODAY: Date = date!(2026 - 08 - 29);

    fn day(offset: i64) -> Date {
        TODAY - Duration::days(offset)
    }

    #[test]
    fn empty_history_is_all_zeros() {
        let s = compute(&[], TODAY, StreakPolicy::StrictToday);
        assert_eq!(s, StreakSummary::default());
        assert!(s.last.is_none());
    }

    #[test]
    fn single_completion_today() {
        let s = compute(&[TODAY], TODAY, StreakPolicy::StrictToday);
        assert_eq!(s.current, 1);
        assert_eq!(s.longest, 1);
        assert_eq!(s.last, Some(TODAY));
    }

    #[test]
    fn single_old_completion_has_no_current_streak() {
        let s = compute(&[day(5)], TODAY, StreakPolicy::GraceYesterday);
        assert_eq!(s.current, 0);
        assert_eq!(s.longest, 1);
        assert_eq!(s.last, Some(day(5)));
    }

    #[test]
    fn run_with_a_gap() {
        // today, -1, -2, then a gap, then -5.
        let dates = [TODAY, day(1), day(2), day(5)];
        let s = compute(&dates, TODAY, StreakPolicy::StrictToday);
        assert_eq!(s.current, 3);
        assert_eq!(s.longest, 3);
    }

    #[test]
    fn longest_run_can_be_in_the_past() {
        let dates = [TODAY, day(4), day(5), day(6), day(7)];
        let s = compute(&dates, TODAY, StreakPolicy::StrictToday);
        assert_eq!(s.current, 1);
        assert_eq!(s.longest, 4);
    }

    #[test]
    fn policies_diverge_when_last_completion_was_yesterday() {
        let dates = [day(1), day(2), day(3)];
        let strict = compute(&dates, TODAY, StreakPolicy::StrictToday);
        let grace = compute(&dates, TODAY, StreakPolicy::GraceYesterday);
        assert_eq!(strict.current, 0);
        assert_eq!(grace.current, 3);
        assert_eq!(strict.longest, 3);
        assert_eq!(grace.longest, 3);
    }

    #[test]
    fn order_and_duplicates_do_not_matter() {
        let shuffled = [day(2), TODAY, day(1), TODAY, day(2), day(5)];
        let sorted = [TODAY, day(1), day(2), day(5)];
        assert_eq!(
            compute(&shuffled, TODAY, StreakPolicy::StrictToday),
            compute(&sorted, TODAY, StreakPolicy::StrictToday)
        );
    }

    #[test]
    fn two_day_grace_is_not_enough() {
        let s = compute(&[day(2), day(3)], TODAY, StreakPolicy::GraceYesterday);
        assert_eq!(s.current, 0);
        assert_eq!(s.longest, 2);
    }
}
