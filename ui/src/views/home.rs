use dioxus::prelude::*;
use time::Date;

use crate::core::streak::{self, StreakPolicy};
use crate::core::{dates, format, storage};
use crate::routine::{completion_dates, DayPlan};

use super::resolve_child;

/// Everything the home screen needs for one child, fetched in one go.
/// `stale_since` carries the cache snapshot's age when the backend was
/// unreachable and the rows came from the last-known-good cache.
#[derive(Debug, Clone, PartialEq)]
struct HomeData {
    child_id: String,
    routines: Vec<api::RoutineRow>,
    completions: Vec<api::CompletionRow>,
    stale_since: Option<String>,
}

#[component]
pub fn Home() -> Element {
    // Subscribe to global language code (if provided) so we re-render on change.
    let _lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = _lang_code.as_ref().map(|s| s()).unwrap_or_default();

    let mut active_child = use_signal(storage::active_child_id);
    let children = use_resource(|| async { api::fetch_children().await });

    let home_data = use_resource(move || {
        let selected = active_child();
        let roster = children();
        async move {
            let roster = match roster {
                Some(Ok(roster)) => roster,
                Some(Err(err)) => return Some(Err(err.to_string())),
                None => return None,
            };
            let child_id = resolve_child(selected, &roster)?;

            let routines_key = storage::scoped_key("routines", &child_id);
            let (routines, routines_stale) =
                match storage::fetch_or_cache(&routines_key, api::fetch_routines(child_id.clone()))
                    .await
                {
                    Ok(outcome) => outcome,
                    Err(err) => return Some(Err(err)),
                };
            let completions_key = storage::scoped_key("completions", &child_id);
            let (completions, completions_stale) = match storage::fetch_or_cache(
                &completions_key,
                api::fetch_completions(child_id.clone()),
            )
            .await
            {
                Ok(outcome) => outcome,
                Err(err) => return Some(Err(err)),
            };

            Some(Ok(HomeData {
                child_id,
                routines,
                completions,
                stale_since: routines_stale.or(completions_stale),
            }))
        }
    });

    let roster = match children() {
        Some(Ok(roster)) => roster,
        _ => Vec::new(),
    };
    // Mirror the resolved fallback in the picker so the UI and the data
    // agree even before a selection was ever persisted.
    let picker_value = resolve_child(active_child(), &roster).unwrap_or_default();
    let data = home_data().flatten();

    rsx! {
        section { class: "page page-home",
            div { style: "display:none", "{_lang_marker}" }
            h1 { {crate::t!("home-title")} }
            p { {crate::t!("home-tagline-short")} }

            if roster.len() > 1 {
                div { class: "page-home__picker",
                    label { r#for: "child-select", {crate::t!("home-child-label")} }
                    select {
                        id: "child-select",
                        value: "{picker_value}",
                        oninput: move |evt| {
                            let id = evt.value();
                            if let Err(err) = storage::set_active_child_id(&id) {
                                eprintln!("[home] couldn't persist child selection: {err}");
                            }
                            active_child.set(Some(id));
                        },
                        { roster.iter().map(|child| {
                            let id = child.id.clone();
                            let name = child.name.clone();
                            rsx! {
                                option { key: "{id}", value: "{id}", "{name}" }
                            }
                        })}
                    }
                }
            }

            if let Some(result) = data {
                {render_summary(result)}
            } else {
                p { class: "page-home__placeholder", "Loading…" }
            }
        }
    }
}

fn render_summary(result: Result<HomeData, String>) -> Element {
    let data = match result {
        Ok(data) => data,
        Err(err) => {
            return rsx! {
                div { class: "page-home__error", "⚠️ Couldn't reach the backend: {err}" }
            }
        }
    };

    let today = dates::today();
    let hour = dates::current_hour();
    let plan = DayPlan::from_rows(&data.routines, &data.completions, today);

    // The home badge forgives a day that simply hasn't been logged yet.
    let (days, dropped) = completion_dates(&data.completions);
    if dropped > 0 {
        eprintln!("[home] dropped {dropped} completions with malformed dates");
    }
    let summary = streak::compute(&days, today, StreakPolicy::GraceYesterday);
    let streak_label = format::format_streak(summary.current);
    let longest_label = format::format_days(summary.longest);

    let next = plan.next_up(hour);
    let next_card = match next {
        Some(segment) => {
            let seg = plan.segment(segment);
            let progress = seg.progress().unwrap_or_default();
            let title = seg.title.clone().unwrap_or_default();
            rsx! {
                div { class: "next-up",
                    span { class: "next-up__kicker", {crate::t!("home-next-up")} }
                    span { class: "next-up__segment", "{segment}" }
                    span { class: "next-up__title", "{title}" }
                    span { class: "next-up__count",
                        "{progress.completed_steps}/{progress.total_steps} steps done"
                    }
                }
            }
        }
        None => rsx! {
            div { class: "next-up next-up--empty",
                span { {crate::t!("home-no-routines")} }
            }
        },
    };

    rsx! {
        div { class: "page-home__summary",
            if let Some(since) = data.stale_since {
                div { class: "page__stale", "Offline — showing data from {since}." }
            }

            {next_card}

            div { class: "streak-badge",
                span { class: "streak-badge__current", "{streak_label}" }
                span { class: "streak-badge__longest", "Longest: {longest_label}" }
            }

            {render_activity(&days)}
        }
    }
}

/// Per-day completion counts, most recent day first, capped for display.
fn activity_digest(days: &[Date]) -> Vec<(Date, usize)> {
    let mut days = days.to_vec();
    days.sort_unstable_by(|a, b| b.cmp(a));

    let mut per_day: Vec<(Date, usize)> = Vec::new();
    for day in days {
        match per_day.last_mut() {
            Some((d, count)) if *d == day => *count += 1,
            _ => per_day.push((day, 1)),
        }
    }
    per_day.truncate(5);
    per_day
}

/// Most-recent-first digest of completion days.
fn render_activity(days: &[Date]) -> Element {
    let per_day = activity_digest(days);

    rsx! {
        div { class: "activity-feed",
            h2 { {crate::t!("home-activity-title")} }
            if per_day.is_empty() {
                p { class: "activity-feed__placeholder", "No steps logged yet." }
            } else {
                ul {
                    for (day, count) in per_day.into_iter() {
                        {
                            let badge = format::format_date_badge(day);
                            let steps = if count == 1 { "1 step".to_string() } else { format!("{count} steps") };
                            rsx! {
                                li { key: "{badge}",
                                    span { class: "activity-feed__date", "{badge}" }
                                    span { class: "activity-feed__count", "{steps} logged" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn digest_counts_per_day_newest_first() {
        let days = [
            date!(2026 - 08 - 27),
            date!(2026 - 08 - 29),
            date!(2026 - 08 - 29),
            date!(2026 - 08 - 28),
        ];
        let digest = activity_digest(&days);
        assert_eq!(
            digest,
            vec![
                (date!(2026 - 08 - 29), 2),
                (date!(2026 - 08 - 28), 1),
                (date!(2026 - 08 - 27), 1),
            ]
        );
    }

    #[test]
    fn digest_is_capped_at_five_days() {
        let days: Vec<Date> = (0..8)
            .map(|n| date!(2026 - 08 - 01) + time::Duration::days(n))
            .collect();
        let digest = activity_digest(&days);
        assert_eq!(digest.len(), 5);
        assert_eq!(digest[0].0, date!(2026 - 08 - 08));
    }

    #[test]
    fn empty_history_yields_an_empty_digest() {
        assert!(activity_digest(&[]).is_empty());
    }
}
