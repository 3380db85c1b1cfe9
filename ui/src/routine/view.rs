use dioxus::prelude::*;
use futures_util::StreamExt;

use crate::core::schedule::Segment;
use crate::core::storage::CacheEnvelope;
use crate::core::{dates, format, platform, storage};

use super::progress::DayPlan;

/// Today's routine board for one child: three segment cards, the current
/// "Next Up" segment highlighted, steps toggled with a tap.
///
/// Data flow: one coroutine owns all backend traffic. A successful fetch
/// refreshes the local cache; a failed one falls back to the cached rows
/// and labels them with their age instead of wiping the screen.
#[component]
pub fn RoutineBoard(child_id: String) -> Element {
    // Cache-first: render the last-known-good plan immediately, then let
    // the initial Refresh replace it with fresh rows.
    let seed_child = child_id.clone();
    let day_plan = use_signal(move || cached_plan(&seed_child));
    let stale_since = use_signal(|| Option::<String>::None);
    let last_error = use_signal(|| Option::<String>::None);

    let coroutine = {
        let plan_ref = day_plan.clone();
        let stale_ref = stale_since.clone();
        let error_ref = last_error.clone();
        let child = child_id.clone();

        use_coroutine(move |mut rx: UnboundedReceiver<RoutineEvent>| {
            let mut plan_signal = plan_ref.clone();
            let mut stale_signal = stale_ref.clone();
            let mut error_signal = error_ref.clone();
            let child_id = child.clone();

            async move {
                while let Some(event) = rx.next().await {
                    match event {
                        RoutineEvent::Refresh => {
                            refresh(
                                &child_id,
                                &mut plan_signal,
                                &mut stale_signal,
                                &mut error_signal,
                            )
                            .await;
                        }
                        RoutineEvent::Toggle {
                            routine_id,
                            step_id,
                            done,
                        } => {
                            let date = dates::format_iso_date(dates::today());
                            let outcome = if done {
                                api::undo_completion(step_id, date).await.map(|_| ())
                            } else {
                                let row = api::CompletionRow {
                                    id: uuid::Uuid::new_v4().to_string(),
                                    child_id: child_id.clone(),
                                    routine_id,
                                    step_id,
                                    date,
                                };
                                api::record_completion(row).await.map(|_| ())
                            };

                            match outcome {
                                Ok(()) => {
                                    refresh(
                                        &child_id,
                                        &mut plan_signal,
                                        &mut stale_signal,
                                        &mut error_signal,
                                    )
                                    .await;
                                }
                                Err(err) => {
                                    error_signal.set(Some(format!("Couldn't save step: {err}")));
                                }
                            }
                        }
                    }
                }
            }
        })
    };

    use_hook(|| coroutine.send(RoutineEvent::Refresh));

    let hour = dates::current_hour();
    let today_label = format::format_date_badge(dates::today());
    let plan = day_plan();
    let next = plan.as_ref().and_then(|p| p.next_up(hour));

    rsx! {
        article { class: "routine-board",
            div { class: "routine-board__header",
                h2 { "Today · {today_label}" }
                if let Some(segment) = next {
                    span { class: "routine-board__next", "Next up: {segment}" }
                }
            }

            if let Some(since) = stale_since() {
                div { class: "routine-board__stale",
                    "Offline — showing data from {since}."
                }
            }

            if let Some(err) = last_error() {
                div { class: "routine-board__error", "⚠️ {err}" }
            }

            if let Some(plan) = plan {
                div { class: "routine-board__segments",
                    for segment in Segment::ALL {
                        {render_segment(&plan, segment, next == Some(segment), coroutine)}
                    }
                }
            } else {
                p { class: "routine-board__placeholder", "Loading today's routines…" }
            }
        }
    }
}

fn render_segment(
    plan: &DayPlan,
    segment: Segment,
    is_next: bool,
    coroutine: Coroutine<RoutineEvent>,
) -> Element {
    let seg = plan.segment(segment);
    let card_class = if is_next {
        "segment-card segment-card--next"
    } else {
        "segment-card"
    };

    let Some(routine_id) = seg.routine_id.clone() else {
        return rsx! {
            section { class: "{card_class} segment-card--empty",
                h3 { class: "segment-card__title", "{segment}" }
                p { class: "segment-card__hint", "No routine for this segment." }
            }
        };
    };

    let progress = seg.progress().unwrap_or_default();
    let title = seg.title.clone().unwrap_or_default();
    let steps = seg.steps.clone();

    rsx! {
        section { class: "{card_class}",
            h3 { class: "segment-card__title", "{segment}" }
            div { class: "segment-card__meta",
                span { "{title}" }
                span { class: "segment-card__count",
                    "{progress.completed_steps}/{progress.total_steps}"
                }
            }
            ul { class: "segment-card__steps",
                for step in steps.into_iter() {
                    {
                        let routine_id = routine_id.clone();
                        let step_id = step.id.clone();
                        let done = step.done;
                        let row_class = if done { "step-row step-row--done" } else { "step-row" };
                        rsx! {
                            li { key: "{step.id}",
                                button {
                                    r#type: "button",
                                    class: "{row_class}",
                                    onclick: move |_| coroutine.send(RoutineEvent::Toggle {
                                        routine_id: routine_id.clone(),
                                        step_id: step_id.clone(),
                                        done,
                                    }),
                                    span { class: "step-row__check",
                                        if done { "✓" } else { "" }
                                    }
                                    span { class: "step-row__title", "{step.title}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

async fn refresh(
    child_id: &str,
    plan_signal: &mut Signal<Option<DayPlan>>,
    stale_signal: &mut Signal<Option<String>>,
    error_signal: &mut Signal<Option<String>>,
) {
    match load(child_id).await {
        Ok((routines, completions)) => {
            let plan = DayPlan::from_rows(&routines, &completions, dates::today());
            if plan.dropped_rows > 0 {
                eprintln!(
                    "[routine] dropped {} malformed rows ({})",
                    plan.dropped_rows,
                    platform::platform_string()
                );
            }
            plan_signal.set(Some(plan));
            stale_signal.set(None);
            error_signal.set(None);

            let routines_key = storage::scoped_key("routines", child_id);
            let completions_key = storage::scoped_key("completions", child_id);
            platform::spawn_future(async move {
                if let Err(err) = storage::save_cache(&routines_key, &routines) {
                    eprintln!("[routine] cache write failed: {err}");
                }
                if let Err(err) = storage::save_cache(&completions_key, &completions) {
                    eprintln!("[routine] cache write failed: {err}");
                }
            });
        }
        Err(err) => {
            let cached_routines: Option<CacheEnvelope<Vec<api::RoutineRow>>> =
                storage::load_cache(&storage::scoped_key("routines", child_id)).unwrap_or(None);
            let cached_completions: Option<CacheEnvelope<Vec<api::CompletionRow>>> =
                storage::load_cache(&storage::scoped_key("completions", child_id)).unwrap_or(None);

            match (cached_routines, cached_completions) {
                (Some(routines), Some(completions)) => {
                    let plan =
                        DayPlan::from_rows(&routines.rows, &completions.rows, dates::today());
                    stale_signal.set(Some(routines.saved_at_label()));
                    plan_signal.set(Some(plan));
                    error_signal.set(None);
                }
                _ => {
                    error_signal.set(Some(format!("Couldn't load routines: {err}")));
                }
            }
        }
    }
}

async fn load(
    child_id: &str,
) -> Result<(Vec<api::RoutineRow>, Vec<api::CompletionRow>), String> {
    let routines = api::fetch_routines(child_id.to_string())
        .await
        .map_err(|err| err.to_string())?;
    let completions = api::fetch_completions(child_id.to_string())
        .await
        .map_err(|err| err.to_string())?;
    Ok((routines, completions))
}

/// Last-known-good plan for the initial render, if both cached tables
/// are present and readable.
fn cached_plan(child_id: &str) -> Option<DayPlan> {
    let routines: CacheEnvelope<Vec<api::RoutineRow>> =
        storage::load_cache(&storage::scoped_key("routines", child_id))
            .ok()
            .flatten()?;
    let completions: CacheEnvelope<Vec<api::CompletionRow>> =
        storage::load_cache(&storage::scoped_key("completions", child_id))
            .ok()
            .flatten()?;
    Some(DayPlan::from_rows(
        &routines.rows,
        &completions.rows,
        dates::today(),
    ))
}

#[derive(Debug, Clone)]
enum RoutineEvent {
    Refresh,
    Toggle {
        routine_id: String,
        step_id: String,
        done: bool,
    },
}
