//! Reduce remote routine and completion rows into today's per-segment
//! plan. All parsing of raw table values happens here; the selector and
//! streak logic only ever see validated types.

use std::collections::HashSet;

use time::Date;

use crate::core::dates;
use crate::core::schedule::{self, Segment, SegmentProgress};

#[derive(Debug, Clone, PartialEq)]
pub struct StepState {
    pub id: String,
    pub title: String,
    pub done: bool,
}

/// One segment's routine for today; `routine_id` is `None` when no
/// routine is assigned to the segment.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentPlan {
    pub segment: Segment,
    pub routine_id: Option<String>,
    pub title: Option<String>,
    pub steps: Vec<StepState>,
}

impl SegmentPlan {
    fn empty(segment: Segment) -> Self {
        Self {
            segment,
            routine_id: None,
            title: None,
            steps: Vec::new(),
        }
    }

    pub fn progress(&self) -> Option<SegmentProgress> {
        self.routine_id.as_ref()?;
        Some(SegmentProgress {
            total_steps: self.steps.len() as u32,
            completed_steps: self.steps.iter().filter(|s| s.done).count() as u32,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DayPlan {
    pub segments: [SegmentPlan; 3],
    /// Rows skipped at the boundary (bad segment or date values).
    pub dropped_rows: usize,
}

impl DayPlan {
    pub fn from_rows(
        routines: &[api::RoutineRow],
        completions: &[api::CompletionRow],
        today: Date,
    ) -> Self {
        let mut dropped_rows = 0usize;

        let mut done_today: HashSet<&str> = HashSet::new();
        for row in completions {
            match dates::parse_iso_date(&row.date) {
                Ok(date) if date == today => {
                    done_today.insert(row.step_id.as_str());
                }
                Ok(_) => {}
                Err(_) => dropped_rows += 1,
            }
        }

        let mut segments = Segment::ALL.map(SegmentPlan::empty);
        for routine in routines {
            let Ok(segment) = routine.segment.parse::<Segment>() else {
                dropped_rows += 1;
                continue;
            };
            let plan = &mut segments[segment.index()];
            if plan.routine_id.is_some() {
                // Segment assignment is fixed per routine; a second routine
                // for the same segment is a data problem, not a UI choice.
                dropped_rows += 1;
                continue;
            }

            let mut steps: Vec<&api::RoutineStepRow> = routine.steps.iter().collect();
            steps.sort_by_key(|s| s.position);
            plan.routine_id = Some(routine.id.clone());
            plan.title = Some(routine.title.clone());
            plan.steps = steps
                .into_iter()
                .map(|s| StepState {
                    id: s.id.clone(),
                    title: s.title.clone(),
                    done: done_today.contains(s.id.as_str()),
                })
                .collect();
        }

        Self {
            segments,
            dropped_rows,
        }
    }

    pub fn segment(&self, segment: Segment) -> &SegmentPlan {
        &self.segments[segment.index()]
    }

    pub fn progress(&self, segment: Segment) -> Option<SegmentProgress> {
        self.segment(segment).progress()
    }

    pub fn next_up(&self, hour: u8) -> Option<Segment> {
        schedule::next_up(hour, |segment| self.progress(segment))
    }
}

/// Unique completion days for the streak calculator, with the count of
/// rows dropped for malformed dates.
pub fn completion_dates(completions: &[api::CompletionRow]) -> (Vec<Date>, usize) {
    dates::parse_dates_lossy(completions.iter().map(|c| c.date.as_str()))
}
