//! Segment selection: which part of today's routine to surface as
//! "Next Up" on the home screen.
//!
//! The display priority of the three segments is a static function of the
//! wall-clock hour, not a configurable policy. Selection then walks that
//! order and picks the first segment with unfinished steps. A segment
//! whose routine has zero steps is never presented, even when it heads
//! the priority order.

use std::fmt;
use std::str::FromStr;

use super::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Segment {
    Morning,
    Afternoon,
    Evening,
}

impl Segment {
    pub const ALL: [Segment; 3] = [Segment::Morning, Segment::Afternoon, Segment::Evening];

    /// Raw table value for this segment.
    pub fn key(self) -> &'static str {
        match self {
            Segment::Morning => "morning",
            Segment::Afternoon => "afternoon",
            Segment::Evening => "evening",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Segment::Morning => 0,
            Segment::Afternoon => 1,
            Segment::Evening => 2,
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Segment {
    type Err = CoreError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "morning" => Ok(Segment::Morning),
            "afternoon" => Ok(Segment::Afternoon),
            "evening" => Ok(Segment::Evening),
            other => Err(CoreError::InvalidArgument(format!(
                "unknown segment {other:?}"
            ))),
        }
    }
}

/// Per-segment progress for today. `total_steps == 0` means the routine
/// exists but has no steps yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SegmentProgress {
    pub total_steps: u32,
    pub completed_steps: u32,
}

impl SegmentProgress {
    pub fn is_complete(self) -> bool {
        self.total_steps > 0 && self.completed_steps >= self.total_steps
    }
}

/// Display priority of the three segments for a given hour (0-23).
/// Always a permutation of all three.
pub fn priority_order(hour: u8) -> [Segment; 3] {
    debug_assert!(hour < 24, "hour out of range: {hour}");
    match hour {
        0..=11 => [Segment::Morning, Segment::Afternoon, Segment::Evening],
        12..=17 => [Segment::Afternoon, Segment::Evening, Segment::Morning],
        _ => [Segment::Evening, Segment::Morning, Segment::Afternoon],
    }
}

/// Pick the segment to surface as "Next Up".
///
/// `progress` yields `None` for segments with no routine. The first
/// segment in priority order with unfinished steps wins; if everything is
/// done, fall back to the first segment that has a non-empty routine (the
/// "all done for now" card still shows something concrete). Returns
/// `None` only when no segment has a routine with at least one step.
pub fn next_up(
    hour: u8,
    progress: impl Fn(Segment) -> Option<SegmentProgress>,
) -> Option<Segment> {
    let order = priority_order(hour);

    for segment in order {
        if let Some(p) = progress(segment) {
            if p.total_steps > 0 && !p.is_complete() {
                return Some(segment);
            }
        }
    }

    order
        .into_iter()
        .find(|&segment| matches!(progress(segment), Some(p) if p.total_steps > 0))
}
