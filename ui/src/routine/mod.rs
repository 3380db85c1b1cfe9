mod progress;
pub use progress::{completion_dates, DayPlan, SegmentPlan, StepState};

mod view;
pub use view::RoutineBoard;
