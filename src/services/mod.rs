//! Service layer for schedule evaluation, conflict detection, and editing.
//!
//! Every function in this layer is pure: it reads an immutable `Schedule`
//! snapshot and either returns a value or a fresh schedule, never mutating
//! its input. Multiple callers may evaluate the same snapshot concurrently.

pub mod clock;

pub mod editor;

pub mod evaluator;

pub mod overlap;

pub use clock::{expand, localize, DaySpan, LocalPoint};
pub use editor::{add_window, edit_window, remove_window, set_timezone, WindowPatch};
pub use evaluator::evaluate;
pub use overlap::{
    day_timeline, detect_overlaps, OverlapReport, OverlapSeverity, TimelineLabel,
    TimelineSegment, WindowOverlap,
};
