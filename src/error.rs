//! Error types for the window scheduler.

use crate::api::WindowRef;
use crate::models::TimeOfDay;
use thiserror::Error;

/// Result type for scheduler operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the schedule editor and the evaluator.
///
/// All variants are synchronous validation failures; there is no retry
/// machinery anywhere in this crate. Variants that concern a specific window
/// carry a [`WindowRef`] so callers can point at the offending window rather
/// than a list index.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Timezone identifier is not a recognized IANA zone.
    #[error("unknown timezone identifier '{timezone}'")]
    InvalidTimezone { timezone: String },

    /// Window display name is empty.
    #[error("{window} has an empty name")]
    EmptyName { window: WindowRef },

    /// Window has no weekdays selected.
    #[error("{window} has no days selected")]
    EmptyDays { window: WindowRef },

    /// Degenerate zero-length time range (start equals end).
    #[error("{window} has a zero-length time range ({start}-{end})")]
    InvalidTimeRange {
        window: WindowRef,
        start: TimeOfDay,
        end: TimeOfDay,
    },
}
