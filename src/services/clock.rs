//! Calendar arithmetic: UTC instants to local weekday coordinates, and
//! window rules to absolute weekly minute spans.
//!
//! Everything downstream (evaluator, overlap detector, timeline) compares
//! values in one coordinate system: `(weekday, minute-of-day)` in the
//! schedule's timezone.

use crate::api::{Weekday, Window};
use crate::error::{Error, Result};
use crate::models::MINUTES_PER_DAY;
use chrono::{DateTime, Datelike, Timelike, Utc};
use chrono_tz::Tz;

/// A UTC instant projected into a schedule's timezone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalPoint {
    pub day: Weekday,
    /// Minute of the local day in `[0, 1439]`.
    pub minute: u16,
}

/// Convert a UTC instant into local `(weekday, minute-of-day)`.
///
/// Uses the zone's offset at that instant, so evaluations on either side of
/// a DST transition land on the correct wall-clock minute. An unrecognized
/// IANA identifier fails loudly; silently defaulting to UTC would make the
/// automation act at the wrong wall-clock time.
pub fn localize(instant: DateTime<Utc>, timezone: &str) -> Result<LocalPoint> {
    let tz: Tz = timezone.parse().map_err(|_| Error::InvalidTimezone {
        timezone: timezone.to_string(),
    })?;
    let local = instant.with_timezone(&tz);
    Ok(LocalPoint {
        day: Weekday::from_chrono(local.weekday()),
        minute: (local.hour() * 60 + local.minute()) as u16,
    })
}

/// One contiguous active stretch of a window on a single weekday.
///
/// `end_minute` is exclusive on the `[0, 1440]` axis. Evaluation spans
/// include the window's end minute, so a 09:00-17:00 window still matches at
/// 17:00:30, and the 00:00-23:59 convention covers the whole day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DaySpan {
    pub day: Weekday,
    pub start_minute: u16,
    pub end_minute: u16,
}

impl DaySpan {
    /// Whether the local point falls inside this span.
    pub fn contains(&self, day: Weekday, minute: u16) -> bool {
        self.day == day && self.start_minute <= minute && minute < self.end_minute
    }
}

/// Expand a window rule into its per-weekday spans.
///
/// Non-wrapping windows emit one span per listed day. Wrapping windows emit
/// two per listed day: the evening stretch on the listed day and the
/// morning stretch on the immediately following calendar day, whether or not
/// that day is itself listed. Equal start and end is a zero-length window
/// and expands to nothing.
pub fn expand(window: &Window) -> Vec<DaySpan> {
    let start = window.start_time.minutes();
    let end = window.end_time.minutes();

    if start == end {
        return Vec::new();
    }

    let mut spans = Vec::with_capacity(window.days.len() * 2);
    for &day in &window.days {
        if end > start {
            spans.push(DaySpan {
                day,
                start_minute: start,
                end_minute: end + 1,
            });
        } else {
            spans.push(DaySpan {
                day,
                start_minute: start,
                end_minute: MINUTES_PER_DAY,
            });
            spans.push(DaySpan {
                day: day.next(),
                start_minute: 0,
                end_minute: end + 1,
            });
        }
    }
    spans
}

/// Whether a window is active at the given local point.
pub fn window_contains(window: &Window, point: LocalPoint) -> bool {
    expand(window)
        .iter()
        .any(|span| span.contains(point.day, point.minute))
}
