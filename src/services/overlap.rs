//! Overlap detection and day-timeline rendering support.
//!
//! Both outputs exist purely for operator feedback: the evaluator never
//! consults them. The overlap report surfaces every pair of windows sharing
//! time on a weekday; the timeline view projects one weekday onto labeled
//! 24-hour segments using the same blackout-wins precedence the evaluator
//! applies, so the rendered picture and the runtime decision cannot
//! disagree.

use crate::api::{Schedule, Weekday, Window, WindowRef};
use crate::models::{format_minute_bound, MINUTES_PER_DAY};
use crate::services::clock::expand;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Severity of an overlap entry.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum OverlapSeverity {
    /// Cross-type overlap: part of a migration window is inert because the
    /// blackout wins there.
    Warning,
    /// Same-type overlap: harmless redundancy, surfaced for clarity.
    Info,
}

/// One overlapping stretch between two windows on one weekday.
///
/// Minute bounds use the raw window times as a half-open range on the
/// `[0, 1440]` axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowOverlap {
    pub first: WindowRef,
    pub second: WindowRef,
    pub day: Weekday,
    pub start_minute: u16,
    pub end_minute: u16,
    pub severity: OverlapSeverity,
}

impl WindowOverlap {
    /// Operator-facing range label, e.g. `[11:00, 13:00)`.
    pub fn range_label(&self) -> String {
        format!(
            "[{}, {})",
            format_minute_bound(self.start_minute),
            format_minute_bound(self.end_minute)
        )
    }
}

/// All pairwise window overlaps in a schedule.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OverlapReport {
    /// Entries sorted warnings-first, then by weekday and start minute.
    pub overlaps: Vec<WindowOverlap>,
}

impl OverlapReport {
    /// Number of cross-type overlaps (migration time eaten by a blackout).
    pub fn warning_count(&self) -> usize {
        self.overlaps
            .iter()
            .filter(|o| o.severity == OverlapSeverity::Warning)
            .count()
    }

    pub fn is_clean(&self) -> bool {
        self.overlaps.is_empty()
    }
}

/// Per-day pieces of a window with raw minute bounds (end exclusive).
///
/// Unlike the evaluation spans from [`expand`], these keep the window's own
/// end minute as the exclusive bound, which is the convention overlap ranges
/// are reported in.
fn raw_pieces(window: &Window) -> Vec<(Weekday, u16, u16)> {
    let start = window.start_time.minutes();
    let end = window.end_time.minutes();

    if start == end {
        return Vec::new();
    }

    let mut pieces = Vec::with_capacity(window.days.len() * 2);
    for &day in &window.days {
        if end > start {
            pieces.push((day, start, end));
        } else {
            pieces.push((day, start, MINUTES_PER_DAY));
            pieces.push((day.next(), 0, end));
        }
    }
    pieces
}

/// Deterministic ordering key for the two sides of a pair, so the report is
/// identical however the lists happen to be ordered.
fn pair_key(window: &Window) -> (crate::api::WindowType, String, String) {
    (
        window.window_type,
        window.name.clone(),
        window.id.to_string(),
    )
}

/// Find every overlapping window pair in the schedule.
///
/// Each entry covers one unordered pair of distinct windows on one shared
/// weekday where their raw minute ranges intersect. Cross-type entries carry
/// `Warning` severity: they mean part of an intended "allowed" stretch is
/// actually blocked.
pub fn detect_overlaps(schedule: &Schedule) -> OverlapReport {
    let windows: Vec<&Window> = schedule.windows().collect();
    let mut overlaps = Vec::new();

    for i in 0..windows.len() {
        for j in (i + 1)..windows.len() {
            let (mut a, mut b) = (windows[i], windows[j]);
            if pair_key(b) < pair_key(a) {
                std::mem::swap(&mut a, &mut b);
            }
            let severity = if a.window_type == b.window_type {
                OverlapSeverity::Info
            } else {
                OverlapSeverity::Warning
            };

            for &(day_a, start_a, end_a) in &raw_pieces(a) {
                for &(day_b, start_b, end_b) in &raw_pieces(b) {
                    if day_a != day_b {
                        continue;
                    }
                    let start = start_a.max(start_b);
                    let end = end_a.min(end_b);
                    if start < end {
                        overlaps.push(WindowOverlap {
                            first: a.to_ref(),
                            second: b.to_ref(),
                            day: day_a,
                            start_minute: start,
                            end_minute: end,
                            severity,
                        });
                    }
                }
            }
        }
    }

    overlaps.sort_by(|x, y| {
        (x.severity, x.day, x.start_minute, &x.first.name, &x.second.name).cmp(&(
            y.severity,
            y.day,
            y.start_minute,
            &y.first.name,
            &y.second.name,
        ))
    });

    OverlapReport { overlaps }
}

/// Label of one timeline segment.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimelineLabel {
    /// Inside a migration window and outside every blackout.
    Allowed,
    /// Inside a blackout, or outside every configured migration window.
    Blocked,
    /// No migration windows configured and no blackout active.
    Unrestricted,
}

/// One merged segment of the 24-hour axis for a single weekday.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineSegment {
    pub start_minute: u16,
    /// Exclusive end bound on the `[0, 1440]` axis.
    pub end_minute: u16,
    pub label: TimelineLabel,
    /// The window that determined the label, when one did (first in list
    /// order, matching the evaluator's tie-break).
    pub window: Option<WindowRef>,
}

/// Project one weekday onto merged, non-overlapping labeled segments.
///
/// Segments are gap-free over `[0, 1440)` and computed from the evaluation
/// spans with blackout-wins precedence, so every minute's label agrees with
/// the verdict [`crate::services::evaluate`] would return for an instant in
/// that minute: `Blocked` is exactly `permitted == false`.
pub fn day_timeline(schedule: &Schedule, day: Weekday) -> Vec<TimelineSegment> {
    let day_spans = |windows: &[Window]| -> Vec<(crate::services::clock::DaySpan, WindowRef)> {
        windows
            .iter()
            .flat_map(|w| expand(w).into_iter().map(|s| (s, w.to_ref())))
            .filter(|(s, _)| s.day == day)
            .collect()
    };
    let blackout_spans = day_spans(&schedule.blackout_windows);
    let migration_spans = day_spans(&schedule.migration_windows);

    let mut bounds = BTreeSet::from([0, MINUTES_PER_DAY]);
    for (span, _) in blackout_spans.iter().chain(migration_spans.iter()) {
        bounds.insert(span.start_minute);
        bounds.insert(span.end_minute);
    }

    let gap_label = if schedule.migration_windows.is_empty() {
        TimelineLabel::Unrestricted
    } else {
        TimelineLabel::Blocked
    };

    let cover = |spans: &[(crate::services::clock::DaySpan, WindowRef)], minute: u16| {
        spans
            .iter()
            .find(|(s, _)| s.contains(day, minute))
            .map(|(_, r)| r.clone())
    };

    let mut segments: Vec<TimelineSegment> = Vec::new();
    let bounds: Vec<u16> = bounds.into_iter().collect();
    for pair in bounds.windows(2) {
        let (start, end) = (pair[0], pair[1]);
        let (label, window) = if let Some(r) = cover(&blackout_spans, start) {
            (TimelineLabel::Blocked, Some(r))
        } else if let Some(r) = cover(&migration_spans, start) {
            (TimelineLabel::Allowed, Some(r))
        } else {
            (gap_label, None)
        };

        match segments.last_mut() {
            Some(prev)
                if prev.label == label
                    && prev.window.as_ref().map(|r| r.id) == window.as_ref().map(|r| r.id) =>
            {
                prev.end_minute = end;
            }
            _ => segments.push(TimelineSegment {
                start_minute: start,
                end_minute: end,
                label,
                window,
            }),
        }
    }
    segments
}
