//! Permission evaluation for a single instant.

use crate::api::{Schedule, Verdict, VerdictReason};
use crate::error::Result;
use crate::services::clock::{localize, window_contains};
use chrono::{DateTime, Utc};
use tracing::debug;

/// Evaluate whether automated migration is permitted at `instant`.
///
/// Precedence, in order:
///
/// 1. Blackout windows are scanned first and short-circuit: a prohibition is
///    never silently overridden by a permission.
/// 2. An empty migration list means "always permitted" outside blackouts.
/// 3. Otherwise the instant must fall inside some migration window.
///
/// When several windows of the same kind match, the first one in list order
/// is reported as `matched_window`; that choice is cosmetic and never
/// changes `permitted` or `reason`. Fails with `InvalidTimezone` when the
/// schedule carries an unrecognized zone; the caller gets the error rather
/// than a wrong-wall-clock answer.
pub fn evaluate(schedule: &Schedule, instant: DateTime<Utc>) -> Result<Verdict> {
    let point = localize(instant, &schedule.timezone)?;

    for window in &schedule.blackout_windows {
        if window_contains(window, point) {
            let verdict = Verdict {
                permitted: false,
                reason: VerdictReason::InsideBlackoutWindow,
                matched_window: Some(window.to_ref()),
            };
            debug!(%instant, day = %point.day, minute = point.minute, %verdict, "evaluated");
            return Ok(verdict);
        }
    }

    if schedule.migration_windows.is_empty() {
        let verdict = Verdict {
            permitted: true,
            reason: VerdictReason::NoWindowsConfigured,
            matched_window: None,
        };
        debug!(%instant, day = %point.day, minute = point.minute, %verdict, "evaluated");
        return Ok(verdict);
    }

    for window in &schedule.migration_windows {
        if window_contains(window, point) {
            let verdict = Verdict {
                permitted: true,
                reason: VerdictReason::InsideMigrationWindow,
                matched_window: Some(window.to_ref()),
            };
            debug!(%instant, day = %point.day, minute = point.minute, %verdict, "evaluated");
            return Ok(verdict);
        }
    }

    let verdict = Verdict {
        permitted: false,
        reason: VerdictReason::OutsideMigrationWindow,
        matched_window: None,
    };
    debug!(%instant, day = %point.day, minute = point.minute, %verdict, "evaluated");
    Ok(verdict)
}
