//! Validated mutation operations over schedule snapshots.
//!
//! The editor is the only sanctioned way to change a schedule. Every
//! operation takes the current snapshot by reference and returns a fresh
//! `Schedule` (or a validation error), never a partially-applied mutation:
//! a caller can keep evaluating against the old snapshot while an edit is
//! in flight, and the external store can swap the result in atomically.

use crate::api::{normalize_days, Schedule, TimeOfDay, Weekday, Window, WindowId, WindowType};
use crate::error::{Error, Result};
use chrono_tz::Tz;
use tracing::debug;

/// Partial update for one window; `None` fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WindowPatch {
    pub name: Option<String>,
    pub days: Option<Vec<Weekday>>,
    pub start_time: Option<TimeOfDay>,
    pub end_time: Option<TimeOfDay>,
    pub window_type: Option<WindowType>,
}

fn validate(window: &Window) -> Result<()> {
    if window.name.trim().is_empty() {
        return Err(Error::EmptyName {
            window: window.to_ref(),
        });
    }
    if window.days.is_empty() {
        return Err(Error::EmptyDays {
            window: window.to_ref(),
        });
    }
    // start == end is a zero-length rule that would never activate; a full
    // day is expressed as 00:00-23:59.
    if window.start_time == window.end_time {
        return Err(Error::InvalidTimeRange {
            window: window.to_ref(),
            start: window.start_time,
            end: window.end_time,
        });
    }
    Ok(())
}

fn push_window(schedule: &mut Schedule, window: Window) {
    match window.window_type {
        WindowType::MigrationAllow => schedule.migration_windows.push(window),
        WindowType::Blackout => schedule.blackout_windows.push(window),
    }
}

/// Add a window to the list matching its type.
///
/// The window is validated before insertion; its day set is normalized. The
/// window keeps the identity it carries (fresh ids come from
/// [`Window::new`]).
pub fn add_window(schedule: &Schedule, window: Window) -> Result<Schedule> {
    let mut window = window;
    window.days = normalize_days(window.days);
    validate(&window)?;

    debug!(window = %window.to_ref(), "adding window");
    let mut next = schedule.clone();
    push_window(&mut next, window);
    Ok(next)
}

/// Apply a partial update to the window with the given identity.
///
/// The patched window is re-validated as a whole before anything changes. A
/// type change is a structural move between the two lists (the window is
/// appended to its new list); other edits replace the window in place.
/// Editing an identity that is not present is a no-op, mirroring
/// [`remove_window`]'s tolerance of racing edits.
pub fn edit_window(schedule: &Schedule, id: WindowId, patch: WindowPatch) -> Result<Schedule> {
    let Some(existing) = schedule.find_window(id) else {
        return Ok(schedule.clone());
    };

    let mut updated = existing.clone();
    if let Some(name) = patch.name {
        updated.name = name;
    }
    if let Some(days) = patch.days {
        updated.days = normalize_days(days);
    }
    if let Some(start_time) = patch.start_time {
        updated.start_time = start_time;
    }
    if let Some(end_time) = patch.end_time {
        updated.end_time = end_time;
    }
    if let Some(window_type) = patch.window_type {
        updated.window_type = window_type;
    }
    validate(&updated)?;

    debug!(window = %updated.to_ref(), "editing window");
    let mut next = schedule.clone();
    if updated.window_type == existing.window_type {
        let list = match updated.window_type {
            WindowType::MigrationAllow => &mut next.migration_windows,
            WindowType::Blackout => &mut next.blackout_windows,
        };
        if let Some(slot) = list.iter_mut().find(|w| w.id == id) {
            *slot = updated;
        }
    } else {
        next.migration_windows.retain(|w| w.id != id);
        next.blackout_windows.retain(|w| w.id != id);
        push_window(&mut next, updated);
    }
    Ok(next)
}

/// Remove a window by identity.
///
/// Idempotent by reference: removing an identity that is not present
/// returns the schedule unchanged rather than erroring, since the caller UI
/// may race with concurrent edits.
pub fn remove_window(schedule: &Schedule, id: WindowId) -> Schedule {
    let mut next = schedule.clone();
    next.migration_windows.retain(|w| w.id != id);
    next.blackout_windows.retain(|w| w.id != id);
    if next.migration_windows.len() != schedule.migration_windows.len()
        || next.blackout_windows.len() != schedule.blackout_windows.len()
    {
        debug!(%id, "removed window");
    }
    next
}

/// Replace the schedule's timezone after checking it against the IANA
/// database.
pub fn set_timezone(schedule: &Schedule, timezone: &str) -> Result<Schedule> {
    timezone.parse::<Tz>().map_err(|_| Error::InvalidTimezone {
        timezone: timezone.to_string(),
    })?;
    debug!(%timezone, "setting schedule timezone");
    let mut next = schedule.clone();
    next.timezone = timezone.to_string();
    Ok(next)
}
