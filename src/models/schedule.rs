// ============================================================================
// JSON Parsing Functions
// ============================================================================
//
// Persistence is owned by an external store; the contract here is that a
// schedule read back from storage must be re-validated before it is trusted.
// These functions deserialize a schedule blob and replay every window through
// the editor, so a loaded schedule is indistinguishable from one built by a
// sequence of successful editor calls.

use crate::api::Schedule;
use crate::services::editor;
use anyhow::{Context, Result};

/// Parse and re-validate a schedule from a JSON string.
///
/// The raw lists are never trusted: the timezone and every window are pushed
/// back through the editor's validation, so stale or hand-edited storage
/// cannot smuggle in an empty name, an empty day set, a zero-length time
/// range, or an unknown timezone. Window identities present in the blob are
/// preserved; windows without one receive a fresh identifier.
pub fn parse_schedule_json_str(schedule_json: &str) -> Result<Schedule> {
    let input: Schedule = serde_json::from_str(schedule_json)
        .context("Failed to deserialize schedule JSON")?;

    let mut schedule = editor::set_timezone(&Schedule::default(), &input.timezone)
        .context("Stored schedule has an invalid timezone")?;

    for window in input
        .migration_windows
        .into_iter()
        .chain(input.blackout_windows)
    {
        let name = window.name.clone();
        schedule = editor::add_window(&schedule, window)
            .with_context(|| format!("Stored window '{}' failed validation", name))?;
    }

    Ok(schedule)
}
