//! Public API surface for the window scheduler.
//!
//! This file consolidates the data model shared by the evaluator, the
//! overlap detector, and the schedule editor. All types derive
//! Serialize/Deserialize for JSON serialization.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub use crate::models::TimeOfDay;

/// Stable window identifier.
///
/// Assigned when a window enters a schedule and preserved across edits and
/// type moves, so callers can reference a window while concurrent edits
/// reorder the lists underneath them.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WindowId(pub Uuid);

impl WindowId {
    /// Generate a fresh random identifier.
    pub fn new() -> Self {
        WindowId(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl Default for WindowId {
    fn default() -> Self {
        WindowId::new()
    }
}

impl std::fmt::Display for WindowId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Kind of recurring window.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum WindowType {
    /// Automated migrations are explicitly permitted.
    MigrationAllow,
    /// Automated migrations are explicitly prohibited; overrides any
    /// overlapping migration window.
    Blackout,
}

impl std::fmt::Display for WindowType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WindowType::MigrationAllow => write!(f, "migration"),
            WindowType::Blackout => write!(f, "blackout"),
        }
    }
}

/// Day of the week.
///
/// Crate-local enum so the configuration surface serializes the short
/// weekday names ("Mon".."Sun") regardless of the chrono version in play.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Weekday {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

impl Weekday {
    /// All seven days, Monday first.
    pub const ALL: [Weekday; 7] = [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
        Weekday::Sun,
    ];

    /// The immediately following calendar day (wraps Sunday to Monday).
    pub fn next(self) -> Weekday {
        match self {
            Weekday::Mon => Weekday::Tue,
            Weekday::Tue => Weekday::Wed,
            Weekday::Wed => Weekday::Thu,
            Weekday::Thu => Weekday::Fri,
            Weekday::Fri => Weekday::Sat,
            Weekday::Sat => Weekday::Sun,
            Weekday::Sun => Weekday::Mon,
        }
    }

    pub fn from_chrono(day: chrono::Weekday) -> Weekday {
        match day {
            chrono::Weekday::Mon => Weekday::Mon,
            chrono::Weekday::Tue => Weekday::Tue,
            chrono::Weekday::Wed => Weekday::Wed,
            chrono::Weekday::Thu => Weekday::Thu,
            chrono::Weekday::Fri => Weekday::Fri,
            chrono::Weekday::Sat => Weekday::Sat,
            chrono::Weekday::Sun => Weekday::Sun,
        }
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Weekday::Mon => "Mon",
            Weekday::Tue => "Tue",
            Weekday::Wed => "Wed",
            Weekday::Thu => "Thu",
            Weekday::Fri => "Fri",
            Weekday::Sat => "Sat",
            Weekday::Sun => "Sun",
        };
        write!(f, "{}", name)
    }
}

impl std::str::FromStr for Weekday {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mon" | "monday" => Ok(Weekday::Mon),
            "tue" | "tuesday" => Ok(Weekday::Tue),
            "wed" | "wednesday" => Ok(Weekday::Wed),
            "thu" | "thursday" => Ok(Weekday::Thu),
            "fri" | "friday" => Ok(Weekday::Fri),
            "sat" | "saturday" => Ok(Weekday::Sat),
            "sun" | "sunday" => Ok(Weekday::Sun),
            other => Err(format!("unknown weekday name '{}'", other)),
        }
    }
}

/// One recurring weekly window rule.
///
/// A window is active on each listed day between `start_time` and
/// `end_time`. When `end_time` precedes `start_time` the window wraps past
/// midnight: it runs from `start_time` on the listed day through `end_time`
/// on the following calendar day, whether or not that day is itself listed.
/// Equal start and end denote a zero-length window that never matches; a
/// full day is expressed as 00:00-23:59.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Window {
    /// Stable identity (server-assigned; fresh one generated when absent).
    #[serde(default)]
    pub id: WindowId,
    /// Operator-facing display name (non-empty, not required to be unique).
    pub name: String,
    /// Permission or prohibition.
    pub window_type: WindowType,
    /// Weekdays the rule is anchored to (non-empty, normalized).
    pub days: Vec<Weekday>,
    /// First active minute of the day.
    pub start_time: TimeOfDay,
    /// Last active minute of the day (inclusive).
    pub end_time: TimeOfDay,
}

impl Window {
    /// Create a window with a fresh identifier and normalized day set.
    pub fn new(
        name: impl Into<String>,
        window_type: WindowType,
        days: Vec<Weekday>,
        start_time: TimeOfDay,
        end_time: TimeOfDay,
    ) -> Self {
        Window {
            id: WindowId::new(),
            name: name.into(),
            window_type,
            days: normalize_days(days),
            start_time,
            end_time,
        }
    }

    /// True when the window crosses midnight into the next calendar day.
    pub fn is_wrapping(&self) -> bool {
        self.end_time < self.start_time
    }

    /// Lightweight reference for verdicts, reports, and error messages.
    pub fn to_ref(&self) -> WindowRef {
        WindowRef {
            id: self.id,
            name: self.name.clone(),
            window_type: self.window_type,
        }
    }
}

/// Sort Monday-first and collapse duplicate weekday entries.
pub fn normalize_days(mut days: Vec<Weekday>) -> Vec<Weekday> {
    days.sort();
    days.dedup();
    days
}

/// Reference to a window by identity, used in operator-facing output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowRef {
    pub id: WindowId,
    pub name: String,
    pub window_type: WindowType,
}

impl From<&Window> for WindowRef {
    fn from(window: &Window) -> Self {
        window.to_ref()
    }
}

impl std::fmt::Display for WindowRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.name.is_empty() {
            write!(f, "{} window {}", self.window_type, self.id)
        } else {
            write!(f, "{} window '{}'", self.window_type, self.name)
        }
    }
}

/// Full window configuration for one automation target.
///
/// List order carries no evaluation semantics; it only drives display. The
/// single IANA timezone applies to every window in both lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    #[serde(default)]
    pub migration_windows: Vec<Window>,
    #[serde(default)]
    pub blackout_windows: Vec<Window>,
    /// IANA timezone identifier, e.g. "America/New_York".
    pub timezone: String,
}

impl Schedule {
    /// Empty schedule in the given timezone.
    ///
    /// The identifier is not validated here; use the editor's
    /// `set_timezone` when the value comes from user input.
    pub fn new(timezone: impl Into<String>) -> Self {
        Schedule {
            migration_windows: Vec::new(),
            blackout_windows: Vec::new(),
            timezone: timezone.into(),
        }
    }

    /// Iterate over every window, migration list first.
    pub fn windows(&self) -> impl Iterator<Item = &Window> {
        self.migration_windows
            .iter()
            .chain(self.blackout_windows.iter())
    }

    /// Look up a window in either list by identity.
    pub fn find_window(&self, id: WindowId) -> Option<&Window> {
        self.windows().find(|w| w.id == id)
    }

    /// True when no windows of either kind are configured.
    pub fn is_empty(&self) -> bool {
        self.migration_windows.is_empty() && self.blackout_windows.is_empty()
    }
}

impl Default for Schedule {
    fn default() -> Self {
        Schedule::new("UTC")
    }
}

/// Why a verdict came out the way it did.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerdictReason {
    /// No migration windows configured; permitted outside blackouts.
    NoWindowsConfigured,
    /// The instant falls inside a migration window.
    InsideMigrationWindow,
    /// Migration windows exist but none is active at the instant.
    OutsideMigrationWindow,
    /// The instant falls inside a blackout window (always wins).
    InsideBlackoutWindow,
}

/// Evaluation result for one instant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    pub permitted: bool,
    pub reason: VerdictReason,
    /// The window that determined the verdict, when one did.
    pub matched_window: Option<WindowRef>,
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.reason, &self.matched_window) {
            (VerdictReason::NoWindowsConfigured, _) => {
                write!(f, "permitted (no migration windows configured)")
            }
            (VerdictReason::InsideMigrationWindow, Some(w)) => {
                write!(f, "permitted by {}", w)
            }
            (VerdictReason::InsideBlackoutWindow, Some(w)) => {
                write!(f, "blocked by {}", w)
            }
            (VerdictReason::OutsideMigrationWindow, _) => {
                write!(f, "blocked (outside all migration windows)")
            }
            // Matched-window variants always carry a reference; this arm
            // only renders hand-built verdicts.
            (reason, None) => write!(f, "{:?}", reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_window(window_type: WindowType) -> Window {
        Window::new(
            "Nightly",
            window_type,
            vec![Weekday::Mon, Weekday::Tue],
            TimeOfDay::new(22, 0).unwrap(),
            TimeOfDay::new(6, 0).unwrap(),
        )
    }

    #[test]
    fn test_window_id_unique() {
        assert_ne!(WindowId::new(), WindowId::new());
    }

    #[test]
    fn test_weekday_next_wraps() {
        assert_eq!(Weekday::Fri.next(), Weekday::Sat);
        assert_eq!(Weekday::Sun.next(), Weekday::Mon);
    }

    #[test]
    fn test_weekday_from_str() {
        assert_eq!("Wed".parse::<Weekday>().unwrap(), Weekday::Wed);
        assert_eq!("saturday".parse::<Weekday>().unwrap(), Weekday::Sat);
        assert!("noday".parse::<Weekday>().is_err());
    }

    #[test]
    fn test_weekday_from_chrono() {
        assert_eq!(Weekday::from_chrono(chrono::Weekday::Sun), Weekday::Sun);
        assert_eq!(Weekday::from_chrono(chrono::Weekday::Mon), Weekday::Mon);
    }

    #[test]
    fn test_normalize_days_collapses_duplicates() {
        let days = normalize_days(vec![
            Weekday::Fri,
            Weekday::Mon,
            Weekday::Fri,
            Weekday::Mon,
        ]);
        assert_eq!(days, vec![Weekday::Mon, Weekday::Fri]);
    }

    #[test]
    fn test_window_new_normalizes_days() {
        let window = Window::new(
            "w",
            WindowType::Blackout,
            vec![Weekday::Sun, Weekday::Mon, Weekday::Sun],
            TimeOfDay::new(9, 0).unwrap(),
            TimeOfDay::new(17, 0).unwrap(),
        );
        assert_eq!(window.days, vec![Weekday::Mon, Weekday::Sun]);
    }

    #[test]
    fn test_window_is_wrapping() {
        assert!(sample_window(WindowType::MigrationAllow).is_wrapping());
        let day_window = Window::new(
            "w",
            WindowType::MigrationAllow,
            vec![Weekday::Mon],
            TimeOfDay::new(9, 0).unwrap(),
            TimeOfDay::new(17, 0).unwrap(),
        );
        assert!(!day_window.is_wrapping());
    }

    #[test]
    fn test_window_ref_display() {
        let window = sample_window(WindowType::Blackout);
        assert_eq!(window.to_ref().to_string(), "blackout window 'Nightly'");
    }

    #[test]
    fn test_schedule_find_window_in_either_list() {
        let migration = sample_window(WindowType::MigrationAllow);
        let blackout = sample_window(WindowType::Blackout);
        let schedule = Schedule {
            migration_windows: vec![migration.clone()],
            blackout_windows: vec![blackout.clone()],
            timezone: "UTC".to_string(),
        };
        assert_eq!(schedule.find_window(migration.id), Some(&migration));
        assert_eq!(schedule.find_window(blackout.id), Some(&blackout));
        assert_eq!(schedule.find_window(WindowId::new()), None);
    }

    #[test]
    fn test_schedule_is_empty() {
        assert!(Schedule::default().is_empty());
    }

    #[test]
    fn test_verdict_display_blocked() {
        let window = sample_window(WindowType::Blackout);
        let verdict = Verdict {
            permitted: false,
            reason: VerdictReason::InsideBlackoutWindow,
            matched_window: Some(window.to_ref()),
        };
        assert_eq!(verdict.to_string(), "blocked by blackout window 'Nightly'");
    }

    #[test]
    fn test_window_json_roundtrip_uses_named_fields() {
        let window = sample_window(WindowType::MigrationAllow);
        let json = serde_json::to_string(&window).unwrap();
        assert!(json.contains("\"migration_allow\""));
        assert!(json.contains("\"Mon\""));
        assert!(json.contains("\"22:00\""));
        let back: Window = serde_json::from_str(&json).unwrap();
        assert_eq!(back, window);
    }

    #[test]
    fn test_window_deserialize_without_id_gets_fresh_one() {
        let json = r#"{
            "name": "Imported",
            "window_type": "blackout",
            "days": ["Wed"],
            "start_time": "11:00",
            "end_time": "13:00"
        }"#;
        let window: Window = serde_json::from_str(json).unwrap();
        assert_eq!(window.name, "Imported");
        assert_eq!(window.window_type, WindowType::Blackout);
    }
}
