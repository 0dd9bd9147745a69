use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Minutes in a full day; the exclusive upper bound of the minute axis.
pub const MINUTES_PER_DAY: u16 = 24 * 60;

/// Parse failure for a time-of-day string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid time of day '{input}', expected zero-padded HH:MM")]
pub struct TimeOfDayParseError {
    pub input: String,
}

/// Wall-clock minute of day in `[0, 1439]`.
///
/// Serializes as a zero-padded `"HH:MM"` string, matching the configuration
/// surface handed to operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    /// 00:00, the first minute of the day.
    pub const MIDNIGHT: TimeOfDay = TimeOfDay(0);
    /// 23:59, the last minute of the day.
    pub const END_OF_DAY: TimeOfDay = TimeOfDay(MINUTES_PER_DAY - 1);

    /// Create from hour and minute components.
    pub fn new(hour: u32, minute: u32) -> Option<Self> {
        if hour <= 23 && minute <= 59 {
            Some(TimeOfDay((hour * 60 + minute) as u16))
        } else {
            None
        }
    }

    /// Create from a raw minute-of-day value.
    pub fn from_minutes(minutes: u16) -> Option<Self> {
        if minutes < MINUTES_PER_DAY {
            Some(TimeOfDay(minutes))
        } else {
            None
        }
    }

    /// Minute-of-day value.
    pub fn minutes(&self) -> u16 {
        self.0
    }

    pub fn hour(&self) -> u16 {
        self.0 / 60
    }

    pub fn minute(&self) -> u16 {
        self.0 % 60
    }
}

impl std::fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl std::str::FromStr for TimeOfDay {
    type Err = TimeOfDayParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || TimeOfDayParseError {
            input: s.to_string(),
        };
        // Strict zero-padded "HH:MM".
        let (hh, mm) = match s.split_once(':') {
            Some((hh, mm)) if hh.len() == 2 && mm.len() == 2 => (hh, mm),
            _ => return Err(err()),
        };
        let hour: u32 = hh.parse().map_err(|_| err())?;
        let minute: u32 = mm.parse().map_err(|_| err())?;
        TimeOfDay::new(hour, minute).ok_or_else(err)
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = TimeOfDayParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TimeOfDay> for String {
    fn from(value: TimeOfDay) -> Self {
        value.to_string()
    }
}

/// Render a minute boundary on the `[0, 1440]` axis, where 1440 is the
/// exclusive end of day shown as "24:00".
pub fn format_minute_bound(minutes: u16) -> String {
    if minutes >= MINUTES_PER_DAY {
        "24:00".to_string()
    } else {
        format!("{:02}:{:02}", minutes / 60, minutes % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_valid() {
        let t = TimeOfDay::new(9, 30).unwrap();
        assert_eq!(t.minutes(), 570);
        assert_eq!(t.hour(), 9);
        assert_eq!(t.minute(), 30);
    }

    #[test]
    fn test_new_rejects_out_of_range() {
        assert!(TimeOfDay::new(24, 0).is_none());
        assert!(TimeOfDay::new(0, 60).is_none());
    }

    #[test]
    fn test_from_minutes_bounds() {
        assert_eq!(TimeOfDay::from_minutes(1439), Some(TimeOfDay::END_OF_DAY));
        assert!(TimeOfDay::from_minutes(1440).is_none());
    }

    #[test]
    fn test_constants() {
        assert_eq!(TimeOfDay::MIDNIGHT.to_string(), "00:00");
        assert_eq!(TimeOfDay::END_OF_DAY.to_string(), "23:59");
    }

    #[test]
    fn test_display_zero_padded() {
        assert_eq!(TimeOfDay::new(7, 5).unwrap().to_string(), "07:05");
    }

    #[test]
    fn test_parse_valid() {
        assert_eq!(
            "22:00".parse::<TimeOfDay>().unwrap(),
            TimeOfDay::new(22, 0).unwrap()
        );
        assert_eq!(
            "00:00".parse::<TimeOfDay>().unwrap(),
            TimeOfDay::MIDNIGHT
        );
    }

    #[test]
    fn test_parse_rejects_unpadded_and_garbage() {
        assert!("9:00".parse::<TimeOfDay>().is_err());
        assert!("09:0".parse::<TimeOfDay>().is_err());
        assert!("24:00".parse::<TimeOfDay>().is_err());
        assert!("09:61".parse::<TimeOfDay>().is_err());
        assert!("0900".parse::<TimeOfDay>().is_err());
        assert!("".parse::<TimeOfDay>().is_err());
    }

    #[test]
    fn test_ordering() {
        assert!(TimeOfDay::new(6, 0).unwrap() < TimeOfDay::new(22, 0).unwrap());
    }

    #[test]
    fn test_serde_as_string() {
        let t = TimeOfDay::new(17, 0).unwrap();
        let json = serde_json::to_string(&t).unwrap();
        assert_eq!(json, "\"17:00\"");
        let back: TimeOfDay = serde_json::from_str(&json).unwrap();
        assert_eq!(back, t);
    }

    #[test]
    fn test_serde_rejects_invalid_string() {
        let parsed: Result<TimeOfDay, _> = serde_json::from_str("\"25:00\"");
        assert!(parsed.is_err());
    }

    #[test]
    fn test_format_minute_bound() {
        assert_eq!(format_minute_bound(0), "00:00");
        assert_eq!(format_minute_bound(780), "13:00");
        assert_eq!(format_minute_bound(1440), "24:00");
    }
}
