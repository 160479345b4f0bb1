//! Wall-clock time and weekday models.
//!
//! # Time Model
//! A [`Time`] is a time of day with minute resolution. Ordering is by hour,
//! then minute. Meetings are half-open intervals `[start, end)`: two
//! meetings that touch at a boundary do not overlap.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A time of day (hour 0–23, minute 0–59).
///
/// Field order matters: the derived ordering compares `hour` first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawTime")]
pub struct Time {
    hour: u8,
    minute: u8,
}

#[derive(Deserialize)]
struct RawTime {
    hour: u32,
    minute: u32,
}

impl TryFrom<RawTime> for Time {
    type Error = Error;

    fn try_from(raw: RawTime) -> Result<Self> {
        Time::new(raw.hour, raw.minute)
    }
}

impl Time {
    /// 00:00, used as the placeholder time of TBA sections.
    pub const MIDNIGHT: Time = Time { hour: 0, minute: 0 };

    /// Creates a time, rejecting out-of-range components.
    pub fn new(hour: u32, minute: u32) -> Result<Self> {
        if hour > 23 || minute > 59 {
            return Err(Error::InvalidTime { hour, minute });
        }
        Ok(Self {
            hour: hour as u8,
            minute: minute as u8,
        })
    }

    /// Hour component (0–23).
    #[inline]
    pub fn hour(&self) -> u32 {
        u32::from(self.hour)
    }

    /// Minute component (0–59).
    #[inline]
    pub fn minute(&self) -> u32 {
        u32::from(self.minute)
    }

    /// Minutes elapsed since midnight.
    #[inline]
    pub fn minutes_since_midnight(&self) -> u32 {
        self.hour() * 60 + self.minute()
    }

    /// Fractional hours since midnight (10:30 → 10.5), for grid layout.
    pub fn as_fractional_hours(&self) -> f64 {
        f64::from(self.hour) + f64::from(self.minute) / 60.0
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// A teaching day. Weekend meetings do not occur in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
}

impl Weekday {
    /// All weekdays in calendar order.
    pub const ALL: [Weekday; 5] = [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
    ];

    /// Three-letter name, also the serialized form.
    pub fn short_name(&self) -> &'static str {
        match self {
            Weekday::Mon => "Mon",
            Weekday::Tue => "Tue",
            Weekday::Wed => "Wed",
            Weekday::Thu => "Thu",
            Weekday::Fri => "Fri",
        }
    }

    /// Letter code as written in catalog time strings (`Th` for Thursday).
    pub fn letter_code(&self) -> &'static str {
        match self {
            Weekday::Mon => "M",
            Weekday::Tue => "T",
            Weekday::Wed => "W",
            Weekday::Thu => "Th",
            Weekday::Fri => "F",
        }
    }

    /// Parses a three-letter name (`"Mon"`…`"Fri"`).
    pub fn from_short_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.short_name() == name)
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_bounds() {
        assert!(Time::new(23, 59).is_ok());
        assert!(Time::new(0, 0).is_ok());
        assert!(matches!(
            Time::new(24, 0),
            Err(Error::InvalidTime { hour: 24, minute: 0 })
        ));
        assert!(Time::new(10, 60).is_err());
    }

    #[test]
    fn test_time_ordering() {
        let a = Time::new(9, 59).unwrap();
        let b = Time::new(10, 0).unwrap();
        let c = Time::new(10, 30).unwrap();
        assert!(a < b);
        assert!(b < c);
        assert_eq!(b.max(a), b);
    }

    #[test]
    fn test_fractional_hours() {
        let t = Time::new(10, 30).unwrap();
        assert!((t.as_fractional_hours() - 10.5).abs() < 1e-10);
        assert_eq!(t.minutes_since_midnight(), 630);
        assert_eq!(Time::MIDNIGHT.as_fractional_hours(), 0.0);
    }

    #[test]
    fn test_time_display() {
        assert_eq!(Time::new(8, 5).unwrap().to_string(), "08:05");
        assert_eq!(Time::new(21, 50).unwrap().to_string(), "21:50");
    }

    #[test]
    fn test_time_serde_validates() {
        let t: Time = serde_json::from_str(r#"{"hour":14,"minute":30}"#).unwrap();
        assert_eq!(t, Time::new(14, 30).unwrap());

        let bad = serde_json::from_str::<Time>(r#"{"hour":30,"minute":0}"#);
        assert!(bad.is_err());
    }

    #[test]
    fn test_weekday_names() {
        assert_eq!(Weekday::Thu.letter_code(), "Th");
        assert_eq!(Weekday::from_short_name("Wed"), Some(Weekday::Wed));
        assert_eq!(Weekday::from_short_name("Sat"), None);
        assert_eq!(serde_json::to_string(&Weekday::Fri).unwrap(), r#""Fri""#);
    }
}
