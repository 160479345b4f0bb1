//! Section (meeting pattern) model.
//!
//! A section is the smallest schedulable unit: one component of a course
//! (a lecture, tutorial, lab, ...) meeting on a set of weekdays between a
//! start and an end time.
//!
//! # TBA Sections
//! A section with no meeting days has no fixed time ("TBA" or online). It
//! never conflicts with anything and is always includable.

use serde::{Deserialize, Serialize};

use super::{Time, Weekday};

/// One schedulable meeting pattern of a course.
///
/// Invariant: if `days` is non-empty, `start < end`.
/// [`validate_wishlist`](crate::validation::validate_wishlist) reports
/// sections that break it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Section {
    /// Class (section) number, e.g. `"4567"`.
    pub class_number: String,
    /// Component descriptor, e.g. `"LEC 001"` or `"TUT 101"`.
    pub component: String,
    /// Meeting days, in the order the catalog lists them. Empty = TBA.
    pub days: Vec<Weekday>,
    /// Meeting start (inclusive).
    pub start: Time,
    /// Meeting end (exclusive).
    pub end: Time,
    /// Room or building, `"TBA"` when unknown.
    pub location: String,
}

impl Section {
    /// Creates a section with no meeting time yet.
    pub fn new(class_number: impl Into<String>, component: impl Into<String>) -> Self {
        Self {
            class_number: class_number.into(),
            component: component.into(),
            days: Vec::new(),
            start: Time::MIDNIGHT,
            end: Time::MIDNIGHT,
            location: String::new(),
        }
    }

    /// Creates a TBA placeholder: no days, 00:00–00:00, location
    /// defaulted to `"TBA"` when blank.
    pub fn tba(
        class_number: impl Into<String>,
        component: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        let location = location.into();
        let location = if location.trim().is_empty() {
            "TBA".to_string()
        } else {
            location
        };
        Self::new(class_number, component).with_location(location)
    }

    /// Sets the meeting days and time range.
    pub fn with_meeting(mut self, days: Vec<Weekday>, start: Time, end: Time) -> Self {
        self.days = days;
        self.start = start;
        self.end = end;
        self
    }

    /// Sets the location.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// Component type: the leading token of the component descriptor
    /// (`"LEC 001"` → `"LEC"`). Empty when the descriptor is blank.
    pub fn component_type(&self) -> &str {
        self.component.split_whitespace().next().unwrap_or("")
    }

    /// Whether the section has no fixed meeting days.
    pub fn is_tba(&self) -> bool {
        self.days.is_empty()
    }

    /// Whether the section meets on `day`.
    pub fn meets_on(&self, day: Weekday) -> bool {
        self.days.contains(&day)
    }

    /// Length of a single meeting in minutes (0 for TBA or inverted ranges).
    pub fn duration_minutes(&self) -> u32 {
        if self.is_tba() {
            return 0;
        }
        self.end
            .minutes_since_midnight()
            .saturating_sub(self.start.minutes_since_midnight())
    }

    /// Whether the time-range invariant holds.
    pub fn has_valid_range(&self) -> bool {
        self.is_tba() || self.start < self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(h: u32, m: u32) -> Time {
        Time::new(h, m).unwrap()
    }

    #[test]
    fn test_section_builder() {
        let s = Section::new("4567", "LEC 001")
            .with_meeting(vec![Weekday::Tue, Weekday::Thu], t(10, 0), t(11, 20))
            .with_location("MC 2065");

        assert_eq!(s.class_number, "4567");
        assert_eq!(s.component_type(), "LEC");
        assert!(s.meets_on(Weekday::Thu));
        assert!(!s.meets_on(Weekday::Mon));
        assert_eq!(s.duration_minutes(), 80);
        assert!(s.has_valid_range());
    }

    #[test]
    fn test_component_type() {
        assert_eq!(Section::new("1", "TUT 101").component_type(), "TUT");
        assert_eq!(Section::new("1", "  LAB   2").component_type(), "LAB");
        assert_eq!(Section::new("1", "").component_type(), "");
    }

    #[test]
    fn test_tba_section() {
        let s = Section::tba("9999", "LEC 081", "  ");
        assert!(s.is_tba());
        assert_eq!(s.location, "TBA");
        assert_eq!(s.start, Time::MIDNIGHT);
        assert_eq!(s.duration_minutes(), 0);
        assert!(s.has_valid_range());

        let online = Section::tba("9998", "LEC 082", "ONLINE");
        assert_eq!(online.location, "ONLINE");
    }

    #[test]
    fn test_inverted_range() {
        let s = Section::new("1", "LEC 001").with_meeting(vec![Weekday::Mon], t(12, 0), t(11, 0));
        assert!(!s.has_valid_range());
        assert_eq!(s.duration_minutes(), 0);
    }
}
