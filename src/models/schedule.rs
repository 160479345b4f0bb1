//! Generated schedule (solution) model.
//!
//! A generated schedule is one complete, internally conflict-free
//! timetable: exactly one section per required (course, component type)
//! slot. It is produced by the generator and never mutated afterwards.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::{Course, Section, Weekday};
use crate::conflict::sections_overlap;

/// A complete timetable produced by the generator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GeneratedSchedule {
    courses: Vec<Course>,
}

impl GeneratedSchedule {
    /// Wraps a list of chosen course records.
    pub fn new(courses: Vec<Course>) -> Self {
        Self { courses }
    }

    /// The chosen course records, in selection order.
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// Consumes the schedule, returning its course records.
    pub fn into_courses(self) -> Vec<Course> {
        self.courses
    }

    /// Canonical encoding used to suppress visually identical results.
    ///
    /// Each section contributes `code-component-days-start-end` (days in
    /// Mon→Fri order); the per-section parts are sorted and joined with
    /// `|`, so selection order does not matter.
    pub fn signature(&self) -> String {
        signature_of(self.courses.iter())
    }

    /// Distinct course codes in first-appearance order.
    pub fn course_codes(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.courses
            .iter()
            .map(|c| c.code.as_str())
            .filter(|code| seen.insert(*code))
            .collect()
    }

    /// Whether any section of `code` is included.
    pub fn contains_code(&self, code: &str) -> bool {
        self.courses.iter().any(|c| c.code == code)
    }

    /// Course records meeting on `day`, ordered by start time.
    pub fn sections_on(&self, day: Weekday) -> Vec<&Course> {
        let mut on_day: Vec<&Course> = self
            .courses
            .iter()
            .filter(|c| c.section.meets_on(day))
            .collect();
        on_day.sort_by_key(|c| (c.section.start, c.section.end));
        on_day
    }

    /// Sum of parseable units, counting each course code once.
    pub fn total_units(&self) -> f64 {
        let mut seen = HashSet::new();
        self.courses
            .iter()
            .filter(|c| seen.insert(c.code.as_str()))
            .filter_map(|c| c.units_value())
            .sum()
    }

    /// Whether no two chosen sections overlap.
    pub fn is_conflict_free(&self) -> bool {
        let sections: Vec<&Section> = self.courses.iter().map(|c| &c.section).collect();
        sections
            .iter()
            .enumerate()
            .all(|(i, a)| sections[i + 1..].iter().all(|b| !sections_overlap(a, b)))
    }

    /// Number of chosen sections.
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    /// Whether the schedule is empty.
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}

pub(crate) fn signature_of<'a>(courses: impl Iterator<Item = &'a Course>) -> String {
    let mut parts: Vec<String> = courses
        .map(|c| {
            let mut days = c.section.days.clone();
            days.sort();
            let days: String = days.iter().map(|d| d.short_name()).collect();
            format!(
                "{}-{}-{}-{}-{}",
                c.code,
                c.component_type(),
                days,
                c.section.start,
                c.section.end
            )
        })
        .collect();
    parts.sort();
    parts.join("|")
}
