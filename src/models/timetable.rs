//! Manually curated timetable.
//!
//! Holds the courses a user has picked by hand. Each pick is checked
//! against the current picks with the conflict detector before it is
//! accepted.

use serde::{Deserialize, Serialize};

use super::{Course, GeneratedSchedule};
use crate::conflict::sections_overlap;

/// Result of toggling a course on a [`Timetable`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickOutcome {
    /// The course was appended.
    Added,
    /// The same record was already picked and has been removed.
    Removed,
    /// The course clashes with an existing pick and was not added.
    Conflict {
        /// Code of the first clashing pick.
        with: String,
    },
}

/// A user's hand-picked set of course sections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timetable {
    courses: Vec<Course>,
}

impl Timetable {
    /// Creates an empty timetable.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current picks.
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// Removes the course if this exact record is already picked;
    /// otherwise adds it unless it would clash with an existing pick.
    ///
    /// Other sections of the same code are left alone, so a tutorial can
    /// be swapped without dropping the lecture. Use
    /// [`remove_code`](Self::remove_code) to drop a whole course.
    pub fn toggle(&mut self, course: Course) -> PickOutcome {
        if let Some(idx) = self.courses.iter().position(|c| *c == course) {
            self.courses.remove(idx);
            return PickOutcome::Removed;
        }

        if let Some(hit) = self
            .courses
            .iter()
            .find(|c| sections_overlap(&course.section, &c.section))
        {
            return PickOutcome::Conflict {
                with: hit.code.clone(),
            };
        }

        self.courses.push(course);
        PickOutcome::Added
    }

    /// Removes every section of `code`. Returns how many were removed.
    pub fn remove_code(&mut self, code: &str) -> usize {
        let before = self.courses.len();
        self.courses.retain(|c| c.code != code);
        before - self.courses.len()
    }

    /// Whether the timetable has no picks.
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}

impl From<GeneratedSchedule> for Timetable {
    fn from(schedule: GeneratedSchedule) -> Self {
        Self {
            courses: schedule.into_courses(),
        }
    }
}
