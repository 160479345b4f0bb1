//! Course model.
//!
//! A `Course` here is one course-section pairing, not the abstract catalog
//! course: a catalog course with a lecture and three tutorials becomes four
//! `Course` records sharing the same `code`.

use serde::{Deserialize, Serialize};

use super::Section;

/// One schedulable (course, section) pairing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Course {
    /// Subject and catalog number, e.g. `"CS 136"`.
    pub code: String,
    /// Human-readable title.
    pub title: String,
    /// The section this record schedules.
    pub section: Section,
    /// Academic term identifier, e.g. `"1261"`.
    pub term: String,
    /// Credit units as printed by the catalog, e.g. `"0.50"`.
    pub units: String,
}

impl Course {
    /// Creates a course record for the given code and section.
    pub fn new(code: impl Into<String>, section: Section) -> Self {
        Self {
            code: code.into(),
            title: String::new(),
            section,
            term: String::new(),
            units: String::new(),
        }
    }

    /// Sets the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the term.
    pub fn with_term(mut self, term: impl Into<String>) -> Self {
        self.term = term.into();
        self
    }

    /// Sets the units.
    pub fn with_units(mut self, units: impl Into<String>) -> Self {
        self.units = units.into();
        self
    }

    /// Component type of the section (`"LEC"`, `"TUT"`, ...).
    pub fn component_type(&self) -> &str {
        self.section.component_type()
    }

    /// Units as a number, if the catalog text parses.
    pub fn units_value(&self) -> Option<f64> {
        self.units.trim().parse().ok()
    }
}
