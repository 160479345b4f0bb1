//! Catalog ingestion.
//!
//! Converts catalog documents (one per course offering, each carrying its
//! class rows) into [`Course`] records. Time strings go through
//! [`parse_time_date`]; rows whose time cannot be parsed become TBA
//! sections so they stay selectable.
//!
//! # Document Shape
//!
//! ```json
//! {
//!   "subject": "CS", "catalog": "136", "title": "Elementary Algorithm Design",
//!   "term": "1261", "units": "0.50",
//!   "sections": [
//!     {"class": "5821", "component": "LEC 001", "time_date": "10:00-11:20TTh", "location": "MC 2065"}
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::models::{Course, Section, Wishlist};
use crate::parser::parse_time_date;

/// One class row of a catalog document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionRecord {
    /// Raw meeting string, e.g. `"02:30-03:20MWF05/05-07/30"`.
    pub time_date: String,
    /// Room, possibly blank.
    pub location: String,
    /// Component descriptor, e.g. `"TUT 101"`.
    pub component: String,
    /// Class number.
    #[serde(rename = "class")]
    pub class_number: String,
}

/// One course offering as stored in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogDocument {
    /// Subject, e.g. `"CS"`.
    pub subject: String,
    /// Catalog number, e.g. `"136"`.
    pub catalog: String,
    /// Course title.
    pub title: String,
    /// Term identifier.
    pub term: String,
    /// Credit units as printed.
    pub units: String,
    /// Class rows.
    pub sections: Vec<SectionRecord>,
}

impl CatalogDocument {
    /// Course code, `"{subject} {catalog}"`.
    pub fn code(&self) -> String {
        format!("{} {}", self.subject.trim(), self.catalog.trim())
    }

    /// Expands the document into one `Course` per class row.
    ///
    /// # Errors
    /// - [`Error::Catalog`] if subject or catalog number is blank.
    /// - [`Error::InvertedTimeRange`] if a row parses to days with
    ///   `start >= end`.
    pub fn into_courses(self) -> Result<Vec<Course>> {
        if self.subject.trim().is_empty() || self.catalog.trim().is_empty() {
            return Err(Error::Catalog {
                document: self.code(),
                message: "subject and catalog number are required".to_string(),
            });
        }

        let code = self.code();
        let mut courses = Vec::with_capacity(self.sections.len());
        for record in self.sections {
            let section = match parse_time_date(&record.time_date) {
                Some(meeting) => {
                    if !meeting.days.is_empty() && meeting.start >= meeting.end {
                        return Err(Error::InvertedTimeRange {
                            code,
                            class_number: record.class_number,
                            start: meeting.start.to_string(),
                            end: meeting.end.to_string(),
                        });
                    }
                    Section::new(record.class_number, record.component)
                        .with_meeting(meeting.days, meeting.start, meeting.end)
                        .with_location(record.location)
                }
                None => {
                    warn!(
                        code = %code,
                        class = %record.class_number,
                        time_date = %record.time_date,
                        "unparseable meeting time, treating section as TBA"
                    );
                    Section::tba(record.class_number, record.component, record.location)
                }
            };

            courses.push(
                Course::new(code.clone(), section)
                    .with_title(self.title.clone())
                    .with_term(self.term.clone())
                    .with_units(self.units.clone()),
            );
        }
        Ok(courses)
    }
}

/// Course records for a single term.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    term: String,
    courses: Vec<Course>,
    rejected: usize,
}

impl Catalog {
    /// Builds a catalog from documents, keeping only those of `term`.
    ///
    /// A document that cannot be converted is logged and skipped; the rest
    /// of the catalog still loads. See [`rejected`](Self::rejected).
    pub fn from_documents(documents: impl IntoIterator<Item = CatalogDocument>, term: &str) -> Self {
        let mut catalog = Self {
            term: term.to_string(),
            ..Self::default()
        };
        let mut other_terms = 0usize;

        for document in documents {
            if document.term != term {
                other_terms += 1;
                continue;
            }
            let code = document.code();
            match document.into_courses() {
                Ok(courses) => {
                    debug!(code = %code, sections = courses.len(), "loaded catalog document");
                    catalog.courses.extend(courses);
                }
                Err(e) => {
                    warn!(code = %code, error = %e, "skipping catalog document");
                    catalog.rejected += 1;
                }
            }
        }

        debug!(
            term,
            courses = catalog.courses.len(),
            other_terms,
            rejected = catalog.rejected,
            "catalog loaded"
        );
        catalog
    }

    /// Parses a JSON array of catalog documents and keeps those of `term`.
    ///
    /// Each document is decoded on its own: one with missing or mistyped
    /// fields is logged and counted in [`rejected`](Self::rejected), then
    /// skipped. Only input that is not a JSON array is an error.
    pub fn from_json(json: &str, term: &str) -> Result<Self> {
        let values: Vec<Value> = serde_json::from_str(json)?;

        let mut undecodable = 0usize;
        let mut decoded = Vec::with_capacity(values.len());
        for (index, value) in values.into_iter().enumerate() {
            // A broken document of another term would have been filtered anyway.
            let other_term = value
                .get("term")
                .and_then(Value::as_str)
                .is_some_and(|t| t != term);
            match serde_json::from_value::<CatalogDocument>(value) {
                Ok(document) => decoded.push(document),
                Err(_) if other_term => {}
                Err(e) => {
                    warn!(index, error = %e, "skipping undecodable catalog document");
                    undecodable += 1;
                }
            }
        }

        let mut catalog = Self::from_documents(decoded, term);
        catalog.rejected += undecodable;
        Ok(catalog)
    }

    /// Term this catalog was loaded for.
    pub fn term(&self) -> &str {
        &self.term
    }

    /// All course records, in document order.
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// Documents of the right term that failed to decode or convert.
    pub fn rejected(&self) -> usize {
        self.rejected
    }

    /// Records matching `query` by code (spaces and case ignored, so
    /// `"cs136"` finds `"CS 136"`) or by title substring (case-insensitive).
    /// A blank query returns everything.
    pub fn search(&self, query: &str) -> Vec<&Course> {
        let query = query.trim();
        if query.is_empty() {
            return self.courses.iter().collect();
        }
        let compact_query = compact(query);
        let lower_query = query.to_lowercase();

        self.courses
            .iter()
            .filter(|c| {
                compact(&c.code).contains(&compact_query)
                    || c.title.to_lowercase().contains(&lower_query)
            })
            .collect()
    }

    /// All records grouped by code, in first-appearance order.
    pub fn group_by_code(&self) -> Wishlist {
        Wishlist::from_courses(self.courses.iter().cloned())
    }

    /// Every record of `code`.
    pub fn sections_for(&self, code: &str) -> Vec<Course> {
        self.courses
            .iter()
            .filter(|c| c.code == code)
            .cloned()
            .collect()
    }
}

fn compact(s: &str) -> String {
    s.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}
