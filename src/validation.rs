//! Wishlist validation.
//!
//! Checks structural integrity of a wishlist before generation. The
//! generator tolerates all of these (it skips or never picks the offending
//! entries), so validation exists to tell the user why a course produces
//! nothing. Detects:
//! - Blank course codes
//! - Codes with no sections
//! - Section records filed under another code
//! - Sections with meeting days whose start is not before the end
//! - Repeated class numbers within a code

use std::collections::HashSet;

use crate::models::Wishlist;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Course code the issue was found under.
    pub code: String,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A wishlist key is blank.
    EmptyCode,
    /// A code has no sections, so no schedule can include it.
    EmptyEntry,
    /// A section's course code differs from the key it is listed under.
    CodeMismatch,
    /// A timed section starts at or after its end.
    InvertedTimeRange,
    /// The same class number appears twice under one code.
    DuplicateSection,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, code: &str, message: impl Into<String>) -> Self {
        Self {
            kind,
            code: code.to_string(),
            message: message.into(),
        }
    }
}

/// Validates a wishlist.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_wishlist(wishlist: &Wishlist) -> ValidationResult {
    let mut errors = Vec::new();

    for (code, courses) in wishlist.iter() {
        if code.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyCode,
                code,
                "Wishlist contains a blank course code",
            ));
        }

        if courses.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyEntry,
                code,
                format!("Course '{code}' has no sections"),
            ));
        }

        let mut class_numbers = HashSet::new();
        for course in courses {
            let section = &course.section;

            if course.code != code {
                errors.push(ValidationError::new(
                    ValidationErrorKind::CodeMismatch,
                    code,
                    format!(
                        "Section {} belongs to '{}' but is listed under '{code}'",
                        section.class_number, course.code
                    ),
                ));
            }

            if !section.has_valid_range() {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InvertedTimeRange,
                    code,
                    format!(
                        "Section {} of '{code}' runs {}-{}",
                        section.class_number, section.start, section.end
                    ),
                ));
            }

            if !class_numbers.insert(section.class_number.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::DuplicateSection,
                    code,
                    format!(
                        "Class number {} appears more than once under '{code}'",
                        section.class_number
                    ),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
