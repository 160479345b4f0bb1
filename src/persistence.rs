//! Persisted record shapes.
//!
//! The external document store keeps flat camelCase maps and cannot hold
//! arrays of arrays, so a generated schedule is wrapped as
//! `{"courses": [...]}`. Fetching and storing documents (auth, per-user
//! paths, network) is the caller's job; this module only converts between
//! store records and domain types.
//!
//! # Documents
//!
//! | Record | Stored as |
//! |--------|-----------|
//! | `SavedTimetable` | `{"scheduledCourses": [CourseRecord]}` |
//! | `AssistantDocument` | `{"wishlist": {code: [CourseRecord]}, "generatedSchedules": [{"courses": [CourseRecord]}]}` |

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::models::{ordered_map, Course, GeneratedSchedule, Section, Time, Timetable, Weekday, Wishlist};

/// Flat store representation of a [`Course`].
///
/// Absent fields decode as empty strings and zero times, matching what
/// older documents contain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CourseRecord {
    pub code: String,
    pub title: String,
    pub term: String,
    pub units: String,
    pub class_number: String,
    pub component: String,
    /// Short day names, `"Mon"`..`"Fri"`.
    pub days: Vec<String>,
    pub start_hour: u32,
    pub start_minute: u32,
    pub end_hour: u32,
    pub end_minute: u32,
    pub location: String,
}

impl From<&Course> for CourseRecord {
    fn from(course: &Course) -> Self {
        let section = &course.section;
        Self {
            code: course.code.clone(),
            title: course.title.clone(),
            term: course.term.clone(),
            units: course.units.clone(),
            class_number: section.class_number.clone(),
            component: section.component.clone(),
            days: section.days.iter().map(|d| d.short_name().to_string()).collect(),
            start_hour: section.start.hour(),
            start_minute: section.start.minute(),
            end_hour: section.end.hour(),
            end_minute: section.end.minute(),
            location: section.location.clone(),
        }
    }
}

impl TryFrom<CourseRecord> for Course {
    type Error = Error;

    fn try_from(record: CourseRecord) -> Result<Self> {
        let days = record
            .days
            .iter()
            .map(|name| {
                Weekday::from_short_name(name).ok_or_else(|| {
                    Error::record(format!(
                        "unknown day {name:?} in section {} of {}",
                        record.class_number, record.code
                    ))
                })
            })
            .collect::<Result<Vec<_>>>()?;
        let start = Time::new(record.start_hour, record.start_minute)?;
        let end = Time::new(record.end_hour, record.end_minute)?;

        let section = Section::new(record.class_number, record.component)
            .with_meeting(days, start, end)
            .with_location(record.location);

        Ok(Course::new(record.code, section)
            .with_title(record.title)
            .with_term(record.term)
            .with_units(record.units))
    }
}

fn decode_courses(records: Vec<CourseRecord>) -> Result<Vec<Course>> {
    records.into_iter().map(Course::try_from).collect()
}

fn encode_courses(courses: &[Course]) -> Vec<CourseRecord> {
    courses.iter().map(CourseRecord::from).collect()
}

/// One generated schedule, wrapped so the store never sees nested arrays.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleRecord {
    pub courses: Vec<CourseRecord>,
}

impl From<&GeneratedSchedule> for ScheduleRecord {
    fn from(schedule: &GeneratedSchedule) -> Self {
        Self {
            courses: encode_courses(schedule.courses()),
        }
    }
}

impl TryFrom<ScheduleRecord> for GeneratedSchedule {
    type Error = Error;

    fn try_from(record: ScheduleRecord) -> Result<Self> {
        Ok(GeneratedSchedule::new(decode_courses(record.courses)?))
    }
}

/// Generation-assistant state for one term.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssistantState {
    pub wishlist: Wishlist,
    pub generated_schedules: Vec<GeneratedSchedule>,
}

impl AssistantState {
    /// Creates a state from a wishlist and the schedules generated for it.
    pub fn new(wishlist: Wishlist, generated_schedules: Vec<GeneratedSchedule>) -> Self {
        Self {
            wishlist,
            generated_schedules,
        }
    }

    /// Converts to the store document.
    pub fn to_document(&self) -> AssistantDocument {
        AssistantDocument {
            wishlist: self
                .wishlist
                .iter()
                .map(|(code, courses)| (code.to_string(), encode_courses(courses)))
                .collect(),
            generated_schedules: self
                .generated_schedules
                .iter()
                .map(ScheduleRecord::from)
                .collect(),
        }
    }

    /// Serializes the store document as JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.to_document())?)
    }

    /// Parses a stored JSON document back into state.
    pub fn from_json(json: &str) -> Result<Self> {
        let document: AssistantDocument = serde_json::from_str(json)?;
        document.into_state()
    }
}

/// Store shape of [`AssistantState`]. Wishlist key order is preserved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AssistantDocument {
    #[serde(with = "ordered_map")]
    pub wishlist: Vec<(String, Vec<CourseRecord>)>,
    pub generated_schedules: Vec<ScheduleRecord>,
}

impl AssistantDocument {
    /// Decodes every record.
    ///
    /// # Errors
    /// The first record with an invalid time or unknown day name.
    pub fn into_state(self) -> Result<AssistantState> {
        let mut wishlist = Wishlist::new();
        for (code, records) in self.wishlist {
            wishlist.insert(code, decode_courses(records)?);
        }
        let generated_schedules = self
            .generated_schedules
            .into_iter()
            .map(GeneratedSchedule::try_from)
            .collect::<Result<Vec<_>>>()?;

        debug!(
            wishlist = wishlist.len(),
            schedules = generated_schedules.len(),
            "decoded assistant state"
        );
        Ok(AssistantState::new(wishlist, generated_schedules))
    }
}

/// The user's exported timetable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SavedTimetable {
    pub scheduled_courses: Vec<CourseRecord>,
}

impl SavedTimetable {
    /// Decodes into a timetable, keeping the stored order.
    pub fn into_timetable(self) -> Result<Timetable> {
        let courses = decode_courses(self.scheduled_courses)?;
        Ok(Timetable::from(GeneratedSchedule::new(courses)))
    }
}

impl From<&Timetable> for SavedTimetable {
    fn from(timetable: &Timetable) -> Self {
        Self {
            scheduled_courses: encode_courses(timetable.courses()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PickOutcome;

    fn cs136_lec() -> Course {
        Course::new(
            "CS 136",
            Section::new("5821", "LEC 001")
                .with_meeting(
                    vec![Weekday::Tue, Weekday::Thu],
                    Time::new(10, 0).unwrap(),
                    Time::new(11, 20).unwrap(),
                )
                .with_location("MC 2065"),
        )
        .with_title("Elementary Algorithm Design")
        .with_term("1261")
        .with_units("0.50")
    }

    #[test]
    fn test_course_record_fields() {
        let record = CourseRecord::from(&cs136_lec());
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["classNumber"], "5821");
        assert_eq!(json["days"], serde_json::json!(["Tue", "Thu"]));
        assert_eq!(json["startHour"], 10);
        assert_eq!(json["endMinute"], 20);

        let back = Course::try_from(record).unwrap();
        assert_eq!(back, cs136_lec());
    }

    #[test]
    fn test_course_record_defaults() {
        let record: CourseRecord =
            serde_json::from_str(r#"{"code": "CS 499", "classNumber": "7"}"#).unwrap();
        let course = Course::try_from(record).unwrap();
        assert!(course.section.is_tba());
        assert_eq!(course.section.start, Time::MIDNIGHT);
        assert_eq!(course.title, "");
    }

    #[test]
    fn test_course_record_rejects_bad_values() {
        let record = CourseRecord {
            start_hour: 24,
            ..CourseRecord::from(&cs136_lec())
        };
        assert!(matches!(
            Course::try_from(record),
            Err(Error::InvalidTime { hour: 24, .. })
        ));

        let record = CourseRecord {
            days: vec!["Sat".into()],
            ..CourseRecord::from(&cs136_lec())
        };
        assert!(matches!(Course::try_from(record), Err(Error::Record { .. })));
    }

    #[test]
    fn test_assistant_state_wraps_schedules() {
        let state = AssistantState::new(
            Wishlist::new().with_course("CS 136", vec![cs136_lec()]),
            vec![GeneratedSchedule::new(vec![cs136_lec()])],
        );
        let value: serde_json::Value = serde_json::from_str(&state.to_json().unwrap()).unwrap();
        assert!(value["generatedSchedules"][0]["courses"].is_array());
        assert_eq!(value["wishlist"]["CS 136"][0]["code"], "CS 136");

        assert_eq!(AssistantState::from_json(&state.to_json().unwrap()).unwrap(), state);
    }

    #[test]
    fn test_assistant_state_keeps_wishlist_order() {
        let json = r#"{
            "wishlist": {"STAT 230": [], "CS 136": [], "MATH 239": []},
            "generatedSchedules": []
        }"#;
        let state = AssistantState::from_json(json).unwrap();
        assert_eq!(state.wishlist.codes(), vec!["STAT 230", "CS 136", "MATH 239"]);
        assert!(state.generated_schedules.is_empty());
    }

    #[test]
    fn test_empty_document() {
        let state = AssistantState::from_json("{}").unwrap();
        assert!(state.wishlist.is_empty());
        assert!(state.generated_schedules.is_empty());
    }

    #[test]
    fn test_saved_timetable() {
        let mut timetable = Timetable::new();
        assert_eq!(timetable.toggle(cs136_lec()), PickOutcome::Added);

        let saved = SavedTimetable::from(&timetable);
        let json = serde_json::to_string(&saved).unwrap();
        assert!(json.starts_with(r#"{"scheduledCourses":["#));

        let restored: SavedTimetable = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.into_timetable().unwrap().courses(), timetable.courses());
    }
}
