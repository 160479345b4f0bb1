//! Timetabling domain models.
//!
//! Provides the data types shared by the parser, the conflict detector,
//! and the schedule generator.
//!
//! # Domain Mappings
//!
//! | timeplanner | Catalog | Student view |
//! |-------------|---------|--------------|
//! | Section | Class row (component, days, time, room) | One box on the weekly grid |
//! | Course | Course + one of its class rows | "CS 136 LEC 001" |
//! | Wishlist | Course codes with all their class rows | Courses I'd like to take |
//! | GeneratedSchedule | One class row per required component | A candidate week |

mod course;
mod schedule;
mod section;
mod time;
mod timetable;
mod wishlist;

pub use course::Course;
pub use schedule::GeneratedSchedule;
pub(crate) use schedule::signature_of;
pub use section::Section;
pub use time::{Time, Weekday};
pub use timetable::{PickOutcome, Timetable};
pub use wishlist::Wishlist;
pub(crate) use wishlist::ordered_map;
