//! Course timetable planning for students.
//!
//! Parses catalog meeting strings, detects clashes between class sections,
//! and generates distinct conflict-free weekly schedules from a wishlist
//! of courses.
//!
//! # Modules
//!
//! - **`parser`**: Catalog time strings (`"10:00-11:20TTh"`) to start, end, and days
//! - **`conflict`**: Pairwise section overlap and candidate-vs-placed checks
//! - **`generator`**: Backtracking schedule search with result cap, node
//!   budget, and cancellation; schedule stats
//! - **`models`**: Domain types: `Time`, `Weekday`, `Section`, `Course`,
//!   `Wishlist`, `GeneratedSchedule`, `Timetable`
//! - **`catalog`**: Catalog documents to course records
//! - **`persistence`**: Flat store records for timetables and assistant state
//! - **`validation`**: Wishlist integrity checks
//!
//! # Example
//!
//! ```
//! use timeplanner::catalog::Catalog;
//! use timeplanner::generator::generate_timetables;
//!
//! let json = r#"[{
//!     "subject": "CS", "catalog": "136", "title": "Algorithm Design", "term": "1261", "units": "0.50",
//!     "sections": [
//!         {"class": "1", "component": "LEC 001", "time_date": "10:00-11:20TTh", "location": "MC 2065"},
//!         {"class": "2", "component": "LEC 002", "time_date": "02:30-03:50TTh", "location": "MC 2066"}
//!     ]
//! }]"#;
//!
//! let catalog = Catalog::from_json(json, "1261").unwrap();
//! let schedules = generate_timetables(&catalog.group_by_code(), true, 1, 5);
//! assert_eq!(schedules.len(), 2);
//! ```
//!
//! # Logging
//!
//! Emits `tracing` events; install a subscriber to see them.

pub mod catalog;
pub mod conflict;
pub mod error;
pub mod generator;
pub mod models;
pub mod parser;
pub mod persistence;
pub mod validation;

pub use error::{Error, Result};
