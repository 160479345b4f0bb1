//! Schedule generation.
//!
//! Turns a wishlist into up to N distinct, conflict-free weekly schedules.
//!
//! # Algorithm
//!
//! Backtracking search over course subsets. Every chosen course
//! contributes exactly one section per component type (LEC, TUT, LAB, ...)
//! and no two chosen sections may overlap. Candidate order is the wishlist
//! order and, within a course, the listed section order, so output is
//! deterministic for a given input. See [`ScheduleSearch`] for the exact
//! steps.
//!
//! # Bounds
//!
//! The search space is exponential in the number of courses. A run stops
//! early when `max_results` schedules are found, when the optional
//! `max_nodes` budget is spent, or when a [`CancelToken`] fires. All three
//! return what was accepted so far.
//!
//! # Stats
//!
//! `ScheduleStats` summarizes a result (days on campus, idle gaps, weekly
//! minutes). It never changes generator output order.

mod cancel;
mod combinations;
mod config;
mod search;
mod stats;

pub use cancel::CancelToken;
pub use combinations::Combinations;
pub use config::{GeneratorConfig, DEFAULT_MAX_RESULTS};
pub use search::ScheduleSearch;
pub use stats::ScheduleStats;

use serde::Serialize;
use tracing::info;

use crate::models::{GeneratedSchedule, Wishlist};

/// Why a generation run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StopReason {
    /// Every combination was fully explored.
    Exhausted,
    /// `max_results` schedules were accepted.
    ResultLimit,
    /// The cancel token fired.
    Cancelled,
    /// The `max_nodes` budget was spent.
    NodeBudget,
}

/// Output of [`ScheduleGenerator::generate`].
#[derive(Debug, Clone)]
pub struct GenerationReport {
    /// Accepted schedules in discovery order.
    pub schedules: Vec<GeneratedSchedule>,
    /// Why the run ended.
    pub stop_reason: StopReason,
    /// Course subsets taken from the enumeration.
    pub combinations_explored: usize,
    /// Candidate sections evaluated.
    pub nodes_visited: u64,
}

impl GenerationReport {
    /// Whether the search ran to completion, i.e. the result set is every
    /// schedule that exists (up to the cap).
    pub fn is_complete(&self) -> bool {
        matches!(
            self.stop_reason,
            StopReason::Exhausted | StopReason::ResultLimit
        )
    }
}

/// Backtracking schedule generator.
///
/// # Example
/// ```
/// use timeplanner::generator::{GeneratorConfig, ScheduleGenerator};
/// use timeplanner::models::{Course, Section, Time, Weekday, Wishlist};
///
/// let lec = |class: &str, h: u32| {
///     Section::new(class, "LEC 001").with_meeting(
///         vec![Weekday::Mon, Weekday::Wed],
///         Time::new(h, 0).unwrap(),
///         Time::new(h, 50).unwrap(),
///     )
/// };
/// let wishlist = Wishlist::new()
///     .with_course("CS 136", vec![Course::new("CS 136", lec("1001", 9))])
///     .with_course("MATH 239", vec![Course::new("MATH 239", lec("2001", 10))]);
///
/// let report = ScheduleGenerator::new(GeneratorConfig::new()).generate(&wishlist);
/// assert_eq!(report.schedules.len(), 1);
/// assert_eq!(report.schedules[0].course_codes(), vec!["CS 136", "MATH 239"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScheduleGenerator {
    config: GeneratorConfig,
    cancel: Option<CancelToken>,
}

impl ScheduleGenerator {
    /// Creates a generator with the given settings.
    pub fn new(config: GeneratorConfig) -> Self {
        Self {
            config,
            cancel: None,
        }
    }

    /// Attaches a cancel token checked before every node expansion.
    pub fn with_cancel_token(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// The active settings.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Lazily enumerates schedules for `wishlist`.
    pub fn search<'w>(&self, wishlist: &'w Wishlist) -> ScheduleSearch<'w> {
        ScheduleSearch::new(wishlist, &self.config, self.cancel.clone())
    }

    /// Runs the search to its end and reports what happened.
    pub fn generate(&self, wishlist: &Wishlist) -> GenerationReport {
        let mut search = self.search(wishlist);
        let schedules: Vec<GeneratedSchedule> = search.by_ref().collect();
        let stop_reason = search.stop_reason().unwrap_or(StopReason::Exhausted);

        info!(
            courses = wishlist.len(),
            target = search.target_size(),
            found = schedules.len(),
            combinations = search.combinations_explored(),
            nodes = search.nodes_visited(),
            ?stop_reason,
            "schedule generation finished"
        );

        GenerationReport {
            schedules,
            stop_reason,
            combinations_explored: search.combinations_explored(),
            nodes_visited: search.nodes_visited(),
        }
    }
}

/// Generates up to `max_results` distinct conflict-free schedules.
///
/// With `enforce_all` every wishlist course is included; otherwise each
/// schedule holds exactly `subset_size` courses (clamped to
/// `[1, wishlist.len()]`). An empty wishlist or `max_results == 0`
/// yields no schedules.
pub fn generate_timetables(
    wishlist: &Wishlist,
    enforce_all: bool,
    subset_size: usize,
    max_results: usize,
) -> Vec<GeneratedSchedule> {
    let config = GeneratorConfig {
        enforce_all,
        subset_size,
        max_results,
        max_nodes: None,
    };
    ScheduleGenerator::new(config).generate(wishlist).schedules
}
