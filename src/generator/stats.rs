//! Schedule shape metrics.
//!
//! Summarizes what a generated week looks like for the student.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Days on campus | Weekdays with at least one timed section |
//! | Earliest start | Minimum start over timed sections |
//! | Latest end | Maximum end over timed sections |
//! | Weekly minutes | Sum over sections of duration × meeting days |
//! | Gap minutes | Idle time between consecutive classes on the same day |
//! | TBA sections | Sections without a meeting time |

use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::{GeneratedSchedule, Time, Weekday};

/// Shape indicators for one generated schedule.
///
/// Informational only: the generator never reorders by these.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleStats {
    /// Distinct weekdays with class.
    pub days_on_campus: usize,
    /// Earliest start of any timed section.
    pub earliest_start: Option<Time>,
    /// Latest end of any timed section.
    pub latest_end: Option<Time>,
    /// Class minutes per week.
    pub weekly_minutes: u32,
    /// Idle minutes between back-to-back classes, summed over the week.
    pub gap_minutes: u32,
    /// Sections with no meeting time.
    pub tba_sections: usize,
    /// Class minutes per weekday (days without class omitted).
    pub minutes_by_day: BTreeMap<Weekday, u32>,
}

impl ScheduleStats {
    /// Computes stats for a schedule.
    pub fn calculate(schedule: &GeneratedSchedule) -> Self {
        let mut earliest_start: Option<Time> = None;
        let mut latest_end: Option<Time> = None;
        let mut tba_sections = 0;

        for course in schedule.courses() {
            let section = &course.section;
            if section.is_tba() {
                tba_sections += 1;
                continue;
            }
            earliest_start = Some(earliest_start.map_or(section.start, |t| t.min(section.start)));
            latest_end = Some(latest_end.map_or(section.end, |t| t.max(section.end)));
        }

        let mut minutes_by_day = BTreeMap::new();
        let mut gap_minutes = 0;
        for day in Weekday::ALL {
            // Already sorted by start.
            let day_courses = schedule.sections_on(day);
            if day_courses.is_empty() {
                continue;
            }

            let minutes: u32 = day_courses.iter().map(|c| c.section.duration_minutes()).sum();
            minutes_by_day.insert(day, minutes);

            for pair in day_courses.windows(2) {
                let prev_end = pair[0].section.end.minutes_since_midnight();
                let next_start = pair[1].section.start.minutes_since_midnight();
                gap_minutes += next_start.saturating_sub(prev_end);
            }
        }

        Self {
            days_on_campus: minutes_by_day.len(),
            earliest_start,
            latest_end,
            weekly_minutes: minutes_by_day.values().sum(),
            gap_minutes,
            tba_sections,
            minutes_by_day,
        }
    }

    /// Whether the week stays within the given campus-day and idle-time limits.
    pub fn fits_within(&self, max_days: usize, max_gap_minutes: u32) -> bool {
        self.days_on_campus <= max_days && self.gap_minutes <= max_gap_minutes
    }
}
