//! Day/time conflict detection between sections.
//!
//! Two sections conflict iff they share a weekday and their half-open time
//! ranges overlap: `a.start < b.end && b.start < a.end`. Sections touching
//! at a boundary (one ends 11:20, the other starts 11:20) do not conflict.
//! A TBA section (no days) never conflicts.
//!
//! The predicates are pure; the generator uses [`conflicts`] as its
//! pruning oracle and interactive callers use it for "would this pick
//! clash with my current picks" checks.

use crate::models::Section;

/// Whether two sections overlap on a shared day.
pub fn sections_overlap(a: &Section, b: &Section) -> bool {
    let share_day = a.days.iter().any(|d| b.days.contains(d));
    share_day && a.start < b.end && b.start < a.end
}

/// Whether placing `candidate` next to the already-placed sections would
/// create an overlap. Short-circuits on the first clash.
pub fn conflicts<'a, I>(candidate: &Section, placed: I) -> bool
where
    I: IntoIterator<Item = &'a Section>,
{
    first_conflict(candidate, placed).is_some()
}

/// The first placed section that clashes with `candidate`, if any.
pub fn first_conflict<'a, I>(candidate: &Section, placed: I) -> Option<&'a Section>
where
    I: IntoIterator<Item = &'a Section>,
{
    placed
        .into_iter()
        .find(|other| sections_overlap(candidate, other))
}
