//! Stack-based depth-first schedule search.
//!
//! # Algorithm
//!
//! 1. Enumerate `T`-subsets of wishlist codes in wishlist order.
//! 2. For each subset, split every code's sections by component type into
//!    slots (course by course, component types in first-appearance order).
//!    A code with no sections makes the subset unsatisfiable.
//! 3. Depth-first over the slots: try each candidate in listed order,
//!    keep it only if it does not conflict with the sections chosen so far.
//! 4. A full assignment must cover exactly `T` distinct codes and have a
//!    signature not seen earlier in the run.
//! 5. Stop as soon as `max_results` schedules were accepted, the node
//!    budget is spent, or the cancel token fires.
//!
//! The search is an `Iterator`: each `next()` resumes the DFS where the
//! previous accepted schedule left it, so taking N items explores no
//! further than needed for N.

use std::collections::HashSet;

use tracing::{debug, trace};

use super::{CancelToken, Combinations, GeneratorConfig, StopReason};
use crate::conflict::conflicts;
use crate::models::{signature_of, Course, GeneratedSchedule, Wishlist};

/// One (course, component type) pair that needs exactly one section.
#[derive(Debug, Clone)]
struct Slot<'w> {
    component_type: &'w str,
    candidates: Vec<&'w Course>,
}

/// Lazy iterator over distinct, conflict-free schedules.
///
/// Obtained from [`ScheduleGenerator::search`](super::ScheduleGenerator::search).
#[derive(Debug)]
pub struct ScheduleSearch<'w> {
    entries: Vec<(&'w str, &'w [Course])>,
    target: usize,
    max_results: usize,
    max_nodes: Option<u64>,
    cancel: Option<CancelToken>,

    combinations: Combinations,
    slots: Vec<Slot<'w>>,
    /// `frames[d]` = next candidate index to try at slot `d`.
    /// Invariant while a combination is active: `frames.len() == chosen.len() + 1`.
    frames: Vec<usize>,
    chosen: Vec<&'w Course>,
    seen: HashSet<String>,

    accepted: usize,
    nodes_visited: u64,
    combinations_explored: usize,
    stop_reason: Option<StopReason>,
}

impl<'w> ScheduleSearch<'w> {
    pub(super) fn new(
        wishlist: &'w Wishlist,
        config: &GeneratorConfig,
        cancel: Option<CancelToken>,
    ) -> Self {
        let entries: Vec<(&'w str, &'w [Course])> = wishlist.iter().collect();
        let target = config.target_size(entries.len());
        Self {
            combinations: Combinations::new(entries.len(), target),
            entries,
            target,
            max_results: config.max_results,
            max_nodes: config.max_nodes,
            cancel,
            slots: Vec::new(),
            frames: Vec::new(),
            chosen: Vec::new(),
            seen: HashSet::new(),
            accepted: 0,
            nodes_visited: 0,
            combinations_explored: 0,
            stop_reason: None,
        }
    }

    /// Number of distinct courses every produced schedule contains.
    pub fn target_size(&self) -> usize {
        self.target
    }

    /// Why the search stopped, once it has.
    pub fn stop_reason(&self) -> Option<StopReason> {
        self.stop_reason
    }

    /// Candidate sections evaluated so far.
    pub fn nodes_visited(&self) -> u64 {
        self.nodes_visited
    }

    /// Course subsets taken from the enumeration so far (including
    /// unsatisfiable ones).
    pub fn combinations_explored(&self) -> usize {
        self.combinations_explored
    }

    fn stop(&mut self, reason: StopReason) -> Option<GeneratedSchedule> {
        self.stop_reason = Some(reason);
        self.frames.clear();
        self.chosen.clear();
        None
    }

    /// Loads the next satisfiable combination into `slots`.
    fn load_next_combination(&mut self) -> bool {
        while let Some(combo) = self.combinations.next() {
            self.combinations_explored += 1;
            match self.build_slots(&combo) {
                Some(slots) => {
                    debug!(
                        codes = ?combo.iter().map(|&i| self.entries[i].0).collect::<Vec<_>>(),
                        slots = slots.len(),
                        "exploring course combination"
                    );
                    self.slots = slots;
                    self.frames = vec![0];
                    self.chosen.clear();
                    return true;
                }
                None => {
                    debug!(
                        codes = ?combo.iter().map(|&i| self.entries[i].0).collect::<Vec<_>>(),
                        "skipping combination with a course that has no sections"
                    );
                }
            }
        }
        false
    }

    fn build_slots(&self, combo: &[usize]) -> Option<Vec<Slot<'w>>> {
        let mut slots: Vec<Slot<'w>> = Vec::new();
        for &idx in combo {
            let (_, courses) = self.entries[idx];
            if courses.is_empty() {
                return None;
            }
            let first_slot = slots.len();
            for course in courses {
                let component_type = course.component_type();
                match slots[first_slot..]
                    .iter_mut()
                    .find(|s| s.component_type == component_type)
                {
                    Some(slot) => slot.candidates.push(course),
                    None => slots.push(Slot {
                        component_type,
                        candidates: vec![course],
                    }),
                }
            }
        }
        Some(slots)
    }

    /// Checks a full assignment and records it if new.
    fn accept_leaf(&mut self) -> Option<GeneratedSchedule> {
        let distinct: HashSet<&str> = self.chosen.iter().map(|c| c.code.as_str()).collect();
        if distinct.len() != self.target {
            trace!(
                found = distinct.len(),
                target = self.target,
                "rejecting assignment with wrong course count"
            );
            return None;
        }

        let signature = signature_of(self.chosen.iter().copied());
        if !self.seen.insert(signature) {
            trace!("discarding duplicate schedule");
            return None;
        }

        self.accepted += 1;
        Some(GeneratedSchedule::new(
            self.chosen.iter().map(|&c| c.clone()).collect(),
        ))
    }
}

impl Iterator for ScheduleSearch<'_> {
    type Item = GeneratedSchedule;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.stop_reason.is_some() {
                return None;
            }
            if self.accepted >= self.max_results {
                return self.stop(StopReason::ResultLimit);
            }

            if self.frames.is_empty() && !self.load_next_combination() {
                return self.stop(StopReason::Exhausted);
            }

            let depth = self.chosen.len();
            if depth == self.slots.len() {
                let leaf = self.accept_leaf();
                self.frames.pop();
                self.chosen.pop();
                if leaf.is_some() {
                    return leaf;
                }
                continue;
            }

            let next = self.frames[depth];
            let slot = &self.slots[depth];
            if next >= slot.candidates.len() {
                // Slot exhausted: undo the choice made one level up.
                self.frames.pop();
                self.chosen.pop();
                continue;
            }
            let candidate = slot.candidates[next];
            self.frames[depth] += 1;

            if self.cancel.as_ref().is_some_and(CancelToken::is_cancelled) {
                debug!(nodes = self.nodes_visited, "search cancelled");
                return self.stop(StopReason::Cancelled);
            }
            if self.max_nodes.is_some_and(|max| self.nodes_visited >= max) {
                debug!(nodes = self.nodes_visited, "node budget exhausted");
                return self.stop(StopReason::NodeBudget);
            }
            self.nodes_visited += 1;

            let placed = self.chosen.iter().map(|c| &c.section);
            if conflicts(&candidate.section, placed) {
                continue;
            }
            self.chosen.push(candidate);
            self.frames.push(0);
        }
    }
}
