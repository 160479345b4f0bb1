//! Generator settings.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default number of distinct schedules returned per run.
pub const DEFAULT_MAX_RESULTS: usize = 5;

/// Settings for one generation run.
///
/// Deserializes from JSON with every field optional:
///
/// ```
/// use timeplanner::generator::GeneratorConfig;
///
/// let cfg = GeneratorConfig::from_json(r#"{"enforce_all": false, "subset_size": 2}"#).unwrap();
/// assert_eq!(cfg.max_results, 5);
/// assert_eq!(cfg.target_size(4), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Every wishlist course must appear in each schedule.
    pub enforce_all: bool,
    /// Courses per schedule when `enforce_all` is off.
    /// Clamped to `[1, wishlist size]`.
    pub subset_size: usize,
    /// Stop after this many distinct schedules.
    pub max_results: usize,
    /// Upper bound on DFS node visits across the whole run.
    /// `None` = unbounded.
    pub max_nodes: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            enforce_all: true,
            subset_size: 3,
            max_results: DEFAULT_MAX_RESULTS,
            max_nodes: None,
        }
    }
}

impl GeneratorConfig {
    /// Creates the default configuration (all courses, 5 results).
    pub fn new() -> Self {
        Self::default()
    }

    /// Requires every wishlist course.
    pub fn enforce_all(mut self) -> Self {
        self.enforce_all = true;
        self
    }

    /// Accepts any `size` courses of the wishlist.
    pub fn subset(mut self, size: usize) -> Self {
        self.enforce_all = false;
        self.subset_size = size;
        self
    }

    /// Sets the result cap.
    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    /// Bounds total DFS node visits.
    pub fn with_max_nodes(mut self, max_nodes: u64) -> Self {
        self.max_nodes = Some(max_nodes);
        self
    }

    /// Number of courses each schedule must contain for a wishlist of
    /// `course_count` codes.
    pub fn target_size(&self, course_count: usize) -> usize {
        if course_count == 0 {
            0
        } else if self.enforce_all {
            course_count
        } else {
            self.subset_size.clamp(1, course_count)
        }
    }

    /// Parses a JSON configuration, filling absent fields with defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects settings under which no schedule could ever be produced.
    pub fn validate(&self) -> Result<()> {
        if self.max_results == 0 {
            return Err(Error::config("max_results must be at least 1"));
        }
        if self.max_nodes == Some(0) {
            return Err(Error::config("max_nodes must be at least 1 when set"));
        }
        Ok(())
    }
}
