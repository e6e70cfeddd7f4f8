//! Eisenhower quadrant classification.
//!
//! A task is *important* when its rating reaches the configured threshold,
//! and *urgent* when its due date falls within the configured window from
//! the reference date. The four combinations map onto the fixed quadrants
//! Q1..Q4.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::PlannerConfig;
use crate::task::Task;

/// One of the four Eisenhower-matrix buckets.
///
/// `Ord` follows the display order Q1 -> Q4, so maps keyed by quadrant
/// iterate deterministically.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Quadrant {
    /// Important and urgent
    Q1,
    /// Important, not urgent
    Q2,
    /// Urgent, not important
    Q3,
    /// Neither important nor urgent
    Q4,
}

impl Quadrant {
    /// All quadrants in display order.
    pub const ALL: [Quadrant; 4] = [Quadrant::Q1, Quadrant::Q2, Quadrant::Q3, Quadrant::Q4];

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Quadrant::Q1 => "Q1 important & urgent",
            Quadrant::Q2 => "Q2 important, not urgent",
            Quadrant::Q3 => "Q3 urgent, not important",
            Quadrant::Q4 => "Q4 neither",
        }
    }
}

impl fmt::Display for Quadrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify a single task relative to `reference_date`.
///
/// - important: `importance >= config.importance_threshold`
/// - urgent: the due date is on or before
///   `reference_date + (urgent_days - 1)` days; tasks without a due date
///   are never urgent.
///
/// With the default `urgent_days = 1` the cutoff is the reference date
/// itself. Pure function, no side effects.
pub fn classify(task: &Task, reference_date: NaiveDate, config: &PlannerConfig) -> Quadrant {
    let important = task.importance >= config.importance_threshold;

    let urgent = match task.due {
        None => false,
        Some(due) => {
            let window = u64::from(config.urgent_days.saturating_sub(1));
            let urgent_limit = reference_date + Days::new(window);
            due <= urgent_limit
        }
    };

    match (important, urgent) {
        (true, true) => Quadrant::Q1,
        (true, false) => Quadrant::Q2,
        (false, true) => Quadrant::Q3,
        (false, false) => Quadrant::Q4,
    }
}
