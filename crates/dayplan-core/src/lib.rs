//! # Dayplan Core Library
//!
//! This library provides the core logic for dayplan, a small daily-planning
//! assistant. The user enters tasks with an estimated duration, an importance
//! rating and an optional due date; dayplan classifies each task into an
//! Eisenhower-matrix quadrant and greedily packs the pending tasks into the
//! declared free time blocks of the target day.
//!
//! ## Key Components
//!
//! - [`classify`]: Eisenhower quadrant classification for a single task
//! - [`Planner`]: Greedy schedule generation over available time segments
//! - [`PlannerConfig`]: Tunable thresholds (importance cutoff, urgency
//!   window, buffer ratio, Q2 guarantee), stored as TOML
//!
//! Both core operations are pure with respect to their inputs: no clock
//! reads, no I/O, no shared state. Degenerate inputs (no tasks, no valid
//! segments, oversized tasks) degrade to empty or partial results instead
//! of errors.

pub mod config;
pub mod error;
pub mod format;
pub mod planner;
pub mod quadrant;
pub mod segment;
pub mod task;

pub use config::PlannerConfig;
pub use error::{ConfigError, CoreError, Result, ValidationError};
pub use format::{format_plan, format_quadrants};
pub use planner::{DayPlan, Planner, ScheduleEntry, ScheduleMeta};
pub use quadrant::{classify, Quadrant};
pub use segment::{build_segments, TimeSegment};
pub use task::{Task, TaskStatus};
