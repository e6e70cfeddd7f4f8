//! Greedy daily schedule generation.
//!
//! The planner buckets pending tasks by Eisenhower quadrant, orders each
//! bucket (deadline first in the urgency-bearing quadrants, importance first
//! in Q4), guarantees a configurable number of Q2 tasks an early slot, then
//! walks the available segments with a single cursor, placing whole tasks
//! until the buffered time budget runs out. Tasks that do not fit end up in
//! the overflow list; nothing is ever split across segments.

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::collections::BTreeMap;

use crate::config::PlannerConfig;
use crate::quadrant::{classify, Quadrant};
use crate::segment::{build_segments, TimeSegment};
use crate::task::{Task, TaskStatus};

/// A placed task on the generated timetable.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScheduleEntry {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub title: String,
    pub quadrant: Quadrant,
    pub task_id: String,
}

impl ScheduleEntry {
    /// Get total duration in minutes.
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }
}

/// Summary counters for a generation run.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScheduleMeta {
    /// Sum of all segment durations in minutes.
    pub total_available_min: i64,
    /// Schedulable budget after the buffer is reserved.
    pub sched_limit_min: i64,
    /// Minutes actually placed.
    pub used_min: i64,
}

/// Result of one generation run.
///
/// Every pending task appears in exactly one of `schedule` and `overflow`,
/// and `quad_map` partitions the full pending set into the four quadrants
/// regardless of placement outcome. `meta` is `None` for the degenerate
/// paths (no pending tasks, no valid segments).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DayPlan {
    pub schedule: Vec<ScheduleEntry>,
    pub quad_map: BTreeMap<Quadrant, Vec<Task>>,
    pub meta: Option<ScheduleMeta>,
    pub overflow: Vec<Task>,
}

impl DayPlan {
    fn empty() -> Self {
        DayPlan {
            schedule: Vec::new(),
            quad_map: BTreeMap::new(),
            meta: None,
            overflow: Vec::new(),
        }
    }
}

/// Daily planner.
///
/// Pure with respect to its inputs: identical task lists, reference date and
/// blocks produce identical plans.
pub struct Planner {
    config: PlannerConfig,
}

impl Planner {
    /// Create a planner with the default configuration.
    pub fn new() -> Self {
        Self {
            config: PlannerConfig::default(),
        }
    }

    /// Create with custom configuration.
    pub fn with_config(config: PlannerConfig) -> Self {
        Self { config }
    }

    /// Access the active configuration.
    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Generate the timetable for `reference_date`.
    ///
    /// # Arguments
    /// * `tasks` - Full task collection; only `todo` tasks participate
    /// * `reference_date` - Target day the blocks are anchored to
    /// * `blocks` - Caller-declared `(start, end)` availability windows
    ///
    /// Degenerate inputs never fail: with no pending tasks everything is
    /// empty, with no valid blocks every pending task overflows.
    pub fn generate(
        &self,
        tasks: &[Task],
        reference_date: NaiveDate,
        blocks: &[(NaiveTime, NaiveTime)],
    ) -> DayPlan {
        let todo: Vec<Task> = tasks
            .iter()
            .filter(|t| t.status == TaskStatus::Todo)
            .cloned()
            .collect();
        if todo.is_empty() {
            return DayPlan::empty();
        }

        let segments = build_segments(reference_date, blocks);
        if segments.is_empty() {
            return DayPlan {
                overflow: todo,
                ..DayPlan::empty()
            };
        }

        let total_available: i64 = segments.iter().map(TimeSegment::duration_minutes).sum();
        let sched_limit =
            (total_available as f64 * (1.0 - self.config.clamped_buffer_ratio())).floor() as i64;

        // Classify the whole pending set up front; quad_map reflects it
        // regardless of placement outcome.
        let classified: Vec<(Task, Quadrant)> = todo
            .into_iter()
            .map(|t| {
                let q = classify(&t, reference_date, &self.config);
                (t, q)
            })
            .collect();

        let mut quad_map: BTreeMap<Quadrant, Vec<Task>> = Quadrant::ALL
            .iter()
            .map(|&q| (q, Vec::new()))
            .collect();
        for (task, q) in &classified {
            quad_map.entry(*q).or_default().push(task.clone());
        }

        let ordered = self.placement_order(classified);

        let mut schedule = Vec::new();
        let mut overflow = Vec::new();
        let mut used: i64 = 0;
        let mut seg_idx = 0usize;
        let mut cursor = segments[0].start;

        for (task, quadrant) in ordered {
            let dur = i64::from(task.duration_min);

            // Budget exhaustion beats any remaining gap.
            if used + dur > sched_limit {
                overflow.push(task);
                continue;
            }

            let mut placed = false;
            while seg_idx < segments.len() {
                (seg_idx, cursor) = advance_cursor(&segments, seg_idx, cursor);
                if seg_idx >= segments.len() {
                    break;
                }

                let remaining = segments[seg_idx].remaining_from(cursor);
                if remaining <= 0 {
                    seg_idx += 1;
                    continue;
                }

                if dur <= remaining {
                    let start = cursor;
                    let end = cursor + Duration::minutes(dur);
                    cursor = end;
                    used += dur;
                    schedule.push(ScheduleEntry {
                        start,
                        end,
                        title: task.title.clone(),
                        quadrant,
                        task_id: task.id.clone(),
                    });
                    placed = true;
                    break;
                }

                // Whole task must fit in one segment; move on.
                seg_idx += 1;
            }

            if !placed {
                overflow.push(task);
            }
        }

        DayPlan {
            schedule,
            quad_map,
            meta: Some(ScheduleMeta {
                total_available_min: total_available,
                sched_limit_min: sched_limit,
                used_min: used,
            }),
            overflow,
        }
    }

    /// Order tasks for placement: Q1, then the guaranteed Q2 slice, the
    /// remaining Q2, Q3, Q4.
    ///
    /// Q1..Q3 sort by deadline proximity first (no deadline last), higher
    /// importance breaking ties; Q4 sorts by importance first. The asymmetry
    /// is deliberate: without urgency, importance is all that is left.
    fn placement_order(&self, classified: Vec<(Task, Quadrant)>) -> Vec<(Task, Quadrant)> {
        let mut buckets: BTreeMap<Quadrant, Vec<(Task, Quadrant)>> = BTreeMap::new();
        for entry in classified {
            buckets.entry(entry.1).or_default().push(entry);
        }

        let due_key = |t: &Task| (t.due.is_none(), t.due);
        for (&q, bucket) in buckets.iter_mut() {
            if q == Quadrant::Q4 {
                bucket.sort_by_key(|(t, _)| (Reverse(t.importance), due_key(t)));
            } else {
                bucket.sort_by_key(|(t, _)| (due_key(t), Reverse(t.importance)));
            }
        }

        let mut take = |q: Quadrant| buckets.remove(&q).unwrap_or_default();
        let q1 = take(Quadrant::Q1);
        let mut q2 = take(Quadrant::Q2);
        let q3 = take(Quadrant::Q3);
        let q4 = take(Quadrant::Q4);

        let split = self.config.ensure_q2.min(q2.len());
        let q2_rest = q2.split_off(split);

        let mut ordered = q1;
        ordered.extend(q2);
        ordered.extend(q2_rest);
        ordered.extend(q3);
        ordered.extend(q4);
        ordered
    }
}

impl Default for Planner {
    fn default() -> Self {
        Self::new()
    }
}

/// Advance to the first position inside a segment with capacity left.
fn advance_cursor(
    segments: &[TimeSegment],
    mut idx: usize,
    mut cursor: DateTime<Utc>,
) -> (usize, DateTime<Utc>) {
    while idx < segments.len() {
        let seg = &segments[idx];
        if cursor < seg.start {
            cursor = seg.start;
        }
        if cursor < seg.end {
            return (idx, cursor);
        }
        idx += 1;
        if idx < segments.len() {
            cursor = segments[idx].start;
        }
    }
    (idx, cursor)
}
