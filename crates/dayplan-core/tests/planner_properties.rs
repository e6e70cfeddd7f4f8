//! Property tests for the planner invariants.

use chrono::{Days, NaiveDate, NaiveTime};
use dayplan_core::{build_segments, Planner, Task};
use proptest::prelude::*;

fn reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 31).unwrap()
}

fn arb_task() -> impl Strategy<Value = Task> {
    (
        "[a-z]{1,10}",
        1u32..=180,
        1u8..=5,
        proptest::option::of(0u64..30),
    )
        .prop_map(|(title, duration, importance, due_offset)| {
            let task = Task::new(title, duration, importance);
            match due_offset {
                Some(days) => task.with_due(reference_date() + Days::new(days)),
                None => task,
            }
        })
}

/// Disjoint hour-anchored blocks (the planner's contract assumes pairwise
/// disjoint segments), deliberately left unsorted; zero-length blocks are
/// kept so the degenerate-drop path gets exercised too.
fn arb_blocks() -> impl Strategy<Value = Vec<(NaiveTime, NaiveTime)>> {
    (
        proptest::collection::btree_set(6u32..20, 0..4),
        proptest::collection::vec(0i64..=60, 4),
    )
        .prop_map(|(hours, lens)| {
            let mut blocks: Vec<_> = hours
                .into_iter()
                .zip(lens)
                .map(|(hour, len)| {
                    let start = NaiveTime::from_hms_opt(hour, 0, 0).unwrap();
                    let end = start + chrono::Duration::minutes(len);
                    (start, end)
                })
                .collect();
            blocks.reverse();
            blocks
        })
}

proptest! {
    #[test]
    fn every_todo_task_lands_in_schedule_or_overflow(
        tasks in proptest::collection::vec(arb_task(), 0..12),
        blocks in arb_blocks(),
    ) {
        let plan = Planner::new().generate(&tasks, reference_date(), &blocks);
        prop_assert_eq!(plan.schedule.len() + plan.overflow.len(), tasks.len());
    }

    #[test]
    fn quad_map_partitions_the_todo_set(
        tasks in proptest::collection::vec(arb_task(), 1..12),
        blocks in arb_blocks(),
    ) {
        let plan = Planner::new().generate(&tasks, reference_date(), &blocks);
        let segments = build_segments(reference_date(), &blocks);
        if segments.is_empty() {
            prop_assert!(plan.quad_map.is_empty());
        } else {
            let mut ids: Vec<&str> = plan
                .quad_map
                .values()
                .flatten()
                .map(|t| t.id.as_str())
                .collect();
            ids.sort_unstable();
            ids.dedup();
            prop_assert_eq!(ids.len(), tasks.len());
        }
    }

    #[test]
    fn budget_is_respected(
        tasks in proptest::collection::vec(arb_task(), 0..12),
        blocks in arb_blocks(),
    ) {
        let plan = Planner::new().generate(&tasks, reference_date(), &blocks);
        if let Some(meta) = plan.meta {
            let placed: i64 = plan
                .schedule
                .iter()
                .map(|e| e.duration_minutes())
                .sum();
            prop_assert_eq!(placed, meta.used_min);
            prop_assert!(meta.used_min <= meta.sched_limit_min);
            prop_assert!(meta.sched_limit_min <= meta.total_available_min);
        } else {
            prop_assert!(plan.schedule.is_empty());
        }
    }

    #[test]
    fn entries_stay_inside_some_segment(
        tasks in proptest::collection::vec(arb_task(), 0..12),
        blocks in arb_blocks(),
    ) {
        let plan = Planner::new().generate(&tasks, reference_date(), &blocks);
        let segments = build_segments(reference_date(), &blocks);
        for entry in &plan.schedule {
            prop_assert!(segments
                .iter()
                .any(|s| entry.start >= s.start && entry.end <= s.end));
        }
        for pair in plan.schedule.windows(2) {
            prop_assert!(pair[0].end <= pair[1].start);
        }
    }
}
