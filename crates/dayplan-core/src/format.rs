//! Plain-text rendering of plans and quadrant views.
//!
//! Produces the copy-pasteable text the CLI prints: a dated timetable with
//! one line per placed task, an overflow section, and a one-line summary of
//! the time budget.

use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::fmt::Write;

use crate::planner::DayPlan;
use crate::quadrant::Quadrant;
use crate::task::Task;

/// Render a generated plan as text lines.
pub fn format_plan(plan: &DayPlan, reference_date: NaiveDate) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Plan for {}", reference_date);

    if plan.schedule.is_empty() {
        out.push_str("(nothing scheduled)\n");
    } else {
        for entry in &plan.schedule {
            let _ = writeln!(
                out,
                "- {}\u{2013}{} {} ({})",
                entry.start.format("%H:%M"),
                entry.end.format("%H:%M"),
                entry.title,
                entry.quadrant,
            );
        }
    }

    if !plan.overflow.is_empty() {
        out.push('\n');
        out.push_str("Did not fit (deferred):\n");
        for task in &plan.overflow {
            let _ = writeln!(out, "- {} ({}m)", task.title, task.duration_min);
        }
    }

    if let Some(meta) = plan.meta {
        out.push('\n');
        let _ = writeln!(
            out,
            "available {}m | limit {}m | used {}m",
            meta.total_available_min, meta.sched_limit_min, meta.used_min,
        );
    }

    out
}

/// Render the four quadrant buckets as labelled sections.
pub fn format_quadrants(quad_map: &BTreeMap<Quadrant, Vec<Task>>) -> String {
    let mut out = String::new();
    for q in Quadrant::ALL {
        let _ = writeln!(out, "## {q}");
        match quad_map.get(&q) {
            Some(tasks) if !tasks.is_empty() => {
                for task in tasks {
                    let _ = writeln!(out, "\u{2022} {} ({}m)", task.title, task.duration_min);
                }
            }
            _ => out.push_str("(empty)\n"),
        }
        out.push('\n');
    }
    out
}
