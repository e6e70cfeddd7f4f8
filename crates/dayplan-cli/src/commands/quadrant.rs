//! Quadrant classification view.

use clap::Subcommand;
use std::collections::BTreeMap;
use std::path::PathBuf;

use dayplan_core::{classify, format_quadrants, PlannerConfig, Quadrant, Task, TaskStatus};

use crate::common;

#[derive(Subcommand)]
pub enum QuadrantAction {
    /// Show pending tasks bucketed by quadrant
    Show {
        /// TOML tasks file ([[tasks]] records)
        #[arg(long)]
        tasks: PathBuf,
        /// Target date, YYYY-MM-DD (default: tomorrow)
        #[arg(long)]
        date: Option<String>,
        /// Print the buckets as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: QuadrantAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        QuadrantAction::Show { tasks, date, json } => {
            let task_list = common::load_tasks(&tasks)?;
            let reference_date = common::resolve_date(date.as_deref())?;
            let config = PlannerConfig::load_or_default();

            let mut quad_map: BTreeMap<Quadrant, Vec<Task>> =
                Quadrant::ALL.iter().map(|&q| (q, Vec::new())).collect();
            for task in task_list
                .into_iter()
                .filter(|t| t.status == TaskStatus::Todo)
            {
                let q = classify(&task, reference_date, &config);
                quad_map.entry(q).or_default().push(task);
            }

            if json {
                println!("{}", serde_json::to_string_pretty(&quad_map)?);
            } else {
                print!("{}", format_quadrants(&quad_map));
            }
        }
    }
    Ok(())
}
