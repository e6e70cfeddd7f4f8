//! Plan generation command.

use clap::Subcommand;
use std::path::PathBuf;

use dayplan_core::{format_plan, Planner, PlannerConfig};

use crate::common;

#[derive(Subcommand)]
pub enum PlanAction {
    /// Generate a timetable from a tasks file
    Generate {
        /// TOML tasks file ([[tasks]] records)
        #[arg(long)]
        tasks: PathBuf,
        /// Target date, YYYY-MM-DD (default: tomorrow)
        #[arg(long)]
        date: Option<String>,
        /// Availability block HH:MM-HH:MM, repeatable
        /// (default: 09:00-12:00, 13:30-18:00, 20:00-22:00)
        #[arg(long = "block", value_parser = common::parse_block)]
        blocks: Vec<(chrono::NaiveTime, chrono::NaiveTime)>,
        /// Override the configured buffer ratio
        #[arg(long)]
        buffer_ratio: Option<f64>,
        /// Override the configured Q2 guarantee
        #[arg(long)]
        ensure_q2: Option<usize>,
        /// Print the plan as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: PlanAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        PlanAction::Generate {
            tasks,
            date,
            blocks,
            buffer_ratio,
            ensure_q2,
            json,
        } => {
            let task_list = common::load_tasks(&tasks)?;
            let reference_date = common::resolve_date(date.as_deref())?;
            let blocks = if blocks.is_empty() {
                common::default_blocks()
            } else {
                blocks
            };

            let mut config = PlannerConfig::load_or_default();
            if let Some(ratio) = buffer_ratio {
                config.buffer_ratio = ratio;
            }
            if let Some(n) = ensure_q2 {
                config.ensure_q2 = n;
            }

            let plan = Planner::with_config(config).generate(&task_list, reference_date, &blocks);

            if json {
                println!("{}", serde_json::to_string_pretty(&plan)?);
            } else {
                print!("{}", format_plan(&plan, reference_date));
            }
        }
    }
    Ok(())
}
