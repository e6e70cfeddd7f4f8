//! Shared input handling for CLI commands.
//!
//! Tasks always arrive through a TOML file the user maintains; the CLI keeps
//! no task store of its own. Blocks are given as `HH:MM-HH:MM` flags and the
//! target date defaults to tomorrow.

use chrono::{Days, NaiveDate, NaiveTime, Utc};
use serde::Deserialize;
use std::path::Path;

use dayplan_core::{CoreError, Task};

/// The three availability blocks the original planner ships with.
pub fn default_blocks() -> Vec<(NaiveTime, NaiveTime)> {
    let blocks: [((u32, u32), (u32, u32)); 3] =
        [((9, 0), (12, 0)), ((13, 30), (18, 0)), ((20, 0), (22, 0))];
    blocks
        .iter()
        .filter_map(|&((sh, sm), (eh, em))| {
            Some((
                NaiveTime::from_hms_opt(sh, sm, 0)?,
                NaiveTime::from_hms_opt(eh, em, 0)?,
            ))
        })
        .collect()
}

#[derive(Deserialize)]
struct TaskFile {
    #[serde(default)]
    tasks: Vec<Task>,
}

/// Load and validate a TOML tasks file (`[[tasks]]` records).
pub fn load_tasks(path: &Path) -> Result<Vec<Task>, CoreError> {
    let content = std::fs::read_to_string(path)?;
    let file: TaskFile = toml::from_str(&content)
        .map_err(|e| CoreError::Custom(format!("cannot parse {}: {e}", path.display())))?;
    for task in &file.tasks {
        task.validate()?;
    }
    Ok(file.tasks)
}

/// Parse a `HH:MM-HH:MM` block flag.
pub fn parse_block(s: &str) -> Result<(NaiveTime, NaiveTime), String> {
    let (start, end) = s
        .split_once('-')
        .ok_or_else(|| format!("expected HH:MM-HH:MM, got '{s}'"))?;
    let start = NaiveTime::parse_from_str(start.trim(), "%H:%M")
        .map_err(|_| format!("invalid start time '{start}'"))?;
    let end = NaiveTime::parse_from_str(end.trim(), "%H:%M")
        .map_err(|_| format!("invalid end time '{end}'"))?;
    Ok((start, end))
}

/// Parse a `YYYY-MM-DD` date flag, defaulting to tomorrow.
pub fn resolve_date(flag: Option<&str>) -> Result<NaiveDate, Box<dyn std::error::Error>> {
    match flag {
        Some(s) => Ok(NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map_err(|_| format!("invalid date '{s}', expected YYYY-MM-DD"))?),
        None => Ok(Utc::now().date_naive() + Days::new(1)),
    }
}
