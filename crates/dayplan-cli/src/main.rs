use clap::{Parser, Subcommand};

mod commands;
mod common;

#[derive(Parser)]
#[command(name = "dayplan", version, about = "Eisenhower-matrix daily planner")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the timetable for a day
    Plan {
        #[command(subcommand)]
        action: commands::plan::PlanAction,
    },
    /// Eisenhower quadrant view of pending tasks
    Quadrant {
        #[command(subcommand)]
        action: commands::quadrant::QuadrantAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Print an example tasks file
    Sample,
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Plan { action } => commands::plan::run(action),
        Commands::Quadrant { action } => commands::quadrant::run(action),
        Commands::Config { action } => commands::config::run(action),
        Commands::Sample => commands::sample::run(),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
