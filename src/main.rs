use anyhow::Result;
use clap::{Parser, Subcommand};

use mandi_targets::cli::{handle_months_command, handle_plan_command, PlanArgs};

#[derive(Parser)]
#[command(
    name = "mandi",
    version,
    about = "Market fee target planning for agricultural market committees",
    long_about = "mandi-targets lets market committee staff plan yearly market \
                  fee collection targets, spread them across the fiscal months \
                  (April-March) and collection points, and produce the record \
                  batch handed to the persistence backend."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a target plan and print the resulting record batch
    Plan(PlanArgs),

    /// Show the fiscal month order for a financial year
    Months {
        /// Financial year, e.g. "2024" or "2024-25"
        year: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Plan(args) => handle_plan_command(args)?,
        Commands::Months { year } => handle_months_command(&year)?,
    }

    Ok(())
}
