//! Plan CLI command
//!
//! Builds a one-shot planning session from command-line input: loads the
//! committee descriptor, applies distributions and direct month edits, then
//! prints the grid and the materialized record batch.

use clap::{Args, ValueEnum};
use std::path::PathBuf;

use crate::display::{format_batch, format_fiscal_calendar, format_plan_grid};
use crate::error::{TargetError, TargetResult};
use crate::export::export_batch_csv;
use crate::models::{FinancialYear, Money};
use crate::services::{DistributionScope, PlanningSession, TargetEntity};

/// Output format for the materialized batch
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Allocation grid plus a human-readable record listing
    Table,
    /// The record batch as JSON, as it would be submitted
    Json,
    /// The record batch as CSV
    Csv,
}

/// Arguments for the `plan` command
#[derive(Args, Debug)]
pub struct PlanArgs {
    /// Committee descriptor file (.json, .yaml, or .yml)
    #[arg(short, long)]
    pub committee: PathBuf,

    /// Financial year, e.g. "2024" or "2024-25"
    #[arg(short, long)]
    pub year: String,

    /// Username recorded on every emitted target record
    #[arg(long, env = "MANDI_SET_BY", default_value = "staff")]
    pub set_by: String,

    /// Restrict the session to a single calendar month (1-12);
    /// omit for the all-months scope
    #[arg(short, long)]
    pub month: Option<u32>,

    /// Total for the committee office, spread over the active scope
    #[arg(long, value_name = "AMOUNT")]
    pub office: Option<String>,

    /// Total for one checkpost, spread over the active scope
    /// (repeatable, "NAME=AMOUNT")
    #[arg(long = "checkpost", value_name = "NAME=AMOUNT")]
    pub checkposts: Vec<String>,

    /// Direct single-month edit (repeatable, "ENTITY:MONTH=AMOUNT";
    /// entity is "office" or a checkpost name)
    #[arg(long = "set", value_name = "ENTITY:MONTH=AMOUNT")]
    pub edits: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,
}

fn parse_amount(s: &str) -> TargetResult<Money> {
    Money::parse(s).map_err(|e| TargetError::Parse(e.to_string()))
}

/// Split a "KEY=VALUE" argument
fn split_pair<'a>(s: &'a str, what: &str) -> TargetResult<(&'a str, &'a str)> {
    s.split_once('=')
        .map(|(k, v)| (k.trim(), v.trim()))
        .ok_or_else(|| TargetError::Parse(format!("Expected {}, got '{}'", what, s)))
}

/// Handle the `plan` command
pub fn handle_plan_command(args: PlanArgs) -> TargetResult<()> {
    let committee = crate::models::Committee::load(&args.committee)?;
    let year = FinancialYear::parse(&args.year)?;

    let mut session = PlanningSession::new(committee, year, args.set_by.clone())?;

    if let Some(month) = args.month {
        session.set_scope(DistributionScope::single_month(month)?);
    }

    // Distributions over the active scope
    if let Some(total) = &args.office {
        session.distribute(TargetEntity::Office, parse_amount(total)?)?;
    }
    for entry in &args.checkposts {
        let (name, total) = split_pair(entry, "NAME=AMOUNT")?;
        let entity = session.resolve_entity(name)?;
        session.distribute(entity, parse_amount(total)?)?;
    }

    // Direct month edits, applied after distributions
    for entry in &args.edits {
        let (target, amount) = split_pair(entry, "ENTITY:MONTH=AMOUNT")?;
        let (entity_name, month) = target.split_once(':').ok_or_else(|| {
            TargetError::Parse(format!("Expected ENTITY:MONTH=AMOUNT, got '{}'", entry))
        })?;
        let entity = session.resolve_entity(entity_name)?;
        let month: u32 = month
            .trim()
            .parse()
            .map_err(|_| TargetError::Parse(format!("Invalid month in '{}'", entry)))?;
        session.set_month(entity, month, parse_amount(amount)?)?;
    }

    let batch = session.materialize();

    match args.format {
        OutputFormat::Table => {
            println!("{}", format_plan_grid(&session));
            println!("{}", format_batch(&batch, session.committee()));
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&batch)?);
        }
        OutputFormat::Csv => {
            export_batch_csv(&batch, std::io::stdout().lock())?;
        }
    }

    Ok(())
}

/// Handle the `months` command: print the fiscal calendar for a year
pub fn handle_months_command(year: &str) -> TargetResult<()> {
    let year = FinancialYear::parse(year)?;
    print!("{}", format_fiscal_calendar(year));
    Ok(())
}
