// ABOUTME: Command line entry point generating a training plan or dry-running its calendar sync
// ABOUTME: Reads VELO_* configuration, logs to stderr and prints JSON results on stdout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Velo Plan Binary
//!
//! `generate` prints the plan as JSON. `sync` pushes the plan (generated, or
//! read from `--plan-file` / `VELO_PLAN_FILE`) through the in-memory synthetic
//! transport and prints the per-workout results with a summary.

use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use serde_json::json;
use std::path::PathBuf;
use tracing::info;
use velo_core::models::DayPlan;
use velo_plan::config::{PlanConfig, SyncConfig};
use velo_plan::logging;
use velo_plan::plan_file::{read_plan, render_plan};
use velo_plan::sync::{sync, SyncSummary};
use velo_providers::SyntheticTransport;

#[derive(Parser)]
#[command(name = "velo-plan")]
#[command(about = "Velo Plan - periodized cycling plan generator and workout sync")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the generated plan as JSON
    Generate,
    /// Dry-run the calendar sync and print the results
    Sync {
        /// Plan file to sync instead of generating one
        #[arg(long)]
        plan_file: Option<PathBuf>,
        /// Workout names already present remotely, skipped instead of uploaded
        #[arg(long = "existing")]
        existing: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    logging::init_from_env()?;

    let today = Local::now().date_naive();
    let plan_config = PlanConfig::from_env()?;

    match args.command {
        Command::Generate => {
            let plan = plan_config.schedule_request(today).generate();
            println!("{}", render_plan(&plan)?);
        }
        Command::Sync {
            plan_file,
            existing,
        } => {
            let plan = load_plan(&plan_config, plan_file, today).await?;
            let options = SyncConfig::from_env()?
                .options(today)
                .with_existing_workouts(existing);

            let transport = SyntheticTransport::new();
            let results = sync(&plan, &transport, &options).await;
            let summary = SyncSummary::from_results(&results);
            info!(total = summary.total(), "Dry run complete");

            let report = json!({ "results": results, "summary": summary });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}

async fn load_plan(
    config: &PlanConfig,
    plan_file: Option<PathBuf>,
    today: NaiveDate,
) -> Result<Vec<DayPlan>> {
    match plan_file.or_else(|| config.plan_file.clone()) {
        Some(path) => Ok(read_plan(&path).await?),
        None => Ok(config.schedule_request(today).generate()),
    }
}
