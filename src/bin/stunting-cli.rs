// ABOUTME: Command-line tool for one-off predictions, catalog lookups, and artifact checks
// ABOUTME: Prints JSON to stdout using the same artifacts and pipeline as the server
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stunting Predictor Contributors

//! # Stunting Predictor CLI
//!
//! Usage:
//! ```bash
//! # Predict for a 24-month-old boy, 83 cm, 10.5 kg
//! stunting-cli predict --age 24 --sex Laki-laki --height 83 --weight 10.5
//!
//! # Show the nutrition guidance for a status at 3 months
//! stunting-cli recommend --status Stunted --age 3
//!
//! # Check which artifacts load
//! stunting-cli status --model-dir ./model
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use std::process::ExitCode;
use stunting_intelligence::RecommendationCatalog;
use stunting_predictor::{
    config::{LogLevel, ModelPaths},
    constants::service_names,
    logging::{LogFormat, LoggingConfig},
    predict_outcome,
    resources::PredictionResources,
};

#[derive(Parser)]
#[command(
    name = "stunting-cli",
    about = "Child stunting prediction CLI",
    long_about = "Run predictions, inspect nutrition guidance, and verify model artifacts from the command line."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Model artifact directory (defaults to MODEL_DIR and per-artifact overrides)
    #[arg(long, global = true)]
    model_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Classify one child and print the result
    Predict {
        /// Age in months
        #[arg(long)]
        age: f64,
        /// "Laki-laki" or "Perempuan"
        #[arg(long)]
        sex: String,
        /// Height in centimetres
        #[arg(long)]
        height: f64,
        /// Weight in kilograms
        #[arg(long)]
        weight: f64,
    },
    /// Print the nutrition guidance for a status name
    Recommend {
        /// Status name, e.g. "Severely Stunted"
        #[arg(long)]
        status: String,
        /// Age in months
        #[arg(long)]
        age: f64,
    },
    /// Print which artifacts loaded
    Status,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LogLevel::Debug
    } else {
        LogLevel::Warn
    };
    let logging = LoggingConfig {
        format: LogFormat::Compact,
        use_stderr: true,
        ..LoggingConfig::from_env()
            .with_service_name(service_names::STUNTING_CLI)
            .with_level(level)
    };
    logging.init()?;

    let paths = cli
        .model_dir
        .map_or_else(ModelPaths::from_env, ModelPaths::from_dir);

    match cli.command {
        Command::Predict {
            age,
            sex,
            height,
            weight,
        } => {
            let resources = PredictionResources::load(&paths);
            let outcome = predict_outcome(&resources, age, &sex, height, weight);
            print_json(&outcome)?;
            Ok(if outcome.is_success() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Command::Recommend { status, age } => {
            let record = RecommendationCatalog::standard().recommend_by_name(&status, age);
            print_json(&record)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Status => {
            let resources = PredictionResources::load(&paths);
            print_json(resources.status())?;
            Ok(if resources.is_ready() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
