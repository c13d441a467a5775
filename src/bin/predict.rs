//! Command-line access to the prediction and comparison services.
//!
//! Results go to stdout as JSON; logs go to stderr.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rangecast::application::comparison_renderer::COMPARISON_TARGETS;
use rangecast::application::system::Application;
use rangecast::config::Config;
use rangecast::domain::ml::feature_registry::FeeTier;
use rangecast::domain::validation::PredictionInputs;
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(author, version, about = "ROI / Fee APR predictions for WBTC-WETH positions", long_about = None)]
struct Cli {
    /// Override ARTIFACT_DIR
    #[arg(long, global = true)]
    artifact_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Predict ROI and Fee APR for one position
    Predict {
        /// Fee tier: 0.05% or 0.3%
        #[arg(long, default_value = "0.05%")]
        fee_tier: String,

        /// Lower price bound (BTC per ETH)
        #[arg(long, default_value_t = 12.0)]
        price_lower: f64,

        /// Upper price bound (BTC per ETH)
        #[arg(long, default_value_t = 14.0)]
        price_upper: f64,

        /// Days the liquidity stays in the pool
        #[arg(long, default_value_t = 7.0)]
        age: f64,
    },
    /// Print the actual-vs-predicted chart description for a target
    Chart {
        /// Target in original units (roi, fee_apr)
        #[arg(short, long, default_value = "roi")]
        target: String,
    },
    /// Print error statistics for every evaluation table
    Summary,
}

#[derive(Serialize)]
struct TargetSummary<'a> {
    target: &'a str,
    title: String,
    #[serde(flatten)]
    summary: rangecast::domain::comparison::ComparisonSummary,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let mut config = Config::from_env().context("Failed to load config")?;
    if let Some(dir) = cli.artifact_dir {
        config.artifacts.artifact_dir = dir;
    }
    let app = Application::build(config).context("Failed to build application")?;

    match cli.command {
        Commands::Predict {
            fee_tier,
            price_lower,
            price_upper,
            age,
        } => {
            let inputs = PredictionInputs {
                fee_tier: fee_tier.parse::<FeeTier>()?,
                price_lower,
                price_upper,
                age,
            };
            let record = inputs.validate()?;
            let row = app
                .predictions
                .predict_all(&record)
                .context("Prediction failed")?;
            println!("{}", serde_json::to_string_pretty(&row)?);
        }
        Commands::Chart { target } => {
            let chart = app
                .comparisons
                .render(&target)
                .with_context(|| format!("Failed to render chart for '{}'", target))?;
            println!("{}", serde_json::to_string_pretty(&chart)?);
        }
        Commands::Summary => {
            let mut summaries = Vec::with_capacity(COMPARISON_TARGETS.len());
            for target in COMPARISON_TARGETS {
                let chart = app
                    .comparisons
                    .render(target)
                    .with_context(|| format!("Failed to load table for '{}'", target))?;
                summaries.push(TargetSummary {
                    target,
                    title: chart.title,
                    summary: chart.summary,
                });
            }
            info!("Summarized {} tables", summaries.len());
            println!("{}", serde_json::to_string_pretty(&summaries)?);
        }
    }

    Ok(())
}
