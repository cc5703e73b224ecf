//! Run every scenario in a parameter CSV and write one summary row per scenario
//!
//! Usage: run_batch <scenarios.csv> [--model cod] [--output batch_summary.csv]

use anyhow::{Context, Result};
use clap::Parser;
use roi_projection::{params::load_parameters, report::fixed2, BusinessModel, BusinessProfile, ScenarioRunner};
use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "run_batch")]
#[command(about = "Project every scenario in a parameter CSV", long_about = None)]
struct Args {
    /// Scenario CSV (one parameter set per row)
    input: PathBuf,

    /// Business model; defaults to ROI_BUSINESS_MODEL or standard
    #[arg(short, long)]
    model: Option<BusinessModel>,

    /// Summary output file
    #[arg(short, long, default_value = "batch_summary.csv")]
    output: PathBuf,
}

/// One output row per scenario
#[derive(Debug, Serialize)]
struct SummaryRow {
    #[serde(rename = "Scenario")]
    scenario: String,
    #[serde(rename = "Status")]
    status: String,
    #[serde(rename = "TotalRevenue")]
    total_revenue: Option<String>,
    #[serde(rename = "TotalProfit")]
    total_profit: Option<String>,
    #[serde(rename = "ROI")]
    roi_pct: Option<String>,
    #[serde(rename = "PaybackMonths")]
    payback_months: Option<u32>,
    #[serde(rename = "PaidBack")]
    paid_back: Option<bool>,
    #[serde(rename = "MarketingEfficiency")]
    marketing_efficiency: Option<String>,
    #[serde(rename = "OperatingMargin")]
    operating_margin_pct: Option<String>,
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let start = Instant::now();

    let model = match args.model {
        Some(model) => model,
        None => BusinessProfile::from_env()?.model,
    };

    println!("Loading scenarios from {}...", args.input.display());
    let scenarios = load_parameters(&args.input)
        .with_context(|| format!("Failed to load scenarios from {}", args.input.display()))?;
    println!("Loaded {} scenarios in {:?}", scenarios.len(), start.elapsed());

    let runner = ScenarioRunner::new(model);
    let proj_start = Instant::now();
    let outcomes = runner.run_batch(&scenarios);
    println!("Projections complete in {:?}", proj_start.elapsed());

    let mut writer = csv::Writer::from_path(&args.output)
        .with_context(|| format!("Failed to create {}", args.output.display()))?;

    let mut ok = 0usize;
    for outcome in &outcomes {
        let row = match &outcome.result {
            Ok(result) => {
                ok += 1;
                SummaryRow {
                    scenario: outcome.name.clone(),
                    status: "ok".to_string(),
                    total_revenue: Some(fixed2(result.total_revenue)),
                    total_profit: Some(fixed2(result.total_profit)),
                    roi_pct: Some(fixed2(result.roi_pct)),
                    payback_months: Some(result.payback_period_months),
                    paid_back: Some(result.is_paid_back()),
                    marketing_efficiency: Some(fixed2(result.marketing_efficiency)),
                    operating_margin_pct: Some(fixed2(result.operating_margin_pct)),
                }
            }
            Err(e) => SummaryRow {
                scenario: outcome.name.clone(),
                status: e.to_string(),
                total_revenue: None,
                total_profit: None,
                roi_pct: None,
                payback_months: None,
                paid_back: None,
                marketing_efficiency: None,
                operating_margin_pct: None,
            },
        };
        writer.serialize(row)?;
    }
    writer.flush()?;

    println!("Output written to {}", args.output.display());
    println!("\nBatch Summary ({}):", model);
    println!("  Scenarios: {}", outcomes.len());
    println!("  Projected: {}", ok);
    println!("  Rejected:  {}", outcomes.len() - ok);
    println!("\nTotal time: {:?}", start.elapsed());

    Ok(())
}
