//! ROI calculator CLI
//!
//! Runs a single projection and prints the summary and monthly table.
//! The business model and currency come from `--profile`, then the
//! ROI_BUSINESS_MODEL / ROI_CURRENCY environment variables, then flags.

use anyhow::{Context, Result};
use clap::Parser;
use roi_projection::{
    params::load_parameters_json,
    report::{export_csv, format_currency, format_percentage},
    BusinessModel, BusinessParameters, BusinessProfile, Currency, ScenarioRunner,
};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "roi-calc")]
#[command(about = "Project revenue, profit and ROI for an online store", long_about = None)]
#[command(version)]
struct Cli {
    /// Orders placed per month
    #[arg(long, default_value_t = 1000.0)]
    monthly_sales: f64,

    /// Average order value
    #[arg(long, default_value_t = 50.0)]
    average_order_value: f64,

    /// Profit margin (%)
    #[arg(long, default_value_t = 30.0)]
    profit_margin: f64,

    /// Marketing budget over the whole horizon
    #[arg(long, default_value_t = 5000.0)]
    marketing_budget: f64,

    /// Operating costs over the whole horizon
    #[arg(long, default_value_t = 3000.0)]
    operating_costs: f64,

    /// Monthly growth rate (%)
    #[arg(long, default_value_t = 5.0)]
    growth_rate: f64,

    /// Projection horizon in months
    #[arg(long, default_value_t = 12)]
    months: u32,

    /// Call-center confirmation rate (%), COD only
    #[arg(long, default_value_t = 80.0)]
    confirmation_rate: f64,

    /// Cost per confirmation call, COD only
    #[arg(long, default_value_t = 2.0)]
    confirmation_cost: f64,

    /// Delivery success rate (%), COD only
    #[arg(long, default_value_t = 90.0)]
    delivery_rate: f64,

    /// Shipping cost per delivered order, COD only
    #[arg(long, default_value_t = 10.0)]
    shipping_cost: f64,

    /// Read all parameters from a JSON file instead of the flags above
    #[arg(long)]
    params: Option<PathBuf>,

    /// Business model (standard, cod)
    #[arg(short, long)]
    model: Option<BusinessModel>,

    /// Display currency (usd, eur, gbp, cad, aed)
    #[arg(short, long)]
    currency: Option<Currency>,

    /// Business profile JSON file
    #[arg(long)]
    profile: Option<PathBuf>,

    /// Write the report to this CSV file
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Print the full result as JSON instead of tables
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn business_profile(&self) -> Result<BusinessProfile> {
        let mut profile = match &self.profile {
            Some(path) => BusinessProfile::from_json_path(path)
                .with_context(|| format!("Failed to read profile {}", path.display()))?,
            None => BusinessProfile::from_env().context("Invalid business profile environment")?,
        };
        if let Some(model) = self.model {
            profile.model = model;
        }
        if let Some(currency) = self.currency {
            profile.currency = currency;
        }
        Ok(profile)
    }

    fn business_parameters(&self) -> Result<BusinessParameters> {
        if let Some(path) = &self.params {
            return load_parameters_json(path)
                .with_context(|| format!("Failed to read parameters {}", path.display()));
        }
        Ok(BusinessParameters::new(
            self.monthly_sales,
            self.average_order_value,
            self.profit_margin,
            self.marketing_budget,
            self.operating_costs,
            self.growth_rate,
            self.months,
        )
        .with_cod(
            self.confirmation_rate,
            self.confirmation_cost,
            self.delivery_rate,
            self.shipping_cost,
        ))
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let profile = cli.business_profile()?;
    let params = cli.business_parameters()?;
    params.validate().context("Invalid business parameters")?;

    let runner = ScenarioRunner::from_profile(&profile);
    let result = runner.run(&params);

    if let Some(path) = &cli.csv {
        export_csv(path, &params, profile.model, &result)
            .with_context(|| format!("Unable to write report to {}", path.display()))?;
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    let money = |v: f64| format_currency(v, profile.currency);

    println!("ROI Projection ({}, {})", profile.model, profile.currency);
    println!("==============================\n");

    println!("Results ({} months):", params.horizon_months);
    println!("  Total Revenue:        {}", money(result.total_revenue));
    println!("  Total Profit:         {}", money(result.total_profit));
    println!("  Total Investment:     {}", money(result.total_investment));
    println!("  ROI:                  {}", format_percentage(result.roi_pct));
    if result.is_paid_back() {
        println!("  Payback Period:       {} months", result.payback_period_months);
    } else {
        println!("  Payback Period:       not within {} months", result.payback_period_months);
    }
    println!("  Marketing Efficiency: {:.2}", result.marketing_efficiency);
    println!("  Operating Margin:     {}", format_percentage(result.operating_margin_pct));
    println!();

    println!("{:>5} {:>16} {:>16}", "Month", "Revenue", "Profit");
    println!("{}", "-".repeat(39));
    for point in &result.growth_series {
        println!("{:>5} {:>16} {:>16}", point.month, money(point.revenue), money(point.profit));
    }

    if let Some(path) = &cli.csv {
        println!("\nFull report written to: {}", path.display());
    }

    Ok(())
}
