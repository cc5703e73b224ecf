//! Load scenario parameter sets from CSV or JSON

use super::{BusinessParameters, NamedParameters};
use crate::error::Result;
use csv::Reader;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Raw CSV row; COD columns may be missing or left blank
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "ScenarioName", default)]
    scenario_name: Option<String>,
    #[serde(rename = "MonthlySales")]
    monthly_sales: f64,
    #[serde(rename = "AverageOrderValue")]
    average_order_value: f64,
    #[serde(rename = "ProfitMargin")]
    profit_margin: f64,
    #[serde(rename = "MarketingBudget")]
    marketing_budget: f64,
    #[serde(rename = "OperatingCosts")]
    operating_costs: f64,
    #[serde(rename = "GrowthRate")]
    growth_rate: f64,
    #[serde(rename = "TimeframeMonths")]
    timeframe_months: u32,
    #[serde(rename = "ConfirmationRate", default)]
    confirmation_rate: Option<f64>,
    #[serde(rename = "ConfirmationCost", default)]
    confirmation_cost: Option<f64>,
    #[serde(rename = "DeliverySuccessRate", default)]
    delivery_success_rate: Option<f64>,
    #[serde(rename = "ShippingCost", default)]
    shipping_cost: Option<f64>,
}

impl CsvRow {
    fn into_named(self, row_number: usize) -> NamedParameters {
        let name = self
            .scenario_name
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| format!("scenario-{}", row_number));

        let mut params = BusinessParameters::new(
            self.monthly_sales,
            self.average_order_value,
            self.profit_margin,
            self.marketing_budget,
            self.operating_costs,
            self.growth_rate,
            self.timeframe_months,
        );
        params.confirmation_rate_pct = self.confirmation_rate;
        params.confirmation_cost_per_call = self.confirmation_cost;
        params.delivery_success_rate_pct = self.delivery_success_rate;
        params.shipping_cost_per_order = self.shipping_cost;

        NamedParameters { name, params }
    }
}

/// Load all parameter sets from a CSV file
pub fn load_parameters<P: AsRef<Path>>(path: P) -> Result<Vec<NamedParameters>> {
    let path = path.as_ref();
    log::info!("Loading parameter sets from {}", path.display());
    let file = File::open(path)?;
    load_parameters_from_reader(file)
}

/// Load parameter sets from any reader (e.g., string buffer, request body)
pub fn load_parameters_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<NamedParameters>> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut scenarios = Vec::new();

    for (idx, result) in csv_reader.deserialize().enumerate() {
        let row: CsvRow = result?;
        scenarios.push(row.into_named(idx + 1));
    }

    log::debug!("Loaded {} parameter sets", scenarios.len());
    Ok(scenarios)
}

/// Load a single parameter set from a JSON file
pub fn load_parameters_json<P: AsRef<Path>>(path: P) -> Result<BusinessParameters> {
    let file = File::open(path)?;
    let params = serde_json::from_reader(BufReader::new(file))?;
    Ok(params)
}
