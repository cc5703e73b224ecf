//! Flat CSV-style export of a projection and the parameters behind it
//!
//! Layout: a `Parameter,Value` block, a blank line, a `Results` block, a blank
//! line, then the monthly table. COD parameters appear only for COD runs.

use crate::error::Result;
use crate::params::{BusinessModel, BusinessParameters};
use crate::projection::{round_to_cents, ProjectionResult};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Default file name for exported reports
pub const DEFAULT_REPORT_FILE: &str = "roi_calculator_results.csv";

/// Two-decimal rendering consistent with the monthly rounding
///
/// Always positional: magnitudes of 1e21 and above print every integer digit
/// where a browser `toFixed` would switch to exponent notation.
pub fn fixed2(value: f64) -> String {
    let rounded = round_to_cents(value);
    if rounded == 0.0 {
        // Keep the sign of small negatives, drop it from a true zero
        return if value < 0.0 { "-0.00".to_string() } else { "0.00".to_string() };
    }
    format!("{:.2}", rounded)
}

/// Render the report as text
///
/// Parameter values use the shortest round-trip form without an exponent, so
/// values below 1e-6 or from 1e21 up print in full rather than as `1e-7` or
/// `1e+21`. Validated inputs stay far from either limit.
pub fn render_report(
    params: &BusinessParameters,
    model: BusinessModel,
    result: &ProjectionResult,
) -> String {
    let mut out = String::new();

    out.push_str("Parameter,Value\n");
    out.push_str(&format!("Monthly Sales,{}\n", params.monthly_sales_volume));
    out.push_str(&format!("Average Order Value,{}\n", params.average_order_value));
    out.push_str(&format!("Profit Margin,{}%\n", params.profit_margin_pct));
    out.push_str(&format!("Marketing Budget,{}\n", params.marketing_budget));
    out.push_str(&format!("Operating Costs,{}\n", params.operating_costs));
    out.push_str(&format!("Projected Growth Rate,{}%\n", params.monthly_growth_rate_pct));
    out.push_str(&format!("Timeframe (Months),{}\n", params.horizon_months));

    if model.is_cod() {
        out.push_str(&format!("Call Center Confirmation Rate,{}%\n", params.confirmation_rate()));
        out.push_str(&format!("Call Center Confirmation Cost,{}\n", params.confirmation_cost()));
        out.push_str(&format!("Shipping Deliverability,{}%\n", params.delivery_success_rate()));
        out.push_str(&format!("Shipping Cost,{}\n", params.shipping_cost()));
    }

    out.push_str("\nResults\n");
    out.push_str(&format!("Total Revenue,{}\n", fixed2(result.total_revenue)));
    out.push_str(&format!("Total Profit,{}\n", fixed2(result.total_profit)));
    out.push_str(&format!("ROI,{}%\n", fixed2(result.roi_pct)));
    out.push_str(&format!("Payback Period,{} months\n", result.payback_period_months));
    out.push_str(&format!("Marketing Efficiency,{}\n", fixed2(result.marketing_efficiency)));
    out.push_str(&format!("Operating Margin,{}%\n", fixed2(result.operating_margin_pct)));

    out.push_str("\nMonthly Growth Projection\n");
    out.push_str("Month,Revenue,Profit\n");
    for point in &result.growth_series {
        out.push_str(&format!("{},{},{}\n", point.month, fixed2(point.revenue), fixed2(point.profit)));
    }

    out
}

/// Write the report to any writer
pub fn write_report<W: Write>(
    writer: &mut W,
    params: &BusinessParameters,
    model: BusinessModel,
    result: &ProjectionResult,
) -> Result<()> {
    writer.write_all(render_report(params, model, result).as_bytes())?;
    writer.flush()?;
    Ok(())
}

/// Write the report to a file
pub fn export_csv<P: AsRef<Path>>(
    path: P,
    params: &BusinessParameters,
    model: BusinessModel,
    result: &ProjectionResult,
) -> Result<()> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    write_report(&mut writer, params, model, result)?;
    log::info!("Report written to {}", path.display());
    Ok(())
}
