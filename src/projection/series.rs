//! Projection output structures

use serde::{Deserialize, Serialize};

use super::metrics::payback_month;

/// One month of the growth projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonthlyPoint {
    /// Month index (1-indexed)
    pub month: u32,

    /// Projected revenue, rounded to cents
    pub revenue: f64,

    /// Projected profit after amortized costs and marketing, rounded to cents
    pub profit: f64,
}

/// Complete projection result
///
/// Totals are sums over `growth_series`, so they always agree with the
/// monthly rows to the cent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionResult {
    pub total_revenue: f64,
    pub total_profit: f64,

    /// Marketing budget plus effective costs
    pub total_investment: f64,

    /// Total profit over total investment (%), 0 when nothing was invested
    pub roi_pct: f64,

    /// First month whose cumulative profit covers the investment;
    /// saturates at the horizon when that never happens
    pub payback_period_months: u32,

    /// Monthly rows in timeline order
    pub growth_series: Vec<MonthlyPoint>,

    /// Revenue per unit of marketing spend, 0 without a marketing budget
    pub marketing_efficiency: f64,

    /// Total profit over total revenue (%), 0 without revenue
    pub operating_margin_pct: f64,
}

impl ProjectionResult {
    /// Number of projected months
    pub fn horizon_months(&self) -> u32 {
        self.growth_series.len() as u32
    }

    /// Whether cumulative profit actually reached the investment within the
    /// horizon. A saturated payback period alone cannot distinguish "paid back
    /// in the last month" from "never paid back".
    pub fn is_paid_back(&self) -> bool {
        payback_month(&self.growth_series, self.total_investment).is_some()
    }

    /// Get summary statistics
    pub fn summary(&self) -> ProjectionSummary {
        let months = self.horizon_months();
        let peak_monthly_revenue = self
            .growth_series
            .iter()
            .map(|p| p.revenue)
            .fold(0.0, f64::max);
        let final_month_profit = self.growth_series.last().map(|p| p.profit).unwrap_or(0.0);
        let average_monthly_profit = if months > 0 {
            self.total_profit / months as f64
        } else {
            0.0
        };

        ProjectionSummary {
            months,
            peak_monthly_revenue,
            final_month_profit,
            average_monthly_profit,
            paid_back: self.is_paid_back(),
        }
    }
}

/// Summary statistics for a projection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionSummary {
    pub months: u32,
    pub peak_monthly_revenue: f64,
    pub final_month_profit: f64,
    pub average_monthly_profit: f64,
    pub paid_back: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result_with(profits: &[f64], total_investment: f64) -> ProjectionResult {
        let growth_series: Vec<MonthlyPoint> = profits
            .iter()
            .enumerate()
            .map(|(i, &profit)| MonthlyPoint {
                month: i as u32 + 1,
                revenue: 1000.0 * (i as f64 + 1.0),
                profit,
            })
            .collect();
        ProjectionResult {
            total_revenue: growth_series.iter().map(|p| p.revenue).sum(),
            total_profit: profits.iter().sum(),
            total_investment,
            roi_pct: 0.0,
            payback_period_months: growth_series.len() as u32,
            growth_series,
            marketing_efficiency: 0.0,
            operating_margin_pct: 0.0,
        }
    }

    #[test]
    fn test_paid_back_in_last_month() {
        let result = result_with(&[100.0, 100.0, 100.0], 300.0);
        assert!(result.is_paid_back());
        assert_eq!(payback_month(&result.growth_series, 300.0), Some(3));
    }

    #[test]
    fn test_never_paid_back() {
        let result = result_with(&[100.0, 100.0, 100.0], 301.0);
        assert!(!result.is_paid_back());
    }

    #[test]
    fn test_paid_back_agrees_with_payback_month() {
        for investment in [0.0, 99.0, 150.0, 300.0, 300.5, 1_000.0] {
            let result = result_with(&[-10.0, 160.0, 150.0], investment);
            let month = payback_month(&result.growth_series, investment);
            assert_eq!(result.is_paid_back(), month.is_some());
        }
    }

    #[test]
    fn test_summary() {
        let result = result_with(&[-50.0, 20.0, 90.0], 10.0);
        let summary = result.summary();
        assert_eq!(summary.months, 3);
        assert_eq!(summary.peak_monthly_revenue, 3000.0);
        assert_eq!(summary.final_month_profit, 90.0);
        assert!((summary.average_monthly_profit - 20.0).abs() < 1e-12);
        assert!(summary.paid_back);
    }

    #[test]
    fn test_summary_of_empty_series() {
        let result = result_with(&[], 0.0);
        let summary = result.summary();
        assert_eq!(summary.months, 0);
        assert_eq!(summary.average_monthly_profit, 0.0);
        assert_eq!(summary.final_month_profit, 0.0);
    }
}
