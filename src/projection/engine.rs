//! Core projection engine for monthly revenue and profit projections

use crate::params::{BusinessModel, BusinessParameters};
use super::adjustment::EffectiveBase;
use super::metrics;
use super::rounding::round_to_cents;
use super::series::{MonthlyPoint, ProjectionResult};

/// Project a parameter set under the given business model
///
/// Pure and deterministic: identical inputs give bit-identical results. The
/// engine does not validate; see [`BusinessParameters::validate`].
pub fn compute(params: &BusinessParameters, model: BusinessModel) -> ProjectionResult {
    ProjectionEngine::new(model).project(params)
}

/// Main projection engine
///
/// Holds only the business model, so one engine can be shared across threads
/// and reused for any number of parameter sets.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProjectionEngine {
    model: BusinessModel,
}

impl ProjectionEngine {
    /// Create a new projection engine for a business model
    pub fn new(model: BusinessModel) -> Self {
        Self { model }
    }

    pub fn model(&self) -> BusinessModel {
        self.model
    }

    /// Run the projection for one parameter set
    pub fn project(&self, params: &BusinessParameters) -> ProjectionResult {
        let base = EffectiveBase::from_params(params, self.model);
        log::debug!(
            "Projecting {} months ({}): effective volume {:.4}, effective costs {:.2}",
            params.horizon_months,
            self.model,
            base.effective_volume,
            base.effective_costs,
        );

        let growth_series = self.growth_series(params, &base);

        // Sums of the already-rounded monthly values; never re-rounded
        let total_revenue: f64 = growth_series.iter().map(|p| p.revenue).sum();
        let total_profit: f64 = growth_series.iter().map(|p| p.profit).sum();

        // Costs are not re-amortized here
        let total_investment = params.marketing_budget + base.effective_costs;

        let payback_period_months = metrics::payback_period(&growth_series, total_investment);
        log::debug!(
            "Total revenue {:.2}, total profit {:.2}, payback month {}",
            total_revenue,
            total_profit,
            payback_period_months,
        );

        ProjectionResult {
            total_revenue,
            total_profit,
            total_investment,
            roi_pct: metrics::roi_pct(total_profit, total_investment),
            payback_period_months,
            growth_series,
            marketing_efficiency: metrics::marketing_efficiency(total_revenue, params.marketing_budget),
            operating_margin_pct: metrics::operating_margin_pct(total_profit, total_revenue),
        }
    }

    /// Build the monthly rows
    ///
    /// Costs and marketing are spread evenly over the horizon; only the margin
    /// term grows with revenue.
    fn growth_series(&self, params: &BusinessParameters, base: &EffectiveBase) -> Vec<MonthlyPoint> {
        let horizon = params.horizon_months;
        let baseline_revenue = base.baseline_monthly_revenue(params.average_order_value);
        let growth = 1.0 + params.monthly_growth_rate_pct / 100.0;
        let margin = params.profit_margin_pct / 100.0;
        let monthly_costs = base.effective_costs / horizon as f64;
        let monthly_marketing = params.marketing_budget / horizon as f64;

        (0..horizon)
            .map(|i| {
                let growth_factor = growth.powf(i as f64);
                let revenue = baseline_revenue * growth_factor;
                let profit = revenue * margin - monthly_costs - monthly_marketing;

                MonthlyPoint {
                    month: i + 1,
                    revenue: round_to_cents(revenue),
                    profit: round_to_cents(profit),
                }
            })
            .collect()
    }
}
