//! Range checks applied by callers before invoking the engine
//!
//! Bounds mirror the calculator form: at least one order and one currency unit
//! per order, percentages within 0-100, no negative costs, at least one month.

use super::BusinessParameters;
use crate::error::{Result, RoiError};

impl BusinessParameters {
    /// Check every field, returning the first violation found
    pub fn validate(&self) -> Result<()> {
        at_least("monthly_sales_volume", self.monthly_sales_volume, 1.0)?;
        at_least("average_order_value", self.average_order_value, 1.0)?;
        percentage("profit_margin_pct", self.profit_margin_pct)?;
        at_least("marketing_budget", self.marketing_budget, 0.0)?;
        at_least("operating_costs", self.operating_costs, 0.0)?;
        at_least("monthly_growth_rate_pct", self.monthly_growth_rate_pct, 0.0)?;

        if self.horizon_months < 1 {
            return Err(RoiError::validation("horizon_months", "must be at least 1"));
        }

        if let Some(rate) = self.confirmation_rate_pct {
            percentage("confirmation_rate_pct", rate)?;
        }
        if let Some(cost) = self.confirmation_cost_per_call {
            at_least("confirmation_cost_per_call", cost, 0.0)?;
        }
        if let Some(rate) = self.delivery_success_rate_pct {
            percentage("delivery_success_rate_pct", rate)?;
        }
        if let Some(cost) = self.shipping_cost_per_order {
            at_least("shipping_cost_per_order", cost, 0.0)?;
        }

        Ok(())
    }
}

fn finite(field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(RoiError::validation(field, format!("must be a finite number, got {}", value)))
    }
}

fn at_least(field: &'static str, value: f64, min: f64) -> Result<()> {
    finite(field, value)?;
    if value < min {
        return Err(RoiError::validation(field, format!("must be at least {}, got {}", min, value)));
    }
    Ok(())
}

fn percentage(field: &'static str, value: f64) -> Result<()> {
    finite(field, value)?;
    if !(0.0..=100.0).contains(&value) {
        return Err(RoiError::validation(field, format!("must be between 0 and 100, got {}", value)));
    }
    Ok(())
}
