//! Business parameter structures and the business model selector

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::RoiError;

/// Confirmation rate assumed when a COD scenario leaves it unset (%)
pub const DEFAULT_CONFIRMATION_RATE_PCT: f64 = 100.0;

/// Per-call confirmation cost assumed when unset
pub const DEFAULT_CONFIRMATION_COST_PER_CALL: f64 = 0.0;

/// Delivery success rate assumed when unset (%)
pub const DEFAULT_DELIVERY_SUCCESS_RATE_PCT: f64 = 100.0;

/// Per-order shipping cost assumed when unset
pub const DEFAULT_SHIPPING_COST_PER_ORDER: f64 = 0.0;

/// Business model selecting whether the COD adjustment pipeline runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BusinessModel {
    /// Prepaid e-commerce: every order converts to revenue
    #[default]
    #[serde(alias = "e-commerce", alias = "ecommerce")]
    Standard,
    /// Cash on delivery: orders are confirmed by phone and paid at the door
    #[serde(alias = "cod", alias = "cash-on-delivery")]
    CashOnDelivery,
}

impl BusinessModel {
    pub fn is_cod(&self) -> bool {
        matches!(self, BusinessModel::CashOnDelivery)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BusinessModel::Standard => "standard",
            BusinessModel::CashOnDelivery => "cod",
        }
    }
}

impl fmt::Display for BusinessModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BusinessModel {
    type Err = RoiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" | "e-commerce" | "ecommerce" => Ok(BusinessModel::Standard),
            "cod" | "cash-on-delivery" | "cashondelivery" => Ok(BusinessModel::CashOnDelivery),
            other => Err(RoiError::UnknownBusinessModel(other.to_string())),
        }
    }
}

/// Inputs for one ROI projection
///
/// The four COD fields are only consulted under [`BusinessModel::CashOnDelivery`]
/// and fall back to the `DEFAULT_*` constants when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessParameters {
    /// Orders placed per month (nominal, before any attrition)
    pub monthly_sales_volume: f64,

    /// Average revenue per delivered order
    pub average_order_value: f64,

    /// Net profit margin per sale (0-100)
    pub profit_margin_pct: f64,

    /// Marketing spend over the whole horizon
    pub marketing_budget: f64,

    /// Operating costs over the whole horizon
    pub operating_costs: f64,

    /// Compound monthly revenue growth (%)
    pub monthly_growth_rate_pct: f64,

    /// Number of months to project
    pub horizon_months: u32,

    /// Share of orders the call center confirms (%)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirmation_rate_pct: Option<f64>,

    /// Cost of each confirmation call, charged on nominal volume
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirmation_cost_per_call: Option<f64>,

    /// Share of confirmed orders actually delivered (%)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_success_rate_pct: Option<f64>,

    /// Shipping cost per delivered order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping_cost_per_order: Option<f64>,
}

impl BusinessParameters {
    /// Create parameters with the COD fields left unset
    pub fn new(
        monthly_sales_volume: f64,
        average_order_value: f64,
        profit_margin_pct: f64,
        marketing_budget: f64,
        operating_costs: f64,
        monthly_growth_rate_pct: f64,
        horizon_months: u32,
    ) -> Self {
        Self {
            monthly_sales_volume,
            average_order_value,
            profit_margin_pct,
            marketing_budget,
            operating_costs,
            monthly_growth_rate_pct,
            horizon_months,
            confirmation_rate_pct: None,
            confirmation_cost_per_call: None,
            delivery_success_rate_pct: None,
            shipping_cost_per_order: None,
        }
    }

    /// Set all four COD fields
    pub fn with_cod(
        mut self,
        confirmation_rate_pct: f64,
        confirmation_cost_per_call: f64,
        delivery_success_rate_pct: f64,
        shipping_cost_per_order: f64,
    ) -> Self {
        self.confirmation_rate_pct = Some(confirmation_rate_pct);
        self.confirmation_cost_per_call = Some(confirmation_cost_per_call);
        self.delivery_success_rate_pct = Some(delivery_success_rate_pct);
        self.shipping_cost_per_order = Some(shipping_cost_per_order);
        self
    }

    pub fn confirmation_rate(&self) -> f64 {
        self.confirmation_rate_pct.unwrap_or(DEFAULT_CONFIRMATION_RATE_PCT)
    }

    pub fn confirmation_cost(&self) -> f64 {
        self.confirmation_cost_per_call.unwrap_or(DEFAULT_CONFIRMATION_COST_PER_CALL)
    }

    pub fn delivery_success_rate(&self) -> f64 {
        self.delivery_success_rate_pct.unwrap_or(DEFAULT_DELIVERY_SUCCESS_RATE_PCT)
    }

    pub fn shipping_cost(&self) -> f64 {
        self.shipping_cost_per_order.unwrap_or(DEFAULT_SHIPPING_COST_PER_ORDER)
    }
}

impl Default for BusinessParameters {
    /// Starting values of the calculator form
    fn default() -> Self {
        Self::new(1000.0, 50.0, 30.0, 5000.0, 3000.0, 5.0, 12).with_cod(80.0, 2.0, 90.0, 10.0)
    }
}

/// A parameter set tagged with a scenario name (one row of a batch file)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedParameters {
    pub name: String,
    pub params: BusinessParameters,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cod_defaults_when_absent() {
        let params = BusinessParameters::new(100.0, 20.0, 25.0, 0.0, 0.0, 0.0, 6);
        assert_eq!(params.confirmation_rate(), 100.0);
        assert_eq!(params.confirmation_cost(), 0.0);
        assert_eq!(params.delivery_success_rate(), 100.0);
        assert_eq!(params.shipping_cost(), 0.0);
    }

    #[test]
    fn test_form_defaults() {
        let params = BusinessParameters::default();
        assert_eq!(params.monthly_sales_volume, 1000.0);
        assert_eq!(params.horizon_months, 12);
        assert_eq!(params.confirmation_rate(), 80.0);
        assert_eq!(params.shipping_cost(), 10.0);
    }

    #[test]
    fn test_business_model_parsing() {
        assert_eq!("cod".parse::<BusinessModel>().unwrap(), BusinessModel::CashOnDelivery);
        assert_eq!("E-Commerce".parse::<BusinessModel>().unwrap(), BusinessModel::Standard);
        assert_eq!("standard".parse::<BusinessModel>().unwrap(), BusinessModel::Standard);
        assert!("dropship".parse::<BusinessModel>().is_err());
    }

    #[test]
    fn test_json_without_cod_fields() {
        let json = r#"{
            "monthlySalesVolume": 500,
            "averageOrderValue": 40,
            "profitMarginPct": 20,
            "marketingBudget": 1000,
            "operatingCosts": 2000,
            "monthlyGrowthRatePct": 2.5,
            "horizonMonths": 24
        }"#;
        let params: BusinessParameters = serde_json::from_str(json).unwrap();
        assert_eq!(params.horizon_months, 24);
        assert_eq!(params.confirmation_rate_pct, None);
        assert_eq!(params.delivery_success_rate(), 100.0);
    }

    #[test]
    fn test_business_model_serde_aliases() {
        let model: BusinessModel = serde_json::from_str(r#""cod""#).unwrap();
        assert_eq!(model, BusinessModel::CashOnDelivery);
        let model: BusinessModel = serde_json::from_str(r#""cashOnDelivery""#).unwrap();
        assert_eq!(model, BusinessModel::CashOnDelivery);
        let model: BusinessModel = serde_json::from_str(r#""e-commerce""#).unwrap();
        assert_eq!(model, BusinessModel::Standard);
    }
}
