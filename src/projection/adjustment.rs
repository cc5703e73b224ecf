//! Order attrition and cost adjustments applied before projecting
//!
//! Under cash on delivery, nominal orders pass through two independent filters
//! (call-center confirmation, then delivery) and pick up two extra cost terms.

use crate::params::{BusinessModel, BusinessParameters};

/// Volume and cost figures after the business-model adjustments
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EffectiveBase {
    /// Orders that actually convert to revenue each month
    pub effective_volume: f64,

    /// Confirmation calls over the horizon, charged on nominal volume
    pub confirmation_call_cost: f64,

    /// Shipping charged on delivered orders only
    pub shipping_cost: f64,

    /// Operating costs plus both COD cost terms
    pub effective_costs: f64,
}

impl EffectiveBase {
    /// Derive the effective base for a parameter set
    pub fn from_params(params: &BusinessParameters, model: BusinessModel) -> Self {
        match model {
            BusinessModel::Standard => Self {
                effective_volume: params.monthly_sales_volume,
                confirmation_call_cost: 0.0,
                shipping_cost: 0.0,
                effective_costs: params.operating_costs,
            },
            BusinessModel::CashOnDelivery => {
                let confirmed = params.monthly_sales_volume * (params.confirmation_rate() / 100.0);
                let effective_volume = confirmed * (params.delivery_success_rate() / 100.0);

                let confirmation_call_cost = params.monthly_sales_volume * params.confirmation_cost();
                let shipping_cost = effective_volume * params.shipping_cost();

                // Both COD terms are summed before joining operating costs;
                // regrouping changes the last bit and can flip a rounded cent.
                let cod_costs = confirmation_call_cost + shipping_cost;

                Self {
                    effective_volume,
                    confirmation_call_cost,
                    shipping_cost,
                    effective_costs: params.operating_costs + cod_costs,
                }
            }
        }
    }

    /// Revenue of month 1, before any growth
    pub fn baseline_monthly_revenue(&self, average_order_value: f64) -> f64 {
        self.effective_volume * average_order_value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn cod_params() -> BusinessParameters {
        BusinessParameters::new(1000.0, 50.0, 30.0, 5000.0, 3000.0, 5.0, 12)
            .with_cod(80.0, 2.0, 90.0, 10.0)
    }

    #[test]
    fn test_standard_ignores_cod_fields() {
        let base = EffectiveBase::from_params(&cod_params(), BusinessModel::Standard);
        assert_eq!(base.effective_volume, 1000.0);
        assert_eq!(base.effective_costs, 3000.0);
        assert_eq!(base.confirmation_call_cost, 0.0);
        assert_eq!(base.shipping_cost, 0.0);
    }

    #[test]
    fn test_cod_attrition_and_costs() {
        let base = EffectiveBase::from_params(&cod_params(), BusinessModel::CashOnDelivery);
        assert_relative_eq!(base.effective_volume, 720.0, epsilon = 1e-9);
        assert_relative_eq!(base.confirmation_call_cost, 2000.0);
        assert_relative_eq!(base.shipping_cost, 7200.0, epsilon = 1e-9);
        assert_relative_eq!(base.effective_costs, 12200.0, epsilon = 1e-9);
        assert_relative_eq!(base.baseline_monthly_revenue(50.0), 36000.0, epsilon = 1e-9);
    }

    #[test]
    fn test_cod_with_absent_fields_is_noop() {
        let params = BusinessParameters::new(1000.0, 50.0, 30.0, 5000.0, 3000.0, 5.0, 12);
        let cod = EffectiveBase::from_params(&params, BusinessModel::CashOnDelivery);
        let standard = EffectiveBase::from_params(&params, BusinessModel::Standard);
        assert_eq!(cod, standard);
    }

    #[test]
    fn test_cod_costs_grouped_before_operating_costs() {
        let params = BusinessParameters::new(17.0, 0.35, 100.0, 0.0, 1.01, 7.0, 2)
            .with_cod(100.0, 2.0, 90.0, 6.5);
        let base = EffectiveBase::from_params(&params, BusinessModel::CashOnDelivery);
        let expected = 1.01 + (17.0 * 2.0 + base.effective_volume * 6.5);
        assert_eq!(base.effective_costs.to_bits(), expected.to_bits());
    }

    #[test]
    fn test_zero_confirmation_kills_volume() {
        let params = BusinessParameters::new(1000.0, 50.0, 30.0, 0.0, 100.0, 0.0, 12)
            .with_cod(0.0, 1.5, 90.0, 10.0);
        let base = EffectiveBase::from_params(&params, BusinessModel::CashOnDelivery);
        assert_eq!(base.effective_volume, 0.0);
        assert_eq!(base.shipping_cost, 0.0);
        // Every attempted order still gets a call
        assert_relative_eq!(base.effective_costs, 1600.0);
    }
}
