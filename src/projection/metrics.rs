//! Derived ratios and the payback search
//!
//! Every ratio falls back to 0 when its divisor is zero (or negative, which
//! only happens on input the validator would have rejected).

use super::series::MonthlyPoint;

/// Return on investment (%)
pub fn roi_pct(total_profit: f64, total_investment: f64) -> f64 {
    if total_investment > 0.0 {
        total_profit / total_investment * 100.0
    } else {
        0.0
    }
}

/// Revenue per unit of marketing spend
pub fn marketing_efficiency(total_revenue: f64, marketing_budget: f64) -> f64 {
    if marketing_budget > 0.0 {
        total_revenue / marketing_budget
    } else {
        0.0
    }
}

/// Profit as a share of revenue (%)
pub fn operating_margin_pct(total_profit: f64, total_revenue: f64) -> f64 {
    if total_revenue > 0.0 {
        total_profit / total_revenue * 100.0
    } else {
        0.0
    }
}

/// First month (1-indexed) whose cumulative profit reaches `total_investment`,
/// or `None` when the investment is never recovered
pub fn payback_month(series: &[MonthlyPoint], total_investment: f64) -> Option<u32> {
    let mut cumulative = 0.0;
    for (i, point) in series.iter().enumerate() {
        cumulative += point.profit;
        if cumulative >= total_investment {
            return Some(i as u32 + 1);
        }
    }
    None
}

/// Payback month, saturating at the series length when never recovered
pub fn payback_period(series: &[MonthlyPoint], total_investment: f64) -> u32 {
    payback_month(series, total_investment).unwrap_or(series.len() as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(profits: &[f64]) -> Vec<MonthlyPoint> {
        profits
            .iter()
            .enumerate()
            .map(|(i, &profit)| MonthlyPoint { month: i as u32 + 1, revenue: 0.0, profit })
            .collect()
    }

    #[test]
    fn test_zero_guards() {
        assert_eq!(roi_pct(500.0, 0.0), 0.0);
        assert_eq!(marketing_efficiency(10_000.0, 0.0), 0.0);
        assert_eq!(operating_margin_pct(-100.0, 0.0), 0.0);
    }

    #[test]
    fn test_ratios() {
        assert_eq!(roi_pct(250.0, 1000.0), 25.0);
        assert_eq!(marketing_efficiency(10_000.0, 2_000.0), 5.0);
        assert_eq!(operating_margin_pct(300.0, 1200.0), 25.0);
    }

    #[test]
    fn test_payback_first_crossing() {
        let s = series(&[100.0, 100.0, 100.0, 100.0]);
        assert_eq!(payback_period(&s, 250.0), 3);
        // Reaching the target exactly counts
        assert_eq!(payback_period(&s, 200.0), 2);
    }

    #[test]
    fn test_payback_saturates_at_horizon() {
        let s = series(&[10.0, 10.0, 10.0]);
        assert_eq!(payback_period(&s, 1_000.0), 3);
        assert_eq!(payback_month(&s, 1_000.0), None);
        // Recovered in the last month saturates to the same value
        assert_eq!(payback_period(&s, 30.0), 3);
        assert_eq!(payback_month(&s, 30.0), Some(3));
    }

    #[test]
    fn test_payback_with_nothing_invested() {
        let s = series(&[-5.0, 10.0]);
        assert_eq!(payback_period(&s, 0.0), 2);
        let s = series(&[0.0, 10.0]);
        assert_eq!(payback_period(&s, 0.0), 1);
    }
}
