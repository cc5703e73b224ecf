//! Scenario runner for batch and sensitivity projections
//!
//! Fixes the business model once, then runs any number of parameter sets
//! through the engine, in parallel for batches.

use crate::error::Result;
use crate::params::{BusinessModel, BusinessParameters, NamedParameters};
use crate::profile::BusinessProfile;
use crate::projection::{ProjectionEngine, ProjectionResult};
use rayon::prelude::*;

/// Outcome of one named scenario in a batch
#[derive(Debug)]
pub struct ScenarioOutcome {
    pub name: String,
    pub result: Result<ProjectionResult>,
}

/// Scenario runner bound to a business model
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::new(BusinessModel::CashOnDelivery);
///
/// for (rate, result) in runner.growth_sensitivity(&params, &[0.0, 2.5, 5.0]) {
///     println!("{}% -> ROI {:.2}%", rate, result.roi_pct);
/// }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ScenarioRunner {
    engine: ProjectionEngine,
}

impl ScenarioRunner {
    /// Create runner for a business model
    pub fn new(model: BusinessModel) -> Self {
        Self {
            engine: ProjectionEngine::new(model),
        }
    }

    /// Create runner from a business profile (currency is display-only and ignored)
    pub fn from_profile(profile: &BusinessProfile) -> Self {
        Self::new(profile.model)
    }

    pub fn model(&self) -> BusinessModel {
        self.engine.model()
    }

    /// Run a single projection without validation
    pub fn run(&self, params: &BusinessParameters) -> ProjectionResult {
        self.engine.project(params)
    }

    /// Validate, then run
    pub fn run_validated(&self, params: &BusinessParameters) -> Result<ProjectionResult> {
        params.validate()?;
        Ok(self.engine.project(params))
    }

    /// Run every scenario in parallel, preserving input order
    ///
    /// Rows that fail validation are reported in their outcome and skipped.
    pub fn run_batch(&self, scenarios: &[NamedParameters]) -> Vec<ScenarioOutcome> {
        log::info!("Running {} scenarios ({})", scenarios.len(), self.model());

        let outcomes: Vec<ScenarioOutcome> = scenarios
            .par_iter()
            .map(|scenario| {
                let result = self.run_validated(&scenario.params);
                if let Err(e) = &result {
                    log::warn!("Skipping scenario '{}': {}", scenario.name, e);
                }
                ScenarioOutcome {
                    name: scenario.name.clone(),
                    result,
                }
            })
            .collect();

        let failed = outcomes.iter().filter(|o| o.result.is_err()).count();
        log::info!("Batch complete: {} ok, {} rejected", outcomes.len() - failed, failed);
        outcomes
    }

    /// Re-run one parameter set across several monthly growth rates
    pub fn growth_sensitivity(
        &self,
        params: &BusinessParameters,
        growth_rates_pct: &[f64],
    ) -> Vec<(f64, ProjectionResult)> {
        growth_rates_pct
            .par_iter()
            .map(|&rate| {
                let mut varied = params.clone();
                varied.monthly_growth_rate_pct = rate;
                (rate, self.engine.project(&varied))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RoiError;

    fn named(name: &str, params: BusinessParameters) -> NamedParameters {
        NamedParameters {
            name: name.to_string(),
            params,
        }
    }

    #[test]
    fn test_batch_matches_sequential() {
        let runner = ScenarioRunner::new(BusinessModel::CashOnDelivery);
        let scenarios: Vec<_> = (1..=8)
            .map(|i| {
                let mut params = BusinessParameters::default();
                params.monthly_sales_volume = 250.0 * i as f64;
                named(&format!("s{}", i), params)
            })
            .collect();

        let outcomes = runner.run_batch(&scenarios);
        assert_eq!(outcomes.len(), 8);
        for (outcome, scenario) in outcomes.iter().zip(&scenarios) {
            assert_eq!(outcome.name, scenario.name);
            let result = outcome.result.as_ref().unwrap();
            assert_eq!(*result, runner.run(&scenario.params));
        }
    }

    #[test]
    fn test_batch_reports_invalid_rows() {
        let runner = ScenarioRunner::new(BusinessModel::Standard);
        let mut bad = BusinessParameters::default();
        bad.horizon_months = 0;

        let outcomes = runner.run_batch(&[
            named("good", BusinessParameters::default()),
            named("bad", bad),
        ]);

        assert!(outcomes[0].result.is_ok());
        assert!(matches!(
            outcomes[1].result,
            Err(RoiError::Validation { field: "horizon_months", .. })
        ));
    }

    #[test]
    fn test_growth_sensitivity() {
        let runner = ScenarioRunner::new(BusinessModel::Standard);
        let results = runner.growth_sensitivity(&BusinessParameters::default(), &[0.0, 5.0, 10.0]);

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].0, 0.0);
        // Higher growth should result in higher total revenue
        assert!(results[2].1.total_revenue > results[1].1.total_revenue);
        assert!(results[1].1.total_revenue > results[0].1.total_revenue);
    }

    #[test]
    fn test_from_profile() {
        let profile = BusinessProfile::new(BusinessModel::CashOnDelivery, Default::default());
        assert_eq!(ScenarioRunner::from_profile(&profile).model(), BusinessModel::CashOnDelivery);
    }
}
