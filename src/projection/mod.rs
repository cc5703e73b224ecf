//! Projection engine for revenue, profit and ROI projections

mod adjustment;
mod engine;
mod metrics;
mod rounding;
mod series;

pub use adjustment::EffectiveBase;
pub use engine::{compute, ProjectionEngine};
pub use metrics::{marketing_efficiency, operating_margin_pct, payback_month, payback_period, roi_pct};
pub use rounding::{round_half_away, round_to_cents};
pub use series::{MonthlyPoint, ProjectionResult, ProjectionSummary};
