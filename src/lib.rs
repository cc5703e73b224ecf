//! ROI Projection - revenue, profit and ROI projections for online retail
//!
//! This library provides:
//! - A pure projection engine for standard and cash-on-delivery businesses
//! - COD attrition modeling (call-center confirmation, delivery success)
//! - Payback, ROI, marketing efficiency and operating margin metrics
//! - Parameter validation and CSV/JSON scenario loading
//! - CSV report export and batch scenario runs

pub mod error;
pub mod params;
pub mod profile;
pub mod projection;
pub mod report;
pub mod scenario;

// Re-export commonly used types
pub use error::{Result, RoiError};
pub use params::{BusinessModel, BusinessParameters, NamedParameters};
pub use profile::{BusinessProfile, Currency};
pub use projection::{compute, MonthlyPoint, ProjectionEngine, ProjectionResult};
pub use scenario::ScenarioRunner;
