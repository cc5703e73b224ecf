//! Business profile: the business model and display currency chosen at setup
//!
//! Read from a JSON file or from the environment:
//!   ROI_BUSINESS_MODEL  standard | e-commerce | cod | cash-on-delivery
//!   ROI_CURRENCY        usd | eur | gbp | cad | aed

use crate::error::{Result, RoiError};
use crate::params::BusinessModel;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::str::FromStr;

pub const BUSINESS_MODEL_ENV: &str = "ROI_BUSINESS_MODEL";
pub const CURRENCY_ENV: &str = "ROI_CURRENCY";

/// Display currency. A label only: amounts are never converted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Currency {
    #[default]
    Usd,
    Eur,
    Gbp,
    Cad,
    Aed,
}

impl Currency {
    /// ISO 4217 code
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP",
            Currency::Cad => "CAD",
            Currency::Aed => "AED",
        }
    }

    /// Prefix used when displaying amounts
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Usd => "$",
            Currency::Eur => "€",
            Currency::Gbp => "£",
            Currency::Cad => "CA$",
            Currency::Aed => "AED ",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = RoiError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "usd" => Ok(Currency::Usd),
            "eur" => Ok(Currency::Eur),
            "gbp" => Ok(Currency::Gbp),
            "cad" => Ok(Currency::Cad),
            "aed" => Ok(Currency::Aed),
            other => Err(RoiError::UnknownCurrency(other.to_string())),
        }
    }
}

/// Settings chosen once per business and applied to every calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BusinessProfile {
    #[serde(default, alias = "businessType")]
    pub model: BusinessModel,
    #[serde(default)]
    pub currency: Currency,
}

impl BusinessProfile {
    pub fn new(model: BusinessModel, currency: Currency) -> Self {
        Self { model, currency }
    }

    /// Load a profile from a JSON file; missing keys take their defaults
    pub fn from_json_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let profile: Self = serde_json::from_reader(BufReader::new(file))?;
        log::debug!("Loaded business profile from {}: {:?}", path.display(), profile);
        Ok(profile)
    }

    /// Read the profile from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a profile from any key lookup; unset keys keep their defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut profile = Self::default();

        if let Some(raw) = lookup(BUSINESS_MODEL_ENV) {
            profile.model = raw
                .parse()
                .map_err(|e| RoiError::Config(format!("{}: {}", BUSINESS_MODEL_ENV, e)))?;
        }
        if let Some(raw) = lookup(CURRENCY_ENV) {
            profile.currency = raw
                .parse()
                .map_err(|e| RoiError::Config(format!("{}: {}", CURRENCY_ENV, e)))?;
        }

        Ok(profile)
    }
}
