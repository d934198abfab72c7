//! Tax rule configuration
//!
//! The exemption threshold and the tax rate are jurisdiction constants
//! injected into the evaluator at construction time. They can be
//! overridden from a TOML file or CLI flags, never read from ambient
//! global state.

use std::fs;
use std::path::Path;

use anyhow::Context;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::{CapitalGainsError, Result};

/// Exemption threshold and tax rate for swing-trade sells.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct TaxConfig {
    /// Transaction value at or below which no tax is owed (R$).
    pub exemption_threshold: Decimal,
    /// Rate applied to taxable profit.
    pub tax_rate: Decimal,
}

impl Default for TaxConfig {
    fn default() -> Self {
        Self {
            exemption_threshold: Decimal::new(20_000, 0),
            tax_rate: Decimal::new(20, 2),
        }
    }
}

impl TaxConfig {
    /// Load configuration from a TOML file. Missing keys fall back to the
    /// defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config: TaxConfig = toml::from_str(&contents)
            .map_err(|e| CapitalGainsError::Config(format!("{}: {}", path.display(), e)))?;
        Ok(config)
    }
}
