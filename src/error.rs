//! Error handling for the capital-gains calculator
//!
//! Defines custom error types and establishes a unified Result type
//! using anyhow for context chaining and error propagation.

use thiserror::Error;

/// Core error types for tax processing
#[derive(Error, Debug)]
pub enum CapitalGainsError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("tax calculation failed: {0}")]
    TaxCalculation(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("io error")]
    Io(#[from] std::io::Error),
}

/// Result type alias for tax processing
pub type Result<T> = anyhow::Result<T>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_formatting_is_readable() {
        let err = CapitalGainsError::InvalidInput("not a JSON array".to_string());
        assert_eq!(err.to_string(), "invalid input: not a JSON array");
    }

    #[test]
    fn test_anyhow_context_chains_errors() {
        use anyhow::Context;
        let result: Result<()> =
            Err(anyhow::anyhow!("original error")).context("failed to process session");
        match result {
            Err(e) => {
                let msg = e.to_string();
                assert!(msg.contains("failed to process session"));
                let debug_msg = format!("{:?}", e);
                assert!(debug_msg.contains("original error") || msg.contains("original error"));
            }
            Ok(_) => panic!("expected error"),
        }
    }

    #[test]
    fn test_error_variants() {
        let calc_err = CapitalGainsError::TaxCalculation("test".to_string());
        assert!(calc_err.to_string().starts_with("tax calculation failed"));

        let config_err = CapitalGainsError::Config("test".to_string());
        assert!(config_err.to_string().starts_with("config error"));
    }
}
