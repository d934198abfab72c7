use std::path::PathBuf;

use clap::Parser;
use rust_decimal::Decimal;

#[derive(Parser)]
#[command(name = "capital-gains")]
#[command(
    version,
    about = "Capital-gains tax calculator for Brazilian stock market operations"
)]
#[command(
    long_about = "Reads line-delimited JSON sessions (one JSON array of buy/sell operations per line) and prints, per line, the tax owed for each operation. Taxes follow Brazilian swing-trade rules: weighted-average cost basis, R$ 20.000,00 exemption threshold, 20% rate, and loss carry-forward within a session."
)]
pub struct Cli {
    /// Input file with one JSON session per line (defaults to stdin)
    pub file: Option<PathBuf>,

    /// TOML config file overriding the tax constants
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Override the exemption threshold (R$)
    #[arg(long)]
    pub exemption_threshold: Option<Decimal>,

    /// Override the rate applied to taxable profit
    #[arg(long)]
    pub tax_rate: Option<Decimal>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_defaults() {
        let cli = Cli::parse_from(["capital-gains"]);
        assert!(cli.file.is_none());
        assert!(cli.config.is_none());
        assert!(cli.exemption_threshold.is_none());
        assert!(cli.tax_rate.is_none());
    }

    #[test]
    fn test_cli_parses_overrides() {
        let cli = Cli::parse_from([
            "capital-gains",
            "operations.jsonl",
            "--exemption-threshold",
            "35000",
            "--tax-rate",
            "0.15",
        ]);
        assert_eq!(cli.file.unwrap().to_str(), Some("operations.jsonl"));
        assert_eq!(cli.exemption_threshold.unwrap().to_string(), "35000");
        assert_eq!(cli.tax_rate.unwrap().to_string(), "0.15");
    }
}
