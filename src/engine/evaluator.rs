use rust_decimal::{Decimal, RoundingStrategy};

use super::position::Portfolio;
use crate::config::TaxConfig;

/// Applies the swing-trade sell rules: exemption threshold, loss
/// carry-forward, and the tax rate on taxable profit.
///
/// All constants come from the injected [`TaxConfig`]; the evaluator
/// itself is stateless across calls, every running value lives in the
/// [`Portfolio`].
#[derive(Debug, Clone)]
pub struct Evaluator {
    config: TaxConfig,
}

impl Evaluator {
    pub fn new(config: TaxConfig) -> Self {
        Self { config }
    }

    /// Process a sell against the current position and return the tax due.
    ///
    /// A sell larger than the held quantity is silently capped to the held
    /// quantity. Losses accumulate on every sell; deduction of previously
    /// accumulated losses only happens when the sale value crosses the
    /// exemption threshold.
    pub fn sell(&self, portfolio: &mut Portfolio, unit_cost: Decimal, quantity: u64) -> Decimal {
        let sell_quantity = quantity.min(portfolio.held_quantity);
        portfolio.held_quantity -= sell_quantity;

        let sold = Decimal::from(sell_quantity);
        let total_value = unit_cost * sold;
        let profit = (unit_cost - portfolio.weighted_avg_cost) * sold;

        let mut taxable_profit = profit;

        // A sale at or under the threshold must not consume previously
        // banked losses, so the deduction is gated on the sale value.
        if portfolio.accumulated_loss < Decimal::ZERO
            && total_value > self.config.exemption_threshold
        {
            taxable_profit += portfolio.accumulated_loss;
            if taxable_profit > Decimal::ZERO {
                portfolio.accumulated_loss = Decimal::ZERO;
            } else {
                portfolio.accumulated_loss = taxable_profit;
                taxable_profit = Decimal::ZERO;
            }
        }

        if total_value <= self.config.exemption_threshold || taxable_profit <= Decimal::ZERO {
            // Losses count toward future offsets even when the sale itself
            // was exempt; only the deduction above is threshold-gated.
            if profit < Decimal::ZERO {
                portfolio.accumulated_loss += profit;
            }
            Decimal::ZERO
        } else {
            (taxable_profit * self.config.tax_rate)
                .round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven)
        }
    }
}
