use anyhow::anyhow;
use rust_decimal::Decimal;

use crate::error::Result;

/// Running position for one session: weighted-average cost basis, held
/// quantity, and the realized loss carried forward.
///
/// A fresh portfolio starts at zero on all three fields and lives exactly
/// as long as one session; nothing is persisted between sessions.
#[derive(Debug, Clone, PartialEq)]
pub struct Portfolio {
    /// Cost basis per unit of the held quantity. Zero (and meaningless)
    /// while nothing is held.
    pub weighted_avg_cost: Decimal,
    pub held_quantity: u64,
    /// Realized losses not yet used to offset taxable profit. Always <= 0.
    pub accumulated_loss: Decimal,
}

impl Portfolio {
    pub fn new() -> Self {
        Self {
            weighted_avg_cost: Decimal::ZERO,
            held_quantity: 0,
            accumulated_loss: Decimal::ZERO,
        }
    }

    /// Add a purchase, recomputing the weighted-average cost basis as the
    /// quantity-weighted mean of the previous position and the new lot.
    pub fn buy(&mut self, unit_cost: Decimal, quantity: u64) -> Result<()> {
        let total_cost = self.weighted_avg_cost * Decimal::from(self.held_quantity)
            + unit_cost * Decimal::from(quantity);

        self.held_quantity = self
            .held_quantity
            .checked_add(quantity)
            .ok_or_else(|| anyhow!("position quantity overflow"))?;

        // Quantity can only be zero here if the buy itself was for zero
        // units on an empty position.
        self.weighted_avg_cost = if self.held_quantity > 0 {
            total_cost / Decimal::from(self.held_quantity)
        } else {
            Decimal::ZERO
        };

        Ok(())
    }
}

impl Default for Portfolio {
    fn default() -> Self {
        Self::new()
    }
}
