use rust_decimal::Decimal;
use tracing::debug;

use super::evaluator::Evaluator;
use super::position::Portfolio;
use crate::config::TaxConfig;
use crate::error::{CapitalGainsError, Result};
use crate::model::{Operation, OperationKind};

/// Run one independent session: fold the operations in order against a
/// fresh portfolio, producing one tax value per operation.
///
/// The result is length- and order-preserving; an empty session yields an
/// empty result. Any arithmetic fault inside the fold aborts this session
/// only, wrapped as a tax-calculation error carrying the cause.
pub fn run(operations: &[Operation], config: TaxConfig) -> Result<Vec<Decimal>> {
    let evaluator = Evaluator::new(config);
    let mut portfolio = Portfolio::new();
    let mut taxes = Vec::with_capacity(operations.len());

    for op in operations {
        let tax = match op.kind {
            OperationKind::Buy => {
                portfolio
                    .buy(op.unit_cost, op.quantity)
                    .map_err(|e| CapitalGainsError::TaxCalculation(e.to_string()))?;
                Decimal::ZERO
            }
            OperationKind::Sell => evaluator.sell(&mut portfolio, op.unit_cost, op.quantity),
        };
        taxes.push(tax);
    }

    debug!(operations = operations.len(), "session complete");
    Ok(taxes)
}
