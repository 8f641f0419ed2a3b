use rust_decimal::Decimal;
use tracing::error;

use crate::models::{BatchResult, ProcessingMode, Transaction};

/// Totals the batch in-process, treating each amount as currency units.
///
/// Never fails: a missing amount counts as zero and an amount that would overflow
/// the running total is logged and skipped.
pub fn aggregate(transactions: &[Transaction]) -> BatchResult {
    let total_amount = transactions.iter().fold(Decimal::ZERO, |total, transaction| {
        let amount = transaction.amount_or_zero();

        total.checked_add(amount).unwrap_or_else(|| {
            error!("Fallback aggregation overflow, amount [{amount}] was skipped");
            total
        })
    });

    BatchResult::new(transactions.len() as u64, total_amount, ProcessingMode::Fallback)
}
