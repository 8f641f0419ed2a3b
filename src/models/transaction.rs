use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::types::{Cents, TransactionId};

pub const DEFAULT_CATEGORY: &str = "UNCATEGORIZED";
pub const DEFAULT_DATE: &str = "1970-01-01";

/// The inbound request body: an ordered list of transactions under `transactions`.
#[derive(Debug, Clone, Deserialize)]
pub struct BatchRequest {
    pub transactions: Vec<Transaction>
}

/// A single transaction as supplied by the caller.
///
/// Every field is optional on the wire. Defaults are resolved at the point of use
/// so that the original input is still available to the fallback path untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Transaction {
    /// Caller supplied identifier, defaults to the 1-based position in the batch.
    #[serde(default)]
    pub id: Option<TransactionId>,
    /// Amount in currency units.
    #[serde(default)]
    pub amount: Option<Decimal>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default, alias = "date")]
    pub transaction_date: Option<String>
}

impl Transaction {
    /// Resolves the identifier, using `index` (0-based position in the batch) when absent.
    pub fn id_or_position(&self, index: usize) -> TransactionId {
        self.id.unwrap_or_else(|| TransactionId::try_from(index + 1).unwrap_or(TransactionId::MAX))
    }

    pub fn amount_or_zero(&self) -> Decimal {
        self.amount.unwrap_or(Decimal::ZERO)
    }

    /// Converts the amount to integer cents, truncating toward zero.
    ///
    /// Returns `None` if the value does not fit in a 64-bit integer.
    pub fn amount_in_cents(&self) -> Option<Cents> {
        self.amount_or_zero()
            .checked_mul(Decimal::ONE_HUNDRED)?
            .trunc()
            .to_i64()
    }

    pub fn category_or_default(&self) -> &str {
        self.category.as_deref().unwrap_or(DEFAULT_CATEGORY)
    }

    pub fn date_or_default(&self) -> &str {
        self.transaction_date.as_deref().unwrap_or(DEFAULT_DATE)
    }
}
