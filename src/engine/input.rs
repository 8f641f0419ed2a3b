use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::str::FromStr;

use csv::{ReaderBuilder, Trim};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::engine::errors::InputError;
use crate::models::{BatchRequest, Transaction};
use crate::types::TransactionId;

/// A CSV row. Amounts are kept as text so they parse exactly instead of through `f64`.
#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(default)]
    id: Option<TransactionId>,
    #[serde(default)]
    amount: Option<String>,
    #[serde(default)]
    category: Option<String>,
    #[serde(default, alias = "date")]
    transaction_date: Option<String>
}

/// Reads a batch from disk. Files ending in `.csv` are read as CSV with a header
/// row, anything else as a JSON request object.
pub fn read_transactions(path: &Path) -> Result<Vec<Transaction>, InputError> {
    let file = File::open(path).map_err(|source| InputError::Open {
        path: path.display().to_string(),
        source
    })?;

    let reader = BufReader::new(file);
    let is_csv = path.extension()
        .and_then(|extension| extension.to_str())
        .is_some_and(|extension| extension.eq_ignore_ascii_case("csv"));

    if is_csv {
        read_csv(reader)
    } else {
        read_json(reader)
    }
}

pub fn read_json<R: Read>(reader: R) -> Result<Vec<Transaction>, InputError> {
    let request: BatchRequest = serde_json::from_reader(reader)?;

    Ok(request.transactions)
}

/// Reads every row or none: a single bad row rejects the whole batch.
pub fn read_csv<R: Read>(reader: R) -> Result<Vec<Transaction>, InputError> {
    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(reader);

    let mut transactions = Vec::new();

    for (row, result) in reader.deserialize::<CsvRow>().enumerate() {
        let record = result?;

        let amount = match record.amount {
            Some(value) => Some(Decimal::from_str(&value).map_err(|_| InputError::Amount { row: row + 1, value })?),
            None => None
        };

        transactions.push(Transaction {
            id: record.id,
            amount,
            category: record.category,
            transaction_date: record.transaction_date
        });
    }

    Ok(transactions)
}
