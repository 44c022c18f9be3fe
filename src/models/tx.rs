use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::utils::{lenient_amount, lenient_text};

// Raw record as returned by the transaction-list endpoint
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTransaction {
    #[serde(default, deserialize_with = "lenient_text")]
    pub operation_id: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub customer_name: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub customer_id: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub card_identity: String,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub amount_charge: Decimal,
    #[serde(default, deserialize_with = "lenient_text")]
    pub token: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub status: String,
    #[serde(default)]
    pub time_out: Option<String>,
    #[serde(default)]
    pub time_in: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Transaction {
    pub id: String,
    pub full_name: String,
    pub phone_number: String,
    pub meter_number: String,
    pub amount: Decimal,
    pub token: String,
    pub status: TransactionStatus,
    pub date: String,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum TransactionStatus {
    Completed,
    Pending,
    Failed,
}

impl TransactionStatus {
    pub fn from_code(code: &str) -> Self {
        match code {
            "0" => TransactionStatus::Completed,
            "1" => TransactionStatus::Pending,
            _ => TransactionStatus::Failed,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TransactionStatus::Completed => "Completed",
            TransactionStatus::Pending => "Pending",
            TransactionStatus::Failed => "Failed",
        }
    }
}

impl From<RawTransaction> for Transaction {
    fn from(raw: RawTransaction) -> Self {
        Self {
            id: raw.operation_id,
            full_name: raw.customer_name,
            phone_number: raw.customer_id,
            meter_number: raw.card_identity,
            amount: raw.amount_charge,
            token: raw.token,
            status: TransactionStatus::from_code(&raw.status),
            date: raw.time_out.or(raw.time_in).unwrap_or_default(),
        }
    }
}

/// Totals shown on the transactions summary cards.
#[derive(Debug, Default, PartialEq)]
pub struct TransactionSummary {
    pub total: usize,
    pub completed: usize,
    pub completed_amount: Decimal,
}

impl From<&[Transaction]> for TransactionSummary {
    fn from(transactions: &[Transaction]) -> Self {
        let completed = transactions
            .iter()
            .filter(|tx| tx.status == TransactionStatus::Completed);

        Self {
            total: transactions.len(),
            completed: completed.clone().count(),
            completed_amount: completed.map(|tx| tx.amount).sum(),
        }
    }
}
