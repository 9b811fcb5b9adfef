use super::zone::Zone;
use chrono::DateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    Authorize,
    Capture,
    Chargeback,
    Credit,
    Purchase,
    Refund,
    Void,
}

impl TransactionType {
    pub fn is_auth_or_purchase(self) -> bool {
        matches!(self, TransactionType::Authorize | TransactionType::Purchase)
    }
}

/// Outcome reported by the gateway for a transaction.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    Processed,
    Pending,
    Error,
    Canceled,
    Undefined,
}

impl PaymentStatus {
    pub fn is_pending(self) -> bool {
        self == PaymentStatus::Pending
    }
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Transaction {
    pub transaction_type: TransactionType,
    pub status: PaymentStatus,
    pub created_date: Option<DateTime<Zone>>,
}

impl Transaction {
    pub fn new(
        transaction_type: TransactionType,
        status: PaymentStatus,
        created_date: Option<DateTime<Zone>>,
    ) -> Self {
        Self {
            transaction_type,
            status,
            created_date,
        }
    }
}
