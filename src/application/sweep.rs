use crate::application::policy::ExpiredPaymentPolicy;
use crate::domain::transaction::{PaymentStatus, Transaction};
use crate::domain::zone::Zone;
use chrono::DateTime;
use serde::{Serialize, Serializer};
use std::collections::HashMap;
use tracing::info;

/// Transaction histories keyed by payment.
///
/// Payments keep the order in which they were first seen, and each history keeps
/// the order in which its transactions were added.
#[derive(Debug, Default)]
pub struct PaymentHistories {
    index: HashMap<String, usize>,
    histories: Vec<(String, Vec<Transaction>)>,
}

impl PaymentHistories {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `transaction` to the history of `payment`.
    pub fn push(&mut self, payment: impl Into<String>, transaction: Transaction) {
        let payment = payment.into();
        match self.index.get(&payment) {
            Some(&slot) => self.histories[slot].1.push(transaction),
            None => {
                self.index.insert(payment.clone(), self.histories.len());
                self.histories.push((payment, vec![transaction]));
            }
        }
    }

    pub fn get(&self, payment: &str) -> Option<&[Transaction]> {
        self.index
            .get(payment)
            .map(|&slot| self.histories[slot].1.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Transaction])> {
        self.histories
            .iter()
            .map(|(payment, history)| (payment.as_str(), history.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.histories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.histories.is_empty()
    }
}

impl<P: Into<String>> FromIterator<(P, Transaction)> for PaymentHistories {
    fn from_iter<I: IntoIterator<Item = (P, Transaction)>>(iter: I) -> Self {
        let mut histories = Self::new();
        for (payment, transaction) in iter {
            histories.push(payment, transaction);
        }
        histories
    }
}

/// Result of checking one payment.
///
/// `expiration_date` is only reported while the latest transaction is pending.
#[derive(Debug, Serialize, PartialEq, Eq, Clone)]
pub struct ExpiryVerdict {
    pub payment: String,
    pub expired: bool,
    pub latest_status: Option<PaymentStatus>,
    #[serde(serialize_with = "serialize_rfc3339")]
    pub expiration_date: Option<DateTime<Zone>>,
}

fn serialize_rfc3339<S: Serializer>(
    date: &Option<DateTime<Zone>>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match date {
        Some(date) => serializer.serialize_some(&date.to_rfc3339()),
        None => serializer.serialize_none(),
    }
}

/// Runs the policy over every payment, in payment order.
pub fn sweep(policy: &ExpiredPaymentPolicy, histories: &PaymentHistories) -> Vec<ExpiryVerdict> {
    let verdicts: Vec<ExpiryVerdict> = histories
        .iter()
        .map(|(payment, history)| {
            let latest = policy.latest_transaction(history).ok();
            ExpiryVerdict {
                payment: payment.to_string(),
                expired: policy.is_expired(history),
                latest_status: latest.map(|tx| tx.status),
                expiration_date: latest
                    .filter(|tx| tx.status.is_pending())
                    .and_then(|tx| policy.expiration_date(tx)),
            }
        })
        .collect();

    let expired = verdicts.iter().filter(|v| v.expired).count();
    info!(payments = verdicts.len(), expired, "expiration sweep finished");
    verdicts
}
