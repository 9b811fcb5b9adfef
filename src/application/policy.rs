use crate::domain::config::ExpirationConfig;
use crate::domain::ports::ClockBox;
use crate::domain::transaction::Transaction;
use crate::domain::zone::{Zone, plus_days};
use crate::error::{ExpiryError, Result};
use chrono::DateTime;
use tracing::debug;

/// Decides whether a payment stuck in a pending authorization or purchase has
/// outlived its grace period.
///
/// The policy holds no mutable state; every call only reads the injected clock.
pub struct ExpiredPaymentPolicy {
    clock: ClockBox,
    config: ExpirationConfig,
}

impl ExpiredPaymentPolicy {
    /// Creates a new `ExpiredPaymentPolicy`.
    ///
    /// # Arguments
    ///
    /// * `clock` - Source of the current time.
    /// * `config` - Grace period applied to pending transactions.
    pub fn new(clock: ClockBox, config: ExpirationConfig) -> Self {
        Self { clock, config }
    }

    /// Returns `true` when the payment's history only holds authorizations or
    /// purchases and its latest transaction has been pending for longer than
    /// the configured period.
    ///
    /// An empty history is not expired.
    pub fn is_expired(&self, transactions: &[Transaction]) -> bool {
        if !contains_only_auths_or_purchases(transactions) {
            return false;
        }

        let Ok(latest) = self.latest_transaction(transactions) else {
            debug!("empty transaction history, not expired");
            return false;
        };

        if latest.created_date.is_none() || !latest.status.is_pending() {
            return false;
        }

        let Some(expiration_date) = self.expiration_date(latest) else {
            debug!("expiration date out of range, not expired");
            return false;
        };

        let now = self.clock.now(&expiration_date.timezone());
        let expired = now > expiration_date;
        debug!(%now, %expiration_date, expired, "pending transaction checked");
        expired
    }

    /// Last transaction of the history.
    pub fn latest_transaction<'a>(
        &self,
        transactions: &'a [Transaction],
    ) -> Result<&'a Transaction> {
        transactions.last().ok_or(ExpiryError::EmptyHistory)
    }

    /// Creation date moved forward by the grace period in calendar days, in the
    /// creation date's zone.
    ///
    /// `None` when the transaction has no creation date or the shifted date is
    /// out of range.
    pub fn expiration_date(&self, transaction: &Transaction) -> Option<DateTime<Zone>> {
        plus_days(transaction.created_date.as_ref()?, self.config.period())
    }
}

fn contains_only_auths_or_purchases(transactions: &[Transaction]) -> bool {
    transactions
        .iter()
        .all(|tx| tx.transaction_type.is_auth_or_purchase())
}
