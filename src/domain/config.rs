use chrono::Days;

/// Default grace period for a pending authorization or purchase.
pub const DEFAULT_EXPIRATION_PERIOD_IN_DAYS: u32 = 3;

/// Settings read once when the policy is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpirationConfig {
    pub pending_payment_expiration_period_in_days: u32,
}

impl ExpirationConfig {
    pub fn new(pending_payment_expiration_period_in_days: u32) -> Self {
        Self {
            pending_payment_expiration_period_in_days,
        }
    }

    /// Grace period as calendar days.
    pub fn period(&self) -> Days {
        Days::new(u64::from(self.pending_payment_expiration_period_in_days))
    }
}

impl Default for ExpirationConfig {
    fn default() -> Self {
        Self::new(DEFAULT_EXPIRATION_PERIOD_IN_DAYS)
    }
}
