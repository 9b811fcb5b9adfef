use super::zone::Zone;
use chrono::DateTime;

/// Source of the current time.
///
/// Implementations must be safe to read concurrently; the policy may be shared
/// across threads.
pub trait Clock: Send + Sync {
    /// Current wall-clock time expressed in `zone`.
    fn now(&self, zone: &Zone) -> DateTime<Zone>;
}

pub type ClockBox = Box<dyn Clock>;
