use crate::domain::ports::Clock;
use crate::domain::zone::Zone;
use chrono::{DateTime, TimeZone, Utc};

/// Clock backed by the operating system's wall-clock time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl Clock for SystemClock {
    fn now(&self, zone: &Zone) -> DateTime<Zone> {
        Utc::now().with_timezone(zone)
    }
}

/// Clock frozen at a single instant.
///
/// The instant is kept in UTC and shifted into whatever zone the caller asks
/// for, so the same `FixedClock` answers consistently across time zones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    instant: DateTime<Utc>,
}

impl FixedClock {
    pub fn new<Z: TimeZone>(instant: DateTime<Z>) -> Self {
        Self {
            instant: instant.with_timezone(&Utc),
        }
    }
}

impl Clock for FixedClock {
    fn now(&self, zone: &Zone) -> DateTime<Zone> {
        self.instant.with_timezone(zone)
    }
}
