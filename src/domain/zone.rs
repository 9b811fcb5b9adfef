use crate::error::ExpiryError;
use chrono::{
    DateTime, Days, FixedOffset, LocalResult, NaiveDate, NaiveDateTime, Offset, TimeDelta,
    TimeZone,
};
use chrono_tz::{Tz, TzOffset};
use std::fmt;
use std::str::FromStr;

/// Time zone attached to a transaction's creation date.
///
/// Either a bare UTC offset, as found in an RFC 3339 timestamp, or a named
/// IANA zone whose offset follows daylight-saving rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zone {
    Fixed(FixedOffset),
    Named(Tz),
}

#[derive(Debug, Clone)]
pub enum ZoneOffset {
    Fixed(FixedOffset),
    Named(TzOffset),
}

impl Offset for ZoneOffset {
    fn fix(&self) -> FixedOffset {
        match self {
            ZoneOffset::Fixed(offset) => *offset,
            ZoneOffset::Named(offset) => offset.fix(),
        }
    }
}

impl fmt::Display for ZoneOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.fix())
    }
}

impl TimeZone for Zone {
    type Offset = ZoneOffset;

    fn from_offset(offset: &ZoneOffset) -> Self {
        match offset {
            ZoneOffset::Fixed(offset) => Zone::Fixed(*offset),
            ZoneOffset::Named(offset) => Zone::Named(Tz::from_offset(offset)),
        }
    }

    fn offset_from_local_date(&self, local: &NaiveDate) -> LocalResult<ZoneOffset> {
        match self {
            Zone::Fixed(offset) => offset
                .offset_from_local_date(local)
                .map(ZoneOffset::Fixed),
            Zone::Named(tz) => tz.offset_from_local_date(local).map(ZoneOffset::Named),
        }
    }

    fn offset_from_local_datetime(&self, local: &NaiveDateTime) -> LocalResult<ZoneOffset> {
        match self {
            Zone::Fixed(offset) => offset
                .offset_from_local_datetime(local)
                .map(ZoneOffset::Fixed),
            Zone::Named(tz) => tz
                .offset_from_local_datetime(local)
                .map(ZoneOffset::Named),
        }
    }

    fn offset_from_utc_date(&self, utc: &NaiveDate) -> ZoneOffset {
        match self {
            Zone::Fixed(offset) => ZoneOffset::Fixed(offset.offset_from_utc_date(utc)),
            Zone::Named(tz) => ZoneOffset::Named(tz.offset_from_utc_date(utc)),
        }
    }

    fn offset_from_utc_datetime(&self, utc: &NaiveDateTime) -> ZoneOffset {
        match self {
            Zone::Fixed(offset) => ZoneOffset::Fixed(offset.offset_from_utc_datetime(utc)),
            Zone::Named(tz) => ZoneOffset::Named(tz.offset_from_utc_datetime(utc)),
        }
    }
}

impl From<FixedOffset> for Zone {
    fn from(offset: FixedOffset) -> Self {
        Zone::Fixed(offset)
    }
}

impl From<Tz> for Zone {
    fn from(tz: Tz) -> Self {
        Zone::Named(tz)
    }
}

/// Accepts an IANA name (`Europe/Paris`) or an offset (`+01:00`).
impl FromStr for Zone {
    type Err = ExpiryError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if let Ok(tz) = value.parse::<Tz>() {
            return Ok(Zone::Named(tz));
        }
        value
            .parse::<FixedOffset>()
            .map(Zone::Fixed)
            .map_err(|_| ExpiryError::UnknownZone(value.to_string()))
    }
}

/// Keeps the timestamp's own offset as its zone.
pub fn fixed(date: DateTime<FixedOffset>) -> DateTime<Zone> {
    let zone = Zone::Fixed(*date.offset());
    date.with_timezone(&zone)
}

/// Adds calendar days to `start`, keeping the local wall time in its zone.
///
/// A wall time that falls into a daylight-saving gap is read with the offset in
/// force before the gap, which moves it forward. An ambiguous wall time keeps
/// the offset of `start` when it can, and takes the earlier instant otherwise.
/// Returns `None` when the result is out of range.
pub fn plus_days<Z: TimeZone>(start: &DateTime<Z>, days: Days) -> Option<DateTime<Z>> {
    let zone = start.timezone();
    let local = start.naive_local().checked_add_days(days)?;

    match zone.from_local_datetime(&local) {
        LocalResult::Single(date) => Some(date),
        LocalResult::Ambiguous(earlier, later) => {
            if later.offset().fix() == start.offset().fix() {
                Some(later)
            } else {
                Some(earlier)
            }
        }
        LocalResult::None => {
            let day_before = local.checked_sub_signed(TimeDelta::days(1))?;
            let before = zone.offset_from_utc_datetime(&day_before).fix();
            let utc =
                local.checked_sub_signed(TimeDelta::seconds(i64::from(before.local_minus_utc())))?;
            Some(zone.from_utc_datetime(&utc))
        }
    }
}
