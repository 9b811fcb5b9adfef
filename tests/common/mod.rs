#![allow(dead_code)]

use chrono::{DateTime, NaiveDateTime};
use pending_expiry::application::policy::ExpiredPaymentPolicy;
use pending_expiry::domain::config::ExpirationConfig;
use pending_expiry::domain::transaction::{PaymentStatus, Transaction, TransactionType};
use pending_expiry::domain::zone::{Zone, fixed};
use pending_expiry::infrastructure::clock::FixedClock;
use std::io::Write;
use tempfile::NamedTempFile;

/// RFC 3339 timestamp kept in its own offset.
pub fn ts(value: &str) -> DateTime<Zone> {
    fixed(DateTime::parse_from_rfc3339(value).unwrap())
}

/// Local wall time in a named zone, e.g. `zoned("2023-03-24T10:00:00", "Europe/Paris")`.
pub fn zoned(local: &str, zone: &str) -> DateTime<Zone> {
    let zone: Zone = zone.parse().unwrap();
    NaiveDateTime::parse_from_str(local, "%Y-%m-%dT%H:%M:%S")
        .unwrap()
        .and_local_timezone(zone)
        .single()
        .unwrap()
}

pub fn tx(
    transaction_type: TransactionType,
    status: PaymentStatus,
    created: Option<&str>,
) -> Transaction {
    Transaction::new(transaction_type, status, created.map(ts))
}

pub fn pending_auth(created: DateTime<Zone>) -> Transaction {
    Transaction::new(TransactionType::Authorize, PaymentStatus::Pending, Some(created))
}

pub fn policy_at(now: &str, days: u32) -> ExpiredPaymentPolicy {
    ExpiredPaymentPolicy::new(
        Box::new(FixedClock::new(ts(now))),
        ExpirationConfig::new(days),
    )
}

pub fn write_history(rows: &[&str]) -> NamedTempFile {
    let mut csv = NamedTempFile::new().unwrap();
    writeln!(csv, "payment, type, status, created_date, zone").unwrap();
    for row in rows {
        writeln!(csv, "{}", row).unwrap();
    }
    csv.flush().unwrap();
    csv
}
