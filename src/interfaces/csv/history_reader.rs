use crate::domain::transaction::{PaymentStatus, Transaction, TransactionType};
use crate::domain::zone::{Zone, fixed};
use crate::error::{ExpiryError, Result};
use chrono::{DateTime, FixedOffset};
use serde::Deserialize;
use std::io::Read;

/// One CSV row: a transaction tagged with the payment it belongs to.
///
/// `zone` names the zone the creation date lives in (`Europe/Paris`). Without
/// it the timestamp's own offset is used.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct HistoryRecord {
    pub payment: String,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    pub status: PaymentStatus,
    pub created_date: Option<DateTime<FixedOffset>>,
    pub zone: Option<String>,
}

impl HistoryRecord {
    /// Splits the row into its payment id and a zone-aware transaction.
    pub fn into_parts(self) -> Result<(String, Transaction)> {
        let zone = self.zone.as_deref().map(str::parse::<Zone>).transpose()?;
        let created_date = self.created_date.map(|created| match zone {
            Some(zone) => created.with_timezone(&zone),
            None => fixed(created),
        });

        Ok((
            self.payment,
            Transaction::new(self.transaction_type, self.status, created_date),
        ))
    }
}

/// Reads payment transaction histories from a CSV source.
///
/// Expects the header `payment, type, status, created_date, zone`. Rows are
/// trimmed and may leave out the trailing columns.
pub struct HistoryReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> HistoryReader<R> {
    /// Wraps `source`; nothing is read until [`HistoryReader::records`] is polled.
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Lazily deserializes the rows in file order.
    pub fn records(self) -> impl Iterator<Item = Result<HistoryRecord>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(ExpiryError::from))
    }
}
