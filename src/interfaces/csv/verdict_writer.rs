use crate::application::sweep::ExpiryVerdict;
use crate::error::Result;
use std::io::Write;

/// Writes expiry verdicts as CSV with the header
/// `payment,expired,latest_status,expiration_date`.
pub struct VerdictWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> VerdictWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_verdicts(&mut self, verdicts: &[ExpiryVerdict]) -> Result<()> {
        for verdict in verdicts {
            self.writer.serialize(verdict)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
