use crate::domain::result::{CancelResult, PaymentResult};
use crate::error::Result;
use std::io::Write;

/// Writes payment outcomes as `transaction_id,method,amount,status` rows.
pub struct ResultWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> ResultWriter<W> {
    pub fn new(sink: W) -> Result<Self> {
        let mut writer = csv::Writer::from_writer(sink);
        writer.write_record(["transaction_id", "method", "amount", "status"])?;
        Ok(Self { writer })
    }

    pub fn write_result(&mut self, result: &PaymentResult) -> Result<()> {
        self.writer.write_record([
            result.transaction_id().as_str(),
            result.method().as_str(),
            result.amount().to_string().as_str(),
            result.status().as_str(),
        ])?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

/// Writes cancellation outcomes as
/// `transaction_id,cancel_transaction_id,refund_amount,success` rows.
pub struct CancelWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> CancelWriter<W> {
    pub fn new(sink: W) -> Result<Self> {
        let mut writer = csv::Writer::from_writer(sink);
        writer.write_record([
            "transaction_id",
            "cancel_transaction_id",
            "refund_amount",
            "success",
        ])?;
        Ok(Self { writer })
    }

    pub fn write_cancel(&mut self, result: &CancelResult) -> Result<()> {
        self.writer.write_record([
            result.transaction_id().as_str(),
            result
                .cancel_transaction_id()
                .map(|id| id.as_str())
                .unwrap_or_default(),
            result.refund_amount().to_string().as_str(),
            if result.is_success() { "true" } else { "false" },
        ])?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
