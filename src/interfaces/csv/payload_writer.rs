use crate::domain::payload::Payload;
use crate::error::Result;
use std::io::Write;

/// Writes a payload as a two-column `field,value` CSV table.
pub struct PayloadWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> PayloadWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::WriterBuilder::new().from_writer(sink),
        }
    }

    /// Writes the header and one row per field, in payload order, then flushes.
    pub fn write_payload(&mut self, payload: &Payload) -> Result<()> {
        self.writer.write_record(["field", "value"])?;
        for (field, value) in payload.iter() {
            self.writer.write_record([field, value])?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writes_header_and_rows() {
        let mut payload = Payload::new();
        payload.insert("METHOD", "SetExpressCheckout");
        payload.insert("PAYMENTREQUEST_0_DESC", "Mugs, two of them");

        let mut out = Vec::new();
        PayloadWriter::new(&mut out).write_payload(&payload).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "field,value\nMETHOD,SetExpressCheckout\nPAYMENTREQUEST_0_DESC,\"Mugs, two of them\"\n"
        );
    }
}
