use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use crate::{error::DownloadError, model::trade::Trade};

pub const CSV_HEADER: &str = "id,price,amount,type";

/*----- */
// Trades file sink
/*----- */
/// Append-only CSV sink. The header is written and flushed on open, every
/// batch is flushed after it is written, so an aborted download leaves a
/// valid prefix of the range on disk.
#[derive(Debug)]
pub struct TradesFile<W: Write> {
    writer: W,
}

impl TradesFile<BufWriter<File>> {
    pub fn create(path: impl AsRef<Path>) -> Result<Self, DownloadError> {
        let file = File::create(path)?;
        Self::from_writer(BufWriter::new(file))
    }
}

impl<W: Write> TradesFile<W> {
    pub fn from_writer(mut writer: W) -> Result<Self, DownloadError> {
        writeln!(writer, "{}", CSV_HEADER)?;
        writer.flush()?;
        Ok(Self { writer })
    }

    pub fn append(&mut self, trades: &[Trade]) -> Result<(), DownloadError> {
        for trade in trades {
            writeln!(
                self.writer,
                "{},{},{},{}",
                trade.id, trade.price, trade.amount, trade.side
            )?;
        }
        self.writer.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::model::trade::Side;
    use crate::shared::tid::tid_to_datetime;

    #[test]
    fn test_header_written_on_open() {
        let sink = TradesFile::from_writer(Vec::new()).unwrap();
        let written = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(written, "id,price,amount,type\n");
    }

    #[test]
    fn test_append_rows() {
        let mut sink = TradesFile::from_writer(Vec::new()).unwrap();
        sink.append(&[
            Trade {
                id: 1000000000000,
                timestamp: tid_to_datetime(1000000000000),
                price: 50.0,
                amount: 1.0,
                side: Side::Bid,
            },
            Trade {
                id: 1000000000001,
                timestamp: tid_to_datetime(1000000000001),
                price: 13.51,
                amount: 0.5,
                side: Side::Ask,
            },
        ])
        .unwrap();

        let written = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(
            written,
            "id,price,amount,type\n1000000000000,50,1,bid\n1000000000001,13.51,0.5,ask\n"
        );
    }
}
