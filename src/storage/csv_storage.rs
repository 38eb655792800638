use std::fs::File;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord, Trim, WriterBuilder};

use crate::common::time_point::{Timestamp, Value};
use crate::common::time_series::TimeSeries;
use crate::storage::Storage;
use crate::{Result, TicklineErr};

const TIMESTAMP_HEADER: &str = "TIMESTAMP";

/// Two-column delimited text file.
///
/// | line     | content                             |
/// |----------|-------------------------------------|
/// | header   | `<ignored><delimiter><series name>` |
/// | record   | `<epoch seconds><delimiter><price>` |
///
/// Blank lines are skipped, so a trailing newline never yields an empty record.
/// Malformed records are reported by line, counting non-blank lines from the header.
pub struct CsvStorage {
    path: PathBuf,
    delimiter: char,
    delimiter_byte: u8,
}

impl CsvStorage {
    pub fn new(path: &Path, delimiter: char) -> Result<CsvStorage> {
        Ok(CsvStorage {
            path: path.to_path_buf(),
            delimiter,
            delimiter_byte: CsvStorage::delimiter_byte(delimiter)?,
        })
    }

    /// The delimiter has to fit in one byte and must not collide with quoting or line breaks.
    pub fn delimiter_byte(delimiter: char) -> Result<u8> {
        match delimiter {
            '"' | '\n' | '\r' => Err(TicklineErr::InvalidDelimiter(delimiter)),
            c if c.is_ascii() => Ok(c as u8),
            _ => Err(TicklineErr::InvalidDelimiter(delimiter)),
        }
    }

    fn parse_record(record: &StringRecord, line: u64) -> Result<(Timestamp, Value)> {
        let time_field = record.get(0).unwrap_or("");
        let timestamp = time_field.parse::<Timestamp>().map_err(|e| {
            TicklineErr::MalformedRecord(line, format!("timestamp {:?}: {}", time_field, e))
        })?;
        let price_field = record
            .get(1)
            .ok_or_else(|| TicklineErr::MalformedRecord(line, "missing price column".to_string()))?;
        let price = price_field.parse::<Value>().map_err(|e| {
            TicklineErr::MalformedRecord(line, format!("price {:?}: {}", price_field, e))
        })?;
        Ok((timestamp, price))
    }
}

impl Storage for CsvStorage {
    fn read_series(&self) -> Result<TimeSeries> {
        let file = File::open(&self.path)
            .map_err(|e| TicklineErr::SourceErr(self.path.display().to_string(), e))?;
        let mut reader = ReaderBuilder::new()
            .delimiter(self.delimiter_byte)
            .has_headers(false)
            .flexible(true)
            .trim(Trim::All)
            .from_reader(file);

        let mut series = TimeSeries::new();
        series.set_delimiter(self.delimiter)?;

        let mut records = reader.records();
        if let Some(header) = records.next() {
            // first column is the time axis label, second the series name
            series.set_name(header?.get(1).unwrap_or(""));
        }
        // header is line 1; blank lines are skipped by the reader and not counted
        for (line, record) in (2u64..).zip(records) {
            let record = record?;
            let (timestamp, price) = CsvStorage::parse_record(&record, line)?;
            if let Some(previous) = series.insert_raw(timestamp, price) {
                warn!(
                    "{}: duplicate timestamp {}, replacing price {}",
                    self.path.display(),
                    timestamp,
                    previous
                );
            }
        }

        debug!(
            "read {} observations of {:?} from {}",
            series.count(),
            series.name(),
            self.path.display()
        );
        Ok(series)
    }

    fn write_series(&self, series: &TimeSeries) -> Result<()> {
        let file = File::create(&self.path)?;
        let mut writer = WriterBuilder::new()
            .delimiter(self.delimiter_byte)
            .from_writer(file);

        writer.write_record(&[TIMESTAMP_HEADER, series.name()])?;
        for tp in series.time_points() {
            writer.write_record(&[tp.timestamp.to_string(), tp.value.to_string()])?;
        }
        writer.flush()?;

        info!(
            "saved {} observations of {:?} to {}",
            series.count(),
            series.name(),
            self.path.display()
        );
        Ok(())
    }
}
