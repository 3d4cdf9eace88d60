//! JSON output for extracted method records
//!
//! Records are streamed one at a time into a JSON array. The legacy format
//! reproduces the historical output byte for byte: every record, including
//! the last, is followed by `,\n`, and double quotes in the method text are
//! pre-escaped before JSON encoding. The strict format writes a valid array.

pub mod quotes;

use crate::extraction::extractor::MethodRecord;
use serde::Serialize;
use std::borrow::Cow;
use std::io::{self, Write};

/// Output framing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Trailing comma after every record, quotes pre-escaped
    #[default]
    Legacy,
    /// Valid JSON array, method text encoded as-is
    Strict,
}

#[derive(Serialize)]
struct RecordJson<'a> {
    name: &'a str,
    method: Cow<'a, str>,
    #[serde(rename = "hasBody")]
    has_body: bool,
}

/// Serialize one record as a compact JSON object
pub fn format_record(record: &MethodRecord<'_>, format: OutputFormat) -> serde_json::Result<String> {
    let method = match format {
        OutputFormat::Legacy => quotes::escape_double_quotes(record.method),
        OutputFormat::Strict => Cow::Borrowed(record.method),
    };
    serde_json::to_string(&RecordJson {
        name: record.name,
        method,
        has_body: record.has_body,
    })
}

/// Destination for extracted records
pub trait RecordSink {
    /// Open the output before the first record
    fn begin(&mut self) -> io::Result<()>;

    /// Append one record
    fn write_record(&mut self, record: &MethodRecord<'_>) -> io::Result<()>;

    /// Close the output after the last record
    fn finish(&mut self) -> io::Result<()>;
}

/// Streams records into a JSON array on any writer
pub struct JsonArrayWriter<W: Write> {
    inner: W,
    format: OutputFormat,
    records_written: usize,
    /// Set once any record bytes may have reached `inner`, even on failure
    emitted: bool,
}

impl<W: Write> JsonArrayWriter<W> {
    pub fn new(inner: W, format: OutputFormat) -> Self {
        Self {
            inner,
            format,
            records_written: 0,
            emitted: false,
        }
    }

    /// Number of records successfully written so far
    pub fn records_written(&self) -> usize {
        self.records_written
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> RecordSink for JsonArrayWriter<W> {
    fn begin(&mut self) -> io::Result<()> {
        self.inner.write_all(b"[\n")
    }

    fn write_record(&mut self, record: &MethodRecord<'_>) -> io::Result<()> {
        let json = format_record(record, self.format)?;
        let line = match self.format {
            OutputFormat::Legacy => format!("{json},\n"),
            OutputFormat::Strict if !self.emitted => json,
            OutputFormat::Strict => format!(",\n{json}"),
        };
        // Record and separator go out in a single write
        self.emitted = true;
        self.inner.write_all(line.as_bytes())?;
        self.records_written += 1;
        Ok(())
    }

    fn finish(&mut self) -> io::Result<()> {
        match self.format {
            OutputFormat::Strict if self.emitted => self.inner.write_all(b"\n]")?,
            _ => self.inner.write_all(b"]")?,
        }
        self.inner.flush()
    }
}
