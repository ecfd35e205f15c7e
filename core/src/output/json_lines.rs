use crate::report::{EquivError, EquivalencyReport, Failure};
use crate::sink::FailureSink;
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct JsonLinesHeader<'a> {
    kind: &'static str,
    version: &'a str,
}

/// A sink that writes a header line followed by one JSON failure per line.
pub struct JsonLinesSink<W: Write> {
    w: W,
    wrote_header: bool,
    version: &'static str,
}

impl<W: Write> JsonLinesSink<W> {
    pub fn new(w: W) -> Self {
        Self {
            w,
            wrote_header: false,
            version: EquivalencyReport::SCHEMA_VERSION,
        }
    }

    pub fn into_inner(self) -> W {
        self.w
    }

    fn write_line<T: Serialize>(&mut self, value: &T) -> Result<(), EquivError> {
        serde_json::to_writer(&mut self.w, value).map_err(|e| EquivError::SinkError {
            message: e.to_string(),
        })?;
        self.w.write_all(b"\n").map_err(|e| EquivError::SinkError {
            message: e.to_string(),
        })
    }
}

impl<W: Write> FailureSink for JsonLinesSink<W> {
    fn begin(&mut self) -> Result<(), EquivError> {
        if self.wrote_header {
            return Ok(());
        }
        let header = JsonLinesHeader {
            kind: "Header",
            version: self.version,
        };
        self.write_line(&header)?;
        self.wrote_header = true;
        Ok(())
    }

    fn report(&mut self, failure: Failure) -> Result<(), EquivError> {
        self.write_line(&failure)
    }

    fn finish(&mut self) -> Result<(), EquivError> {
        self.w.flush().map_err(|e| EquivError::SinkError {
            message: e.to_string(),
        })
    }
}
