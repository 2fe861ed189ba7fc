//! Incremental NDJSON chunk decoder.
//!
//! The streaming endpoint sends newline-delimited JSON arrays, each array a
//! chunk of wire records. Transport chunks do not align with lines, so the
//! decoder buffers the partial tail of each chunk until the newline (or end
//! of stream) arrives. Malformed lines and malformed individual records are
//! skipped; partial corruption never fails the stream.

use store::{PointRecord, WireRecord};

#[derive(Debug, Default)]
pub struct NdjsonDecoder {
    buffer: String,
}

impl NdjsonDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one transport chunk; returns the records from every line this
    /// chunk completed.
    pub fn push(&mut self, chunk: &[u8]) -> Vec<PointRecord> {
        self.buffer.push_str(&String::from_utf8_lossy(chunk));
        let mut out = Vec::new();
        while let Some(pos) = self.buffer.find('\n') {
            let line: String = self.buffer.drain(..=pos).collect();
            out.extend(parse_line(line.trim_end_matches('\n')));
        }
        out
    }

    /// Parse any unterminated trailing data as a final line.
    pub fn finish(&mut self) -> Vec<PointRecord> {
        let tail = std::mem::take(&mut self.buffer);
        parse_line(&tail)
    }

    /// Bytes currently buffered waiting for a newline.
    pub fn pending_len(&self) -> usize {
        self.buffer.len()
    }
}

fn parse_line(line: &str) -> Vec<PointRecord> {
    let line = line.trim();
    if line.is_empty() {
        return Vec::new();
    }
    let Ok(values) = serde_json::from_str::<Vec<serde_json::Value>>(line) else {
        return Vec::new();
    };
    values
        .into_iter()
        .filter_map(|v| serde_json::from_value::<WireRecord>(v).ok())
        .filter_map(WireRecord::into_record)
        .collect()
}
