//! Ingestion controller.
//!
//! Drives incremental population of a `RecordStore` from a chunked source:
//!
//! `Idle -> Loading -> {Streaming -> Loading}* -> Complete | Failed`
//!
//! Chunks are processed sequentially in arrival order, so there is never a
//! concurrent mutation of the store. A transport failure moves to `Failed`
//! with a single human-readable message and no retry; the caller may restart
//! ingestion from scratch (which appends again — the store does not dedup).

use store::RecordStore;

use crate::decoder::NdjsonDecoder;
use crate::envelope::{BulkEnvelope, DisplayStats, EnvelopeError};
use crate::transport::{ChunkSource, TransportError};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum IngestPhase {
    #[default]
    Idle,
    /// Awaiting the next chunk from the transport.
    Loading,
    /// Applying a just-arrived chunk.
    Streaming,
    Complete,
    Failed,
}

/// Progress log entry, drained by the UI for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestEvent {
    pub kind: &'static str,
    pub message: String,
}

#[derive(Debug, Default)]
pub struct IngestionController {
    phase: IngestPhase,
    appended: usize,
    last_error: Option<String>,
    stats: Option<DisplayStats>,
    events: Vec<IngestEvent>,
}

impl IngestionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> IngestPhase {
        self.phase
    }

    /// Records appended to the store by the most recent run.
    pub fn appended(&self) -> usize {
        self.appended
    }

    /// The error message of the most recent failure, if any.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Display-ready headline stats from the most recent bulk run.
    pub fn stats(&self) -> Option<&DisplayStats> {
        self.stats.as_ref()
    }

    pub fn events(&self) -> &[IngestEvent] {
        &self.events
    }

    pub fn drain_events(&mut self) -> Vec<IngestEvent> {
        std::mem::take(&mut self.events)
    }

    fn start(&mut self) {
        self.phase = IngestPhase::Loading;
        self.appended = 0;
        self.last_error = None;
        self.emit("started", "ingestion started");
    }

    fn emit(&mut self, kind: &'static str, message: impl Into<String>) {
        self.events.push(IngestEvent {
            kind,
            message: message.into(),
        });
    }

    /// Mark ingestion failed on behalf of a caller whose fetch never produced
    /// a body (e.g. a bulk request that errored before any bytes arrived).
    pub fn fail(&mut self, message: impl Into<String>) {
        let message = message.into();
        self.phase = IngestPhase::Failed;
        self.emit("failed", message.clone());
        self.last_error = Some(message);
    }

    /// Drain a streaming source to exhaustion, appending decoded records.
    ///
    /// Any unterminated trailing data is parsed as a final chunk on
    /// exhaustion. Returns the number of records appended.
    pub fn run_stream(
        &mut self,
        source: &mut dyn ChunkSource,
        store: &mut RecordStore,
    ) -> Result<usize, TransportError> {
        self.start();
        let mut decoder = NdjsonDecoder::new();
        loop {
            match source.next_chunk() {
                Ok(Some(chunk)) => {
                    self.phase = IngestPhase::Streaming;
                    let records = decoder.push(&chunk);
                    if !records.is_empty() {
                        self.appended += records.len();
                        store.append(records);
                        self.emit("chunk", format!("{} records so far", self.appended));
                    }
                    self.phase = IngestPhase::Loading;
                }
                Ok(None) => {
                    let records = decoder.finish();
                    self.appended += records.len();
                    store.append(records);
                    self.phase = IngestPhase::Complete;
                    self.emit("complete", format!("{} records", self.appended));
                    return Ok(self.appended);
                }
                Err(err) => {
                    self.fail(err.message.clone());
                    return Err(err);
                }
            }
        }
    }

    /// Apply a bulk response body in one pass.
    pub fn run_bulk(
        &mut self,
        body: &str,
        store: &mut RecordStore,
    ) -> Result<usize, EnvelopeError> {
        self.start();
        self.phase = IngestPhase::Streaming;
        let envelope = match BulkEnvelope::parse(body) {
            Ok(env) => env,
            Err(err) => {
                self.fail(err.to_string());
                return Err(err);
            }
        };
        let records = envelope.records();
        self.appended = records.len();
        self.stats = Some(envelope.stats);
        store.append(records);
        self.phase = IngestPhase::Complete;
        self.emit("complete", format!("{} records", self.appended));
        Ok(self.appended)
    }
}

#[cfg(test)]
mod tests {
    use super::{IngestPhase, IngestionController};
    use crate::transport::{ChunkSource, TransportError, VecChunkSource};
    use pretty_assertions::assert_eq;
    use store::RecordStore;

    fn chunk(labels: &[&str]) -> Vec<u8> {
        let entries: Vec<String> = labels
            .iter()
            .map(|l| format!(r#"{{"lat":1.0,"lng":2.0,"value":1.0,"label":"{l}","description":""}}"#))
            .collect();
        format!("[{}]\n", entries.join(",")).into_bytes()
    }

    #[test]
    fn stream_appends_in_arrival_order() {
        let mut ctl = IngestionController::new();
        let mut store = RecordStore::new();
        let mut src = VecChunkSource::new([chunk(&["a", "b"]), chunk(&["c"])]);
        let n = ctl.run_stream(&mut src, &mut store).unwrap();
        assert_eq!(n, 3);
        assert_eq!(ctl.phase(), IngestPhase::Complete);
        let labels: Vec<_> = store.all().iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, ["a", "b", "c"]);
    }

    #[test]
    fn malformed_line_does_not_change_outcome() {
        let valid = [chunk(&["a"]), chunk(&["b"])];
        let with_garbage = [chunk(&["a"]), b"{{{ not json\n".to_vec(), chunk(&["b"])];

        let mut clean_store = RecordStore::new();
        IngestionController::new()
            .run_stream(&mut VecChunkSource::new(valid), &mut clean_store)
            .unwrap();

        let mut dirty_store = RecordStore::new();
        IngestionController::new()
            .run_stream(&mut VecChunkSource::new(with_garbage), &mut dirty_store)
            .unwrap();

        assert_eq!(clean_store.all(), dirty_store.all());
    }

    #[test]
    fn trailing_unterminated_chunk_is_parsed() {
        let mut body = chunk(&["a"]);
        body.extend_from_slice(
            br#"[{"lat":1.0,"lng":2.0,"value":1.0,"label":"tail","description":""}]"#,
        );
        let mut store = RecordStore::new();
        let n = IngestionController::new()
            .run_stream(&mut VecChunkSource::new([body]), &mut store)
            .unwrap();
        assert_eq!(n, 2);
        assert_eq!(store.all()[1].label, "tail");
    }

    struct FailingSource {
        first: Option<Vec<u8>>,
    }

    impl ChunkSource for FailingSource {
        fn next_chunk(&mut self) -> Result<Option<Vec<u8>>, TransportError> {
            match self.first.take() {
                Some(chunk) => Ok(Some(chunk)),
                None => Err(TransportError::new("connection reset")),
            }
        }
    }

    #[test]
    fn transport_failure_surfaces_one_message() {
        let mut ctl = IngestionController::new();
        let mut store = RecordStore::new();
        let mut src = FailingSource {
            first: Some(chunk(&["a"])),
        };
        let err = ctl.run_stream(&mut src, &mut store).unwrap_err();
        assert_eq!(err.message, "connection reset");
        assert_eq!(ctl.phase(), IngestPhase::Failed);
        assert_eq!(ctl.last_error(), Some("connection reset"));
        // Records appended before the failure stay in the store.
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn rerun_appends_again_without_dedup() {
        let mut store = RecordStore::new();
        let mut ctl = IngestionController::new();
        ctl.run_stream(&mut VecChunkSource::new([chunk(&["a"])]), &mut store)
            .unwrap();
        ctl.run_stream(&mut VecChunkSource::new([chunk(&["a"])]), &mut store)
            .unwrap();
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn bulk_run_appends_and_completes() {
        let mut ctl = IngestionController::new();
        let mut store = RecordStore::new();
        let body = r#"{
            "threats":[{"lat":1.0,"lng":2.0,"value":0.5,"label":"p","description":""}],
            "stats":{"co2_concentration":"422 ppm"}
        }"#;
        let n = ctl.run_bulk(body, &mut store).unwrap();
        assert_eq!(n, 1);
        assert_eq!(ctl.phase(), IngestPhase::Complete);
        assert_eq!(ctl.stats().unwrap().co2_concentration, "422 ppm");
    }

    #[test]
    fn bulk_garbage_fails_with_message() {
        let mut ctl = IngestionController::new();
        let mut store = RecordStore::new();
        assert!(ctl.run_bulk("garbage", &mut store).is_err());
        assert_eq!(ctl.phase(), IngestPhase::Failed);
        assert!(ctl.last_error().unwrap().contains("malformed bulk response"));
    }
}
