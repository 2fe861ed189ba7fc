//! Transport seam for record ingestion.
//!
//! The pipeline never speaks HTTP itself; a caller supplies something that
//! yields raw body chunks. `next_chunk` is the single suspension point of the
//! whole pipeline: from here everything is synchronous.

/// Bulk fetch bound, clamped to what the backend accepts.
pub fn clamp_bulk_budget(max_points: usize) -> usize {
    max_points.clamp(1_000, 100_000)
}

/// Streaming fetch bound, clamped to what the backend accepts.
pub fn clamp_stream_budget(max_points: usize) -> usize {
    max_points.clamp(5_000, 100_000)
}

/// A transport-level failure. One human-readable message; the pipeline never
/// retries on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportError {
    pub message: String,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl std::fmt::Display for TransportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for TransportError {}

/// Source of raw body chunks for a streaming fetch.
///
/// `Ok(Some(bytes))` yields the next chunk, `Ok(None)` signals exhaustion.
/// Chunks arrive in order; a chunk may end mid-line (the decoder buffers the
/// partial tail). Abandoning ingestion is simply ceasing to call this.
pub trait ChunkSource {
    fn next_chunk(&mut self) -> Result<Option<Vec<u8>>, TransportError>;
}

/// In-memory source, mainly for tests and replay.
#[derive(Debug, Default)]
pub struct VecChunkSource {
    chunks: std::collections::VecDeque<Vec<u8>>,
}

impl VecChunkSource {
    pub fn new(chunks: impl IntoIterator<Item = Vec<u8>>) -> Self {
        Self {
            chunks: chunks.into_iter().collect(),
        }
    }
}

impl ChunkSource for VecChunkSource {
    fn next_chunk(&mut self) -> Result<Option<Vec<u8>>, TransportError> {
        Ok(self.chunks.pop_front())
    }
}

#[cfg(test)]
mod tests {
    use super::{ChunkSource, VecChunkSource, clamp_bulk_budget, clamp_stream_budget};

    #[test]
    fn budgets_clamp_to_backend_bounds() {
        assert_eq!(clamp_bulk_budget(10), 1_000);
        assert_eq!(clamp_bulk_budget(16_500), 16_500);
        assert_eq!(clamp_bulk_budget(1_000_000), 100_000);
        assert_eq!(clamp_stream_budget(10), 5_000);
        assert_eq!(clamp_stream_budget(1_000_000), 100_000);
    }

    #[test]
    fn vec_source_drains_in_order() {
        let mut src = VecChunkSource::new([b"a".to_vec(), b"b".to_vec()]);
        assert_eq!(src.next_chunk().unwrap(), Some(b"a".to_vec()));
        assert_eq!(src.next_chunk().unwrap(), Some(b"b".to_vec()));
        assert_eq!(src.next_chunk().unwrap(), None);
    }
}
