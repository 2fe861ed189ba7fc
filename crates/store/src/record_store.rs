use crate::record::PointRecord;

/// Append-only collection of ingested records.
///
/// The store never deduplicates and never mutates existing entries. Each
/// observable change bumps `revision`; downstream consumers compare revisions
/// to decide when to recompute their derived views instead of registering
/// callbacks.
#[derive(Debug, Default)]
pub struct RecordStore {
    records: Vec<PointRecord>,
    revision: u64,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append records, preserving arrival order.
    pub fn append(&mut self, records: impl IntoIterator<Item = PointRecord>) {
        let before = self.records.len();
        self.records.extend(records);
        if self.records.len() != before {
            self.revision += 1;
        }
    }

    /// Snapshot read of all records appended so far.
    pub fn all(&self) -> &[PointRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Monotonic change counter; bumped by `append` and `clear`.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Drop all records, e.g. before re-running a logical load that should
    /// not duplicate.
    pub fn clear(&mut self) {
        if !self.records.is_empty() {
            self.records.clear();
            self.revision += 1;
        }
    }
}
