//! Interactive session: owns the record store and filter state, recomputes
//! derived views when either changes.
//!
//! Change notification is by revision comparison rather than callbacks: every
//! `refresh` compares the store revision plus the filter/unit state against
//! the previous pass and recomputes only on a difference. All computation is
//! synchronous; ingestion mutates the store between refreshes.

use compute::{FilterState, SectorSelection, Summary, UnitMode};
use h3o::Resolution;
use store::RecordStore;

use crate::prism::{HexPrism, prisms};
use crate::renderer::GlobeRenderer;

#[derive(Debug)]
pub struct GlobeSession {
    store: RecordStore,
    filter: FilterState,
    unit_mode: UnitMode,
    resolution: Resolution,
    prisms: Vec<HexPrism>,
    summary: Summary,
    last_pass: Option<(u64, FilterState, UnitMode)>,
}

impl GlobeSession {
    pub fn new(resolution: Resolution) -> Self {
        Self {
            store: RecordStore::new(),
            filter: FilterState::default(),
            unit_mode: UnitMode::default(),
            resolution,
            prisms: Vec::new(),
            summary: compute::summarize(&[], UnitMode::default()),
            last_pass: None,
        }
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Mutable store access for ingestion. Derived views catch up on the next
    /// `refresh` via the revision counter.
    pub fn store_mut(&mut self) -> &mut RecordStore {
        &mut self.store
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn set_sector(&mut self, sector: SectorSelection) {
        self.filter.sector = sector;
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.filter.search_query = query.into();
    }

    pub fn set_kind_enabled(&mut self, enabled: bool) {
        self.filter.kind_enabled = enabled;
    }

    pub fn set_unit_mode(&mut self, mode: UnitMode) {
        self.unit_mode = mode;
    }

    /// Selector options for the filter UI, derived from the full store.
    pub fn available_groups(&self) -> Vec<SectorSelection> {
        compute::available_groups(self.store.all())
    }

    /// Recompute prisms and summary if the store or filter state changed
    /// since the last pass. Returns whether a recomputation happened.
    pub fn refresh(&mut self) -> bool {
        let pass = (
            self.store.revision(),
            self.filter.clone(),
            self.unit_mode,
        );
        if self
            .last_pass
            .as_ref()
            .is_some_and(|last| *last == pass)
        {
            return false;
        }

        let visible = compute::visible(self.store.all(), &self.filter);
        let cells = compute::aggregate(&visible, self.resolution);
        self.prisms = prisms(&cells);
        self.summary = compute::summarize(&visible, self.unit_mode);
        self.last_pass = Some(pass);
        true
    }

    pub fn prisms(&self) -> &[HexPrism] {
        &self.prisms
    }

    pub fn summary(&self) -> &Summary {
        &self.summary
    }

    /// Refresh and push the current prisms to the renderer.
    pub fn push_to(&mut self, renderer: &mut dyn GlobeRenderer) {
        self.refresh();
        renderer.set_data(&self.prisms);
    }
}

impl Default for GlobeSession {
    fn default() -> Self {
        // Matches the default hex bin resolution of the globe view.
        Self::new(Resolution::Four)
    }
}
