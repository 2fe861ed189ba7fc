//! Derives the visible record subset from the full store.

use std::collections::BTreeSet;

use store::PointRecord;
use taxonomy::SectorGroup;

/// Sector selector value: either everything or one consolidated group.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum SectorSelection {
    #[default]
    All,
    Group(SectorGroup),
}

impl SectorSelection {
    pub fn label(self) -> &'static str {
        match self {
            SectorSelection::All => "All Sectors",
            SectorSelection::Group(g) => g.label(),
        }
    }
}

/// Live user filter state. Owned by the interactive session and mutated only
/// by user action.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    pub sector: SectorSelection,
    pub search_query: String,
    /// When false the visible set is empty regardless of other predicates.
    pub kind_enabled: bool,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            sector: SectorSelection::All,
            search_query: String::new(),
            kind_enabled: true,
        }
    }
}

/// Apply all filter predicates as a conjunction, preserving insertion order.
///
/// An empty result is a valid renderable state, not an error.
pub fn visible(all: &[PointRecord], state: &FilterState) -> Vec<PointRecord> {
    if !state.kind_enabled {
        return Vec::new();
    }
    // Emptiness is judged on the trimmed query; a non-empty query matches as
    // typed (lower-cased only), surrounding whitespace included.
    let query = if state.search_query.trim().is_empty() {
        String::new()
    } else {
        state.search_query.to_lowercase()
    };
    all.iter()
        .filter(|r| match state.sector {
            SectorSelection::All => true,
            SectorSelection::Group(g) => r.group() == g,
        })
        .filter(|r| {
            query.is_empty()
                || r.label.to_lowercase().contains(&query)
                || r.description.to_lowercase().contains(&query)
        })
        .cloned()
        .collect()
}

/// Selector options: `All` first, then every group with at least one member,
/// in canonical enumeration order.
pub fn available_groups(all: &[PointRecord]) -> Vec<SectorSelection> {
    let seen: BTreeSet<SectorGroup> = all.iter().map(PointRecord::group).collect();
    std::iter::once(SectorSelection::All)
        .chain(
            SectorGroup::ALL
                .iter()
                .copied()
                .filter(|g| seen.contains(g))
                .map(SectorSelection::Group),
        )
        .collect()
}
