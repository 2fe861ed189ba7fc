//! Spatial aggregation of visible records into H3 hex bins.
//!
//! Every pass recomputes all cells from scratch from the current visible
//! subset. That trades recomputation cost for correctness by construction:
//! there is no incremental cell mutation, so stale-cell bugs cannot exist.

use std::collections::HashMap;

use foundation::color::Rgb;
use h3o::{CellIndex, LatLng, Resolution};
use store::PointRecord;
use taxonomy::SectorGroup;

/// Cap on the rendered bin height, as a fraction of globe radius.
pub const MAX_BIN_HEIGHT: f64 = 0.25;

/// How much darker a bin's sides are than its top, per RGB channel.
const SIDE_DARKEN: u8 = 30;

/// One hexagonal bin. Derived data: recomputed on every aggregation pass,
/// never persisted across passes.
#[derive(Debug, Clone, PartialEq)]
pub struct HexCell {
    pub cell: CellIndex,
    /// Member records in insertion order of the visible subset.
    pub members: Vec<PointRecord>,
    pub sum_weight: f64,
    /// Group of the first-assigned member, not a weighted majority.
    /// Deliberate tie-break favoring simplicity; see DESIGN.md.
    pub dominant_group: SectorGroup,
}

impl HexCell {
    /// Extrusion height for rendering; concave in `sum_weight` so outliers do
    /// not dwarf the rest of the map.
    pub fn height(&self) -> f64 {
        bin_height(self.sum_weight)
    }

    pub fn top_color(&self) -> Rgb {
        self.dominant_group.color()
    }

    pub fn side_color(&self) -> Rgb {
        self.top_color().darkened(SIDE_DARKEN)
    }
}

/// `min(0.4 * (0.02 + 0.045 * sqrt(w)), 0.25)` — square-root response capped
/// at `MAX_BIN_HEIGHT`.
pub fn bin_height(sum_weight: f64) -> f64 {
    (0.4 * (0.02 + 0.045 * sum_weight.sqrt())).min(MAX_BIN_HEIGHT)
}

/// Bin the visible records into hex cells at the given resolution.
///
/// Deterministic: identical input yields identical cells in identical order
/// (cells appear in first-assignment order, members in insertion order).
pub fn aggregate(visible: &[PointRecord], resolution: Resolution) -> Vec<HexCell> {
    let mut cells: Vec<HexCell> = Vec::new();
    let mut slots: HashMap<CellIndex, usize> = HashMap::new();

    for record in visible {
        // Positions are range-validated at ingest, so this cannot fail on
        // store-resident records; skip defensively rather than panic.
        let Ok(latlng) = LatLng::new(record.position.lat, record.position.lng) else {
            continue;
        };
        let cell = latlng.to_cell(resolution);
        let slot = *slots.entry(cell).or_insert_with(|| {
            cells.push(HexCell {
                cell,
                members: Vec::new(),
                sum_weight: 0.0,
                dominant_group: record.group(),
            });
            cells.len() - 1
        });
        cells[slot].sum_weight += record.weight;
        cells[slot].members.push(record.clone());
    }

    cells
}
