//! Render-facing hex prism model.
//!
//! Everything a renderer needs to place one extruded hexagonal prism on the
//! globe, flattened out of the aggregation cell so the renderer has zero
//! coupling to the pipeline's types.

use compute::HexCell;
use foundation::color::Rgb;
use h3o::LatLng;

#[derive(Debug, Clone, PartialEq)]
pub struct HexPrism {
    /// Cell center in WGS84 degrees.
    pub lat: f64,
    pub lng: f64,
    /// Extrusion height as a fraction of globe radius.
    pub height: f64,
    pub sum_weight: f64,
    pub top_color: Rgb,
    pub side_color: Rgb,
    /// Tooltip text: first member's label, description and group label.
    pub label: String,
}

impl HexPrism {
    pub fn from_cell(cell: &HexCell) -> Self {
        let center = LatLng::from(cell.cell);
        Self {
            lat: center.lat(),
            lng: center.lng(),
            height: cell.height(),
            sum_weight: cell.sum_weight,
            top_color: cell.top_color(),
            side_color: cell.side_color(),
            label: compose_label(cell),
        }
    }
}

/// Build prisms for every cell, in cell order.
pub fn prisms(cells: &[HexCell]) -> Vec<HexPrism> {
    cells.iter().map(HexPrism::from_cell).collect()
}

fn compose_label(cell: &HexCell) -> String {
    match cell.members.first() {
        Some(first) => format!(
            "{}\n{}\n{}",
            first.label,
            first.description,
            first.group().label()
        ),
        None => cell.dominant_group.label().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::{HexPrism, prisms};
    use compute::aggregate;
    use foundation::color::Rgb;
    use foundation::geo::GeoPoint;
    use h3o::Resolution;
    use store::{PointRecord, RecordKind};

    fn rec(lat: f64, lng: f64, weight: f64) -> PointRecord {
        PointRecord {
            position: GeoPoint::new(lat, lng),
            weight,
            kind: RecordKind::Threat,
            raw_sector: Some("power".to_string()),
            label: "Beijing Plant".to_string(),
            description: "coal power station".to_string(),
        }
    }

    #[test]
    fn prism_carries_cell_geometry_and_colors() {
        let cells = aggregate(&[rec(10.0, 10.0, 4.0)], Resolution::Four);
        let out = prisms(&cells);
        assert_eq!(out.len(), 1);
        let p: &HexPrism = &out[0];
        // Cell center is near the member, not necessarily on it.
        assert!((p.lat - 10.0).abs() < 1.0);
        assert!((p.lng - 10.0).abs() < 1.0);
        assert_eq!(p.sum_weight, 4.0);
        assert_eq!(p.height, cells[0].height());
        assert_eq!(p.top_color, Rgb::new(245, 158, 11));
        assert_eq!(p.side_color, Rgb::new(215, 128, 0));
    }

    #[test]
    fn label_composes_first_member_fields() {
        let cells = aggregate(&[rec(10.0, 10.0, 4.0)], Resolution::Four);
        let out = prisms(&cells);
        assert_eq!(out[0].label, "Beijing Plant\ncoal power station\nPower");
    }
}
