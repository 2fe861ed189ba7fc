//! Consolidated sector taxonomy.
//!
//! Upstream emissions feeds tag each source with a free-form sector string
//! (e.g. "oil-and-gas-production", "fossil-fuel-operations"). For filtering
//! and coloring we fold those into a small fixed set of groups. The mapping
//! is many-to-one and total: anything unrecognized, empty or absent lands in
//! `Other`.

use foundation::color::Rgb;
use serde::{Deserialize, Serialize};

/// A consolidated sector group, in canonical display order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SectorGroup {
    Power,
    OilAndGas,
    Transport,
    ForestAndLand,
    Agriculture,
    Manufacturing,
    Buildings,
    Waste,
    Mining,
    FluorinatedGases,
    Other,
}

impl SectorGroup {
    /// All groups in canonical order. `Other` is always last.
    pub const ALL: [SectorGroup; 11] = [
        SectorGroup::Power,
        SectorGroup::OilAndGas,
        SectorGroup::Transport,
        SectorGroup::ForestAndLand,
        SectorGroup::Agriculture,
        SectorGroup::Manufacturing,
        SectorGroup::Buildings,
        SectorGroup::Waste,
        SectorGroup::Mining,
        SectorGroup::FluorinatedGases,
        SectorGroup::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SectorGroup::Power => "Power",
            SectorGroup::OilAndGas => "Oil & gas",
            SectorGroup::Transport => "Transport",
            SectorGroup::ForestAndLand => "Forest & land",
            SectorGroup::Agriculture => "Agriculture",
            SectorGroup::Manufacturing => "Manufacturing",
            SectorGroup::Buildings => "Buildings",
            SectorGroup::Waste => "Waste",
            SectorGroup::Mining => "Mining",
            SectorGroup::FluorinatedGases => "Fluorinated gases",
            SectorGroup::Other => "Other",
        }
    }

    /// Fixed map color for hex bins dominated by this group.
    pub fn color(self) -> Rgb {
        match self {
            SectorGroup::Power => Rgb::new(245, 158, 11),
            SectorGroup::OilAndGas => Rgb::new(239, 68, 68),
            SectorGroup::Transport => Rgb::new(139, 92, 246),
            SectorGroup::ForestAndLand => Rgb::new(34, 197, 94),
            SectorGroup::Agriculture => Rgb::new(234, 179, 8),
            SectorGroup::Manufacturing => Rgb::new(236, 72, 153),
            SectorGroup::Buildings => Rgb::new(6, 182, 212),
            SectorGroup::Waste => Rgb::new(120, 113, 108),
            SectorGroup::Mining => Rgb::new(249, 115, 22),
            SectorGroup::FluorinatedGases => Rgb::new(99, 102, 241),
            SectorGroup::Other => Rgb::new(100, 116, 139),
        }
    }
}

/// Map a raw upstream sector label to its consolidated group.
///
/// Pure and total: case and surrounding whitespace are ignored, and any miss
/// (including `None` and the empty string) resolves to `SectorGroup::Other`.
pub fn classify(raw: Option<&str>) -> SectorGroup {
    let Some(raw) = raw else {
        return SectorGroup::Other;
    };
    match raw.trim().to_lowercase().as_str() {
        "power" => SectorGroup::Power,
        "oil-and-gas" | "oil-and-gas-production" | "fossil-fuel-operations" => {
            SectorGroup::OilAndGas
        }
        "road-transportation" | "shipping" | "aviation" | "rail-transportation" => {
            SectorGroup::Transport
        }
        "forest-land-fires" | "forestry-and-land-use" => SectorGroup::ForestAndLand,
        "agriculture" => SectorGroup::Agriculture,
        "manufacturing" => SectorGroup::Manufacturing,
        "buildings" => SectorGroup::Buildings,
        "waste" => SectorGroup::Waste,
        "mining" | "mineral-extraction" => SectorGroup::Mining,
        "fluorinated-gases" => SectorGroup::FluorinatedGases,
        _ => SectorGroup::Other,
    }
}
