use foundation::geo::GeoPoint;
use serde::{Deserialize, Serialize};
use taxonomy::{SectorGroup, classify};

/// Whether a record measures emissions or mitigation capacity.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    /// An emissions source.
    #[default]
    Threat,
    /// A mitigation/defense signal (renewables, reforestation, ...).
    Defense,
}

/// A single geotagged, weighted data sample. Immutable once ingested.
#[derive(Debug, Clone, PartialEq)]
pub struct PointRecord {
    pub position: GeoPoint,
    /// Non-negative magnitude (e.g. Gt CO2e per year).
    pub weight: f64,
    pub kind: RecordKind,
    /// Raw upstream sector label; `None` classifies the same as unrecognized.
    pub raw_sector: Option<String>,
    pub label: String,
    pub description: String,
}

impl PointRecord {
    pub fn group(&self) -> SectorGroup {
        classify(self.raw_sector.as_deref())
    }
}

/// Record as it appears on the wire (bulk envelope entries and NDJSON chunk
/// elements). Extra upstream fields (`category`, `intensity`, `capacity`) are
/// ignored by design.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WireRecord {
    pub lat: f64,
    pub lng: f64,
    #[serde(default)]
    pub value: f64,
    #[serde(rename = "type", default)]
    pub kind: RecordKind,
    #[serde(default)]
    pub sector: Option<String>,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub description: String,
}

impl WireRecord {
    /// Validate into a `PointRecord`.
    ///
    /// Returns `None` when the coordinates are out of range or non-finite;
    /// a non-finite weight collapses to 0 and a negative weight clamps to 0,
    /// preserving the `weight >= 0` invariant.
    pub fn into_record(self) -> Option<PointRecord> {
        let position = GeoPoint::validated(self.lat, self.lng)?;
        let weight = if self.value.is_finite() {
            self.value.max(0.0)
        } else {
            0.0
        };
        Some(PointRecord {
            position,
            weight,
            kind: self.kind,
            raw_sector: self.sector,
            label: self.label,
            description: self.description,
        })
    }
}
