//! Bulk fetch envelope.
//!
//! The non-streaming endpoint returns the whole dataset at once: a `threats`
//! array, an optional `defense` array, and a `stats` object of display-ready
//! strings that the pipeline passes through untouched.

use serde::{Deserialize, Serialize};
use store::{PointRecord, WireRecord};

/// Headline statistics, pre-formatted by the backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayStats {
    pub global_temperature: String,
    pub co2_concentration: String,
    pub renewable_percentage: String,
    pub emissions_avoided: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BulkEnvelope {
    threats: Vec<serde_json::Value>,
    #[serde(default)]
    defense: Vec<serde_json::Value>,
    #[serde(default)]
    pub stats: DisplayStats,
    #[serde(default)]
    pub total_threats: u64,
    #[serde(default)]
    pub total_defense: u64,
}

#[derive(Debug)]
pub struct EnvelopeError {
    pub message: String,
}

impl std::fmt::Display for EnvelopeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "malformed bulk response: {}", self.message)
    }
}

impl std::error::Error for EnvelopeError {}

impl BulkEnvelope {
    pub fn parse(text: &str) -> Result<Self, EnvelopeError> {
        serde_json::from_str(text).map_err(|e| EnvelopeError {
            message: e.to_string(),
        })
    }

    /// All valid records, threats first then defense, in envelope order.
    /// Malformed individual entries are skipped.
    pub fn records(&self) -> Vec<PointRecord> {
        self.threats
            .iter()
            .chain(self.defense.iter())
            .filter_map(|v| serde_json::from_value::<WireRecord>(v.clone()).ok())
            .filter_map(WireRecord::into_record)
            .collect()
    }
}
