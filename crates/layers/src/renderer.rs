//! Narrow capability seam to the external 3D globe renderer.
//!
//! The pipeline never holds a handle typed as the rendering library's API;
//! it only pushes prisms and camera poses through this trait.

use crate::prism::HexPrism;

/// Camera position over the globe.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CameraPose {
    pub lat: f64,
    pub lng: f64,
    /// Distance from the surface as a fraction of globe radius.
    pub altitude: f64,
}

impl CameraPose {
    pub const fn new(lat: f64, lng: f64, altitude: f64) -> Self {
        Self { lat, lng, altitude }
    }
}

impl Default for CameraPose {
    fn default() -> Self {
        // Initial view: mid-northern latitudes, whole globe in frame.
        Self::new(20.0, 0.0, 2.5)
    }
}

pub trait GlobeRenderer {
    fn set_data(&mut self, prisms: &[HexPrism]);
    fn set_camera(&mut self, pose: CameraPose);
}

/// Renderer stub that records what was pushed to it; used in tests and as a
/// headless sink.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub prisms: Vec<HexPrism>,
    pub camera: Option<CameraPose>,
    pub data_pushes: usize,
}

impl GlobeRenderer for RecordingRenderer {
    fn set_data(&mut self, prisms: &[HexPrism]) {
        self.prisms = prisms.to_vec();
        self.data_pushes += 1;
    }

    fn set_camera(&mut self, pose: CameraPose) {
        self.camera = Some(pose);
    }
}
