//! Surface sizing configuration
//!
//! The host supplies a display size in presentation pixels; the simulation
//! runs at that size divided by a fixed scale-down factor. Device pixel
//! ratio multiplies the backing store only and never touches the logical
//! resolution.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurfaceConfig {
    /// Requested display width in presentation (CSS) pixels
    pub display_width: u32,
    /// Requested display height in presentation (CSS) pixels
    pub display_height: u32,
    /// Internal scale-down factor from display to logical resolution
    pub scale: u32,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            display_width: 1500,
            display_height: 400,
            scale: 3,
        }
    }
}

impl SurfaceConfig {
    pub fn new(display_width: u32, display_height: u32) -> Self {
        Self {
            display_width,
            display_height,
            ..Default::default()
        }
    }

    /// Logical (unscaled) simulation resolution
    pub fn logical_size(&self) -> (u32, u32) {
        let scale = self.scale.max(1);
        (self.display_width / scale, self.display_height / scale)
    }

    /// Backing-store pixel dimensions for a device pixel ratio
    pub fn backing_size(&self, dpr: f64) -> (u32, u32) {
        let (w, h) = self.logical_size();
        (
            (f64::from(w) * dpr).floor() as u32,
            (f64::from(h) * dpr).floor() as u32,
        )
    }
}
