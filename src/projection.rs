// Per-frame projection of tile positions.
//
// The sphere rotates about Y first and then about X, using the Y-rotated
// depth for the second step. The two rotations do not commute, so the order
// here is part of the visual contract.

use crate::constants::*;
use glam::DVec3;

/// Sines and cosines of one frame's rotation pair. Built once per tick and
/// shared by every tile so a frame never mixes rotations.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rotation {
    pub cos_y: f64,
    pub sin_y: f64,
    pub cos_x: f64,
    pub sin_x: f64,
}

impl Rotation {
    pub const IDENTITY: Rotation = Rotation {
        cos_y: 1.0,
        sin_y: 0.0,
        cos_x: 1.0,
        sin_x: 0.0,
    };

    /// Rotation for a smoothed pointer offset: offset X turns the sphere about
    /// its Y axis, offset Y about its X axis.
    pub fn from_pointer(current_x: f64, current_y: f64) -> Self {
        let rad_y = (current_x * ROTATION_RANGE_DEG).to_radians();
        let rad_x = (current_y * ROTATION_RANGE_DEG).to_radians();
        Self {
            cos_y: rad_y.cos(),
            sin_y: rad_y.sin(),
            cos_x: rad_x.cos(),
            sin_x: rad_x.sin(),
        }
    }

    #[inline]
    pub fn apply(&self, p: DVec3) -> DVec3 {
        let dx = p.x * self.cos_y - p.z * self.sin_y;
        let dz = p.x * self.sin_y + p.z * self.cos_y;
        let dy = p.y * self.cos_x - dz * self.sin_x;
        let dz = p.y * self.sin_x + dz * self.cos_x;
        DVec3::new(dx, dy, dz)
    }
}

#[inline]
pub fn ambient_scale(depth: f64) -> f64 {
    AMBIENT_SCALE_BASE + depth / DEPTH_DIVISOR
}

#[inline]
pub fn ambient_opacity(depth: f64) -> f64 {
    AMBIENT_OPACITY_BASE + depth / DEPTH_DIVISOR
}

#[inline]
pub fn depth_z_index(depth: f64) -> i32 {
    depth.floor() as i32
}

/// Style output for one tile in one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TileVisual {
    pub translate: DVec3,
    pub scale: f64,
    pub opacity: f64,
    /// Blur radius in CSS pixels; 0 means no filter.
    pub blur_px: f64,
    pub z_index: i32,
}

impl TileVisual {
    /// Depth-driven styling used when no tile is activated.
    pub fn ambient(p: DVec3) -> Self {
        Self {
            translate: p,
            scale: ambient_scale(p.z),
            opacity: ambient_opacity(p.z),
            blur_px: 0.0,
            z_index: depth_z_index(p.z),
        }
    }

    pub fn activated(p: DVec3) -> Self {
        Self {
            translate: p,
            scale: ACTIVE_SCALE,
            opacity: ACTIVE_OPACITY,
            blur_px: 0.0,
            z_index: ACTIVE_Z_INDEX,
        }
    }

    pub fn dimmed(p: DVec3) -> Self {
        Self {
            translate: p,
            scale: DIMMED_SCALE,
            opacity: DIMMED_OPACITY,
            blur_px: DIMMED_BLUR_PX,
            z_index: DIMMED_Z_INDEX,
        }
    }

    pub fn transform_css(&self) -> String {
        format!(
            "translate3d({}px, {}px, {}px) scale({})",
            self.translate.x, self.translate.y, self.translate.z, self.scale
        )
    }

    pub fn filter_css(&self) -> String {
        if self.blur_px > 0.0 {
            format!("blur({}px)", self.blur_px)
        } else {
            "none".to_string()
        }
    }
}
