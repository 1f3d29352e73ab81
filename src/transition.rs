use crate::constants::{NEUTRAL_SCALE, RESET_DURATION_SEC};

/// Decelerating cubic ease: fast start, smooth settle. `t` is clamped to `[0, 1]`.
#[inline]
pub fn ease_out_cubic(t: f64) -> f64 {
    let inv = 1.0 - t.clamp(0.0, 1.0);
    1.0 - inv * inv * inv
}

#[inline]
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a * (1.0 - t) + b * t
}

/// Animatable style values of one tile.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TweenValues {
    pub scale: f64,
    pub opacity: f64,
    pub blur_px: f64,
}

impl TweenValues {
    /// Where a reset ends: neutral scale, no blur, and the given opacity
    /// (the tile's current ambient opacity).
    pub fn settled(opacity: f64) -> Self {
        Self {
            scale: NEUTRAL_SCALE,
            opacity,
            blur_px: 0.0,
        }
    }
}

/// Eased tween of one tile out of the activation styling.
///
/// The target is supplied per step because the ambient opacity it settles on
/// moves with the sphere's rotation while the tween runs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResetTween {
    pub from: TweenValues,
    pub elapsed_sec: f64,
    pub duration_sec: f64,
}

impl ResetTween {
    pub fn new(from: TweenValues) -> Self {
        Self {
            from,
            elapsed_sec: 0.0,
            duration_sec: RESET_DURATION_SEC,
        }
    }

    #[inline]
    pub fn advance(&mut self, dt_sec: f64) {
        self.elapsed_sec = (self.elapsed_sec + dt_sec.max(0.0)).min(self.duration_sec);
    }

    #[inline]
    pub fn progress(&self) -> f64 {
        if self.duration_sec <= 0.0 {
            return 1.0;
        }
        self.elapsed_sec / self.duration_sec
    }

    #[inline]
    pub fn finished(&self) -> bool {
        self.progress() >= 1.0
    }

    pub fn values_toward(&self, to: TweenValues) -> TweenValues {
        let k = ease_out_cubic(self.progress());
        TweenValues {
            scale: lerp(self.from.scale, to.scale, k),
            opacity: lerp(self.from.opacity, to.opacity, k),
            blur_px: lerp(self.from.blur_px, to.blur_px, k),
        }
    }
}
