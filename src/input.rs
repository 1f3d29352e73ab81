use crate::constants::POINTER_SMOOTHING;

/// Pointer offset from viewport center.
///
/// `mouse_*` is the raw tracked offset written by the event handler;
/// `current_*` lags behind it and is advanced once per frame.
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
    pub mouse_x: f64,
    pub mouse_y: f64,
    pub current_x: f64,
    pub current_y: f64,
}

impl PointerState {
    /// Record the latest pointer position. Only stores values; never does
    /// frame work.
    #[inline]
    pub fn track(&mut self, client_x: f64, client_y: f64, viewport_w: f64, viewport_h: f64) {
        let [x, y] = viewport_offset(client_x, client_y, viewport_w, viewport_h);
        self.mouse_x = x;
        self.mouse_y = y;
    }

    /// Advance the smoothed offset one frame toward the tracked one.
    #[inline]
    pub fn smooth(&mut self) {
        self.current_x = smooth_toward(self.current_x, self.mouse_x, POINTER_SMOOTHING);
        self.current_y = smooth_toward(self.current_y, self.mouse_y, POINTER_SMOOTHING);
    }
}

/// Map a client position to `[-1, 1]` around the viewport center. Positions
/// outside the viewport map outside that range; nothing is clamped.
#[inline]
pub fn viewport_offset(
    client_x: f64,
    client_y: f64,
    viewport_w: f64,
    viewport_h: f64,
) -> [f64; 2] {
    [
        (client_x / viewport_w - 0.5) * 2.0,
        (client_y / viewport_h - 0.5) * 2.0,
    ]
}

#[inline]
pub fn smooth_toward(current: f64, target: f64, alpha: f64) -> f64 {
    current + (target - current) * alpha
}
