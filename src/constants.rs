/// Render-loop and interaction tuning constants.
///
/// These constants express intended behavior (smoothing rate, depth mapping,
/// activation styling) and keep magic numbers out of the frame code.
// Pointer smoothing: fraction of the remaining gap closed per frame
pub const POINTER_SMOOTHING: f64 = 0.05;

// Full pointer deflection (offset 1.0) maps to this many degrees of rotation
pub const ROTATION_RANGE_DEG: f64 = 180.0;

// Depth-to-effect divisor for ambient scale and opacity
pub const DEPTH_DIVISOR: f64 = 800.0;
pub const AMBIENT_SCALE_BASE: f64 = 1.0;
pub const AMBIENT_OPACITY_BASE: f64 = 0.5;

// Activated tile
pub const ACTIVE_SCALE: f64 = 1.3;
pub const ACTIVE_Z_INDEX: i32 = 1000;
pub const ACTIVE_OPACITY: f64 = 1.0;

// Every other tile while one is activated
pub const DIMMED_SCALE: f64 = 0.7;
pub const DIMMED_Z_INDEX: i32 = 0;
pub const DIMMED_BLUR_PX: f64 = 1.2;
pub const DIMMED_OPACITY: f64 = 0.4;

// Reset transition back to ambient styling after deactivation
pub const RESET_DURATION_SEC: f64 = 0.3;
pub const NEUTRAL_SCALE: f64 = 1.0;

// Intro video fade before the sphere is revealed
pub const INTRO_FADE_MS: i32 = 1500;
