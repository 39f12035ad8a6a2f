//! Configuration constants for the headless renderer and the animated scene
//!
//! Everything tunable lives here, outside the per-frame hot path: render
//! resolution, frame pacing, spinner limits, and encoding settings.

/// Width of the offscreen render target in pixels
pub const RENDER_WIDTH: u32 = 800;

/// Height of the offscreen render target in pixels
pub const RENDER_HEIGHT: u32 = 600;

/// Target frames per second for the Bevy render loop
pub const TARGET_FPS: f64 = 60.0;

/// Number of pre-roll frames to skip before starting output
/// This allows the scene to fully load and stabilize
pub const PRE_ROLL_FRAMES: u32 = 30;

/// Spinner settings
pub mod spinner {
    /// Ceiling for the configured angular speed (degrees per second).
    /// Speeds are clamped to [0, SPEED_MAX] at construction time.
    pub const SPEED_MAX: f32 = 20.0;

    /// Angular speed applied to the demo cube (degrees per second)
    pub const DEFAULT_SPEED: f32 = 5.0;
}

/// Performance monitoring settings
pub mod performance {
    /// Interval for printing performance stats (seconds)
    pub const STATS_PRINT_INTERVAL: f64 = 2.0;

    /// Number of frame timing samples to keep for averaging
    pub const FRAME_TIMING_SAMPLES: usize = 60;
}

/// Image compression settings
pub mod compression {
    /// JPEG quality level (0-100, higher = better quality but larger size)
    pub const JPEG_QUALITY: u8 = 85;
}
