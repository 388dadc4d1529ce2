// config.rs - Display configuration

use std::time::Duration;

// Compile-time defaults
pub const GRID_WIDTH: usize = 200;                    // Cells per row
pub const GRID_HEIGHT: usize = 100;                   // Cells per column
pub const CANVAS_WIDTH: f32 = 1024.0;                 // Drawing surface, logical px
pub const CANVAS_HEIGHT: f32 = 437.0;
pub const DEFAULT_INTERVAL_MS: u64 = 400;             // Tick interval until the slider moves
pub const SPEED_MIN: u32 = 1;
pub const SPEED_MAX: u32 = 3;

/// Tick interval for a speed slider position: 100, 58 or 16 ms.
pub fn interval_for_speed(speed: u32) -> Duration {
    let speed = speed.clamp(SPEED_MIN, SPEED_MAX) as u64;
    Duration::from_millis(142 - speed * 42)
}

#[derive(Debug, Clone, PartialEq)]
pub struct DisplayConfig {
    pub grid_width: usize,
    pub grid_height: usize,
    pub canvas_size: [f32; 2],
    pub window_size: [f32; 2],
    pub initial_interval: Duration,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            grid_width: GRID_WIDTH,
            grid_height: GRID_HEIGHT,
            canvas_size: [CANVAS_WIDTH, CANVAS_HEIGHT],
            window_size: [CANVAS_WIDTH + 24.0, CANVAS_HEIGHT + 120.0],
            initial_interval: Duration::from_millis(DEFAULT_INTERVAL_MS),
        }
    }
}
