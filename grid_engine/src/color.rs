// color.rs - Render colors derived from cell state and age
//
// Kept apart from the grid so the engine never depends on a renderer.

use crate::cell::CellState;

/// Plain 8-bit RGB triple. Shells convert it into their own color type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

pub const ALIVE_COLOR: Rgb = Rgb::new(220, 20, 60); // crimson

/// Display color for a cell, or `None` for an empty cell.
///
/// Dead cells fade from light blue (never or rarely reborn) to black (reborn
/// as often as the busiest cell on the grid). `age` is expected to be at
/// most `max_age`.
pub fn cell_color(state: CellState, age: u32, max_age: u32) -> Option<Rgb> {
    match state {
        CellState::Empty => None,
        CellState::Alive => Some(ALIVE_COLOR),
        CellState::Dead => {
            let coef = if max_age == 0 {
                255
            } else {
                let scaled = (1.0 - age as f32 / max_age as f32) * 255.0;
                scaled.clamp(0.0, 255.0) as u8
            };
            Some(Rgb::new(coef / 2, coef / 2, coef))
        }
    }
}
