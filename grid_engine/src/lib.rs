// lib.rs - Grid engine for the cellular automaton simulation
//
// Owns the cell grid, applies the birth/death rules of the active automaton
// type one generation at a time, and tracks the per-cell age statistics the
// renderer turns into a color gradient.

pub mod cell;
pub mod color;
pub mod error;
pub mod grid;
pub mod patterns;
pub mod rules;

pub use cell::CellState;
pub use color::{Rgb, cell_color};
pub use error::GridError;
pub use grid::{Grid, Population, RenderCell};
pub use patterns::{PATTERNS, Pattern};
pub use rules::{AutomatonType, Rule};
