// grid.rs - Fixed-size cellular automaton grid
//
// Cells are stored row-major in flat vectors. `snapshot` is refreshed at the
// start of every step so neighbor counts always read the previous generation.

use rand::Rng;
use tracing::{debug, info, trace};

use crate::cell::CellState;
use crate::color::{Rgb, cell_color};
use crate::error::GridError;
use crate::patterns::Pattern;
use crate::rules::{AutomatonType, Rule};

/// Cell counts by state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Population {
    pub empty: usize,
    pub alive: usize,
    pub dead: usize,
}

/// A non-empty cell with its display color, as handed to a renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderCell {
    pub row: usize,
    pub col: usize,
    pub state: CellState,
    pub color: Rgb,
}

#[derive(Debug, Clone)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<CellState>,
    snapshot: Vec<CellState>,
    initial: Vec<CellState>,
    ages: Vec<u32>,
    max_age: u32,
    generation: u32,
    automaton: AutomatonType,
    rule: Rule,
}

impl Grid {
    /// Creates an empty `width` x `height` grid running Conway's rules.
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        let size = cell_count(width, height)?;
        let automaton = AutomatonType::default();
        info!(width, height, "grid initialized");
        Ok(Self {
            width,
            height,
            cells: vec![CellState::Empty; size],
            snapshot: vec![CellState::Empty; size],
            initial: vec![CellState::Empty; size],
            ages: vec![0; size],
            max_age: 0,
            generation: 0,
            automaton,
            rule: automaton.rule(),
        })
    }

    /// Reallocates every buffer at the new size and discards all state,
    /// including the active automaton type. On error the grid is unchanged.
    pub fn initialize(&mut self, width: usize, height: usize) -> Result<(), GridError> {
        *self = Self::new(width, height)?;
        Ok(())
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }

    pub fn max_age(&self) -> u32 {
        self.max_age
    }

    pub fn automaton_type(&self) -> AutomatonType {
        self.automaton
    }

    /// Switches the rule set. Cells, ages and the generation counter are kept.
    pub fn set_automaton_type(&mut self, automaton: AutomatonType) {
        if automaton != self.automaton {
            info!(from = ?self.automaton, to = ?automaton, "automaton type changed");
        }
        self.automaton = automaton;
        self.rule = automaton.rule();
    }

    fn index(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.height && col < self.width).then(|| row * self.width + col)
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<CellState> {
        self.index(row, col).map(|i| self.cells[i])
    }

    /// Number of times the cell has been born since the last clear or reset.
    pub fn age(&self, row: usize, col: usize) -> Option<u32> {
        self.index(row, col).map(|i| self.ages[i])
    }

    /// Cycles a cell Empty -> Alive -> Dead -> Alive. Out-of-bounds
    /// coordinates are ignored.
    pub fn toggle_cell(&mut self, row: usize, col: usize) {
        if let Some(i) = self.index(row, col) {
            self.cells[i] = self.cells[i].toggled();
        }
    }

    /// Toggles the cell under pixel `(x, y)` of a `render_width` x
    /// `render_height` surface the grid is stretched over. Points outside the
    /// surface, and degenerate surfaces, are ignored.
    pub fn toggle_cell_at_pixel(&mut self, x: f32, y: f32, render_width: f32, render_height: f32) {
        if !(render_width > 0.0 && render_height > 0.0) {
            return;
        }
        let tile_width = render_width / self.width as f32;
        let tile_height = render_height / self.height as f32;
        let row = (y / tile_height).floor();
        let col = (x / tile_width).floor();
        if !(row.is_finite() && col.is_finite()) || row < 0.0 || col < 0.0 {
            return;
        }
        self.toggle_cell(row as usize, col as usize);
    }

    /// Live cells among the up to eight neighbors in the previous generation.
    /// Neighbors past the edge don't count; there is no wraparound.
    fn live_neighbors(&self, row: usize, col: usize) -> u8 {
        let rows = row.saturating_sub(1)..=(row + 1).min(self.height - 1);
        let cols = col.saturating_sub(1)..=(col + 1).min(self.width - 1);
        let mut count = 0;
        for r in rows {
            for c in cols.clone() {
                if (r, c) != (row, col) && self.snapshot[r * self.width + c].is_alive() {
                    count += 1;
                }
            }
        }
        count
    }

    /// Advances one generation.
    ///
    /// Cells are visited top-to-bottom, left-to-right; for each cell the birth
    /// check runs before the death check, both against the neighbor count of
    /// the previous generation.
    pub fn step(&mut self) {
        self.snapshot.copy_from_slice(&self.cells);
        if self.generation == 0 {
            self.initial.copy_from_slice(&self.cells);
        }

        for row in 0..self.height {
            for col in 0..self.width {
                let count = self.live_neighbors(row, col);
                let i = row * self.width + col;

                if self.rule.births(count) && !self.cells[i].is_alive() {
                    self.cells[i] = CellState::Alive;
                    self.ages[i] += 1;
                    self.max_age = self.max_age.max(self.ages[i]);
                }
                if self.rule.dies(count) && self.cells[i].is_alive() {
                    self.cells[i] = CellState::Dead;
                }
            }
        }

        self.generation += 1;
        trace!(generation = self.generation, "step");
    }

    fn clear_ages(&mut self) {
        self.ages.fill(0);
        self.max_age = 0;
    }

    /// Empties the grid and saves the empty layout as the reset point.
    pub fn clear(&mut self) {
        self.cells.fill(CellState::Empty);
        self.clear_ages();
        self.initial.copy_from_slice(&self.cells);
        self.generation = 0;
        info!("grid cleared");
    }

    /// Restores the layout saved by the last `clear` or by the first step
    /// after a reset. The saved layout itself is kept, so this can repeat.
    pub fn reset(&mut self) {
        self.cells.copy_from_slice(&self.initial);
        self.clear_ages();
        self.generation = 0;
        info!("grid reset");
    }

    /// Clears the grid, then makes each cell alive with the active type's
    /// density.
    pub fn randomize(&mut self) {
        self.randomize_with(&mut rand::thread_rng());
    }

    /// Same as [`Grid::randomize`] with a caller-supplied generator.
    ///
    /// The random layout is not saved as the reset point until the next
    /// step: a `reset` right after this brings back the empty grid.
    pub fn randomize_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.clear();
        let density = self.rule.density_percent;
        for cell in &mut self.cells {
            *cell = if rng.gen_range(0..100) < density {
                CellState::Alive
            } else {
                CellState::Empty
            };
        }
        info!(density, automaton = ?self.automaton, "grid randomized");
    }

    /// Clears the grid and draws `pattern` centered on it. Cells that don't
    /// fit are dropped. Like `randomize`, the layout becomes the reset point
    /// at the next step.
    pub fn apply_pattern(&mut self, pattern: &Pattern) {
        self.clear();
        let (pattern_height, pattern_width) = pattern.extent();
        let top = self.height.saturating_sub(pattern_height) / 2;
        let left = self.width.saturating_sub(pattern_width) / 2;
        for &(row, col) in pattern.cells {
            if let Some(i) = self.index(top + row, left + col) {
                self.cells[i] = CellState::Alive;
            }
        }
        debug!(pattern = pattern.name, "pattern applied");
    }

    pub fn population(&self) -> Population {
        self.cells.iter().fold(Population::default(), |mut p, cell| {
            match cell {
                CellState::Empty => p.empty += 1,
                CellState::Alive => p.alive += 1,
                CellState::Dead => p.dead += 1,
            }
            p
        })
    }

    /// Display color of a cell; `None` for empty or out-of-bounds cells.
    pub fn render_color(&self, row: usize, col: usize) -> Option<Rgb> {
        let i = self.index(row, col)?;
        cell_color(self.cells[i], self.ages[i], self.max_age)
    }

    /// Every non-empty cell with its display color, in row-major order.
    pub fn render_cells(&self) -> impl Iterator<Item = RenderCell> + '_ {
        self.cells.iter().enumerate().filter_map(move |(i, &state)| {
            let color = cell_color(state, self.ages[i], self.max_age)?;
            Some(RenderCell {
                row: i / self.width,
                col: i % self.width,
                state,
                color,
            })
        })
    }
}

/// `width * height`, rejecting empty grids and sizes that overflow `usize`.
fn cell_count(width: usize, height: usize) -> Result<usize, GridError> {
    width
        .checked_mul(height)
        .filter(|&size| size > 0)
        .ok_or(GridError::InvalidDimensions { width, height })
}
