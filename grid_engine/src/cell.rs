// cell.rs - Per-cell state

/// State of a single grid cell.
///
/// `Dead` marks a cell that was alive and died; it is only a render hint and
/// the cell can be born again on a later step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellState {
    #[default]
    Empty,
    Alive,
    Dead,
}

impl CellState {
    pub fn is_alive(self) -> bool {
        self == CellState::Alive
    }

    /// Next state in the manual toggle cycle: Empty -> Alive -> Dead -> Alive.
    pub fn toggled(self) -> Self {
        match self {
            CellState::Empty => CellState::Alive,
            CellState::Alive => CellState::Dead,
            CellState::Dead => CellState::Alive,
        }
    }
}
