// rules.rs - Birth/death rules for the three automaton types

/// Birth and death predicates over a Moore-neighborhood live count, plus the
/// chance (in percent) that a cell starts alive when the grid is randomized.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    birth: fn(u8) -> bool,
    death: fn(u8) -> bool,
    pub density_percent: u32,
}

impl Rule {
    /// Whether a non-alive cell with `count` live neighbors becomes alive.
    pub fn births(&self, count: u8) -> bool {
        (self.birth)(count)
    }

    /// Whether an alive cell with `count` live neighbors dies.
    pub fn dies(&self, count: u8) -> bool {
        (self.death)(count)
    }
}

const CONWAY: Rule = Rule {
    birth: |count| count == 3,
    death: |count| count < 2 || count > 3,
    density_percent: 12,
};

const MAZE: Rule = Rule {
    birth: |count| count == 3,
    death: |count| count == 0 || count > 5,
    density_percent: 12,
};

const CAVE: Rule = Rule {
    birth: |count| count >= 5,
    death: |count| count < 4,
    density_percent: 52,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AutomatonType {
    #[default]
    Conway,
    Maze,
    Cave,
}

impl AutomatonType {
    /// Selector order.
    pub const ALL: [AutomatonType; 3] = [AutomatonType::Conway, AutomatonType::Maze, AutomatonType::Cave];

    pub fn rule(self) -> Rule {
        match self {
            AutomatonType::Conway => CONWAY,
            AutomatonType::Maze => MAZE,
            AutomatonType::Cave => CAVE,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            AutomatonType::Conway => "Conway's Game of Life",
            AutomatonType::Maze => "Maze",
            AutomatonType::Cave => "Cave",
        }
    }
}
