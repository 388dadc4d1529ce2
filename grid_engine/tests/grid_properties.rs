use grid_engine::{AutomatonType, CellState, Grid};
use proptest::prelude::*;

/// A grid of up to 12x12 with each cell toggled 0, 1 or 2 times
/// (Empty, Alive, Dead).
fn seeded_grid() -> impl Strategy<Value = Grid> {
    (1usize..12, 1usize..12)
        .prop_flat_map(|(w, h)| (Just(w), Just(h), prop::collection::vec(0u8..3, w * h)))
        .prop_map(|(w, h, toggles)| {
            let mut grid = Grid::new(w, h).unwrap();
            for (i, &n) in toggles.iter().enumerate() {
                for _ in 0..n {
                    grid.toggle_cell(i / w, i % w);
                }
            }
            grid
        })
}

fn automaton() -> impl Strategy<Value = AutomatonType> {
    prop::sample::select(AutomatonType::ALL.to_vec())
}

fn states(grid: &Grid) -> Vec<CellState> {
    let mut out = Vec::with_capacity(grid.width() * grid.height());
    for row in 0..grid.height() {
        for col in 0..grid.width() {
            out.push(grid.cell(row, col).unwrap());
        }
    }
    out
}

fn count_alive_around(grid: &Grid, row: usize, col: usize) -> u8 {
    let mut count = 0;
    for dr in -1i64..=1 {
        for dc in -1i64..=1 {
            if dr == 0 && dc == 0 {
                continue;
            }
            let (r, c) = (row as i64 + dr, col as i64 + dc);
            if r < 0 || c < 0 {
                continue;
            }
            if grid.cell(r as usize, c as usize) == Some(CellState::Alive) {
                count += 1;
            }
        }
    }
    count
}

#[test]
fn toggle_three_times_from_empty_is_alive() {
    proptest!(|(w in 1usize..20, h in 1usize..20, r in 0usize..20, c in 0usize..20)| {
        let mut grid = Grid::new(w, h).unwrap();
        for _ in 0..3 {
            grid.toggle_cell(r, c);
        }
        if r < h && c < w {
            prop_assert_eq!(grid.cell(r, c), Some(CellState::Alive));
            prop_assert_eq!(grid.population().alive, 1);
        } else {
            prop_assert_eq!(grid.population().empty, w * h);
        }
    });
}

#[test]
fn clear_then_reset_leaves_grid_empty() {
    proptest!(|(mut grid in seeded_grid(), steps in 0usize..4)| {
        for _ in 0..steps {
            grid.step();
        }
        grid.clear();
        let cleared = states(&grid);
        prop_assert!(cleared.iter().all(|&s| s == CellState::Empty));
        prop_assert_eq!(grid.generation(), 0);
        grid.reset();
        prop_assert_eq!(states(&grid), cleared);
        prop_assert_eq!(grid.generation(), 0);
    });
}

#[test]
fn step_applies_birth_then_death_per_cell() {
    proptest!(|(mut grid in seeded_grid(), kind in automaton())| {
        grid.set_automaton_type(kind);
        let rule = kind.rule();
        let mut expected = Vec::new();
        for row in 0..grid.height() {
            for col in 0..grid.width() {
                let count = count_alive_around(&grid, row, col);
                let mut state = grid.cell(row, col).unwrap();
                if rule.births(count) && state != CellState::Alive {
                    state = CellState::Alive;
                }
                if rule.dies(count) && state == CellState::Alive {
                    state = CellState::Dead;
                }
                expected.push(state);
            }
        }
        grid.step();
        prop_assert_eq!(states(&grid), expected);
        prop_assert_eq!(grid.generation(), 1);
    });
}

#[test]
fn max_age_bounds_every_age() {
    proptest!(|(mut grid in seeded_grid(), kind in automaton(), steps in 1usize..8)| {
        grid.set_automaton_type(kind);
        for _ in 0..steps {
            grid.step();
        }
        let max = grid.max_age();
        for row in 0..grid.height() {
            for col in 0..grid.width() {
                prop_assert!(grid.age(row, col).unwrap() <= max);
            }
        }
        grid.reset();
        prop_assert_eq!(grid.max_age(), 0);
    });
}

#[test]
fn reset_rewinds_to_layout_before_first_step() {
    proptest!(|(mut grid in seeded_grid(), kind in automaton(), steps in 1usize..6)| {
        grid.set_automaton_type(kind);
        let start = states(&grid);
        for _ in 0..steps {
            grid.step();
        }
        grid.reset();
        prop_assert_eq!(states(&grid), start.clone());
        grid.reset();
        prop_assert_eq!(states(&grid), start);
    });
}
