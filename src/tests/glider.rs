use crate::prelude::*;

const GLIDER: [(i64, i64); 5] = [(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)];

fn glider_positions() -> Vec<Pos> {
    GLIDER.iter().map(|&p| Pos::from(p)).collect()
}

/// Recounts the cell states the slow way and checks them against the grid's
/// stats snapshot.
fn assert_stats_consistent(grid: &DenseGrid) {
    let mut recount = GridStats::default();
    for pos in grid.size().positions() {
        recount.record(grid.get(pos));
    }
    assert_eq!(recount, grid.stats());
    assert_eq!(grid.size().count(), grid.stats().total());
}

#[test]
fn test_glider_translates_diagonally() {
    // After 4 generations on a sufficiently large torus, the glider
    // reproduces itself translated by (+1, +1).
    let mut grid = DenseGrid::new(10, 10).unwrap();
    grid.set_positions(&glider_positions(), CellState::Alive);

    for _ in 0..4 {
        grid = grid.next();
    }

    let expected = glider_positions()
        .into_iter()
        .map(|pos| pos + Pos::new(1, 1))
        .collect::<Vec<_>>();
    assert_eq!(expected, grid.living());
}

#[test]
fn test_stats_invariant_over_long_run() {
    let mut grid = DenseGrid::from_fn(8, 8, DenseGrid::glider_initializer).unwrap();
    assert_stats_consistent(&grid);
    for _ in 0..20 {
        grid = grid.next();
        assert_stats_consistent(&grid);
    }
    // A glider on a torus never dies.
    assert!(!grid.living().is_empty());
}

#[test]
fn test_engine_drives_glider() {
    let mut engine = Engine::new(10, 10).unwrap();
    let mut grid = engine.grid().clone();
    grid.set_positions(&glider_positions(), CellState::Alive);
    engine.load(grid, Some("glider".to_owned()), Some(0));
    assert_eq!(Some("glider"), engine.title());

    for _ in 0..4 {
        engine.step();
    }
    let expected = glider_positions()
        .into_iter()
        .map(|pos| pos + Pos::new(1, 1))
        .collect::<Vec<_>>();
    assert_eq!(expected, engine.grid().living());
    assert_stats_consistent(engine.grid());
}
