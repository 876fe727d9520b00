use crate::prelude::*;

/// Restoring a catalog record into the engine and saving it back preserves
/// the living-cell configuration.
#[test]
fn test_catalog_to_engine_round_trip() {
    let json = r#"[
        { "title": "blinker", "contents": [[4, 3], [4, 4], [4, 5]] },
        { "title": "broken", "contents": [[4, 3], [7], [4, 5]] }
    ]"#;
    let catalog = crate::io::parse_catalog(json).unwrap();

    let mut engine = Engine::default();
    let restored = catalog[0].to_grid(engine.size()).unwrap();
    let original_living = restored.living();
    engine.save_configuration(restored, 0, catalog[0].title.clone());

    let saved = GridData::from_grid("blinker", engine.grid());
    assert_eq!(original_living, saved.to_positions());

    // Malformed pairs inside a record are dropped without killing the rest
    // of the batch.
    assert_eq!(
        vec![Pos::new(4, 3), Pos::new(4, 5)],
        catalog[1].to_positions(),
    );
}

/// A manual toggle-and-load edit round-trips through the engine the same way
/// the documented edit collaborator performs it.
#[test]
fn test_manual_toggle_path() {
    let mut engine = Engine::new(6, 6).unwrap();
    let mut grid = engine.grid().clone();
    let pos = Pos::new(2, 3);
    let toggled = grid.get(pos).toggle();
    grid.set(pos, toggled);
    engine.load(grid, None, None);
    assert!(engine.grid().is_alive(pos));

    // Toggling again through the same path removes it.
    let mut grid = engine.grid().clone();
    let toggled = grid.get(pos).toggle();
    grid.set(pos, toggled);
    engine.load(grid, None, None);
    assert!(!engine.grid().is_alive(pos));
}

/// The cycle detector recognizes orbits that pass through several distinct
/// configurations, not just immediate stabilization.
#[test]
fn test_generations_detects_long_orbit() {
    // A glider shifts by (+1, +1) every 4 generations, so on an 8x8 torus
    // it returns to its starting configuration after exactly 32. The cycle
    // detector has to walk the whole history to spot it.
    let grid = DenseGrid::from_fn(8, 8, DenseGrid::glider_initializer).unwrap();
    let produced = Generations::new(grid).take(100).count();
    assert_eq!(32, produced);
}
