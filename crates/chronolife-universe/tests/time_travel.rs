//! Integration tests for the `chronolife-universe` public API.
//!
//! These exercise behavior that spans several modules: history navigation
//! combined with edits, plain-text and saved-record round trips, and the
//! clipboard and stamping operations under both boundary modes.

#![allow(
    clippy::unwrap_used,
    clippy::arithmetic_side_effects,
    clippy::missing_panics_doc,
    clippy::indexing_slicing
)]

use chronolife_types::{BoundaryMode, Region};
use chronolife_universe::{Pattern, SAVED_FORMAT, SavedUniverse, Universe, UniverseError};

const GLIDER: &str = ".O.\n..O\nOOO";

fn seeded(width: usize, height: usize, boundary: BoundaryMode, seed: u64) -> Universe {
    let mut universe = Universe::new(width, height, boundary).unwrap();
    universe.randomize(Some(seed));
    universe
}

// =============================================================================
// Determinism and navigation
// =============================================================================

#[test]
fn goto_matches_repeated_steps_for_both_boundaries() {
    for boundary in [BoundaryMode::Finite, BoundaryMode::Toroidal] {
        let mut stepped = seeded(12, 9, boundary, 2024);
        let mut jumped = stepped.clone();

        for _ in 0..10 {
            stepped.calculate_next_generation();
        }
        jumped.goto(jumped.current() + 10);

        assert_eq!(jumped.board(), stepped.board(), "{boundary}");
        assert_eq!(jumped.total_generations(), stepped.total_generations());
        for index in 0..stepped.total_generations() {
            assert_eq!(jumped.generation(index), stepped.generation(index));
        }
    }
}

#[test]
fn rewinding_never_changes_recorded_generations() {
    let mut universe = seeded(10, 10, BoundaryMode::Toroidal, 8);
    universe.goto(6);
    let snapshot: Vec<_> = universe.history().iter().cloned().collect();

    universe.goto(2);
    universe.step_back();
    universe.step_forward();
    universe.goto(6);

    let after: Vec<_> = universe.history().iter().cloned().collect();
    assert_eq!(snapshot, after);
}

#[test]
fn glider_returns_to_shape_on_torus() {
    let mut universe = Universe::new(8, 8, BoundaryMode::Toroidal).unwrap();
    universe.stamp(&Pattern::parse_block(GLIDER).unwrap(), 0, 0);
    let start = universe.board().clone();

    // A glider moves one cell diagonally every 4 generations, so 32 steps
    // on an 8x8 torus brings it home.
    universe.goto(32);
    assert_eq!(universe.board(), &start);
    assert_eq!(universe.total_living(), 5);
}

#[test]
fn glider_dies_against_finite_corner() {
    let mut universe = Universe::new(6, 6, BoundaryMode::Finite).unwrap();
    universe.stamp(&Pattern::parse_block(GLIDER).unwrap(), 0, 0);
    universe.goto(40);
    // The glider collapses into a block in the corner.
    assert_eq!(universe.total_living(), 4);
}

// =============================================================================
// Editing the present
// =============================================================================

#[test]
fn edit_in_past_then_goto_recomputes_from_edit() {
    let mut universe = seeded(10, 10, BoundaryMode::Finite, 77);
    universe.goto(5);
    universe.goto(2);

    let was_alive = universe.get(4, 4).unwrap();
    universe.set(4, 4, !was_alive);
    assert_eq!(universe.total_generations(), 3);

    let mut expected = Universe::from_board(universe.board().clone(), BoundaryMode::Finite);
    for _ in 0..3 {
        expected.calculate_next_generation();
    }
    universe.goto(5);
    assert_eq!(universe.board(), expected.board());
}

#[test]
fn click_cell_from_past_edits_newest_generation() {
    let mut universe = seeded(6, 6, BoundaryMode::Finite, 9);
    universe.goto(3);
    let newest_before = universe.board().clone();
    universe.goto(0);

    let toggled = universe.click_cell(1, 1).unwrap();
    assert_eq!(universe.current(), 3);
    assert_eq!(universe.total_generations(), 4);
    assert_eq!(newest_before.get(1, 1), Some(!toggled));
}

// =============================================================================
// Plain-text codec
// =============================================================================

#[test]
fn plain_text_round_trip_restores_board_and_header() {
    let original = seeded(7, 5, BoundaryMode::Finite, 31);
    let text = original.save_to_plain_text("Soup", "random soup\nseed 31");

    let mut loaded = Universe::new(1, 1, BoundaryMode::Finite).unwrap();
    let (name, description) = loaded.load_from_str(&text, false).unwrap();

    assert_eq!(name, "Soup");
    assert_eq!(description, "random soup seed 31");
    assert_eq!(loaded.board(), original.board());
    assert_eq!(loaded.total_generations(), 1);

    let resaved = loaded.save_to_plain_text(&name, &description);
    assert_eq!(resaved, text);
}

#[test]
fn malformed_load_leaves_universe_untouched() {
    let mut universe = seeded(5, 5, BoundaryMode::Finite, 4);
    universe.goto(2);
    let before = universe.clone();

    let empty: [&str; 0] = [];
    assert!(matches!(
        universe.load_from_file(&empty, false),
        Err(UniverseError::MalformedFile { .. })
    ));
    assert!(universe.load_from_file(&["!Name: header only"], true).is_err());
    assert_eq!(universe, before);
}

#[test]
fn import_overlays_without_resizing() {
    let mut universe = Universe::new(4, 4, BoundaryMode::Finite).unwrap();
    universe.set(3, 3, true);
    universe.set(0, 0, true);
    universe.calculate_next_generation();
    universe.goto(0);

    // Wider and taller than the board; the overhang is dropped.
    let lines = ["!Name: patch", ".O....", "O.....", "......", "......", "OOOOOO"];
    let (name, _) = universe.load_from_file(&lines, true).unwrap();

    assert_eq!(name, "patch");
    assert_eq!((universe.width(), universe.height()), (4, 4));
    assert!(!universe.get(0, 0).unwrap());
    assert!(universe.get(1, 0).unwrap());
    assert!(universe.get(0, 1).unwrap());
    assert!(!universe.get(3, 3).unwrap());
    assert_eq!(universe.total_generations(), 1, "changed import drops future");
}

#[test]
fn full_load_replaces_dimensions_and_history() {
    let mut universe = seeded(10, 10, BoundaryMode::Toroidal, 1);
    universe.goto(4);
    universe.load_from_str("OO.\nOO.", false).unwrap();
    assert_eq!((universe.width(), universe.height()), (3, 2));
    assert_eq!(universe.total_generations(), 1);
    assert_eq!(universe.total_living(), 4);
    assert!(universe.is_toroidal());
}

#[test]
fn cells_text_has_grid_only() {
    let (universe, name, _) =
        Universe::from_plain_text("!Name: dot\n!\n..\n.O\n", BoundaryMode::Finite).unwrap();
    assert_eq!(name, "dot");
    assert_eq!(universe.to_cells_text(), "..\n.O");
}

// =============================================================================
// Clipboard and stamping
// =============================================================================

#[test]
fn copy_then_paste_in_place_is_identity() {
    let mut universe = seeded(9, 9, BoundaryMode::Finite, 12);
    let before = universe.board().clone();
    let region = Region::new(2, 3, 4, 5);

    let pattern = universe.copy_region(region).unwrap();
    universe.paste(&pattern, region.x, region.y);
    assert_eq!(universe.board(), &before);
}

#[test]
fn cut_clears_region_and_returns_content() {
    let mut universe = seeded(9, 9, BoundaryMode::Finite, 13);
    let region = Region::new(1, 1, 3, 3);
    let copied = universe.copy_region(region).unwrap();

    let cut = universe.cut_region(region).unwrap();
    assert_eq!(cut, copied);
    for (dx, dy) in region.offsets() {
        let x = region.x + i64::try_from(dx).unwrap();
        let y = region.y + i64::try_from(dy).unwrap();
        assert!(!universe.get(x, y).unwrap());
    }
}

#[test]
fn empty_region_is_rejected() {
    let universe = Universe::new(4, 4, BoundaryMode::Finite).unwrap();
    assert!(matches!(
        universe.copy_region(Region::new(0, 0, 0, 2)),
        Err(UniverseError::InvalidDimension { .. })
    ));
}

#[test]
fn copy_past_finite_edge_reads_dead() {
    let mut universe = Universe::new(3, 3, BoundaryMode::Finite).unwrap();
    universe.set(2, 2, true);
    let pattern = universe.copy_region(Region::new(2, 2, 2, 2)).unwrap();
    assert_eq!(pattern.to_block(), "O.\n..");
}

#[test]
fn stamp_past_edge_culls_or_wraps() {
    let glider = Pattern::parse_block(GLIDER).unwrap();

    let mut flat = Universe::new(5, 5, BoundaryMode::Finite).unwrap();
    flat.stamp(&glider, 3, 3);
    // Only the top cell lands on the board; the rest hang off the edges.
    assert_eq!(flat.total_living(), 1);
    assert!(flat.get(4, 3).unwrap());

    let mut ring = Universe::new(5, 5, BoundaryMode::Toroidal).unwrap();
    ring.stamp(&glider, 3, 3);
    assert_eq!(ring.total_living(), 5);
    assert!(ring.get(4, 3).unwrap());
    assert!(ring.get(0, 4).unwrap());
    assert!(ring.get(3, 0).unwrap());
    assert!(ring.get(4, 0).unwrap());
    assert!(ring.get(0, 0).unwrap());
}

#[test]
fn stamp_leaves_dead_pattern_cells_alone() {
    let mut universe = Universe::new(3, 3, BoundaryMode::Finite).unwrap();
    for x in 0..3 {
        for y in 0..3 {
            universe.set(x, y, true);
        }
    }
    universe.stamp(&Pattern::parse_block(GLIDER).unwrap(), 0, 0);
    assert_eq!(universe.total_living(), 9);

    universe.paste(&Pattern::parse_block(GLIDER).unwrap(), 0, 0);
    assert_eq!(universe.total_living(), 5);
}

// =============================================================================
// Saved records
// =============================================================================

#[test]
fn saved_record_with_history_restores_cursor() {
    let mut universe = seeded(6, 4, BoundaryMode::Toroidal, 55);
    universe.goto(5);
    universe.goto(3);

    let saved = universe.to_saved("run", "with history", true);
    assert_eq!(saved.format, SAVED_FORMAT);
    assert_eq!(saved.generations.len(), 6);
    assert_eq!(saved.current, 3);

    let json = saved.to_json().unwrap();
    let restored = Universe::from_saved(&SavedUniverse::from_json(&json).unwrap()).unwrap();
    assert_eq!(restored, universe);
}

#[test]
fn saved_record_without_history_keeps_viewed_board() {
    let mut universe = seeded(6, 4, BoundaryMode::Finite, 56);
    universe.goto(4);
    universe.goto(2);

    let saved = universe.to_saved("run", "", false);
    assert_eq!(saved.generations.len(), 1);
    assert_eq!(saved.current, 0);

    let restored = Universe::from_saved(&saved).unwrap();
    assert_eq!(restored.board(), universe.board());
    assert_eq!(restored.total_generations(), 1);
    assert!(!restored.is_toroidal());
}

#[test]
fn saved_record_with_bad_cursor_is_malformed() {
    let universe = seeded(3, 3, BoundaryMode::Finite, 57);
    let mut saved = universe.to_saved("", "", true);
    saved.current = 4;
    assert!(matches!(
        Universe::from_saved(&saved),
        Err(UniverseError::MalformedFile { .. })
    ));

    saved.current = 0;
    saved.generations.clear();
    assert!(Universe::from_saved(&saved).is_err());
}

#[test]
fn saved_record_with_huge_width_is_malformed() {
    let universe = seeded(1, 1, BoundaryMode::Finite, 58);
    let mut saved = universe.to_saved("", "", true);
    saved.width = 1usize << 62;
    saved.generations = vec![vec![String::from("O")]];
    assert!(matches!(
        Universe::from_saved(&saved),
        Err(UniverseError::MalformedFile { .. })
    ));
}

#[test]
fn description_that_looks_like_a_name_survives_reload() {
    let mut universe = seeded(3, 3, BoundaryMode::Finite, 59);
    let text = universe.save_to_plain_text("Real", "Name: trick");
    let (name, description) = universe.load_from_str(&text, false).unwrap();
    assert_eq!(name, "Real");
    assert_eq!(description, "Name: trick");
}
