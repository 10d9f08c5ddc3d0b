//! Integration tests for the two-phase merge pipeline.
//!
//! Covers the fixed scenarios (single row, L-shape, isolated tile, stacked
//! rows) plus randomized property checks: area preservation, partition
//! coverage, non-overlap, and lattice alignment.

use std::collections::HashSet;

use bevy::math::Vec2;
use bevy_tile_colliders::{ColliderBox, GridSpec, merge_rows, merge_tiles};
use rand::prelude::*;

fn tiles(coords: &[(f32, f32)]) -> Vec<Vec2> {
  coords.iter().map(|&(x, y)| Vec2::new(x, y)).collect()
}

/// Cell centers covered by a box, assuming the default unit grid.
fn covered_cells(b: &ColliderBox) -> Vec<(i32, i32)> {
  let w = b.size.x.round() as i32;
  let h = b.size.y.round() as i32;
  let min = b.min();
  let mut cells = Vec::new();
  for dy in 0..h {
    for dx in 0..w {
      cells.push((
        (min.x + 0.5 + dx as f32).round() as i32,
        (min.y + 0.5 + dy as f32).round() as i32,
      ));
    }
  }
  cells
}

#[test]
fn three_tile_row_produces_one_box() {
  let out = merge_tiles(tiles(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)]), &GridSpec::default());
  assert_eq!(out.colliders.len(), 1);
  assert_eq!(out.colliders[0].center, Vec2::new(1.0, 0.0));
  assert_eq!(out.colliders[0].size, Vec2::new(3.0, 1.0));
}

#[test]
fn l_shape_produces_two_boxes() {
  // The row phase produces a 2x1 box and a 1x1 box; the column phase cannot
  // stack them because their widths differ.
  let out = merge_tiles(tiles(&[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)]), &GridSpec::default());
  assert_eq!(out.colliders.len(), 2);

  let wide = out.colliders.iter().find(|b| b.size.x == 2.0).unwrap();
  assert_eq!(wide.center, Vec2::new(0.5, 0.0));
  assert_eq!(wide.size, Vec2::new(2.0, 1.0));

  let unit = out.colliders.iter().find(|b| b.size.x == 1.0).unwrap();
  assert_eq!(unit.center, Vec2::new(0.0, 1.0));
  assert_eq!(unit.size, Vec2::ONE);
}

#[test]
fn isolated_tile_stays_a_unit_box() {
  let out = merge_tiles(tiles(&[(7.0, -3.0)]), &GridSpec::default());
  assert_eq!(out.colliders.len(), 1);
  assert_eq!(out.colliders[0].center, Vec2::new(7.0, -3.0));
  assert_eq!(out.colliders[0].size, Vec2::ONE);
  assert!(out.absorbed.is_empty());
}

#[test]
fn matching_rows_merge_into_one_tall_box() {
  // Two disjoint 3-tile rows one cell apart combine into a single 3x2 box.
  let out = merge_tiles(
    tiles(&[
      (0.0, 0.0),
      (1.0, 0.0),
      (2.0, 0.0),
      (0.0, 1.0),
      (1.0, 1.0),
      (2.0, 1.0),
    ]),
    &GridSpec::default(),
  );
  assert_eq!(out.colliders.len(), 1);
  assert_eq!(out.colliders[0].center, Vec2::new(1.0, 0.5));
  assert_eq!(out.colliders[0].size, Vec2::new(3.0, 2.0));
  assert_eq!(out.absorbed.len(), 1);
}

#[test]
fn empty_input_is_not_an_error() {
  let out = merge_tiles(Vec::new(), &GridSpec::default());
  assert!(out.colliders.is_empty());
  assert!(out.absorbed.is_empty());
}

#[test]
fn neighbor_within_tolerance_merges() {
  // Offset by 0.9 x tolerance from perfect adjacency: still merges.
  let grid = GridSpec::default();
  let out = merge_tiles(tiles(&[(0.0, 0.0), (1.009, 0.0)]), &grid);
  assert_eq!(out.colliders.len(), 1);
  assert_eq!(out.colliders[0].size, Vec2::new(2.0, 1.0));
}

#[test]
fn neighbor_beyond_tolerance_does_not_merge() {
  // Offset by 1.1 x tolerance: fails the adjacency check.
  let grid = GridSpec::default();
  let out = merge_tiles(tiles(&[(0.0, 0.0), (1.011, 0.0)]), &grid);
  assert_eq!(out.colliders.len(), 2);
}

#[test]
fn vertical_tolerance_mirrors_horizontal() {
  let grid = GridSpec::default();
  let merged = merge_tiles(tiles(&[(0.0, 0.0), (0.0, 1.009)]), &grid);
  assert_eq!(merged.colliders.len(), 1);
  let split = merge_tiles(tiles(&[(0.0, 0.0), (0.0, 1.011)]), &grid);
  assert_eq!(split.colliders.len(), 2);
}

#[test]
fn output_shape_depends_on_input_order_but_stays_valid() {
  // A plus shape: the decomposition differs by enumeration order, but both
  // orders cover the same five cells without overlap.
  let plus = [(1.0, 0.0), (0.0, 1.0), (1.0, 1.0), (2.0, 1.0), (1.0, 2.0)];
  let mut reversed = plus;
  reversed.reverse();

  for order in [&plus[..], &reversed[..]] {
    let out = merge_tiles(tiles(order), &GridSpec::default());
    let area: f32 = out.colliders.iter().map(|b| b.area()).sum();
    assert!((area - 5.0).abs() < 1e-4);
    for (i, a) in out.colliders.iter().enumerate() {
      for b in &out.colliders[i + 1..] {
        assert!(!a.overlaps(b), "{a:?} overlaps {b:?}");
      }
    }
  }
}

#[test]
fn deterministic_for_a_fixed_input_order() {
  let field = tiles(&[(1.0, 0.0), (0.0, 1.0), (1.0, 1.0), (2.0, 1.0), (1.0, 2.0)]);
  let first = merge_tiles(field.clone(), &GridSpec::default());
  let second = merge_tiles(field, &GridSpec::default());
  assert_eq!(first.colliders, second.colliders);
  assert_eq!(first.absorbed, second.absorbed);
}

#[test]
fn random_fields_preserve_area_coverage_and_alignment() {
  let grid = GridSpec::default();
  let mut rng = StdRng::seed_from_u64(42);

  for _ in 0..50 {
    // Random distinct cells from a 12x12 field, in random order.
    let mut field: Vec<(i32, i32)> = (0..12)
      .flat_map(|y| (0..12).map(move |x| (x, y)))
      .filter(|_| rng.gen_bool(0.4))
      .collect();
    field.shuffle(&mut rng);

    let input: HashSet<(i32, i32)> = field.iter().copied().collect();
    let positions: Vec<Vec2> = field
      .iter()
      .map(|&(x, y)| Vec2::new(x as f32, y as f32))
      .collect();

    let out = merge_tiles(positions, &grid);

    // Area preservation: total box area equals the tile count.
    let area: f32 = out.colliders.iter().map(|b| b.area()).sum();
    assert!((area - input.len() as f32).abs() < 1e-3);

    // Non-overlap.
    for (i, a) in out.colliders.iter().enumerate() {
      for b in &out.colliders[i + 1..] {
        assert!(!a.overlaps(b), "{a:?} overlaps {b:?}");
      }
    }

    // Partition: every box covers only input cells, and all cells together
    // cover every input tile exactly once.
    let mut seen = HashSet::new();
    for b in &out.colliders {
      for cell in covered_cells(b) {
        assert!(input.contains(&cell), "box {b:?} covers empty cell {cell:?}");
        assert!(seen.insert(cell), "cell {cell:?} covered twice");
      }
    }
    assert_eq!(seen.len(), input.len());

    // Lattice alignment: sizes are whole cells, centers on the half-cell
    // lattice.
    for b in &out.colliders {
      assert!((b.size.x - b.size.x.round()).abs() < 1e-4);
      assert!((b.size.y - b.size.y.round()).abs() < 1e-4);
      assert!((b.center.x * 2.0 - (b.center.x * 2.0).round()).abs() < 1e-4);
      assert!((b.center.y * 2.0 - (b.center.y * 2.0).round()).abs() < 1e-4);
    }
  }
}

#[test]
fn column_phase_accounts_for_every_row_box() {
  let grid = GridSpec::default();
  let mut rng = StdRng::seed_from_u64(7);

  let mut field: Vec<Vec2> = (0..10)
    .flat_map(|y| (0..10).map(move |x| Vec2::new(x as f32, y as f32)))
    .filter(|_| rng.gen_bool(0.5))
    .collect();
  field.shuffle(&mut rng);

  let row_boxes = merge_rows(field, &grid);
  let row_area: f32 = row_boxes.iter().map(|b| b.area()).sum();
  let row_count = row_boxes.len();

  let out = bevy_tile_colliders::merge_columns(row_boxes, &grid);
  assert_eq!(out.colliders.len() + out.absorbed.len(), row_count);

  let final_area: f32 = out.colliders.iter().map(|b| b.area()).sum();
  assert!((final_area - row_area).abs() < 1e-3);
}
