//! Horizontal merge phase.

use bevy::math::Vec2;

use super::boxes::ColliderBox;
use super::grid::GridSpec;

/// Collapses horizontally contiguous tiles into row-spanning boxes.
///
/// Greedy first-match accumulation: the first pending tile seeds a one-cell
/// box, then the remaining tiles are scanned in order. At each candidate the
/// left slot is tested before the right slot; the first tile found adjacent
/// on either side is absorbed and the scan restarts from the front of the
/// (now shorter) pending list. A full scan with no match finalizes the row,
/// and the next pending tile seeds a new one.
///
/// The tie-break is first-match-in-enumeration-order, so branching tile
/// shapes can produce different (equally valid) decompositions under
/// different input orderings. For a fixed input order the output is
/// deterministic.
pub fn merge_rows(mut pending: Vec<Vec2>, grid: &GridSpec) -> Vec<ColliderBox> {
  let mut rows = Vec::new();

  while !pending.is_empty() {
    let mut row = ColliderBox::from_tile(pending.remove(0), grid);

    // Every absorption shrinks the pending set by one tile, so the rescan
    // loop terminates.
    'grow: loop {
      for i in 0..pending.len() {
        let tile = pending[i];
        if !grid.within(tile.y, row.center.y) {
          continue;
        }
        if grid.within(tile.x, row.left_slot(grid)) {
          pending.remove(i);
          row.absorb_left(grid);
          continue 'grow;
        }
        if grid.within(tile.x, row.right_slot(grid)) {
          pending.remove(i);
          row.absorb_right(grid);
          continue 'grow;
        }
      }
      break;
    }

    rows.push(row);
  }

  rows
}
