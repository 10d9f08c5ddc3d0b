//! Vertical merge phase.

use super::boxes::ColliderBox;
use super::grid::GridSpec;

/// Result of the vertical merge phase.
///
/// The merge itself is pure: row boxes folded into a taller collider are
/// returned in `absorbed` rather than destroyed in place, so a caller that
/// materialized them as engine objects can release those handles afterwards.
#[derive(Clone, Debug, Default)]
pub struct ColumnMerge {
  /// Final collider rectangles, in finalization order.
  pub colliders: Vec<ColliderBox>,
  /// Row boxes that were folded into a taller collider.
  pub absorbed: Vec<ColliderBox>,
}

/// Stacks same-width row boxes into taller rectangles.
///
/// Structurally the vertical mirror of [`merge_rows`](super::merge_rows):
/// the first pending box seeds the accumulator, candidates are scanned in
/// order with the slot above tested before the slot below, and the first
/// stacked match is absorbed before the scan restarts. A full clean scan
/// finalizes the seed.
///
/// Width equality is exact, not ε-tolerant: row-box widths are whole
/// multiples of the cell width by construction, so exact comparison is sound
/// and keeps columns of different spans from gluing together.
pub fn merge_columns(mut pending: Vec<ColliderBox>, grid: &GridSpec) -> ColumnMerge {
  let mut out = ColumnMerge::default();

  while !pending.is_empty() {
    let mut seed = pending.remove(0);

    'grow: loop {
      for i in 0..pending.len() {
        let candidate = pending[i];
        if candidate.size.x != seed.size.x || !grid.within(candidate.center.x, seed.center.x) {
          continue;
        }
        if grid.within(candidate.center.y, seed.above_slot(candidate.size.y)) {
          pending.remove(i);
          seed.absorb_above(candidate.size.y);
          out.absorbed.push(candidate);
          continue 'grow;
        }
        if grid.within(candidate.center.y, seed.below_slot(candidate.size.y)) {
          pending.remove(i);
          seed.absorb_below(candidate.size.y);
          out.absorbed.push(candidate);
          continue 'grow;
        }
      }
      break;
    }

    out.colliders.push(seed);
  }

  out
}
