//! Two-phase greedy rectangle merging.
//!
//! Reduces a field of uniform, grid-aligned unit tiles to a small set of
//! axis-aligned rectangles covering the same cells. A horizontal pass
//! collapses contiguous tiles within each row into row boxes, then a
//! vertical pass stacks same-width row boxes into taller rectangles.
//!
//! Both passes run once, to completion, over an owned snapshot of their
//! input — there is no incremental re-merge when the tile set changes later.
//! The output rectangles are pairwise non-overlapping and cover exactly the
//! input cells.

mod boxes;
mod columns;
mod grid;
mod rows;

pub use boxes::ColliderBox;
pub use columns::{ColumnMerge, merge_columns};
pub use grid::GridSpec;
pub use rows::merge_rows;

use bevy::math::Vec2;

/// Runs both merge phases over a snapshot of tile positions.
///
/// Equivalent to `merge_columns(merge_rows(tiles, grid), grid)`. An empty
/// snapshot produces an empty result.
pub fn merge_tiles(tiles: Vec<Vec2>, grid: &GridSpec) -> ColumnMerge {
  merge_columns(merge_rows(tiles, grid), grid)
}
