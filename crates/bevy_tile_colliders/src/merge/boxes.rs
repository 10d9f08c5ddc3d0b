//! Rectangular collider accumulator.

use bevy::math::Vec2;

use super::grid::GridSpec;

/// An axis-aligned rectangle covering one or more merged tiles.
///
/// Starts life as a single cell and grows as the merge phases absorb
/// neighbors. Center and size stay on the grid lattice: the size is always a
/// whole number of cells and the center moves in half-cell steps.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColliderBox {
  /// Center of the rectangle in world units.
  pub center: Vec2,
  /// Full extents of the rectangle in world units.
  pub size: Vec2,
}

impl ColliderBox {
  /// Creates a one-cell box centered on a tile position.
  pub fn from_tile(position: Vec2, grid: &GridSpec) -> Self {
    Self {
      center: position,
      size: grid.cell(),
    }
  }

  /// Covered area.
  pub fn area(&self) -> f32 {
    self.size.x * self.size.y
  }

  /// Bottom-left corner.
  pub fn min(&self) -> Vec2 {
    self.center - self.size / 2.0
  }

  /// Top-right corner.
  pub fn max(&self) -> Vec2 {
    self.center + self.size / 2.0
  }

  /// True when the rectangles intersect with positive area. Touching edges
  /// do not count as overlap.
  pub fn overlaps(&self, other: &ColliderBox) -> bool {
    let (amin, amax) = (self.min(), self.max());
    let (bmin, bmax) = (other.min(), other.max());
    amin.x < bmax.x && bmin.x < amax.x && amin.y < bmax.y && bmin.y < amax.y
  }

  /// X coordinate where a left-adjacent tile's center would sit: one half
  /// tile beyond the left edge.
  pub(crate) fn left_slot(&self, grid: &GridSpec) -> f32 {
    self.center.x - self.size.x / 2.0 - grid.tile_width / 2.0
  }

  /// X coordinate where a right-adjacent tile's center would sit.
  pub(crate) fn right_slot(&self, grid: &GridSpec) -> f32 {
    self.center.x + self.size.x / 2.0 + grid.tile_width / 2.0
  }

  /// Y coordinate where the center of a box of height `other_height` would
  /// sit if stacked directly on top.
  pub(crate) fn above_slot(&self, other_height: f32) -> f32 {
    self.center.y + self.size.y / 2.0 + other_height / 2.0
  }

  /// Y coordinate where the center of a box of height `other_height` would
  /// sit if stacked directly underneath.
  pub(crate) fn below_slot(&self, other_height: f32) -> f32 {
    self.center.y - self.size.y / 2.0 - other_height / 2.0
  }

  /// Absorbs one tile on the left: one cell wider, center shifted half a
  /// cell toward it.
  pub(crate) fn absorb_left(&mut self, grid: &GridSpec) {
    self.size.x += grid.tile_width;
    self.center.x -= grid.tile_width / 2.0;
  }

  /// Absorbs one tile on the right.
  pub(crate) fn absorb_right(&mut self, grid: &GridSpec) {
    self.size.x += grid.tile_width;
    self.center.x += grid.tile_width / 2.0;
  }

  /// Absorbs a box of height `height` stacked on top: that much taller,
  /// center shifted up by half the absorbed height.
  pub(crate) fn absorb_above(&mut self, height: f32) {
    self.size.y += height;
    self.center.y += height / 2.0;
  }

  /// Absorbs a box of height `height` stacked underneath.
  pub(crate) fn absorb_below(&mut self, height: f32) {
    self.size.y += height;
    self.center.y -= height / 2.0;
  }
}
