//! Grid geometry and the shared adjacency tolerance.

use bevy::math::Vec2;
use serde::{Deserialize, Serialize};

/// Uniform cell geometry plus the positional tolerance used for every
/// adjacency comparison in the pipeline.
///
/// Both merge phases test candidate positions against computed targets
/// through [`GridSpec::within`], so one tolerance value governs the whole
/// pipeline rather than being re-chosen at each comparison site.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSpec {
  /// Width of one tile cell in world units.
  pub tile_width: f32,
  /// Height of one tile cell in world units.
  pub tile_height: f32,
  /// Maximum positional deviation still treated as exact adjacency.
  ///
  /// Absorbs floating-point and minor hand-placement error. A tile further
  /// off the lattice than this fails every adjacency check and ends up as
  /// an isolated one-cell box, which is never an error.
  pub tolerance: f32,
}

impl Default for GridSpec {
  fn default() -> Self {
    Self {
      tile_width: 1.0,
      tile_height: 1.0,
      tolerance: 0.01,
    }
  }
}

impl GridSpec {
  /// Creates a spec for the given cell size with the default tolerance.
  pub fn new(tile_width: f32, tile_height: f32) -> Self {
    Self {
      tile_width,
      tile_height,
      ..Default::default()
    }
  }

  /// Sets the adjacency tolerance.
  pub fn with_tolerance(mut self, tolerance: f32) -> Self {
    self.tolerance = tolerance;
    self
  }

  /// Cell size as a vector.
  pub fn cell(&self) -> Vec2 {
    Vec2::new(self.tile_width, self.tile_height)
  }

  /// Inclusive tolerance comparison: true when `value` lies within
  /// `tolerance` of `target`.
  pub fn within(&self, value: f32, target: f32) -> bool {
    (value - target).abs() <= self.tolerance
  }
}
