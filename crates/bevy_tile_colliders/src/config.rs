//! Plugin configuration.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::merge::GridSpec;

/// Surface properties applied to produced colliders.
///
/// Plain friction/restitution coefficients forwarded to whichever physics
/// backend feature is enabled. Without a backend they are carried in the
/// config but have no effect.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColliderMaterial {
  /// Friction coefficient (0 = frictionless).
  pub friction: f32,
  /// Restitution coefficient (0 = no bounce).
  pub restitution: f32,
}

impl Default for ColliderMaterial {
  fn default() -> Self {
    Self {
      friction: 0.5,
      restitution: 0.0,
    }
  }
}

/// Configuration for tile collider generation.
///
/// Insert this resource before adding
/// [`TileColliderPlugin`](crate::TileColliderPlugin) to override the
/// plugin's defaults, or configure the plugin itself:
///
/// ```
/// use bevy_tile_colliders::{GridSpec, TileColliderConfig};
///
/// let config = TileColliderConfig::default()
///   .with_grid(GridSpec::new(16.0, 16.0))
///   .with_gizmos(true);
/// assert_eq!(config.grid.tile_width, 16.0);
/// ```
#[derive(Resource, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TileColliderConfig {
  /// Cell geometry and the adjacency tolerance shared by both merge phases.
  pub grid: GridSpec,
  /// Material applied to produced colliders. `None` is not an error: a
  /// warning is logged once and colliders spawn without surface properties.
  pub material: Option<ColliderMaterial>,
  /// Whether to draw produced colliders as debug gizmos. Default: false.
  pub debug_gizmos: bool,
}

impl TileColliderConfig {
  /// Sets the grid spec.
  pub fn with_grid(mut self, grid: GridSpec) -> Self {
    self.grid = grid;
    self
  }

  /// Sets the tile cell size.
  pub fn with_tile_size(mut self, width: f32, height: f32) -> Self {
    self.grid.tile_width = width;
    self.grid.tile_height = height;
    self
  }

  /// Sets the adjacency tolerance.
  pub fn with_tolerance(mut self, tolerance: f32) -> Self {
    self.grid.tolerance = tolerance;
    self
  }

  /// Sets the collider material.
  pub fn with_material(mut self, material: ColliderMaterial) -> Self {
    self.material = Some(material);
    self
  }

  /// Enables or disables debug gizmo rendering.
  pub fn with_gizmos(mut self, enabled: bool) -> Self {
    self.debug_gizmos = enabled;
    self
  }

  /// Parses a config from TOML. Missing fields take their defaults.
  pub fn from_toml_str(s: &str) -> Result<Self, toml::de::Error> {
    toml::from_str(s)
  }
}
