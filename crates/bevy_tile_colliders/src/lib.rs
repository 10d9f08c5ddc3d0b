//! Merged tile colliders for Bevy tile worlds.
//!
//! Collapses a field of grid-aligned unit collision tiles into a minimal set
//! of axis-aligned rectangular colliders covering the same area. Merging
//! removes the internal seams that make moving bodies trip when crossing the
//! shared edge of two adjacent unit colliders, and keeps the collider count
//! proportional to the shape of the level rather than to its tile count.
//!
//! # How it works
//!
//! At startup the plugin snapshots the position of every entity marked with
//! [`ColliderTile`] and runs a two-phase greedy merge: contiguous tiles
//! within a row collapse into row boxes, then same-width row boxes stack
//! into taller rectangles. One collider entity is spawned per final
//! rectangle; with the `avian2d` or `rapier2d` feature enabled it carries
//! the matching static physics collider.
//!
//! # Usage
//!
//! ```no_run
//! use bevy::prelude::*;
//! use bevy_tile_colliders::{ColliderTile, TileColliderConfig, TileColliderPlugin};
//!
//! fn spawn_tiles(mut commands: Commands) {
//!   for x in 0..16 {
//!     commands.spawn((ColliderTile, Transform::from_xyz(x as f32, 0.0, 0.0)));
//!   }
//! }
//!
//! App::new()
//!   .add_plugins(DefaultPlugins)
//!   .add_plugins(TileColliderPlugin::default())
//!   .add_systems(Startup, spawn_tiles)
//!   .run();
//! ```

use bevy::prelude::*;

pub mod config;
pub mod merge;
#[cfg(any(feature = "avian2d", feature = "rapier2d"))]
pub mod physics;
pub mod systems;

pub use config::{ColliderMaterial, TileColliderConfig};
pub use merge::{ColliderBox, ColumnMerge, GridSpec, merge_columns, merge_rows, merge_tiles};
pub use systems::{
  ColliderTile, MergedTileCollider, build_tile_colliders, draw_collider_gizmos,
  gather_tile_positions,
};

/// Plugin that builds merged tile colliders once at startup.
///
/// Tiles spawned during `Startup` are picked up by the merge pass in
/// `PostStartup`. A [`TileColliderConfig`] resource inserted before the
/// plugin takes precedence over the plugin's own config.
#[derive(Default)]
pub struct TileColliderPlugin {
  /// Configuration used unless the app already provides the resource.
  pub config: TileColliderConfig,
}

impl TileColliderPlugin {
  /// Creates the plugin with the given configuration.
  pub fn with_config(config: TileColliderConfig) -> Self {
    Self { config }
  }
}

impl Plugin for TileColliderPlugin {
  fn build(&self, app: &mut App) {
    if !app.world().contains_resource::<TileColliderConfig>() {
      app.insert_resource(self.config.clone());
    }

    app.add_systems(PostStartup, build_tile_colliders);

    // Gizmo drawing needs the render stack.
    if app.is_plugin_added::<bevy::render::RenderPlugin>() {
      app.add_systems(Update, draw_collider_gizmos);
    }
  }
}
