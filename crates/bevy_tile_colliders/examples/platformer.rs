//! Spawns a small ASCII tile level and draws the merged colliders as gizmos.
//!
//! ```sh
//! cargo run -p bevy_tile_colliders --example platformer
//! ```

use bevy::prelude::*;
use bevy_tile_colliders::{ColliderTile, GridSpec, TileColliderConfig, TileColliderPlugin};

const TILE: f32 = 16.0;

/// '#' marks a collision tile. Bottom line is the lowest row.
const LEVEL: &[&str] = &[
  "#..............#",
  "#........###..##",
  "#..............#",
  "#...####.......#",
  "#..............#",
  "##.........#####",
  "#..............#",
  "################",
];

fn main() {
  App::new()
    .add_plugins(DefaultPlugins)
    .add_plugins(TileColliderPlugin::with_config(
      TileColliderConfig::default()
        .with_grid(GridSpec::new(TILE, TILE))
        .with_gizmos(true),
    ))
    .add_systems(Startup, (spawn_camera, spawn_level))
    .run();
}

fn spawn_camera(mut commands: Commands) {
  commands.spawn(Camera2d);
}

fn spawn_level(mut commands: Commands) {
  let half_width = LEVEL[0].len() as f32 * TILE / 2.0;
  let half_height = LEVEL.len() as f32 * TILE / 2.0;

  for (row, line) in LEVEL.iter().rev().enumerate() {
    for (col, cell) in line.chars().enumerate() {
      if cell != '#' {
        continue;
      }
      commands.spawn((
        ColliderTile,
        Sprite::from_color(Color::srgb(0.35, 0.3, 0.25), Vec2::splat(TILE - 1.0)),
        Transform::from_xyz(
          col as f32 * TILE - half_width,
          row as f32 * TILE - half_height,
          0.0,
        ),
      ));
    }
  }
}
