//! Tile gathering and collider spawning systems.

use bevy::math::Vec2;
use bevy::prelude::*;

use crate::config::TileColliderConfig;
use crate::merge::merge_tiles;

/// Marker for unit tile entities to be covered by merged colliders.
///
/// Every entity carrying this marker contributes its `Transform` translation
/// (truncated to 2D) as one input tile. Tiles are snapshotted once at
/// startup; moving or despawning them afterwards does not rebuild the
/// colliders.
#[derive(Component, Default)]
pub struct ColliderTile;

/// Component on each produced collider entity.
///
/// The entity's `Transform` holds the rectangle center; `size` holds its
/// full extents.
#[derive(Component, Clone, Copy, Debug)]
pub struct MergedTileCollider {
  /// Sequential index, also used in the entity name.
  pub index: usize,
  /// Full extents of the collider rectangle.
  pub size: Vec2,
}

/// Snapshots tile positions from an iterator of transforms.
///
/// No deduplication: a position contributed twice yields a duplicate tile,
/// exactly as two stacked tile objects would. Query iteration order is not
/// guaranteed stable across runs; for branching tile shapes this can change
/// which (equally valid) decomposition is produced.
pub fn gather_tile_positions<'a>(transforms: impl Iterator<Item = &'a Transform>) -> Vec<Vec2> {
  transforms.map(|t| t.translation.truncate()).collect()
}

/// System: builds merged colliders from all [`ColliderTile`] entities.
///
/// Runs once in `PostStartup`. Spawns one entity per final rectangle, with
/// its transform at the rectangle center; physics components are attached
/// when a backend feature is enabled. Zero tiles produce zero colliders,
/// which is not an error.
pub fn build_tile_colliders(
  mut commands: Commands,
  config: Res<TileColliderConfig>,
  tiles: Query<&Transform, With<ColliderTile>>,
) {
  if config.material.is_none() {
    warn!("No collider material configured. None will be applied.");
  }

  let positions = gather_tile_positions(tiles.iter());
  let tile_count = positions.len();

  let outcome = merge_tiles(positions, &config.grid);

  debug!(
    "Merged {} tiles into {} colliders ({} row boxes absorbed)",
    tile_count,
    outcome.colliders.len(),
    outcome.absorbed.len()
  );

  for (index, rect) in outcome.colliders.iter().enumerate() {
    #[cfg_attr(not(physics), allow(unused_mut, unused_variables))]
    let mut entity = commands.spawn((
      Name::new(format!("Tile Collider {index}")),
      Transform::from_translation(rect.center.extend(0.0)),
      MergedTileCollider {
        index,
        size: rect.size,
      },
    ));

    #[cfg(feature = "avian2d")]
    {
      entity.insert(crate::physics::avian::static_rectangle(rect));
      if let Some(material) = config.material {
        entity.insert(crate::physics::avian::material_components(&material));
      }
    }

    #[cfg(feature = "rapier2d")]
    {
      entity.insert(crate::physics::rapier::static_rectangle(rect));
      if let Some(material) = config.material {
        entity.insert(crate::physics::rapier::material_components(&material));
      }
    }
  }
}

/// System: draws merged collider outlines as gizmos.
///
/// Only registered when the render stack is present; gated at runtime by
/// [`TileColliderConfig::debug_gizmos`].
pub fn draw_collider_gizmos(
  config: Res<TileColliderConfig>,
  colliders: Query<(&Transform, &MergedTileCollider)>,
  mut gizmos: Gizmos,
) {
  if !config.debug_gizmos {
    return;
  }

  let edge_color = Color::srgb(0.2, 0.8, 0.3);

  for (transform, collider) in colliders.iter() {
    gizmos.rect_2d(
      Isometry2d::from_translation(transform.translation.truncate()),
      collider.size,
      edge_color,
    );
  }
}
