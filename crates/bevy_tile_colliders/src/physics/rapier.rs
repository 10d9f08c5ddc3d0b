//! Rapier2d components for merged colliders.

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::config::ColliderMaterial;
use crate::merge::ColliderBox;

/// Fixed rectangle collider matching the box extents.
///
/// Rapier's cuboid takes half-extents, not full extents.
pub fn static_rectangle(rect: &ColliderBox) -> impl Bundle {
    (
        RigidBody::Fixed,
        Collider::cuboid(rect.size.x / 2.0, rect.size.y / 2.0),
    )
}

/// Friction and restitution components from the configured material.
pub fn material_components(material: &ColliderMaterial) -> impl Bundle {
    (
        Friction::coefficient(material.friction),
        Restitution::coefficient(material.restitution),
    )
}
