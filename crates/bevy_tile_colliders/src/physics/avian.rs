//! Avian2d components for merged colliders.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::config::ColliderMaterial;
use crate::merge::ColliderBox;

/// Static rectangle collider matching the box extents.
pub fn static_rectangle(rect: &ColliderBox) -> impl Bundle {
    (
        RigidBody::Static,
        Collider::rectangle(rect.size.x, rect.size.y),
    )
}

/// Friction and restitution components from the configured material.
pub fn material_components(material: &ColliderMaterial) -> impl Bundle {
    (
        Friction::new(material.friction),
        Restitution::new(material.restitution),
    )
}
