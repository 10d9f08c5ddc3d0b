//! Physics backend integration for merged colliders.
//!
//! Feature-gated component builders for the supported physics engines.
//! Enable one backend via Cargo features:
//!
//! ```toml
//! bevy_tile_colliders = { version = "...", features = ["avian2d"] }
//! # or
//! bevy_tile_colliders = { version = "...", features = ["rapier2d"] }
//! ```
//!
//! Without a backend feature this module is absent and collider entities are
//! spawned as plain rectangle descriptors (`Transform` + `MergedTileCollider`).

#[cfg(all(feature = "avian2d", feature = "rapier2d"))]
compile_error!("Cannot enable both avian2d and rapier2d features simultaneously");

#[cfg(feature = "avian2d")]
pub mod avian;

#[cfg(feature = "rapier2d")]
pub mod rapier;
