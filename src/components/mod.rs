//! ECS components for entities.
//!
//! This module groups all component types that can be attached to entities
//! in the game world.
//!
//! Submodules overview:
//! - [`animation`] – frame cursor and tick-hold playback state
//! - [`facing`] – facing direction and its draw-time rotation lookup
//! - [`inputcontrolled`] – keyboard movement speeds for the player
//! - [`mapposition`] – world-space position (top-left pixel) of an entity
//! - [`rigidbody`] – kinematic body storing the per-tick velocity
//! - [`sprite`] – reference to a stored sprite sequence and current frame
//! - [`zindex`] – rendering order hint for 2D drawing

pub mod animation;
pub mod facing;
pub mod inputcontrolled;
pub mod mapposition;
pub mod rigidbody;
pub mod sprite;
pub mod zindex;
