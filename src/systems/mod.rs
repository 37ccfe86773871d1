//! Engine systems.
//!
//! This module groups the per-tick logic that advances simulation, input,
//! and rendering.
//!
//! Submodules overview
//! - [`animation`] – advance frame cursors and update sprite frames
//! - [`input`] – read hardware input and update [`crate::resources::input::InputState`]
//! - [`movement`] – integrate positions from rigid body velocities
//! - [`player_controller`] – translate input state into velocity and facing
//! - [`render`] – draw the world using Raylib

pub mod animation;
pub mod input;
pub mod movement;
pub mod player_controller;
pub mod render;
