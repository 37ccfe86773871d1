//! ECS resources made available to systems.
//!
//! Long-lived data injected into the ECS world and read or mutated by
//! systems during execution.
//!
//! Overview
//! - `gameconfig` – grid/window/asset settings backed by an INI file
//! - `input` – per-frame keyboard state of the keys relevant to the game
//! - `spritestore` – sliced CPU sprite sequences keyed by string IDs
//! - `texturestore` – uploaded GPU textures, one per sequence frame

pub mod gameconfig;
pub mod input;
pub mod spritestore;
pub mod texturestore;
