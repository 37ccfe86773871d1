//! Tilebound, a minimal tile-based 2D game runtime.
//!
//! The crate splits into a pure, headless core (sprite-sheet slicing in
//! [`sheet`], grid math in [`grid`], color-coded room generation in
//! [`room`]) and an ECS layer ([`components`], [`resources`], [`systems`])
//! driven by a fixed-tick main loop. Only asset upload and rendering touch
//! the window; everything else is testable without one.

pub mod components;
pub mod game;
pub mod grid;
pub mod resources;
pub mod room;
pub mod sheet;
pub mod systems;
