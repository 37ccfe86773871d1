use bevy_ecs::prelude::Component;

/// Reference to a stored sprite sequence plus the frame to draw.
///
/// Sequences are pre-sliced at startup and live in the sprite/texture
/// stores; entities only carry the key and a frame index. `width`/`height`
/// are the scaled frame size in world pixels, cached here so the renderer
/// does not need a store lookup for placement.
#[derive(Component, Clone, Debug)]
pub struct Sprite {
    pub seq_key: String,
    pub frame: usize,
    pub width: f32,
    pub height: f32,
}

impl Sprite {
    pub fn new(seq_key: impl Into<String>, width: f32, height: f32) -> Self {
        Self {
            seq_key: seq_key.into(),
            frame: 0,
            width,
            height,
        }
    }
}
