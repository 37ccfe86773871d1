//! GPU texture registry.
//!
//! One uploaded `Texture2D` per sprite frame, grouped per sequence key.
//! `Texture2D` is tied to the GL context thread, so this store is kept by
//! the main loop rather than inserted as a world resource.

use rustc_hash::FxHashMap;

use raylib::prelude::Texture2D;

/// Uploaded textures keyed by sequence ID, one entry per frame.
#[derive(Default)]
pub struct TextureStore {
    map: FxHashMap<String, Vec<Texture2D>>,
}

impl TextureStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, frames: Vec<Texture2D>) {
        self.map.insert(key.into(), frames);
    }

    /// Texture for one frame of a sequence, if both exist.
    pub fn frame(&self, key: &str, index: usize) -> Option<&Texture2D> {
        self.map.get(key).and_then(|frames| frames.get(index))
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
