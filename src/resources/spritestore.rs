//! CPU sprite registry.
//!
//! Holds every [`SpriteSequence`] sliced at startup, keyed by string IDs
//! such as `"player"` or `"tile_wall"`. Entities reference sequences by
//! key; the store (and the rasters inside it) never mutates after setup,
//! so many entities can share one sequence.

use bevy_ecs::prelude::Resource;
use rustc_hash::FxHashMap;

use crate::sheet::SpriteSequence;

/// Central registry of sliced sprite sequences keyed by string IDs.
#[derive(Resource, Default)]
pub struct SpriteStore {
    map: FxHashMap<String, SpriteSequence>,
}

impl SpriteStore {
    pub fn insert(&mut self, key: impl Into<String>, sequence: SpriteSequence) {
        self.map.insert(key.into(), sequence);
    }

    pub fn get(&self, key: &str) -> Option<&SpriteSequence> {
        self.map.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SpriteSequence)> {
        self.map.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sheet::{Sprite, SpriteSequence};
    use image::{Rgba, RgbaImage};

    fn sequence() -> SpriteSequence {
        SpriteSequence::single(Sprite::new(RgbaImage::from_pixel(
            2,
            2,
            Rgba([1, 2, 3, 255]),
        )))
    }

    #[test]
    fn test_insert_and_get() {
        let mut store = SpriteStore::default();
        store.insert("player", sequence());
        assert_eq!(store.get("player").unwrap().len(), 1);
        assert!(store.get("missing").is_none());
    }

    #[test]
    fn test_insert_overwrites() {
        let mut store = SpriteStore::default();
        store.insert("k", sequence());
        store.insert("k", sequence());
        assert_eq!(store.len(), 1);
    }
}
