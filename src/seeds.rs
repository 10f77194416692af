//! Seed management for map generation
//!
//! The layout and the raster texture draw from separate sub-seeds, so a
//! caller can re-texture a map without moving a single wall.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Seeds for the map generation stages.
#[derive(Clone, Copy, Debug)]
pub struct MapSeeds {
    /// Master seed (used for display/reference)
    pub master: u64,
    /// Layout generation (rooms, corridors, streets, partitions, doors)
    pub layout: u64,
    /// Raster texture (per-cell jitter, speckle noise)
    pub texture: u64,
}

impl MapSeeds {
    /// Create seeds from a master seed, deriving all sub-seeds deterministically.
    pub fn from_master(master: u64) -> Self {
        Self {
            master,
            layout: derive_seed(master, "layout"),
            texture: derive_seed(master, "texture"),
        }
    }
}

impl Default for MapSeeds {
    fn default() -> Self {
        Self::from_master(rand::random())
    }
}

/// Derive a sub-seed from a master seed and a stage name.
/// Uses hashing to ensure different stages get different but deterministic seeds.
fn derive_seed(master: u64, stage: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    master.hash(&mut hasher);
    stage.hash(&mut hasher);
    hasher.finish()
}
