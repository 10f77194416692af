//! Battlemap generation library
//!
//! Re-exports modules for use by binaries and tools.

pub mod archetype;
pub mod generate;
pub mod generators;
pub mod geometry;
pub mod lights;
pub mod raster;
pub mod rooms;
pub mod scene;
pub mod seeds;
pub mod tilemap;
pub mod tiles;
pub mod walls;
