//! Map assembly
//!
//! The entry point of the engine: clamp the requested dimensions, run the
//! archetype's layout generator, derive and merge walls, place lights,
//! assemble the scene descriptor and rasterize the image. Layout and
//! texture randomness draw from independent sub-seeds of one master seed,
//! so the same request and seed always reproduce the same map.

use image::RgbaImage;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::archetype::Archetype;
use crate::generators::build_layout;
use crate::geometry::{Door, Room};
use crate::lights::place_lights;
use crate::raster::rasterize;
use crate::scene::SceneDescriptor;
use crate::seeds::MapSeeds;
use crate::tilemap::Tilemap;
use crate::tiles::Tile;
use crate::walls::{derive_walls, merge_walls};

/// Grid dimensions are clamped into this range, never rejected. The upper
/// bound caps the pixel buffer at 80 x 80 cells.
pub const MIN_DIMENSION: usize = 20;
pub const MAX_DIMENSION: usize = 80;

/// One generation request. Cell size is taken as-is; callers are expected
/// to pass a sane pixel size (e.g. 100).
#[derive(Clone, Debug)]
pub struct MapRequest {
    pub archetype: Archetype,
    pub width: usize,
    pub height: usize,
    pub cell_size: usize,
    pub name: String,
}

/// Everything one generation call produces. Immutable once returned; the
/// engine keeps no state between calls.
pub struct GeneratedMap {
    pub name: String,
    pub grid_width: usize,
    pub grid_height: usize,
    pub cell_size: usize,
    pub tiles: Tilemap<Tile>,
    pub rooms: Vec<Room>,
    pub doors: Vec<Door>,
    pub scene: SceneDescriptor,
    pub image: RgbaImage,
}

/// Generate a map from a fresh entropy seed.
pub fn generate(request: &MapRequest) -> GeneratedMap {
    generate_seeded(request, rand::random())
}

/// Generate a map from a master seed.
pub fn generate_seeded(request: &MapRequest, master_seed: u64) -> GeneratedMap {
    let seeds = MapSeeds::from_master(master_seed);
    let width = request.width.clamp(MIN_DIMENSION, MAX_DIMENSION);
    let height = request.height.clamp(MIN_DIMENSION, MAX_DIMENSION);

    let mut layout_rng = ChaCha8Rng::seed_from_u64(seeds.layout);
    let layout = build_layout(request.archetype, width, height, &mut layout_rng);

    let walls = merge_walls(derive_walls(&layout.grid, &layout.doors, request.cell_size));
    let lights = place_lights(&layout.rooms, request.cell_size);
    let scene = SceneDescriptor::new(
        &request.name,
        width,
        height,
        request.cell_size,
        request.archetype,
        walls,
        lights,
    );

    let mut texture_rng = ChaCha8Rng::seed_from_u64(seeds.texture);
    let image = rasterize(
        &layout.grid,
        request.archetype,
        request.cell_size,
        &mut texture_rng,
    );

    GeneratedMap {
        name: request.name.clone(),
        grid_width: width,
        grid_height: height,
        cell_size: request.cell_size,
        tiles: layout.grid,
        rooms: layout.rooms,
        doors: layout.doors,
        scene,
        image,
    }
}
