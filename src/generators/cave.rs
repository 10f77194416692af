//! Cellular-automaton cave growth
//!
//! Classic 8-neighborhood automaton: random initial fill, a few smoothing
//! passes, then a forced wall border so nothing leaks off the canvas edge.
//! Caves are door-free; room records come from the flood-fill extractor
//! applied to the finished grid.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use super::Layout;
use crate::tilemap::Tilemap;
use crate::tiles::Tile;

/// Tuning for the cave automaton.
pub struct CaveParams {
    /// Chance a cell starts as floor
    pub fill_probability: f64,
    /// Smoothing passes
    pub iterations: usize,
    /// Rock becomes floor at this many floor neighbors or more
    pub birth_threshold: usize,
    /// Floor survives at this many floor neighbors or more
    pub survival_threshold: usize,
}

impl Default for CaveParams {
    fn default() -> Self {
        Self {
            fill_probability: 0.48,
            iterations: 4,
            birth_threshold: 5,
            survival_threshold: 4,
        }
    }
}

pub fn generate_cave(
    width: usize,
    height: usize,
    params: &CaveParams,
    rng: &mut ChaCha8Rng,
) -> Layout {
    let mut grid = Tilemap::new_with(width, height, Tile::Rock);

    for y in 0..height {
        for x in 0..width {
            if rng.gen_bool(params.fill_probability) {
                grid.set(x, y, Tile::Floor);
            }
        }
    }

    for _ in 0..params.iterations {
        grid = smooth(&grid, params);
    }

    // Edge cells can survive smoothing with enough in-bounds neighbors,
    // so the closed border is forced explicitly
    for x in 0..width {
        grid.set(x, 0, Tile::Rock);
        grid.set(x, height - 1, Tile::Rock);
    }
    for y in 0..height {
        grid.set(0, y, Tile::Rock);
        grid.set(width - 1, y, Tile::Rock);
    }

    Layout {
        grid,
        rooms: Vec::new(),
        doors: Vec::new(),
    }
}

/// One automaton pass over a fresh grid. Neighbors outside the canvas count
/// as wall, which erodes floor back from the edges.
fn smooth(grid: &Tilemap<Tile>, params: &CaveParams) -> Tilemap<Tile> {
    let mut next = Tilemap::new_with(grid.width, grid.height, Tile::Rock);

    for y in 0..grid.height {
        for x in 0..grid.width {
            let floor_neighbors = grid
                .neighbors_8(x, y)
                .into_iter()
                .filter(|&(nx, ny)| grid.get(nx, ny).is_floor_like())
                .count();

            let alive = if grid.get(x, y).is_floor_like() {
                floor_neighbors >= params.survival_threshold
            } else {
                floor_neighbors >= params.birth_threshold
            };

            if alive {
                next.set(x, y, Tile::Floor);
            }
        }
    }

    next
}
