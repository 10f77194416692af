//! Tile grid rasterization
//!
//! Each cell becomes a cellSize x cellSize pixel block filled from an
//! archetype-keyed palette, with per-cell brightness jitter, cobblestone
//! speckle on streets, plank seams on building floors, and a dimmed
//! 1-pixel grid line on the bottom/right edge of floor cells.

use image::{ImageBuffer, Rgba, RgbaImage};
use noise::{NoiseFn, Perlin};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::archetype::Archetype;
use crate::tilemap::Tilemap;
use crate::tiles::Tile;

/// Door fill shared by every palette.
const DOOR_COLOR: [u8; 3] = [140, 98, 57];

/// Per-cell brightness jitter amplitude.
const JITTER: i32 = 8;

/// Base fill for a tile under an archetype's palette.
fn base_color(archetype: Archetype, tile: Tile) -> [u8; 3] {
    if tile == Tile::Door {
        return DOOR_COLOR;
    }

    match archetype {
        Archetype::Dungeon | Archetype::Cave => match tile {
            Tile::Floor => [118, 108, 94],
            _ => [52, 46, 42],
        },
        Archetype::Town => match tile {
            Tile::Street => [112, 106, 96],
            Tile::Plaza => [146, 138, 122],
            Tile::Grass => [88, 124, 70],
            Tile::Water => [62, 96, 146],
            Tile::Market => [158, 118, 82],
            Tile::BuildingWall => [76, 64, 52],
            Tile::BuildingFloor => [134, 104, 72],
            _ => [52, 46, 42],
        },
        Archetype::Building => match tile {
            Tile::Exterior => [98, 104, 88],
            Tile::BuildingWall => [70, 62, 56],
            Tile::BuildingFloor => [136, 106, 74],
            Tile::Furniture => [104, 76, 48],
            Tile::Hearth => [156, 86, 54],
            _ => [52, 46, 42],
        },
    }
}

fn dim(pixel: [u8; 3], factor: u16) -> [u8; 3] {
    [
        (pixel[0] as u16 * factor / 10) as u8,
        (pixel[1] as u16 * factor / 10) as u8,
        (pixel[2] as u16 * factor / 10) as u8,
    ]
}

/// Paint the tile grid into an RGBA buffer.
pub fn rasterize(
    grid: &Tilemap<Tile>,
    archetype: Archetype,
    cell_size: usize,
    rng: &mut ChaCha8Rng,
) -> RgbaImage {
    let cell = cell_size as u32;
    let width = grid.width as u32 * cell;
    let height = grid.height as u32 * cell;
    let mut img: RgbaImage = ImageBuffer::new(width, height);

    let speckle = Perlin::new(rng.gen::<u32>());
    // Plank seams run every half cell so boards continue across cells
    let seam = (cell / 2).max(1);

    for (x, y, tile) in grid.iter() {
        let base = base_color(archetype, *tile);

        // One brightness roll per cell breaks up flat color banding
        let jitter = rng.gen_range(-JITTER..=JITTER);
        let shade = [
            (base[0] as i32 + jitter).clamp(0, 255) as u8,
            (base[1] as i32 + jitter).clamp(0, 255) as u8,
            (base[2] as i32 + jitter).clamp(0, 255) as u8,
        ];

        for dy in 0..cell {
            for dx in 0..cell {
                let px = x as u32 * cell + dx;
                let py = y as u32 * cell + dy;
                let mut pixel = shade;

                match *tile {
                    Tile::Street => {
                        let n = speckle.get([
                            px as f64 * 3.0 / cell as f64,
                            py as f64 * 3.0 / cell as f64,
                        ]);
                        if n > 0.45 {
                            pixel = dim(pixel, 9);
                        }
                    }
                    Tile::BuildingFloor if py % seam == 0 => {
                        pixel = dim(pixel, 9);
                    }
                    _ => {}
                }

                if tile.is_floor_like() && (dx == cell - 1 || dy == cell - 1) {
                    pixel = dim(pixel, 8);
                }

                img.put_pixel(px, py, Rgba([pixel[0], pixel[1], pixel[2], 255]));
            }
        }
    }

    img
}
