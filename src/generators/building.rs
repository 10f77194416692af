//! Building interior layout via binary space partitioning
//!
//! The canvas keeps an exterior margin, a perimeter wall encloses the rest,
//! and the interior splits recursively. Every dividing wall is punched with
//! one door, so the door count is always the split count plus the main
//! entrance. Leaf partitions become rooms.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use super::Layout;
use crate::geometry::{Door, Room};
use crate::tilemap::Tilemap;
use crate::tiles::Tile;

/// Tuning for the interior partitioner.
pub struct BuildingParams {
    /// Cells of outdoor ground kept around the building
    pub exterior_margin: usize,
    /// Minimum room span on both sides of a dividing wall
    pub min_room_span: usize,
    /// Chance a large room gets furniture
    pub furniture_chance: f64,
}

impl Default for BuildingParams {
    fn default() -> Self {
        Self {
            exterior_margin: 2,
            min_room_span: 6,
            furniture_chance: 0.7,
        }
    }
}

/// An axis-aligned region of interior floor during partitioning.
#[derive(Clone, Copy)]
struct Partition {
    x: usize,
    y: usize,
    width: usize,
    height: usize,
}

/// A dividing wall drawn by one split, spanning `from..to` along `fixed`.
struct DividingWall {
    horizontal: bool,
    fixed: usize,
    from: usize,
    to: usize,
}

pub fn generate_building(
    width: usize,
    height: usize,
    params: &BuildingParams,
    rng: &mut ChaCha8Rng,
) -> Layout {
    let mut layout = Layout::empty(width, height, Tile::Exterior);
    let m = params.exterior_margin;

    if width < 2 * m + 4 || height < 2 * m + 4 {
        return layout;
    }

    // Perimeter wall around the interior
    for y in m..height - m {
        for x in m..width - m {
            let on_edge = x == m || x == width - 1 - m || y == m || y == height - 1 - m;
            layout.grid.set(
                x,
                y,
                if on_edge {
                    Tile::BuildingWall
                } else {
                    Tile::BuildingFloor
                },
            );
        }
    }

    let interior = Partition {
        x: m + 1,
        y: m + 1,
        width: width - 2 * (m + 1),
        height: height - 2 * (m + 1),
    };

    // Small canvases get a shallower tree so rooms stay usable
    let depth = if width < 20 || height < 20 { 2 } else { 3 };

    let mut leaves = Vec::new();
    let mut walls = Vec::new();
    split_partition(
        &mut layout.grid,
        interior,
        depth,
        params.min_room_span,
        rng,
        &mut leaves,
        &mut walls,
    );
    punch_doors(&mut layout, &walls, rng);

    layout.rooms = leaves
        .iter()
        .enumerate()
        .map(|(id, p)| Room::new(id, p.x, p.y, p.width, p.height))
        .collect();

    place_entrance(&mut layout, width, height, m);
    decorate(&mut layout, params, rng);

    layout
}

/// Recursively split a partition, drawing a dividing wall per split. Doors
/// are punched after the whole tree is drawn, so a deeper perpendicular
/// wall can never land across a doorway.
fn split_partition(
    grid: &mut Tilemap<Tile>,
    part: Partition,
    depth: usize,
    min_span: usize,
    rng: &mut ChaCha8Rng,
    leaves: &mut Vec<Partition>,
    walls: &mut Vec<DividingWall>,
) {
    // A dividing wall costs one cell, so both halves need min_span beyond it
    let can_split_h = depth > 0 && part.height >= 2 * min_span + 1;
    let can_split_v = depth > 0 && part.width >= 2 * min_span + 1;

    let horizontal = match (can_split_h, can_split_v) {
        (true, true) => rng.gen_bool(0.5),
        (true, false) => true,
        (false, true) => false,
        (false, false) => {
            leaves.push(part);
            return;
        }
    };

    if horizontal {
        let wall_y = rng.gen_range(part.y + min_span..part.y + part.height - min_span);
        for x in part.x..part.x + part.width {
            grid.set(x, wall_y, Tile::BuildingWall);
        }
        walls.push(DividingWall {
            horizontal: true,
            fixed: wall_y,
            from: part.x,
            to: part.x + part.width,
        });

        let top = Partition {
            height: wall_y - part.y,
            ..part
        };
        let bottom = Partition {
            y: wall_y + 1,
            height: part.y + part.height - wall_y - 1,
            ..part
        };
        split_partition(grid, top, depth - 1, min_span, rng, leaves, walls);
        split_partition(grid, bottom, depth - 1, min_span, rng, leaves, walls);
    } else {
        let wall_x = rng.gen_range(part.x + min_span..part.x + part.width - min_span);
        for y in part.y..part.y + part.height {
            grid.set(wall_x, y, Tile::BuildingWall);
        }
        walls.push(DividingWall {
            horizontal: false,
            fixed: wall_x,
            from: part.y,
            to: part.y + part.height,
        });

        let left = Partition {
            width: wall_x - part.x,
            ..part
        };
        let right = Partition {
            x: wall_x + 1,
            width: part.x + part.width - wall_x - 1,
            ..part
        };
        split_partition(grid, left, depth - 1, min_span, rng, leaves, walls);
        split_partition(grid, right, depth - 1, min_span, rng, leaves, walls);
    }
}

/// Punch one door through every dividing wall, at a random interior point
/// whose both across-cells are open floor.
fn punch_doors(layout: &mut Layout, walls: &[DividingWall], rng: &mut ChaCha8Rng) {
    for wall in walls {
        let candidates: Vec<(usize, usize)> = (wall.from + 1..wall.to - 1)
            .map(|v| {
                if wall.horizontal {
                    (v, wall.fixed)
                } else {
                    (wall.fixed, v)
                }
            })
            .filter(|&(x, y)| {
                let (a, b) = if wall.horizontal {
                    ((x, y - 1), (x, y + 1))
                } else {
                    ((x - 1, y), (x + 1, y))
                };
                layout.grid.get(a.0, a.1).is_floor_like()
                    && layout.grid.get(b.0, b.1).is_floor_like()
            })
            .collect();

        assert!(
            !candidates.is_empty(),
            "dividing wall has no usable door position"
        );
        let (door_x, door_y) = candidates[rng.gen_range(0..candidates.len())];
        layout.grid.set(door_x, door_y, Tile::Door);
        layout.doors.push(Door {
            x: door_x,
            y: door_y,
        });
    }
}

/// Punch the main entrance through the south perimeter wall, as close to
/// center as the interior allows (a vertical dividing wall can land on the
/// exact center column).
fn place_entrance(layout: &mut Layout, width: usize, height: usize, margin: usize) {
    let wall_row = height - 1 - margin;
    let inner_row = wall_row - 1;
    let center = width / 2;

    for offset in 0..width / 2 {
        for x in [center + offset, center.saturating_sub(offset)] {
            if x <= margin || x >= width - 1 - margin {
                continue;
            }
            if layout.grid.get(x, inner_row).is_floor_like() {
                layout.grid.set(x, wall_row, Tile::Door);
                layout.doors.push(Door { x, y: wall_row });
                return;
            }
        }
    }
}

/// A hearth against the first room's north wall, furniture near the center
/// of large rooms.
fn decorate(layout: &mut Layout, params: &BuildingParams, rng: &mut ChaCha8Rng) {
    if let Some(first) = layout.rooms.first() {
        let hx = first.x + first.width / 2;
        layout.grid.set(hx, first.y, Tile::Hearth);
    }

    for room in &layout.rooms {
        if room.width >= 5 && room.height >= 5 && rng.gen_bool(params.furniture_chance) {
            let (cx, cy) = room.center();
            layout.grid.set(cx, cy, Tile::Furniture);
            if rng.gen_bool(0.5) {
                layout.grid.set(cx + 1, cy, Tile::Furniture);
            }
        }
    }
}
