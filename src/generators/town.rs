//! Settlement layout
//!
//! Cuts the canvas into rectangular blocks separated by streets, then
//! classifies each block: plaza (sometimes with a pond), park, market, or
//! building stock. Building blocks split into 1-3 row buildings along the
//! block's long axis, each with a solid perimeter and exactly one door on
//! a random side. Building interiors are the settlement's rooms.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use super::Layout;
use crate::geometry::{Door, Room};
use crate::tilemap::Tilemap;
use crate::tiles::Tile;

/// A block narrower than this is absorbed into the bounding street.
const MIN_BLOCK_SPAN: usize = 5;

/// Smallest building footprint; keeps a non-corner door cell on every side.
const MIN_BUILDING_SPAN: usize = 4;

/// Tuning for the settlement generator.
pub struct TownParams {
    pub street_width: usize,
    /// Block span range per axis (inclusive)
    pub block_span: (usize, usize),
    /// Percent of blocks that become plazas
    pub plaza_pct: u32,
    /// Percent of blocks that become parks
    pub park_pct: u32,
    /// Percent of blocks that become markets
    pub market_pct: u32,
}

impl Default for TownParams {
    fn default() -> Self {
        Self {
            street_width: 2,
            block_span: (7, 14),
            plaza_pct: 10,
            park_pct: 8,
            market_pct: 10,
        }
    }
}

pub fn generate_town(
    width: usize,
    height: usize,
    params: &TownParams,
    rng: &mut ChaCha8Rng,
) -> Layout {
    let mut layout = Layout::empty(width, height, Tile::Street);

    let cols = block_spans(width, params, rng);
    let rows = block_spans(height, params, rng);

    for &(by, bh) in &rows {
        for &(bx, bw) in &cols {
            let roll = rng.gen_range(0..100);
            if roll < params.plaza_pct {
                carve_plaza(&mut layout.grid, bx, by, bw, bh, rng);
            } else if roll < params.plaza_pct + params.park_pct {
                fill_block(&mut layout.grid, bx, by, bw, bh, Tile::Grass);
            } else if roll < params.plaza_pct + params.park_pct + params.market_pct {
                carve_market(&mut layout.grid, bx, by, bw, bh, rng);
            } else {
                carve_buildings(&mut layout, bx, by, bw, bh, rng);
            }
        }
    }

    layout
}

/// Cut one axis into block spans separated by streets, with a full street
/// on both canvas edges. A ragged tail too narrow for a block stays street.
fn block_spans(total: usize, params: &TownParams, rng: &mut ChaCha8Rng) -> Vec<(usize, usize)> {
    let mut spans = Vec::new();
    let limit = total.saturating_sub(params.street_width);
    let mut cursor = params.street_width;

    while cursor < limit {
        let remaining = limit - cursor;
        if remaining < MIN_BLOCK_SPAN {
            break;
        }
        let len = rng
            .gen_range(params.block_span.0..=params.block_span.1)
            .min(remaining);
        spans.push((cursor, len));
        cursor += len + params.street_width;
    }

    spans
}

fn fill_block(grid: &mut Tilemap<Tile>, bx: usize, by: usize, bw: usize, bh: usize, tile: Tile) {
    for y in by..by + bh {
        for x in bx..bx + bw {
            grid.set(x, y, tile);
        }
    }
}

fn carve_plaza(
    grid: &mut Tilemap<Tile>,
    bx: usize,
    by: usize,
    bw: usize,
    bh: usize,
    rng: &mut ChaCha8Rng,
) {
    fill_block(grid, bx, by, bw, bh, Tile::Plaza);

    // Roughly half the plazas get a 2x2 pond, kept off the block edge
    if bw >= 6 && bh >= 6 && rng.gen_bool(0.5) {
        let px = bx + rng.gen_range(1..bw - 2);
        let py = by + rng.gen_range(1..bh - 2);
        for y in py..py + 2 {
            for x in px..px + 2 {
                grid.set(x, y, Tile::Water);
            }
        }
    }
}

fn carve_market(
    grid: &mut Tilemap<Tile>,
    bx: usize,
    by: usize,
    bw: usize,
    bh: usize,
    rng: &mut ChaCha8Rng,
) {
    fill_block(grid, bx, by, bw, bh, Tile::Plaza);

    // Stalls on a 2-cell lattice, scattered so rows read as market stands
    for y in (by + 1..by + bh - 1).step_by(2) {
        for x in (bx + 1..bx + bw - 1).step_by(2) {
            if rng.gen_bool(0.6) {
                grid.set(x, y, Tile::Market);
            }
        }
    }
}

fn carve_buildings(
    layout: &mut Layout,
    bx: usize,
    by: usize,
    bw: usize,
    bh: usize,
    rng: &mut ChaCha8Rng,
) {
    // Split along the long axis, leaving a 1-cell alley between buildings
    let split_vertical = bw >= bh;
    let long = bw.max(bh);
    let max_n = if long >= 3 * MIN_BUILDING_SPAN + 2 {
        3
    } else if long >= 2 * MIN_BUILDING_SPAN + 1 {
        2
    } else {
        1
    };
    let n = rng.gen_range(1..=max_n);

    let base = (long - (n - 1)) / n;
    let rem = (long - (n - 1)) % n;

    let mut cursor = 0;
    for i in 0..n {
        let span = base + if i < rem { 1 } else { 0 };
        if split_vertical {
            carve_building(layout, bx + cursor, by, span, bh, rng);
        } else {
            carve_building(layout, bx, by + cursor, bw, span, rng);
        }
        cursor += span + 1;
    }
}

/// One building: perimeter wall, interior floor, exactly one non-corner
/// door on a random side. The interior becomes a room.
fn carve_building(
    layout: &mut Layout,
    x: usize,
    y: usize,
    w: usize,
    h: usize,
    rng: &mut ChaCha8Rng,
) {
    debug_assert!(w >= MIN_BUILDING_SPAN && h >= MIN_BUILDING_SPAN);

    for cy in y..y + h {
        for cx in x..x + w {
            let on_edge = cx == x || cx == x + w - 1 || cy == y || cy == y + h - 1;
            layout.grid.set(
                cx,
                cy,
                if on_edge {
                    Tile::BuildingWall
                } else {
                    Tile::BuildingFloor
                },
            );
        }
    }

    // 0 = top, 1 = bottom, 2 = left, 3 = right
    let door_side = rng.gen_range(0..4);
    let (door_x, door_y) = match door_side {
        0 => (x + rng.gen_range(1..w - 1), y),
        1 => (x + rng.gen_range(1..w - 1), y + h - 1),
        2 => (x, y + rng.gen_range(1..h - 1)),
        _ => (x + w - 1, y + rng.gen_range(1..h - 1)),
    };
    layout.grid.set(door_x, door_y, Tile::Door);
    layout.doors.push(Door {
        x: door_x,
        y: door_y,
    });

    let id = layout.rooms.len();
    layout
        .rooms
        .push(Room::new(id, x + 1, y + 1, w - 2, h - 2));
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_street_ring_borders_the_canvas() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let layout = generate_town(50, 40, &TownParams::default(), &mut rng);

        for x in 0..50 {
            assert_eq!(*layout.grid.get(x, 0), Tile::Street);
            assert_eq!(*layout.grid.get(x, 39), Tile::Street);
        }
        for y in 0..40 {
            assert_eq!(*layout.grid.get(0, y), Tile::Street);
            assert_eq!(*layout.grid.get(49, y), Tile::Street);
        }
    }

    #[test]
    fn test_every_building_has_exactly_one_door() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let layout = generate_town(50, 40, &TownParams::default(), &mut rng);

        assert!(!layout.rooms.is_empty());
        assert_eq!(layout.doors.len(), layout.rooms.len());

        // Each door sits on its building's perimeter ring, never a corner
        for room in &layout.rooms {
            let ring_doors: Vec<&Door> = layout
                .doors
                .iter()
                .filter(|d| {
                    let on_ring = d.x + 1 >= room.x
                        && d.x <= room.x + room.width
                        && d.y + 1 >= room.y
                        && d.y <= room.y + room.height;
                    on_ring && !room.contains(d.x, d.y)
                })
                .collect();
            assert_eq!(ring_doors.len(), 1, "room {} door count", room.id);

            let door = ring_doors[0];
            let corner_x = d_matches_edge(door.x, room.x - 1, room.x + room.width);
            let corner_y = d_matches_edge(door.y, room.y - 1, room.y + room.height);
            assert!(!(corner_x && corner_y), "door on a corner");
        }
    }

    fn d_matches_edge(v: usize, low: usize, high: usize) -> bool {
        v == low || v == high
    }

    #[test]
    fn test_block_spans_respect_street_margins() {
        let params = TownParams::default();
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let spans = block_spans(60, &params, &mut rng);

        assert!(!spans.is_empty());
        for &(start, len) in &spans {
            assert!(start >= params.street_width);
            assert!(start + len <= 60 - params.street_width);
            assert!(len >= MIN_BLOCK_SPAN);
        }
        // Consecutive blocks are separated by a full street
        for pair in spans.windows(2) {
            assert!(pair[1].0 >= pair[0].0 + pair[0].1 + params.street_width);
        }
    }

    #[test]
    fn test_door_cells_are_marked_in_the_grid() {
        let mut rng = ChaCha8Rng::seed_from_u64(21);
        let layout = generate_town(60, 44, &TownParams::default(), &mut rng);

        for door in &layout.doors {
            assert_eq!(*layout.grid.get(door.x, door.y), Tile::Door);
        }
    }

    #[test]
    fn test_rooms_are_building_interiors() {
        let mut rng = ChaCha8Rng::seed_from_u64(13);
        let layout = generate_town(50, 40, &TownParams::default(), &mut rng);

        for room in &layout.rooms {
            assert!(room.width >= MIN_BUILDING_SPAN - 2);
            assert!(room.height >= MIN_BUILDING_SPAN - 2);
            for y in room.y..room.y + room.height {
                for x in room.x..room.x + room.width {
                    assert!(layout.grid.get(x, y).is_floor_like());
                }
            }
        }
    }
}
