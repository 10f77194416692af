//! Room-and-corridor dungeon digging
//!
//! Grows a dungeon outward from a seed room near the canvas center: each
//! step picks an existing room, walks a corridor out of a random side, and
//! attaches a new room at the far end. Both corridor junctions become
//! doors. Digging stops when the dug fraction reaches its target or the
//! attempt budget runs out.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use super::Layout;
use crate::geometry::{Door, Room};
use crate::tilemap::Tilemap;
use crate::tiles::Tile;

/// Tuning for the dungeon digger.
pub struct DungeonParams {
    /// Room width range (inclusive)
    pub room_width: (usize, usize),
    /// Room height range (inclusive)
    pub room_height: (usize, usize),
    /// Corridor length range (inclusive)
    pub corridor_len: (usize, usize),
    /// Stop once this fraction of the canvas is dug
    pub target_dug_fraction: f32,
    /// Placement attempts before giving up on a cramped canvas
    pub max_attempts: usize,
}

impl Default for DungeonParams {
    fn default() -> Self {
        Self {
            room_width: (4, 9),
            room_height: (3, 6),
            corridor_len: (2, 6),
            target_dug_fraction: 0.4,
            max_attempts: 400,
        }
    }
}

pub fn generate_dungeon(
    width: usize,
    height: usize,
    params: &DungeonParams,
    rng: &mut ChaCha8Rng,
) -> Layout {
    let mut layout = Layout::empty(width, height, Tile::Rock);

    // Canvas too small for even the minimum room plus a wall ring
    if width < params.room_width.0 + 2 || height < params.room_height.0 + 2 {
        return layout;
    }

    // Seed room near the center
    let w = rng.gen_range(params.room_width.0..=params.room_width.1.min(width - 2));
    let h = rng.gen_range(params.room_height.0..=params.room_height.1.min(height - 2));
    let x = (width - w) / 2;
    let y = (height - h) / 2;
    carve_room(&mut layout.grid, x, y, w, h);
    layout.rooms.push(Room::new(0, x, y, w, h));

    let mut dug = w * h;
    let target = (width as f32 * height as f32 * params.target_dug_fraction) as usize;

    let mut attempts = 0;
    while dug < target && attempts < params.max_attempts {
        attempts += 1;

        let base = layout.rooms[rng.gen_range(0..layout.rooms.len())];
        if let Some(added) = try_attach_room(&mut layout, &base, params, rng) {
            dug += added;
        }
    }

    layout
}

/// Walk a corridor out of a random side of `base` and attach a new room at
/// its far end. Returns the number of cells dug, or None if the candidate
/// was rejected.
fn try_attach_room(
    layout: &mut Layout,
    base: &Room,
    params: &DungeonParams,
    rng: &mut ChaCha8Rng,
) -> Option<usize> {
    let grid = &layout.grid;
    let len = rng.gen_range(params.corridor_len.0..=params.corridor_len.1);
    let w = rng.gen_range(params.room_width.0..=params.room_width.1);
    let h = rng.gen_range(params.room_height.0..=params.room_height.1);

    // 0 = top, 1 = bottom, 2 = left, 3 = right
    let side = rng.gen_range(0..4);

    // Corridor cells run from the base room's edge to the new room's edge;
    // the room rectangle is aligned so the corridor meets its near side.
    let (corridor, room_x, room_y) = match side {
        0 => {
            let cx = rng.gen_range(base.x..base.x + base.width);
            if base.y < len + h + 1 {
                return None;
            }
            let cells: Vec<(usize, usize)> = (1..=len).map(|d| (cx, base.y - d)).collect();
            let offset = rng.gen_range(0..w);
            if cx < offset {
                return None;
            }
            (cells, cx - offset, base.y - len - h)
        }
        1 => {
            let cx = rng.gen_range(base.x..base.x + base.width);
            let start = base.y + base.height;
            if start + len + h + 1 > grid.height {
                return None;
            }
            let cells: Vec<(usize, usize)> = (0..len).map(|d| (cx, start + d)).collect();
            let offset = rng.gen_range(0..w);
            if cx < offset {
                return None;
            }
            (cells, cx - offset, start + len)
        }
        2 => {
            let cy = rng.gen_range(base.y..base.y + base.height);
            if base.x < len + w + 1 {
                return None;
            }
            let cells: Vec<(usize, usize)> = (1..=len).map(|d| (base.x - d, cy)).collect();
            let offset = rng.gen_range(0..h);
            if cy < offset {
                return None;
            }
            (cells, base.x - len - w, cy - offset)
        }
        _ => {
            let cy = rng.gen_range(base.y..base.y + base.height);
            let start = base.x + base.width;
            if start + len + w + 1 > grid.width {
                return None;
            }
            let cells: Vec<(usize, usize)> = (0..len).map(|d| (start + d, cy)).collect();
            let offset = rng.gen_range(0..h);
            if cy < offset {
                return None;
            }
            (cells, start + len, cy - offset)
        }
    };

    // Keep a rock ring at the canvas edge so every room reads as walled
    if room_x < 1
        || room_y < 1
        || room_x + w + 1 > grid.width
        || room_y + h + 1 > grid.height
    {
        return None;
    }

    // The new room, padded by one cell, must not touch anything already dug
    for y in room_y - 1..room_y + h + 1 {
        for x in room_x - 1..room_x + w + 1 {
            if grid.get(x, y).is_floor_like() {
                return None;
            }
        }
    }
    for &(cx, cy) in &corridor {
        if grid.get(cx, cy).is_floor_like() {
            return None;
        }
    }

    // Commit: corridor first (junction cells become doors), then the room
    for (i, &(cx, cy)) in corridor.iter().enumerate() {
        let junction = i == 0 || i == corridor.len() - 1;
        layout
            .grid
            .set(cx, cy, if junction { Tile::Door } else { Tile::Floor });
        if junction {
            layout.doors.push(Door { x: cx, y: cy });
        }
    }
    carve_room(&mut layout.grid, room_x, room_y, w, h);
    let id = layout.rooms.len();
    layout.rooms.push(Room::new(id, room_x, room_y, w, h));

    Some(w * h + corridor.len())
}

fn carve_room(grid: &mut Tilemap<Tile>, x: usize, y: usize, w: usize, h: usize) {
    for cy in y..y + h {
        for cx in x..x + w {
            grid.set(cx, cy, Tile::Floor);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use std::collections::VecDeque;

    fn floor_count(grid: &Tilemap<Tile>) -> usize {
        grid.iter().filter(|(_, _, t)| t.is_floor_like()).count()
    }

    #[test]
    fn test_digs_multiple_connected_rooms() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let layout = generate_dungeon(40, 30, &DungeonParams::default(), &mut rng);

        assert!(layout.rooms.len() >= 4);
        assert!(!layout.doors.is_empty());

        // Every dug cell is reachable from the first room's center
        let total = floor_count(&layout.grid);
        let (sx, sy) = layout.rooms[0].center();
        let mut visited = Tilemap::new_with(40, 30, false);
        let mut queue = VecDeque::new();
        queue.push_back((sx, sy));
        visited.set(sx, sy, true);
        let mut reached = 0;
        while let Some((x, y)) = queue.pop_front() {
            reached += 1;
            for (nx, ny) in layout.grid.neighbors(x, y) {
                if layout.grid.get(nx, ny).is_floor_like() && !*visited.get(nx, ny) {
                    visited.set(nx, ny, true);
                    queue.push_back((nx, ny));
                }
            }
        }
        assert_eq!(reached, total);
    }

    #[test]
    fn test_dug_fraction_is_substantial() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let layout = generate_dungeon(40, 30, &DungeonParams::default(), &mut rng);

        let dug = floor_count(&layout.grid);
        assert!(dug >= 40 * 30 / 5, "only {} cells dug", dug);
        assert!(dug <= 40 * 30 * 11 / 20);
    }

    #[test]
    fn test_rooms_stay_inside_the_wall_ring() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let layout = generate_dungeon(36, 28, &DungeonParams::default(), &mut rng);

        for room in &layout.rooms {
            assert!(room.x >= 1 && room.y >= 1);
            assert!(room.x + room.width <= 35);
            assert!(room.y + room.height <= 27);
        }
    }

    #[test]
    fn test_doors_sit_on_door_tiles_between_floors() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let layout = generate_dungeon(40, 30, &DungeonParams::default(), &mut rng);

        for door in &layout.doors {
            assert_eq!(*layout.grid.get(door.x, door.y), Tile::Door);
            // A junction door always touches at least one other dug cell
            let open_neighbors = layout
                .grid
                .neighbors(door.x, door.y)
                .into_iter()
                .filter(|&(nx, ny)| layout.grid.get(nx, ny).is_floor_like())
                .count();
            assert!(open_neighbors >= 2);
        }
    }

    #[test]
    fn test_tiny_canvas_degrades_to_empty_layout() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let layout = generate_dungeon(5, 4, &DungeonParams::default(), &mut rng);

        assert!(layout.rooms.is_empty());
        assert!(layout.doors.is_empty());
        assert_eq!(floor_count(&layout.grid), 0);
    }
}
