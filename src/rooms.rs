//! Room extraction for cave layouts
//!
//! Cave generation produces raw floor cells with no room structure; this
//! pass finds maximal 4-connected floor components and promotes the large
//! ones to rooms. Small pockets stay unlabeled floor (still rendered, never
//! lit or used for placement).

use std::collections::VecDeque;

use crate::geometry::Room;
use crate::tilemap::Tilemap;
use crate::tiles::Tile;

/// Components below this size are left as unlabeled floor.
pub const MIN_ROOM_CELLS: usize = 6;

/// Find connected floor components and synthesize a room per component of
/// at least [`MIN_ROOM_CELLS`] cells. Room ids are assigned in scan order;
/// the room rectangle is the component's bounding box.
pub fn extract_rooms(grid: &Tilemap<Tile>) -> Vec<Room> {
    let mut visited = Tilemap::new_with(grid.width, grid.height, false);
    let mut rooms = Vec::new();
    let mut next_id = 0;

    for y in 0..grid.height {
        for x in 0..grid.width {
            if *visited.get(x, y) || !grid.get(x, y).is_floor_like() {
                continue;
            }

            // Found a new component - BFS to collect its extent
            let mut queue = VecDeque::new();
            queue.push_back((x, y));
            visited.set(x, y, true);

            let mut tile_count = 0usize;
            let (mut min_x, mut min_y) = (x, y);
            let (mut max_x, mut max_y) = (x, y);

            while let Some((cx, cy)) = queue.pop_front() {
                tile_count += 1;
                min_x = min_x.min(cx);
                min_y = min_y.min(cy);
                max_x = max_x.max(cx);
                max_y = max_y.max(cy);

                for (nx, ny) in grid.neighbors(cx, cy) {
                    if grid.get(nx, ny).is_floor_like() && !*visited.get(nx, ny) {
                        visited.set(nx, ny, true);
                        queue.push_back((nx, ny));
                    }
                }
            }

            if tile_count >= MIN_ROOM_CELLS {
                rooms.push(Room::new(
                    next_id,
                    min_x,
                    min_y,
                    max_x - min_x + 1,
                    max_y - min_y + 1,
                ));
                next_id += 1;
            }
        }
    }

    rooms
}
