//! Room and door records shared by the generators and downstream passes.

use serde::Serialize;

/// A rectangular room in grid-cell units.
///
/// For dug/partitioned archetypes the rectangle is the carved region; for
/// caves it is the bounding box of a flood-filled floor component. The
/// center is the bounding-box midpoint, fixed at construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: usize,
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
    pub center_x: usize,
    pub center_y: usize,
}

impl Room {
    pub fn new(id: usize, x: usize, y: usize, width: usize, height: usize) -> Self {
        assert!(width >= 1 && height >= 1, "room must span at least one cell");
        Self {
            id,
            x,
            y,
            width,
            height,
            center_x: x + width / 2,
            center_y: y + height / 2,
        }
    }

    pub fn center(&self) -> (usize, usize) {
        (self.center_x, self.center_y)
    }

    pub fn contains(&self, x: usize, y: usize) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }

    pub fn area(&self) -> usize {
        self.width * self.height
    }
}

/// A single passable cell that interrupts a wall.
///
/// Doors are recorded once during carving; the wall deriver consults them
/// read-only to flag adjacent segments.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Door {
    pub x: usize,
    pub y: usize,
}
