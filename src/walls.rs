//! Wall derivation and collinear merging
//!
//! Walls are not stored in the grid; they are inferred from it. Every edge
//! between a floor-like cell and a wall-like (or out-of-bounds) cell becomes
//! a 1-cell segment in pixel space, and contiguous same-flag segments are
//! then fused into longer runs. Door cells flag their jamb segments so the
//! tabletop importer can open them independently.

use std::collections::{BTreeMap, HashSet};

use serde::ser::Serializer;
use serde::Serialize;

use crate::geometry::Door;
use crate::tilemap::Tilemap;
use crate::tiles::Tile;

/// Door state codes of the tabletop import schema.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DoorState {
    Closed = 0,
    Open = 1,
    Locked = 2,
}

// The wire format wants the numeric code, not the variant name
impl Serialize for DoorState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(*self as u8)
    }
}

/// One wall segment in pixel coordinates.
///
/// Endpoints are normalized: horizontal runs left to right, vertical runs
/// top to bottom.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WallSegment {
    /// [x0, y0, x1, y1] in pixels
    pub endpoints: [i32; 4],
    pub blocks_movement: bool,
    pub blocks_vision: bool,
    pub blocks_sound: bool,
    pub blocks_light: bool,
    pub is_door: bool,
    pub door_state: DoorState,
}

impl WallSegment {
    /// Build a segment with the blocking flags implied by its door status:
    /// walls block everything, doors stay opaque to nothing but movement
    /// and sound while closed.
    pub fn new(endpoints: [i32; 4], is_door: bool) -> Self {
        Self {
            endpoints,
            blocks_movement: true,
            blocks_vision: !is_door,
            blocks_sound: true,
            blocks_light: !is_door,
            is_door,
            door_state: DoorState::Closed,
        }
    }

    pub fn is_horizontal(&self) -> bool {
        self.endpoints[1] == self.endpoints[3]
    }

    fn blocking_flags(&self) -> (bool, bool, bool, bool) {
        (
            self.blocks_movement,
            self.blocks_vision,
            self.blocks_sound,
            self.blocks_light,
        )
    }
}

/// Derive wall segments from a tile grid.
///
/// Every floor-like cell contributes the edges on which it meets a
/// wall-like or out-of-bounds neighbor. Each geometric edge is emitted at
/// most once; edges touching a registered door cell carry the door flag.
pub fn derive_walls(grid: &Tilemap<Tile>, doors: &[Door], cell_size: usize) -> Vec<WallSegment> {
    let door_cells: HashSet<(usize, usize)> = doors.iter().map(|d| (d.x, d.y)).collect();
    let mut seen: HashSet<[i32; 4]> = HashSet::new();
    let mut segments = Vec::new();

    for (x, y, tile) in grid.iter() {
        if !tile.is_floor_like() {
            continue;
        }

        // (dx, dy, edge endpoints in cell units)
        let edges = [
            (0i32, -1i32, [x, y, x + 1, y]),
            (0, 1, [x, y + 1, x + 1, y + 1]),
            (-1, 0, [x, y, x, y + 1]),
            (1, 0, [x + 1, y, x + 1, y + 1]),
        ];

        for (dx, dy, corners) in edges {
            let nx = x as i32 + dx;
            let ny = y as i32 + dy;
            let blocked = !grid.in_bounds(nx, ny)
                || grid.get(nx as usize, ny as usize).is_wall_like();
            if !blocked {
                continue;
            }

            let endpoints = [
                (corners[0] * cell_size) as i32,
                (corners[1] * cell_size) as i32,
                (corners[2] * cell_size) as i32,
                (corners[3] * cell_size) as i32,
            ];
            if !seen.insert(endpoints) {
                continue;
            }

            let is_door = door_cells.contains(&(x, y))
                || (grid.in_bounds(nx, ny) && door_cells.contains(&(nx as usize, ny as usize)));
            segments.push(WallSegment::new(endpoints, is_door));
        }
    }

    segments
}

/// Fuse consecutive collinear segments with matching flags into longer runs.
///
/// Doors pass through untouched so each stays independently openable.
/// Buckets are keyed through a BTreeMap, so output order is deterministic
/// for a given input set.
pub fn merge_walls(segments: Vec<WallSegment>) -> Vec<WallSegment> {
    type Bucket = BTreeMap<(i32, (bool, bool, bool, bool)), Vec<WallSegment>>;

    let mut horizontal: Bucket = BTreeMap::new();
    let mut vertical: Bucket = BTreeMap::new();
    let mut doors = Vec::new();

    for seg in segments {
        if seg.is_door {
            doors.push(seg);
        } else if seg.is_horizontal() {
            horizontal
                .entry((seg.endpoints[1], seg.blocking_flags()))
                .or_default()
                .push(seg);
        } else {
            vertical
                .entry((seg.endpoints[0], seg.blocking_flags()))
                .or_default()
                .push(seg);
        }
    }

    let mut merged = Vec::new();
    for (bucket, varying_start, varying_end) in [(horizontal, 0, 2), (vertical, 1, 3)] {
        for (_, mut runs) in bucket {
            runs.sort_by_key(|s| s.endpoints[varying_start]);

            let mut current: Option<WallSegment> = None;
            for seg in runs {
                match current.as_mut() {
                    Some(run) if run.endpoints[varying_end] == seg.endpoints[varying_start] => {
                        run.endpoints[varying_end] = seg.endpoints[varying_end];
                    }
                    _ => {
                        if let Some(run) = current.take() {
                            merged.push(run);
                        }
                        current = Some(seg);
                    }
                }
            }
            if let Some(run) = current.take() {
                merged.push(run);
            }
        }
    }

    merged.extend(doors);
    merged
}
