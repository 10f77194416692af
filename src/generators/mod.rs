//! Map layout generators
//!
//! One generator per archetype, all producing the same layout contract:
//!
//! - Room-and-corridor digging for dungeons
//! - Cellular automata for caves (rooms synthesized by flood fill)
//! - Street/block subdivision for settlements
//! - BSP partitioning for building interiors

pub mod building;
pub mod cave;
pub mod dungeon;
pub mod town;

use rand_chacha::ChaCha8Rng;

use crate::archetype::Archetype;
use crate::geometry::{Door, Room};
use crate::rooms::extract_rooms;
use crate::tilemap::Tilemap;
use crate::tiles::Tile;

use building::BuildingParams;
use cave::CaveParams;
use dungeon::DungeonParams;
use town::TownParams;

/// Result of a layout pass: the populated grid plus the room and door
/// records carved into it.
pub struct Layout {
    pub grid: Tilemap<Tile>,
    pub rooms: Vec<Room>,
    pub doors: Vec<Door>,
}

impl Layout {
    pub fn empty(width: usize, height: usize, ground: Tile) -> Self {
        Self {
            grid: Tilemap::new_with(width, height, ground),
            rooms: Vec::new(),
            doors: Vec::new(),
        }
    }
}

/// Run the generator for an archetype. Caves carry no intrinsic room
/// structure, so their rooms come from the flood-fill extractor instead of
/// the generator itself.
pub fn build_layout(
    archetype: Archetype,
    width: usize,
    height: usize,
    rng: &mut ChaCha8Rng,
) -> Layout {
    match archetype {
        Archetype::Dungeon => {
            dungeon::generate_dungeon(width, height, &DungeonParams::default(), rng)
        }
        Archetype::Cave => {
            let mut layout = cave::generate_cave(width, height, &CaveParams::default(), rng);
            layout.rooms = extract_rooms(&layout.grid);
            layout
        }
        Archetype::Town => town::generate_town(width, height, &TownParams::default(), rng),
        Archetype::Building => {
            building::generate_building(width, height, &BuildingParams::default(), rng)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_build_layout_matches_requested_size() {
        let mut rng = ChaCha8Rng::seed_from_u64(99);

        for archetype in [
            Archetype::Dungeon,
            Archetype::Cave,
            Archetype::Town,
            Archetype::Building,
        ] {
            let layout = build_layout(archetype, 30, 24, &mut rng);
            assert_eq!(layout.grid.width, 30);
            assert_eq!(layout.grid.height, 24);
        }
    }

    #[test]
    fn test_cave_layout_gets_extracted_rooms() {
        let mut rng = ChaCha8Rng::seed_from_u64(12345);
        let layout = build_layout(Archetype::Cave, 40, 30, &mut rng);

        assert!(!layout.rooms.is_empty());
        assert!(layout.doors.is_empty());
    }
}
