//! Render one sample map per archetype
//!
//! Debug tool for eyeballing all four palettes side by side. Each archetype
//! renders on its own rayon worker since generations share no state.

use rayon::prelude::*;

use battlemap_generator::archetype::Archetype;
use battlemap_generator::generate::{generate_seeded, MapRequest};

fn main() {
    let jobs = [
        (Archetype::Dungeon, "sample_dungeon.png"),
        (Archetype::Cave, "sample_cave.png"),
        (Archetype::Town, "sample_town.png"),
        (Archetype::Building, "sample_building.png"),
    ];

    jobs.into_par_iter().for_each(|(archetype, path)| {
        let request = MapRequest {
            archetype,
            width: 48,
            height: 36,
            cell_size: 32,
            name: format!("Sample {}", archetype.display_name()),
        };

        let map = generate_seeded(&request, 12345);
        map.image.save(path).unwrap();

        println!(
            "{}: {} rooms, {} wall segments, {} lights -> {}",
            archetype.display_name(),
            map.rooms.len(),
            map.scene.walls.len(),
            map.scene.lights.len(),
            path
        );
    });
}
