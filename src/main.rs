use std::fs;

use clap::Parser;

use battlemap_generator::archetype::Archetype;
use battlemap_generator::generate::{generate_seeded, MapRequest};
use battlemap_generator::scene::SceneDescriptor;

#[derive(Parser, Debug)]
#[command(name = "battlemap_generator")]
#[command(about = "Generate procedural battlemaps with walls, doors and lighting")]
struct Args {
    /// Map archetype: dungeon, cave, town or building (unknown tags fall back to dungeon)
    #[arg(short = 'a', long, default_value = "dungeon")]
    archetype: String,

    /// Width of the map in grid cells (clamped to 20-80)
    #[arg(short = 'W', long, default_value = "40")]
    width: usize,

    /// Height of the map in grid cells (clamped to 20-80)
    #[arg(short = 'H', long, default_value = "30")]
    height: usize,

    /// Size of one grid cell in pixels
    #[arg(long, default_value = "100")]
    cell_size: usize,

    /// Display name of the scene
    #[arg(short = 'n', long)]
    name: Option<String>,

    /// Random seed (uses random seed if not specified)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Output path for the map image
    #[arg(short = 'o', long, default_value = "map.png")]
    output: String,

    /// Export the scene descriptor to JSON (specify output path)
    #[arg(long)]
    export_scene: Option<String>,
}

fn main() {
    let args = Args::parse();

    let archetype = Archetype::from_tag(&args.archetype);
    let seed = args.seed.unwrap_or_else(|| rand::random());
    let name = args
        .name
        .clone()
        .unwrap_or_else(|| format!("Untitled {}", archetype.display_name()));

    println!("Generating {} map with seed: {}", archetype.display_name(), seed);
    println!("Grid size: {}x{} cells at {} px per cell", args.width, args.height, args.cell_size);

    let request = MapRequest {
        archetype,
        width: args.width,
        height: args.height,
        cell_size: args.cell_size,
        name,
    };
    let map = generate_seeded(&request, seed);

    println!("Placed {} rooms and {} doors", map.rooms.len(), map.doors.len());
    println!(
        "Scene: {} wall segments, {} lights, {}x{} px canvas",
        map.scene.walls.len(),
        map.scene.lights.len(),
        map.scene.width,
        map.scene.height,
    );

    match map.image.save(&args.output) {
        Ok(()) => println!("Saved map image to: {}", args.output),
        Err(e) => eprintln!("Failed to save map image: {}", e),
    }

    if let Some(ref path) = args.export_scene {
        match export_scene_json(&map.scene, path) {
            Ok(()) => println!("Saved scene descriptor to: {}", path),
            Err(e) => eprintln!("Failed to export scene descriptor: {}", e),
        }
    }
}

/// Write the scene descriptor as pretty-printed JSON
fn export_scene_json(scene: &SceneDescriptor, path: &str) -> std::io::Result<()> {
    let json = serde_json::to_string_pretty(scene)?;
    fs::write(path, json)
}
