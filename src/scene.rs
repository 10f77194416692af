//! Scene descriptor for the tabletop import schema
//!
//! The descriptor aggregates everything a virtual tabletop needs to load
//! the map: pixel dimensions, grid config, walls, lights and the fog/vision
//! defaults. Serialization must match the import schema verbatim, so every
//! struct renames to camelCase and door states stay numeric.

use serde::Serialize;

use crate::archetype::Archetype;
use crate::lights::LightSource;
use crate::walls::WallSegment;

const BACKGROUND_COLOR: &str = "#0d0d0f";
const GRID_LINE_COLOR: &str = "#000000";
const GRID_LINE_ALPHA: f32 = 0.2;

/// Square-grid configuration block.
#[derive(Clone, Debug, Serialize)]
pub struct GridConfig {
    /// 1 = square grid
    #[serde(rename = "type")]
    pub kind: u32,
    pub size: usize,
    pub color: String,
    pub alpha: f32,
}

impl GridConfig {
    fn square(cell_size: usize) -> Self {
        Self {
            kind: 1,
            size: cell_size,
            color: GRID_LINE_COLOR.to_string(),
            alpha: GRID_LINE_ALPHA,
        }
    }
}

/// The full scene export consumed by the tabletop importer.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneDescriptor {
    pub name: String,
    /// Pixel dimensions of the map canvas
    pub width: u32,
    pub height: u32,
    pub padding: f32,
    pub background_color: String,
    pub grid: GridConfig,
    pub token_vision: bool,
    pub fog_exploration: bool,
    pub walls: Vec<WallSegment>,
    pub lights: Vec<LightSource>,
}

impl SceneDescriptor {
    /// Assemble a descriptor. Open-air archetypes ship with token vision
    /// and fog exploration disabled.
    pub fn new(
        name: &str,
        grid_width: usize,
        grid_height: usize,
        cell_size: usize,
        archetype: Archetype,
        walls: Vec<WallSegment>,
        lights: Vec<LightSource>,
    ) -> Self {
        let indoor = !archetype.is_outdoor();
        Self {
            name: name.to_string(),
            width: (grid_width * cell_size) as u32,
            height: (grid_height * cell_size) as u32,
            padding: 0.0,
            background_color: BACKGROUND_COLOR.to_string(),
            grid: GridConfig::square(cell_size),
            token_vision: indoor,
            fog_exploration: indoor,
            walls,
            lights,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_dimensions_scale_with_cell_size() {
        let scene = SceneDescriptor::new("Crypt", 40, 30, 100, Archetype::Dungeon, vec![], vec![]);
        assert_eq!(scene.width, 4000);
        assert_eq!(scene.height, 3000);
        assert_eq!(scene.grid.size, 100);
    }

    #[test]
    fn test_outdoor_maps_disable_vision_and_fog() {
        let town = SceneDescriptor::new("Market", 50, 40, 100, Archetype::Town, vec![], vec![]);
        assert!(!town.token_vision);
        assert!(!town.fog_exploration);

        let crypt = SceneDescriptor::new("Crypt", 40, 30, 100, Archetype::Dungeon, vec![], vec![]);
        assert!(crypt.token_vision);
        assert!(crypt.fog_exploration);
    }

    #[test]
    fn test_json_matches_the_import_schema() {
        use crate::lights::place_lights;
        use crate::geometry::Room;

        let walls = vec![WallSegment::new([0, 0, 100, 0], true)];
        let lights = place_lights(&[Room::new(0, 1, 1, 3, 3)], 100);
        let scene = SceneDescriptor::new("Crypt", 20, 20, 100, Archetype::Dungeon, walls, lights);

        let json = serde_json::to_string(&scene).unwrap();
        assert!(json.contains("\"backgroundColor\""));
        assert!(json.contains("\"tokenVision\":true"));
        assert!(json.contains("\"fogExploration\":true"));
        assert!(json.contains("\"type\":1"));
        assert!(json.contains("\"blocksMovement\":true"));
        assert!(json.contains("\"blocksVision\":false"));
        assert!(json.contains("\"isDoor\":true"));
        assert!(json.contains("\"doorState\":0"));
        assert!(json.contains("\"dimRadius\":3"));
        assert!(json.contains("\"animationProfile\""));
    }
}
