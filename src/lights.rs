//! Light placement
//!
//! Every room gets one warm light at its center; big rooms get four extra
//! corner lights so their edges do not fall into darkness. Radii are in
//! grid cells, positions in pixels, matching the tabletop import schema.

use serde::Serialize;

use crate::geometry::Room;

/// Rooms at least this wide and tall get corner lights.
const CORNER_LIGHT_MIN_WIDTH: usize = 6;
const CORNER_LIGHT_MIN_HEIGHT: usize = 5;

/// Dim radius is capped so huge halls keep pools of shadow.
const MAX_DIM_RADIUS: usize = 8;

const LIGHT_COLOR: &str = "#e8c170";
const LIGHT_ALPHA: f32 = 0.4;

#[derive(Clone, Debug, Serialize)]
pub struct AnimationProfile {
    #[serde(rename = "type")]
    pub kind: String,
    pub speed: u32,
    pub intensity: u32,
}

impl AnimationProfile {
    fn torch() -> Self {
        Self {
            kind: "torch".to_string(),
            speed: 3,
            intensity: 4,
        }
    }
}

/// A point light in pixel coordinates with radii in grid cells.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LightSource {
    pub x: i32,
    pub y: i32,
    pub dim_radius: usize,
    pub bright_radius: usize,
    pub angle: u32,
    pub color: String,
    pub alpha: f32,
    pub animation_profile: AnimationProfile,
}

fn light_at(cell_x: usize, cell_y: usize, cell_size: usize, dim: usize, bright: usize) -> LightSource {
    LightSource {
        x: (cell_x * cell_size + cell_size / 2) as i32,
        y: (cell_y * cell_size + cell_size / 2) as i32,
        dim_radius: dim,
        bright_radius: bright,
        angle: 360,
        color: LIGHT_COLOR.to_string(),
        alpha: LIGHT_ALPHA,
        animation_profile: AnimationProfile::torch(),
    }
}

/// Place lights for a room list. One primary light per room center; rooms
/// of at least 6x5 cells also get four corner lights inset one cell from
/// each corner.
pub fn place_lights(rooms: &[Room], cell_size: usize) -> Vec<LightSource> {
    let mut lights = Vec::new();

    for room in rooms {
        let dim = room.width.max(room.height).min(MAX_DIM_RADIUS);
        let bright = (dim / 2).max(2);
        lights.push(light_at(room.center_x, room.center_y, cell_size, dim, bright));

        if room.width >= CORNER_LIGHT_MIN_WIDTH && room.height >= CORNER_LIGHT_MIN_HEIGHT {
            let corners = [
                (room.x + 1, room.y + 1),
                (room.x + room.width - 2, room.y + 1),
                (room.x + 1, room.y + room.height - 2),
                (room.x + room.width - 2, room.y + room.height - 2),
            ];
            for (cx, cy) in corners {
                lights.push(light_at(cx, cy, cell_size, 4, 2));
            }
        }
    }

    lights
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_room_gets_one_light() {
        let rooms = [Room::new(0, 2, 2, 4, 4)];
        let lights = place_lights(&rooms, 100);

        assert_eq!(lights.len(), 1);
        // Center cell (4,4), pixel center 450
        assert_eq!(lights[0].x, 450);
        assert_eq!(lights[0].y, 450);
        assert_eq!(lights[0].dim_radius, 4);
        assert_eq!(lights[0].bright_radius, 2);
    }

    #[test]
    fn test_large_room_gets_corner_lights() {
        let rooms = [Room::new(0, 0, 0, 6, 5)];
        let lights = place_lights(&rooms, 10);

        assert_eq!(lights.len(), 5);

        let corners: Vec<(i32, i32)> = lights[1..].iter().map(|l| (l.x, l.y)).collect();
        assert!(corners.contains(&(15, 15)));
        assert!(corners.contains(&(45, 15)));
        assert!(corners.contains(&(15, 35)));
        assert!(corners.contains(&(45, 35)));

        for corner in &lights[1..] {
            assert_eq!(corner.dim_radius, 4);
            assert_eq!(corner.bright_radius, 2);
        }
    }

    #[test]
    fn test_dim_radius_is_capped() {
        let rooms = [Room::new(0, 0, 0, 12, 9)];
        let lights = place_lights(&rooms, 10);

        assert_eq!(lights[0].dim_radius, 8);
        assert_eq!(lights[0].bright_radius, 4);
    }

    #[test]
    fn test_bright_radius_has_a_floor() {
        let rooms = [Room::new(0, 0, 0, 3, 3)];
        let lights = place_lights(&rooms, 10);

        assert_eq!(lights.len(), 1);
        assert_eq!(lights[0].dim_radius, 3);
        assert_eq!(lights[0].bright_radius, 2);
    }

    #[test]
    fn test_animation_profile_serializes_with_type_key() {
        let json = serde_json::to_string(&AnimationProfile::torch()).unwrap();
        assert!(json.contains("\"type\":\"torch\""));
        assert!(json.contains("\"speed\":3"));
        assert!(json.contains("\"intensity\":4"));
    }
}
