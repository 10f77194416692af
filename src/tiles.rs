//! Cell codes for battlemap grids
//!
//! One enum covers every archetype; the predicates split the codes into the
//! two categories the downstream passes care about (wall-like vs floor-like).

/// Content of a single grid cell
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Tile {
    /// Solid rock (undug dungeon/cave ground)
    #[default]
    Rock,
    /// Walkable dungeon/cave floor
    Floor,
    /// Passable cell that interrupts a wall run
    Door,

    // === Settlement ===
    /// Cobbled street between blocks
    Street,
    /// Open paved square
    Plaza,
    /// Park or green block
    Grass,
    /// Pond/fountain water feature
    Water,
    /// Market stall
    Market,

    // === Buildings ===
    /// Building perimeter or partition wall
    BuildingWall,
    /// Interior plank floor
    BuildingFloor,
    /// Table/crate/shelf marker
    Furniture,
    /// Fireplace marker
    Hearth,
    /// Ground outside a building's walls
    Exterior,
}

impl Tile {
    /// Check if this cell blocks movement and sight.
    pub fn is_wall_like(&self) -> bool {
        matches!(self, Tile::Rock | Tile::BuildingWall)
    }

    /// Check if this cell is passable ground. Decorative codes (furniture,
    /// hearth, market stalls, water) count as floor; they only differ in
    /// rendering.
    pub fn is_floor_like(&self) -> bool {
        !self.is_wall_like()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wall_like_codes() {
        assert!(Tile::Rock.is_wall_like());
        assert!(Tile::BuildingWall.is_wall_like());
        assert!(!Tile::Floor.is_wall_like());
        assert!(!Tile::Door.is_wall_like());
    }

    #[test]
    fn test_decorative_codes_are_floor_like() {
        for tile in [
            Tile::Floor,
            Tile::Door,
            Tile::Street,
            Tile::Plaza,
            Tile::Grass,
            Tile::Water,
            Tile::Market,
            Tile::BuildingFloor,
            Tile::Furniture,
            Tile::Hearth,
            Tile::Exterior,
        ] {
            assert!(tile.is_floor_like(), "{:?} should be floor-like", tile);
        }
    }

    #[test]
    fn test_categories_are_exclusive() {
        for tile in [Tile::Rock, Tile::Floor, Tile::BuildingWall, Tile::Exterior] {
            assert_ne!(tile.is_wall_like(), tile.is_floor_like());
        }
    }
}
