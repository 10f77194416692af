//! Map archetype selection
//!
//! The archetype is a closed set of generation strategies; dispatch is an
//! exhaustive match everywhere, so adding a new archetype surfaces every
//! site that needs a decision.

/// Map family / generation strategy
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Archetype {
    /// Room-and-corridor dungeon
    Dungeon,
    /// Cellular-automaton cavern
    Cave,
    /// Open-air settlement with streets and buildings
    Town,
    /// Single building interior
    Building,
}

impl Archetype {
    /// Parse a request tag. Unknown tags fall back to the dungeon generator.
    pub fn from_tag(tag: &str) -> Self {
        match tag.to_ascii_lowercase().as_str() {
            "dungeon" | "crypt" => Archetype::Dungeon,
            "cave" | "cavern" | "grotto" => Archetype::Cave,
            "town" | "city" | "village" | "settlement" => Archetype::Town,
            "building" | "interior" | "house" | "tavern" => Archetype::Building,
            _ => Archetype::Dungeon,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Archetype::Dungeon => "dungeon",
            Archetype::Cave => "cave",
            Archetype::Town => "town",
            Archetype::Building => "building",
        }
    }

    /// Open-air maps ship with token vision and fog exploration disabled.
    pub fn is_outdoor(&self) -> bool {
        matches!(self, Archetype::Town)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_tag_known() {
        assert_eq!(Archetype::from_tag("dungeon"), Archetype::Dungeon);
        assert_eq!(Archetype::from_tag("Cave"), Archetype::Cave);
        assert_eq!(Archetype::from_tag("CITY"), Archetype::Town);
        assert_eq!(Archetype::from_tag("interior"), Archetype::Building);
    }

    #[test]
    fn test_unknown_tag_falls_back_to_dungeon() {
        assert_eq!(Archetype::from_tag("other"), Archetype::Dungeon);
        assert_eq!(Archetype::from_tag(""), Archetype::Dungeon);
        assert_eq!(Archetype::from_tag("spaceship"), Archetype::Dungeon);
    }

    #[test]
    fn test_only_town_is_outdoor() {
        assert!(Archetype::Town.is_outdoor());
        assert!(!Archetype::Dungeon.is_outdoor());
        assert!(!Archetype::Cave.is_outdoor());
        assert!(!Archetype::Building.is_outdoor());
    }
}
