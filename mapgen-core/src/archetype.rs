use crate::types::{CellState, MapKind};

use serde::Serialize;

/// Tile names a decoration layer uses for each cell state of one kind of map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MapArchetype {
    pub name: &'static str,
    pub kind: MapKind,
    pub ground: &'static str,
    pub wall: &'static str,
    pub water: &'static str,
    pub road: &'static str,
    pub house: &'static str,
    pub castle: &'static str,
    pub gate: &'static str,
}

impl MapArchetype {
    pub fn tile_for(&self, state: CellState) -> &'static str {
        match state {
            CellState::Wall => self.wall,
            CellState::Ground => self.ground,
            CellState::Road => self.road,
            CellState::Water => self.water,
            CellState::House => self.house,
            CellState::Castle => self.castle,
            CellState::Gate => self.gate,
        }
    }
}

const BUILTIN_ARCHETYPES: [MapArchetype; 5] = [
    MapArchetype {
        name: "grassland",
        kind: MapKind::World,
        ground: "grass",
        wall: "mountain",
        water: "sea",
        road: "trail",
        house: "village",
        castle: "keep",
        gate: "border",
    },
    MapArchetype {
        name: "village",
        kind: MapKind::Town,
        ground: "dirt",
        wall: "fence",
        water: "canal",
        road: "cobblestone",
        house: "cottage",
        castle: "manor",
        gate: "wooden-gate",
    },
    MapArchetype {
        name: "fortress-town",
        kind: MapKind::Town,
        ground: "flagstone",
        wall: "rampart",
        water: "moat",
        road: "paved-road",
        house: "townhouse",
        castle: "citadel",
        gate: "portcullis",
    },
    MapArchetype {
        name: "cave",
        kind: MapKind::Dungeon,
        ground: "cave-floor",
        wall: "rock",
        water: "underground-lake",
        road: "tunnel",
        house: "camp",
        castle: "lair",
        gate: "boulder",
    },
    MapArchetype {
        name: "crypt",
        kind: MapKind::Dungeon,
        ground: "tile-floor",
        wall: "brick",
        water: "sewer",
        road: "passage",
        house: "tomb",
        castle: "sanctum",
        gate: "iron-door",
    },
];

/// Lookup from a map kind to the archetypes available for it, in
/// registration order.
#[derive(Debug, Clone, Default)]
pub struct ArchetypeTable {
    world: Vec<MapArchetype>,
    town: Vec<MapArchetype>,
    dungeon: Vec<MapArchetype>,
}

impl ArchetypeTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builtin() -> Self {
        let mut table = Self::new();

        for archetype in BUILTIN_ARCHETYPES {
            table.register(archetype);
        }

        table
    }

    pub fn register(&mut self, archetype: MapArchetype) {
        self.list_mut(archetype.kind).push(archetype);
    }

    pub fn lookup(&self, kind: MapKind) -> &[MapArchetype] {
        match kind {
            MapKind::World => &self.world,
            MapKind::Town => &self.town,
            MapKind::Dungeon => &self.dungeon,
        }
    }

    pub fn find(&self, kind: MapKind, name: &str) -> Option<&MapArchetype> {
        self.lookup(kind)
            .iter()
            .find(|archetype| archetype.name == name)
    }

    fn list_mut(&mut self, kind: MapKind) -> &mut Vec<MapArchetype> {
        match kind {
            MapKind::World => &mut self.world,
            MapKind::Town => &mut self.town,
            MapKind::Dungeon => &mut self.dungeon,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_builtin_covers_every_kind() {
        let table = ArchetypeTable::builtin();

        for kind in [MapKind::World, MapKind::Town, MapKind::Dungeon] {
            let archetypes = table.lookup(kind);
            assert!(!archetypes.is_empty());
            assert!(archetypes.iter().all(|archetype| archetype.kind == kind));
        }

        assert_eq!(table.lookup(MapKind::Town).len(), 2);
    }

    #[test]
    fn test_register_and_find() {
        let mut table = ArchetypeTable::new();
        assert!(table.lookup(MapKind::Dungeon).is_empty());

        let mut archetype = BUILTIN_ARCHETYPES[3];
        archetype.name = "mine";
        table.register(archetype);

        let found = table.find(MapKind::Dungeon, "mine").unwrap();
        assert_eq!(found.tile_for(CellState::Wall), "rock");
        assert_eq!(found.tile_for(CellState::Road), "tunnel");
        assert!(table.find(MapKind::World, "mine").is_none());
    }
}
