use crate::types::Direction;

// Smallest width or height a region may have after a split.
pub(crate) const AREA_MIN_SIZE: u32 = 8;
// Smallest width or height of a room carved inside a region.
pub(crate) const ROOM_MIN_SIZE: u32 = 3;

// Rooms keep at least one cell of margin on the low side and two on the
// high side of their region.
pub(crate) const ROOM_LOW_MARGIN: u32 = 1;
pub(crate) const ROOM_HIGH_MARGIN: u32 = 2;

pub(crate) const EARLY_STOP_REGION_THRESHOLD: usize = 3;
pub(crate) const EARLY_STOP_ROLL_CUTOFF: u32 = 6;
pub(crate) const EARLY_STOP_ROLL_SIDES: u32 = 10;

pub(crate) const MAX_REPAIR_ITERATIONS: u32 = 500;

pub(crate) const DIRECTIONS: [Direction; 4] = [
    Direction::North,
    Direction::East,
    Direction::South,
    Direction::West,
];
