use crate::constants::DIRECTIONS;

use std::fmt::{Display, Formatter};

use anyhow::Result;
use serde::{Serialize, ser::SerializeStruct};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Cell {
    pub col: u32,
    pub row: u32,
}

impl Cell {
    pub const fn new(col: u32, row: u32) -> Self {
        Cell { col, row }
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SplitAxis {
    // Cut along a horizontal line, the height shrinks.
    Horizontal,
    // Cut along a vertical line, the width shrinks.
    Vertical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    pub fn is_horizontal(&self) -> bool {
        match self {
            Direction::North | Direction::South => false,
            Direction::East | Direction::West => true,
        }
    }

    pub fn reverse(&self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }

    fn index(&self) -> usize {
        match self {
            Direction::North => 0,
            Direction::East => 1,
            Direction::South => 2,
            Direction::West => 3,
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::North => write!(f, "north"),
            Direction::South => write!(f, "south"),
            Direction::East => write!(f, "east"),
            Direction::West => write!(f, "west"),
        }
    }
}

/// Which sides of a region a neighbour lookup inspects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectionFilter {
    Only(Direction),
    All,
    None,
}

impl From<Direction> for DirectionFilter {
    fn from(direction: Direction) -> Self {
        DirectionFilter::Only(direction)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Rect {
    pub origin: Cell,
    pub width: u32,
    pub height: u32,
}

impl Display for Rect {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({},{}):[{}x{}]",
            self.origin.col, self.origin.row, self.width, self.height
        )
    }
}

impl Rect {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Rect {
            origin: Cell { col: x, row: y },
            width,
            height,
        }
    }

    pub fn top(&self) -> u32 {
        self.origin.row
    }

    /// Exclusive.
    pub fn bottom(&self) -> u32 {
        self.origin.row + self.height
    }

    pub fn left(&self) -> u32 {
        self.origin.col
    }

    /// Exclusive.
    pub fn right(&self) -> u32 {
        self.origin.col + self.width
    }

    pub fn area(&self) -> u32 {
        self.width * self.height
    }

    pub(crate) fn extent(&self, axis: SplitAxis) -> u32 {
        match axis {
            SplitAxis::Horizontal => self.height,
            SplitAxis::Vertical => self.width,
        }
    }

    pub fn contains(&self, cell: Cell) -> bool {
        (self.left()..self.right()).contains(&cell.col)
            && (self.top()..self.bottom()).contains(&cell.row)
    }

    pub fn get_cells(&self) -> Vec<Cell> {
        let mut cells = Vec::with_capacity(self.area() as usize);

        for row in self.top()..self.bottom() {
            for col in self.left()..self.right() {
                cells.push(Cell { col, row });
            }
        }

        cells
    }

    pub(crate) fn try_split_at(self, axis: SplitAxis, at: u32) -> Result<(Rect, Rect)> {
        match axis {
            SplitAxis::Horizontal => {
                if self.height < 2 || at >= self.height || at == 0 {
                    return Err(anyhow::anyhow!("Invalid split {}-{}", self.height, at));
                }

                let up = Rect {
                    origin: self.origin,
                    width: self.width,
                    height: at,
                };

                let down = Rect {
                    origin: Cell::new(self.origin.col, self.origin.row + at),
                    width: self.width,
                    height: self.height - at,
                };

                Ok((up, down))
            }
            SplitAxis::Vertical => {
                if self.width < 2 || at >= self.width || at == 0 {
                    return Err(anyhow::anyhow!("Invalid split {}-{}", self.width, at));
                }

                let left = Rect {
                    origin: self.origin,
                    width: at,
                    height: self.height,
                };

                let right = Rect {
                    origin: Cell::new(self.origin.col + at, self.origin.row),
                    width: self.width - at,
                    height: self.height,
                };

                Ok((left, right))
            }
        }
    }

    fn overlaps_columns(&self, other: &Rect) -> bool {
        self.left() < other.right() && other.left() < self.right()
    }

    fn overlaps_rows(&self, other: &Rect) -> bool {
        self.top() < other.bottom() && other.top() < self.bottom()
    }

    /// True when `other` lies directly beyond the `direction` side of `self`
    /// and the two sides overlap by at least one cell. Touching corners do not
    /// count.
    pub fn shares_edge(&self, other: &Rect, direction: Direction) -> bool {
        match direction {
            Direction::North => self.top() == other.bottom() && self.overlaps_columns(other),
            Direction::South => self.bottom() == other.top() && self.overlaps_columns(other),
            Direction::East => self.right() == other.left() && self.overlaps_rows(other),
            Direction::West => self.left() == other.right() && self.overlaps_rows(other),
        }
    }

    pub fn is_neighbour_of(&self, other: &Rect) -> Option<Direction> {
        if self == other {
            return None;
        }

        DIRECTIONS
            .iter()
            .find(|direction| self.shares_edge(other, **direction))
            .copied()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum CellState {
    #[default]
    Wall,
    // Room floor.
    Ground,
    // Corridor.
    Road,
    Water,
    House,
    Castle,
    Gate,
}

impl CellState {
    pub fn is_walkable(&self) -> bool {
        matches!(self, CellState::Ground | CellState::Road | CellState::Gate)
    }

    pub fn as_char(&self) -> char {
        match self {
            CellState::Wall => '#',
            CellState::Ground => '.',
            CellState::Road => ',',
            CellState::Water => '~',
            CellState::House => 'h',
            CellState::Castle => 'C',
            CellState::Gate => '=',
        }
    }
}

#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, Serialize)]
pub enum MapKind {
    World,
    Town,
    #[default]
    Dungeon,
}

impl Display for MapKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            MapKind::World => write!(f, "world"),
            MapKind::Town => write!(f, "town"),
            MapKind::Dungeon => write!(f, "dungeon"),
        }
    }
}

pub type RegionId = usize;

pub(crate) type ConnectionSet = tinyset::SetUsize;

/// One leaf of the partition: its bounding box, the room carved inside it,
/// the corridor exits assigned so far and the regions it is linked to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionRecord {
    area: Rect,
    room: Rect,
    // Indexed by `Direction::index`. Rows for east/west, columns for north/south.
    roads: [Option<u32>; 4],
    connected: ConnectionSet,
}

impl RegionRecord {
    pub(crate) fn new(area: Rect, room: Rect) -> Self {
        RegionRecord {
            area,
            room,
            roads: [None; 4],
            connected: ConnectionSet::new(),
        }
    }

    pub fn area(&self) -> &Rect {
        &self.area
    }

    pub fn room(&self) -> &Rect {
        &self.room
    }

    pub fn top(&self) -> u32 {
        self.area.top()
    }

    pub fn bottom(&self) -> u32 {
        self.area.bottom()
    }

    pub fn left(&self) -> u32 {
        self.area.left()
    }

    pub fn right(&self) -> u32 {
        self.area.right()
    }

    pub fn width(&self) -> u32 {
        self.area.width
    }

    pub fn height(&self) -> u32 {
        self.area.height
    }

    /// Absolute coordinate where a corridor leaves the room through `side`.
    pub fn road(&self, side: Direction) -> Option<u32> {
        self.roads[side.index()]
    }

    pub(crate) fn set_road(&mut self, side: Direction, at: u32) {
        self.roads[side.index()] = Some(at);
    }

    /// Number of sides with an assigned corridor exit.
    pub fn road_count(&self) -> usize {
        self.roads.iter().filter(|road| road.is_some()).count()
    }

    pub fn connected(&self) -> impl Iterator<Item = RegionId> + '_ {
        self.connected.iter()
    }

    pub fn is_connected_to(&self, other: RegionId) -> bool {
        self.connected.iter().any(|id| id == other)
    }

    pub fn connection_count(&self) -> usize {
        self.connected.len()
    }

    pub(crate) fn link(&mut self, other: RegionId) {
        self.connected.insert(other);
    }

    fn sorted_connections(&self) -> Vec<RegionId> {
        let mut connections = self.connected.iter().collect::<Vec<_>>();
        connections.sort_unstable();
        connections
    }
}

impl Display for RegionRecord {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let road = |side: Direction| match self.road(side) {
            Some(at) => at.to_string(),
            None => "-".to_string(),
        };

        write!(
            f,
            "[{} room {} roads N:{} E:{} S:{} W:{} links {:?}]",
            self.area,
            self.room,
            road(Direction::North),
            road(Direction::East),
            road(Direction::South),
            road(Direction::West),
            self.sorted_connections(),
        )
    }
}

impl Serialize for RegionRecord {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("RegionRecord", 7)?;
        state.serialize_field("area", &self.area)?;
        state.serialize_field("room", &self.room)?;
        state.serialize_field("top_road", &self.road(Direction::North))?;
        state.serialize_field("right_road", &self.road(Direction::East))?;
        state.serialize_field("bottom_road", &self.road(Direction::South))?;
        state.serialize_field("left_road", &self.road(Direction::West))?;
        state.serialize_field("connected", &self.sorted_connections())?;
        state.end()
    }
}

/// Row-major cell buffer. Every cell starts as a wall.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Grid {
    width: u32,
    height: u32,
    cells: Vec<CellState>,
}

impl Grid {
    pub(crate) fn new(width: u32, height: u32) -> Self {
        Grid {
            width,
            height,
            cells: vec![CellState::Wall; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Looks up a cell by signed coordinates so callers can probe past the
    /// borders. Anything outside the grid yields `None`.
    pub fn cell_at(&self, x: i64, y: i64) -> Option<CellState> {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return None;
        }

        Some(self.cells[y as usize * self.width as usize + x as usize])
    }

    pub fn get(&self, cell: Cell) -> Option<CellState> {
        self.cell_at(cell.col as i64, cell.row as i64)
    }

    pub fn iter_cells(&self) -> impl Iterator<Item = (Cell, CellState)> + '_ {
        self.cells.iter().enumerate().map(|(idx, state)| {
            let col = (idx % self.width as usize) as u32;
            let row = (idx / self.width as usize) as u32;
            (Cell::new(col, row), *state)
        })
    }

    pub fn walkable_count(&self) -> usize {
        self.cells.iter().filter(|state| state.is_walkable()).count()
    }

    fn index_of(&self, cell: Cell) -> Option<usize> {
        if cell.col >= self.width || cell.row >= self.height {
            return None;
        }

        Some(cell.row as usize * self.width as usize + cell.col as usize)
    }

    pub(crate) fn fill(&mut self, rect: &Rect, state: CellState) {
        for cell in rect.get_cells() {
            if let Some(idx) = self.index_of(cell) {
                self.cells[idx] = state;
            }
        }
    }

    // Only walls are carved, so a corridor crossing a room keeps the floor.
    pub(crate) fn carve(&mut self, cell: Cell, state: CellState) -> bool {
        match self.index_of(cell) {
            Some(idx) if self.cells[idx] == CellState::Wall => {
                self.cells[idx] = state;
                true
            }
            _ => false,
        }
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for row in self.cells.chunks(self.width as usize) {
            let line = row.iter().map(CellState::as_char).collect::<String>();
            writeln!(f, "{}", line)?;
        }

        Ok(())
    }
}

/// Everything a single generation call produces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MapLayout {
    pub kind: MapKind,
    pub seed: u64,
    pub grid: Grid,
    pub regions: Vec<RegionRecord>,
}

impl MapLayout {
    pub fn into_parts(self) -> (Grid, Vec<RegionRecord>) {
        (self.grid, self.regions)
    }
}
