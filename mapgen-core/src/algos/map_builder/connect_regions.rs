use super::{MapBuilder, adjacency::neighbours};
use crate::types::{Cell, CellState, Direction, DirectionFilter, Grid, RegionId, RegionRecord};

use rand::Rng;
use tracing::event;

impl MapBuilder {
    /// Walks the region list in order and links every region to the next one,
    /// falling back to a random geometric neighbour when the two are not
    /// adjacent. Returns the number of successful links.
    pub(super) fn chain_regions(
        regions: &mut [RegionRecord],
        grid: &mut Grid,
        rng: &mut impl Rng,
    ) -> usize {
        let mut linked = 0;

        for idx in 0..regions.len().saturating_sub(1) {
            if Self::connect(regions, grid, idx, idx + 1, rng) {
                linked += 1;
                continue;
            }

            let candidates = neighbours(regions, idx, DirectionFilter::All);
            if candidates.is_empty() {
                continue;
            }

            let target = candidates[rng.random_range(0..candidates.len())];
            if Self::connect(regions, grid, idx, target, rng) {
                linked += 1;
            }
        }

        linked
    }

    /// Carves an L-shaped corridor between two adjacent regions and records
    /// the link on both. Returns `false`, leaving everything untouched, when
    /// the regions do not share a boundary.
    pub(super) fn connect(
        regions: &mut [RegionRecord],
        grid: &mut Grid,
        from: RegionId,
        to: RegionId,
        rng: &mut impl Rng,
    ) -> bool {
        if from == to || from >= regions.len() || to >= regions.len() {
            return false;
        }

        let Some(side) = regions[from].area().is_neighbour_of(regions[to].area()) else {
            return false;
        };

        let from_road = Self::assign_road(&mut regions[from], side, rng);
        let to_road = Self::assign_road(&mut regions[to], side.reverse(), rng);

        // Normalise so that `near` is the region on the low-coordinate side.
        let (near, far, near_road, far_road) = match side {
            Direction::East | Direction::South => (&regions[from], &regions[to], from_road, to_road),
            Direction::West | Direction::North => (&regions[to], &regions[from], to_road, from_road),
        };

        let carved = Self::carve_corridor(grid, near, far, side.is_horizontal(), near_road, far_road);

        event!(
            tracing::Level::TRACE,
            "Linked region #{} to #{} through its {} side ({} cells)",
            from,
            to,
            side,
            carved
        );

        regions[from].link(to);
        regions[to].link(from);

        true
    }

    // Exit coordinates are drawn once per side and reused afterwards.
    fn assign_road(region: &mut RegionRecord, side: Direction, rng: &mut impl Rng) -> u32 {
        if let Some(road) = region.road(side) {
            return road;
        }

        let room = region.room();
        let road = if side.is_horizontal() {
            rng.random_range(room.top()..room.bottom())
        } else {
            rng.random_range(room.left()..room.right())
        };

        region.set_road(side, road);
        road
    }

    // The boundary line is the first column (or row) of `far`, which is
    // always margin, so the joining segment never runs through a room.
    fn carve_corridor(
        grid: &mut Grid,
        near: &RegionRecord,
        far: &RegionRecord,
        across_columns: bool,
        near_road: u32,
        far_road: u32,
    ) -> usize {
        let mut carved = 0;

        if across_columns {
            let boundary = far.left();

            carved += Self::carve_line(
                grid,
                Cell::new(near.room().right(), near_road),
                Cell::new(boundary, near_road),
            );
            carved += Self::carve_line(
                grid,
                Cell::new(boundary, far_road),
                Cell::new(far.room().left() - 1, far_road),
            );
            carved += Self::carve_line(
                grid,
                Cell::new(boundary, near_road),
                Cell::new(boundary, far_road),
            );
        } else {
            let boundary = far.top();

            carved += Self::carve_line(
                grid,
                Cell::new(near_road, near.room().bottom()),
                Cell::new(near_road, boundary),
            );
            carved += Self::carve_line(
                grid,
                Cell::new(far_road, boundary),
                Cell::new(far_road, far.room().top() - 1),
            );
            carved += Self::carve_line(
                grid,
                Cell::new(near_road, boundary),
                Cell::new(far_road, boundary),
            );
        }

        carved
    }

    // Carves the inclusive, axis-aligned segment between `a` and `b`.
    fn carve_line(grid: &mut Grid, a: Cell, b: Cell) -> usize {
        let (col_from, col_to) = (a.col.min(b.col), a.col.max(b.col));
        let (row_from, row_to) = (a.row.min(b.row), a.row.max(b.row));

        let mut carved = 0;
        for row in row_from..=row_to {
            for col in col_from..=col_to {
                if grid.carve(Cell::new(col, row), CellState::Road) {
                    carved += 1;
                }
            }
        }

        carved
    }
}
