use super::MapBuilder;
use crate::{
    constants::{ROOM_HIGH_MARGIN, ROOM_LOW_MARGIN},
    types::{CellState, Grid, Rect, RegionRecord},
};

use rand::Rng;

impl MapBuilder {
    pub(super) fn place_rooms(
        areas: Vec<Rect>,
        grid: &mut Grid,
        room_min_size: u32,
        rng: &mut impl Rng,
    ) -> Vec<RegionRecord> {
        areas
            .into_iter()
            .map(|area| {
                let room = Self::generate_room(&area, room_min_size, rng);
                grid.fill(&room, CellState::Ground);

                RegionRecord::new(area, room)
            })
            .collect()
    }

    // Callers guarantee `area` is at least `room_min_size + 3` on both axes,
    // which `MapBuilderConfig::validate` enforces through `area_min_size`.
    fn generate_room(area: &Rect, room_min_size: u32, rng: &mut impl Rng) -> Rect {
        let left_offset =
            rng.random_range(ROOM_LOW_MARGIN..=area.width - room_min_size - ROOM_HIGH_MARGIN);
        let top_offset =
            rng.random_range(ROOM_LOW_MARGIN..=area.height - room_min_size - ROOM_HIGH_MARGIN);

        let width = rng.random_range(room_min_size..=area.width - left_offset - ROOM_HIGH_MARGIN);
        let height = rng.random_range(room_min_size..=area.height - top_offset - ROOM_HIGH_MARGIN);

        Rect::new(
            area.left() + left_offset,
            area.top() + top_offset,
            width,
            height,
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::algos::RngHandler;

    #[test]
    fn test_rooms_keep_margins() {
        let mut rng = RngHandler::seeded(5);
        let area = Rect::new(16, 8, 11, 9);

        for _ in 0..500 {
            let room = MapBuilder::generate_room(&area, 3, &mut rng);

            assert!(room.width >= 3 && room.height >= 3);
            assert!(room.left() > area.left());
            assert!(room.top() > area.top());
            assert!(room.right() < area.right());
            assert!(room.bottom() < area.bottom());
        }
    }

    #[test]
    fn test_smallest_area_fits_minimum_room() {
        let mut rng = RngHandler::seeded(9);
        let area = Rect::new(0, 0, 6, 6);

        for _ in 0..20 {
            let room = MapBuilder::generate_room(&area, 3, &mut rng);
            assert_eq!(room, Rect::new(1, 1, 3, 3));
        }
    }

    #[test]
    fn test_place_rooms_carves_floor() {
        let mut rng = RngHandler::seeded(21);
        let mut grid = Grid::new(20, 10);
        let areas = vec![Rect::new(0, 0, 10, 10), Rect::new(10, 0, 10, 10)];

        let regions = MapBuilder::place_rooms(areas.clone(), &mut grid, 3, &mut rng);

        assert_eq!(regions.len(), 2);

        let room_cells = regions
            .iter()
            .map(|region| region.room().area() as usize)
            .sum::<usize>();
        assert_eq!(grid.walkable_count(), room_cells);

        for (region, area) in regions.iter().zip(areas.iter()) {
            assert_eq!(region.area(), area);
            assert_eq!(region.road_count(), 0);

            for cell in region.room().get_cells() {
                assert_eq!(grid.get(cell), Some(CellState::Ground));
            }
        }
    }
}
