use crate::{
    constants::DIRECTIONS,
    types::{DirectionFilter, RegionId, RegionRecord},
};

/// Returns the regions sharing a boundary with `region` on the sides selected
/// by `filter`, in region-list order. The spans along the shared boundary must
/// overlap; regions touching only at a corner are not neighbours.
pub fn neighbours(
    regions: &[RegionRecord],
    region: RegionId,
    filter: DirectionFilter,
) -> Vec<RegionId> {
    if regions.len() < 2 {
        return Vec::new();
    }

    let Some(origin) = regions.get(region) else {
        return Vec::new();
    };

    let directions = match filter {
        DirectionFilter::Only(direction) => vec![direction],
        DirectionFilter::All => DIRECTIONS.to_vec(),
        DirectionFilter::None => return Vec::new(),
    };

    regions
        .iter()
        .enumerate()
        .filter(|(idx, other)| {
            *idx != region
                && directions
                    .iter()
                    .any(|direction| origin.area().shares_edge(other.area(), *direction))
        })
        .map(|(idx, _)| idx)
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::types::{Direction, Rect};

    fn region(x: u32, y: u32, width: u32, height: u32) -> RegionRecord {
        let area = Rect::new(x, y, width, height);
        let room = Rect::new(x + 1, y + 1, width - 3, height - 3);
        RegionRecord::new(area, room)
    }

    fn test_regions() -> Vec<RegionRecord> {
        /*
           +--------+--------+
           |   0    |   1    |
           +-----+--+--------+
           |  2  |     3     |
           +-----+-----------+
        */
        vec![
            region(0, 0, 8, 8),
            region(8, 0, 8, 8),
            region(0, 8, 6, 8),
            region(6, 8, 10, 8),
        ]
    }

    #[test]
    fn test_single_direction() {
        let regions = test_regions();

        assert_eq!(neighbours(&regions, 0, Direction::East.into()), vec![1]);
        assert_eq!(neighbours(&regions, 0, Direction::South.into()), vec![2, 3]);
        assert_eq!(neighbours(&regions, 1, Direction::South.into()), vec![3]);
        assert_eq!(neighbours(&regions, 3, Direction::North.into()), vec![0, 1]);
        assert_eq!(neighbours(&regions, 3, Direction::West.into()), vec![2]);
        assert!(neighbours(&regions, 0, Direction::North.into()).is_empty());
    }

    #[test]
    fn test_north_neighbours_share_top_edge() {
        let regions = test_regions();

        for idx in 0..regions.len() {
            for other in neighbours(&regions, idx, Direction::North.into()) {
                assert_ne!(other, idx);
                assert_eq!(regions[other].bottom(), regions[idx].top());
                assert!(regions[other].left() < regions[idx].right());
                assert!(regions[idx].left() < regions[other].right());
            }
        }
    }

    #[test]
    fn test_all_directions_are_deduplicated() {
        let regions = test_regions();

        assert_eq!(neighbours(&regions, 0, DirectionFilter::All), vec![1, 2, 3]);
        assert_eq!(neighbours(&regions, 2, DirectionFilter::All), vec![0, 3]);
    }

    #[test]
    fn test_corner_contact_is_ignored() {
        let regions = vec![region(0, 0, 8, 8), region(8, 8, 8, 8)];

        assert!(neighbours(&regions, 0, DirectionFilter::All).is_empty());
    }

    #[test]
    fn test_degenerate_queries_are_empty() {
        let regions = test_regions();

        assert!(neighbours(&regions, 0, DirectionFilter::None).is_empty());
        assert!(neighbours(&regions[..1], 0, DirectionFilter::All).is_empty());
        assert!(neighbours(&regions, 42, DirectionFilter::All).is_empty());
    }
}
