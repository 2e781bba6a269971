use super::{MapBuilder, adjacency::neighbours};
use crate::{
    error::GenerationError,
    types::{DirectionFilter, Grid, RegionId, RegionRecord},
};

use std::collections::HashSet;

use rand::Rng;
use tracing::event;

/// Every region reachable from `start` by following corridor links,
/// `start` included.
pub fn connectivity_group(regions: &[RegionRecord], start: RegionId) -> HashSet<RegionId> {
    let mut group = HashSet::new();

    if start >= regions.len() {
        return group;
    }

    let mut regions_to_visit = vec![start];

    while let Some(region_id) = regions_to_visit.pop() {
        if !group.insert(region_id) {
            continue;
        }

        for neighbour_id in regions[region_id].connected() {
            if !group.contains(&neighbour_id) {
                regions_to_visit.push(neighbour_id);
            }
        }
    }

    group
}

impl MapBuilder {
    /// Links every region outside the group of the first region to a random
    /// neighbour until a single group remains. Returns the number of passes.
    pub(super) fn repair_connectivity(
        regions: &mut [RegionRecord],
        grid: &mut Grid,
        max_iterations: u32,
        rng: &mut impl Rng,
    ) -> Result<u32, GenerationError> {
        if regions.is_empty() {
            return Ok(0);
        }

        let mut group = connectivity_group(regions, 0);
        let mut passes = 0;

        while group.len() < regions.len() {
            if passes >= max_iterations {
                event!(
                    tracing::Level::WARN,
                    "Connectivity repair gave up after {} passes ({}/{} regions connected)",
                    passes,
                    group.len(),
                    regions.len()
                );

                return Err(GenerationError::ConnectivityRepairExceeded {
                    iterations: passes,
                    connected: group.len(),
                    total: regions.len(),
                });
            }

            passes += 1;

            for region_id in 0..regions.len() {
                if group.contains(&region_id) {
                    continue;
                }

                let candidates = neighbours(regions, region_id, DirectionFilter::All);
                if candidates.is_empty() {
                    continue;
                }

                let target = candidates[rng.random_range(0..candidates.len())];
                Self::connect(regions, grid, region_id, target, rng);
            }

            group = connectivity_group(regions, 0);

            event!(
                tracing::Level::DEBUG,
                "Repair pass {}: {}/{} regions connected",
                passes,
                group.len(),
                regions.len()
            );
        }

        Ok(passes)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{algos::RngHandler, types::Rect};

    fn region(x: u32, y: u32) -> RegionRecord {
        RegionRecord::new(Rect::new(x, y, 8, 8), Rect::new(x + 1, y + 1, 4, 4))
    }

    #[test]
    fn test_connectivity_group_follows_links_through_cycles() {
        let mut regions = vec![region(0, 0), region(8, 0), region(0, 8), region(8, 8)];

        // 0 - 1 - 3 - 0 cycle, 2 left alone.
        for (a, b) in [(0, 1), (1, 3), (3, 0)] {
            regions[a].link(b);
            regions[b].link(a);
        }

        assert_eq!(connectivity_group(&regions, 0), HashSet::from([0, 1, 3]));
        assert_eq!(connectivity_group(&regions, 2), HashSet::from([2]));
        assert!(connectivity_group(&regions, 7).is_empty());
    }

    #[test]
    fn test_repair_links_isolated_regions() {
        let mut grid = Grid::new(16, 16);
        let mut regions = vec![region(0, 0), region(8, 0), region(0, 8), region(8, 8)];
        let mut rng = RngHandler::seeded(8);

        let passes =
            MapBuilder::repair_connectivity(&mut regions, &mut grid, 100, &mut rng).unwrap();

        assert!(passes >= 1);
        assert_eq!(connectivity_group(&regions, 0).len(), regions.len());

        for (idx, region) in regions.iter().enumerate() {
            for other in region.connected() {
                assert!(regions[other].is_connected_to(idx));
            }
        }
    }

    #[test]
    fn test_already_connected_needs_no_pass() {
        let mut grid = Grid::new(16, 8);
        let mut regions = vec![region(0, 0), region(8, 0)];
        let mut rng = RngHandler::seeded(8);

        assert!(MapBuilder::connect(&mut regions, &mut grid, 0, 1, &mut rng));

        let passes =
            MapBuilder::repair_connectivity(&mut regions, &mut grid, 1, &mut rng).unwrap();
        assert_eq!(passes, 0);
    }

    #[test]
    fn test_repair_gives_up_without_geometric_neighbours() {
        let mut grid = Grid::new(32, 32);
        let mut regions = vec![region(0, 0), region(16, 16)];
        let mut rng = RngHandler::seeded(8);

        let result = MapBuilder::repair_connectivity(&mut regions, &mut grid, 5, &mut rng);

        assert!(matches!(
            result,
            Err(GenerationError::ConnectivityRepairExceeded {
                iterations: 5,
                connected: 1,
                total: 2
            })
        ));
    }
}
