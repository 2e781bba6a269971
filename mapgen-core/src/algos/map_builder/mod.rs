use crate::{
    algos::RngHandler,
    error::GenerationError,
    types::{Grid, MapKind, MapLayout, Rect},
};

use tracing::event;

mod adjacency;
mod bsp;
mod builder_config;
mod connect_regions;
mod gen_rooms;
mod reconnect_regions;

pub use adjacency::neighbours;
pub use builder_config::{BinarySpacePartitioningConfig, MapBuilderConfig};
pub use reconnect_regions::connectivity_group;

pub(crate) struct MapBuilder {
    pub cols: u32,
    pub rows: u32,
}

impl MapBuilder {
    pub fn new(cols: u32, rows: u32) -> Self {
        MapBuilder { cols, rows }
    }

    pub fn build(
        &self,
        config: &MapBuilderConfig,
        seed: u64,
        kind: MapKind,
    ) -> Result<MapLayout, GenerationError> {
        if let Err(err) = config.validate() {
            event!(
                tracing::Level::WARN,
                "Rejecting map generation for invalid configuration: {}",
                err
            );

            return Err(err);
        }

        let min_size = config.bsp_config.area_min_size;
        if self.cols < min_size || self.rows < min_size {
            event!(
                tracing::Level::WARN,
                "Rejecting map generation for too small dimensions: [{}x{}]",
                self.cols,
                self.rows
            );

            return Err(GenerationError::InvalidDimensions {
                width: self.cols,
                height: self.rows,
                min: min_size,
            });
        }

        let build_start = std::time::Instant::now();
        let mut rng = RngHandler::seeded(seed);

        let areas = bsp::BinarySpacePartitioning::generate_partitions(
            Rect::new(0, 0, self.cols, self.rows),
            &config.bsp_config,
            &mut rng,
        )?;

        let partitions_time = std::time::Instant::now();
        event!(
            tracing::Level::DEBUG,
            "Split [{}x{}] into {} regions in {}ms",
            self.cols,
            self.rows,
            areas.len(),
            partitions_time.duration_since(build_start).as_millis()
        );

        let mut grid = Grid::new(self.cols, self.rows);
        let mut regions = Self::place_rooms(areas, &mut grid, config.room_min_size, &mut rng);

        let chained = Self::chain_regions(&mut regions, &mut grid, &mut rng);
        let repair_passes = Self::repair_connectivity(
            &mut regions,
            &mut grid,
            config.max_repair_iterations,
            &mut rng,
        )?;

        let build_end = std::time::Instant::now();
        let corridors = regions
            .iter()
            .map(|region| region.connection_count())
            .sum::<usize>()
            / 2;

        event!(
            tracing::Level::DEBUG,
            "Built {} map with {} regions, {} corridors ({} from chaining, {} repair passes) in {}ms",
            kind,
            regions.len(),
            corridors,
            chained,
            repair_passes,
            build_end.duration_since(build_start).as_millis()
        );

        Ok(MapLayout {
            kind,
            seed,
            grid,
            regions,
        })
    }
}
