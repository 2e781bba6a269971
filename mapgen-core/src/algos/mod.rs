mod map_builder;

pub(crate) use map_builder::MapBuilder;
pub use map_builder::{
    BinarySpacePartitioningConfig, MapBuilderConfig, connectivity_group, neighbours,
};

use rand::{SeedableRng, rngs::StdRng};

pub(crate) struct RngHandler;

impl RngHandler {
    // Every random draw of a generation call comes from this one stream, so
    // the order of draws is part of the output for a given seed.
    pub fn seeded(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }
}
