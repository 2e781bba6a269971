mod algos;
mod archetype;
mod constants;
mod error;
mod types;

use tracing::{Level, span};

pub use algos::{BinarySpacePartitioningConfig, MapBuilderConfig, connectivity_group, neighbours};
pub use archetype::{ArchetypeTable, MapArchetype};
pub use error::GenerationError;
pub use types::{
    Cell, CellState, Direction, DirectionFilter, Grid, MapKind, MapLayout, Rect, RegionId,
    RegionRecord,
};

/// Generates a map layout with the default builder configuration.
///
/// The result is a pure function of the arguments: the same seed and
/// dimensions always produce the same grid and region list.
pub fn generate(
    seed: u64,
    width: u32,
    height: u32,
    kind: MapKind,
) -> Result<MapLayout, GenerationError> {
    generate_with_config(seed, width, height, kind, &MapBuilderConfig::default())
}

pub fn generate_with_config(
    seed: u64,
    width: u32,
    height: u32,
    kind: MapKind,
    config: &MapBuilderConfig,
) -> Result<MapLayout, GenerationError> {
    let span = span!(Level::DEBUG, "generate", seed, width, height);
    let _guard = span.enter();

    let builder = algos::MapBuilder::new(width, height);

    builder.build(config, seed, kind)
}
