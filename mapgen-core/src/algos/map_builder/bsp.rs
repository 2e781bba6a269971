use super::BinarySpacePartitioningConfig;
use crate::{
    constants::EARLY_STOP_ROLL_SIDES,
    types::{Rect, SplitAxis},
};

use anyhow::Result;
use rand::Rng;
use tracing::event;

pub(crate) struct BinarySpacePartitioning;

impl BinarySpacePartitioning {
    /// Splits `root` into leaf areas. The returned vector is the region arena:
    /// an area keeps its index when it is shrunk by a split, and the other half
    /// is appended at the end.
    pub fn generate_partitions(
        root: Rect,
        config: &BinarySpacePartitioningConfig,
        rng: &mut impl Rng,
    ) -> Result<Vec<Rect>> {
        let mut areas = vec![root];
        let mut idx_stack = vec![0_usize];

        while let Some(idx) = idx_stack.pop() {
            if let Some(child_idx) = Self::split_area(&mut areas, idx, config, rng)? {
                // The new child and its whole subtree are split before we
                // come back to the shrunk original.
                idx_stack.push(idx);
                idx_stack.push(child_idx);
            }
        }

        Ok(areas)
    }

    fn split_area(
        areas: &mut Vec<Rect>,
        idx: usize,
        config: &BinarySpacePartitioningConfig,
        rng: &mut impl Rng,
    ) -> Result<Option<usize>> {
        if areas.len() > config.early_stop_region_threshold
            && rng.random_range(0..EARLY_STOP_ROLL_SIDES) < config.early_stop_roll_cutoff
        {
            return Ok(None);
        }

        let rect = areas[idx];
        let min_size = config.area_min_size;

        let split_size = min_size.checked_mul(2);
        let can_split_horizontal = split_size.is_some_and(|size| rect.height >= size);
        let can_split_vertical = split_size.is_some_and(|size| rect.width >= size);

        let axis = match (can_split_horizontal, can_split_vertical) {
            (false, false) => return Ok(None),
            (true, false) => SplitAxis::Horizontal,
            (false, true) => SplitAxis::Vertical,
            (true, true) => {
                if rng.random_bool(0.5) {
                    SplitAxis::Horizontal
                } else {
                    SplitAxis::Vertical
                }
            }
        };

        let split_at = rng.random_range(min_size..=rect.extent(axis) - min_size);
        let (lower, upper) = rect.try_split_at(axis, split_at)?;

        let (kept, spawned) = if rng.random_bool(0.5) {
            (lower, upper)
        } else {
            (upper, lower)
        };

        areas[idx] = kept;
        areas.push(spawned);

        event!(
            tracing::Level::TRACE,
            "Split area #{} {:?} at {}: kept {} spawned {}",
            idx,
            axis,
            split_at,
            kept,
            spawned
        );

        Ok(Some(areas.len() - 1))
    }
}
