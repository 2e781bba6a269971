use crate::{
    constants::{
        AREA_MIN_SIZE, EARLY_STOP_REGION_THRESHOLD, EARLY_STOP_ROLL_CUTOFF,
        EARLY_STOP_ROLL_SIDES, MAX_REPAIR_ITERATIONS, ROOM_HIGH_MARGIN, ROOM_LOW_MARGIN,
        ROOM_MIN_SIZE,
    },
    error::GenerationError,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BinarySpacePartitioningConfig {
    // The minimum width and height of a region. A region is only split
    // along an axis when it is at least twice this size along it.
    pub area_min_size: u32,
    // Once more than this many regions exist, every region rolls
    // to decide whether it stops splitting early.
    pub early_stop_region_threshold: usize,
    // A roll in [0, 10) below this value stops the split. 0 disables
    // early stopping, 10 stops every region past the threshold.
    pub early_stop_roll_cutoff: u32,
}

impl Default for BinarySpacePartitioningConfig {
    fn default() -> Self {
        BinarySpacePartitioningConfig {
            area_min_size: AREA_MIN_SIZE,
            early_stop_region_threshold: EARLY_STOP_REGION_THRESHOLD,
            early_stop_roll_cutoff: EARLY_STOP_ROLL_CUTOFF,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapBuilderConfig {
    pub bsp_config: BinarySpacePartitioningConfig,
    // The minimum width and height of a room.
    pub room_min_size: u32,
    // How many passes the connectivity repair may run before giving up.
    pub max_repair_iterations: u32,
}

impl Default for MapBuilderConfig {
    fn default() -> Self {
        MapBuilderConfig {
            bsp_config: BinarySpacePartitioningConfig::default(),
            room_min_size: ROOM_MIN_SIZE,
            max_repair_iterations: MAX_REPAIR_ITERATIONS,
        }
    }
}

impl MapBuilderConfig {
    pub fn validate(&self) -> Result<(), GenerationError> {
        if self.room_min_size == 0 {
            return Err(GenerationError::InvalidConfig(
                "room_min_size must be greater than zero".to_string(),
            ));
        }

        let Some(min_area) = self
            .room_min_size
            .checked_add(ROOM_LOW_MARGIN + ROOM_HIGH_MARGIN)
        else {
            return Err(GenerationError::InvalidConfig(format!(
                "room_min_size {} is too large",
                self.room_min_size
            )));
        };

        if self.bsp_config.area_min_size < min_area {
            return Err(GenerationError::InvalidConfig(format!(
                "area_min_size {} cannot hold a room of size {} (needs at least {})",
                self.bsp_config.area_min_size, self.room_min_size, min_area
            )));
        }

        // Splitting compares extents against twice the area minimum.
        if self.bsp_config.area_min_size > u32::MAX / 2 {
            return Err(GenerationError::InvalidConfig(format!(
                "area_min_size {} is too large",
                self.bsp_config.area_min_size
            )));
        }

        if self.bsp_config.early_stop_roll_cutoff > EARLY_STOP_ROLL_SIDES {
            return Err(GenerationError::InvalidConfig(format!(
                "early_stop_roll_cutoff {} is above {}",
                self.bsp_config.early_stop_roll_cutoff, EARLY_STOP_ROLL_SIDES
            )));
        }

        if self.max_repair_iterations == 0 {
            return Err(GenerationError::InvalidConfig(
                "max_repair_iterations must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(MapBuilderConfig::default().validate().is_ok());
    }

    #[test]
    fn test_area_too_small_for_room_is_rejected() {
        let mut config = MapBuilderConfig::default();
        config.room_min_size = 6;
        config.bsp_config.area_min_size = 8;

        assert!(matches!(
            config.validate(),
            Err(GenerationError::InvalidConfig(_))
        ));

        config.bsp_config.area_min_size = 9;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_out_of_range_values_are_rejected() {
        let mut config = MapBuilderConfig::default();
        config.bsp_config.early_stop_roll_cutoff = 11;
        assert!(config.validate().is_err());

        let mut config = MapBuilderConfig::default();
        config.room_min_size = 0;
        assert!(config.validate().is_err());

        let mut config = MapBuilderConfig::default();
        config.max_repair_iterations = 0;
        assert!(config.validate().is_err());

        let mut config = MapBuilderConfig::default();
        config.room_min_size = u32::MAX;
        assert!(matches!(
            config.validate(),
            Err(GenerationError::InvalidConfig(_))
        ));

        let mut config = MapBuilderConfig::default();
        config.bsp_config.area_min_size = u32::MAX;
        assert!(matches!(
            config.validate(),
            Err(GenerationError::InvalidConfig(_))
        ));
    }
}
