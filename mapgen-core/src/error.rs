use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("map dimensions [{width}x{height}] are below the minimum region size of {min}")]
    InvalidDimensions { width: u32, height: u32, min: u32 },
    #[error("invalid builder configuration: {0}")]
    InvalidConfig(String),
    #[error(
        "connectivity repair gave up after {iterations} passes with {connected} of {total} regions connected"
    )]
    ConnectivityRepairExceeded {
        iterations: u32,
        connected: usize,
        total: usize,
    },
    #[error(transparent)]
    Unknown(#[from] anyhow::Error),
}
