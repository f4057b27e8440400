// error.rs - Configuration errors

/// Rejected engine configuration.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("history capacity must be at least one generation")]
    NoHistory,
    #[error("cell size must be at least one pixel")]
    ZeroCellSize,
    #[error("tick interval must be non-zero")]
    ZeroTickInterval,
    #[error("a {width}x{height} px area holds no {cell_size} px cells")]
    EmptyArea { width: usize, height: usize, cell_size: usize },
}
