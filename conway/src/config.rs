// config.rs - Engine sizing and timing

use std::time::Duration;

use crate::error::ConfigError;

pub const DEFAULT_WIDTH_PX        : usize = 400;
pub const DEFAULT_HEIGHT_PX       : usize = 400;
pub const DEFAULT_CELL_SIZE       : usize = 5;
pub const DEFAULT_HISTORY_CAPACITY: usize = 100;
pub const DEFAULT_TICK_INTERVAL   : Duration = Duration::from_millis(100);

/// Engine configuration. Grid dimensions are the drawing area in pixels
/// divided by the per-cell pixel size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub history_capacity : usize,
    pub width_px         : usize,
    pub height_px        : usize,
    pub cell_size        : usize,
    pub tick_interval    : Duration,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            history_capacity : DEFAULT_HISTORY_CAPACITY,
            width_px         : DEFAULT_WIDTH_PX,
            height_px        : DEFAULT_HEIGHT_PX,
            cell_size        : DEFAULT_CELL_SIZE,
            tick_interval    : DEFAULT_TICK_INTERVAL,
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.history_capacity == 0 {
            return Err(ConfigError::NoHistory);
        }
        if self.cell_size == 0 {
            return Err(ConfigError::ZeroCellSize);
        }
        if self.tick_interval.is_zero() {
            return Err(ConfigError::ZeroTickInterval);
        }
        if self.grid_width() == 0 || self.grid_height() == 0 {
            return Err(ConfigError::EmptyArea {
                width     : self.width_px,
                height    : self.height_px,
                cell_size : self.cell_size,
            });
        }
        Ok(())
    }

    pub fn grid_width(&self) -> usize {
        self.width_px.checked_div(self.cell_size).unwrap_or(0)
    }

    pub fn grid_height(&self) -> usize {
        self.height_px.checked_div(self.cell_size).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_give_an_80_cell_square() {
        let config = EngineConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!((config.grid_width(), config.grid_height()), (80, 80));
    }

    #[test]
    fn rejects_each_invalid_field() {
        let none = EngineConfig { history_capacity: 0, ..Default::default() };
        assert_eq!(none.validate(), Err(ConfigError::NoHistory));

        let single = EngineConfig { history_capacity: 1, ..Default::default() };
        assert_eq!(single.validate(), Ok(()));

        let no_cells = EngineConfig { cell_size: 0, ..Default::default() };
        assert_eq!(no_cells.validate(), Err(ConfigError::ZeroCellSize));

        let frozen = EngineConfig { tick_interval: Duration::ZERO, ..Default::default() };
        assert_eq!(frozen.validate(), Err(ConfigError::ZeroTickInterval));

        let sliver = EngineConfig { width_px: 4, ..Default::default() };
        assert!(matches!(sliver.validate(), Err(ConfigError::EmptyArea { width: 4, .. })));
    }
}
