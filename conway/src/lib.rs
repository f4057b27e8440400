//! Conway's Game of Life with a bounded, navigable generation history.
//!
//! [`GenerationRing`] keeps the most recent generations in a fixed-capacity
//! ring and folds period-2 oscillations and still lifes back onto existing
//! slots instead of recording duplicates. [`Engine`] wraps the ring and the
//! interactive state in one lock shared by the background [`spawn_ticker`]
//! task and pointer input.

pub mod config;
pub mod engine;
pub mod error;
pub mod grid;       // Single generation
pub mod patterns;   // Seed shapes
pub mod ring;       // Generation history
pub mod ticker;

pub use config::EngineConfig;
pub use engine::{Engine, EngineState, Pen, Tick};
pub use error::ConfigError;
pub use grid::CellGrid;
pub use ring::GenerationRing;
pub use ticker::spawn_ticker;
