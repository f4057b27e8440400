// engine.rs - Shared engine state behind a single lock

use std::sync::{Arc, Mutex, MutexGuard};

use log::{debug, info, trace};

use crate::config::EngineConfig;
use crate::error::ConfigError;
use crate::grid::CellGrid;
use crate::patterns::{self, Pattern};
use crate::ring::GenerationRing;

/// Ticks skipped per pointer input.
pub const INPUT_BLOCK_STEP: u8 = 2;
/// Input stops adding to the block counter once it reaches this value.
pub const INPUT_BLOCK_CAP: u8 = 4;

/// What a pointer input does to the cell under it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pen {
    #[default]
    Draw,
    Toggle,
}

/// Outcome of one background tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// The simulation is stopped; nothing happened.
    Paused,
    /// Recent input held the simulation back for this tick.
    Blocked { remaining: u8 },
    /// A generation was computed.
    Advanced { changed: bool },
}

/// Everything the tick and input paths share.
#[derive(Debug)]
pub struct EngineState {
    ring        : GenerationRing,
    input_block : u8,
    running     : bool,
    pen         : Pen,
}

impl EngineState {
    pub fn ring(&self) -> &GenerationRing { &self.ring }

    pub fn ring_mut(&mut self) -> &mut GenerationRing { &mut self.ring }

    pub fn current(&self) -> &CellGrid { self.ring.current() }

    pub fn input_block(&self) -> u8 { self.input_block }

    pub fn set_input_block(&mut self, ticks: u8) { self.input_block = ticks; }

    pub fn is_running(&self) -> bool { self.running }

    pub fn pen(&self) -> Pen { self.pen }

    fn tick(&mut self) -> Tick {
        if !self.running {
            return Tick::Paused;
        }
        if self.input_block > 0 {
            self.input_block -= 1;
            trace!("tick blocked by input, {} left", self.input_block);
            return Tick::Blocked { remaining: self.input_block };
        }
        let (_, changed) = self.ring.compute_next();
        Tick::Advanced { changed }
    }

    fn paint(&mut self, x: usize, y: usize) -> bool {
        let pen = self.pen;
        let grid = self.ring.current_mut();
        if !grid.contains(x, y) {
            return false;
        }
        match pen {
            Pen::Draw   => grid.set(x, y, true),
            Pen::Toggle => grid.toggle(x, y),
        }
        if self.input_block < INPUT_BLOCK_CAP {
            self.input_block += INPUT_BLOCK_STEP;
        }
        true
    }
}

/// Cloneable handle to the engine. Every clone shares one lock, and every
/// operation holds it for its full duration and releases it before returning.
#[derive(Debug, Clone)]
pub struct Engine {
    state: Arc<Mutex<EngineState>>,
}

impl Engine {
    pub fn new(config: &EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let (width, height) = (config.grid_width(), config.grid_height());
        info!(
            "engine ready: {}x{} cells, {} generations of history",
            width, height, config.history_capacity
        );
        let state = EngineState {
            ring        : GenerationRing::new(config.history_capacity, width, height),
            input_block : 0,
            running     : false,
            pen         : Pen::default(),
        };
        Ok(Self { state: Arc::new(Mutex::new(state)) })
    }

    /// The shared lock, for callers that need several operations to be atomic
    /// with respect to the tick.
    pub fn lock(&self) -> MutexGuard<'_, EngineState> {
        // A poisoned lock means a grid precondition already failed while held.
        self.state.lock().expect("engine lock poisoned")
    }

    /// Runs one simulation interval.
    pub fn tick(&self) -> Tick {
        self.lock().tick()
    }

    /// Applies the pen at a cell of the current generation. Coordinates
    /// outside the grid are ignored and return `false`.
    pub fn paint(&self, x: usize, y: usize) -> bool {
        self.lock().paint(x, y)
    }

    pub fn step_history(&self, delta: isize) -> bool {
        let moved = self.lock().ring.step_relative(delta);
        debug!("history step {:+}: {}", delta, if moved { "moved" } else { "no history" });
        moved
    }

    pub fn resize(&self, width: usize, height: usize) {
        self.lock().ring.resize_current(width, height);
    }

    pub fn dimensions(&self) -> (usize, usize) {
        self.lock().current().dimensions()
    }

    /// Copy of the current generation, for drawing without holding the lock.
    pub fn snapshot(&self) -> CellGrid {
        self.lock().current().clone()
    }

    pub fn is_running(&self) -> bool {
        self.lock().running
    }

    pub fn set_running(&self, running: bool) {
        self.lock().running = running;
        info!("simulation {}", if running { "started" } else { "stopped" });
    }

    pub fn toggle_running(&self) -> bool {
        let running = {
            let mut state = self.lock();
            state.running = !state.running;
            state.running
        };
        info!("simulation {}", if running { "started" } else { "stopped" });
        running
    }

    pub fn pen(&self) -> Pen {
        self.lock().pen
    }

    pub fn set_pen(&self, pen: Pen) {
        self.lock().pen = pen;
    }

    pub fn toggle_pen(&self) -> Pen {
        let mut state = self.lock();
        state.pen = match state.pen {
            Pen::Draw   => Pen::Toggle,
            Pen::Toggle => Pen::Draw,
        };
        state.pen
    }

    pub fn set_input_block(&self, ticks: u8) {
        self.lock().input_block = ticks;
    }

    pub fn clear(&self) {
        self.lock().ring.current_mut().clear();
    }

    pub fn apply_pattern(&self, pattern: &Pattern) -> usize {
        let placed = patterns::apply_pattern(self.lock().ring.current_mut(), pattern);
        info!("applied {} ({} cells)", pattern.name, placed);
        placed
    }

    pub fn randomize(&self, seed: u64) {
        patterns::apply_random_pattern(self.lock().ring.current_mut(), seed);
        info!("random fill with seed {}", seed);
    }
}
