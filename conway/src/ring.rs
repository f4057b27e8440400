// ring.rs - Bounded generation history with oscillation and still-life collapse

use log::{debug, trace};

use crate::grid::CellGrid;

/// Fixed-capacity circular buffer of generations.
///
/// The slot under the pointer is always occupied. Slots fill lazily as
/// generations are computed; once the ring has wrapped, advancing overwrites
/// the oldest generation.
#[derive(Debug, Clone)]
pub struct GenerationRing {
    slots : Vec<Option<CellGrid>>,
    ptr   : usize,
}

impl GenerationRing {
    pub fn new(capacity: usize, width: usize, height: usize) -> Self {
        assert!(capacity > 0, "history capacity must be at least one generation");
        let mut slots = vec![None; capacity];
        slots[0] = Some(CellGrid::new(width, height));
        Self { slots, ptr: 0 }
    }

    pub fn capacity(&self) -> usize { self.slots.len() }

    /// Index of the current slot.
    pub fn position(&self) -> usize { self.ptr }

    /// Number of slots holding a generation.
    pub fn occupied(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn current(&self) -> &CellGrid {
        match &self.slots[self.ptr] {
            Some(grid) => grid,
            None => panic!("history slot {} under the pointer is empty", self.ptr),
        }
    }

    pub fn current_mut(&mut self) -> &mut CellGrid {
        let ptr = self.ptr;
        match &mut self.slots[ptr] {
            Some(grid) => grid,
            None => panic!("history slot {} under the pointer is empty", ptr),
        }
    }

    fn offset(&self, delta: isize) -> usize {
        (self.ptr as isize + delta).rem_euclid(self.capacity() as isize) as usize
    }

    fn step_once(&mut self, delta: isize) -> bool {
        let (width, height) = self.current().dimensions();
        let dest = self.offset(delta);
        match &mut self.slots[dest] {
            Some(grid) => {
                grid.resize_preserving_in_place(width, height);
                self.ptr = dest;
                true
            }
            None => false,
        }
    }

    /// Moves through history by `delta` generations.
    ///
    /// Each single step only lands on an occupied slot and brings that slot
    /// to the dimensions of the grid it came from. A multi-step move is all
    /// or nothing, and `|delta| >= capacity` always fails since the ring
    /// never holds that many generations behind or ahead of the pointer.
    pub fn step_relative(&mut self, delta: isize) -> bool {
        if delta.unsigned_abs() >= self.capacity() {
            return false;
        }

        let start = self.ptr;
        let unit = delta.signum();
        for _ in 0..delta.unsigned_abs() {
            if !self.step_once(unit) {
                self.ptr = start;
                return false;
            }
        }
        true
    }

    /// Advances one generation.
    ///
    /// Returns the generation now under the pointer and whether the rule
    /// changed any cell. A result equal to the generation two steps back
    /// rewinds onto that earlier slot, and an unchanged result rewinds onto
    /// the source slot. Either way the duplicate just written is dropped, so
    /// period-2 oscillators and still lifes never consume history.
    pub fn compute_next(&mut self) -> (&CellGrid, bool) {
        let cur = self.ptr;
        let next = self.offset(1);

        // A single slot holds no history: the result replaces it.
        if next == cur {
            let (result, changed) = self.current().next_generation();
            self.slots[cur] = Some(result);
            return (self.current(), changed);
        }

        let (width, height) = self.current().dimensions();

        let prev = if self.step_relative(-1) {
            let prev = self.ptr;
            self.step_relative(1);
            Some(prev)
        } else {
            None
        };

        // With two slots the target is also the previous generation.
        let displaced_prev = prev.filter(|&p| p == next).and_then(|p| self.slots[p].clone());

        let mut target = match self.slots[next].take() {
            Some(mut grid) => {
                grid.resize_preserving_in_place(width, height);
                grid
            }
            None => CellGrid::new(width, height),
        };

        let changed = self.current().next_generation_into(&mut target);
        self.slots[next] = Some(target);
        self.ptr = next;

        let repeats = prev.filter(|&p| match &displaced_prev {
            Some(grid) => grid == self.current(),
            None => self.slots[p].as_ref() == Some(self.current()),
        });

        if let Some(earlier) = repeats {
            debug!("period-2 oscillation, rewinding to slot {}", earlier);
            self.ptr = earlier;
            if earlier != next {
                self.slots[next] = None;
            }
        } else if !changed {
            debug!("fixed point, rewinding to slot {}", cur);
            self.ptr = cur;
            self.slots[next] = displaced_prev;
        } else {
            trace!("advanced to slot {}", next);
        }

        (self.current(), changed)
    }

    /// Resizes the current generation, keeping the overlapping cells.
    pub fn resize_current(&mut self, width: usize, height: usize) {
        let current = self.current_mut();
        if current.dimensions() != (width, height) {
            debug!("resizing current generation to {}x{}", width, height);
            *current = current.resize_preserving(width, height);
        }
    }
}
