// patterns.rs - Seed patterns stamped into a generation

use crate::grid::CellGrid;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// A named shape, as `(x, y)` offsets from its top-left corner.
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Glider",
        cells: &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)],
    },
    Pattern {
        name: "Blinker",
        cells: &[(0, 0), (1, 0), (2, 0)],
    },
    Pattern {
        name: "Toad",
        cells: &[(1, 0), (2, 0), (3, 0), (0, 1), (1, 1), (2, 1)],
    },
    Pattern {
        name: "Beacon",
        cells: &[(0, 0), (1, 0), (0, 1), (1, 1), (2, 2), (3, 2), (2, 3), (3, 3)],
    },
    Pattern {
        name: "Pulsar",
        cells: &[
            // Top half
            (2, 0), (3, 0), (4, 0), (8, 0), (9, 0), (10, 0),
            (0, 2), (5, 2), (7, 2), (12, 2),
            (0, 3), (5, 3), (7, 3), (12, 3),
            (0, 4), (5, 4), (7, 4), (12, 4),
            (2, 5), (3, 5), (4, 5), (8, 5), (9, 5), (10, 5),
            // Bottom half (mirrored)
            (2, 7), (3, 7), (4, 7), (8, 7), (9, 7), (10, 7),
            (0, 8), (5, 8), (7, 8), (12, 8),
            (0, 9), (5, 9), (7, 9), (12, 9),
            (0, 10), (5, 10), (7, 10), (12, 10),
            (2, 12), (3, 12), (4, 12), (8, 12), (9, 12), (10, 12),
        ],
    },
    Pattern {
        name: "R-pentomino",
        cells: &[(1, 1), (2, 1), (2, 0), (1, 2), (0, 2)],
    },
    Pattern {
        name: "Gosper Glider Gun",
        cells: &[
            (0, 4), (1, 4), (0, 5), (1, 5),
            (10, 4), (10, 5), (10, 6), (11, 3), (11, 7), (12, 2), (12, 8),
            (13, 2), (13, 8), (14, 5), (15, 3), (15, 7), (16, 4), (16, 5),
            (16, 6), (17, 5), (20, 2), (20, 3), (20, 4), (21, 2), (21, 3),
            (21, 4), (22, 1), (22, 5), (24, 0), (24, 1), (24, 5), (24, 6),
            (34, 2), (34, 3), (35, 2), (35, 3),
        ],
    },
];

impl Pattern {
    /// Width and height of the pattern's bounding box.
    pub fn extent(&self) -> (usize, usize) {
        self.cells.iter().fold((0, 0), |(w, h), &(x, y)| (w.max(x + 1), h.max(y + 1)))
    }
}

pub fn find(name: &str) -> Option<&'static Pattern> {
    PATTERNS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}

/// Sets the pattern's cells alive with its top-left corner at `origin`.
/// Cells landing outside the grid are skipped. Returns how many were placed.
pub fn stamp(grid: &mut CellGrid, pattern: &Pattern, origin: (usize, usize)) -> usize {
    let mut placed = 0;
    for &(dx, dy) in pattern.cells {
        let (x, y) = (origin.0 + dx, origin.1 + dy);
        if grid.contains(x, y) {
            grid.set(x, y, true);
            placed += 1;
        }
    }
    placed
}

/// Clears the grid and stamps the pattern in the middle of it.
pub fn apply_pattern(grid: &mut CellGrid, pattern: &Pattern) -> usize {
    grid.clear();

    let (w, h) = pattern.extent();
    let origin = (
        grid.width().saturating_sub(w) / 2,
        grid.height().saturating_sub(h) / 2,
    );
    stamp(grid, pattern, origin)
}

/// Replaces every cell with a deterministic pseudo-random value, roughly one
/// in three alive.
pub fn apply_random_pattern(grid: &mut CellGrid, seed_value: u64) {
    let mut hasher = DefaultHasher::new();
    seed_value.hash(&mut hasher);
    let mut seed = hasher.finish();

    for y in 0..grid.height() {
        for x in 0..grid.width() {
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            grid.set(x, y, (seed >> 33) % 3 == 0);
        }
    }
}
