use super::Grid;

/// A fixed shape that can be stamped onto the grid.
/// Cells are (row, col) offsets relative to an anchor and may be negative.
#[derive(Clone, Copy, Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub cells: &'static [(isize, isize)],
}

impl Pattern {
    /// Bring every pattern cell to life relative to the anchor.
    /// Cells that land off the grid, or past the coordinate range, are clipped.
    pub fn stamp(&self, grid: &mut Grid, row: isize, col: isize) {
        for &(dr, dc) in self.cells {
            if let (Some(r), Some(c)) = (row.checked_add(dr), col.checked_add(dc)) {
                grid.set_alive(r, c);
            }
        }
    }

    /// Bounding box of the offsets as (height, width)
    pub fn extent(&self) -> (usize, usize) {
        let span = |axis: fn(&(isize, isize)) -> isize| {
            let min = self.cells.iter().map(axis).min().unwrap_or(0);
            let max = self.cells.iter().map(axis).max().unwrap_or(-1);
            (max - min + 1) as usize
        };
        (span(|&(r, _)| r), span(|&(_, c)| c))
    }
}

/// Classic Game of Life patterns library
pub mod presets {
    use super::Pattern;

    /// Glider - simplest spaceship, moves one cell down-right every 4 generations
    pub const GLIDER: Pattern = Pattern {
        name: "Glider",
        description: "Moves diagonally (period 4)",
        cells: &[(0, 0), (1, 1), (1, 2), (0, 2), (-1, 2)],
    };

    /// Gosper Glider Gun - produces gliders indefinitely
    #[rustfmt::skip]
    pub const GLIDER_GUN: Pattern = Pattern {
        name: "Gosper Glider Gun",
        description: "Produces gliders (period 30)",
        cells: &[
            // Left square
            (0, 0), (1, 0), (0, 1), (1, 1),
            // Left circle
            (-2, 12), (-2, 13),
            (-1, 11),
            (0, 10), (1, 10), (2, 10),
            (3, 11),
            (4, 12), (4, 13),
            (1, 14),
            (-1, 15), (3, 15),
            (0, 16), (1, 16), (2, 16),
            (1, 17),
            // Middle pieces
            (-2, 20), (-1, 20), (0, 20),
            (-2, 21), (-1, 21), (0, 21),
            (-3, 22), (1, 22),
            (-4, 24), (-3, 24), (1, 24), (2, 24),
            // Right square
            (-2, 34), (-1, 34), (-2, 35), (-1, 35),
        ],
    };

    /// Block - simple still life
    pub const BLOCK: Pattern = Pattern {
        name: "Block",
        description: "Still life",
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1)],
    };

    /// Blinker - period 2 oscillator
    pub const BLINKER: Pattern = Pattern {
        name: "Blinker",
        description: "Oscillator (period 2)",
        cells: &[(0, 0), (0, 1), (0, 2)],
    };

    /// Toad - period 2 oscillator
    pub const TOAD: Pattern = Pattern {
        name: "Toad",
        description: "Oscillator (period 2)",
        cells: &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
    };

    /// Beacon - period 2 oscillator
    pub const BEACON: Pattern = Pattern {
        name: "Beacon",
        description: "Oscillator (period 2)",
        cells: &[(0, 0), (0, 1), (1, 0), (2, 3), (3, 2), (3, 3)],
    };

    /// Lightweight Spaceship (LWSS)
    #[rustfmt::skip]
    pub const LWSS: Pattern = Pattern {
        name: "LWSS",
        description: "Lightweight Spaceship (period 4)",
        cells: &[
            (0, 1), (0, 4),
            (1, 0),
            (2, 0), (2, 4),
            (3, 0), (3, 1), (3, 2), (3, 3),
        ],
    };

    /// R-pentomino - classic methuselah (stabilizes after 1103 generations)
    pub const R_PENTOMINO: Pattern = Pattern {
        name: "R-pentomino",
        description: "Methuselah - stabilizes at gen 1103",
        cells: &[(0, 1), (0, 2), (1, 0), (1, 1), (2, 1)],
    };

    /// Acorn - small methuselah that stabilizes after 5206 generations
    pub const ACORN: Pattern = Pattern {
        name: "Acorn",
        description: "Methuselah - stabilizes at gen 5206",
        cells: &[(0, 1), (1, 3), (2, 0), (2, 1), (2, 4), (2, 5), (2, 6)],
    };

    /// Get all available patterns
    pub fn all() -> &'static [Pattern] {
        &[
            GLIDER,
            GLIDER_GUN,
            BLOCK,
            BLINKER,
            TOAD,
            BEACON,
            LWSS,
            R_PENTOMINO,
            ACORN,
        ]
    }
}
