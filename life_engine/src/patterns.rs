// patterns.rs - Built-in shapes that can be stamped onto a Grid

use crate::grid::Grid;

/// A named shape as (col, row) offsets from its top-left corner.
#[derive(Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(i32, i32)],
}

impl Pattern {
    /// (width, height) of the bounding box.
    pub fn size(&self) -> (i32, i32) {
        let width = self.cells.iter().map(|&(c, _)| c + 1).max().unwrap_or(0);
        let height = self.cells.iter().map(|&(_, r)| r + 1).max().unwrap_or(0);
        (width, height)
    }
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
        name: "Block",
        cells: &[(0, 0), (1, 0), (0, 1), (1, 1)],
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
        cells: &[(1, 0), (2, 0), (0, 1), (1, 1), (1, 2)],
    },
    Pattern {
        name: "Gosper Glider Gun",
        cells: &[
            (24, 0),
            (22, 1), (24, 1),
            (12, 2), (13, 2), (20, 2), (21, 2), (34, 2), (35, 2),
            (11, 3), (15, 3), (20, 3), (21, 3), (34, 3), (35, 3),
            (0, 4), (1, 4), (10, 4), (16, 4), (20, 4), (21, 4),
            (0, 5), (1, 5), (10, 5), (14, 5), (16, 5), (17, 5), (22, 5), (24, 5),
            (10, 6), (16, 6), (24, 6),
            (11, 7), (15, 7),
            (12, 8), (13, 8),
        ],
    },
];

/// Looks a pattern up by name, ignoring case.
pub fn find(name: &str) -> Option<&'static Pattern> {
    PATTERNS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}

/// Sets the pattern's cells alive with its top-left corner at (col, row).
///
/// On a wrapped grid offsets past an edge come back on the opposite side;
/// on a bounded grid they are dropped.
pub fn stamp(grid: &mut Grid, pattern: &Pattern, col: i32, row: i32) {
    let (cols, rows) = (grid.cols(), grid.rows());
    let wrapped = grid.is_wrapped();

    for &(dc, dr) in pattern.cells {
        let (mut c, mut r) = (col + dc, row + dr);
        if wrapped {
            c = c.rem_euclid(cols);
            r = r.rem_euclid(rows);
        }
        grid.set_alive(c, r, true);
    }
}

/// Stamps the pattern centred on the grid.
pub fn stamp_centered(grid: &mut Grid, pattern: &Pattern) {
    let (width, height) = pattern.size();
    let col = (grid.cols() - width) / 2;
    let row = (grid.rows() - height) / 2;
    stamp(grid, pattern, col, row);
}
