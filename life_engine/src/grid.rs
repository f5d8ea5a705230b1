// grid.rs - Grid and neighbor topology for Conway's Game of Life

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use rand::Rng;
use tracing::{debug, info};

use crate::error::{Error, Result};

/// Largest accepted width or height.
pub const MAX_DIMENSION: i32 = 4096;

/// Moore neighborhood as (d_col, d_row), row by row.
const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1,  0),          (1,  0),
    (-1,  1), (0,  1), (1,  1),
];

/// How the grid edges behave when looking up neighbors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Topology {
    /// Neighbors past an edge do not exist.
    #[default]
    Bounded,
    /// Edges connect to the opposite edge (torus).
    Wrapped,
}

impl Topology {
    pub fn from_wrap(wrap: bool) -> Self {
        if wrap { Topology::Wrapped } else { Topology::Bounded }
    }

    pub fn is_wrapped(self) -> bool {
        self == Topology::Wrapped
    }

    pub fn toggled(self) -> Self {
        match self {
            Topology::Bounded => Topology::Wrapped,
            Topology::Wrapped => Topology::Bounded,
        }
    }
}

/// One automaton unit. Neighbor links are indices into the owning grid.
#[derive(Debug, Clone, Default)]
pub(crate) struct Cell {
    pub(crate) alive: bool,
    pub(crate) next_alive: bool,
    pub(crate) neighbors: Vec<usize>,
}

/// Read-only view of a cell handed to renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellView {
    pub col: i32,
    pub row: i32,
    pub alive: bool,
}

/// Fixed-size board of cells stored row-major, with precomputed neighbor links.
#[derive(Debug, Clone)]
pub struct Grid {
    cols     : i32,
    rows     : i32,
    topology : Topology,
    cells    : Vec<Cell>,
}

impl Grid {
    /// Creates a bounded grid with every cell dead.
    pub fn new(cols: i32, rows: i32) -> Result<Self> {
        Self::with_topology(cols, rows, Topology::Bounded)
    }

    pub fn with_topology(cols: i32, rows: i32, topology: Topology) -> Result<Self> {
        if cols <= 0 || rows <= 0 || cols > MAX_DIMENSION || rows > MAX_DIMENSION {
            return Err(Error::InvalidDimensions { cols, rows });
        }

        let mut grid = Self {
            cols,
            rows,
            topology,
            cells: vec![Cell::default(); (cols * rows) as usize],
        };
        grid.link_neighbors(topology);
        Ok(grid)
    }

    pub fn cols(&self) -> i32 {
        self.cols
    }

    pub fn rows(&self) -> i32 {
        self.rows
    }

    pub fn topology(&self) -> Topology {
        self.topology
    }

    pub fn is_wrapped(&self) -> bool {
        self.topology.is_wrapped()
    }

    pub fn contains(&self, col: i32, row: i32) -> bool {
        col >= 0 && col < self.cols && row >= 0 && row < self.rows
    }

    fn index(&self, col: i32, row: i32) -> Option<usize> {
        self.contains(col, row).then(|| (row * self.cols + col) as usize)
    }

    fn position(&self, index: usize) -> (i32, i32) {
        let index = index as i32;
        (index % self.cols, index / self.cols)
    }

    /// Rebuilds every cell's neighbor list from scratch for `topology`.
    ///
    /// Wrapped cells always get 8 links, even on grids narrower than 3 where
    /// the same cell shows up more than once. Bounded cells drop the
    /// off-board positions.
    pub fn link_neighbors(&mut self, topology: Topology) {
        let (cols, rows) = (self.cols, self.rows);

        for index in 0..self.cells.len() {
            let (col, row) = self.position(index);
            let links = &mut self.cells[index].neighbors;
            links.clear();

            for &(dc, dr) in &NEIGHBOR_OFFSETS {
                let (mut nc, mut nr) = (col + dc, row + dr);
                match topology {
                    Topology::Wrapped => {
                        nc = nc.rem_euclid(cols);
                        nr = nr.rem_euclid(rows);
                    }
                    Topology::Bounded => {
                        if nc < 0 || nc >= cols || nr < 0 || nr >= rows {
                            continue;
                        }
                    }
                }
                links.push((nr * cols + nc) as usize);
            }
        }

        self.topology = topology;
        debug!(cols, rows, ?topology, "linked neighbors");
    }

    /// Flips between bounded and wrapped edges, returning the new topology.
    pub fn toggle_wrap(&mut self) -> Topology {
        let topology = self.topology.toggled();
        self.link_neighbors(topology);
        info!(?topology, "topology changed");
        topology
    }

    /// Paint or erase one cell. Coordinates off the board are ignored.
    pub fn set_alive(&mut self, col: i32, row: i32, alive: bool) {
        if let Some(index) = self.index(col, row) {
            self.cells[index].alive = alive;
        }
    }

    pub fn toggle(&mut self, col: i32, row: i32) {
        if let Some(index) = self.index(col, row) {
            let cell = &mut self.cells[index];
            cell.alive = !cell.alive;
        }
    }

    /// Off-board coordinates read as dead.
    pub fn get_alive(&self, col: i32, row: i32) -> bool {
        self.index(col, row).is_some_and(|index| self.cells[index].alive)
    }

    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            cell.alive = false;
            cell.next_alive = false;
        }
        info!("grid cleared");
    }

    /// Sets each cell alive with probability `density`, clamped to [0, 1].
    pub fn randomize<R: Rng>(&mut self, density: f64, rng: &mut R) {
        let density = if density.is_nan() { 0.0 } else { density.clamp(0.0, 1.0) };
        for cell in &mut self.cells {
            cell.alive = rng.gen_bool(density);
            cell.next_alive = false;
        }
        info!(density, alive = self.alive_count(), "grid randomized");
    }

    pub fn alive_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.alive).count()
    }

    /// Coordinates of the cells linked to (col, row). Empty off the board.
    pub fn neighbors(&self, col: i32, row: i32) -> impl Iterator<Item = (i32, i32)> + '_ {
        let links: &[usize] = match self.index(col, row) {
            Some(index) => self.cells[index].neighbors.as_slice(),
            None => &[],
        };
        links.iter().map(move |&index| self.position(index))
    }

    pub fn live_neighbors(&self, col: i32, row: i32) -> usize {
        self.index(col, row)
            .map_or(0, |index| self.live_neighbors_at(index))
    }

    pub(crate) fn live_neighbors_at(&self, index: usize) -> usize {
        self.cells[index]
            .neighbors
            .iter()
            .filter(|&&n| self.cells[n].alive)
            .count()
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    pub(crate) fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub(crate) fn is_alive_at(&self, index: usize) -> bool {
        self.cells[index].alive
    }

    /// Row-major walk over every cell.
    pub fn cells(&self) -> impl Iterator<Item = CellView> + '_ {
        self.cells.iter().enumerate().map(move |(index, cell)| {
            let (col, row) = self.position(index);
            CellView { col, row, alive: cell.alive }
        })
    }

    /// Hash of the alive bits only; equal boards hash equal.
    pub fn state_hash(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.cols.hash(&mut hasher);
        self.rows.hash(&mut hasher);
        for cell in &self.cells {
            cell.alive.hash(&mut hasher);
        }
        hasher.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn neighbor_count(grid: &Grid, col: i32, row: i32) -> usize {
        grid.neighbors(col, row).count()
    }

    #[test]
    fn rejects_non_positive_dimensions() {
        assert!(matches!(Grid::new(0, 5), Err(Error::InvalidDimensions { cols: 0, rows: 5 })));
        assert!(Grid::new(5, -1).is_err());
        assert!(Grid::new(MAX_DIMENSION + 1, 5).is_err());
        assert!(Grid::new(1, 1).is_ok());
    }

    #[test]
    fn new_grid_is_dead_and_bounded() {
        let grid = Grid::new(6, 4).unwrap();
        assert_eq!(grid.alive_count(), 0);
        assert_eq!(grid.topology(), Topology::Bounded);
        assert_eq!(grid.cells().count(), 24);
    }

    #[test]
    fn bounded_neighbor_counts() {
        let grid = Grid::new(5, 4).unwrap();
        for view in grid.cells() {
            let on_col_edge = view.col == 0 || view.col == 4;
            let on_row_edge = view.row == 0 || view.row == 3;
            let expected = match (on_col_edge, on_row_edge) {
                (true, true) => 3,
                (true, false) | (false, true) => 5,
                (false, false) => 8,
            };
            assert_eq!(neighbor_count(&grid, view.col, view.row), expected, "cell {view:?}");
        }
    }

    #[test]
    fn wrapped_neighbor_counts() {
        let grid = Grid::with_topology(5, 4, Topology::Wrapped).unwrap();
        for view in grid.cells() {
            assert_eq!(neighbor_count(&grid, view.col, view.row), 8);
        }
    }

    #[test]
    fn wrapped_corner_links_to_opposite_edges() {
        let grid = Grid::with_topology(5, 4, Topology::Wrapped).unwrap();
        let mut links: Vec<_> = grid.neighbors(0, 0).collect();
        links.sort();
        assert_eq!(
            links,
            vec![(0, 1), (0, 3), (1, 0), (1, 1), (1, 3), (4, 0), (4, 1), (4, 3)]
        );
    }

    #[test]
    fn tiny_wrapped_grid_still_has_eight_links() {
        let grid = Grid::with_topology(1, 1, Topology::Wrapped).unwrap();
        assert_eq!(neighbor_count(&grid, 0, 0), 8);
        assert!(grid.neighbors(0, 0).all(|pos| pos == (0, 0)));
    }

    #[test]
    fn relinking_is_idempotent() {
        let mut grid = Grid::new(7, 5).unwrap();
        grid.link_neighbors(Topology::Wrapped);
        let first: Vec<Vec<_>> = (0..35).map(|i| grid.cells[i].neighbors.clone()).collect();
        grid.link_neighbors(Topology::Wrapped);
        let second: Vec<Vec<_>> = (0..35).map(|i| grid.cells[i].neighbors.clone()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn toggle_wrap_switches_topology() {
        let mut grid = Grid::new(4, 4).unwrap();
        assert_eq!(grid.toggle_wrap(), Topology::Wrapped);
        assert_eq!(neighbor_count(&grid, 0, 0), 8);
        assert_eq!(grid.toggle_wrap(), Topology::Bounded);
        assert_eq!(neighbor_count(&grid, 0, 0), 3);
    }

    #[test]
    fn out_of_bounds_writes_are_ignored() {
        let mut grid = Grid::new(4, 3).unwrap();
        grid.set_alive(-1, 0, true);
        grid.set_alive(4, 3, true);
        grid.set_alive(0, -7, true);
        grid.toggle(100, 100);
        assert_eq!(grid.alive_count(), 0);
        assert!(!grid.get_alive(-1, 0));
        assert_eq!(grid.neighbors(-1, 0).count(), 0);
        assert_eq!(grid.live_neighbors(9, 9), 0);
    }

    #[test]
    fn set_get_and_toggle() {
        let mut grid = Grid::new(4, 3).unwrap();
        grid.set_alive(2, 1, true);
        assert!(grid.get_alive(2, 1));
        grid.toggle(2, 1);
        assert!(!grid.get_alive(2, 1));
        grid.toggle(3, 2);
        assert_eq!(grid.alive_count(), 1);
        assert_eq!(grid.live_neighbors(2, 1), 1);
    }

    #[test]
    fn clear_kills_everything() {
        let mut grid = Grid::new(4, 4).unwrap();
        grid.set_alive(1, 1, true);
        grid.set_alive(3, 0, true);
        grid.clear();
        assert_eq!(grid.alive_count(), 0);
    }

    #[test]
    fn randomize_density_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut grid = Grid::new(12, 9).unwrap();

        grid.randomize(0.0, &mut rng);
        assert_eq!(grid.alive_count(), 0);

        grid.randomize(1.0, &mut rng);
        assert_eq!(grid.alive_count(), 12 * 9);

        grid.randomize(-3.0, &mut rng);
        assert_eq!(grid.alive_count(), 0);

        grid.randomize(42.0, &mut rng);
        assert_eq!(grid.alive_count(), 12 * 9);

        grid.randomize(f64::NAN, &mut rng);
        assert_eq!(grid.alive_count(), 0);
    }

    #[test]
    fn randomize_is_reproducible_with_seed() {
        let mut a = Grid::new(20, 20).unwrap();
        let mut b = Grid::new(20, 20).unwrap();
        a.randomize(0.4, &mut ChaCha8Rng::seed_from_u64(99));
        b.randomize(0.4, &mut ChaCha8Rng::seed_from_u64(99));
        assert_eq!(a.state_hash(), b.state_hash());
        assert!(a.alive_count() > 0 && a.alive_count() < 400);
    }

    #[test]
    fn cells_iterate_row_major() {
        let mut grid = Grid::new(3, 2).unwrap();
        grid.set_alive(2, 0, true);
        let views: Vec<_> = grid.cells().collect();
        assert_eq!(views[0], CellView { col: 0, row: 0, alive: false });
        assert_eq!(views[2], CellView { col: 2, row: 0, alive: true });
        assert_eq!(views[3], CellView { col: 0, row: 1, alive: false });
    }
}
