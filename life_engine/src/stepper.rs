// stepper.rs - One synchronous Life generation over a Grid

use crate::grid::Grid;

/// Conway's B3/S23 rule for a single cell.
pub fn next_state(alive: bool, live_neighbors: usize) -> bool {
    match (alive, live_neighbors) {
        (true, 2) | (true, 3) => true,   // Survival
        (false, 3)            => true,   // Birth
        _                     => false,  // Death or stays dead
    }
}

/// Advances `grid` by one generation.
///
/// Every `next_alive` is computed from the current `alive` values before any
/// `alive` is overwritten. Generation counting is left to the caller.
pub fn step_once(grid: &mut Grid) {
    // Phase 1: compute from the settled generation only
    for index in 0..grid.cell_count() {
        let next = next_state(grid.is_alive_at(index), grid.live_neighbors_at(index));
        grid.cells_mut()[index].next_alive = next;
    }

    // Phase 2: apply
    for cell in grid.cells_mut() {
        cell.alive = cell.next_alive;
    }
}
