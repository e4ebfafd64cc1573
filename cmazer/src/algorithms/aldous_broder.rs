use rand::seq::SliceRandom as _;

use crate::grid::Grid;

use super::{GenError, MazeAlgorithm, Random};

/// Unbiased random walk that links every neighbor it steps into for the
/// first time. Samples uniformly from all spanning trees of the grid.
///
/// "Visited" means "has at least one link", which leaves the starting cell
/// out of the count until the first step links it. There is no step bound;
/// termination is probabilistic (expected cover time, roughly cubic in the
/// cell count in the worst case).
#[derive(Debug)]
pub struct AldousBroder;

impl MazeAlgorithm for AldousBroder {
    fn run(&self, grid: &mut Grid, rng: &mut Random) -> Result<(), GenError> {
        let mut current = grid.random_cell(rng);
        let mut unvisited = grid.cell_count() - 1;

        while unvisited > 0 {
            let next = *grid
                .neighbors(current)
                .choose(rng)
                .ok_or(GenError::IsolatedCell(current))?;

            if grid.links(next).is_empty() {
                grid.link(current, next);
                unvisited -= 1;
            }

            current = next;
        }

        Ok(())
    }
}
