use hashbrown::HashSet;
use rand::{seq::SliceRandom as _, Rng as _};

use crate::{dims::Dims, grid::Grid};

use super::{GenError, MazeAlgorithm, Random};

/// Loop-erased random walks, committed walk by walk against the growing
/// tree. Like Aldous-Broder this samples spanning trees uniformly, but it
/// speeds up as the tree grows and is usually much faster in practice.
#[derive(Debug)]
pub struct Wilsons;

impl MazeAlgorithm for Wilsons {
    fn run(&self, grid: &mut Grid, rng: &mut Random) -> Result<(), GenError> {
        let mut unvisited: Vec<Dims> = grid.iter_pos().collect();
        let mut outside_tree: HashSet<Dims> = unvisited.iter().copied().collect();

        // one arbitrary cell seeds the tree
        let first = unvisited.swap_remove(rng.gen_range(0..unvisited.len()));
        outside_tree.remove(&first);

        while !unvisited.is_empty() {
            let mut cell = *unvisited.choose(rng).expect("unvisited is non-empty");
            let mut path = vec![cell];

            // walk until the tree is hit, erasing loops as they form; tree
            // cells can therefore only ever appear as the last path element
            while outside_tree.contains(&cell) {
                cell = *grid
                    .neighbors(cell)
                    .choose(rng)
                    .ok_or(GenError::IsolatedCell(cell))?;

                match path.iter().position(|&pos| pos == cell) {
                    Some(i) => path.truncate(i + 1),
                    None => path.push(cell),
                }
            }

            for pair in path.windows(2) {
                grid.link(pair[0], pair[1]);
            }
            for &pos in &path[..path.len() - 1] {
                outside_tree.remove(&pos);
            }
            unvisited.retain(|pos| outside_tree.contains(pos));

            log::trace!("committed a walk of {} new cells", path.len() - 1);
        }

        Ok(())
    }
}
