use rand::seq::SliceRandom as _;
use smallvec::SmallVec;

use crate::{
    dims::Dims,
    grid::{Direction, Grid},
};

use super::{GenError, MazeAlgorithm, Random};

/// Links every cell to a random one of its north/east neighbors.
///
/// The single cell with neither (the north-east corner) is skipped, and no
/// link ever points south or west, so a cycle cannot form. The price is a
/// heavy corridor bias along the north and east edges.
#[derive(Debug)]
pub struct BinaryTree;

impl MazeAlgorithm for BinaryTree {
    fn run(&self, grid: &mut Grid, rng: &mut Random) -> Result<(), GenError> {
        for pos in grid.iter_pos() {
            let candidates: SmallVec<[Dims; 2]> = [Direction::North, Direction::East]
                .into_iter()
                .map(|dir| pos + dir.offset())
                .filter(|&next| grid.is_in_bounds(next))
                .collect();

            if let Some(&chosen) = candidates.choose(rng) {
                grid.link(pos, chosen);
            }
        }

        Ok(())
    }
}
