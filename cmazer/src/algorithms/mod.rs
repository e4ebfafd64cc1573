mod aldous_broder;
mod binary_tree;
mod sidewinder;
mod wilsons;

use std::fmt;

use rand::{thread_rng, Rng as _, SeedableRng as _};
use thiserror::Error;

use crate::{
    dims::Dims,
    grid::{Grid, GridError},
};

pub use aldous_broder::AldousBroder;
pub use binary_tree::BinaryTree;
pub use sidewinder::Sidewinder;
pub use wilsons::Wilsons;

/// Random number generator used for anything, where determinism is required.
pub type Random = rand_xoshiro::Xoshiro256StarStar;

#[derive(Debug, Error)]
pub enum GenError {
    #[error(transparent)]
    Grid(#[from] GridError),

    /// A random walk stood on a cell with no neighbors. Cannot happen on a
    /// valid grid; kept as a defensive check instead of an unwrap.
    #[error("cell {0:?} has no neighbors to walk to")]
    IsolatedCell(Dims),
}

/// A maze generation algorithm. Takes a freshly constructed, unlinked grid
/// and carves links into it until the link graph is a spanning tree.
pub trait MazeAlgorithm: fmt::Debug + Sync + Send {
    fn run(&self, grid: &mut Grid, rng: &mut Random) -> Result<(), GenError>;
}

/// Builds a grid of the given size and runs `algorithm` over it.
///
/// With a `seed` the result is fully deterministic; without one the RNG is
/// seeded from thread entropy.
pub fn generate(
    algorithm: &dyn MazeAlgorithm,
    size: Dims,
    seed: Option<u64>,
) -> Result<Grid, GenError> {
    let mut rng = Random::seed_from_u64(seed.unwrap_or_else(|| thread_rng().gen()));
    let mut grid = Grid::new(size)?;

    log::debug!("generating {:?} maze of size {:?}", algorithm, size);
    algorithm.run(&mut grid, &mut rng)?;
    debug_assert_eq!(grid.link_count(), grid.cell_count() - 1);

    Ok(grid)
}
