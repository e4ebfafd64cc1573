use rand::Rng as _;
use smallvec::SmallVec;
use thiserror::Error;

use crate::{algorithms::Random, array::Array2D, dims::Dims};

use super::cell::{Cell, Direction};

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    #[error("invalid grid size: {0:?}")]
    InvalidSize(Dims),
}

/// Rectangular grid of cells. Adjacency is derived from indices; links are
/// the passages carved by a generator and always recorded on both endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Array2D<Cell>,
}

impl Grid {
    pub fn new(size: Dims) -> Result<Grid, GridError> {
        if !size.all_positive() {
            return Err(GridError::InvalidSize(size));
        }

        Ok(Grid {
            cells: Array2D::new(Cell::new(), size.0 as usize, size.1 as usize),
        })
    }

    pub fn size(&self) -> Dims {
        self.cells.size()
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub fn is_in_bounds(&self, pos: Dims) -> bool {
        self.cells.get(pos).is_some()
    }

    pub fn cell(&self, pos: Dims) -> Option<&Cell> {
        self.cells.get(pos)
    }

    /// In-bounds orthogonal neighbors, always in N, S, E, W order.
    pub fn neighbors(&self, pos: Dims) -> SmallVec<[Dims; 4]> {
        Direction::ALL
            .into_iter()
            .map(|dir| pos + dir.offset())
            .filter(|&next| self.is_in_bounds(next))
            .collect()
    }

    /// Carves a passage between two adjacent cells. Both endpoints are
    /// updated, so [`Grid::is_linked`] holds from either side.
    ///
    /// Panics if the cells are not adjacent or out of bounds; generators
    /// only ever link a cell to one of its neighbors.
    pub fn link(&mut self, a: Dims, b: Dims) {
        let dir = Direction::between(a, b).expect("linked cells must be adjacent");
        self.cells[a].open(dir);
        self.cells[b].open(dir.opposite());
    }

    /// Removes a passage, symmetrically. The algorithms in this crate never
    /// unlink; this exists for consumers that post-process a maze.
    pub fn unlink(&mut self, a: Dims, b: Dims) {
        let dir = Direction::between(a, b).expect("unlinked cells must be adjacent");
        self.cells[a].close(dir);
        self.cells[b].close(dir.opposite());
    }

    pub fn is_linked(&self, a: Dims, b: Dims) -> bool {
        match Direction::between(a, b) {
            Some(dir) => self.cells.get(a).map_or(false, |cell| cell.is_open(dir)),
            None => false,
        }
    }

    /// Cells this cell has a carved passage to, in N, S, E, W order.
    pub fn links(&self, pos: Dims) -> SmallVec<[Dims; 4]> {
        let cell = &self.cells[pos];
        Direction::ALL
            .into_iter()
            .filter(|&dir| cell.is_open(dir))
            .map(|dir| pos + dir.offset())
            .collect()
    }

    /// Total number of undirected links in the maze.
    pub fn link_count(&self) -> usize {
        // every passage is recorded on both of its endpoints
        self.cells.iter().map(Cell::open_count).sum::<usize>() / 2
    }

    pub fn random_cell(&self, rng: &mut Random) -> Dims {
        let Dims(width, height) = self.size();
        Dims(rng.gen_range(0..width), rng.gen_range(0..height))
    }

    /// Row-major traversal of all cell positions.
    pub fn iter_pos(&self) -> impl Iterator<Item = Dims> {
        let Dims(width, height) = self.size();
        (0..height).flat_map(move |y| (0..width).map(move |x| Dims(x, y)))
    }

    /// Rows from north to south, each a west-to-east position iterator.
    pub fn iter_rows(&self) -> impl Iterator<Item = impl Iterator<Item = Dims>> {
        let Dims(width, height) = self.size();
        (0..height).map(move |y| (0..width).map(move |x| Dims(x, y)))
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;

    use super::{Dims, Direction, Grid, GridError, Random};

    #[test]
    fn rejects_non_positive_sizes() {
        assert_eq!(Grid::new(Dims(0, 4)), Err(GridError::InvalidSize(Dims(0, 4))));
        assert_eq!(Grid::new(Dims(4, 0)), Err(GridError::InvalidSize(Dims(4, 0))));
        assert_eq!(
            Grid::new(Dims(-2, 3)),
            Err(GridError::InvalidSize(Dims(-2, 3)))
        );
        assert!(Grid::new(Dims(1, 1)).is_ok());
    }

    #[test]
    fn wires_neighbors_by_index() {
        let grid = Grid::new(Dims(3, 3)).unwrap();

        assert_eq!(
            grid.neighbors(Dims(1, 1)).as_slice(),
            &[Dims(1, 0), Dims(1, 2), Dims(2, 1), Dims(0, 1)]
        );
        // corner cells lose the out-of-bounds slots but keep the order
        assert_eq!(
            grid.neighbors(Dims(0, 0)).as_slice(),
            &[Dims(0, 1), Dims(1, 0)]
        );
        assert_eq!(
            grid.neighbors(Dims(2, 2)).as_slice(),
            &[Dims(2, 1), Dims(1, 2)]
        );
    }

    #[test]
    fn bounds_checked_lookup() {
        let grid = Grid::new(Dims(2, 2)).unwrap();
        assert!(grid.cell(Dims(1, 1)).is_some());
        assert!(grid.cell(Dims(2, 0)).is_none());
        assert!(grid.cell(Dims(0, -1)).is_none());
    }

    #[test]
    fn linking_is_symmetric() {
        let mut grid = Grid::new(Dims(2, 2)).unwrap();
        let (a, b) = (Dims(0, 0), Dims(1, 0));

        assert!(!grid.is_linked(a, b));
        grid.link(a, b);
        assert!(grid.is_linked(a, b));
        assert!(grid.is_linked(b, a));
        assert_eq!(grid.link_count(), 1);

        grid.unlink(b, a);
        assert!(!grid.is_linked(a, b));
        assert!(!grid.is_linked(b, a));
        assert_eq!(grid.link_count(), 0);
    }

    #[test]
    fn links_follow_direction_order() {
        let mut grid = Grid::new(Dims(3, 3)).unwrap();
        let center = Dims(1, 1);
        grid.link(center, Dims(2, 1));
        grid.link(center, Dims(1, 0));

        assert_eq!(grid.links(center).as_slice(), &[Dims(1, 0), Dims(2, 1)]);
        assert!(grid.links(Dims(0, 0)).is_empty());
    }

    #[test]
    fn is_linked_rejects_non_neighbors() {
        let mut grid = Grid::new(Dims(3, 1)).unwrap();
        grid.link(Dims(0, 0), Dims(1, 0));
        grid.link(Dims(1, 0), Dims(2, 0));

        assert!(!grid.is_linked(Dims(0, 0), Dims(2, 0)));
        assert!(!grid.is_linked(Dims(0, 0), Dims(0, 0)));
        // edge of the grid, neighbor slot absent
        assert!(!grid.is_linked(Dims(2, 0), Dims(3, 0)));
    }

    #[test]
    fn random_cell_stays_in_bounds() {
        let grid = Grid::new(Dims(4, 7)).unwrap();
        let mut rng = Random::seed_from_u64(0);

        for _ in 0..100 {
            assert!(grid.is_in_bounds(grid.random_cell(&mut rng)));
        }
    }

    #[test]
    fn iter_pos_is_row_major() {
        let grid = Grid::new(Dims(2, 2)).unwrap();
        let positions: Vec<_> = grid.iter_pos().collect();
        assert_eq!(
            positions,
            vec![Dims(0, 0), Dims(1, 0), Dims(0, 1), Dims(1, 1)]
        );

        let rows: Vec<Vec<_>> = grid.iter_rows().map(|row| row.collect()).collect();
        assert_eq!(
            rows,
            vec![
                vec![Dims(0, 0), Dims(1, 0)],
                vec![Dims(0, 1), Dims(1, 1)],
            ]
        );
    }
}
