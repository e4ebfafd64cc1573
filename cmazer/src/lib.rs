pub mod algorithms;
pub mod array;
pub mod dims;
pub mod grid;

pub use algorithms::{
    generate, AldousBroder, BinaryTree, GenError, MazeAlgorithm, Random, Sidewinder, Wilsons,
};
pub use dims::Dims;
pub use grid::{Cell, Direction, Grid, GridError};
