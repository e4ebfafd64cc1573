mod render;

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use thiserror::Error;

use cmazer::{
    generate, AldousBroder, BinaryTree, Dims, GenError, MazeAlgorithm, Sidewinder, Wilsons,
};

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Algorithm {
    BinaryTree,
    Sidewinder,
    AldousBroder,
    Wilsons,
}

impl Algorithm {
    fn as_algorithm(self) -> &'static dyn MazeAlgorithm {
        match self {
            Algorithm::BinaryTree => &BinaryTree,
            Algorithm::Sidewinder => &Sidewinder,
            Algorithm::AldousBroder => &AldousBroder,
            Algorithm::Wilsons => &Wilsons,
        }
    }
}

#[derive(Parser, Debug)]
#[clap(version, author, about, name = "mazer")]
struct Args {
    #[clap(value_enum, help = "Maze generation algorithm")]
    algorithm: Algorithm,

    #[clap(
        short = 'W',
        long,
        default_value_t = 10,
        value_parser = clap::value_parser!(i32).range(1..),
        help = "Maze width in cells"
    )]
    width: i32,

    #[clap(
        short = 'H',
        long,
        default_value_t = 10,
        value_parser = clap::value_parser!(i32).range(1..),
        help = "Maze height in cells"
    )]
    height: i32,

    #[clap(short, long, help = "Seed for deterministic generation")]
    seed: Option<u64>,

    #[clap(short, long, help = "Write the maze as a PNG image to this path")]
    output: Option<PathBuf>,

    #[clap(
        long,
        default_value_t = 10,
        value_parser = clap::value_parser!(u32).range(2..),
        help = "Cell size of the image in pixels"
    )]
    cell_size: u32,

    #[clap(
        long,
        default_value_t = 1,
        value_parser = clap::value_parser!(u32).range(1..),
        help = "Wall thickness of the image in pixels"
    )]
    wall_size: u32,
}

#[derive(Debug, Error)]
enum MazerError {
    #[error(transparent)]
    Generation(#[from] GenError),

    #[error("failed to write image: {0}")]
    Image(#[from] image::ImageError),
}

fn main() -> Result<(), MazerError> {
    env_logger::init();
    let args = Args::parse();

    let grid = generate(
        args.algorithm.as_algorithm(),
        Dims(args.width, args.height),
        args.seed,
    )?;

    print!("{}", render::text::render(&grid));

    if let Some(path) = &args.output {
        let img = render::image::render(&grid, args.cell_size, args.wall_size);
        img.save(path)?;
        log::info!("wrote maze image to {}", path.display());
    }

    Ok(())
}
