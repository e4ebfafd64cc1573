use rand::{seq::SliceRandom as _, Rng as _};

use crate::{
    dims::Dims,
    grid::{Direction, Grid},
};

use super::{GenError, MazeAlgorithm, Random};

/// Carves each row as a sequence of eastward runs, closing every run with a
/// single north link from a randomly chosen member.
///
/// The top row cannot link north and so becomes one open corridor, which is
/// what connects all the runs below it into a single tree.
#[derive(Debug)]
pub struct Sidewinder;

impl MazeAlgorithm for Sidewinder {
    fn run(&self, grid: &mut Grid, rng: &mut Random) -> Result<(), GenError> {
        for row in grid.iter_rows() {
            let mut run: Vec<Dims> = Vec::new();

            for pos in row {
                run.push(pos);

                let at_eastern_boundary = !grid.is_in_bounds(pos + Direction::East.offset());
                let at_northern_boundary = !grid.is_in_bounds(pos + Direction::North.offset());

                let close_out =
                    at_eastern_boundary || (!at_northern_boundary && rng.gen_bool(0.5));

                if close_out {
                    // the chosen run member gets the north link, not the
                    // cell that closed the run
                    let &member = run.choose(rng).expect("run is never empty here");
                    let north = member + Direction::North.offset();
                    if grid.is_in_bounds(north) {
                        grid.link(member, north);
                    }
                    run.clear();
                } else {
                    grid.link(pos, pos + Direction::East.offset());
                }
            }
        }

        Ok(())
    }
}
