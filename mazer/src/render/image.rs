use cmazer::{Dims, Direction, Grid};
use image::{Rgb, RgbImage};

const WALL: Rgb<u8> = Rgb([0, 0, 0]);
const FLOOR: Rgb<u8> = Rgb([255, 255, 255]);

/// Raster rendering of a finished maze: `cell_size` pixels per cell, black
/// walls of `wall_size` thickness on every unlinked side.
///
/// Interior walls are drawn from the north/west perspective only; the south
/// and east outer borders are drawn along the last row and column.
pub fn render(grid: &Grid, cell_size: u32, wall_size: u32) -> RgbImage {
    let Dims(width, height) = grid.size();
    let (width, height) = (width as u32, height as u32);
    let wall_size = wall_size.min(cell_size);

    let mut img = RgbImage::from_pixel(width * cell_size, height * cell_size, FLOOR);

    for pos in grid.iter_pos() {
        let (x, y) = (pos.0 as u32, pos.1 as u32);
        let (x1, y1) = (x * cell_size, y * cell_size);
        let (x2, y2) = (x1 + cell_size, y1 + cell_size);

        if !grid.is_linked(pos, pos + Direction::North.offset()) {
            fill(&mut img, x1, y1, x2, y1 + wall_size);
        }
        if !grid.is_linked(pos, pos + Direction::West.offset()) {
            fill(&mut img, x1, y1, x1 + wall_size, y2);
        }
        if x == width - 1 && !grid.is_linked(pos, pos + Direction::East.offset()) {
            fill(&mut img, x2 - wall_size, y1, x2, y2);
        }
        if y == height - 1 && !grid.is_linked(pos, pos + Direction::South.offset()) {
            fill(&mut img, x1, y2 - wall_size, x2, y2);
        }
    }

    img
}

fn fill(img: &mut RgbImage, x1: u32, y1: u32, x2: u32, y2: u32) {
    for y in y1..y2.min(img.height()) {
        for x in x1..x2.min(img.width()) {
            img.put_pixel(x, y, WALL);
        }
    }
}
