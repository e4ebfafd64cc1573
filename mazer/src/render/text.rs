use cmazer::{Dims, Direction, Grid};

/// ASCII rendering of a finished maze. A wall is drawn on every side whose
/// neighbor exists but is not linked, and on the outer boundary.
pub fn render(grid: &Grid) -> String {
    let Dims(width, height) = grid.size();

    let mut out = String::from("+");
    for _ in 0..width {
        out.push_str("---+");
    }
    out.push('\n');

    for row in grid.iter_rows() {
        let mut body = String::from("|");
        let mut floor = String::from("+");

        for pos in row {
            body.push_str("   ");
            body.push(if grid.is_linked(pos, pos + Direction::East.offset()) {
                ' '
            } else {
                '|'
            });

            floor.push_str(if grid.is_linked(pos, pos + Direction::South.offset()) {
                "   "
            } else {
                "---"
            });
            floor.push('+');
        }

        out.push_str(&body);
        out.push('\n');
        out.push_str(&floor);
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::render;
    use cmazer::{Dims, Grid};

    #[test]
    fn single_cell_is_a_box() {
        let grid = Grid::new(Dims(1, 1)).unwrap();
        assert_eq!(render(&grid), "+---+\n|   |\n+---+\n");
    }

    #[test]
    fn walls_follow_links() {
        // ┌───────┐
        // │ a   b │
        // │ ───   │
        // │ c │ d │
        // └───────┘
        let mut grid = Grid::new(Dims(2, 2)).unwrap();
        grid.link(Dims(0, 0), Dims(1, 0));
        grid.link(Dims(1, 0), Dims(1, 1));

        let expected = "\
+---+---+
|       |
+---+   +
|   |   |
+---+---+
";
        assert_eq!(render(&grid), expected);
    }
}
