use crate::dims::Dims;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// All directions in a fixed order. Algorithms pick neighbors by random
    /// index, so this order must never change.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    pub fn offset(self) -> Dims {
        match self {
            Self::North => Dims(0, -1),
            Self::South => Dims(0, 1),
            Self::East => Dims(1, 0),
            Self::West => Dims(-1, 0),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Self::North => Self::South,
            Self::South => Self::North,
            Self::East => Self::West,
            Self::West => Self::East,
        }
    }

    /// Returns the direction from `from` to `to`, or `None` if the cells are
    /// not orthogonally adjacent.
    pub fn between(from: Dims, to: Dims) -> Option<Direction> {
        match to - from {
            Dims(0, -1) => Some(Self::North),
            Dims(0, 1) => Some(Self::South),
            Dims(1, 0) => Some(Self::East),
            Dims(-1, 0) => Some(Self::West),
            _ => None,
        }
    }
}

/// Link state of a single cell. Holds no coordinates and no references; the
/// grid derives both from the arena index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cell {
    north: bool,
    south: bool,
    east: bool,
    west: bool,
}

impl Cell {
    pub fn new() -> Cell {
        Cell::default()
    }

    pub fn open(&mut self, dir: Direction) {
        *self.slot_mut(dir) = true;
    }

    pub fn close(&mut self, dir: Direction) {
        *self.slot_mut(dir) = false;
    }

    pub fn is_open(&self, dir: Direction) -> bool {
        match dir {
            Direction::North => self.north,
            Direction::South => self.south,
            Direction::East => self.east,
            Direction::West => self.west,
        }
    }

    pub fn open_count(&self) -> usize {
        Direction::ALL.into_iter().filter(|&d| self.is_open(d)).count()
    }

    fn slot_mut(&mut self, dir: Direction) -> &mut bool {
        match dir {
            Direction::North => &mut self.north,
            Direction::South => &mut self.south,
            Direction::East => &mut self.east,
            Direction::West => &mut self.west,
        }
    }
}
