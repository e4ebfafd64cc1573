use std::ops;

use crate::dims::Dims;

/// Flat row-major storage addressed by [`Dims`]. The grid owns all of its
/// cells through this arena; nothing else ever holds a reference to a cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Array2D<T> {
    buf: Vec<T>,
    width: usize,
    height: usize,
}

impl<T> Array2D<T> {
    pub fn size(&self) -> Dims {
        Dims(self.width as i32, self.height as i32)
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn dim_to_idx(&self, pos: Dims) -> Option<usize> {
        let Dims(x, y) = pos;
        let (x, y) = (x as usize, y as usize);

        if x >= self.width || y >= self.height {
            return None;
        }

        Some(y * self.width + x)
    }

    pub fn idx_to_dim(&self, idx: usize) -> Option<Dims> {
        if idx >= self.buf.len() {
            return None;
        }

        let x = idx % self.width;
        let y = idx / self.width;

        Some(Dims(x as i32, y as i32))
    }

    pub fn get(&self, pos: Dims) -> Option<&T> {
        self.dim_to_idx(pos).and_then(|i| self.buf.get(i))
    }

    pub fn get_mut(&mut self, pos: Dims) -> Option<&mut T> {
        self.dim_to_idx(pos).and_then(|i| self.buf.get_mut(i))
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.buf.iter()
    }

    pub fn iter_pos(&self) -> impl Iterator<Item = Dims> + '_ {
        (0..self.buf.len()).filter_map(move |i| self.idx_to_dim(i))
    }
}

impl<T: Clone> Array2D<T> {
    pub fn new(item: T, width: usize, height: usize) -> Self {
        Self {
            buf: vec![item.clone(); width * height],
            width,
            height,
        }
    }
}

impl<T> ops::Index<Dims> for Array2D<T> {
    type Output = T;

    fn index(&self, index: Dims) -> &Self::Output {
        self.dim_to_idx(index)
            .and_then(|i| self.buf.get(i))
            .expect("Index out of bounds")
    }
}

impl<T> ops::IndexMut<Dims> for Array2D<T> {
    fn index_mut(&mut self, index: Dims) -> &mut Self::Output {
        self.dim_to_idx(index)
            .and_then(|i| self.buf.get_mut(i))
            .expect("Index out of bounds")
    }
}

#[cfg(test)]
mod tests {
    use super::{Array2D, Dims};

    #[test]
    fn indexing() {
        let mut arr = Array2D::new(0u8, 3, 2);
        arr[Dims(2, 1)] = 7;

        assert_eq!(arr[Dims(2, 1)], 7);
        assert_eq!(arr.get(Dims(2, 1)), Some(&7));
        assert_eq!(arr.get(Dims(3, 0)), None);
        assert_eq!(arr.get(Dims(0, 2)), None);
        assert_eq!(arr.get(Dims(-1, 0)), None);
    }

    #[test]
    fn iter_pos_is_row_major() {
        let arr = Array2D::new((), 2, 2);
        let positions: Vec<_> = arr.iter_pos().collect();
        assert_eq!(
            positions,
            vec![Dims(0, 0), Dims(1, 0), Dims(0, 1), Dims(1, 1)]
        );
    }
}
