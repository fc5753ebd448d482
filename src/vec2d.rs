use std::fmt::{self, Debug, Display, Formatter};
use std::ops::{Index, IndexMut};

use crate::data::Pos;

/// Row-major grid stored in a single vector.
#[derive(Clone, PartialEq, Eq, Hash)]
pub(crate) struct Vec2d<T> {
    data: Vec<T>,
    rows: u8,
    cols: u8,
}

impl<T> Vec2d<T> {
    pub(crate) fn new(data: Vec<T>, cols: u8) -> Self {
        assert!(cols > 0 && !data.is_empty());
        assert_eq!(data.len() % usize::from(cols), 0, "Ragged grid");

        let rows = (data.len() / usize::from(cols)) as u8;
        Vec2d { data, rows, cols }
    }

    #[cfg(test)]
    pub(crate) fn rows(&self) -> u8 {
        self.rows
    }

    pub(crate) fn cols(&self) -> u8 {
        self.cols
    }

    pub(crate) fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub(crate) fn positions(&self) -> impl Iterator<Item = Pos> {
        let (rows, cols) = (self.rows, self.cols);
        (0..rows).flat_map(move |r| (0..cols).map(move |c| Pos::new(r, c)))
    }

    /// Cells together with their positions in row-major order.
    pub(crate) fn cells(&self) -> impl Iterator<Item = (Pos, &T)> {
        self.positions().zip(self.data.iter())
    }

    pub(crate) fn swap(&mut self, a: Pos, b: Pos) {
        let (a, b) = (self.index_of(a), self.index_of(b));
        self.data.swap(a, b);
    }

    fn index_of(&self, pos: Pos) -> usize {
        debug_assert!(pos.r < self.rows && pos.c < self.cols);
        usize::from(pos.r) * usize::from(self.cols) + usize::from(pos.c)
    }
}

impl<T: Display> Display for Vec2d<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for row in self.data.chunks(self.cols.into()) {
            for (i, cell) in row.iter().enumerate() {
                if i > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl<T: Display> Debug for Vec2d<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl<T> Index<Pos> for Vec2d<T> {
    type Output = T;

    fn index(&self, index: Pos) -> &Self::Output {
        &self.data[self.index_of(index)]
    }
}

impl<T> IndexMut<Pos> for Vec2d<T> {
    fn index_mut(&mut self, index: Pos) -> &mut Self::Output {
        let index = self.index_of(index);
        &mut self.data[index]
    }
}
