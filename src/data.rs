use std::fmt::{self, Debug, Display, Formatter};

/// Value of the blank cell.
pub(crate) const BLANK: u8 = 0;

/// Token used for the blank in the text format.
pub(crate) const BLANK_TOKEN: &str = "-";

pub(crate) const MIN_WIDTH: u8 = 2;

/// Largest width whose tile values still fit into a `u8`.
pub(crate) const MAX_WIDTH: u8 = 15;

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    pub(crate) r: u8,
    pub(crate) c: u8,
}

impl Pos {
    pub(crate) fn new(r: u8, c: u8) -> Self {
        Pos { r, c }
    }

    /// Goal cell of `value` (which must not be the blank) on a board of given width.
    pub(crate) fn goal_of(value: u8, width: u8) -> Self {
        debug_assert_ne!(value, BLANK);
        let index = value - 1;
        Pos::new(index / width, index % width)
    }

    pub(crate) fn dist(self, other: Pos) -> u16 {
        let dr = (i16::from(self.r) - i16::from(other.r)).abs();
        let dc = (i16::from(self.c) - i16::from(other.c)).abs();
        (dr + dc) as u16
    }

    /// Neighbor in `dir` or `None` if it would be outside a `width` x `width` grid.
    pub(crate) fn step(self, dir: Dir, width: u8) -> Option<Pos> {
        let r = i16::from(self.r) + dir.dr();
        let c = i16::from(self.c) + dir.dc();
        let width = i16::from(width);
        if r < 0 || c < 0 || r >= width || c >= width {
            None
        } else {
            Some(Pos::new(r as u8, c as u8))
        }
    }

    pub(crate) fn dir_to(self, other: Pos) -> Option<Dir> {
        DIRECTIONS
            .iter()
            .cloned()
            .find(|&dir| self.step(dir, u8::max_value()) == Some(other))
    }
}

impl Display for Pos {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.r, self.c)
    }
}

impl Debug for Pos {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

/// Direction in which a tile slides into the blank.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dir {
    Up,
    Left,
    Down,
    Right,
}

/// Order in which the tiles around the blank are tried:
/// the one above it, left of it, below it, right of it.
pub(crate) const DIRECTIONS: [Dir; 4] = [Dir::Down, Dir::Right, Dir::Up, Dir::Left];

impl Dir {
    fn dr(self) -> i16 {
        match self {
            Dir::Up => -1,
            Dir::Down => 1,
            Dir::Left | Dir::Right => 0,
        }
    }

    fn dc(self) -> i16 {
        match self {
            Dir::Left => -1,
            Dir::Right => 1,
            Dir::Up | Dir::Down => 0,
        }
    }

    pub(crate) fn inverse(self) -> Dir {
        match self {
            Dir::Up => Dir::Down,
            Dir::Left => Dir::Right,
            Dir::Down => Dir::Up,
            Dir::Right => Dir::Left,
        }
    }
}

impl Display for Dir {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let c = match *self {
            Dir::Up => 'u',
            Dir::Left => 'l',
            Dir::Down => 'd',
            Dir::Right => 'r',
        };
        write!(f, "{}", c)
    }
}

impl Debug for Dir {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
