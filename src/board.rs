use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};

use fnv::FnvHasher;

use crate::data::{Pos, BLANK, BLANK_TOKEN, DIRECTIONS, MAX_WIDTH, MIN_WIDTH};
use crate::vec2d::Vec2d;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardErr {
    TooSmall,
    TooLarge,
    WrongTileCount { expected: usize, found: usize },
    OutOfRange(u8),
    Duplicate(u8),
}

impl Display for BoardErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            BoardErr::TooSmall => write!(f, "Board narrower than {} cells", MIN_WIDTH),
            BoardErr::TooLarge => write!(f, "Board wider than {} cells", MAX_WIDTH),
            BoardErr::WrongTileCount { expected, found } => {
                write!(f, "Expected {} cells, found {}", expected, found)
            }
            BoardErr::OutOfRange(value) => write!(f, "Tile {} is out of range", value),
            BoardErr::Duplicate(value) => write!(f, "Tile {} appears more than once", value),
        }
    }
}

impl Error for BoardErr {}

/// A square arrangement of tiles with exactly one blank.
///
/// Equality and hashing only look at the tiles, the cached blank position
/// is derived from them.
#[derive(Clone)]
pub struct Board {
    tiles: Vec2d<u8>,
    blank: Pos,
}

impl Board {
    /// `tiles` are in row-major order, the blank is `0`.
    pub fn new(width: u8, tiles: Vec<u8>) -> Result<Self, BoardErr> {
        if width < MIN_WIDTH {
            return Err(BoardErr::TooSmall);
        }
        if width > MAX_WIDTH {
            return Err(BoardErr::TooLarge);
        }
        let cells = usize::from(width) * usize::from(width);
        if tiles.len() != cells {
            return Err(BoardErr::WrongTileCount {
                expected: cells,
                found: tiles.len(),
            });
        }

        let mut seen = vec![false; cells];
        for &value in &tiles {
            let slot = seen
                .get_mut(usize::from(value))
                .ok_or(BoardErr::OutOfRange(value))?;
            if *slot {
                return Err(BoardErr::Duplicate(value));
            }
            *slot = true;
        }

        let tiles = Vec2d::new(tiles, width);
        let blank = tiles
            .cells()
            .find(|&(_, &value)| value == BLANK)
            .map(|(pos, _)| pos)
            .expect("A permutation of 0..cells contains the blank");
        Ok(Board { tiles, blank })
    }

    /// The solved board: tiles in row-major order, blank last.
    pub fn goal(width: u8) -> Result<Self, BoardErr> {
        let cells = usize::from(width) * usize::from(width);
        let tiles = (0..cells).map(|i| goal_value(i, cells)).collect();
        Board::new(width, tiles)
    }

    pub fn width(&self) -> u8 {
        self.tiles.cols()
    }

    pub(crate) fn cell_count(&self) -> usize {
        self.tiles.as_slice().len()
    }

    pub fn blank(&self) -> Pos {
        self.blank
    }

    pub fn tile(&self, pos: Pos) -> u8 {
        self.tiles[pos]
    }

    /// Tiles in row-major order.
    pub fn tiles(&self) -> &[u8] {
        self.tiles.as_slice()
    }

    pub(crate) fn cells(&self) -> impl Iterator<Item = (Pos, u8)> + '_ {
        self.tiles.cells().map(|(pos, &value)| (pos, value))
    }

    /// Slides the tile at `tile` into the blank, returning the new board.
    ///
    /// Panics if `tile` is not orthogonally adjacent to the blank.
    pub fn slide(&self, tile: Pos) -> Board {
        assert_eq!(
            self.blank.dist(tile),
            1,
            "Tile at {} is not next to the blank at {}",
            tile,
            self.blank
        );

        let mut new_board = self.clone();
        new_board.tiles.swap(self.blank, tile);
        new_board.blank = tile;
        new_board
    }

    /// Every board reachable by sliding one tile, in the fixed order
    /// above, left, below, right of the blank.
    pub fn legal_moves(&self) -> Vec<Board> {
        let width = self.width();
        DIRECTIONS
            .iter()
            .filter_map(|&dir| self.blank.step(dir.inverse(), width))
            .map(|tile| self.slide(tile))
            .collect()
    }

    pub fn is_solved(&self) -> bool {
        let cells = self.cell_count();
        self.tiles()
            .iter()
            .enumerate()
            .all(|(i, &value)| value == goal_value(i, cells))
    }

    pub fn same_tiles(&self, other: &Board) -> bool {
        self.tiles.as_slice() == other.tiles.as_slice()
    }

    /// FNV hash of the flattened tiles, stable across runs and platforms.
    pub fn content_hash(&self) -> u64 {
        let mut hasher = FnvHasher::default();
        hasher.write(self.tiles());
        hasher.finish()
    }
}

/// Value that belongs to the cell at row-major `index` in the solved board.
pub(crate) fn goal_value(index: usize, cells: usize) -> u8 {
    ((index + 1) % cells) as u8
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.same_tiles(other)
    }
}

impl Eq for Board {}

impl Hash for Board {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.tiles.as_slice().hash(state);
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let width = usize::from(self.width());
        for row in self.tiles().chunks(width) {
            for (c, &value) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, " ")?;
                }
                if value == BLANK {
                    write!(f, "{}", BLANK_TOKEN)?;
                } else {
                    write!(f, "{}", value)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl Debug for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(width: u8, tiles: &[u8]) -> Board {
        Board::new(width, tiles.to_vec()).unwrap()
    }

    #[test]
    fn validation() {
        assert_eq!(Board::new(1, vec![0]).unwrap_err(), BoardErr::TooSmall);
        assert_eq!(Board::new(16, vec![0; 256]).unwrap_err(), BoardErr::TooLarge);
        assert_eq!(
            Board::new(2, vec![1, 2, 0]).unwrap_err(),
            BoardErr::WrongTileCount {
                expected: 4,
                found: 3
            }
        );
        assert_eq!(Board::new(2, vec![1, 2, 4, 0]).unwrap_err(), BoardErr::OutOfRange(4));
        assert_eq!(Board::new(2, vec![1, 1, 3, 0]).unwrap_err(), BoardErr::Duplicate(1));
        assert_eq!(Board::new(2, vec![1, 2, 3, 3]).unwrap_err(), BoardErr::Duplicate(3));
    }

    #[test]
    fn blank_is_located() {
        let b = board(3, &[1, 2, 3, 4, 0, 5, 6, 7, 8]);
        assert_eq!(b.blank(), Pos::new(1, 1));
        assert_eq!(b.tile(b.blank()), BLANK);
        assert_eq!(Board::goal(4).unwrap().blank(), Pos::new(3, 3));
    }

    #[test]
    fn goal_detection() {
        for width in 2..=5 {
            let goal = Board::goal(width).unwrap();
            assert!(goal.is_solved());

            // every swap of two neighboring cells breaks it
            for pos in goal.tiles.positions() {
                for &other in &[Pos::new(pos.r, pos.c + 1), Pos::new(pos.r + 1, pos.c)] {
                    if other.r >= width || other.c >= width {
                        continue;
                    }
                    let mut swapped = goal.tiles().to_vec();
                    let a = usize::from(pos.r * width + pos.c);
                    let b = usize::from(other.r * width + other.c);
                    swapped.swap(a, b);
                    assert!(!board(width, &swapped).is_solved(), "{:?} {:?}", pos, other);
                }
            }

            // so does every swap of consecutive values, including across rows (3 and 4 in 3x3)
            let cells = goal.cell_count();
            for i in 0..cells - 1 {
                let mut swapped = goal.tiles().to_vec();
                swapped.swap(i, i + 1);
                assert!(!board(width, &swapped).is_solved(), "{} {}", i, i + 1);
            }
        }

        // tiles in order but blank first
        assert!(!board(2, &[0, 1, 2, 3]).is_solved());
    }

    #[test]
    fn sliding() {
        let b = board(3, &[1, 2, 3, 4, 0, 5, 6, 7, 8]);
        let slid = b.slide(Pos::new(0, 1));
        assert_eq!(slid.tiles(), &[1, 0, 3, 4, 2, 5, 6, 7, 8]);
        assert_eq!(slid.blank(), Pos::new(0, 1));
        // original untouched
        assert_eq!(b.tiles(), &[1, 2, 3, 4, 0, 5, 6, 7, 8]);
        assert_eq!(b.blank(), Pos::new(1, 1));
    }

    #[test]
    #[should_panic]
    fn sliding_distant_tile() {
        let b = board(3, &[1, 2, 3, 4, 0, 5, 6, 7, 8]);
        b.slide(Pos::new(0, 0));
    }

    #[test]
    fn move_counts() {
        // corners
        assert_eq!(board(3, &[0, 1, 2, 3, 4, 5, 6, 7, 8]).legal_moves().len(), 2);
        assert_eq!(board(3, &[1, 2, 0, 3, 4, 5, 6, 7, 8]).legal_moves().len(), 2);
        assert_eq!(board(3, &[1, 2, 3, 4, 5, 6, 7, 8, 0]).legal_moves().len(), 2);
        assert_eq!(board(3, &[1, 2, 3, 4, 5, 6, 0, 7, 8]).legal_moves().len(), 2);
        // edges
        assert_eq!(board(3, &[1, 0, 2, 3, 4, 5, 6, 7, 8]).legal_moves().len(), 3);
        assert_eq!(board(3, &[1, 2, 3, 0, 4, 5, 6, 7, 8]).legal_moves().len(), 3);
        assert_eq!(board(3, &[1, 2, 3, 4, 5, 0, 6, 7, 8]).legal_moves().len(), 3);
        assert_eq!(board(3, &[1, 2, 3, 4, 5, 6, 7, 0, 8]).legal_moves().len(), 3);
        // interior
        assert_eq!(board(3, &[1, 2, 3, 4, 0, 5, 6, 7, 8]).legal_moves().len(), 4);

        let goal = Board::goal(4).unwrap();
        assert_eq!(goal.slide(Pos::new(2, 3)).slide(Pos::new(2, 2)).legal_moves().len(), 4);
    }

    #[test]
    fn move_order() {
        let b = board(3, &[1, 2, 3, 4, 0, 5, 6, 7, 8]);
        let blanks: Vec<_> = b.legal_moves().iter().map(Board::blank).collect();
        assert_eq!(
            blanks,
            vec![Pos::new(0, 1), Pos::new(1, 0), Pos::new(2, 1), Pos::new(1, 2)]
        );
    }

    #[test]
    fn legal_moves_leave_input_alone() {
        let b = board(4, &[5, 1, 2, 3, 9, 6, 7, 4, 13, 10, 0, 8, 14, 15, 11, 12]);
        let before = b.clone();
        let moves = b.legal_moves();
        assert_eq!(moves.len(), 4);
        assert_eq!(b.tiles(), before.tiles());
        assert_eq!(b.blank(), before.blank());
        for m in &moves {
            assert_eq!(m.blank().dist(b.blank()), 1);
            assert_eq!(m.tile(m.blank()), BLANK);
            assert_eq!(m.tile(b.blank()), b.tile(m.blank()));
        }
    }

    #[test]
    fn equality_by_tiles() {
        let a = board(2, &[1, 2, 3, 0]);
        let b = board(2, &[1, 2, 0, 3]).slide(Pos::new(1, 1));
        let c = board(2, &[1, 2, 0, 3]);
        assert!(a.same_tiles(&b));
        assert_eq!(a, b);
        assert!(!a.same_tiles(&c));
        assert_ne!(a, c);
    }

    #[test]
    fn content_hash_follows_tiles() {
        let a = board(3, &[1, 2, 3, 4, 5, 6, 7, 8, 0]);
        let b = board(3, &[1, 2, 3, 4, 5, 6, 7, 0, 8]).slide(Pos::new(2, 2));
        let c = board(3, &[1, 2, 3, 4, 5, 6, 7, 0, 8]);
        assert_eq!(a.content_hash(), b.content_hash());
        assert_ne!(a.content_hash(), c.content_hash());
        // deterministic
        assert_eq!(a.content_hash(), a.clone().content_hash());

        // plain FNV-1a over the tile bytes, no length prefix
        let mut hasher = FnvHasher::default();
        hasher.write(&[1, 2, 3, 4, 5, 6, 7, 8, 0]);
        assert_eq!(a.content_hash(), hasher.finish());
    }

    #[test]
    fn formatting() {
        let b = board(4, &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 15, 14, 0]);
        assert_eq!(b.to_string(), "1 2 3 4\n5 6 7 8\n9 10 11 12\n13 15 14 -\n");
        assert_eq!(format!("{:?}", b), b.to_string());
    }
}
