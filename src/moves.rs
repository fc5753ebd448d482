use std::fmt::{self, Debug, Display, Formatter};

use crate::board::Board;
use crate::data::Dir;

/// One tile sliding into the blank.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub(crate) tile: u8,
    pub(crate) dir: Dir,
}

impl Move {
    pub(crate) fn new(tile: u8, dir: Dir) -> Self {
        Move { tile, dir }
    }

    /// The move that turns `prev` into `next`.
    ///
    /// Panics if they are not exactly one slide apart.
    pub(crate) fn between(prev: &Board, next: &Board) -> Self {
        let from = next.blank();
        let dir = from
            .dir_to(prev.blank())
            .expect("Consecutive boards must differ by one slide");
        let tile = prev.tile(from);
        assert_eq!(
            next.slide(prev.blank()),
            *prev,
            "Consecutive boards must differ by one slide"
        );
        Move::new(tile, dir)
    }

    pub fn tile(&self) -> u8 {
        self.tile
    }

    pub fn dir(&self) -> Dir {
        self.dir
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.dir)
    }
}

impl Debug for Move {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.tile, self.dir)
    }
}

#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Moves(Vec<Move>);

impl Moves {
    #[cfg(test)]
    pub(crate) fn new(moves: Vec<Move>) -> Self {
        Moves(moves)
    }

    /// Moves along `path`, which doesn't include `start`.
    pub(crate) fn from_path(start: &Board, path: &[Board]) -> Self {
        let mut moves = Moves::default();
        let mut prev = start;
        for next in path {
            moves.add(Move::between(prev, next));
            prev = next;
        }
        moves
    }

    pub fn move_cnt(&self) -> usize {
        self.0.len()
    }

    pub(crate) fn add(&mut self, mov: Move) {
        self.0.push(mov);
    }

    pub fn iter(&self) -> ::std::slice::Iter<'_, Move> {
        self.0.iter()
    }
}

impl IntoIterator for Moves {
    type Item = Move;
    type IntoIter = ::std::vec::IntoIter<Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Moves {
    type Item = &'a Move;
    type IntoIter = ::std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Display for Moves {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for mov in self {
            write!(f, "{}", mov)?;
        }
        Ok(())
    }
}

impl Debug for Moves {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Pos;

    #[test]
    fn formatting_moves() {
        let moves = Moves::new(vec![
            Move::new(1, Dir::Up),
            Move::new(2, Dir::Left),
            Move::new(3, Dir::Down),
            Move::new(4, Dir::Right),
        ]);
        assert_eq!(moves.to_string(), "uldr");
        assert_eq!(format!("{:?}", moves.iter().next().unwrap()), "1u");
        assert_eq!(moves.move_cnt(), 4);
    }

    #[test]
    fn moves_along_path() {
        let start: Board = "1 2 3\n4 5 6\n- 7 8\n".parse().unwrap();
        let first = start.slide(Pos::new(2, 1));
        let second = first.slide(Pos::new(2, 2));
        let path = vec![first, second];
        assert!(path[1].is_solved());

        let moves = Moves::from_path(&start, &path);
        assert_eq!(moves.to_string(), "ll");
        let tiles: Vec<_> = moves.iter().map(Move::tile).collect();
        assert_eq!(tiles, vec![7, 8]);

        assert_eq!(Moves::from_path(&start, &[]).move_cnt(), 0);
    }

    #[test]
    #[should_panic]
    fn moves_between_unrelated_boards() {
        let a: Board = "1 2\n3 -\n".parse().unwrap();
        let b: Board = "- 1\n3 2\n".parse().unwrap();
        Move::between(&a, &b);
    }
}
