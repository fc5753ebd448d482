use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::board::{Board, BoardErr};
use crate::data::{BLANK, BLANK_TOKEN, MAX_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserErr {
    Empty,
    /// Row has a different number of tokens than there are rows.
    RowLength {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// Not a positive integer nor the blank.
    Token { row: usize, col: usize },
    Board(BoardErr),
}

impl Display for ParserErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            ParserErr::Empty => write!(f, "No rows"),
            ParserErr::RowLength {
                row,
                expected,
                found,
            } => write!(
                f,
                "Row {} has {} tiles but the board is {} wide",
                row, found, expected
            ),
            ParserErr::Token { row, col } => {
                write!(f, "Invalid tile at pos: [{}, {}]", row, col)
            }
            ParserErr::Board(err) => write!(f, "Invalid board: {}", err),
        }
    }
}

impl Error for ParserErr {}

impl From<BoardErr> for ParserErr {
    fn from(err: BoardErr) -> Self {
        ParserErr::Board(err)
    }
}

impl FromStr for Board {
    type Err = ParserErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

/// Parses whitespace separated tiles, one row per line, `-` is the blank.
///
/// The board is as wide as it has rows.
pub(crate) fn parse(board: &str) -> Result<Board, ParserErr> {
    // trim so boards can be written using raw strings more easily
    let rows: Vec<Vec<&str>> = board
        .trim_matches('\n')
        .trim_end()
        .lines()
        .map(|line| line.split_whitespace().collect())
        .collect();

    if rows.is_empty() || rows.iter().all(Vec::is_empty) {
        return Err(ParserErr::Empty);
    }
    let width = rows.len();
    if width > usize::from(MAX_WIDTH) {
        return Err(ParserErr::Board(BoardErr::TooLarge));
    }

    let mut tiles = Vec::with_capacity(width * width);
    for (r, row) in rows.iter().enumerate() {
        if row.len() != width {
            return Err(ParserErr::RowLength {
                row: r,
                expected: width,
                found: row.len(),
            });
        }
        for (c, token) in row.iter().enumerate() {
            tiles.push(parse_tile(token).ok_or(ParserErr::Token { row: r, col: c })?);
        }
    }

    Ok(Board::new(width as u8, tiles)?)
}

fn parse_tile(token: &str) -> Option<u8> {
    if token == BLANK_TOKEN {
        return Some(BLANK);
    }
    match token.parse() {
        Ok(BLANK) | Err(_) => None,
        Ok(value) => Some(value),
    }
}
