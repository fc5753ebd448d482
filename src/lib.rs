// Opt in to warnings about new 2018 idioms
#![warn(rust_2018_idioms)]
// Additional warnings that are allow by default (`rustc -W help`)
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused)]

pub mod board;
pub mod config;
pub mod heuristic;
pub mod moves;
pub mod parser;
pub mod path_formatter;
pub mod solver;

mod data;
mod fs;
mod vec2d;

use std::error::Error;

pub use crate::board::Board;
pub use crate::data::{Dir, Pos};

use crate::config::{Heuristic, Limits};
use crate::solver::{Solution, SolverErr};

pub trait LoadBoard {
    fn load_board(&self) -> Result<Board, Box<dyn Error>>;
}

pub trait Solve {
    fn solve(&self, heuristic: Heuristic, limits: Limits) -> Result<Solution, SolverErr>;
}
