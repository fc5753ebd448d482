pub(crate) mod a_star;
mod backtracking;
#[cfg(feature = "graph")]
mod graph;

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};
use std::time::{Duration, Instant};

use fnv::FnvHashSet;
use log::{debug, info, warn};
use typed_arena::Arena;

use crate::board::Board;
use crate::config::{Heuristic, Limits};
use crate::heuristic::evaluate;
use crate::moves::Moves;
use crate::path_formatter::PathFormatter;
use crate::Solve;

pub use self::a_star::Stats;

use self::a_star::SearchNode;
use self::backtracking::backtrack_path;
#[cfg(feature = "graph")]
use self::graph::Graph;

/// Search gave up before it could find a solution or prove there is none.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverErr {
    NodeLimit(usize),
    TimeLimit(Duration),
}

impl Display for SolverErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            SolverErr::NodeLimit(max) => write!(f, "Created more than {} states", max),
            SolverErr::TimeLimit(max) => write!(f, "Searched longer than {:?}", max),
        }
    }
}

impl Error for SolverErr {}

pub struct Solution {
    /// `None` if the whole reachable state space was searched without reaching the goal.
    ///
    /// Excludes the start so it's empty when the start is already solved.
    pub path: Option<Vec<Board>>,
    pub stats: Stats,
    pub heuristic: Heuristic,
    start: Board,
}

impl Solution {
    fn new(start: Board, path: Option<Vec<Board>>, stats: Stats, heuristic: Heuristic) -> Self {
        Self {
            path,
            stats,
            heuristic,
            start,
        }
    }

    pub fn start(&self) -> &Board {
        &self.start
    }

    pub fn moves(&self) -> Option<Moves> {
        self.path
            .as_ref()
            .map(|path| Moves::from_path(&self.start, path))
    }

    pub fn move_cnt(&self) -> Option<usize> {
        self.path.as_ref().map(Vec::len)
    }

    pub fn format_path(&self) -> PathFormatter<'_> {
        PathFormatter::new(self.path.as_ref().map(Vec::as_slice))
    }
}

impl Debug for Solution {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.path {
            None => writeln!(f, "No solution")?,
            Some(ref path) => writeln!(f, "{}: {}", self.heuristic, path.len())?,
        }
        write!(f, "{:?}", self.stats)
    }
}

impl Solve for Board {
    fn solve(&self, heuristic: Heuristic, limits: Limits) -> Result<Solution, SolverErr> {
        solve(self, heuristic, limits)
    }
}

fn solve(start: &Board, heuristic: Heuristic, limits: Limits) -> Result<Solution, SolverErr> {
    debug!(
        "Solving {}x{} board using {}, {:?}",
        start.width(),
        start.width(),
        heuristic,
        limits
    );
    let solution = search(start, heuristic, limits)?;
    match solution.path {
        Some(ref path) => debug!("Found solution with {} moves", path.len()),
        None => debug!("No solution, all reachable states visited"),
    }
    Ok(solution)
}

fn search(start: &Board, heuristic: Heuristic, limits: Limits) -> Result<Solution, SolverErr> {
    let started = Instant::now();

    let mut stats = Stats::new();

    // nodes live until the search ends, everything else only borrows them
    let arena = Arena::new();
    let mut to_visit = BinaryHeap::new();
    let mut visited = FnvHashSet::default();
    let mut created = 0;

    #[cfg(feature = "graph")]
    let mut graph = Graph::new();

    let start_node: &SearchNode<'_> = arena.alloc(SearchNode::new(
        start.clone(),
        None,
        0,
        evaluate(heuristic, start),
        created,
    ));
    created += 1;
    stats.add_created(start_node);
    #[cfg(feature = "graph")]
    graph.add(start_node);
    to_visit.push(Reverse(start_node));

    let path = loop {
        let cur_node = match to_visit.pop() {
            Some(Reverse(node)) => node,
            None => break None,
        };

        if cur_node.board.is_solved() {
            debug!("Solved, backtracking path");
            break Some(backtrack_path(cur_node));
        }

        // duplicates are inserted and only skipped here
        // the first copy popped was reached by a path at least as short
        if visited.contains(&cur_node.board) {
            stats.add_reached_duplicate(cur_node);
            #[cfg(feature = "graph")]
            graph.mark_duplicate(cur_node);
            continue;
        }
        if let Some(max_time) = limits.max_time {
            if started.elapsed() > max_time {
                warn!("Giving up after {:?}", started.elapsed());
                return Err(SolverErr::TimeLimit(max_time));
            }
        }
        visited.insert(&cur_node.board);
        #[cfg(feature = "graph")]
        graph.mark_unique(cur_node);

        if stats.add_unique_visited(cur_node) {
            info!("Visited new depth: {}", cur_node.dist);
            debug!("{:?}", stats);
        }

        for board in cur_node.board.legal_moves() {
            if let Some(max_nodes) = limits.max_nodes {
                if created >= max_nodes {
                    warn!("Giving up after creating {} states", created);
                    return Err(SolverErr::NodeLimit(max_nodes));
                }
            }

            let h = evaluate(heuristic, &board);
            let next_node: &SearchNode<'_> = arena.alloc(SearchNode::new(
                board,
                Some(cur_node),
                cur_node.dist + 1,
                h,
                created,
            ));
            created += 1;
            stats.add_created(next_node);
            #[cfg(feature = "graph")]
            graph.add(next_node);
            to_visit.push(Reverse(next_node));
        }
    };

    #[cfg(feature = "graph")]
    {
        if let Err(err) = graph.write_dot("search-graph.dot") {
            warn!("Failed to write search graph: {}", err);
        }
    }

    Ok(Solution::new(start.clone(), path, stats, heuristic))
}
