use std::cmp::Ordering;
use std::fmt::{self, Debug, Display, Formatter};

use prettytable::format::consts::FORMAT_CLEAN;
use prettytable::{Cell, Row, Table};
use separator::Separatable;

use crate::board::Board;

#[derive(Clone, PartialEq, Eq)]
pub struct Stats {
    created_states: Vec<u64>,
    visited_states: Vec<u64>,
    duplicate_states: Vec<u64>,
}

impl Stats {
    pub(crate) fn new() -> Self {
        Stats {
            created_states: vec![],
            visited_states: vec![],
            duplicate_states: vec![],
        }
    }

    pub fn total_created(&self) -> u64 {
        self.created_states.iter().sum::<u64>()
    }

    /// Number of expanded states.
    pub fn total_unique_visited(&self) -> u64 {
        self.visited_states.iter().sum::<u64>()
    }

    pub fn total_reached_duplicates(&self) -> u64 {
        self.duplicate_states.iter().sum::<u64>()
    }

    pub(crate) fn add_created(&mut self, node: &SearchNode<'_>) -> bool {
        Self::add(&mut self.created_states, node)
    }

    pub(crate) fn add_unique_visited(&mut self, node: &SearchNode<'_>) -> bool {
        Self::add(&mut self.visited_states, node)
    }

    pub(crate) fn add_reached_duplicate(&mut self, node: &SearchNode<'_>) -> bool {
        Self::add(&mut self.duplicate_states, node)
    }

    /// Returns true if this is the first state at its depth.
    fn add(counts: &mut Vec<u64>, node: &SearchNode<'_>) -> bool {
        let mut ret = false;

        // while because some depths might be skipped
        while usize::from(node.dist) >= counts.len() {
            counts.push(0);
            ret = true;
        }
        counts[usize::from(node.dist)] += 1;
        ret
    }

    fn depth_table(&self) -> Table {
        let mut table = Table::new();
        table.set_format(*FORMAT_CLEAN);
        table.set_titles(Row::new(
            ["Depth", "Created", "Unique", "Duplicates", "Unknown (not reached)"]
                .iter()
                .map(|title| Cell::new(title))
                .collect(),
        ));

        // created_states is the longest vec
        for (depth, &created) in self.created_states.iter().enumerate() {
            let visited = self.visited_states.get(depth).cloned().unwrap_or(0);
            let duplicates = self.duplicate_states.get(depth).cloned().unwrap_or(0);
            let left = created - visited - duplicates;
            table.add_row(Row::new(vec![
                Cell::new(&format!("{}:", depth)),
                Cell::new(&created.separated_string()),
                Cell::new(&visited.separated_string()),
                Cell::new(&duplicates.separated_string()),
                Cell::new(&left.separated_string()),
            ]));
        }
        table
    }
}

impl Debug for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "total created / unique visited / reached duplicates:")?;
        writeln!(
            f,
            "{:<16}{:<16}{}",
            self.total_created().separated_string(),
            self.total_unique_visited().separated_string(),
            self.total_reached_duplicates().separated_string()
        )
    }
}

impl Display for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let created = self.total_created();
        let visited = self.total_unique_visited();
        let duplicates = self.total_reached_duplicates();
        let left = created - visited - duplicates;
        writeln!(f, "States created total: {}", created.separated_string())?;
        writeln!(f, "Unique visited total: {}", visited.separated_string())?;
        writeln!(f, "Reached duplicates total: {}", duplicates.separated_string())?;
        writeln!(f, "Created but not reached total: {}", left.separated_string())?;
        writeln!(f)?;
        write!(f, "{}", self.depth_table())
    }
}

/// A board on the open set together with how it was reached.
pub(crate) struct SearchNode<'a> {
    pub(crate) board: Board,
    /// Node this one was expanded from, `None` for the start.
    pub(crate) prev: Option<&'a SearchNode<'a>>,
    /// Moves from the start (g).
    pub(crate) dist: u16,
    /// `dist` plus the heuristic (f), computed once when the node is created.
    pub(crate) cost: u16,
    /// Creation order.
    pub(crate) index: usize,
}

impl<'a> SearchNode<'a> {
    pub(crate) fn new(
        board: Board,
        prev: Option<&'a SearchNode<'a>>,
        dist: u16,
        h: u16,
        index: usize,
    ) -> Self {
        Self {
            board,
            prev,
            dist,
            cost: dist + h,
            index,
        }
    }
}

/// `Less` means `a` is expanded before `b`.
///
/// Lowest cost first, ties go to the node further from the start
/// and after that to the older one.
pub(crate) fn frontier_order(a: &SearchNode<'_>, b: &SearchNode<'_>) -> Ordering {
    a.cost
        .cmp(&b.cost)
        .then_with(|| b.dist.cmp(&a.dist))
        .then_with(|| a.index.cmp(&b.index))
}

impl PartialOrd for SearchNode<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SearchNode<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        frontier_order(self, other)
    }
}

// creation index is unique so this is consistent with Ord
impl PartialEq for SearchNode<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

impl Eq for SearchNode<'_> {}

impl Debug for SearchNode<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "#{} dist: {}, h: {}, cost: {}",
            self.index,
            self.dist,
            self.cost - self.dist,
            self.cost
        )?;
        write!(f, "{}", self.board)
    }
}
