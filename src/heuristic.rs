use crate::board::{goal_value, Board};
use crate::config::Heuristic;
use crate::data::{Pos, BLANK};

// less is better, both are lower bounds on the number of moves left

pub(crate) fn evaluate(heuristic: Heuristic, board: &Board) -> u16 {
    match heuristic {
        Heuristic::Mismatch => mismatch(board),
        Heuristic::Manhattan => manhattan(board),
    }
}

/// Tiles (not counting the blank) outside their goal cell.
pub fn mismatch(board: &Board) -> u16 {
    let cells = board.cell_count();
    board
        .tiles()
        .iter()
        .enumerate()
        .filter(|&(i, &value)| value != BLANK && value != goal_value(i, cells))
        .count() as u16
}

/// Sum of city block distances between each tile and its goal cell.
pub fn manhattan(board: &Board) -> u16 {
    let width = board.width();
    board
        .cells()
        .filter(|&(_, value)| value != BLANK)
        .map(|(pos, value)| pos.dist(Pos::goal_of(value, width)))
        .sum()
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use fnv::FnvHashMap;

    use super::*;

    fn board(width: u8, tiles: &[u8]) -> Board {
        Board::new(width, tiles.to_vec()).unwrap()
    }

    #[test]
    fn solved_is_zero() {
        for width in 2..=6 {
            let goal = Board::goal(width).unwrap();
            assert_eq!(mismatch(&goal), 0);
            assert_eq!(manhattan(&goal), 0);
        }
    }

    #[test]
    fn known_values() {
        // one move from solved
        let b = board(4, &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 0, 15]);
        assert_eq!(mismatch(&b), 1);
        assert_eq!(manhattan(&b), 1);

        // blank in the middle, five tiles out of place
        let b = board(3, &[8, 2, 3, 4, 0, 5, 6, 7, 1]);
        assert_eq!(mismatch(&b), 5); // 8, 5, 6, 7, 1
        assert_eq!(manhattan(&b), 3 + 1 + 3 + 1 + 4);

        // everything reversed
        let b = board(2, &[0, 3, 2, 1]);
        assert_eq!(mismatch(&b), 3);
        assert_eq!(manhattan(&b), 2 + 2 + 2);
    }

    #[test]
    fn selecting() {
        let b = board(3, &[8, 2, 3, 4, 0, 5, 6, 7, 1]);
        assert_eq!(evaluate(Heuristic::Mismatch, &b), mismatch(&b));
        assert_eq!(evaluate(Heuristic::Manhattan, &b), manhattan(&b));
    }

    /// Exact distance to the goal of every state reachable from it.
    fn distances_to_goal(width: u8) -> FnvHashMap<Board, u16> {
        let goal = Board::goal(width).unwrap();
        let mut dists = FnvHashMap::default();
        dists.insert(goal.clone(), 0);

        let mut to_visit = VecDeque::new();
        to_visit.push_back(goal);
        while let Some(cur) = to_visit.pop_front() {
            let dist = dists[&cur];
            for next in cur.legal_moves() {
                if !dists.contains_key(&next) {
                    dists.insert(next.clone(), dist + 1);
                    to_visit.push_back(next);
                }
            }
        }
        dists
    }

    #[test]
    fn admissible_and_dominating_2x2() {
        let dists = distances_to_goal(2);
        assert_eq!(dists.len(), 12);
        for (board, &dist) in &dists {
            assert!(mismatch(board) <= dist, "{:?}", board);
            assert!(manhattan(board) <= dist, "{:?}", board);
            assert!(manhattan(board) >= mismatch(board), "{:?}", board);
        }
    }

    #[test]
    fn admissible_and_dominating_3x3() {
        let dists = distances_to_goal(3);
        assert_eq!(dists.len(), 181_440);
        assert_eq!(dists.values().max(), Some(&31));
        for (board, &dist) in &dists {
            let mismatch = mismatch(board);
            let manhattan = manhattan(board);
            assert!(mismatch <= dist, "{:?}", board);
            assert!(manhattan <= dist, "{:?}", board);
            assert!(manhattan >= mismatch, "{:?}", board);
            // parity of the manhattan distance always matches the real one
            assert_eq!(manhattan % 2, dist % 2, "{:?}", board);
        }
    }
}
