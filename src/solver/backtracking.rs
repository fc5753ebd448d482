use crate::board::Board;
use crate::solver::a_star::SearchNode;

/// Boards from the one after the start up to and including `final_node`.
///
/// The start itself is never included so a solved start gives an empty path.
pub(crate) fn backtrack_path(final_node: &SearchNode<'_>) -> Vec<Board> {
    let mut boards = Vec::with_capacity(usize::from(final_node.dist));
    let mut cur = final_node;
    while let Some(prev) = cur.prev {
        debug_assert_eq!(cur.dist, prev.dist + 1, "Each step must cost exactly 1");
        boards.push(cur.board.clone());
        cur = prev;
    }
    debug_assert_eq!(cur.dist, 0);
    debug_assert_eq!(boards.len(), usize::from(final_node.dist));
    boards.reverse();
    boards
}
