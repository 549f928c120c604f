//! Search-tree nodes and the frontier ordering used by the A* solver.

use crate::board::Board;
use std::cmp::Ordering;
use std::rc::Rc;

/// A board reached by the search, with the number of moves spent to reach it.
///
/// Nodes are shared through `Rc`: siblings point at the same parent, and a
/// parent stays alive as long as any descendant still sits in a frontier or
/// on a solution path.
#[derive(Debug)]
pub struct SearchNode {
    board: Board,
    moves: usize,
    parent: Option<Rc<SearchNode>>,
}

impl SearchNode {
    /// Creates the root of a search: zero moves and no parent.
    pub fn root(board: Board) -> Rc<Self> {
        Rc::new(SearchNode {
            board,
            moves: 0,
            parent: None,
        })
    }

    /// Creates a node one move further than `parent`.
    pub fn child(parent: &Rc<SearchNode>, board: Board) -> Rc<Self> {
        Rc::new(SearchNode {
            board,
            moves: parent.moves + 1,
            parent: Some(Rc::clone(parent)),
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Moves from the root to this node (the `g` cost).
    pub fn moves(&self) -> usize {
        self.moves
    }

    pub fn parent(&self) -> Option<&Rc<SearchNode>> {
        self.parent.as_ref()
    }

    /// A* priority: moves so far plus the Manhattan estimate of moves left.
    pub fn priority(&self) -> usize {
        self.moves + self.board.manhattan()
    }

    /// Boards from the root down to this node, root first.
    pub fn path(&self) -> Vec<Board> {
        let mut path = vec![self.board.clone()];
        let mut current = self.parent.as_deref();
        while let Some(node) = current {
            path.push(node.board.clone());
            current = node.parent.as_deref();
        }
        path.reverse();
        path
    }
}

/// Frontier ordering: ascending priority, ties broken by ascending Manhattan distance.
///
/// Nodes equal on both keys compare `Equal`; which of them is expanded first
/// is left to the priority queue, which is deterministic for a fixed insertion
/// order.
pub fn compare_nodes(a: &SearchNode, b: &SearchNode) -> Ordering {
    a.priority()
        .cmp(&b.priority())
        .then_with(|| a.board.manhattan().cmp(&b.board.manhattan()))
}
