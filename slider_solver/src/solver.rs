//! A* solver for sliding puzzles.
//!
//! The solver runs two best-first searches in lockstep: one from the initial
//! board and one from its twin. Exactly one of a board and its twin is
//! solvable, so whichever search reaches the goal first decides the answer.
//! No separate solvability check is needed.

use crate::board::Board;
use crate::error::SolverError;
use crate::node::{compare_nodes, SearchNode};
use log::{debug, trace, warn};
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::rc::Rc;

/// Lifecycle of a solver.
///
/// `Init` and `Searching` only exist while `Solver::new` runs; a constructed
/// solver is always `Solved` or `Unsolvable`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SolverState {
    Init,
    Searching,
    Solved,
    Unsolvable,
}

impl SolverState {
    pub fn is_terminal(self) -> bool {
        matches!(self, SolverState::Solved | SolverState::Unsolvable)
    }
}

/// Counters collected during a search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes popped and expanded from the primary frontier.
    pub expanded: usize,
    /// Nodes pushed into the primary frontier.
    pub enqueued: usize,
    /// Nodes popped and expanded from the twin frontier.
    pub twin_expanded: usize,
    /// Nodes pushed into the twin frontier.
    pub twin_enqueued: usize,
}

/// Result of solving one board.
///
/// # Examples
/// ```
/// use slider_solver::board::Board;
/// use slider_solver::solver::Solver;
///
/// let solver = Solver::new(Board::from_rows(&[[1, 2, 3], [4, 5, 0], [7, 8, 6]]));
/// assert!(solver.is_solvable());
/// assert_eq!(solver.moves(), Some(1));
/// assert_eq!(solver.solution().map(|path| path.len()), Some(2));
///
/// let stuck = Solver::new(Board::from_rows(&[[1, 2, 3], [4, 5, 6], [8, 7, 0]]));
/// assert!(!stuck.is_solvable());
/// assert_eq!(stuck.moves(), None);
/// ```
#[derive(Clone, Debug)]
pub struct Solver {
    state: SolverState,
    solution: Option<Vec<Board>>,
    stats: SearchStats,
}

impl Solver {
    /// Solves `initial`, running the search to completion.
    pub fn new(initial: Board) -> Self {
        let mut search = Search::start(initial);
        while !search.state.is_terminal() {
            search.step();
        }
        search.finish()
    }

    /// Like [`Solver::new`], but reports a missing board as an error.
    pub fn try_new(initial: Option<Board>) -> Result<Self, SolverError> {
        initial.map(Solver::new).ok_or(SolverError::MissingBoard)
    }

    pub fn state(&self) -> SolverState {
        self.state
    }

    /// Returns `true` if the initial board can reach the goal.
    pub fn is_solvable(&self) -> bool {
        self.state == SolverState::Solved
    }

    /// Minimum number of moves to reach the goal, or `None` if the board is unsolvable.
    pub fn moves(&self) -> Option<usize> {
        self.solution.as_ref().map(|path| path.len() - 1)
    }

    /// Boards of a shortest solution, from the initial board to the goal.
    /// `None` if the board is unsolvable.
    pub fn solution(&self) -> Option<&[Board]> {
        self.solution.as_deref()
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }
}

/// Frontier entry ordered so that `BinaryHeap` pops the smallest node first.
struct Entry(Rc<SearchNode>);

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        compare_nodes(&self.0, &other.0) == Ordering::Equal
    }
}

impl Eq for Entry {}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_nodes(&other.0, &self.0)
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-priority queue of search nodes.
#[derive(Default)]
struct Frontier {
    heap: BinaryHeap<Entry>,
}

impl Frontier {
    fn seeded(board: Board) -> Self {
        let mut frontier = Frontier::default();
        frontier.push(SearchNode::root(board));
        frontier
    }

    fn push(&mut self, node: Rc<SearchNode>) {
        self.heap.push(Entry(node));
    }

    fn pop(&mut self) -> Option<Rc<SearchNode>> {
        self.heap.pop().map(|entry| entry.0)
    }

    /// Pushes every neighbor of `node` except its parent's board.
    ///
    /// Returns the first child that is the goal, leaving the remaining
    /// neighbors unvisited. `enqueued` counts the children pushed.
    fn expand(&mut self, node: &Rc<SearchNode>, enqueued: &mut usize) -> Option<Rc<SearchNode>> {
        let parent_board = node.parent().map(|p| p.board());
        for neighbor in node.board().neighbors() {
            if parent_board == Some(neighbor) {
                continue;
            }
            let child = SearchNode::child(node, neighbor.clone());
            if neighbor.is_goal() {
                return Some(child);
            }
            self.push(child);
            *enqueued += 1;
        }
        None
    }
}

/// In-progress dual search.
struct Search {
    state: SolverState,
    primary: Frontier,
    twin: Frontier,
    found: Option<Rc<SearchNode>>,
    stats: SearchStats,
}

impl Search {
    /// Seeds both frontiers, or concludes at once if `initial` is already solved.
    fn start(initial: Board) -> Self {
        let mut search = Search {
            state: SolverState::Init,
            primary: Frontier::default(),
            twin: Frontier::default(),
            found: None,
            stats: SearchStats::default(),
        };

        if initial.is_goal() {
            debug!("initial board is already the goal");
            search.found = Some(SearchNode::root(initial));
            search.state = SolverState::Solved;
            return search;
        }

        debug!(
            "starting search on a {0}x{0} board, manhattan {1}",
            initial.dimension(),
            initial.manhattan()
        );
        search.twin = Frontier::seeded(initial.twin());
        search.primary = Frontier::seeded(initial);
        search.state = SolverState::Searching;
        search
    }

    /// Expands one node of the primary frontier and, unless that concluded
    /// the search, one node of the twin frontier.
    fn step(&mut self) {
        debug_assert_eq!(self.state, SolverState::Searching);

        let Some(node) = self.primary.pop() else {
            self.exhausted("primary");
            return;
        };
        self.stats.expanded += 1;
        trace!("expanding node at {} moves, priority {}", node.moves(), node.priority());
        if let Some(goal) = self.primary.expand(&node, &mut self.stats.enqueued) {
            debug!("goal reached after {} moves", goal.moves());
            self.found = Some(goal);
            self.state = SolverState::Solved;
            return;
        }

        let Some(twin_node) = self.twin.pop() else {
            self.exhausted("twin");
            return;
        };
        self.stats.twin_expanded += 1;
        // Only the twin root can be popped while already solved; children are
        // checked when generated.
        if twin_node.board().is_goal()
            || self.twin.expand(&twin_node, &mut self.stats.twin_enqueued).is_some()
        {
            debug!("twin board reached the goal; initial board is unsolvable");
            self.state = SolverState::Unsolvable;
        }
    }

    fn exhausted(&mut self, which: &str) {
        warn!("{} frontier ran empty before either search reached the goal", which);
        self.state = SolverState::Unsolvable;
    }

    fn finish(self) -> Solver {
        debug!("search finished in state {:?}: {:?}", self.state, self.stats);
        let solution = match (self.state, self.found) {
            (SolverState::Solved, Some(node)) => Some(node.path()),
            _ => None,
        };
        Solver {
            state: self.state,
            solution,
            stats: self.stats,
        }
    }
}
