use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};
use slider_solver::scramble::{is_solvable_by_parity, random_board, scrambled_board};
use slider_solver::{Board, Solver, SolverState};

fn assert_valid_solution(initial: &Board, solver: &Solver) -> Result<(), TestCaseError> {
    let path = solver.solution().expect("solvable boards have a solution");
    prop_assert_eq!(Some(path.len() - 1), solver.moves());
    prop_assert_eq!(&path[0], initial);
    prop_assert!(path[path.len() - 1].is_goal());
    for pair in path.windows(2) {
        prop_assert!(pair[0].neighbors().contains(&pair[1]));
        prop_assert!(pair[1].neighbors().contains(&pair[0]));
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn hamming_zero_iff_goal(n in 2usize..=4, seed in any::<u64>()) {
        let board = random_board(n, &mut SmallRng::seed_from_u64(seed));
        prop_assert_eq!(board.hamming() == 0, board.is_goal());
        prop_assert_eq!(board.is_goal(), board == Board::goal(n));
    }

    #[test]
    fn neighbor_count_follows_blank_position(n in 2usize..=5, seed in any::<u64>()) {
        let board = random_board(n, &mut SmallRng::seed_from_u64(seed));
        let (row, col) = board.blank_position();
        let on_edge = |x: usize| x == 0 || x == n - 1;
        let expected = match (on_edge(row), on_edge(col)) {
            (true, true) => 2,
            (true, false) | (false, true) => 3,
            (false, false) => 4,
        };
        prop_assert_eq!(board.neighbors().len(), expected);
        for neighbor in board.neighbors() {
            prop_assert_eq!(neighbor.dimension(), n);
            prop_assert_ne!(neighbor, &board);
        }
    }

    #[test]
    fn twin_differs_and_flips_parity(n in 2usize..=5, seed in any::<u64>()) {
        let board = random_board(n, &mut SmallRng::seed_from_u64(seed));
        let twin = board.twin();
        prop_assert_ne!(&twin, &board);
        prop_assert_eq!(twin.twin(), board.clone());
        prop_assert_ne!(is_solvable_by_parity(&board), is_solvable_by_parity(&twin));
    }

    #[test]
    fn exactly_one_of_board_and_twin_is_solvable_2x2(seed in any::<u64>()) {
        let board = random_board(2, &mut SmallRng::seed_from_u64(seed));
        let solver = Solver::new(board.clone());
        let twin_solver = Solver::new(board.twin());
        prop_assert_ne!(solver.is_solvable(), twin_solver.is_solvable());
        prop_assert_eq!(solver.is_solvable(), is_solvable_by_parity(&board));
        if solver.is_solvable() {
            assert_valid_solution(&board, &solver)?;
        } else {
            prop_assert_eq!(solver.state(), SolverState::Unsolvable);
            prop_assert!(solver.moves().is_none());
            prop_assert!(solver.solution().is_none());
        }
    }

    #[test]
    fn solver_agrees_with_parity_3x3(steps in 0usize..=16, use_twin in any::<bool>(), seed in any::<u64>()) {
        let scrambled = scrambled_board(3, steps, &mut SmallRng::seed_from_u64(seed));
        // Only one of the two searches may ever reach a goal, and it has to be
        // the one the inversion count picks.
        let board = if use_twin { scrambled.twin() } else { scrambled.clone() };
        let solver = Solver::new(board.clone());
        let twin_solver = Solver::new(board.twin());
        prop_assert_eq!(solver.is_solvable(), is_solvable_by_parity(&board));
        prop_assert_ne!(solver.is_solvable(), twin_solver.is_solvable());
        prop_assert!(solver.state().is_terminal());
    }

    #[test]
    fn scrambled_boards_solve_within_walk_length(steps in 0usize..=16, seed in any::<u64>()) {
        let board = scrambled_board(3, steps, &mut SmallRng::seed_from_u64(seed));
        let solver = Solver::new(board.clone());
        let moves = solver.moves().expect("scrambled boards are solvable");
        prop_assert!(moves <= steps);
        prop_assert!(moves >= board.manhattan());
        // Every slide moves the blank to a cell of the other colour, so any two
        // paths between the same boards have the same length parity.
        prop_assert_eq!((steps - moves) % 2, 0);
        assert_valid_solution(&board, &solver)?;
    }
}

#[test]
fn solver_is_deterministic() {
    let board = scrambled_board(3, 24, &mut SmallRng::seed_from_u64(2024));
    let first = Solver::new(board.clone());
    let second = Solver::new(board);
    assert_eq!(first.moves(), second.moves());
    assert_eq!(first.solution(), second.solution());
    assert_eq!(first.stats(), second.stats());
}
