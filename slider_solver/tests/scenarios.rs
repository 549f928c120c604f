use slider_solver::parser::parse_board;
use slider_solver::{Board, Solver, SolverError, SolverState};

fn solve(text: &str) -> Solver {
    Solver::new(parse_board(text).unwrap())
}

#[test]
fn unsolvable_scenario() {
    let solver = solve("3\n 1 2 3\n 4 5 6\n 8 7 0\n");
    assert!(!solver.is_solvable());
    assert_eq!(solver.state(), SolverState::Unsolvable);
    assert_eq!(solver.moves(), None);
    assert!(solver.solution().is_none());
}

#[test]
fn already_solved_scenario() {
    let solver = solve("3\n 1 2 3\n 4 5 6\n 7 8 0\n");
    assert_eq!(solver.moves(), Some(0));
    assert_eq!(solver.solution().unwrap().len(), 1);
    assert!(solver.solution().unwrap()[0].is_goal());
}

#[test]
fn one_move_scenario() {
    let solver = solve("3\n 1 2 3\n 4 5 0\n 7 8 6\n");
    assert!(solver.is_solvable());
    assert_eq!(solver.moves(), Some(1));
    assert_eq!(solver.solution().unwrap().len(), 2);
}

#[test]
fn puzzle_files_from_the_usual_test_set() {
    let cases = [
        ("3\n 0 1 3\n 4 2 5\n 7 8 6\n", Some(4)),
        ("3\n 8 1 3\n 4 0 2\n 7 6 5\n", Some(14)),
        ("2\n 1 0\n 3 2\n", Some(1)),
        ("2\n 0 1\n 3 2\n", Some(2)),
        ("2\n 1 0\n 2 3\n", None),
        ("4\n 1 2 3 4\n 5 6 0 8\n 9 10 7 11\n 13 14 15 12\n", Some(3)),
    ];
    for (text, expected) in cases {
        assert_eq!(solve(text).moves(), expected, "board:\n{}", text);
    }
}

#[test]
fn solution_boards_print_in_text_format() {
    let solver = solve("2\n 1 2\n 0 3\n");
    let printed: Vec<String> = solver.solution().unwrap().iter().map(|b| b.to_string()).collect();
    assert_eq!(printed, vec!["2\n 1  2 \n 0  3 \n", "2\n 1  2 \n 3  0 \n"]);
    for text in &printed {
        assert!(parse_board(text).is_ok());
    }
}

#[test]
fn missing_board_is_an_invalid_argument() {
    let err = Solver::try_new(None).unwrap_err();
    assert_eq!(err, SolverError::MissingBoard);
    assert!(err.to_string().contains("without an initial board"));
    assert!(Solver::try_new(Some(Board::goal(2))).is_ok());
}
