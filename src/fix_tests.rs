use crate::{Position, Puzzle};
use crate::error::KakuroError;
use crate::solver::{Assignment, BacktrackingSolver, Heuristics};

// A single across run whose domains are reduced to singletons before the
// search starts.
const SINGLE_RUN: &str = "1 3\n\
    A3 . .";

// Two across and two down runs crossing in a 2x2 block of white cells.
const CROSSING_RUNS: &str = "3 3\n\
    X  D4 D6\n\
    A3 .  .\n\
    A7 .  .";

// Across runs of lengths two and three overlapping three down runs.
const OVERLAPPING_RUNS: &str = "4 4\n\
    X   D16 D6 X\n\
    A10 .   .  D5\n\
    A13 .   .  .\n\
    X   A4  .  .";

// A ring of white cells around a central clue cell.
const RING: &str = "5 5\n\
    X  D6 D5   D6 X\n\
    A8 .  .    .  X\n\
    A3 .  A1D4 .  X\n\
    A9 .  .    .  X\n\
    X  X  X    X  X";

// Runs whose individual domains are satisfiable, but which admit no common
// assignment.
const UNSATISFIABLE: &str = "3 3\n\
    X  D3 D3\n\
    A4 .  .\n\
    A3 .  .";

// An across clue too large for its two cells, which empties a domain during
// the initial propagation.
const CONTRADICTORY: &str = "3 3\n\
    X   D3 X\n\
    A17 .  .\n\
    X   .  X";

// No single digit sums to 99.
const IMPOSSIBLE_CLUE: &str = "1 2\n\
    A99 .";

fn assignment(entries: &[(Position, usize)]) -> Assignment {
    entries.iter().cloned().collect()
}

fn assert_unique_solution(code: &str, expected: &[(Position, usize)]) {
    let puzzle = Puzzle::parse(code).unwrap();
    let expected = assignment(expected);

    for &heuristics in &Heuristics::ALL {
        let solver = BacktrackingSolver::new(heuristics);
        let (solution, _) = solver.solve(&puzzle).unwrap();

        assert!(puzzle.check_solution(&solution));
        assert_eq!(expected, solution);
    }
}

#[test]
fn single_run_is_solved_by_propagation_alone() {
    assert_unique_solution(SINGLE_RUN, &[
        (Position::new(0, 1), 1),
        (Position::new(0, 2), 2)
    ]);
}

#[test]
fn crossing_runs_are_solved_by_all_heuristics() {
    assert_unique_solution(CROSSING_RUNS, &[
        (Position::new(1, 1), 1),
        (Position::new(1, 2), 2),
        (Position::new(2, 1), 3),
        (Position::new(2, 2), 4)
    ]);
}

#[test]
fn overlapping_runs_are_solved_by_all_heuristics() {
    assert_unique_solution(OVERLAPPING_RUNS, &[
        (Position::new(1, 1), 9),
        (Position::new(1, 2), 1),
        (Position::new(2, 1), 7),
        (Position::new(2, 2), 2),
        (Position::new(2, 3), 4),
        (Position::new(3, 2), 3),
        (Position::new(3, 3), 1)
    ]);
}

#[test]
fn ring_puzzle_is_solved_by_all_heuristics() {
    assert_unique_solution(RING, &[
        (Position::new(1, 1), 1),
        (Position::new(1, 2), 5),
        (Position::new(1, 3), 2),
        (Position::new(2, 1), 3),
        (Position::new(2, 3), 1),
        (Position::new(3, 1), 2),
        (Position::new(3, 2), 4),
        (Position::new(3, 3), 3)
    ]);
}

#[test]
fn crossing_runs_take_four_nodes_and_one_backtrack() {
    let puzzle = Puzzle::parse(CROSSING_RUNS).unwrap();

    for &heuristics in &Heuristics::ALL {
        let solver = BacktrackingSolver::new(heuristics);
        let (_, stats) = solver.solve(&puzzle).unwrap();

        assert_eq!(4, stats.nodes);
        assert_eq!(1, stats.backtracks);
    }
}

#[test]
fn solved_puzzle_renders_as_text() {
    let puzzle = Puzzle::parse(CROSSING_RUNS).unwrap();
    let solver = BacktrackingSolver::new(Heuristics::FULL);
    let (solution, _) = solver.solve(&puzzle).unwrap();

    assert_eq!("3 3\nX D4 D6\nA3 1 2\nA7 3 4",
        puzzle.solution_text(&solution));
}

#[test]
fn unsatisfiable_puzzle_reports_no_solution() {
    let puzzle = Puzzle::parse(UNSATISFIABLE).unwrap();

    for &heuristics in &Heuristics::ALL {
        let solver = BacktrackingSolver::new(heuristics);

        assert_eq!(Err(KakuroError::NoSolution), solver.solve(&puzzle));
    }
}

#[test]
fn contradictory_clues_report_domain_wipeout() {
    let puzzle = Puzzle::parse(CONTRADICTORY).unwrap();
    let solver = BacktrackingSolver::new(Heuristics::BASIC);

    assert_eq!(
        Err(KakuroError::DomainWipeout {
            cell: Position::new(1, 1),
            run: 1
        }),
        solver.solve(&puzzle));
}

#[test]
fn impossible_clue_total_is_rejected() {
    let puzzle = Puzzle::parse(IMPOSSIBLE_CLUE).unwrap();
    let solver = BacktrackingSolver::new(Heuristics::BASIC);

    assert_eq!(
        Err(KakuroError::InvalidRunSpec {
            run: 0,
            length: 1,
            total: 99
        }),
        solver.solve(&puzzle));
}
