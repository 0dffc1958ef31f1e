use crate::{Grid, Puzzle};
use crate::solver::{BacktrackingSolver, Heuristics};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const MAX_RUN_LENGTH: usize = 4;
const ITERATIONS_PER_RUN: usize = 30;

// Fills a rows x cols block with digits from 1 to 9 such that no digit
// repeats within a row or column. For blocks of up to 4x4 cells, at most six
// digits are excluded per cell, so a candidate always remains.
fn random_digit_block(rng: &mut ChaCha8Rng, rows: usize, cols: usize)
        -> Vec<Vec<usize>> {
    let mut block = vec![vec![0; cols]; rows];

    for row in 0..rows {
        for col in 0..cols {
            let candidates: Vec<usize> = (1..=9)
                .filter(|&digit|
                    (0..col).all(|c| block[row][c] != digit) &&
                    (0..row).all(|r| block[r][col] != digit))
                .collect();
            block[row][col] = candidates[rng.gen_range(0..candidates.len())];
        }
    }

    block
}

// Builds the code of a puzzle whose white cells form a single block, with
// one across run per row and one down run per column. The clue totals are
// taken from a random digit block, so the puzzle is guaranteed solvable.
fn random_puzzle_code(rng: &mut ChaCha8Rng) -> String {
    let rows = rng.gen_range(1..=MAX_RUN_LENGTH);
    let cols = rng.gen_range(1..=MAX_RUN_LENGTH);
    let block = random_digit_block(rng, rows, cols);
    let mut code = format!("{} {}", rows + 1, cols + 1);

    code.push_str("\nX");

    for col in 0..cols {
        let total: usize = (0..rows).map(|row| block[row][col]).sum();
        code.push_str(&format!(" D{}", total));
    }

    for row in 0..rows {
        let total: usize = block[row].iter().sum();
        code.push_str(&format!("\nA{}", total));

        for _ in 0..cols {
            code.push_str(" .");
        }
    }

    code
}

// Generated puzzles may admit several solutions, so the solver's output is
// checked for validity rather than compared with the generating block.
fn run_consistency_test(heuristics: Heuristics, seed: u64) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let solver = BacktrackingSolver::new(heuristics);

    for _ in 0..ITERATIONS_PER_RUN {
        let code = random_puzzle_code(&mut rng);
        let puzzle = Puzzle::parse(&code).unwrap();
        let (solution, stats) = solver.solve(&puzzle).unwrap();

        assert!(puzzle.check_solution(&solution));
        assert_eq!(puzzle.variables().len(), solution.len());
        assert!(stats.nodes >= puzzle.variables().len() as u64);
    }
}

#[test]
fn basic_solves_random_puzzles() {
    run_consistency_test(Heuristics::BASIC, 17)
}

#[test]
fn mrv_solves_random_puzzles() {
    run_consistency_test(Heuristics::MRV, 23)
}

#[test]
fn lcv_solves_random_puzzles() {
    run_consistency_test(Heuristics::LCV, 29)
}

#[test]
fn full_solves_random_puzzles() {
    run_consistency_test(Heuristics::FULL, 31)
}

#[test]
fn corrupted_solutions_fail_verification() {
    let mut rng = ChaCha8Rng::seed_from_u64(43);
    let solver = BacktrackingSolver::new(Heuristics::FULL);

    for _ in 0..ITERATIONS_PER_RUN {
        let code = random_puzzle_code(&mut rng);
        let puzzle = Puzzle::parse(&code).unwrap();
        let (solution, _) = solver.solve(&puzzle).unwrap();
        let variables = puzzle.variables();
        let cell = variables[rng.gen_range(0..variables.len())];
        let value = solution[&cell];
        let mut corrupted = solution.clone();

        // any other digit breaks the sum of every run containing the cell
        corrupted.insert(cell, value % 9 + 1);

        assert!(!puzzle.check_solution(&corrupted));
    }
}

#[test]
fn repeated_runs_are_deterministic() {
    let mut rng = ChaCha8Rng::seed_from_u64(37);
    let solver = BacktrackingSolver::new(Heuristics::FULL);

    for _ in 0..ITERATIONS_PER_RUN {
        let code = random_puzzle_code(&mut rng);
        let puzzle = Puzzle::parse(&code).unwrap();
        let (first_solution, first_stats) = solver.solve(&puzzle).unwrap();
        let (second_solution, second_stats) = solver.solve(&puzzle).unwrap();

        assert_eq!(first_solution, second_solution);
        assert_eq!(first_stats.nodes, second_stats.nodes);
        assert_eq!(first_stats.backtracks, second_stats.backtracks);
    }
}

#[test]
fn random_grids_survive_serialization() {
    let mut rng = ChaCha8Rng::seed_from_u64(41);

    for _ in 0..ITERATIONS_PER_RUN {
        let code = random_puzzle_code(&mut rng);
        let grid = Grid::parse(&code).unwrap();
        let json = serde_json::to_string(&grid).unwrap();

        assert_eq!(grid, serde_json::from_str(&json).unwrap());
    }
}
