//! Command line interface solving a single Kakuro puzzle file with a chosen
//! heuristic combination, or comparing all combinations on it.

use kakuro_csp::{Position, Puzzle, SolvedBoard};
use kakuro_csp::solver::{
    Assignment,
    BacktrackingSolver,
    Heuristics,
    SearchStats
};

use std::env;
use std::fs;
use std::process;

const USAGE: &str = "\
Usage: kakuro [OPTIONS] <PUZZLE_FILE>

Solves a Kakuro puzzle with constraint propagation and backtracking search.

Options:
  --method <NAME>  heuristic combination: basic, mrv, lcv or full
                   [default: full]
  --compare        run and compare all heuristic combinations on this puzzle
  -h, --help       print this help message";

fn exit_usage(message: &str) -> ! {
    eprintln!("{}", message);
    eprintln!("{}", USAGE);
    process::exit(2)
}

fn solve_or_exit(solver: &BacktrackingSolver, puzzle: &Puzzle, file: &str)
        -> (Assignment, SearchStats) {
    match solver.solve(puzzle) {
        Ok(result) => result,
        Err(error) => {
            eprintln!("Error solving {}: {}", file, error);
            process::exit(1)
        }
    }
}

fn print_stats(stats: &SearchStats, valid: bool) {
    println!("Nodes: {}, backtracks: {}, time: {:.6} s", stats.nodes,
        stats.backtracks, stats.elapsed.as_secs_f64());
    println!("Solution valid? {}", valid);
}

// Compact alternative to the pretty board: two characters per white cell,
// " . " for black cells.
fn digits_only(puzzle: &Puzzle, assignment: &Assignment) -> String {
    let grid = puzzle.grid();
    let mut lines = Vec::new();

    for row in 0..grid.rows() {
        let mut cells = Vec::new();

        for col in 0..grid.cols() {
            if grid.cell(row, col).unwrap().is_white() {
                let value = assignment.get(&Position::new(row, col))
                    .copied()
                    .unwrap_or(0);
                cells.push(format!("{:2}", value));
            }
            else {
                cells.push(String::from(" . "));
            }
        }

        lines.push(cells.join(" "));
    }

    lines.join("\n")
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let mut method = String::from("full");
    let mut compare = false;
    let mut puzzle_file = None;
    let mut index = 1;

    while index < args.len() {
        match args[index].as_str() {
            "--method" => {
                index += 1;

                match args.get(index) {
                    Some(name) => method = name.clone(),
                    None => exit_usage("missing value for --method")
                }
            },
            "--compare" => compare = true,
            "-h" | "--help" => {
                println!("{}", USAGE);
                process::exit(0);
            },
            arg if arg.starts_with('-') =>
                exit_usage(&format!("unknown option: {}", arg)),
            arg => {
                if puzzle_file.is_some() {
                    exit_usage("more than one puzzle file given");
                }

                puzzle_file = Some(arg.to_string());
            }
        }

        index += 1;
    }

    let puzzle_file = match puzzle_file {
        Some(file) => file,
        None => exit_usage("missing puzzle file")
    };
    let heuristics = match Heuristics::from_name(&method) {
        Some(heuristics) => heuristics,
        None => exit_usage(&format!("unknown method: {}", method))
    };
    let code = match fs::read_to_string(&puzzle_file) {
        Ok(code) => code,
        Err(error) => {
            eprintln!("Error reading {}: {}", puzzle_file, error);
            process::exit(1);
        }
    };
    let puzzle = match Puzzle::parse(&code) {
        Ok(puzzle) => puzzle,
        Err(error) => {
            eprintln!("Error parsing {}: {}", puzzle_file, error);
            process::exit(1);
        }
    };

    if compare {
        for &heuristics in &Heuristics::ALL {
            let solver = BacktrackingSolver::new(heuristics);
            let (solution, stats) =
                solve_or_exit(&solver, &puzzle, &puzzle_file);
            let valid = puzzle.check_solution(&solution);

            println!("\n=== Method: {} (MRV={}, LCV={}) ===",
                heuristics.name(), heuristics.mrv, heuristics.lcv);
            print_stats(&stats, valid);

            if heuristics == Heuristics::FULL {
                println!("\nSolved puzzle (full):");
                println!("{}", SolvedBoard::new(&puzzle, &solution));
            }
        }
    }
    else {
        let solver = BacktrackingSolver::new(heuristics);
        let (solution, stats) = solve_or_exit(&solver, &puzzle, &puzzle_file);
        let valid = puzzle.check_solution(&solution);

        println!("Method: {} (MRV={}, LCV={})", heuristics.name(),
            heuristics.mrv, heuristics.lcv);
        print_stats(&stats, valid);
        println!("\nKakuro-style grid:");
        println!("{}", SolvedBoard::new(&puzzle, &solution));
        println!("\nDigits-only view:");
        println!("{}", digits_only(&puzzle, &solution));
    }
}
