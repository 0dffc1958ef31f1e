//! Batch driver running every puzzle in a directory with all heuristic
//! combinations, printing per-method statistics and optionally writing a
//! JSON summary.

use kakuro_csp::Puzzle;
use kakuro_csp::solver::{Assignment, BacktrackingSolver, Heuristics};

use serde::Serialize;

use std::env;
use std::fs;
use std::path::Path;
use std::process;

const USAGE: &str = "\
Usage: kakuro-batch [OPTIONS]

Runs every puzzle in a directory with all heuristic combinations and prints
solving statistics.

Options:
  --puzzles-dir <DIR>  directory containing .txt puzzle files
                       [default: puzzles]
  --json <PATH>        write a JSON summary of all runs to the given path
  --demo               run only the bundled demo puzzles
  -h, --help           print this help message";

const DEMO_PUZZLES: [&str; 5] = [
    "sample1.txt",
    "sample2.txt",
    "sample3.txt",
    "sample4.txt",
    "sample5.txt"
];

/// The outcome of running one heuristic combination on one puzzle, in the
/// shape it is serialized into the JSON summary.
#[derive(Serialize)]
struct MethodRecord {
    puzzle: String,
    file: String,
    method: &'static str,
    use_mrv: bool,
    use_lcv: bool,
    nodes: u64,
    backtracks: u64,
    time_sec: f64,
    valid: bool
}

fn exit_usage(message: &str) -> ! {
    eprintln!("{}", message);
    eprintln!("{}", USAGE);
    process::exit(2)
}

// Sorts file names by the number formed from their digits, so sample10.txt
// comes after sample9.txt rather than after sample1.txt.
fn puzzle_sort_key(file_name: &str) -> u64 {
    let digits: String = file_name.chars()
        .filter(|c| c.is_ascii_digit())
        .collect();
    digits.parse().unwrap_or(0)
}

fn puzzle_name(file_name: &str) -> &str {
    match file_name.rfind('.') {
        Some(dot) => &file_name[..dot],
        None => file_name
    }
}

fn collect_puzzle_files(puzzles_dir: &str, demo: bool) -> Vec<String> {
    let entries = match fs::read_dir(puzzles_dir) {
        Ok(entries) => entries,
        Err(error) => {
            eprintln!("Error reading {}: {}", puzzles_dir, error);
            process::exit(1);
        }
    };
    let mut puzzle_files = Vec::new();

    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(_) => continue
        };
        let file_name = entry.file_name();
        let file_name = match file_name.to_str() {
            Some(name) => name.to_string(),
            None => continue
        };

        if file_name.to_lowercase().ends_with(".txt") {
            puzzle_files.push(file_name);
        }
    }

    puzzle_files.sort_by_key(|name| (puzzle_sort_key(name), name.clone()));

    if demo {
        puzzle_files.retain(|name| DEMO_PUZZLES.contains(&name.as_str()));
    }

    puzzle_files
}

fn run_puzzle(puzzles_dir: &str, file_name: &str,
        records: &mut Vec<MethodRecord>) {
    let path = Path::new(puzzles_dir).join(file_name);
    let name = puzzle_name(file_name);

    println!("==============================");
    println!("Puzzle: {} ({})", name, file_name);
    println!("==============================");

    let code = match fs::read_to_string(&path) {
        Ok(code) => code,
        Err(error) => {
            eprintln!("Error reading {}: {}", path.display(), error);
            return;
        }
    };

    println!("Puzzle grid (from file):");

    for line in code.lines() {
        println!("  {}", line.trim_end());
    }

    println!();

    let puzzle = match Puzzle::parse(&code) {
        Ok(puzzle) => puzzle,
        Err(error) => {
            eprintln!("Error parsing {}: {}", path.display(), error);
            return;
        }
    };
    let mut first_solution: Option<Assignment> = None;

    for &heuristics in &Heuristics::ALL {
        println!("--- Method: {} (MRV={}, LCV={}) ---", heuristics.name(),
            heuristics.mrv, heuristics.lcv);

        let solver = BacktrackingSolver::new(heuristics);
        let (solution, stats) = match solver.solve(&puzzle) {
            Ok(result) => result,
            Err(error) => {
                eprintln!("Error solving {}: {}", path.display(), error);
                println!();
                continue;
            }
        };
        let valid = puzzle.check_solution(&solution);

        println!("Nodes: {}, backtracks: {}, time: {:.6} s", stats.nodes,
            stats.backtracks, stats.elapsed.as_secs_f64());
        println!("Solution valid? {}", valid);
        println!();

        if first_solution.is_none() && valid {
            first_solution = Some(solution);
        }

        records.push(MethodRecord {
            puzzle: name.to_string(),
            file: file_name.to_string(),
            method: heuristics.name(),
            use_mrv: heuristics.mrv,
            use_lcv: heuristics.lcv,
            nodes: stats.nodes,
            backtracks: stats.backtracks,
            time_sec: stats.elapsed.as_secs_f64(),
            valid
        });
    }

    if let Some(solution) = first_solution {
        println!("Solved grid (filled values):");

        for line in puzzle.solution_text(&solution).lines() {
            println!("  {}", line);
        }

        println!();
    }

    println!();
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let mut puzzles_dir = String::from("puzzles");
    let mut json_path = None;
    let mut demo = false;
    let mut index = 1;

    while index < args.len() {
        match args[index].as_str() {
            "--puzzles-dir" => {
                index += 1;

                match args.get(index) {
                    Some(dir) => puzzles_dir = dir.clone(),
                    None => exit_usage("missing value for --puzzles-dir")
                }
            },
            "--json" => {
                index += 1;

                match args.get(index) {
                    Some(path) => json_path = Some(path.clone()),
                    None => exit_usage("missing value for --json")
                }
            },
            "--demo" => demo = true,
            "-h" | "--help" => {
                println!("{}", USAGE);
                process::exit(0);
            },
            arg => exit_usage(&format!("unknown argument: {}", arg))
        }

        index += 1;
    }

    let puzzle_files = collect_puzzle_files(&puzzles_dir, demo);

    if puzzle_files.is_empty() {
        println!("No .txt puzzles found in {} (demo_only={})", puzzles_dir,
            demo);
        return;
    }

    println!("Found {} puzzles in '{}' (demo_only={}):", puzzle_files.len(),
        puzzles_dir, demo);

    for file_name in &puzzle_files {
        println!("  - {}", file_name);
    }

    println!();

    let mut records = Vec::new();

    for file_name in &puzzle_files {
        run_puzzle(&puzzles_dir, file_name, &mut records);
    }

    if let Some(json_path) = json_path {
        println!("Writing results to {} ...", json_path);

        let text = match serde_json::to_string_pretty(&records) {
            Ok(text) => text,
            Err(error) => {
                eprintln!("Error serializing results: {}", error);
                process::exit(1);
            }
        };

        if let Err(error) = fs::write(&json_path, text) {
            eprintln!("Error writing {}: {}", json_path, error);
            process::exit(1);
        }

        println!("Done.");
    }
}
