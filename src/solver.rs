//! This module contains the logic for solving Kakuro puzzles.
//!
//! Most importantly, this module contains the definition of the
//! [BacktrackingSolver], which combines AC-3-style domain initialization,
//! forward checking and recursive backtracking search. The variable selection
//! and value ordering heuristics it uses are controlled by [Heuristics].
//!
//! The lower-level operations of the engine, namely [initialize_domains],
//! [is_run_feasible], [is_consistent] and [forward_check], are exposed as
//! free functions, so the individual reasoning steps can be used and tested
//! on their own.
//!
//! # Example
//!
//! ```
//! use kakuro_csp::Puzzle;
//! use kakuro_csp::solver::{BacktrackingSolver, Heuristics};
//!
//! let puzzle = Puzzle::parse(
//!     "3 3\n\
//!      X  D4 D6\n\
//!      A3 .  .\n\
//!      A7 .  .").unwrap();
//! let solver = BacktrackingSolver::new(Heuristics::FULL);
//! let (solution, stats) = solver.solve(&puzzle).unwrap();
//!
//! assert!(puzzle.check_solution(&solution));
//! assert!(stats.nodes >= 4);
//! ```

use crate::{Position, Puzzle, Run};
use crate::combinations;
use crate::error::{KakuroError, KakuroResult};
use crate::util::{DigitSet, MAX_DIGIT, MIN_DIGIT};

use std::collections::{HashMap, HashSet};
use std::time::{Duration, Instant};

/// A (partial) assignment of digits to white cells. Cells which are absent
/// from the map are considered unassigned.
pub type Assignment = HashMap<Position, usize>;

/// The candidate digits that are currently considered possible for each
/// white cell.
pub type Domains = HashMap<Position, DigitSet>;

/// The heuristic toggles of a [BacktrackingSolver]. Each of the four
/// combinations has a conventional name, available both as an associated
/// constant and through [Heuristics::name] and [Heuristics::from_name].
///
/// Heuristics only influence the order in which the search space is explored.
/// On a puzzle with a unique solution, all four combinations find the same
/// assignment.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Heuristics {

    /// Whether the solver selects the next variable by the
    /// minimum-remaining-values rule, preferring the cell with the smallest
    /// domain and breaking ties by the larger number of unassigned cells
    /// sharing a run. Without this, cells are filled in row-major order.
    pub mrv: bool,

    /// Whether the solver orders candidate digits by the
    /// least-constraining-value rule, preferring digits that occur in the
    /// domains of fewer unassigned cells sharing a run. Without this, digits
    /// are tried in ascending order.
    pub lcv: bool
}

impl Heuristics {

    /// No heuristics. Variables are selected in row-major order and digits
    /// are tried in ascending order.
    pub const BASIC: Heuristics = Heuristics { mrv: false, lcv: false };

    /// Minimum-remaining-values variable selection only.
    pub const MRV: Heuristics = Heuristics { mrv: true, lcv: false };

    /// Least-constraining-value digit ordering only.
    pub const LCV: Heuristics = Heuristics { mrv: false, lcv: true };

    /// Both minimum-remaining-values and least-constraining-value.
    pub const FULL: Heuristics = Heuristics { mrv: true, lcv: true };

    /// All four heuristic combinations, in the order [Heuristics::BASIC],
    /// [Heuristics::MRV], [Heuristics::LCV], [Heuristics::FULL].
    pub const ALL: [Heuristics; 4] = [
        Heuristics::BASIC,
        Heuristics::MRV,
        Heuristics::LCV,
        Heuristics::FULL
    ];

    /// Creates heuristics with the given toggles.
    pub fn new(mrv: bool, lcv: bool) -> Heuristics {
        Heuristics {
            mrv,
            lcv
        }
    }

    /// The conventional name of this heuristic combination, one of `basic`,
    /// `mrv`, `lcv` and `full`.
    pub fn name(&self) -> &'static str {
        match (self.mrv, self.lcv) {
            (false, false) => "basic",
            (true, false) => "mrv",
            (false, true) => "lcv",
            (true, true) => "full"
        }
    }

    /// Looks up the heuristic combination with the given conventional name.
    /// Returns `None` if `name` is not one of `basic`, `mrv`, `lcv` and
    /// `full`.
    pub fn from_name(name: &str) -> Option<Heuristics> {
        match name {
            "basic" => Some(Heuristics::BASIC),
            "mrv" => Some(Heuristics::MRV),
            "lcv" => Some(Heuristics::LCV),
            "full" => Some(Heuristics::FULL),
            _ => None
        }
    }
}

/// Counters accumulated during a single [BacktrackingSolver::solve] call.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SearchStats {

    /// The number of search nodes that were entered, that is, the number of
    /// recursive calls which began exploring the digits of some cell. Calls
    /// which only detected that the assignment was already complete are not
    /// counted.
    pub nodes: u64,

    /// The number of abandoned candidate digits, counted whenever a digit
    /// fails the consistency check, whenever forward checking discovers that
    /// it empties a domain, and whenever the search returns from an
    /// exhausted subtree below it.
    pub backtracks: u64,

    /// The wall-clock duration of the whole solve, measured from before
    /// domain initialization until either a solution or the proof of
    /// unsatisfiability was found.
    pub elapsed: Duration
}

/// Computes the initial domain of every white cell of the given puzzle. Each
/// domain starts as the full digit range and is intersected with the union
/// of all combinations that fit each run containing the cell. Since a
/// reduced domain can invalidate combinations of a crossing run, runs are
/// re-scanned until a fixed point is reached.
///
/// # Errors
///
/// * `KakuroError::InvalidRunSpec`, if some run admits no combination at
/// all, for example a single cell with a clue total of 10 or more.
/// * `KakuroError::DomainWipeout`, if the reduction removed every candidate
/// digit from some cell.
pub fn initialize_domains(puzzle: &Puzzle) -> KakuroResult<Domains> {
    let table = combinations::combo_table();
    let mut domains: Domains = puzzle.variables().iter()
        .map(|&variable| (variable, DigitSet::all()))
        .collect();
    let mut changed = true;

    while changed {
        changed = false;

        for (run_index, run) in puzzle.runs().iter().enumerate() {
            let entry = table.get(run.len(), run.total())
                .ok_or(KakuroError::InvalidRunSpec {
                    run: run_index,
                    length: run.len(),
                    total: run.total()
                })?;
            let valid_digits = entry.digits();

            for &cell in run.cells() {
                let domain = domains.get_mut(&cell).unwrap();

                if domain.intersect_assign(valid_digits) {
                    changed = true;

                    if domain.is_empty() {
                        return Err(KakuroError::DomainWipeout {
                            cell,
                            run: run_index
                        });
                    }
                }
            }
        }
    }

    Ok(domains)
}

fn has_combination(digits: &[usize], count: usize, target: usize) -> bool {
    if count == 0 {
        return target == 0;
    }

    if digits.len() < count {
        return false;
    }

    for (index, &digit) in digits.iter().enumerate() {
        if digit > target {
            break;
        }

        if has_combination(&digits[(index + 1)..], count - 1, target - digit) {
            return true;
        }
    }

    false
}

/// Checks whether the given run can still be completed under the given
/// partial assignment. The checks are layered from cheap to expensive:
/// duplicate digits and overshot totals fail immediately, then the number of
/// still-available digits and the sums of the smallest and largest of them
/// bound the reachable totals, and only if all of those pass, the remaining
/// digit subsets are enumerated to decide whether the exact remainder is
/// reachable. An assignment that places a number outside the digit range on
/// a cell of the run is never feasible.
pub fn is_run_feasible(run: &Run, assignment: &Assignment) -> bool {
    let mut used = DigitSet::new();
    let mut assigned_count = 0;
    let mut current_sum = 0;

    for cell in run.cells() {
        if let Some(&value) = assignment.get(cell) {
            if value < MIN_DIGIT || value > MAX_DIGIT || !used.insert(value) {
                return false;
            }

            assigned_count += 1;
            current_sum += value;
        }
    }

    if assigned_count == 0 {
        return true;
    }

    let remaining_cells = run.len() - assigned_count;

    if remaining_cells == 0 {
        return current_sum == run.total();
    }

    if current_sum >= run.total() {
        return false;
    }

    let remaining_sum = run.total() - current_sum;
    let available = DigitSet::all() - used;

    if remaining_cells > available.len() {
        return false;
    }

    if remaining_sum < available.sum_smallest(remaining_cells)
            || remaining_sum > available.sum_largest(remaining_cells) {
        return false;
    }

    let available_digits: Vec<usize> = available.iter().collect();
    has_combination(&available_digits, remaining_cells, remaining_sum)
}

/// Checks whether assigning the given digit to the given cell keeps all runs
/// containing that cell feasible. The digit is assigned tentatively and the
/// previous state of `assignment` is restored before this function returns,
/// so no lasting modification is made.
pub fn is_consistent(puzzle: &Puzzle, assignment: &mut Assignment,
        variable: Position, value: usize) -> bool {
    let previous = assignment.insert(variable, value);
    let mut consistent = true;

    for &run_index in puzzle.runs_at(variable) {
        if !is_run_feasible(&puzzle.runs()[run_index], assignment) {
            consistent = false;
            break;
        }
    }

    match previous {
        Some(previous_value) => assignment.insert(variable, previous_value),
        None => assignment.remove(&variable)
    };

    consistent
}

/// Removes the given digit from the domains of all unassigned cells which
/// share a run with the given cell, since no digit can repeat within a run.
/// Returns `false` if some domain became empty, which proves that the branch
/// assigning this digit cannot lead to a solution. Only the given `domains`
/// are modified, so a solver can undo the whole operation by discarding the
/// map.
///
/// # Panics
///
/// If `domains` lacks an entry for some unassigned white cell of the puzzle.
pub fn forward_check(puzzle: &Puzzle, variable: Position, value: usize,
        assignment: &Assignment, domains: &mut Domains) -> bool {
    for &run_index in puzzle.runs_at(variable) {
        for &cell in puzzle.runs()[run_index].cells() {
            if cell == variable || assignment.contains_key(&cell) {
                continue;
            }

            let domain = domains.get_mut(&cell).unwrap();

            if domain.remove(value) && domain.is_empty() {
                return false;
            }
        }
    }

    true
}

fn build_neighbors(puzzle: &Puzzle) -> HashMap<Position, HashSet<Position>> {
    let mut neighbors: HashMap<Position, HashSet<Position>> =
        puzzle.variables().iter()
            .map(|&variable| (variable, HashSet::new()))
            .collect();

    for run in puzzle.runs() {
        for &cell in run.cells() {
            for &other in run.cells() {
                if other != cell {
                    neighbors.entry(cell)
                        .or_insert_with(HashSet::new)
                        .insert(other);
                }
            }
        }
    }

    neighbors
}

struct Search<'a> {
    puzzle: &'a Puzzle,
    neighbors: HashMap<Position, HashSet<Position>>,
    heuristics: Heuristics,
    nodes: u64,
    backtracks: u64
}

impl<'a> Search<'a> {

    fn unassigned_degree(&self, variable: Position,
            assignment: &Assignment) -> usize {
        self.neighbors[&variable].iter()
            .filter(|&&neighbor| !assignment.contains_key(&neighbor))
            .count()
    }

    // Returns None if every variable is assigned.
    fn select_variable(&self, assignment: &Assignment,
            domains: &Domains) -> Option<Position> {
        let mut selected = None;

        for &variable in self.puzzle.variables() {
            if assignment.contains_key(&variable) {
                continue;
            }

            if !self.heuristics.mrv {
                return Some(variable);
            }

            let size = domains[&variable].len();
            let degree = self.unassigned_degree(variable, assignment);
            let better = match selected {
                None => true,
                Some((_, best_size, best_degree)) =>
                    size < best_size
                        || size == best_size && degree > best_degree
            };

            if better {
                selected = Some((variable, size, degree));
            }
        }

        selected.map(|(variable, _, _)| variable)
    }

    fn conflict_count(&self, variable: Position, value: usize,
            assignment: &Assignment, domains: &Domains) -> usize {
        self.neighbors[&variable].iter()
            .filter(|&&neighbor| !assignment.contains_key(&neighbor)
                && domains[&neighbor].contains(value))
            .count()
    }

    fn order_values(&self, variable: Position, assignment: &Assignment,
            domains: &Domains) -> Vec<usize> {
        let mut values: Vec<usize> = domains[&variable].iter().collect();

        if self.heuristics.lcv {
            // stable sort keeps equally constraining digits ascending
            values.sort_by_key(|&value|
                self.conflict_count(variable, value, assignment, domains));
        }

        values
    }

    fn backtrack(&mut self, assignment: &mut Assignment,
            domains: &Domains) -> Option<Assignment> {
        let variable = match self.select_variable(assignment, domains) {
            Some(variable) => variable,
            None => return Some(assignment.clone())
        };

        self.nodes += 1;

        for value in self.order_values(variable, assignment, domains) {
            if !is_consistent(self.puzzle, assignment, variable, value) {
                self.backtracks += 1;
                continue;
            }

            let mut extended_assignment = assignment.clone();
            extended_assignment.insert(variable, value);
            let mut pruned_domains = domains.clone();

            if !forward_check(self.puzzle, variable, value,
                    &extended_assignment, &mut pruned_domains) {
                self.backtracks += 1;
                continue;
            }

            let solution =
                self.backtrack(&mut extended_assignment, &pruned_domains);

            if solution.is_some() {
                return solution;
            }

            self.backtracks += 1;
        }

        None
    }
}

/// A solver which finds the first solution of a Kakuro puzzle by recursive
/// backtracking search over the white cells. Before the search starts, all
/// cell domains are initialized by constraint propagation, and during the
/// search each tentative assignment is checked for run feasibility and
/// propagated into the domains of its neighbors by forward checking.
///
/// The searched space is deterministic for fixed [Heuristics], so repeated
/// solves of the same puzzle return the same solution and the same
/// [SearchStats] counters.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct BacktrackingSolver {
    heuristics: Heuristics
}

impl BacktrackingSolver {

    /// Creates a new backtracking solver that searches with the given
    /// heuristics.
    pub fn new(heuristics: Heuristics) -> BacktrackingSolver {
        BacktrackingSolver {
            heuristics
        }
    }

    /// The heuristics with which this solver searches.
    pub fn heuristics(&self) -> Heuristics {
        self.heuristics
    }

    /// Solves the given puzzle, returning the first solution found together
    /// with the [SearchStats] of the search. The wall clock of the stats
    /// starts when this method is entered, so it covers domain
    /// initialization as well as the search itself.
    ///
    /// # Errors
    ///
    /// * `KakuroError::InvalidRunSpec` and `KakuroError::DomainWipeout`, if
    /// domain initialization proves the puzzle unsatisfiable (see
    /// [initialize_domains]).
    /// * `KakuroError::NoSolution`, if the search space was exhausted
    /// without finding a solution.
    pub fn solve(&self, puzzle: &Puzzle)
            -> KakuroResult<(Assignment, SearchStats)> {
        let start = Instant::now();
        let domains = initialize_domains(puzzle)?;
        let mut search = Search {
            puzzle,
            neighbors: build_neighbors(puzzle),
            heuristics: self.heuristics,
            nodes: 0,
            backtracks: 0
        };
        let mut assignment = Assignment::new();
        let solution = search.backtrack(&mut assignment, &domains);
        let stats = SearchStats {
            nodes: search.nodes,
            backtracks: search.backtracks,
            elapsed: start.elapsed()
        };

        match solution {
            Some(solution) => Ok((solution, stats)),
            None => Err(KakuroError::NoSolution)
        }
    }
}

/// Solves the given puzzle with the given heuristic toggles. This is
/// shorthand for constructing a [BacktrackingSolver] with the corresponding
/// [Heuristics] and calling [BacktrackingSolver::solve].
///
/// # Errors
///
/// See [BacktrackingSolver::solve].
pub fn solve(puzzle: &Puzzle, use_mrv: bool, use_lcv: bool)
        -> KakuroResult<(Assignment, SearchStats)> {
    BacktrackingSolver::new(Heuristics::new(use_mrv, use_lcv)).solve(puzzle)
}

#[cfg(test)]
mod tests {

    use super::*;

    use crate::digits;

    fn assignment(entries: &[(Position, usize)]) -> Assignment {
        entries.iter().copied().collect()
    }

    fn row_run(row: usize, first_col: usize, length: usize,
            total: usize) -> Run {
        let cells = (first_col..(first_col + length))
            .map(|col| Position::new(row, col))
            .collect();
        Run::new(cells, total)
    }

    #[test]
    fn heuristics_names_round_trip() {
        for &heuristics in Heuristics::ALL.iter() {
            assert_eq!(Some(heuristics),
                Heuristics::from_name(heuristics.name()));
        }

        assert_eq!(None, Heuristics::from_name("bogus"));
    }

    #[test]
    fn initialization_reduces_domains_to_run_combinations() {
        let puzzle = Puzzle::parse("1 3\nA17 . .").unwrap();
        let domains = initialize_domains(&puzzle).unwrap();

        assert_eq!(digits!(8, 9), domains[&Position::new(0, 1)]);
        assert_eq!(digits!(8, 9), domains[&Position::new(0, 2)]);
    }

    #[test]
    fn initialization_propagates_between_crossing_runs() {
        let puzzle = Puzzle::parse(
            "3 3\n\
             X  D4 D6\n\
             A3 .  .\n\
             A7 .  .").unwrap();
        let domains = initialize_domains(&puzzle).unwrap();

        assert_eq!(digits!(1), domains[&Position::new(1, 1)]);
        assert_eq!(digits!(1, 2), domains[&Position::new(1, 2)]);
        assert_eq!(digits!(1, 3), domains[&Position::new(2, 1)]);
        assert_eq!(digits!(1, 2, 4, 5), domains[&Position::new(2, 2)]);
    }

    #[test]
    fn initialization_is_idempotent() {
        let puzzle = Puzzle::parse(
            "3 3\n\
             X  D4 D6\n\
             A3 .  .\n\
             A7 .  .").unwrap();

        assert_eq!(initialize_domains(&puzzle).unwrap(),
            initialize_domains(&puzzle).unwrap());
    }

    #[test]
    fn initialization_rejects_invalid_run() {
        let puzzle = Puzzle::parse("1 2\nA99 .").unwrap();

        assert_eq!(
            Err(KakuroError::InvalidRunSpec {
                run: 0,
                length: 1,
                total: 99
            }),
            initialize_domains(&puzzle));
    }

    #[test]
    fn initialization_rejects_zero_total() {
        let puzzle = Puzzle::parse("1 2\nA0 .").unwrap();

        assert_eq!(
            Err(KakuroError::InvalidRunSpec {
                run: 0,
                length: 1,
                total: 0
            }),
            initialize_domains(&puzzle));
    }

    #[test]
    fn initialization_detects_wipeout() {
        // the across run requires { 8, 9 }, the down run { 1, 2 }
        let puzzle = Puzzle::parse(
            "3 3\n\
             X   D3 X\n\
             A17 .  .\n\
             X   .  X").unwrap();

        assert_eq!(
            Err(KakuroError::DomainWipeout {
                cell: Position::new(1, 1),
                run: 1
            }),
            initialize_domains(&puzzle));
    }

    #[test]
    fn empty_run_assignment_is_feasible() {
        let run = row_run(0, 0, 3, 12);

        assert!(is_run_feasible(&run, &assignment(&[])));
    }

    #[test]
    fn duplicate_digits_are_infeasible() {
        let run = row_run(0, 0, 3, 12);
        let assignment = assignment(
            &[(Position::new(0, 0), 4), (Position::new(0, 2), 4)]);

        assert!(!is_run_feasible(&run, &assignment));
    }

    #[test]
    fn out_of_range_digits_are_infeasible() {
        let run = row_run(0, 0, 3, 12);
        let assignment = assignment(&[(Position::new(0, 0), 0)]);

        assert!(!is_run_feasible(&run, &assignment));
    }

    #[test]
    fn complete_run_requires_exact_total() {
        let run = row_run(0, 0, 2, 9);

        assert!(is_run_feasible(&run, &assignment(
            &[(Position::new(0, 0), 4), (Position::new(0, 1), 5)])));
        assert!(!is_run_feasible(&run, &assignment(
            &[(Position::new(0, 0), 4), (Position::new(0, 1), 6)])));
    }

    #[test]
    fn overshot_partial_sum_is_infeasible() {
        let run = row_run(0, 0, 3, 8);
        let assignment = assignment(
            &[(Position::new(0, 0), 3), (Position::new(0, 1), 5)]);

        assert!(!is_run_feasible(&run, &assignment));
    }

    #[test]
    fn too_long_run_is_infeasible() {
        // 10 cells cannot hold 10 distinct digits
        let run = row_run(0, 0, 10, 46);
        let assignment = assignment(&[(Position::new(0, 0), 1)]);

        assert!(!is_run_feasible(&run, &assignment));
    }

    #[test]
    fn bounds_reject_unreachable_remainders() {
        // remainder 22 exceeds the two largest available digits, 8 + 9
        let high = row_run(0, 0, 3, 23);

        assert!(!is_run_feasible(&high,
            &assignment(&[(Position::new(0, 0), 1)])));

        // remainder 2 is below the two smallest available digits, 1 + 2
        let low = row_run(0, 0, 3, 7);

        assert!(!is_run_feasible(&low,
            &assignment(&[(Position::new(0, 0), 5)])));
    }

    #[test]
    fn subset_enumeration_decides_exact_remainders() {
        // assigned 3 + 4 + 5 + 6 + 7 = 25, available { 1, 2, 8, 9 }
        let cells: Vec<(Position, usize)> = (0..5)
            .map(|col| (Position::new(0, col), col + 3))
            .collect();

        // remainder 12 passes the bounds but no pair sums to it
        let gappy = row_run(0, 0, 7, 37);

        assert!(!is_run_feasible(&gappy, &assignment(&cells)));

        // remainder 10 is reachable as 1 + 9 or 2 + 8
        let reachable = row_run(0, 0, 7, 35);

        assert!(is_run_feasible(&reachable, &assignment(&cells)));
    }

    #[test]
    fn consistency_check_restores_assignment() {
        let puzzle = Puzzle::parse("1 3\nA3 . .").unwrap();
        let mut assignment = Assignment::new();

        assert!(is_consistent(&puzzle, &mut assignment,
            Position::new(0, 1), 1));
        assert!(assignment.is_empty());

        assignment.insert(Position::new(0, 1), 1);

        // duplicate in the run
        assert!(!is_consistent(&puzzle, &mut assignment,
            Position::new(0, 2), 1));
        assert_eq!(1, assignment.len());
        assert_eq!(Some(&1), assignment.get(&Position::new(0, 1)));
    }

    #[test]
    fn forward_check_prunes_run_neighbors() {
        let puzzle = Puzzle::parse("1 3\nA3 . .").unwrap();
        let mut domains = initialize_domains(&puzzle).unwrap();
        let mut assignment = Assignment::new();
        assignment.insert(Position::new(0, 1), 1);

        assert!(forward_check(&puzzle, Position::new(0, 1), 1, &assignment,
            &mut domains));
        assert_eq!(digits!(2), domains[&Position::new(0, 2)]);
    }

    #[test]
    fn forward_check_detects_wipeout() {
        let puzzle = Puzzle::parse("1 3\nA3 . .").unwrap();
        let mut domains = initialize_domains(&puzzle).unwrap();
        domains.insert(Position::new(0, 2), DigitSet::singleton(1));
        let mut assignment = Assignment::new();
        assignment.insert(Position::new(0, 1), 1);

        assert!(!forward_check(&puzzle, Position::new(0, 1), 1, &assignment,
            &mut domains));
    }

    #[test]
    fn solver_finds_forced_solution() {
        let puzzle = Puzzle::parse("1 3\nA3 . .").unwrap();

        for &heuristics in Heuristics::ALL.iter() {
            let solver = BacktrackingSolver::new(heuristics);
            let (solution, _) = solver.solve(&puzzle).unwrap();

            assert_eq!(2, solution.len());
            assert_eq!(Some(&1), solution.get(&Position::new(0, 1)));
            assert_eq!(Some(&2), solution.get(&Position::new(0, 2)));
        }
    }

    #[test]
    fn solver_counts_nodes_and_backtracks() {
        let puzzle = Puzzle::parse(
            "3 3\n\
             X  D4 D6\n\
             A3 .  .\n\
             A7 .  .").unwrap();
        let solver = BacktrackingSolver::new(Heuristics::FULL);
        let (solution, stats) = solver.solve(&puzzle).unwrap();

        assert!(puzzle.check_solution(&solution));
        // one node per cell, one dead candidate in the last cell
        assert_eq!(4, stats.nodes);
        assert_eq!(1, stats.backtracks);
    }

    #[test]
    fn solver_statistics_are_deterministic() {
        let puzzle = Puzzle::parse(
            "3 3\n\
             X  D4 D6\n\
             A3 .  .\n\
             A7 .  .").unwrap();

        for &heuristics in Heuristics::ALL.iter() {
            let solver = BacktrackingSolver::new(heuristics);
            let (first_solution, first_stats) = solver.solve(&puzzle).unwrap();
            let (second_solution, second_stats) =
                solver.solve(&puzzle).unwrap();

            assert_eq!(first_solution, second_solution);
            assert_eq!(first_stats.nodes, second_stats.nodes);
            assert_eq!(first_stats.backtracks, second_stats.backtracks);
        }
    }

    #[test]
    fn unsatisfiable_puzzle_is_detected_by_search() {
        // crossing totals force both cells of the across run to 1
        let puzzle = Puzzle::parse(
            "3 3\n\
             X  D3 D3\n\
             A4 .  .\n\
             A3 .  .").unwrap();

        for &heuristics in Heuristics::ALL.iter() {
            let solver = BacktrackingSolver::new(heuristics);

            assert_eq!(Err(KakuroError::NoSolution), solver.solve(&puzzle));
        }
    }

    #[test]
    fn solve_shorthand_matches_solver() {
        let puzzle = Puzzle::parse("1 3\nA3 . .").unwrap();
        let (expected_solution, _) =
            BacktrackingSolver::new(Heuristics::MRV).solve(&puzzle).unwrap();
        let (actual_solution, _) = solve(&puzzle, true, false).unwrap();

        assert_eq!(expected_solution, actual_solution);
    }
}
