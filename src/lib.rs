// Code lints

#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused_import_braces)]
#![warn(unused_lifetimes)]
#![warn(unused_qualifications)]

// Doc lints

#![warn(rustdoc::broken_intra_doc_links)]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::invalid_codeblock_attributes)]

//! This crate implements a complete solver for Kakuro puzzles built on
//! constraint propagation and backtracking search. It supports the following
//! key features:
//!
//! * Parsing and printing Kakuro puzzles in a simple text format
//! * A precomputed table of the digit combinations available to every run
//! length and total
//! * Reduction of all cell domains to a fixed point before the search starts
//! * Backtracking search with optional MRV and LCV heuristics
//! * Search statistics to compare the different heuristic configurations
//!
//! A Kakuro puzzle is played on a rectangular grid of black and white cells.
//! Every maximal horizontal or vertical row of white cells, called a run, is
//! preceded by a black cell carrying a clue. The digits 1 to 9 entered into
//! the run's cells must be pairwise distinct and sum to the clue's total.
//! Note in this introduction we will mostly be using small puzzles due to
//! their simpler nature.
//!
//! # Parsing puzzles
//!
//! See [Grid::parse] for the exact format of a puzzle code.
//!
//! Codes can be used to exchange puzzles, while pretty prints can be used to
//! display a puzzle in a clearer manner. An example of how to parse a puzzle
//! and inspect its structure is provided below.
//!
//! ```
//! use kakuro_csp::Puzzle;
//!
//! let puzzle = Puzzle::parse("3 3\n\
//!     X  D4 D6\n\
//!     A3 .  .\n\
//!     A7 .  .").unwrap();
//!
//! assert_eq!(4, puzzle.variables().len());
//! assert_eq!(4, puzzle.runs().len());
//! ```
//!
//! # Solving puzzles
//!
//! The [BacktrackingSolver](solver::BacktrackingSolver) fills all white cells
//! of a puzzle with digits satisfying every run, or reports that no such
//! assignment exists. Which of the available heuristics it applies during the
//! search is controlled by a [Heuristics](solver::Heuristics) configuration
//! provided at construction.
//!
//! ```
//! use kakuro_csp::Puzzle;
//! use kakuro_csp::solver::{BacktrackingSolver, Heuristics};
//!
//! let puzzle = Puzzle::parse("3 3\n\
//!     X  D4 D6\n\
//!     A3 .  .\n\
//!     A7 .  .").unwrap();
//! let solver = BacktrackingSolver::new(Heuristics::FULL);
//! let (solution, stats) = solver.solve(&puzzle).unwrap();
//!
//! assert!(puzzle.check_solution(&solution));
//! assert!(stats.nodes >= 4);
//! ```
//!
//! # Comparing heuristics
//!
//! Besides the solution, the solver yields a
//! [SearchStats](solver::SearchStats) with the number of search nodes and
//! backtracks as well as the elapsed wall clock time. Running all entries of
//! [Heuristics::ALL](solver::Heuristics::ALL) on the same puzzle shows how
//! much work each configuration saves.
//!
//! ```
//! use kakuro_csp::Puzzle;
//! use kakuro_csp::solver::{BacktrackingSolver, Heuristics};
//!
//! let puzzle = Puzzle::parse("3 3\n\
//!     X  D4 D6\n\
//!     A3 .  .\n\
//!     A7 .  .").unwrap();
//!
//! for &heuristics in &Heuristics::ALL {
//!     let solver = BacktrackingSolver::new(heuristics);
//!     let (solution, stats) = solver.solve(&puzzle).unwrap();
//!
//!     println!("{}: {} nodes, {} backtracks", heuristics.name(), stats.nodes,
//!         stats.backtracks);
//!     assert!(puzzle.check_solution(&solution));
//! }
//! ```
//!
//! # Note regarding performance
//!
//! While solving small puzzles is fast even in debug builds, pruning larger
//! search spaces profits greatly from optimizations. It is recommended to use
//! at least `opt-level = 2` when solving harder puzzles or running the
//! contained benchmarks.

pub mod combinations;
pub mod error;
pub mod solver;
pub mod util;

#[cfg(test)]
mod fix_tests;

#[cfg(test)]
mod random_tests;

use error::{PuzzleParseError, PuzzleParseResult};
use solver::Assignment;
use util::contains_duplicate;

use serde::{Deserialize, Serialize};

use std::collections::HashMap;
use std::convert::TryFrom;
use std::fmt::{self, Display, Formatter};

/// The position of a single cell within a [Grid], given by its zero-based row
/// and column indices. The derived ordering sorts positions in row-major
/// order, that is, by row first and by column within the same row.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Position {

    /// The zero-based index of this cell's row, counted from the top.
    pub row: usize,

    /// The zero-based index of this cell's column, counted from the left.
    pub col: usize
}

impl Position {

    /// Creates a new position from the given zero-based row and column
    /// indices.
    pub fn new(row: usize, col: usize) -> Position {
        Position {
            row,
            col
        }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A single cell of a [Grid]. White cells are the puzzle's variables, while
/// black cells separate runs and may carry the clues that define them.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Cell {

    /// A white cell, which has to be filled with a digit from 1 to 9.
    White,

    /// A black cell, which may carry up to two clue totals.
    Black {

        /// The total of the run of white cells extending to the right of this
        /// cell, or `None` if it carries no across clue.
        across: Option<usize>,

        /// The total of the run of white cells extending below this cell, or
        /// `None` if it carries no down clue.
        down: Option<usize>
    }
}

impl Cell {

    /// Indicates whether this cell is white, i.e. has to be filled with a
    /// digit.
    pub fn is_white(&self) -> bool {
        match self {
            Cell::White => true,
            Cell::Black { .. } => false
        }
    }

    /// The total of the run extending to the right of this cell, or `None`
    /// if this is a white cell or a black cell without an across clue.
    pub fn across(&self) -> Option<usize> {
        match self {
            Cell::Black { across, .. } => *across,
            Cell::White => None
        }
    }

    /// The total of the run extending below this cell, or `None` if this is
    /// a white cell or a black cell without a down clue.
    pub fn down(&self) -> Option<usize> {
        match self {
            Cell::Black { down, .. } => *down,
            Cell::White => None
        }
    }
}

fn index(row: usize, col: usize, cols: usize) -> usize {
    row * cols + col
}

fn parse_token(token: &str) -> PuzzleParseResult<Cell> {
    if token == "." {
        return Ok(Cell::White);
    }

    if token == "X" {
        return Ok(Cell::Black {
            across: None,
            down: None
        });
    }

    let mut across = None;
    let mut down = None;
    let mut chars = token.chars().peekable();

    while let Some(letter) = chars.next() {
        if letter != 'A' && letter != 'D' {
            return Err(PuzzleParseError::InvalidToken);
        }

        let mut digits = String::new();

        while let Some(&c) = chars.peek() {
            if !c.is_ascii_digit() {
                break;
            }

            digits.push(c);
            chars.next();
        }

        let total = digits.parse::<usize>()?;

        if letter == 'A' {
            across = Some(total);
        }
        else {
            down = Some(total);
        }
    }

    Ok(Cell::Black {
        across,
        down
    })
}

fn token_string(cell: Cell) -> String {
    match cell {
        Cell::White => String::from("."),
        Cell::Black { across: None, down: None } => String::from("X"),
        Cell::Black { across, down } => {
            let mut token = String::new();

            if let Some(total) = across {
                token.push_str(&format!("A{}", total));
            }

            if let Some(total) = down {
                token.push_str(&format!("D{}", total));
            }

            token
        }
    }
}

/// A rectangular Kakuro grid composed of [Cell]s. The grid only stores the
/// puzzle's layout and clues; deriving the runs that connect the clues to
/// their white cells is the job of [Puzzle].
///
/// Grids can be parsed from and printed to a textual code, whose format is
/// documented in [Grid::parse]. In serialized form, a grid is represented by
/// that same code.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(into = "String")]
#[serde(try_from = "String")]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>
}

impl Grid {

    /// Parses a grid from a textual code. The code consists of a header line
    /// followed by one line per grid row, where cells within a row are
    /// separated by whitespace.
    ///
    /// The header holds the number of rows and columns, in this order,
    /// separated by whitespace. Each cell is one of the following tokens:
    ///
    /// * `.` denotes a white cell, which has to be filled with a digit.
    /// * `X` denotes a black cell without clues.
    /// * A black cell with clues is written as `A` directly followed by the
    /// total of the run extending to its right, `D` directly followed by the
    /// total of the run extending below it, or both concatenated, as in
    /// `A12D7`.
    ///
    /// As an example, the code below describes a 3x3 puzzle whose two across
    /// runs sum to 3 and 7 and whose two down runs sum to 4 and 6.
    ///
    /// ```text
    /// 3 3
    /// X  D4 D6
    /// A3 .  .
    /// A7 .  .
    /// ```
    ///
    /// Lines after the last grid row are ignored.
    ///
    /// # Errors
    ///
    /// * [PuzzleParseError::MissingHeader] if the code is empty or its first
    /// line is blank.
    /// * [PuzzleParseError::MalformedHeader] if the header does not consist
    /// of exactly two parts.
    /// * [PuzzleParseError::NumberFormatError] if a dimension or clue total
    /// cannot be parsed as a number.
    /// * [PuzzleParseError::WrongNumberOfRows] if the code ends before all
    /// rows announced in the header have been read.
    /// * [PuzzleParseError::WrongNumberOfColumns] if a row line does not
    /// hold exactly one token per column.
    /// * [PuzzleParseError::InvalidToken] if a cell token is neither `.` nor
    /// `X` nor a sequence of clues.
    pub fn parse(code: &str) -> PuzzleParseResult<Grid> {
        let mut lines = code.lines();
        let header = lines.next()
            .ok_or(PuzzleParseError::MissingHeader)?
            .trim();

        if header.is_empty() {
            return Err(PuzzleParseError::MissingHeader);
        }

        let parts: Vec<&str> = header.split_whitespace().collect();

        if parts.len() != 2 {
            return Err(PuzzleParseError::MalformedHeader);
        }

        let rows = parts[0].parse::<usize>()?;
        let cols = parts[1].parse::<usize>()?;
        let mut cells = Vec::with_capacity(rows * cols);

        for _ in 0..rows {
            let line = lines.next()
                .ok_or(PuzzleParseError::WrongNumberOfRows)?;
            let tokens: Vec<&str> = line.split_whitespace().collect();

            if tokens.len() != cols {
                return Err(PuzzleParseError::WrongNumberOfColumns);
            }

            for token in tokens {
                cells.push(parse_token(token)?);
            }
        }

        Ok(Grid {
            rows,
            cols,
            cells
        })
    }

    /// Converts this grid back into a code from which it can be parsed. Clue
    /// cells are normalized to state their across clue first, so the result
    /// may differ from the code the grid was parsed from.
    pub fn to_text(&self) -> String {
        let mut text = format!("{} {}", self.rows, self.cols);

        for row in 0..self.rows {
            text.push('\n');

            for col in 0..self.cols {
                if col > 0 {
                    text.push(' ');
                }

                let cell = self.cells[index(row, col, self.cols)];
                text.push_str(&token_string(cell));
            }
        }

        text
    }

    /// The number of rows of this grid.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// The number of columns of this grid.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The [Cell] at the given zero-based row and column indices, or `None`
    /// if they are outside this grid.
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        if row < self.rows && col < self.cols {
            Some(self.cells[index(row, col, self.cols)])
        }
        else {
            None
        }
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let width = self.cells.iter()
            .map(|&cell| token_string(cell).len())
            .max()
            .unwrap_or(0);

        for row in 0..self.rows {
            if row > 0 {
                writeln!(f)?;
            }

            for col in 0..self.cols {
                let token =
                    token_string(self.cells[index(row, col, self.cols)]);

                if col + 1 == self.cols {
                    write!(f, "{}", token)?;
                }
                else {
                    write!(f, "{:<1$} ", token, width)?;
                }
            }
        }

        Ok(())
    }
}

impl From<Grid> for String {
    fn from(grid: Grid) -> String {
        grid.to_text()
    }
}

impl TryFrom<String> for Grid {
    type Error = PuzzleParseError;

    fn try_from(code: String) -> Result<Grid, PuzzleParseError> {
        Grid::parse(&code)
    }
}

/// A run is a maximal sequence of horizontally or vertically adjacent white
/// cells together with the total announced by the clue preceding it. A valid
/// solution fills the run's cells with pairwise distinct digits summing to
/// that total.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Run {
    cells: Vec<Position>,
    total: usize
}

impl Run {

    pub(crate) fn new(cells: Vec<Position>, total: usize) -> Run {
        Run {
            cells,
            total
        }
    }

    /// The positions of the white cells of this run, in increasing distance
    /// from the clue cell.
    pub fn cells(&self) -> &[Position] {
        &self.cells
    }

    /// The number of white cells of this run.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// The total to which the digits entered into this run's cells must sum.
    pub fn total(&self) -> usize {
        self.total
    }
}

fn add_run(runs: &mut Vec<Run>, runs_at: &mut HashMap<Position, Vec<usize>>,
        cells: Vec<Position>, total: usize) {
    if cells.is_empty() {
        return;
    }

    let run_index = runs.len();

    for &cell in &cells {
        runs_at.entry(cell).or_insert_with(Vec::new).push(run_index);
    }

    runs.push(Run::new(cells, total));
}

/// A complete Kakuro puzzle, consisting of a [Grid] together with the
/// constraint structure derived from it: the list of variables, that is,
/// white cells to be filled, the [Run]s connecting clues to their cells, and
/// an index from each cell to the runs containing it.
#[derive(Clone, Debug)]
pub struct Puzzle {
    grid: Grid,
    runs: Vec<Run>,
    variables: Vec<Position>,
    runs_at: HashMap<Position, Vec<usize>>
}

impl Puzzle {

    /// Creates a new puzzle by deriving the constraint structure from the
    /// given [Grid]. Variables are collected in row-major order. Runs are
    /// indexed in the order their clue cells appear in a row-major scan,
    /// where all across runs precede all down runs. Clues whose run contains
    /// no white cell are dropped.
    pub fn new(grid: Grid) -> Puzzle {
        let mut variables = Vec::new();

        for row in 0..grid.rows() {
            for col in 0..grid.cols() {
                if grid.cell(row, col).unwrap().is_white() {
                    variables.push(Position::new(row, col));
                }
            }
        }

        let mut runs = Vec::new();
        let mut runs_at = HashMap::new();

        for row in 0..grid.rows() {
            for col in 0..grid.cols() {
                let across = grid.cell(row, col).and_then(|cell| cell.across());

                if let Some(total) = across {
                    let mut cells = Vec::new();
                    let mut next_col = col + 1;

                    while next_col < grid.cols() &&
                            grid.cell(row, next_col).unwrap().is_white() {
                        cells.push(Position::new(row, next_col));
                        next_col += 1;
                    }

                    add_run(&mut runs, &mut runs_at, cells, total);
                }
            }
        }

        for row in 0..grid.rows() {
            for col in 0..grid.cols() {
                let down = grid.cell(row, col).and_then(|cell| cell.down());

                if let Some(total) = down {
                    let mut cells = Vec::new();
                    let mut next_row = row + 1;

                    while next_row < grid.rows() &&
                            grid.cell(next_row, col).unwrap().is_white() {
                        cells.push(Position::new(next_row, col));
                        next_row += 1;
                    }

                    add_run(&mut runs, &mut runs_at, cells, total);
                }
            }
        }

        Puzzle {
            grid,
            runs,
            variables,
            runs_at
        }
    }

    /// Parses a puzzle from a textual code as documented in [Grid::parse]
    /// and derives its constraint structure as documented in [Puzzle::new].
    ///
    /// # Errors
    ///
    /// Any [PuzzleParseError] raised by [Grid::parse].
    pub fn parse(code: &str) -> PuzzleParseResult<Puzzle> {
        Ok(Puzzle::new(Grid::parse(code)?))
    }

    /// The [Grid] from which this puzzle was derived.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// All [Run]s of this puzzle, ordered as documented in [Puzzle::new].
    pub fn runs(&self) -> &[Run] {
        &self.runs
    }

    /// The positions of all white cells of this puzzle, in row-major order.
    pub fn variables(&self) -> &[Position] {
        &self.variables
    }

    /// The indices into [Puzzle::runs] of all runs containing the cell at
    /// the given position. Cells contained in no run yield an empty slice.
    pub fn runs_at(&self, position: Position) -> &[usize] {
        self.runs_at.get(&position)
            .map(|indices| indices.as_slice())
            .unwrap_or(&[])
    }

    /// Verifies that the given assignment is a valid solution of this
    /// puzzle, that is, every run's cells are assigned pairwise distinct
    /// digits summing to the run's total. Assignments to cells outside any
    /// run are ignored.
    pub fn check_solution(&self, assignment: &Assignment) -> bool {
        for run in &self.runs {
            let mut values = Vec::with_capacity(run.len());

            for &cell in run.cells() {
                match assignment.get(&cell) {
                    Some(&value) => values.push(value),
                    None => return false
                }
            }

            if contains_duplicate(values.iter()) {
                return false;
            }

            if values.iter().sum::<usize>() != run.total() {
                return false;
            }
        }

        true
    }

    /// Renders this puzzle in the same format as documented in
    /// [Grid::parse], with each white cell replaced by the digit the given
    /// assignment provides for it. White cells without an assigned value are
    /// rendered as `.`.
    pub fn solution_text(&self, assignment: &Assignment) -> String {
        let mut text = format!("{} {}", self.grid.rows(), self.grid.cols());

        for row in 0..self.grid.rows() {
            text.push('\n');

            for col in 0..self.grid.cols() {
                if col > 0 {
                    text.push(' ');
                }

                let cell = self.grid.cell(row, col).unwrap();

                if cell.is_white() {
                    match assignment.get(&Position::new(row, col)) {
                        Some(value) => text.push_str(&value.to_string()),
                        None => text.push('.')
                    }
                }
                else {
                    text.push_str(&token_string(cell));
                }
            }
        }

        text
    }
}

const CELL_WIDTH: usize = 7;

fn center(text: &str, width: usize) -> String {
    let padding = width.saturating_sub(text.len());
    let left = padding / 2;
    let right = padding - left;

    format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
}

fn clue_cell_text(across: Option<usize>, down: Option<usize>) -> String {
    if across.is_none() && down.is_none() {
        return " ".repeat(CELL_WIDTH);
    }

    let down_text = match down {
        Some(total) => format!("{:2}", total),
        None => String::from("  ")
    };
    let across_text = match across {
        Some(total) => format!("{:2}", total),
        None => String::from("  ")
    };

    center(&format!("{}\\{}", down_text, across_text), CELL_WIDTH)
}

fn white_cell_text(value: Option<usize>) -> String {
    match value {
        Some(value) => center(&value.to_string(), CELL_WIDTH),
        None => " ".repeat(CELL_WIDTH)
    }
}

/// A borrowing wrapper around a [Puzzle] and an [Assignment] whose [Display]
/// implementation renders the assignment into the puzzle's grid in the style
/// of typical Kakuro notation. Clue cells are rendered as `down\across`,
/// where absent clues are blank, and each assigned digit is centered within
/// its cell.
pub struct SolvedBoard<'a> {
    puzzle: &'a Puzzle,
    assignment: &'a Assignment
}

impl<'a> SolvedBoard<'a> {

    /// Creates a new solved board displaying the given assignment within the
    /// given puzzle's grid. Cells the assignment does not cover are rendered
    /// blank, so partial assignments are acceptable.
    pub fn new(puzzle: &'a Puzzle, assignment: &'a Assignment)
            -> SolvedBoard<'a> {
        SolvedBoard {
            puzzle,
            assignment
        }
    }
}

impl<'a> Display for SolvedBoard<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let grid = self.puzzle.grid();

        for row in 0..grid.rows() {
            if row > 0 {
                writeln!(f)?;
            }

            for col in 0..grid.cols() {
                match grid.cell(row, col).unwrap() {
                    Cell::White => {
                        let value = self.assignment
                            .get(&Position::new(row, col))
                            .copied();
                        write!(f, "{}", white_cell_text(value))?;
                    },
                    Cell::Black { across, down } =>
                        write!(f, "{}", clue_cell_text(across, down))?
                }
            }
        }

        Ok(())
    }
}
