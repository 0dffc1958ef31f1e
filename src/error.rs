//! This module defines the errors and result types used throughout this
//! crate. Parsing a puzzle from its textual form and solving a puzzle have
//! separate error enumerations, since the former indicates malformed input
//! while the latter indicates an unsatisfiable puzzle.

use crate::Position;

use std::fmt::{self, Display, Formatter};
use std::num::ParseIntError;

/// An enumeration of the errors which can occur while solving a Kakuro
/// puzzle. This includes the propagation phase, so a puzzle whose clues are
/// contradictory is reported here as well.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum KakuroError {

    /// Indicates that a run admits no combination of distinct digits at all,
    /// that is, no set of `length` distinct digits from 1 to 9 sums to
    /// `total`. This is raised during domain initialization, before any
    /// search happens.
    InvalidRunSpec {

        /// The index of the offending run in [Puzzle::runs](crate::Puzzle::runs).
        run: usize,

        /// The number of cells in the offending run.
        length: usize,

        /// The clue total of the offending run.
        total: usize
    },

    /// Indicates that constraint propagation removed every candidate digit
    /// from the domain of some cell, proving the puzzle unsatisfiable before
    /// any search happens.
    DomainWipeout {

        /// The cell whose domain became empty.
        cell: Position,

        /// The index of the run whose reduction emptied the domain.
        run: usize
    },

    /// Indicates that the backtracking search exhausted the entire search
    /// space without finding a complete, consistent assignment.
    NoSolution
}

impl Display for KakuroError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            KakuroError::InvalidRunSpec { run, length, total } =>
                write!(f, "no combination of {} distinct digits sums to {} \
                    (run {})", length, total, run),
            KakuroError::DomainWipeout { cell, run } =>
                write!(f, "domain wipeout at cell {} while reducing run {}",
                    cell, run),
            KakuroError::NoSolution =>
                write!(f, "search space exhausted without finding a solution")
        }
    }
}

/// Syntactic sugar for `Result<V, KakuroError>`.
pub type KakuroResult<V> = Result<V, KakuroError>;

/// An enumeration of the errors which can occur while parsing a Kakuro
/// puzzle from its textual form.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PuzzleParseError {

    /// Indicates that the input was empty or its first line was blank, where
    /// a header of the form `<rows> <cols>` was expected.
    MissingHeader,

    /// Indicates that the header line did not consist of exactly two
    /// whitespace-separated tokens.
    MalformedHeader,

    /// Indicates that some number, such as a dimension in the header or the
    /// digits following `A` or `D` in a clue token, could not be parsed.
    NumberFormatError,

    /// Indicates that the input ended before the number of rows promised by
    /// the header was read.
    WrongNumberOfRows,

    /// Indicates that some row did not contain exactly as many tokens as the
    /// header promised columns.
    WrongNumberOfColumns,

    /// Indicates that a cell token was neither `.` nor `X` nor a sequence of
    /// `A<total>` and `D<total>` clue parts.
    InvalidToken
}

impl Display for PuzzleParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            PuzzleParseError::MissingHeader =>
                write!(f, "missing header line of the form `<rows> <cols>`"),
            PuzzleParseError::MalformedHeader =>
                write!(f, "header line must consist of exactly two numbers"),
            PuzzleParseError::NumberFormatError =>
                write!(f, "number could not be parsed"),
            PuzzleParseError::WrongNumberOfRows =>
                write!(f, "input ended before all rows were read"),
            PuzzleParseError::WrongNumberOfColumns =>
                write!(f, "row contains a wrong number of cell tokens"),
            PuzzleParseError::InvalidToken =>
                write!(f, "cell token is neither `.` nor `X` nor a clue")
        }
    }
}

impl From<ParseIntError> for PuzzleParseError {
    fn from(_: ParseIntError) -> Self {
        PuzzleParseError::NumberFormatError
    }
}

/// Syntactic sugar for `Result<V, PuzzleParseError>`.
pub type PuzzleParseResult<V> = Result<V, PuzzleParseError>;
