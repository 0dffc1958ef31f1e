//! This module contains the precomputed combination table which underpins all
//! run-related reasoning in this crate. For every way of choosing distinct
//! digits from 1 to 9, the table records the resulting [DigitSet] under the
//! key `(length, total)`, where `length` is the number of chosen digits and
//! `total` their sum. Given a run of some length and clue total, the solver
//! can thus look up every way of filling it, or conclude from an absent key
//! that the run is unsatisfiable.
//!
//! The table is built once per process and shared behind [combo_table].

use crate::util::{DigitSet, MAX_DIGIT, MIN_DIGIT};

use lazy_static::lazy_static;

use std::collections::HashMap;

/// All combinations for one `(length, total)` key of the [ComboTable],
/// together with the union of their digits. The union is what domain
/// initialization intersects cell domains with, so it is cached here instead
/// of being recomputed on every propagation pass.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ComboEntry {
    combinations: Vec<DigitSet>,
    digits: DigitSet
}

impl ComboEntry {

    fn new() -> ComboEntry {
        ComboEntry {
            combinations: Vec::new(),
            digits: DigitSet::new()
        }
    }

    fn push(&mut self, combination: DigitSet) {
        self.combinations.push(combination);
        self.digits.union_assign(combination);
    }

    /// All sets of distinct digits with this entry's length and total. Within
    /// one entry, combinations are ordered lexicographically by their digits
    /// in ascending order.
    pub fn combinations(&self) -> &[DigitSet] {
        &self.combinations
    }

    /// The union of all digits that occur in any combination of this entry.
    /// A digit outside this set can never be part of a run with this entry's
    /// length and total.
    pub fn digits(&self) -> DigitSet {
        self.digits
    }
}

/// The table of all combinations of distinct digits from 1 to 9, keyed by
/// their length and total. Since no digit can repeat within a run, every
/// satisfiable `(length, total)` pair of a run is a key of this table, and
/// the absence of a key proves the run unsatisfiable.
#[derive(Clone, Debug)]
pub struct ComboTable {
    entries: HashMap<(usize, usize), ComboEntry>
}

impl ComboTable {

    fn build() -> ComboTable {
        let mut entries = HashMap::new();
        collect(MIN_DIGIT, DigitSet::new(), &mut entries);

        ComboTable {
            entries
        }
    }

    /// Gets the entry for runs with the given length and clue total, or
    /// `None` if no combination of `length` distinct digits sums to `total`.
    pub fn get(&self, length: usize, total: usize) -> Option<&ComboEntry> {
        self.entries.get(&(length, total))
    }
}

fn collect(first: usize, combination: DigitSet,
        entries: &mut HashMap<(usize, usize), ComboEntry>) {
    for digit in first..=MAX_DIGIT {
        let mut extended = combination;
        extended.insert(digit);
        entries.entry((extended.len(), extended.sum()))
            .or_insert_with(ComboEntry::new)
            .push(extended);
        collect(digit + 1, extended, entries);
    }
}

lazy_static! {
    static ref COMBO_TABLE: ComboTable = ComboTable::build();
}

/// Gets a reference to the process-wide combination table, which is built on
/// first access and shared by all solver instances afterwards.
pub fn combo_table() -> &'static ComboTable {
    &COMBO_TABLE
}
