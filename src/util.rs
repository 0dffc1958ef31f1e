//! This module contains utility functionality required in other parts of this
//! crate, most prominently the [DigitSet], a compact set of the digits 1 to 9
//! which is used both for candidate domains of cells and for the entries of
//! the combination table.

use std::collections::HashSet;
use std::hash::Hash;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Sub, SubAssign};

/// The lowest digit that can be placed in a Kakuro cell.
pub const MIN_DIGIT: usize = 1;

/// The highest digit that can be placed in a Kakuro cell.
pub const MAX_DIGIT: usize = 9;

/// A set of the digits [MIN_DIGIT] to [MAX_DIGIT], stored as a bit mask in a
/// single word. Copying is therefore cheap, which the solver exploits when it
/// clones all cell domains before descending into a branch of the search.
///
/// As an example, the following code stores the candidates of some cell and
/// strikes one of them.
///
/// ```
/// use kakuro_csp::digits;
/// use kakuro_csp::util::DigitSet;
///
/// let mut candidates = digits!(1, 4, 7);
///
/// assert!(candidates.contains(4));
/// assert!(candidates.remove(4));
/// assert_eq!(2, candidates.len());
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct DigitSet {
    mask: u16
}

/// An iterator over the digits contained in a [DigitSet], in ascending order.
pub struct DigitSetIter {
    mask: u16,
    next_digit: usize
}

impl Iterator for DigitSetIter {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        while self.mask != 0 {
            let digit = self.next_digit;
            let present = self.mask & 1 != 0;
            self.mask >>= 1;
            self.next_digit += 1;

            if present {
                return Some(digit);
            }
        }

        None
    }
}

fn mask_of(digit: usize) -> u16 {
    assert!(digit >= MIN_DIGIT && digit <= MAX_DIGIT,
        "digit {} is outside [{}, {}]", digit, MIN_DIGIT, MAX_DIGIT);

    1 << digit
}

impl DigitSet {

    /// Creates a new, empty digit set.
    pub fn new() -> DigitSet {
        DigitSet {
            mask: 0
        }
    }

    /// Creates a digit set that contains every digit from [MIN_DIGIT] to
    /// [MAX_DIGIT].
    pub fn all() -> DigitSet {
        let mut set = DigitSet::new();

        for digit in MIN_DIGIT..=MAX_DIGIT {
            set.insert(digit);
        }

        set
    }

    /// Creates a digit set that contains only the given digit.
    ///
    /// # Panics
    ///
    /// If `digit` is not in the range [MIN_DIGIT] to [MAX_DIGIT].
    pub fn singleton(digit: usize) -> DigitSet {
        DigitSet {
            mask: mask_of(digit)
        }
    }

    /// Indicates whether this set contains the given digit. Numbers outside
    /// the range [MIN_DIGIT] to [MAX_DIGIT] are contained in no set, so
    /// `false` is returned for those.
    pub fn contains(&self, digit: usize) -> bool {
        if digit < MIN_DIGIT || digit > MAX_DIGIT {
            false
        }
        else {
            self.mask & mask_of(digit) != 0
        }
    }

    /// Inserts the given digit into this set, such that [DigitSet::contains]
    /// returns `true` for it afterwards. Returns `true` if the set was
    /// changed, that is, the digit was not present before.
    ///
    /// # Panics
    ///
    /// If `digit` is not in the range [MIN_DIGIT] to [MAX_DIGIT].
    pub fn insert(&mut self, digit: usize) -> bool {
        let mask = mask_of(digit);
        let present = self.mask & mask != 0;
        self.mask |= mask;
        !present
    }

    /// Removes the given digit from this set, such that [DigitSet::contains]
    /// returns `false` for it afterwards. Returns `true` if the set was
    /// changed, that is, the digit was present before.
    ///
    /// # Panics
    ///
    /// If `digit` is not in the range [MIN_DIGIT] to [MAX_DIGIT].
    pub fn remove(&mut self, digit: usize) -> bool {
        let mask = mask_of(digit);
        let present = self.mask & mask != 0;
        self.mask &= !mask;
        present
    }

    /// Removes all digits from this set.
    pub fn clear(&mut self) {
        self.mask = 0;
    }

    /// Indicates whether this set is empty.
    pub fn is_empty(&self) -> bool {
        self.mask == 0
    }

    /// The number of digits contained in this set.
    pub fn len(&self) -> usize {
        self.mask.count_ones() as usize
    }

    /// The sum of all digits contained in this set.
    pub fn sum(&self) -> usize {
        self.iter().sum()
    }

    /// The sum of the `count` smallest digits contained in this set.
    ///
    /// # Panics
    ///
    /// If this set contains fewer than `count` digits.
    pub fn sum_smallest(&self, count: usize) -> usize {
        assert!(count <= self.len(),
            "set contains fewer than {} digits", count);

        self.iter().take(count).sum()
    }

    /// The sum of the `count` largest digits contained in this set.
    ///
    /// # Panics
    ///
    /// If this set contains fewer than `count` digits.
    pub fn sum_largest(&self, count: usize) -> usize {
        assert!(count <= self.len(),
            "set contains fewer than {} digits", count);

        (MIN_DIGIT..=MAX_DIGIT).rev()
            .filter(|&digit| self.contains(digit))
            .take(count)
            .sum()
    }

    /// Returns an iterator over the digits in this set in ascending order.
    pub fn iter(&self) -> DigitSetIter {
        DigitSetIter {
            mask: self.mask,
            next_digit: 0
        }
    }

    fn op_assign(&mut self, other: DigitSet,
            op: impl Fn(u16, u16) -> u16) -> bool {
        let old_mask = self.mask;
        self.mask = op(self.mask, other.mask);
        self.mask != old_mask
    }

    fn op(&self, other: DigitSet, op: impl Fn(u16, u16) -> u16) -> DigitSet {
        DigitSet {
            mask: op(self.mask, other.mask)
        }
    }

    /// Computes the union of this set and `other`, that is, the set of all
    /// digits contained in at least one of the two.
    pub fn union(&self, other: DigitSet) -> DigitSet {
        self.op(other, |lhs, rhs| lhs | rhs)
    }

    /// Turns this set into the union of itself and `other`. Returns `true`
    /// if this set was changed by the operation.
    pub fn union_assign(&mut self, other: DigitSet) -> bool {
        self.op_assign(other, |lhs, rhs| lhs | rhs)
    }

    /// Computes the intersection of this set and `other`, that is, the set
    /// of all digits contained in both of the two.
    pub fn intersect(&self, other: DigitSet) -> DigitSet {
        self.op(other, |lhs, rhs| lhs & rhs)
    }

    /// Turns this set into the intersection of itself and `other`. Returns
    /// `true` if this set was changed by the operation.
    pub fn intersect_assign(&mut self, other: DigitSet) -> bool {
        self.op_assign(other, |lhs, rhs| lhs & rhs)
    }

    /// Computes the difference of this set and `other`, that is, the set of
    /// all digits contained in this set but not in `other`.
    pub fn difference(&self, other: DigitSet) -> DigitSet {
        self.op(other, |lhs, rhs| lhs & !rhs)
    }

    /// Removes all digits contained in `other` from this set. Returns `true`
    /// if this set was changed by the operation.
    pub fn difference_assign(&mut self, other: DigitSet) -> bool {
        self.op_assign(other, |lhs, rhs| lhs & !rhs)
    }
}

impl BitOr for DigitSet {
    type Output = DigitSet;

    fn bitor(self, rhs: DigitSet) -> DigitSet {
        self.union(rhs)
    }
}

impl BitOrAssign for DigitSet {
    fn bitor_assign(&mut self, rhs: DigitSet) {
        self.union_assign(rhs);
    }
}

impl BitAnd for DigitSet {
    type Output = DigitSet;

    fn bitand(self, rhs: DigitSet) -> DigitSet {
        self.intersect(rhs)
    }
}

impl BitAndAssign for DigitSet {
    fn bitand_assign(&mut self, rhs: DigitSet) {
        self.intersect_assign(rhs);
    }
}

impl Sub for DigitSet {
    type Output = DigitSet;

    fn sub(self, rhs: DigitSet) -> DigitSet {
        self.difference(rhs)
    }
}

impl SubAssign for DigitSet {
    fn sub_assign(&mut self, rhs: DigitSet) {
        self.difference_assign(rhs);
    }
}

/// Creates a new [DigitSet](crate::util::DigitSet) that contains the given
/// digits. For empty sets, [DigitSet::new](crate::util::DigitSet::new) can be
/// used instead.
///
/// # Example
///
/// ```
/// use kakuro_csp::digits;
/// use kakuro_csp::util::DigitSet;
///
/// let set = digits!(2, 3, 5, 7);
///
/// assert!(set.contains(5));
/// assert!(!set.contains(4));
/// assert_eq!(4, set.len());
/// ```
#[macro_export]
macro_rules! digits {
    ($set:expr; $digit:expr) => {
        ($set).insert($digit)
    };

    ($set:expr; $digit:expr, $($digits:expr),+) => {
        digits!($set; $digit);
        digits!($set; $($digits),+)
    };

    ($($digits:expr),+) => {
        {
            let mut set = DigitSet::new();
            digits!(set; $($digits),+);
            set
        }
    };
}

pub(crate) fn contains_duplicate<I>(mut iter: I) -> bool
where
    I: Iterator,
    I::Item: Hash + Eq
{
    let mut set = HashSet::new();
    iter.any(|element| !set.insert(element))
}
