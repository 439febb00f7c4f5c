//! # DigitSet
//!
//! A small owned set of the digits 1–9, backed by a `u16` bitmask. One
//! `DigitSet` per blank cell forms the propagator's domain map; the sets live
//! only for the duration of a single propagation run.

/// A set of digits 1–9 stored as bits 0–8 of a `u16`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DigitSet(u16);

const FULL_MASK: u16 = 0b1_1111_1111;

impl DigitSet {
    /// The empty set.
    pub const EMPTY: Self = Self(0);

    /// The set containing every digit 1–9.
    pub const FULL: Self = Self(FULL_MASK);

    /// Creates an empty set.
    pub fn new() -> Self {
        Self::EMPTY
    }

    fn bit(digit: u8) -> u16 {
        debug_assert!((1..=9).contains(&digit), "digit out of range: {}", digit);
        1 << (digit - 1)
    }

    /// Inserts a digit. Returns `true` if the digit was not already present.
    pub fn insert(&mut self, digit: u8) -> bool {
        let bit = Self::bit(digit);
        let was_absent = self.0 & bit == 0;
        self.0 |= bit;
        was_absent
    }

    /// Removes a digit. Returns `true` if the digit was present.
    pub fn remove(&mut self, digit: u8) -> bool {
        let bit = Self::bit(digit);
        let was_present = self.0 & bit != 0;
        self.0 &= !bit;
        was_present
    }

    /// Returns `true` if the digit is in the set.
    pub fn contains(&self, digit: u8) -> bool {
        self.0 & Self::bit(digit) != 0
    }

    /// Returns `true` if every digit of `other` is also in `self`.
    pub fn contains_all(&self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Removes every digit of `other` from `self`. Returns `true` if the set
    /// shrank.
    pub fn remove_all(&mut self, other: Self) -> bool {
        let before = self.0;
        self.0 &= !other.0;
        self.0 != before
    }

    /// Returns the number of digits in the set.
    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns `true` if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// If the set holds exactly one digit, returns it.
    pub fn sole_digit(&self) -> Option<u8> {
        if self.len() == 1 {
            Some(self.0.trailing_zeros() as u8 + 1)
        } else {
            None
        }
    }

    /// Iterates over the digits in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        let bits = self.0;
        (1..=9u8).filter(move |&digit| bits & (1 << (digit - 1)) != 0)
    }
}

impl FromIterator<u8> for DigitSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = Self::new();
        for digit in iter {
            set.insert(digit);
        }
        set
    }
}
