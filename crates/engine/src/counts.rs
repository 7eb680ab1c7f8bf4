// crates/engine/src/counts.rs
use std::iter::Sum;
use std::ops::{Add, AddAssign};

use serde::ser::{Serialize, SerializeMap, Serializer};

pub const ALPHABET_LEN: usize = 26;

/// Occurrence counts for the 26 ASCII letters, case-folded.
///
/// Slot `i` holds the count for the letter `b'a' + i`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CountVector([u64; ALPHABET_LEN]);

impl CountVector {
    #[inline]
    pub const fn zero() -> Self {
        Self([0; ALPHABET_LEN])
    }

    /// Count for `letter`, either case. Non-letters always report zero.
    pub fn get(&self, letter: char) -> u64 {
        if letter.is_ascii_alphabetic() {
            self.0[usize::from(letter.to_ascii_lowercase() as u8 - b'a')]
        } else {
            0
        }
    }

    /// Tally one scanned byte. Returns `false` when the byte is not an ASCII letter.
    #[inline]
    pub fn record(&mut self, byte: u8) -> bool {
        if byte.is_ascii_alphabetic() {
            self.0[usize::from(byte.to_ascii_lowercase() - b'a')] += 1;
            true
        } else {
            false
        }
    }

    pub fn total(&self) -> u64 {
        self.0.iter().sum()
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&c| c == 0)
    }

    /// `(letter, count)` pairs in alphabetical order.
    pub fn iter(&self) -> impl Iterator<Item = (char, u64)> + '_ {
        self.0
            .iter()
            .enumerate()
            .map(|(i, &count)| (char::from(b'a' + i as u8), count))
    }
}

impl Default for CountVector {
    fn default() -> Self {
        Self::zero()
    }
}

impl Add for CountVector {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self::Output {
        self += rhs;
        self
    }
}

impl AddAssign for CountVector {
    fn add_assign(&mut self, rhs: Self) {
        for (slot, value) in self.0.iter_mut().zip(rhs.0) {
            *slot += value;
        }
    }
}

impl Sum for CountVector {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}

// Serialized as `{"a": n, "b": n, ...}` so structured output stays readable.
impl Serialize for CountVector {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(ALPHABET_LEN))?;
        let mut key = [0u8; 4];
        for (letter, count) in self.iter() {
            map.serialize_entry(&*letter.encode_utf8(&mut key), &count)?;
        }
        map.end()
    }
}
