// Copyright (c) 2025-present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! # Separator-Interleaved Sequences
//!
//! A palindrome of odd length is centered on a base, one of even length is
//! centered between two bases. Inserting a separator between and around every
//! base turns both kinds of center into a single index:
//!
//! ```text
//! input:        A   C   G   T
//! interleaved:  # A # C # G # T #
//! index:        0 1 2 3 4 5 6 7 8
//! ```
//!
//! An input of length `n` becomes `2n + 1` symbols. Even indices always hold
//! the separator and odd index `2k + 1` holds input base `k`, so every index
//! has a mirror about any center and every span that starts and ends on a
//! separator maps back to a contiguous slice of the input.

use crate::alphabet::Symbol;
use crate::error::Result;

/// Returns the interleaved length for an input of `sequence_len` bases.
///
/// # Examples
///
/// ```rust
/// use helixscan::interleave::interleaved_len;
///
/// assert_eq!(interleaved_len(0), 1);
/// assert_eq!(interleaved_len(4), 9);
/// ```
#[inline]
pub const fn interleaved_len(sequence_len: usize) -> usize {
    2 * sequence_len + 1
}

/// An input sequence with separators between and around every base.
///
/// Immutable once built; the radius passes only read it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interleaved {
    symbols: Vec<Symbol>,
}

impl Interleaved {
    /// Validates `sequence` and builds its interleaved form.
    ///
    /// Every byte is checked before anything is returned, so a single invalid
    /// base rejects the whole input.
    ///
    /// # Errors
    ///
    /// [`HelixError::InvalidSymbol`](crate::error::HelixError::InvalidSymbol)
    /// for the first byte that is not `A`, `C`, `G` or `T`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use helixscan::interleave::Interleaved;
    ///
    /// let seq = Interleaved::from_ascii(b"AC").unwrap();
    /// assert_eq!(seq.to_ascii(), b"#A#C#");
    /// assert_eq!(seq.original_len(), 2);
    /// ```
    pub fn from_ascii(sequence: &[u8]) -> Result<Self> {
        let mut symbols = Vec::with_capacity(interleaved_len(sequence.len()));
        symbols.push(Symbol::Separator);
        for (position, &byte) in sequence.iter().enumerate() {
            symbols.push(Symbol::from_ascii(byte, position)?);
            symbols.push(Symbol::Separator);
        }
        Ok(Self { symbols })
    }

    /// Number of interleaved positions (`2n + 1`, never zero).
    #[inline]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always `false`: even an empty input has one separator.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Length of the input this was built from.
    #[inline]
    pub fn original_len(&self) -> usize {
        self.symbols.len() / 2
    }

    /// The interleaved symbols.
    #[inline]
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// Returns `true` when the pair at distance `radius + 1` around `center`
    /// lies inside the sequence.
    #[inline]
    pub(crate) fn can_extend(&self, center: usize, radius: usize) -> bool {
        radius < center && center + radius + 1 < self.symbols.len()
    }

    /// Returns `true` when the pair at distance `radius + 1` around `center`
    /// is in bounds and complementary.
    #[inline]
    pub(crate) fn pairs_at(&self, center: usize, radius: usize) -> bool {
        #[cfg(test)]
        PAIR_CHECKS.with(|checks| checks.set(checks.get() + 1));

        self.can_extend(center, radius)
            && crate::alphabet::pairs(
                self.symbols[center - radius - 1],
                self.symbols[center + radius + 1],
            )
    }

    /// Maps the interleaved span `[center - radius, center + radius]` back to
    /// `(start, len)` in input coordinates.
    ///
    /// Spans produced by the radius passes always start and end on a
    /// separator, so dropping the separators leaves exactly `radius` bases.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use helixscan::interleave::Interleaved;
    ///
    /// let seq = Interleaved::from_ascii(b"CAGC").unwrap();
    /// // "#C#A#G#" centered on A (index 3) with radius 3
    /// assert_eq!(seq.original_span(3, 3), (0, 3));
    /// ```
    #[inline]
    pub fn original_span(&self, center: usize, radius: usize) -> (usize, usize) {
        debug_assert!(radius <= center && center + radius < self.symbols.len());
        ((center - radius) / 2, radius)
    }

    /// Drops separators and returns the bases as ASCII.
    pub fn detransform(&self) -> Vec<u8> {
        self.symbols
            .iter()
            .filter(|s| s.is_base())
            .map(|s| s.to_ascii())
            .collect()
    }

    /// ASCII rendering including separators, mostly for diagnostics.
    pub fn to_ascii(&self) -> Vec<u8> {
        self.symbols.iter().map(|s| s.to_ascii()).collect()
    }
}

#[cfg(test)]
thread_local! {
    static PAIR_CHECKS: std::cell::Cell<usize> = const { std::cell::Cell::new(0) };
}

/// Pair checks made on this thread so far.
#[cfg(test)]
pub(crate) fn pair_checks() -> usize {
    PAIR_CHECKS.with(|checks| checks.get())
}
